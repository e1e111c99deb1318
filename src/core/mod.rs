pub mod announcer;
pub mod engine;

pub use crate::domain::model::{Announcement, LessonCatalog, OutputFormat};
pub use crate::domain::ports::{ConfigProvider, Presenter};
pub use crate::utils::error::Result;
