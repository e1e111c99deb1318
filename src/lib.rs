pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::presenter::{StdoutPresenter, TracingPresenter};
pub use core::{announcer::AnnouncementService, engine::AnnouncerEngine};
pub use domain::model::{Announcement, LessonCatalog, OutputFormat};
pub use utils::error::{AnnounceError, Result};
