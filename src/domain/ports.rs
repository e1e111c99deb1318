use crate::domain::model::Announcement;
use crate::utils::error::Result;

/// Output port for delivering an announcement to the user. The original
/// surface was a blocking modal dialog; anything that can show a line of
/// text can stand in.
pub trait Presenter: Send + Sync {
    fn present(&self, announcement: &Announcement) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn lesson(&self) -> Option<&str>;
    fn day(&self) -> Option<&str>;
    fn catalog_path(&self) -> Option<&str>;
    fn format(&self) -> &str;
}
