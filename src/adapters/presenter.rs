use crate::domain::model::{Announcement, OutputFormat};
use crate::domain::ports::Presenter;
use crate::utils::error::Result;

/// Prints the announcement to stdout, either as the bare message or as a
/// JSON object. This replaces the blocking dialog of the original UI.
#[derive(Debug, Clone)]
pub struct StdoutPresenter {
    format: OutputFormat,
}

impl StdoutPresenter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }
}

impl Presenter for StdoutPresenter {
    fn present(&self, announcement: &Announcement) -> Result<()> {
        match self.format {
            OutputFormat::Plain => println!("{}", announcement.message),
            OutputFormat::Json => println!("{}", serde_json::to_string(announcement)?),
        }
        Ok(())
    }
}

/// Emits the announcement as a log line instead of printing it. Useful
/// when the announcer is embedded in a larger host.
#[derive(Debug, Clone, Default)]
pub struct TracingPresenter;

impl Presenter for TracingPresenter {
    fn present(&self, announcement: &Announcement) -> Result<()> {
        tracing::info!(
            lesson = %announcement.lesson,
            day = announcement.day.as_deref().unwrap_or(""),
            "{}",
            announcement.message
        );
        Ok(())
    }
}
