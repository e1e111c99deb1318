use crate::domain::model::OutputFormat;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_required_field, Validate};
use clap::Parser;
use std::str::FromStr;

#[derive(Debug, Clone, Parser)]
#[command(name = "lesson-announcer")]
#[command(about = "Announces whether a lesson is active on a given day")]
pub struct CliConfig {
    /// Lesson name to announce. Any string is accepted; it does not have
    /// to appear in the catalog.
    pub lesson: Option<String>,

    /// Day the lesson is scheduled for. Omit it (or pass an empty string)
    /// to get the "not active" message.
    #[arg(long)]
    pub day: Option<String>,

    /// TOML file overriding the built-in lesson catalog
    #[arg(long)]
    pub catalog: Option<String>,

    #[arg(long, default_value = "plain")]
    pub format: String,

    /// Print the catalog and exit
    #[arg(long)]
    pub list: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn lesson(&self) -> Option<&str> {
        self.lesson.as_deref()
    }

    fn day(&self) -> Option<&str> {
        self.day.as_deref()
    }

    fn catalog_path(&self) -> Option<&str> {
        self.catalog.as_deref()
    }

    fn format(&self) -> &str {
        &self.format
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if !self.list {
            validate_required_field("lesson", &self.lesson)?;
        }

        if let Some(path) = &self.catalog {
            validate_path("catalog", path)?;
        }

        OutputFormat::from_str(&self.format)?;

        Ok(())
    }
}
