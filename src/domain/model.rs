use crate::utils::error::AnnounceError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Built-in lesson list, in display order.
pub const DEFAULT_LESSONS: [&str; 9] = [
    "Services",
    "Routing",
    "Directives",
    "Review",
    "Firebase",
    "No server project",
    "Node",
    "Express",
    "Mongo",
];

/// Ordered, read-only list of lesson names. Fixed at construction; the
/// order is display-relevant but carries no other meaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonCatalog {
    lessons: Vec<String>,
}

impl LessonCatalog {
    pub fn new(lessons: Vec<String>) -> Self {
        Self { lessons }
    }

    pub fn lessons(&self) -> &[String] {
        &self.lessons
    }

    pub fn contains(&self, lesson: &str) -> bool {
        self.lessons.iter().any(|l| l == lesson)
    }

    pub fn len(&self) -> usize {
        self.lessons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lessons.is_empty()
    }
}

impl Default for LessonCatalog {
    fn default() -> Self {
        Self {
            lessons: DEFAULT_LESSONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// A formatted lesson/day status, ready for presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Announcement {
    pub lesson: String,
    pub day: Option<String>,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Plain,
    Json,
}

impl FromStr for OutputFormat {
    type Err = AnnounceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "plain" => Ok(OutputFormat::Plain),
            "json" => Ok(OutputFormat::Json),
            other => Err(AnnounceError::InvalidConfigValueError {
                field: "format".to_string(),
                value: other.to_string(),
                reason: "expected one of: plain, json".to_string(),
            }),
        }
    }
}
