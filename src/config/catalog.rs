use crate::domain::model::LessonCatalog;
use crate::utils::error::{AnnounceError, Result};
use crate::utils::validation::{validate_non_empty_string, Validate};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// TOML shape of an injected catalog file:
///
/// ```toml
/// lessons = ["Services", "Routing"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    pub lessons: Vec<String>,
}

impl CatalogFile {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let file: CatalogFile = toml::from_str(&content)?;
        file.validate()?;
        Ok(file)
    }

    pub fn into_catalog(self) -> LessonCatalog {
        LessonCatalog::new(self.lessons)
    }
}

impl Validate for CatalogFile {
    fn validate(&self) -> Result<()> {
        if self.lessons.is_empty() {
            return Err(AnnounceError::ConfigError {
                message: "Catalog must contain at least one lesson".to_string(),
            });
        }

        for (i, lesson) in self.lessons.iter().enumerate() {
            validate_non_empty_string(&format!("lessons[{}]", i), lesson)?;
        }

        Ok(())
    }
}

/// Resolves the catalog for this run: the file at `path` when given, the
/// built-in list otherwise.
pub fn load_catalog(path: Option<&str>) -> Result<LessonCatalog> {
    match path {
        Some(path) => {
            tracing::debug!("Loading lesson catalog from {}", path);
            Ok(CatalogFile::from_file(path)?.into_catalog())
        }
        None => Ok(LessonCatalog::default()),
    }
}
