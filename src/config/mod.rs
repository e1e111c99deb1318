pub mod catalog;
#[cfg(feature = "cli")]
pub mod cli;

pub use catalog::{load_catalog, CatalogFile};
#[cfg(feature = "cli")]
pub use cli::CliConfig;
