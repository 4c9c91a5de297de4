//! CLI command implementations.
//!
//! Each submodule handles one subcommand. Commands are the only place
//! (besides `io`) that writes to stdout; everything they call is pure or
//! returns its output.
//!
//! Available commands:
//! - **score**: Score a responses file and print a report
//! - **catalog**: List catalog items
//! - **validate-catalog**: Check a catalog file for problems
//! - **progress**: Summarize a saved session snapshot
//! - **init**: Write a default `.traitmap.toml`

pub mod catalog;
pub mod init;
pub mod progress;
pub mod score;
pub mod validate_catalog;

pub use catalog::{list_catalog, CatalogListConfig};
pub use init::init_config;
pub use progress::show_progress;
pub use score::{handle_score, ScoreConfig};
pub use validate_catalog::validate_catalog_file;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::catalog::{CatalogSource, ItemCatalog};
use crate::config::{load_config, load_config_strict, TraitmapConfig};

/// Explicit config path is strict; otherwise discover with defaults.
pub(crate) fn resolve_config(explicit: Option<&Path>) -> Result<TraitmapConfig> {
    match explicit {
        Some(path) => load_config_strict(path),
        None => Ok(load_config()),
    }
}

/// CLI catalog path wins over the config file; the built-in battery otherwise.
pub(crate) fn resolve_catalog(
    cli_path: Option<PathBuf>,
    config: &TraitmapConfig,
) -> Result<ItemCatalog> {
    let source = CatalogSource::from_option(cli_path.or_else(|| config.catalog_path()));
    let catalog = source.load().with_context(|| match &source {
        CatalogSource::Builtin => "Failed to load built-in catalog".to_string(),
        CatalogSource::File(path) => format!("Failed to load catalog {}", path.display()),
    })?;
    Ok(catalog)
}
