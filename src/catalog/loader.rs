use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::validation::{validate_raw_items, RawItem};
use super::ItemCatalog;
use crate::effects::run_validation;
use crate::errors::{CatalogError, ConfigurationError};

/// On-disk catalog encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Toml,
    Json,
    Yaml,
}

impl CatalogFormat {
    /// Pick a format from a file extension, defaulting to TOML.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase())
            .as_deref()
        {
            Some("json") => CatalogFormat::Json,
            Some("yaml") | Some("yml") => CatalogFormat::Yaml,
            _ => CatalogFormat::Toml,
        }
    }
}

/// Top-level shape of a catalog file: `items = [ { id, text, factor, keying } ]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogFile {
    #[serde(default)]
    pub items: Vec<RawItem>,
}

/// Where the catalog for a run comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    Builtin,
    File(PathBuf),
}

impl CatalogSource {
    pub fn from_option(path: Option<PathBuf>) -> Self {
        path.map_or(CatalogSource::Builtin, CatalogSource::File)
    }

    /// Load the catalog this source names.
    pub fn load(&self) -> Result<ItemCatalog, CatalogError> {
        match self {
            CatalogSource::Builtin => ItemCatalog::builtin().cloned(),
            CatalogSource::File(path) => load_catalog(path),
        }
    }
}

/// Parse and validate a catalog from its textual form.
pub fn parse_catalog(contents: &str, format: CatalogFormat) -> Result<ItemCatalog, CatalogError> {
    let file = decode(contents, format).map_err(CatalogError::single)?;
    let items = run_validation(validate_raw_items(&file.items)).map_err(CatalogError::new)?;
    ItemCatalog::new(items)
}

/// Read, parse and validate a catalog file.
pub fn load_catalog(path: &Path) -> Result<ItemCatalog, CatalogError> {
    let contents = fs::read_to_string(path)
        .map_err(|e| CatalogError::single(ConfigurationError::read(path, e.to_string())))?;

    let catalog = parse_catalog(&contents, CatalogFormat::from_path(path))?;
    tracing::info!(
        path = %path.display(),
        items = catalog.len(),
        "Loaded item catalog"
    );
    Ok(catalog)
}

fn decode(contents: &str, format: CatalogFormat) -> Result<CatalogFile, ConfigurationError> {
    match format {
        CatalogFormat::Toml => {
            toml::from_str(contents).map_err(|e| ConfigurationError::parse(e.to_string()))
        }
        CatalogFormat::Json => {
            serde_json::from_str(contents).map_err(|e| ConfigurationError::parse(e.to_string()))
        }
        CatalogFormat::Yaml => {
            serde_yaml::from_str(contents).map_err(|e| ConfigurationError::parse(e.to_string()))
        }
    }
}
