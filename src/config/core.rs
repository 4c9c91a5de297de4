use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::thresholds::{ArchetypeThresholds, InterpretationThresholds};

/// Root configuration structure for traitmap
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct TraitmapConfig {
    /// Archetype derivation thresholds
    #[serde(default)]
    pub archetype: Option<ArchetypeThresholds>,

    /// Interpretation band thresholds
    #[serde(default)]
    pub interpretation: Option<InterpretationThresholds>,

    /// Item catalog selection
    #[serde(default)]
    pub catalog: Option<CatalogConfig>,

    /// Output configuration
    #[serde(default)]
    pub output: Option<OutputConfig>,
}

impl TraitmapConfig {
    pub fn archetype_thresholds(&self) -> ArchetypeThresholds {
        self.archetype.unwrap_or_default()
    }

    pub fn interpretation_thresholds(&self) -> InterpretationThresholds {
        self.interpretation.unwrap_or_default()
    }

    /// Catalog path from the config file, if one is set.
    pub fn catalog_path(&self) -> Option<PathBuf> {
        self.catalog.as_ref().and_then(|c| c.path.clone())
    }

    pub fn default_format(&self) -> Option<&str> {
        self.output
            .as_ref()
            .and_then(|o| o.default_format.as_deref())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Catalog file (TOML, JSON or YAML); the built-in catalog when unset
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct OutputConfig {
    pub default_format: Option<String>,
    /// Enable colored output (default: auto-detect based on TTY)
    #[serde(default)]
    pub use_color: Option<bool>,
}
