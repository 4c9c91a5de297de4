// Core configuration types
mod core;
mod loader;
mod thresholds;
pub mod validation;

pub use core::{CatalogConfig, OutputConfig, TraitmapConfig};
pub use loader::{
    directory_ancestors, load_config, load_config_from_dir, load_config_strict,
    parse_and_validate_config, CONFIG_FILE_NAME,
};
pub use thresholds::{ArchetypeThresholds, InterpretationThresholds};
