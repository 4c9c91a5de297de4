use anyhow::Result;
use std::path::PathBuf;

use super::{resolve_catalog, resolve_config};
use crate::core::{AssessmentItem, Factor};
use crate::formatting::FormattingConfig;
use crate::io::{create_writer, OutputFormat};

#[derive(Debug, Clone)]
pub struct CatalogListConfig {
    pub catalog: Option<PathBuf>,
    pub factor: Option<Factor>,
    pub format: OutputFormat,
    pub plain: bool,
}

pub fn list_catalog(config: CatalogListConfig) -> Result<()> {
    let settings = resolve_config(None)?;
    let catalog = resolve_catalog(config.catalog, &settings)?;

    let items: Vec<&AssessmentItem> = match config.factor {
        Some(factor) => catalog.items_for_factor(factor),
        None => catalog.all_items().iter().collect(),
    };

    let formatting = FormattingConfig::resolve(
        config.plain,
        settings.output.as_ref().and_then(|o| o.use_color),
    );
    create_writer(config.format, std::io::stdout(), formatting).write_catalog(&items)
}
