use anyhow::{Context, Result};
use std::path::Path;

use crate::catalog::load_catalog;
use crate::formatting::{create_formatter, FormattingConfig};

/// Load `path` and report every problem, or a one-line summary when valid.
pub fn validate_catalog_file(path: &Path) -> Result<()> {
    let catalog = load_catalog(path)
        .with_context(|| format!("Catalog {} is invalid", path.display()))?;

    let f = create_formatter(FormattingConfig::from_env());
    let counts = catalog
        .factor_counts()
        .into_iter()
        .map(|(factor, n)| format!("{factor}: {n}"))
        .collect::<Vec<_>>()
        .join(", ");
    println!(
        "{} {} is valid ({} items; {})",
        f.success(&f.emoji("✓", "[OK]")),
        path.display(),
        catalog.len(),
        counts
    );
    Ok(())
}
