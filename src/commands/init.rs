use crate::config::CONFIG_FILE_NAME;
use crate::io;
use anyhow::Result;
use std::path::{Path, PathBuf};

const DEFAULT_CONFIG: &str = r#"# Traitmap Configuration

[archetype]
# Top factor percentile needed for "The <Factor> Specialist"
specialist_threshold = 80
# Second factor percentile needed for "The <A>-<B> Innovator"
innovator_threshold = 80

[interpretation]
strong_threshold = 70
moderate_threshold = 30

# [catalog]
# path = "my-catalog.toml"

[output]
default_format = "terminal"
"#;

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);
    write_default_config(&config_path, force)?;
    println!("Created {} configuration file", CONFIG_FILE_NAME);
    Ok(())
}

pub(crate) fn write_default_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }
    io::write_file(path, DEFAULT_CONFIG)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{load_config_strict, parse_and_validate_config, TraitmapConfig};
    use tempfile::TempDir;

    #[test]
    fn test_default_config_matches_defaults() {
        let config = parse_and_validate_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(
            config.archetype_thresholds(),
            TraitmapConfig::default().archetype_thresholds()
        );
        assert_eq!(config.default_format(), Some("terminal"));
    }

    #[test]
    fn test_refuses_overwrite_without_force() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "# mine").unwrap();

        assert!(write_default_config(&path, false).is_err());
        write_default_config(&path, true).unwrap();
        assert!(load_config_strict(&path).is_ok());
    }
}
