use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use anyhow::Context;

use super::core::TraitmapConfig;
use super::validation::{
    validate_archetype_thresholds, validate_config_result, validate_interpretation_thresholds,
};

pub const CONFIG_FILE_NAME: &str = ".traitmap.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Pure function to read config file contents
pub(crate) fn read_config_file(path: &Path) -> Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse config from TOML, replacing invalid threshold sections with defaults.
pub fn parse_and_validate_config(contents: &str) -> Result<TraitmapConfig, String> {
    let mut config = toml::from_str::<TraitmapConfig>(contents)
        .map_err(|e| format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e))?;

    if validate_archetype_thresholds(config.archetype.as_ref()).is_failure() {
        log::warn!("Invalid archetype thresholds. Using defaults.");
        config.archetype = None;
    }

    if validate_interpretation_thresholds(config.interpretation.as_ref()).is_failure() {
        log::warn!("Invalid interpretation thresholds. Using defaults.");
        config.interpretation = None;
    }

    Ok(config)
}

/// Try loading config from a specific path, logging and skipping on failure
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<TraitmapConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("{}. Using defaults.", e);
            None
        }
    }
}

/// Only log actual errors, not "file not found"
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// `start` and its ancestors, nearest first, up to `max_depth` entries
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search `start` and its ancestors for `.traitmap.toml`.
pub fn load_config_from_dir(start: PathBuf) -> TraitmapConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            TraitmapConfig::default()
        })
}

/// Discover config from the current directory upwards; defaults if none.
pub fn load_config() -> TraitmapConfig {
    match std::env::current_dir() {
        Ok(dir) => load_config_from_dir(dir),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            TraitmapConfig::default()
        }
    }
}

/// Load an explicitly named config file. Any problem is an error.
pub fn load_config_strict(path: &Path) -> anyhow::Result<TraitmapConfig> {
    let contents = read_config_file(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let config = toml::from_str::<TraitmapConfig>(&contents)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;
    validate_config_result(&config)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use tempfile::TempDir;

    #[test]
    fn test_parse_full_config() {
        let config = parse_and_validate_config(indoc! {r#"
            [archetype]
            specialist_threshold = 75
            innovator_threshold = 70

            [interpretation]
            strong_threshold = 65

            [catalog]
            path = "items.json"

            [output]
            default_format = "json"
        "#})
        .unwrap();

        assert_eq!(config.archetype_thresholds().specialist_threshold, 75);
        assert_eq!(config.interpretation_thresholds().moderate_threshold, 30);
        assert_eq!(config.catalog_path(), Some(PathBuf::from("items.json")));
        assert_eq!(config.default_format(), Some("json"));
    }

    #[test]
    fn test_invalid_thresholds_fall_back_to_defaults() {
        let config = parse_and_validate_config(indoc! {r#"
            [interpretation]
            strong_threshold = 20
            moderate_threshold = 50
        "#})
        .unwrap();
        assert_eq!(config.interpretation, None);
        assert_eq!(config.interpretation_thresholds().strong_threshold, 70);
    }

    #[test]
    fn test_unknown_section_is_parse_error() {
        let err = parse_and_validate_config("[scoring]\nweight = 1").unwrap_err();
        assert!(err.contains(CONFIG_FILE_NAME));
    }

    #[test]
    fn test_directory_ancestors_stops_at_depth() {
        let dirs: Vec<PathBuf> = directory_ancestors(PathBuf::from("/a/b/c/d"), 3).collect();
        assert_eq!(
            dirs,
            vec![
                PathBuf::from("/a/b/c/d"),
                PathBuf::from("/a/b/c"),
                PathBuf::from("/a/b")
            ]
        );
    }

    #[test]
    fn test_discovers_config_in_parent_directory() {
        let root = TempDir::new().unwrap();
        fs::write(
            root.path().join(CONFIG_FILE_NAME),
            "[archetype]\nspecialist_threshold = 90\n",
        )
        .unwrap();
        let nested = root.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();

        let config = load_config_from_dir(nested);
        assert_eq!(config.archetype_thresholds().specialist_threshold, 90);
    }

    #[test]
    fn test_strict_load_rejects_invalid_values() {
        let root = TempDir::new().unwrap();
        let path = root.path().join("custom.toml");
        fs::write(&path, "[archetype]\ninnovator_threshold = 101\n").unwrap();

        let err = load_config_strict(&path).unwrap_err();
        assert!(err.to_string().contains("archetype.innovator_threshold"));
    }
}
