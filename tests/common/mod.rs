// Shared fixtures for traitmap integration tests
#![allow(dead_code)]

use std::path::{Path, PathBuf};

use tempfile::TempDir;
use traitmap::{AssessmentItem, Factor, ItemCatalog, Keying, Responses};

/// `per_factor` items per factor, all with the given keying.
pub fn uniform_catalog(per_factor: usize, keying: Keying) -> ItemCatalog {
    let items = Factor::ALL
        .iter()
        .flat_map(|factor| {
            (1..=per_factor).map(move |n| {
                AssessmentItem::new(
                    format!("{}{}", factor.as_str(), n),
                    format!("Statement {} about {}", n, factor),
                    *factor,
                    keying,
                )
            })
        })
        .collect();
    ItemCatalog::new(items).expect("uniform catalog is valid")
}

/// Same rating for every item of the catalog.
pub fn answer_all(catalog: &ItemCatalog, rating: i64) -> Responses {
    catalog
        .all_items()
        .iter()
        .map(|item| (item.id.as_str(), rating))
        .collect()
}

/// Rating chosen per item by its factor.
pub fn answer_by_factor(catalog: &ItemCatalog, rating: impl Fn(Factor) -> i64) -> Responses {
    catalog
        .all_items()
        .iter()
        .map(|item| (item.id.as_str(), rating(item.factor)))
        .collect()
}

/// JSON object text for a response mapping.
pub fn responses_json(responses: &Responses) -> String {
    serde_json::to_string_pretty(responses).expect("responses serialize")
}

/// Write `contents` to `name` inside `dir`, returning the full path.
pub fn write_fixture(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("write fixture");
    path
}

pub fn traitmap_cmd(cwd: &Path) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(env!("CARGO_BIN_EXE_traitmap"));
    cmd.current_dir(cwd).env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}
