use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use super::{resolve_catalog, resolve_config};
use crate::io;
use crate::session::{AssessmentSession, SessionSnapshot};

pub fn show_progress(snapshot_path: &Path, catalog: Option<PathBuf>) -> Result<()> {
    let settings = resolve_config(None)?;
    let catalog = resolve_catalog(catalog, &settings)?;

    let contents = io::read_file(snapshot_path)?;
    let snapshot: SessionSnapshot = serde_json::from_str(&contents)
        .with_context(|| format!("Invalid session snapshot {}", snapshot_path.display()))?;
    let session = AssessmentSession::restore(&catalog, snapshot);

    let progress = session.progress(&catalog);
    println!(
        "Question {} of {} ({}%)",
        progress.question_number, progress.total, progress.percent
    );
    println!("Answered: {}/{}", progress.answered, progress.total);
    if session.is_paused() {
        println!("Status: paused");
    }

    let missing = session.missing_items(&catalog);
    if missing.is_empty() {
        println!("All items answered; ready to score.");
    } else {
        println!("Unanswered ({}): {}", missing.len(), missing.join(", "));
    }
    Ok(())
}
