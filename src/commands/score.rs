use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use super::{resolve_catalog, resolve_config};
use crate::config::TraitmapConfig;
use crate::core::Responses;
use crate::formatting::FormattingConfig;
use crate::io::{self, create_writer, OutputFormat};
use crate::report::{AssessmentReport, ReportSettings};
use crate::scoring::score;

#[derive(Debug, Clone)]
pub struct ScoreConfig {
    pub responses: PathBuf,
    pub catalog: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub plain: bool,
}

pub fn handle_score(config: ScoreConfig) -> Result<()> {
    let settings = resolve_config(config.config.as_deref())?;
    let catalog = resolve_catalog(config.catalog.clone(), &settings)?;

    let contents = io::read_file(&config.responses)?;
    let responses = Responses::from_json_str(&contents)
        .with_context(|| format!("Invalid responses file {}", config.responses.display()))?;

    let scores = score(&responses, &catalog).map_err(|e| {
        let message = if e.is_user_fixable() {
            "Cannot score assessment; answer every catalog item with a whole number from 1 to 5"
        } else {
            "Cannot score assessment"
        };
        anyhow::Error::new(e).context(message)
    })?;
    let report = AssessmentReport::build(&scores, &ReportSettings::from_config(&settings));
    tracing::info!(archetype = %report.archetype_label, "Scored assessment");

    let format = select_format(config.format, &settings);
    let formatting = FormattingConfig::resolve(
        config.plain || config.output.is_some(),
        settings.output.as_ref().and_then(|o| o.use_color),
    );

    let sink: Box<dyn Write> = match &config.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("Failed to create {}", path.display()))?,
        )),
        None => Box::new(std::io::stdout()),
    };
    let mut writer = create_writer(format, sink, formatting);
    writer.write_report(&report)?;

    if let Some(path) = &config.output {
        eprintln!("Report written to {}", path.display());
    }
    Ok(())
}

/// CLI flag, then `[output].default_format`, then terminal.
fn select_format(cli: Option<OutputFormat>, settings: &TraitmapConfig) -> OutputFormat {
    cli.or_else(|| settings.default_format().and_then(OutputFormat::parse))
        .unwrap_or(OutputFormat::Terminal)
}
