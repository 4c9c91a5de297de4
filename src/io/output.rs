use crate::core::{AssessmentItem, Rating};
use crate::formatting::{percentile_bar, FormattingConfig, OutputFormatter, PlainFormatter};
use crate::report::AssessmentReport;
use crate::scoring::factor_info;
use clap::ValueEnum;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Terminal,
    Json,
    Markdown,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "terminal" => Some(Self::Terminal),
            "json" => Some(Self::Json),
            "markdown" | "md" => Some(Self::Markdown),
            _ => None,
        }
    }
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &AssessmentReport) -> anyhow::Result<()>;
    fn write_catalog(&mut self, items: &[&AssessmentItem]) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_json<T: Serialize + ?Sized>(&mut self, value: &T) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        writeln!(self.writer, "{json}")?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &AssessmentReport) -> anyhow::Result<()> {
        self.write_json(report)
    }

    fn write_catalog(&mut self, items: &[&AssessmentItem]) -> anyhow::Result<()> {
        self.write_json(items)
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_header(&mut self, report: &AssessmentReport) -> anyhow::Result<()> {
        writeln!(self.writer, "# Personality Assessment Report")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {}",
            report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer)?;
        writeln!(self.writer, "## Archetype: {}", report.archetype_label)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_factor_table(&mut self, report: &AssessmentReport) -> anyhow::Result<()> {
        writeln!(self.writer, "| Factor | Raw | Percentile | Band |")?;
        writeln!(self.writer, "|--------|-----|------------|------|")?;
        for row in &report.factors {
            writeln!(
                self.writer,
                "| {} | {} / {} | {}% | {} |",
                row.name,
                row.raw,
                row.max_possible,
                row.percentile,
                row.band.label()
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_interpretations(&mut self, report: &AssessmentReport) -> anyhow::Result<()> {
        writeln!(self.writer, "## Interpretation")?;
        writeln!(self.writer)?;
        for row in &report.factors {
            writeln!(self.writer, "### {}", row.name)?;
            writeln!(self.writer)?;
            writeln!(self.writer, "_{}_", row.description)?;
            writeln!(self.writer)?;
            writeln!(self.writer, "**{}.** {}", row.band.label(), row.interpretation)?;
            writeln!(self.writer)?;
        }
        Ok(())
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &AssessmentReport) -> anyhow::Result<()> {
        self.write_header(report)?;
        self.write_factor_table(report)?;
        self.write_interpretations(report)?;
        Ok(())
    }

    fn write_catalog(&mut self, items: &[&AssessmentItem]) -> anyhow::Result<()> {
        writeln!(self.writer, "| Id | Factor | Keying | Statement |")?;
        writeln!(self.writer, "|----|--------|--------|-----------|")?;
        for item in items {
            writeln!(
                self.writer,
                "| {} | {} | {} | {} |",
                item.id,
                factor_info(item.factor).name,
                item.keying,
                item.text
            )?;
        }
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
    formatter: Box<dyn OutputFormatter>,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, formatter: Box<dyn OutputFormatter>) -> Self {
        Self { writer, formatter }
    }

    pub fn plain(writer: W) -> Self {
        Self::new(writer, Box::new(PlainFormatter))
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &AssessmentReport) -> anyhow::Result<()> {
        let f = &self.formatter;
        writeln!(self.writer, "{}", f.header("Personality Assessment Report"))?;
        writeln!(self.writer, "{}", f.header("============================="))?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "{} Archetype: {}",
            f.emoji("🏆", "[ARCHETYPE]"),
            f.bold(&report.archetype_label)
        )?;
        writeln!(self.writer)?;

        for row in &report.factors {
            let (emoji, fallback) = row.band.marker();
            writeln!(
                self.writer,
                "  {} {:<20} {} {:>3}%  {}",
                f.emoji(emoji, fallback),
                row.name,
                percentile_bar(row.percentile),
                row.percentile,
                f.band(row.band, row.band.label())
            )?;
            writeln!(self.writer, "      {}", f.dim(&row.interpretation))?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_catalog(&mut self, items: &[&AssessmentItem]) -> anyhow::Result<()> {
        let f = &self.formatter;
        for item in items {
            let key = if item.is_reverse_keyed() { "(-)" } else { "(+)" };
            writeln!(
                self.writer,
                "{:<6} {} {:<20} {}",
                f.bold(&item.id),
                key,
                factor_info(item.factor).name,
                item.text
            )?;
        }
        writeln!(self.writer)?;
        let scale = Rating::all()
            .map(|r| format!("{} {}", r, r.label()))
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(self.writer, "{}", f.dim(&format!("Scale: {scale}")))?;
        writeln!(self.writer, "{}", f.dim(&format!("{} item(s)", items.len())))?;
        Ok(())
    }
}

pub fn create_writer<W: Write + 'static>(
    format: OutputFormat,
    writer: W,
    formatting: FormattingConfig,
) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(
            writer,
            crate::formatting::create_formatter(formatting),
        )),
    }
}
