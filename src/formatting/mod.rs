use colored::*;
use std::env;
use std::io::IsTerminal;

use crate::scoring::InterpretationBand;

const BAR_WIDTH: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn from_flag(use_color: Option<bool>) -> Self {
        match use_color {
            Some(true) => Self::Always,
            Some(false) => Self::Never,
            None => Self::Auto,
        }
    }

    pub fn should_use_color(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => detect_terminal_support(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormattingConfig {
    pub color: ColorMode,
    /// Band markers as emoji rather than ASCII
    pub emoji: bool,
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
            emoji: true,
        }
    }
}

impl FormattingConfig {
    pub fn new(color: ColorMode, emoji: bool) -> Self {
        Self { color, emoji }
    }

    /// Defaults adjusted by `NO_COLOR`, `CLICOLOR` and `CLICOLOR_FORCE`.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        // no-color.org
        if env::var("NO_COLOR").is_ok() {
            config.color = ColorMode::Never;
        }

        if let Ok(val) = env::var("CLICOLOR") {
            if val == "0" {
                config.color = ColorMode::Never;
            }
        }

        if let Ok(val) = env::var("CLICOLOR_FORCE") {
            if val == "1" {
                config.color = ColorMode::Always;
            }
        }

        if config.color == ColorMode::Auto && !detect_terminal_support() {
            config.emoji = false;
        }

        config
    }

    /// ASCII-only, no colors, no emoji
    pub fn plain() -> Self {
        Self {
            color: ColorMode::Never,
            emoji: false,
        }
    }

    /// `--plain` wins, then the config file's `use_color`, then the environment.
    pub fn resolve(plain: bool, use_color: Option<bool>) -> Self {
        if plain {
            return Self::plain();
        }
        match use_color {
            Some(_) => Self::new(ColorMode::from_flag(use_color), true),
            None => Self::from_env(),
        }
    }
}

pub trait OutputFormatter {
    fn header(&self, text: &str) -> String;
    fn bold(&self, text: &str) -> String;
    fn dim(&self, text: &str) -> String;
    fn success(&self, text: &str) -> String;
    fn emoji(&self, emoji: &str, fallback: &str) -> String;
    /// Color `text` by the strength of `band`.
    fn band(&self, band: InterpretationBand, text: &str) -> String;
}

pub struct ColoredFormatter {
    config: FormattingConfig,
    enabled: bool,
}

impl ColoredFormatter {
    pub fn new(config: FormattingConfig) -> Self {
        let enabled = config.color.should_use_color();
        colored::control::set_override(enabled);
        Self { config, enabled }
    }

    fn paint(&self, text: &str, style: impl FnOnce(&str) -> ColoredString) -> String {
        if self.enabled {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }
}

impl OutputFormatter for ColoredFormatter {
    fn header(&self, text: &str) -> String {
        self.paint(text, |t| t.blue().bold())
    }

    fn bold(&self, text: &str) -> String {
        self.paint(text, |t| t.bold())
    }

    fn dim(&self, text: &str) -> String {
        self.paint(text, |t| t.dimmed())
    }

    fn success(&self, text: &str) -> String {
        self.paint(text, |t| t.green())
    }

    fn emoji(&self, emoji: &str, fallback: &str) -> String {
        if self.config.emoji {
            emoji.to_string()
        } else {
            fallback.to_string()
        }
    }

    fn band(&self, band: InterpretationBand, text: &str) -> String {
        match band {
            InterpretationBand::StrongPreference => self.paint(text, |t| t.green().bold()),
            InterpretationBand::ModerateTendency => self.paint(text, |t| t.yellow()),
            InterpretationBand::LowerExpression => self.paint(text, |t| t.cyan()),
        }
    }
}

pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn header(&self, text: &str) -> String {
        text.to_string()
    }

    fn bold(&self, text: &str) -> String {
        text.to_string()
    }

    fn dim(&self, text: &str) -> String {
        text.to_string()
    }

    fn success(&self, text: &str) -> String {
        text.to_string()
    }

    fn emoji(&self, _emoji: &str, fallback: &str) -> String {
        fallback.to_string()
    }

    fn band(&self, _band: InterpretationBand, text: &str) -> String {
        text.to_string()
    }
}

pub fn create_formatter(config: FormattingConfig) -> Box<dyn OutputFormatter> {
    if config == FormattingConfig::plain() {
        Box::new(PlainFormatter)
    } else {
        Box::new(ColoredFormatter::new(config))
    }
}

/// Fixed-width bar such as `[##########----------]` for a 0-100 value.
pub fn percentile_bar(percentile: u8) -> String {
    let filled = (percentile.min(100) as usize * BAR_WIDTH + 50) / 100;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

fn detect_terminal_support() -> bool {
    if let Ok(term) = env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }
    std::io::stdout().is_terminal()
}
