//! Per-factor interpretation bands and display metadata.

use serde::Serialize;

use crate::config::InterpretationThresholds;
use crate::core::Factor;

/// Display name and one-line description of a factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FactorInfo {
    pub name: &'static str,
    pub description: &'static str,
}

pub fn factor_info(factor: Factor) -> FactorInfo {
    match factor {
        Factor::Openness => FactorInfo {
            name: "Openness",
            description: "Curiosity, creativity and appetite for new ideas and approaches",
        },
        Factor::Conscientiousness => FactorInfo {
            name: "Conscientiousness",
            description: "Organization, dependability and follow-through on commitments",
        },
        Factor::Extraversion => FactorInfo {
            name: "Extraversion",
            description: "Energy drawn from interaction, assertiveness and sociability",
        },
        Factor::Agreeableness => FactorInfo {
            name: "Agreeableness",
            description: "Cooperation, empathy and consideration for others",
        },
        Factor::Stability => FactorInfo {
            name: "Emotional Stability",
            description: "Composure under pressure and resilience to setbacks",
        },
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InterpretationBand {
    StrongPreference,
    ModerateTendency,
    LowerExpression,
}

impl InterpretationBand {
    pub fn classify(percentile: u8, thresholds: &InterpretationThresholds) -> Self {
        if percentile >= thresholds.strong_threshold {
            InterpretationBand::StrongPreference
        } else if percentile >= thresholds.moderate_threshold {
            InterpretationBand::ModerateTendency
        } else {
            InterpretationBand::LowerExpression
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            InterpretationBand::StrongPreference => "Strong Preference",
            InterpretationBand::ModerateTendency => "Moderate Tendency",
            InterpretationBand::LowerExpression => "Lower Expression",
        }
    }

    /// Emoji and plain-text fallback for terminal output.
    pub fn marker(self) -> (&'static str, &'static str) {
        match self {
            InterpretationBand::StrongPreference => ("⭐", "[+]"),
            InterpretationBand::ModerateTendency => ("⚖️", "[=]"),
            InterpretationBand::LowerExpression => ("🎯", "[-]"),
        }
    }

    /// One-sentence reading of `percentile` for `factor`.
    pub fn describe(self, factor: Factor, percentile: u8) -> String {
        let name = factor_info(factor).name.to_lowercase();
        match self {
            InterpretationBand::StrongPreference => format!(
                "You score higher than {}% of professionals in {}.",
                percentile, name
            ),
            InterpretationBand::ModerateTendency => {
                format!("You show balanced levels of {}.", name)
            }
            InterpretationBand::LowerExpression => {
                format!("You have a more reserved expression of {}.", name)
            }
        }
    }
}
