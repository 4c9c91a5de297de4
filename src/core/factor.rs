//! The closed set of personality factors scored by traitmap.
//!
//! Declaration order is significant: it is the canonical iteration order of
//! [`FactorScores`](crate::scoring::FactorScores) and the tie-break order when
//! ranking factors with equal percentiles.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the five fixed traits measured by the assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Factor {
    Openness,
    Conscientiousness,
    Extraversion,
    Agreeableness,
    Stability,
}

impl Factor {
    /// All factors in canonical order.
    pub const ALL: [Factor; 5] = [
        Factor::Openness,
        Factor::Conscientiousness,
        Factor::Extraversion,
        Factor::Agreeableness,
        Factor::Stability,
    ];

    /// Lowercase key used in catalog files and response reports.
    pub fn as_str(self) -> &'static str {
        match self {
            Factor::Openness => "openness",
            Factor::Conscientiousness => "conscientiousness",
            Factor::Extraversion => "extraversion",
            Factor::Agreeableness => "agreeableness",
            Factor::Stability => "stability",
        }
    }

    /// Key with its first character uppercased, as used in archetype labels.
    pub fn title(self) -> String {
        capitalize(self.as_str())
    }

    /// Position in canonical order.
    pub fn ordinal(self) -> usize {
        self as usize
    }

    /// Parse a factor key, case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "openness" => Some(Factor::Openness),
            "conscientiousness" => Some(Factor::Conscientiousness),
            "extraversion" => Some(Factor::Extraversion),
            "agreeableness" => Some(Factor::Agreeableness),
            "stability" => Some(Factor::Stability),
            _ => None,
        }
    }
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Factor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Factor::parse(s).ok_or_else(|| {
            format!(
                "Invalid factor: '{}'. Valid options: openness, conscientiousness, extraversion, agreeableness, stability",
                s
            )
        })
    }
}

/// Uppercase the first character, leaving the rest untouched.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
