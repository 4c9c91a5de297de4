use super::factor::Factor;
use super::rating::Rating;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Scoring polarity of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Keying {
    /// Agreement raises the factor score.
    #[serde(alias = "+")]
    Positive,
    /// Reverse-keyed: the rating is reflected before aggregation.
    #[serde(alias = "-")]
    Negative,
}

impl Keying {
    pub fn as_str(self) -> &'static str {
        match self {
            Keying::Positive => "positive",
            Keying::Negative => "negative",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "positive" | "+" => Some(Keying::Positive),
            "negative" | "-" | "reverse" => Some(Keying::Negative),
            _ => None,
        }
    }

    /// Points a rating contributes to its factor's raw score.
    pub fn contribution(self, rating: Rating) -> u32 {
        match self {
            Keying::Positive => rating.value() as u32,
            Keying::Negative => rating.reversed().value() as u32,
        }
    }
}

impl fmt::Display for Keying {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single question of the battery. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentItem {
    pub id: String,
    pub text: String,
    pub factor: Factor,
    pub keying: Keying,
}

impl AssessmentItem {
    pub fn new(
        id: impl Into<String>,
        text: impl Into<String>,
        factor: Factor,
        keying: Keying,
    ) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            factor,
            keying,
        }
    }

    pub fn is_reverse_keyed(&self) -> bool {
        self.keying == Keying::Negative
    }

    pub fn contribution(&self, rating: Rating) -> u32 {
        self.keying.contribution(rating)
    }
}
