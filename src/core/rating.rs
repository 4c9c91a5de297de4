//! Likert ratings on the 1-5 agreement scale.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single validated answer on the five point scale.
///
/// Construction goes through [`Rating::new`] or `TryFrom<i64>`, so a `Rating`
/// in hand is always within `MIN..=MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Validate a raw integer rating.
    pub fn new(value: i64) -> Option<Self> {
        if (Self::MIN as i64..=Self::MAX as i64).contains(&value) {
            Some(Self(value as u8))
        } else {
            None
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Reflect about the scale midpoint (3): 1<->5, 2<->4.
    pub fn reversed(self) -> Self {
        Self(Self::MIN + Self::MAX - self.0)
    }

    /// Human-readable anchor for the rating.
    pub fn label(self) -> &'static str {
        match self.0 {
            1 => "Strongly Disagree",
            2 => "Disagree",
            3 => "Neutral",
            4 => "Agree",
            _ => "Strongly Agree",
        }
    }

    /// Every rating in ascending order.
    pub fn all() -> impl Iterator<Item = Rating> {
        (Self::MIN..=Self::MAX).map(Rating)
    }
}

impl TryFrom<i64> for Rating {
    type Error = i64;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Rating::new(value).ok_or(value)
    }
}

impl From<Rating> for i64 {
    fn from(rating: Rating) -> Self {
        rating.0 as i64
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
