//! Archetype derivation from ranked factor percentiles.
//!
//! Factors are ranked by percentile, highest first. Equal percentiles keep
//! canonical factor order (openness, conscientiousness, extraversion,
//! agreeableness, stability), so the label never depends on how the scores
//! were assembled.

use serde::Serialize;
use std::fmt;

use super::FactorScores;
use crate::config::ArchetypeThresholds;
use crate::core::Factor;

/// Categorical summary of a respondent's dominant factors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Archetype {
    /// Two factors at or above their thresholds.
    Innovator { primary: Factor, secondary: Factor },
    /// Only the top factor at or above its threshold.
    Specialist { primary: Factor },
    BalancedProfessional,
}

impl Archetype {
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Archetype::Innovator { primary, secondary } => {
                write!(f, "The {}-{} Innovator", primary.title(), secondary.title())
            }
            Archetype::Specialist { primary } => write!(f, "The {} Specialist", primary.title()),
            Archetype::BalancedProfessional => write!(f, "The Balanced Professional"),
        }
    }
}

/// `(factor, percentile)` pairs, highest percentile first, ties in canonical order.
pub fn rank_factors(scores: &FactorScores) -> Vec<(Factor, u8)> {
    let mut ranked: Vec<(Factor, u8)> = scores.iter().map(|s| (s.factor, s.percentile)).collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    ranked
}

/// Classify scores against explicit thresholds.
pub fn classify_archetype(scores: &FactorScores, thresholds: &ArchetypeThresholds) -> Archetype {
    let ranked = rank_factors(scores);
    let (highest, highest_pct) = ranked[0];
    let (second, second_pct) = ranked[1];

    let archetype = if highest_pct >= thresholds.specialist_threshold
        && second_pct >= thresholds.innovator_threshold
    {
        Archetype::Innovator {
            primary: highest,
            secondary: second,
        }
    } else if highest_pct >= thresholds.specialist_threshold {
        Archetype::Specialist { primary: highest }
    } else {
        Archetype::BalancedProfessional
    };

    tracing::debug!(
        highest = %highest,
        highest_pct,
        second = %second,
        second_pct,
        archetype = %archetype,
        "Derived archetype"
    );
    archetype
}

/// Archetype label with the default 80/80 thresholds.
pub fn derive_archetype(scores: &FactorScores) -> String {
    classify_archetype(scores, &ArchetypeThresholds::default()).to_string()
}
