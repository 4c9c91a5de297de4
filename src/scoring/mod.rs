//! The scoring engine: responses in, per-factor scores and an archetype out.
//!
//! Everything in this module is a pure function of its arguments. Scores are
//! recomputed from scratch from a complete response mapping; there is no
//! incremental update and no partial result.
//!
//! # Example
//!
//! ```rust
//! use traitmap::catalog::ItemCatalog;
//! use traitmap::core::Responses;
//! use traitmap::scoring::{derive_archetype, score};
//!
//! let catalog = ItemCatalog::builtin().unwrap();
//! let responses: Responses = catalog
//!     .all_items()
//!     .iter()
//!     .map(|item| (item.id.as_str(), 3))
//!     .collect();
//!
//! let scores = score(&responses, catalog).unwrap();
//! assert!(scores.iter().all(|s| s.percentile == 60));
//! assert_eq!(derive_archetype(&scores), "The Balanced Professional");
//! ```

pub mod archetype;
pub mod interpretation;

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::catalog::ItemCatalog;
use crate::core::{Factor, Rating, Responses};
use crate::errors::ScoringError;

pub use archetype::{classify_archetype, derive_archetype, rank_factors, Archetype};
pub use interpretation::{factor_info, FactorInfo, InterpretationBand};

/// Score for a single factor.
///
/// `percentile` is the raw score as a share of the maximum possible, scaled
/// to 0-100. It is a normalized ratio, not a rank against any reference
/// population; the name is kept because presentation layers display it that
/// way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactorScore {
    pub factor: Factor,
    /// Sum of item contributions, in `[item_count, 5 * item_count]`
    pub raw: u32,
    /// `5 * item_count`
    pub max_possible: u32,
    pub item_count: usize,
    pub percentile: u8,
}

impl FactorScore {
    pub fn from_raw(factor: Factor, raw: u32, item_count: usize) -> Self {
        let max_possible = Rating::MAX as u32 * item_count as u32;
        Self {
            factor,
            raw,
            max_possible,
            item_count,
            percentile: normalized_percentile(raw, max_possible),
        }
    }
}

/// Exactly one [`FactorScore`] per factor, iterated in canonical order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FactorScores {
    scores: BTreeMap<Factor, FactorScore>,
}

impl FactorScores {
    /// Assemble scores; `None` unless every factor appears exactly once.
    pub fn from_scores(scores: impl IntoIterator<Item = FactorScore>) -> Option<Self> {
        let mut map = BTreeMap::new();
        for score in scores {
            if map.insert(score.factor, score).is_some() {
                return None;
            }
        }
        (map.len() == Factor::ALL.len()).then_some(Self { scores: map })
    }

    pub fn get(&self, factor: Factor) -> &FactorScore {
        // Construction guarantees all five factors.
        &self.scores[&factor]
    }

    pub fn percentile(&self, factor: Factor) -> u8 {
        self.get(factor).percentile
    }

    pub fn iter(&self) -> impl Iterator<Item = &FactorScore> {
        self.scores.values()
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

/// `round(raw / max_possible * 100)`, rounding halves away from zero.
///
/// Computed in integer arithmetic so that exact halves (e.g. 21/40 = 52.5%)
/// always round up instead of depending on float representation.
pub fn normalized_percentile(raw: u32, max_possible: u32) -> u8 {
    debug_assert!(max_possible > 0, "normalizing against an empty maximum");
    debug_assert!(raw <= max_possible, "raw {raw} exceeds maximum {max_possible}");
    if max_possible == 0 {
        return 0;
    }
    let raw = raw.min(max_possible) as u64;
    let max = max_possible as u64;
    ((200 * raw + max) / (2 * max)) as u8
}

/// Score a complete response mapping against a catalog.
///
/// Fails with `IncompleteResponses` (listing every missing id in catalog
/// order) before any rating is checked, then with `InvalidRating` for the
/// first out-of-range rating in catalog order. Responses for ids outside the
/// catalog are ignored.
pub fn score(responses: &Responses, catalog: &ItemCatalog) -> Result<FactorScores, ScoringError> {
    let ratings = collect_ratings(responses, catalog)?;

    let scores = Factor::ALL.into_iter().map(|factor| {
        let items = catalog.items_for_factor(factor);
        let raw = items
            .iter()
            .map(|item| item.contribution(ratings[item.id.as_str()]))
            .sum();
        let score = FactorScore::from_raw(factor, raw, items.len());
        tracing::debug!(
            factor = %factor,
            raw = score.raw,
            max = score.max_possible,
            percentile = score.percentile,
            "Scored factor"
        );
        score
    });

    FactorScores::from_scores(scores).ok_or_else(|| {
        ScoringError::MalformedResponses("catalog did not cover every factor".to_string())
    })
}

fn collect_ratings<'a>(
    responses: &Responses,
    catalog: &'a ItemCatalog,
) -> Result<HashMap<&'a str, Rating>, ScoringError> {
    let missing: Vec<String> = catalog
        .all_items()
        .iter()
        .filter(|item| !responses.contains(&item.id))
        .map(|item| item.id.clone())
        .collect();

    if !missing.is_empty() {
        tracing::warn!(missing = missing.len(), "Refusing to score incomplete responses");
        return Err(ScoringError::IncompleteResponses { missing });
    }

    catalog
        .all_items()
        .iter()
        .map(|item| {
            if let Some(raw) = responses.unreadable(&item.id) {
                return Err(ScoringError::not_an_integer(&item.id, raw));
            }
            let value = responses.get(&item.id).unwrap_or_default();
            Rating::try_from(value)
                .map(|rating| (item.id.as_str(), rating))
                .map_err(|v| ScoringError::out_of_range(&item.id, v))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{AssessmentItem, Keying};
    use pretty_assertions::assert_eq;

    /// Two items per factor: one positive, one negative.
    fn mixed_catalog() -> ItemCatalog {
        let items = Factor::ALL
            .iter()
            .flat_map(|f| {
                let key = f.as_str();
                [
                    AssessmentItem::new(format!("{}+", key), "p", *f, Keying::Positive),
                    AssessmentItem::new(format!("{}-", key), "n", *f, Keying::Negative),
                ]
            })
            .collect();
        ItemCatalog::new(items).unwrap()
    }

    fn answer_all(catalog: &ItemCatalog, rating: i64) -> Responses {
        catalog
            .all_items()
            .iter()
            .map(|item| (item.id.as_str(), rating))
            .collect()
    }

    #[test]
    fn test_normalized_percentile_rounds_half_away_from_zero() {
        assert_eq!(normalized_percentile(36, 60), 60);
        assert_eq!(normalized_percentile(60, 60), 100);
        assert_eq!(normalized_percentile(12, 60), 20);
        // 21 / 40 = 52.5%
        assert_eq!(normalized_percentile(21, 40), 53);
        // 19 / 40 = 47.5%
        assert_eq!(normalized_percentile(19, 40), 48);
        // 1 / 3 = 33.33%
        assert_eq!(normalized_percentile(1, 3), 33);
        assert_eq!(normalized_percentile(2, 3), 67);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "exceeds maximum")]
    fn test_normalized_percentile_asserts_raw_within_maximum() {
        normalized_percentile(61, 60);
    }

    #[test]
    fn test_mixed_keying_all_fives() {
        let catalog = mixed_catalog();
        let scores = score(&answer_all(&catalog, 5), &catalog).unwrap();
        // 5 + (6 - 5) = 6 of 10
        for s in scores.iter() {
            assert_eq!(s.raw, 6);
            assert_eq!(s.max_possible, 10);
            assert_eq!(s.percentile, 60);
        }
    }

    #[test]
    fn test_reverse_scoring_applied_per_item() {
        let catalog = mixed_catalog();
        let mut responses = answer_all(&catalog, 3);
        responses.insert("openness+", 5);
        responses.insert("openness-", 1);

        let scores = score(&responses, &catalog).unwrap();
        assert_eq!(scores.get(Factor::Openness).raw, 10);
        assert_eq!(scores.percentile(Factor::Openness), 100);
        assert_eq!(scores.percentile(Factor::Stability), 60);
    }

    #[test]
    fn test_extra_responses_are_ignored() {
        let catalog = mixed_catalog();
        let mut responses = answer_all(&catalog, 4);
        responses.insert("not-in-catalog", 42);

        let scores = score(&responses, &catalog).unwrap();
        assert_eq!(scores.len(), 5);
    }

    #[test]
    fn test_unreadable_extra_responses_are_ignored() {
        let catalog = mixed_catalog();
        let mut json = serde_json::Map::new();
        for item in catalog.all_items() {
            json.insert(item.id.clone(), 3.into());
        }
        json.insert("ui_note".to_string(), serde_json::json!(3.5));
        json.insert("comment".to_string(), serde_json::Value::Null);
        let responses =
            Responses::from_json_str(&serde_json::Value::Object(json).to_string()).unwrap();

        let scores = score(&responses, &catalog).unwrap();
        assert!(scores.iter().all(|s| s.percentile == 60));
    }

    #[test]
    fn test_unreadable_catalog_response_is_invalid() {
        let catalog = mixed_catalog();
        let mut json = serde_json::Map::new();
        for item in catalog.all_items() {
            json.insert(item.id.clone(), 3.into());
        }
        json.insert("extraversion+".to_string(), serde_json::json!(2.5));
        let responses =
            Responses::from_json_str(&serde_json::Value::Object(json).to_string()).unwrap();

        assert_eq!(
            score(&responses, &catalog),
            Err(ScoringError::not_an_integer("extraversion+", "2.5"))
        );
    }

    #[test]
    fn test_missing_ids_reported_in_catalog_order() {
        let catalog = mixed_catalog();
        let mut responses = answer_all(&catalog, 2);
        responses.remove("stability-");
        responses.remove("openness+");

        let err = score(&responses, &catalog).unwrap_err();
        assert_eq!(
            err,
            ScoringError::IncompleteResponses {
                missing: vec!["openness+".to_string(), "stability-".to_string()]
            }
        );
    }

    #[test]
    fn test_incomplete_wins_over_invalid() {
        let catalog = mixed_catalog();
        let mut responses = answer_all(&catalog, 9);
        responses.remove("agreeableness+");

        assert!(matches!(
            score(&responses, &catalog),
            Err(ScoringError::IncompleteResponses { .. })
        ));
    }

    #[test]
    fn test_invalid_rating_names_first_item() {
        let catalog = mixed_catalog();
        let mut responses = answer_all(&catalog, 3);
        responses.insert("extraversion-", 0);
        responses.insert("stability+", 6);

        let err = score(&responses, &catalog).unwrap_err();
        assert_eq!(err, ScoringError::out_of_range("extraversion-", 0));
    }

    #[test]
    fn test_from_scores_requires_every_factor_once() {
        let one = FactorScore::from_raw(Factor::Openness, 5, 1);
        assert!(FactorScores::from_scores([one]).is_none());

        let mut all: Vec<FactorScore> = Factor::ALL
            .iter()
            .map(|f| FactorScore::from_raw(*f, 3, 1))
            .collect();
        assert!(FactorScores::from_scores(all.clone()).is_some());

        all.push(one);
        assert!(FactorScores::from_scores(all).is_none());
    }

    #[test]
    fn test_scores_iterate_in_canonical_order() {
        let reversed: Vec<FactorScore> = Factor::ALL
            .iter()
            .rev()
            .map(|f| FactorScore::from_raw(*f, 3, 1))
            .collect();
        let scores = FactorScores::from_scores(reversed).unwrap();
        let order: Vec<Factor> = scores.iter().map(|s| s.factor).collect();
        assert_eq!(order, Factor::ALL.to_vec());
    }

    #[test]
    fn test_serializes_as_factor_map() {
        let catalog = mixed_catalog();
        let scores = score(&answer_all(&catalog, 3), &catalog).unwrap();
        let json = serde_json::to_value(&scores).unwrap();
        assert_eq!(json["openness"]["raw"], 6);
        assert_eq!(json["stability"]["percentile"], 60);
    }
}
