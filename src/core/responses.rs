//! Response mapping: item id -> raw integer rating.
//!
//! Ratings are kept as raw values here and only validated by the scorer,
//! so that a bad answer for an item outside the catalog is ignored rather
//! than rejected.

use crate::errors::ScoringError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Responses {
    ratings: BTreeMap<String, i64>,
    /// Answers read from JSON that are not integers, kept verbatim.
    #[serde(skip)]
    unreadable: BTreeMap<String, String>,
}

impl Responses {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record or overwrite the rating for `item_id`.
    pub fn insert(&mut self, item_id: impl Into<String>, rating: i64) -> Option<i64> {
        let item_id = item_id.into();
        self.unreadable.remove(&item_id);
        self.ratings.insert(item_id, rating)
    }

    pub fn get(&self, item_id: &str) -> Option<i64> {
        self.ratings.get(item_id).copied()
    }

    /// Raw text of an answer that could not be read as an integer.
    pub fn unreadable(&self, item_id: &str) -> Option<&str> {
        self.unreadable.get(item_id).map(String::as_str)
    }

    /// Whether `item_id` has an answer, readable or not.
    pub fn contains(&self, item_id: &str) -> bool {
        self.ratings.contains_key(item_id) || self.unreadable.contains_key(item_id)
    }

    pub fn remove(&mut self, item_id: &str) -> Option<i64> {
        self.unreadable.remove(item_id);
        self.ratings.remove(item_id)
    }

    pub fn len(&self) -> usize {
        self.ratings.len() + self.unreadable.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ratings.is_empty() && self.unreadable.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.ratings.iter().map(|(id, rating)| (id.as_str(), *rating))
    }

    /// Parse a JSON object of `{ "<item id>": <integer> }`.
    ///
    /// Integral floats such as `4.0` are read as integers. Any other value is
    /// kept as unreadable; the scorer rejects it only when its id is in the
    /// catalog.
    pub fn from_json_str(json: &str) -> Result<Self, ScoringError> {
        let value: serde_json::Value = serde_json::from_str(json)
            .map_err(|e| ScoringError::MalformedResponses(e.to_string()))?;
        let serde_json::Value::Object(entries) = value else {
            return Err(ScoringError::MalformedResponses(
                "expected a JSON object of item id to rating".to_string(),
            ));
        };

        let mut responses = Self::new();
        for (id, raw) in entries {
            match integer_value(&raw) {
                Some(rating) => {
                    responses.ratings.insert(id, rating);
                }
                None => {
                    responses.unreadable.insert(id, raw.to_string());
                }
            }
        }
        Ok(responses)
    }
}

fn integer_value(raw: &serde_json::Value) -> Option<i64> {
    let serde_json::Value::Number(number) = raw else {
        return None;
    };
    if let Some(value) = number.as_i64() {
        return Some(value);
    }
    number
        .as_f64()
        .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
        .map(|f| f as i64)
}

impl FromIterator<(String, i64)> for Responses {
    fn from_iter<I: IntoIterator<Item = (String, i64)>>(iter: I) -> Self {
        Self {
            ratings: iter.into_iter().collect(),
            unreadable: BTreeMap::new(),
        }
    }
}

impl<'a> FromIterator<(&'a str, i64)> for Responses {
    fn from_iter<I: IntoIterator<Item = (&'a str, i64)>>(iter: I) -> Self {
        iter.into_iter()
            .map(|(id, rating)| (id.to_string(), rating))
            .collect()
    }
}
