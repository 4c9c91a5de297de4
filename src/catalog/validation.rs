//! Catalog validation with error accumulation.
//!
//! Every check here is pure and reports all of its findings; a catalog file
//! with three bad items and an empty factor yields four errors, not one.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::core::{AssessmentItem, Factor, Keying};
use crate::effects::{
    combine_validations, validation_failure, validation_from_errors, validation_success,
    validation_zip, CatalogValidation,
};
use crate::errors::ConfigurationError;

/// An item as written in a catalog file, before factor and keying are resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawItem {
    pub id: String,
    pub text: String,
    pub factor: String,
    pub keying: String,
}

impl From<&AssessmentItem> for RawItem {
    fn from(item: &AssessmentItem) -> Self {
        Self {
            id: item.id.clone(),
            text: item.text.clone(),
            factor: item.factor.as_str().to_string(),
            keying: item.keying.as_str().to_string(),
        }
    }
}

/// Resolve and validate raw items, accumulating every problem.
pub fn validate_raw_items(raw: &[RawItem]) -> CatalogValidation<Vec<AssessmentItem>> {
    if raw.is_empty() {
        return validation_failure(ConfigurationError::EmptyCatalog);
    }

    let ids: Vec<&str> = raw.iter().map(|item| item.id.as_str()).collect();
    let factors: Vec<Factor> = raw
        .iter()
        .filter_map(|item| Factor::parse(&item.factor))
        .collect();

    let resolved = combine_validations(raw.iter().map(resolve_item).collect());
    let structural = combine_validations(vec![
        check_item_ids(&ids),
        check_factor_coverage(&factors),
    ]);

    validation_zip(resolved, structural).map(|(items, _)| items)
}

/// Validate already-typed items (factor and keying cannot be unknown here).
pub fn validate_items(items: &[AssessmentItem]) -> CatalogValidation<()> {
    if items.is_empty() {
        return validation_failure(ConfigurationError::EmptyCatalog);
    }

    let ids: Vec<&str> = items.iter().map(|item| item.id.as_str()).collect();
    let factors: Vec<Factor> = items.iter().map(|item| item.factor).collect();

    combine_validations(vec![check_item_ids(&ids), check_factor_coverage(&factors)]).map(|_| ())
}

fn resolve_item(raw: &RawItem) -> CatalogValidation<AssessmentItem> {
    let factor = match Factor::parse(&raw.factor) {
        Some(factor) => validation_success(factor),
        None => validation_failure(ConfigurationError::UnknownFactor {
            item_id: raw.id.clone(),
            factor: raw.factor.clone(),
        }),
    };

    let keying = match Keying::parse(&raw.keying) {
        Some(keying) => validation_success(keying),
        None => validation_failure(ConfigurationError::UnknownKeying {
            item_id: raw.id.clone(),
            keying: raw.keying.clone(),
        }),
    };

    validation_zip(factor, keying)
        .map(|(factor, keying)| AssessmentItem::new(raw.id.clone(), raw.text.clone(), factor, keying))
}

/// Ids must be non-empty and unique. Each duplicate id is reported once.
fn check_item_ids(ids: &[&str]) -> CatalogValidation<()> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut errors = Vec::new();

    for (position, id) in ids.iter().enumerate() {
        if id.trim().is_empty() {
            errors.push(ConfigurationError::EmptyItemId { position });
            continue;
        }
        if !seen.insert(*id) && reported.insert(*id) {
            errors.push(ConfigurationError::DuplicateItemId {
                item_id: id.to_string(),
            });
        }
    }

    validation_from_errors((), errors)
}

/// Every factor needs at least one item.
fn check_factor_coverage(factors: &[Factor]) -> CatalogValidation<()> {
    let errors = Factor::ALL
        .into_iter()
        .filter(|factor| !factors.contains(factor))
        .map(|factor| ConfigurationError::EmptyFactor { factor })
        .collect();

    validation_from_errors((), errors)
}
