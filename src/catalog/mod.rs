//! The item catalog: the fixed battery of questions with scoring metadata.
//!
//! A catalog is validated once, when it is built. After construction every
//! factor is guaranteed to have at least one item and every id is unique, so
//! the scorer never has to handle an empty factor.
//!
//! # Example
//!
//! ```rust
//! use traitmap::catalog::ItemCatalog;
//! use traitmap::core::Factor;
//!
//! let catalog = ItemCatalog::builtin().unwrap();
//! assert_eq!(catalog.len(), 60);
//! assert_eq!(catalog.items_for_factor(Factor::Openness).len(), 12);
//! ```

pub mod loader;
pub mod validation;

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::core::{AssessmentItem, Factor};
use crate::effects::run_validation;
use crate::errors::CatalogError;

pub use loader::{load_catalog, parse_catalog, CatalogFormat, CatalogSource};
pub use validation::{validate_items, validate_raw_items, RawItem};

const BUILTIN_CATALOG: &str = include_str!("../../assets/catalog.toml");

static BUILTIN: Lazy<Result<ItemCatalog, CatalogError>> =
    Lazy::new(|| parse_catalog(BUILTIN_CATALOG, CatalogFormat::Toml));

/// Ordered, validated collection of assessment items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemCatalog {
    items: Vec<AssessmentItem>,
    positions: HashMap<String, usize>,
    by_factor: [Vec<usize>; 5],
}

impl ItemCatalog {
    /// Build a catalog, rejecting empty factors and duplicate or blank ids.
    pub fn new(items: Vec<AssessmentItem>) -> Result<Self, CatalogError> {
        run_validation(validate_items(&items)).map_err(CatalogError::new)?;

        let positions = items
            .iter()
            .enumerate()
            .map(|(i, item)| (item.id.clone(), i))
            .collect();

        let mut by_factor: [Vec<usize>; 5] = Default::default();
        for (i, item) in items.iter().enumerate() {
            by_factor[item.factor.ordinal()].push(i);
        }

        tracing::debug!(items = items.len(), "Built item catalog");

        Ok(Self {
            items,
            positions,
            by_factor,
        })
    }

    /// The embedded 60-item battery.
    pub fn builtin() -> Result<&'static ItemCatalog, CatalogError> {
        BUILTIN.as_ref().map_err(Clone::clone)
    }

    /// All items in declaration order.
    pub fn all_items(&self) -> &[AssessmentItem] {
        &self.items
    }

    /// Items measuring `factor`, in declaration order. Never empty.
    pub fn items_for_factor(&self, factor: Factor) -> Vec<&AssessmentItem> {
        self.by_factor[factor.ordinal()]
            .iter()
            .map(|&i| &self.items[i])
            .collect()
    }

    pub fn get(&self, id: &str) -> Option<&AssessmentItem> {
        self.positions.get(id).map(|&i| &self.items[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.positions.contains_key(id)
    }

    /// Zero-based position of `id` in declaration order.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.positions.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Item count per factor, in canonical order.
    pub fn factor_counts(&self) -> Vec<(Factor, usize)> {
        Factor::ALL
            .into_iter()
            .map(|factor| (factor, self.by_factor[factor.ordinal()].len()))
            .collect()
    }
}
