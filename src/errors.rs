//! Error types for catalog loading, scoring, configuration and sessions.
//!
//! Catalog problems are fatal configuration errors raised at load time and
//! are accumulated so that a broken catalog file reports every issue in one
//! pass. Scoring errors are caller errors: the caller can fix the response
//! mapping and try again. Nothing here is ever coerced into a default value.

use crate::core::Factor;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// A single problem found while building an item catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("factor '{factor}' has no items")]
    EmptyFactor { factor: Factor },

    #[error("item '{item_id}' references unknown factor '{factor}'")]
    UnknownFactor { item_id: String, factor: String },

    #[error("item '{item_id}' has unknown keying '{keying}' (expected positive or negative)")]
    UnknownKeying { item_id: String, keying: String },

    #[error("item at position {position} has an empty id")]
    EmptyItemId { position: usize },

    #[error("duplicate item id '{item_id}'")]
    DuplicateItemId { item_id: String },

    #[error("catalog contains no items")]
    EmptyCatalog,

    #[error("failed to parse catalog: {message}")]
    Parse { message: String },

    #[error("failed to read catalog {}: {message}", path.display())]
    Read { path: PathBuf, message: String },
}

impl ConfigurationError {
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    pub fn read(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Read {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Every configuration problem found while loading a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid item catalog:\n{}", format_error_list(.issues))]
pub struct CatalogError {
    pub issues: Vec<ConfigurationError>,
}

impl CatalogError {
    pub fn new(issues: Vec<ConfigurationError>) -> Self {
        Self { issues }
    }

    pub fn single(issue: ConfigurationError) -> Self {
        Self {
            issues: vec![issue],
        }
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn contains(&self, issue: &ConfigurationError) -> bool {
        self.issues.contains(issue)
    }
}

/// Why a rating was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidRatingReason {
    OutOfRange(i64),
    NotAnInteger(String),
}

impl fmt::Display for InvalidRatingReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange(value) => write!(f, "{} is outside 1-5", value),
            Self::NotAnInteger(value) => write!(f, "{} is not an integer", value),
        }
    }
}

/// Failures of a scoring pass.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoringError {
    #[error("missing responses for {} item(s): {}", .missing.len(), .missing.join(", "))]
    IncompleteResponses { missing: Vec<String> },

    #[error("invalid rating for item '{item_id}': {reason}")]
    InvalidRating {
        item_id: String,
        reason: InvalidRatingReason,
    },

    #[error("malformed response mapping: {0}")]
    MalformedResponses(String),
}

impl ScoringError {
    pub fn out_of_range(item_id: impl Into<String>, value: i64) -> Self {
        Self::InvalidRating {
            item_id: item_id.into(),
            reason: InvalidRatingReason::OutOfRange(value),
        }
    }

    pub fn not_an_integer(item_id: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidRating {
            item_id: item_id.into(),
            reason: InvalidRatingReason::NotAnInteger(value.into()),
        }
    }

    /// Whether the caller can recover by re-prompting the respondent.
    pub fn is_user_fixable(&self) -> bool {
        matches!(
            self,
            Self::IncompleteResponses { .. } | Self::InvalidRating { .. }
        )
    }
}

/// Problems with `.traitmap.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{field}: {message}")]
    Invalid { field: String, message: String },

    #[error("failed to parse {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },
}

impl ConfigError {
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Invalid {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Rejected transitions of an [`AssessmentSession`](crate::session::AssessmentSession).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("session is paused")]
    Paused,

    #[error("invalid rating {0} (expected 1-5)")]
    InvalidRating(i64),
}

/// Numbered, one-per-line rendering of an error list.
pub fn format_error_list<E: fmt::Display>(errors: &[E]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, e)| format!("  {}. {}", i + 1, e))
        .collect::<Vec<_>>()
        .join("\n")
}
