//! Likert self-assessment scoring.
//!
//! A respondent rates each statement of an [`ItemCatalog`] from 1 to 5. The
//! [`score`] function turns a complete set of [`Responses`] into a
//! normalized score per [`Factor`], and [`derive_archetype`] summarizes the
//! dominant factors as a short label.

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod effects;
pub mod errors;
pub mod formatting;
pub mod io;
pub mod report;
pub mod scoring;
pub mod session;

pub use crate::catalog::{load_catalog, parse_catalog, CatalogFormat, CatalogSource, ItemCatalog};
pub use crate::core::{AssessmentItem, Factor, Keying, Rating, Responses};
pub use crate::errors::{CatalogError, ConfigurationError, ScoringError, SessionError};
pub use crate::report::{AssessmentReport, ReportSettings};
pub use crate::scoring::{
    classify_archetype, derive_archetype, score, Archetype, FactorScore, FactorScores,
    InterpretationBand,
};
pub use crate::session::{AnswerOutcome, AssessmentSession, Progress, SessionSnapshot};

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};
