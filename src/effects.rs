//! Validation aliases and helpers built on stillwater.
//!
//! Catalog and configuration checks use stillwater's `Validation` so that
//! ALL problems are collected instead of stopping at the first one. Each
//! check is a pure function returning a validation; `combine_validations`
//! merges them and `run_validation` converts the outcome back to a plain
//! `Result` at the edge.
//!
//! # Example
//!
//! ```rust
//! use traitmap::effects::{combine_validations, validation_failure, validation_success};
//! use traitmap::errors::ConfigurationError;
//!
//! let checks = vec![
//!     validation_success(()),
//!     validation_failure(ConfigurationError::EmptyCatalog),
//! ];
//! assert!(combine_validations(checks).is_failure());
//! ```

use crate::errors::{ConfigError, ConfigurationError};
use stillwater::{NonEmptyVec, Validation};

/// Validation that accumulates errors of type `E`.
pub type Checked<T, E> = Validation<T, NonEmptyVec<E>>;

/// Validation of an item catalog.
pub type CatalogValidation<T> = Checked<T, ConfigurationError>;

/// Validation of `.traitmap.toml` settings.
pub type ConfigValidation<T> = Checked<T, ConfigError>;

pub fn validation_success<T, E>(value: T) -> Checked<T, E> {
    Validation::Success(value)
}

pub fn validation_failure<T, E>(error: E) -> Checked<T, E> {
    Validation::Failure(NonEmptyVec::new(error, Vec::new()))
}

/// Fail with every error in `errors`, or succeed with `value` if there are none.
pub fn validation_from_errors<T, E>(value: T, errors: Vec<E>) -> Checked<T, E> {
    match NonEmptyVec::from_vec(errors) {
        Some(nev) => Validation::Failure(nev),
        None => Validation::Success(value),
    }
}

/// Combine multiple validations, accumulating all errors.
pub fn combine_validations<T, E>(validations: Vec<Checked<T, E>>) -> Checked<Vec<T>, E> {
    let mut successes = Vec::new();
    let mut failures: Vec<E> = Vec::new();

    for v in validations {
        match v {
            Validation::Success(value) => successes.push(value),
            Validation::Failure(errors) => {
                for err in errors {
                    failures.push(err);
                }
            }
        }
    }

    validation_from_errors(successes, failures)
}

/// Pair two validations, keeping the errors of both when either fails.
pub fn validation_zip<A, B, E>(a: Checked<A, E>, b: Checked<B, E>) -> Checked<(A, B), E> {
    match (a, b) {
        (Validation::Success(a), Validation::Success(b)) => Validation::Success((a, b)),
        (a, b) => {
            let mut errors = Vec::new();
            if let Validation::Failure(e) = a {
                errors.extend(e);
            }
            if let Validation::Failure(e) = b {
                errors.extend(e);
            }
            Validation::Failure(
                NonEmptyVec::from_vec(errors).expect("at least one side failed"),
            )
        }
    }
}

/// Convert a validation into a `Result` carrying every accumulated error.
pub fn run_validation<T, E>(validation: Checked<T, E>) -> Result<T, Vec<E>> {
    match validation {
        Validation::Success(value) => Ok(value),
        Validation::Failure(errors) => Err(errors.into_vec()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combine_collects_every_failure() {
        let validations: Vec<CatalogValidation<i32>> = vec![
            validation_success(1),
            validation_failure(ConfigurationError::EmptyCatalog),
            validation_success(3),
            validation_failure(ConfigurationError::parse("bad toml")),
        ];

        let errors = run_validation(combine_validations(validations)).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ConfigurationError::EmptyCatalog,
                ConfigurationError::parse("bad toml")
            ]
        );
    }

    #[test]
    fn test_combine_all_success_keeps_values_in_order() {
        let validations: Vec<ConfigValidation<i32>> =
            vec![validation_success(1), validation_success(2)];
        assert_eq!(
            run_validation(combine_validations(validations)).unwrap(),
            vec![1, 2]
        );
    }

    #[test]
    fn test_validation_from_errors_empty_is_success() {
        let v: CatalogValidation<&str> = validation_from_errors("ok", Vec::new());
        assert!(v.is_success());
    }
}
