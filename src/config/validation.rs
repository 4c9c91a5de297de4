//! Validation with error accumulation for `.traitmap.toml`.
//!
//! All checks run and every problem is reported, with the dotted field path
//! of the offending setting.
//!
//! # Example
//!
//! ```rust
//! use traitmap::config::validation::validate_config;
//! use traitmap::config::TraitmapConfig;
//!
//! let validation = validate_config(&TraitmapConfig::default());
//! assert!(validation.is_success());
//! ```

use crate::effects::{
    combine_validations, run_validation, validation_from_errors, validation_success,
    ConfigValidation,
};
use crate::errors::{format_error_list, ConfigError};

use super::thresholds::{ArchetypeThresholds, InterpretationThresholds};
use super::TraitmapConfig;

const OUTPUT_FORMATS: [&str; 3] = ["terminal", "json", "markdown"];

/// Validate entire config, accumulating ALL errors.
pub fn validate_config(config: &TraitmapConfig) -> ConfigValidation<()> {
    let validations = vec![
        validate_archetype_thresholds(config.archetype.as_ref()),
        validate_interpretation_thresholds(config.interpretation.as_ref()),
        validate_output_format(config.default_format()),
    ];

    combine_validations(validations).map(|_| ())
}

/// Validate config with a fail-fast `Result` API.
pub fn validate_config_result(config: &TraitmapConfig) -> anyhow::Result<()> {
    run_validation(validate_config(config)).map_err(|errors| {
        anyhow::anyhow!(
            "Invalid configuration ({} problem(s)):\n{}",
            errors.len(),
            format_error_list(&errors)
        )
    })
}

pub(crate) fn validate_archetype_thresholds(
    thresholds: Option<&ArchetypeThresholds>,
) -> ConfigValidation<()> {
    let Some(t) = thresholds else {
        return validation_success(());
    };

    let errors = [
        ("archetype.specialist_threshold", t.specialist_threshold),
        ("archetype.innovator_threshold", t.innovator_threshold),
    ]
    .into_iter()
    .filter_map(|(field, value)| check_percentile(field, value))
    .collect();

    validation_from_errors((), errors)
}

pub(crate) fn validate_interpretation_thresholds(
    thresholds: Option<&InterpretationThresholds>,
) -> ConfigValidation<()> {
    let Some(t) = thresholds else {
        return validation_success(());
    };

    let mut errors: Vec<ConfigError> = [
        ("interpretation.strong_threshold", t.strong_threshold),
        ("interpretation.moderate_threshold", t.moderate_threshold),
    ]
    .into_iter()
    .filter_map(|(field, value)| check_percentile(field, value))
    .collect();

    if t.moderate_threshold >= t.strong_threshold {
        errors.push(ConfigError::invalid(
            "interpretation.moderate_threshold",
            format!(
                "must be below strong_threshold ({} >= {})",
                t.moderate_threshold, t.strong_threshold
            ),
        ));
    }

    validation_from_errors((), errors)
}

fn validate_output_format(format: Option<&str>) -> ConfigValidation<()> {
    match format {
        Some(f) if !OUTPUT_FORMATS.contains(&f.to_lowercase().as_str()) => {
            validation_from_errors(
                (),
                vec![ConfigError::invalid(
                    "output.default_format",
                    format!("unknown format '{}' (expected terminal, json or markdown)", f),
                )],
            )
        }
        _ => validation_success(()),
    }
}

fn check_percentile(field: &str, value: u8) -> Option<ConfigError> {
    (value > 100).then(|| {
        ConfigError::invalid(field, format!("percentile out of range: {} (must be 0-100)", value))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputConfig;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&TraitmapConfig::default()).is_success());
    }

    #[test]
    fn test_accumulates_all_errors() {
        let config = TraitmapConfig {
            archetype: Some(ArchetypeThresholds {
                specialist_threshold: 120,
                innovator_threshold: 80,
            }),
            interpretation: Some(InterpretationThresholds {
                strong_threshold: 40,
                moderate_threshold: 60,
            }),
            output: Some(OutputConfig {
                default_format: Some("html".into()),
                use_color: None,
            }),
            ..Default::default()
        };

        let errors = run_validation(validate_config(&config)).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors[0].to_string().starts_with("archetype.specialist_threshold"));
        assert!(errors[1].to_string().contains("must be below strong_threshold"));
        assert!(errors[2].to_string().contains("'html'"));
    }

    #[test]
    fn test_result_api_reports_count() {
        let config = TraitmapConfig {
            interpretation: Some(InterpretationThresholds {
                strong_threshold: 30,
                moderate_threshold: 30,
            }),
            ..Default::default()
        };
        let err = validate_config_result(&config).unwrap_err();
        assert!(err.to_string().contains("1 problem(s)"));
    }
}
