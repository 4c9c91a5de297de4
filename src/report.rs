//! Presentation-ready summary of a scored assessment.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::config::{ArchetypeThresholds, InterpretationThresholds, TraitmapConfig};
use crate::core::Factor;
use crate::scoring::{
    classify_archetype, factor_info, rank_factors, Archetype, FactorScores, InterpretationBand,
};

/// Thresholds that shape a report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportSettings {
    pub archetype: ArchetypeThresholds,
    pub interpretation: InterpretationThresholds,
}

impl ReportSettings {
    pub fn from_config(config: &TraitmapConfig) -> Self {
        Self {
            archetype: config.archetype_thresholds(),
            interpretation: config.interpretation_thresholds(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FactorReport {
    pub factor: Factor,
    pub name: String,
    pub description: String,
    pub raw: u32,
    pub max_possible: u32,
    pub percentile: u8,
    pub band: InterpretationBand,
    pub interpretation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssessmentReport {
    pub generated_at: DateTime<Utc>,
    pub archetype_label: String,
    pub archetype: Archetype,
    /// Factors in canonical order.
    pub factors: Vec<FactorReport>,
    /// Factors highest percentile first.
    pub ranking: Vec<Factor>,
}

impl AssessmentReport {
    pub fn build(scores: &FactorScores, settings: &ReportSettings) -> Self {
        let archetype = classify_archetype(scores, &settings.archetype);

        let factors = scores
            .iter()
            .map(|score| {
                let info = factor_info(score.factor);
                let band = InterpretationBand::classify(score.percentile, &settings.interpretation);
                FactorReport {
                    factor: score.factor,
                    name: info.name.to_string(),
                    description: info.description.to_string(),
                    raw: score.raw,
                    max_possible: score.max_possible,
                    percentile: score.percentile,
                    band,
                    interpretation: band.describe(score.factor, score.percentile),
                }
            })
            .collect();

        Self {
            generated_at: Utc::now(),
            archetype_label: archetype.to_string(),
            archetype,
            factors,
            ranking: rank_factors(scores).into_iter().map(|(f, _)| f).collect(),
        }
    }

    pub fn factor(&self, factor: Factor) -> Option<&FactorReport> {
        self.factors.iter().find(|row| row.factor == factor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::FactorScore;
    use pretty_assertions::assert_eq;

    fn scores(percentiles: [u8; 5]) -> FactorScores {
        FactorScores::from_scores(Factor::ALL.iter().zip(percentiles).map(|(f, p)| {
            FactorScore {
                factor: *f,
                raw: p as u32,
                max_possible: 100,
                item_count: 20,
                percentile: p,
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_report_rows_follow_canonical_order() {
        let report = AssessmentReport::build(&scores([10, 50, 90, 85, 30]), &ReportSettings::default());

        let order: Vec<Factor> = report.factors.iter().map(|r| r.factor).collect();
        assert_eq!(order, Factor::ALL.to_vec());
        assert_eq!(report.archetype_label, "The Extraversion-Agreeableness Innovator");
        assert_eq!(report.ranking[0], Factor::Extraversion);
    }

    #[test]
    fn test_report_bands_and_text() {
        let report = AssessmentReport::build(&scores([10, 50, 90, 85, 30]), &ReportSettings::default());

        let openness = report.factor(Factor::Openness).unwrap();
        assert_eq!(openness.band, InterpretationBand::LowerExpression);

        let stability = report.factor(Factor::Stability).unwrap();
        assert_eq!(stability.name, "Emotional Stability");
        assert_eq!(stability.band, InterpretationBand::ModerateTendency);

        let extraversion = report.factor(Factor::Extraversion).unwrap();
        assert_eq!(
            extraversion.interpretation,
            "You score higher than 90% of professionals in extraversion."
        );
    }

    #[test]
    fn test_settings_from_config() {
        let config: TraitmapConfig =
            toml::from_str("[archetype]\nspecialist_threshold = 50\ninnovator_threshold = 95\n")
                .unwrap();
        let settings = ReportSettings::from_config(&config);
        let report = AssessmentReport::build(&scores([60, 55, 40, 40, 40]), &settings);
        assert_eq!(report.archetype_label, "The Openness Specialist");
    }

    #[test]
    fn test_json_shape() {
        let report = AssessmentReport::build(&scores([60; 5]), &ReportSettings::default());
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["archetype_label"], "The Balanced Professional");
        assert_eq!(json["archetype"]["kind"], "balanced_professional");
        assert_eq!(json["factors"][0]["band"], "moderate_tendency");
        assert!(json["generated_at"].is_string());
    }
}
