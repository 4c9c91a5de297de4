use serde::{Deserialize, Serialize};

/// Percentile cut-offs for archetype derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchetypeThresholds {
    /// Minimum percentile of the top-ranked factor for a Specialist label
    #[serde(default = "default_specialist_threshold")]
    pub specialist_threshold: u8,

    /// Minimum percentile of the second-ranked factor for an Innovator label
    #[serde(default = "default_innovator_threshold")]
    pub innovator_threshold: u8,
}

impl Default for ArchetypeThresholds {
    fn default() -> Self {
        Self {
            specialist_threshold: default_specialist_threshold(),
            innovator_threshold: default_innovator_threshold(),
        }
    }
}

fn default_specialist_threshold() -> u8 {
    80
}

fn default_innovator_threshold() -> u8 {
    80
}

/// Percentile cut-offs for per-factor interpretation bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterpretationThresholds {
    /// At or above: "Strong Preference"
    #[serde(default = "default_strong_threshold")]
    pub strong_threshold: u8,

    /// At or above (and below strong): "Moderate Tendency"
    #[serde(default = "default_moderate_threshold")]
    pub moderate_threshold: u8,
}

impl Default for InterpretationThresholds {
    fn default() -> Self {
        Self {
            strong_threshold: default_strong_threshold(),
            moderate_threshold: default_moderate_threshold(),
        }
    }
}

fn default_strong_threshold() -> u8 {
    70
}

fn default_moderate_threshold() -> u8 {
    30
}
