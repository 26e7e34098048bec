//! Pipeline configuration.

use serde::{Deserialize, Serialize};

use crate::inject::{
    DEFAULT_FORMAT_PROBABILITY, DEFAULT_NULL_PROBABILITY, DEFAULT_OUTLIER_PROBABILITY,
    DEFAULT_TYPE_ERROR_PROBABILITY, DEFAULT_TYPO_PROBABILITY, Probability,
};

use super::Stage;

/// Parameters for one pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorruptionConfig {
    /// Per-cell probability of becoming missing.
    pub null_probability: Probability,
    /// Per-column probability of receiving type errors.
    pub type_error_probability: Probability,
    /// Share of rows per text column receiving a typo.
    pub typo_probability: Probability,
    /// Share of rows per numeric column becoming outliers.
    pub outlier_probability: Probability,
    /// Share of rows per text column being restyled.
    pub format_probability: Probability,
    /// Fixed seed for reproducible output (None = entropy).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for CorruptionConfig {
    fn default() -> Self {
        Self {
            null_probability: DEFAULT_NULL_PROBABILITY,
            type_error_probability: DEFAULT_TYPE_ERROR_PROBABILITY,
            typo_probability: DEFAULT_TYPO_PROBABILITY,
            outlier_probability: DEFAULT_OUTLIER_PROBABILITY,
            format_probability: DEFAULT_FORMAT_PROBABILITY,
            seed: None,
        }
    }
}

impl CorruptionConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a fixed seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Override one stage's probability.
    pub fn with_probability(mut self, stage: Stage, probability: Probability) -> Self {
        match stage {
            Stage::Nulls => self.null_probability = probability,
            Stage::TypeErrors => self.type_error_probability = probability,
            Stage::Typos => self.typo_probability = probability,
            Stage::Outliers => self.outlier_probability = probability,
            Stage::Formats => self.format_probability = probability,
        }
        self
    }

    /// The probability a stage runs with.
    pub fn probability(&self, stage: Stage) -> Probability {
        match stage {
            Stage::Nulls => self.null_probability,
            Stage::TypeErrors => self.type_error_probability,
            Stage::Typos => self.typo_probability,
            Stage::Outliers => self.outlier_probability,
            Stage::Formats => self.format_probability,
        }
    }

    /// A generator seeded from the config, or from entropy.
    pub fn rng(&self) -> fastrand::Rng {
        match self.seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CorruptionConfig::default();
        assert_eq!(config.null_probability.value(), 0.10);
        assert_eq!(config.type_error_probability.value(), 0.10);
        assert_eq!(config.typo_probability.value(), 0.10);
        assert_eq!(config.outlier_probability.value(), 0.05);
        assert_eq!(config.format_probability.value(), 0.10);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_with_probability() {
        let config = CorruptionConfig::new()
            .with_probability(Stage::Outliers, Probability::ONE)
            .with_seed(3);
        assert_eq!(config.probability(Stage::Outliers), Probability::ONE);
        assert_eq!(config.probability(Stage::Nulls).value(), 0.10);
        assert_eq!(config.seed, Some(3));
    }

    #[test]
    fn test_json_roundtrip_rejects_bad_probability() {
        let json = r#"{"null_probability":1.5,"type_error_probability":0.1,"typo_probability":0.1,"outlier_probability":0.05,"format_probability":0.1}"#;
        assert!(serde_json::from_str::<CorruptionConfig>(json).is_err());
    }
}
