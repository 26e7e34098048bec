//! Fixed-order composition of the corruption stages.

mod config;
mod report;

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dataset::Dataset;
use crate::inject::{
    Probability, inject_format_inconsistency, inject_nulls, inject_outliers, inject_type_errors,
    inject_typos,
};

pub use config::CorruptionConfig;
pub use report::{CorruptionReport, StageReport};

/// One corruption stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Missing values.
    Nulls,
    /// Type-mismatched values.
    TypeErrors,
    /// Single-character typos.
    Typos,
    /// Statistical outliers.
    Outliers,
    /// Inconsistent casing, padding and delimiters.
    Formats,
}

impl Stage {
    /// Execution order. Each stage sees the previous stages' output as
    /// ordinary data, so outlier statistics include earlier corruption.
    pub const ORDER: [Stage; 5] = [
        Stage::Nulls,
        Stage::TypeErrors,
        Stage::Typos,
        Stage::Outliers,
        Stage::Formats,
    ];

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Stage::Nulls => "missing values",
            Stage::TypeErrors => "type errors",
            Stage::Typos => "typos",
            Stage::Outliers => "outliers",
            Stage::Formats => "format inconsistencies",
        }
    }

    /// Run this stage's injector.
    pub fn apply(
        self,
        dataset: &Dataset,
        probability: Probability,
        rng: &mut fastrand::Rng,
    ) -> Dataset {
        match self {
            Stage::Nulls => inject_nulls(dataset, probability, rng),
            Stage::TypeErrors => inject_type_errors(dataset, probability, rng),
            Stage::Typos => inject_typos(dataset, probability, rng),
            Stage::Outliers => inject_outliers(dataset, probability, rng),
            Stage::Formats => inject_format_inconsistency(dataset, probability, rng),
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A corrupted dataset together with its report.
#[derive(Debug, Clone)]
pub struct Corruption {
    pub dataset: Dataset,
    pub report: CorruptionReport,
}

/// Applies every stage, in [`Stage::ORDER`], to a dataset.
pub struct CorruptionPipeline {
    config: CorruptionConfig,
}

impl CorruptionPipeline {
    /// Create a pipeline with default probabilities and no seed.
    pub fn new() -> Self {
        Self::with_config(CorruptionConfig::default())
    }

    /// Create a pipeline with custom configuration.
    pub fn with_config(config: CorruptionConfig) -> Self {
        Self { config }
    }

    /// The pipeline's configuration.
    pub fn config(&self) -> &CorruptionConfig {
        &self.config
    }

    /// Corrupt a dataset using a generator built from the config.
    pub fn corrupt(&self, dataset: &Dataset) -> Dataset {
        self.run(dataset).dataset
    }

    /// Corrupt a dataset and report what each stage changed.
    pub fn run(&self, dataset: &Dataset) -> Corruption {
        let mut rng = self.config.rng();
        self.run_with_rng(dataset, &mut rng)
    }

    /// Corrupt a dataset with a caller-supplied generator.
    pub fn run_with_rng(&self, dataset: &Dataset, rng: &mut fastrand::Rng) -> Corruption {
        let mut report = CorruptionReport::new();
        let mut current = dataset.clone();

        for stage in Stage::ORDER {
            let probability = self.config.probability(stage);
            let next = stage.apply(&current, probability, rng);

            let stage_report = StageReport::between(stage, probability.value(), &current, &next);
            debug!(
                stage = %stage,
                probability = probability.value(),
                cells_changed = stage_report.cells_changed,
                "stage applied"
            );
            report.add_stage(stage_report);

            current = next;
        }

        report.finish(dataset, &current);

        Corruption {
            dataset: current,
            report,
        }
    }
}

impl Default for CorruptionPipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Corrupt a dataset with the default pipeline.
pub fn corrupt(dataset: &Dataset) -> Dataset {
    CorruptionPipeline::new().corrupt(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{Column, Value};

    fn sample_dataset() -> Dataset {
        Dataset::new(vec![
            Column::new("id", (1..=200).map(Value::Integer).collect()),
            Column::new(
                "sku",
                (1..=200).map(|i| Value::text(format!("SKU-{:04}-x", i))).collect(),
            ),
            Column::new("price", (1..=200).map(|i| Value::Float(i as f64 * 1.25)).collect()),
        ])
        .unwrap()
    }

    #[test]
    fn test_shape_preserved() {
        let dataset = sample_dataset();
        let result = corrupt(&dataset);
        assert_eq!(result.shape(), dataset.shape());
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let dataset = sample_dataset();
        let pipeline = CorruptionPipeline::with_config(CorruptionConfig::new().with_seed(99));

        assert_eq!(pipeline.corrupt(&dataset), pipeline.corrupt(&dataset));
    }

    #[test]
    fn test_report_covers_every_stage_in_order() {
        let dataset = sample_dataset();
        let pipeline = CorruptionPipeline::with_config(CorruptionConfig::new().with_seed(7));
        let corruption = pipeline.run(&dataset);

        let stages: Vec<Stage> = corruption.report.stages.iter().map(|s| s.stage).collect();
        assert_eq!(stages, Stage::ORDER.to_vec());
        assert_eq!(corruption.report.total_cells, 600);
        assert!(corruption.report.cells_changed > 0);
        assert!(corruption.report.corruption_rate() < 1.0);
    }

    #[test]
    fn test_zero_probabilities_leave_data_intact() {
        let dataset = sample_dataset();
        let config = Stage::ORDER
            .iter()
            .fold(CorruptionConfig::new().with_seed(1), |config, stage| {
                config.with_probability(*stage, Probability::ZERO)
            });
        let corruption = CorruptionPipeline::with_config(config).run(&dataset);

        assert_eq!(corruption.dataset, dataset);
        assert_eq!(corruption.report.cells_changed, 0);
    }

    #[test]
    fn test_empty_dataset() {
        let dataset = Dataset::empty(["a", "b"]);
        let result = corrupt(&dataset);
        assert_eq!(result, dataset);
    }
}
