//! Per-stage accounting of what a pipeline run changed.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::dataset::Dataset;

use super::Stage;

/// Cells changed by one stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageReport {
    /// The stage that ran.
    pub stage: Stage,
    /// Probability the stage ran with.
    pub probability: f64,
    /// Number of cells whose value changed.
    pub cells_changed: usize,
    /// Changed cells per column, in column order.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub columns: IndexMap<String, usize>,
}

impl StageReport {
    /// Compare a stage's input and output.
    pub fn between(stage: Stage, probability: f64, before: &Dataset, after: &Dataset) -> Self {
        let columns = changed_cells(before, after);
        Self {
            stage,
            probability,
            cells_changed: columns.values().sum(),
            columns,
        }
    }
}

/// Result of running all stages over one dataset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CorruptionReport {
    /// One entry per stage, in execution order.
    pub stages: Vec<StageReport>,
    /// Cells whose final value differs from the input.
    pub cells_changed: usize,
    /// Total cells in the dataset.
    pub total_cells: usize,
}

impl CorruptionReport {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a stage's result.
    pub fn add_stage(&mut self, stage: StageReport) {
        self.stages.push(stage);
    }

    /// Record the overall difference between input and output.
    pub fn finish(&mut self, input: &Dataset, output: &Dataset) {
        self.cells_changed = changed_cells(input, output).values().sum();
        self.total_cells = input.row_count() * input.column_count();
    }

    /// Report for a given stage.
    pub fn stage(&self, stage: Stage) -> Option<&StageReport> {
        self.stages.iter().find(|s| s.stage == stage)
    }

    /// Share of cells that differ from the input (0.0-1.0).
    pub fn corruption_rate(&self) -> f64 {
        if self.total_cells == 0 {
            0.0
        } else {
            self.cells_changed as f64 / self.total_cells as f64
        }
    }
}

/// Count differing cells per column. Columns with repeated names share a
/// counter; columns without changes are omitted.
fn changed_cells(before: &Dataset, after: &Dataset) -> IndexMap<String, usize> {
    let mut counts = IndexMap::new();

    for (old, new) in before.columns().iter().zip(after.columns()) {
        let changed = old
            .values()
            .iter()
            .zip(new.values())
            .filter(|(a, b)| a != b)
            .count();

        if changed > 0 {
            *counts.entry(old.name.clone()).or_insert(0) += changed;
        }
    }

    counts
}
