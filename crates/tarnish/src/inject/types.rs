//! Type-mismatch injection.

use std::ops::Range;

use crate::dataset::{ColumnKind, Dataset, Value};

use super::probability::Probability;
use super::sampling::sample_rows;

/// Default per-column probability of being corrupted.
pub const DEFAULT_TYPE_ERROR_PROBABILITY: Probability = Probability::constant(0.10);

/// Share of rows rewritten in a corrupted column.
pub const TYPE_ERROR_ROW_FRACTION: Probability = Probability::constant(0.10);

/// Text written into numeric columns.
pub const INVALID_SENTINEL: &str = "invalid";

/// Range of numbers written into text columns.
pub const NUMERIC_NOISE: Range<i64> = 100..999;

/// Inject type-mismatched values.
///
/// Each column is selected once with probability `probability`. A selected
/// numeric column gets [`INVALID_SENTINEL`] in 10% of its rows; a selected
/// text column gets integers from [`NUMERIC_NOISE`], drawn per cell.
/// Columns with no present values are left alone.
pub fn inject_type_errors(
    dataset: &Dataset,
    probability: Probability,
    rng: &mut fastrand::Rng,
) -> Dataset {
    let mut corrupted = dataset.clone();
    let row_count = corrupted.row_count();

    for col in 0..corrupted.column_count() {
        let kind = corrupted.columns()[col].kind();
        if kind == ColumnKind::MissingOnly || !probability.draw(rng) {
            continue;
        }

        let rows = sample_rows(rng, row_count, TYPE_ERROR_ROW_FRACTION);
        let values = corrupted.values_mut(col);

        for row in rows {
            values[row] = match kind {
                ColumnKind::Numeric => Value::text(INVALID_SENTINEL),
                _ => Value::Integer(rng.i64(NUMERIC_NOISE)),
            };
        }
    }

    corrupted
}
