//! Statistical outlier injection.

use tracing::debug;

use crate::dataset::{ColumnKind, Dataset, Value};

use super::probability::Probability;
use super::sampling::sample_rows;
use super::stats::{Moments, OutlierTarget};

/// Default share of rows per numeric column that become outliers.
pub const DEFAULT_OUTLIER_PROBABILITY: Probability = Probability::constant(0.05);

/// Overwrite a sample of every numeric column with `mean + 10 * std`.
///
/// Statistics are computed over the column's present numeric cells, with
/// the sample (n - 1) standard deviation. A zero-variance column receives
/// its mean; a column with fewer than two values is skipped.
pub fn inject_outliers(
    dataset: &Dataset,
    probability: Probability,
    rng: &mut fastrand::Rng,
) -> Dataset {
    let mut corrupted = dataset.clone();
    let row_count = corrupted.row_count();

    for col in 0..corrupted.column_count() {
        let column = &corrupted.columns()[col];
        if column.kind() != ColumnKind::Numeric {
            continue;
        }

        let rows = sample_rows(rng, row_count, probability);
        let target = OutlierTarget::from_moments(&Moments::from_values(column.values()));

        let Some(outlier) = target.value() else {
            debug!(column = %column.name, "skipping outliers: standard deviation undefined");
            continue;
        };
        if let OutlierTarget::Mean(_) = target {
            debug!(column = %column.name, "zero variance: outliers collapse to the mean");
        }

        let values = corrupted.values_mut(col);
        for row in rows {
            values[row] = Value::Float(outlier);
        }
    }

    corrupted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Column;

    #[test]
    fn test_outlier_magnitude() {
        let values: Vec<Value> = (1..=20).map(Value::Integer).collect();
        let moments = Moments::from_values(&values);
        let expected = moments.mean().unwrap() + 10.0 * moments.sample_std().unwrap();

        let dataset = Dataset::new(vec![Column::new("x", values)]).unwrap();
        let mut rng = fastrand::Rng::with_seed(31);
        let result = inject_outliers(&dataset, Probability::new(0.25).unwrap(), &mut rng);

        let changed: Vec<&Value> = result
            .column(0)
            .unwrap()
            .values()
            .iter()
            .zip(dataset.column(0).unwrap().values())
            .filter(|(after, before)| after != before)
            .map(|(after, _)| after)
            .collect();

        assert_eq!(changed.len(), 5);
        for value in changed {
            assert!((value.as_f64().unwrap() - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn test_zero_variance_yields_mean() {
        let dataset = Dataset::new(vec![Column::new("x", vec![Value::Integer(10); 5])]).unwrap();
        let mut rng = fastrand::Rng::with_seed(32);
        let result = inject_outliers(&dataset, Probability::ONE, &mut rng);

        assert_eq!(result.row_count(), 5);
        for value in result.column(0).unwrap().values() {
            assert_eq!(value.as_f64(), Some(10.0));
        }
    }

    #[test]
    fn test_single_value_column_skipped() {
        let dataset = Dataset::new(vec![Column::new(
            "x",
            vec![Value::Float(4.5), Value::Missing, Value::Missing],
        )])
        .unwrap();
        let mut rng = fastrand::Rng::with_seed(33);
        assert_eq!(inject_outliers(&dataset, Probability::ONE, &mut rng), dataset);
    }

    #[test]
    fn test_text_columns_untouched() {
        let dataset = Dataset::new(vec![Column::new(
            "x",
            vec![Value::Integer(1), Value::text("invalid"), Value::Integer(3)],
        )])
        .unwrap();
        let mut rng = fastrand::Rng::with_seed(34);
        assert_eq!(inject_outliers(&dataset, Probability::ONE, &mut rng), dataset);
    }
}
