//! Missing-value injection.

use crate::dataset::{Dataset, Value};

use super::probability::Probability;

/// Default per-cell probability of becoming missing.
pub const DEFAULT_NULL_PROBABILITY: Probability = Probability::constant(0.10);

/// Mark each cell missing with probability `null_probability`, drawing
/// independently for every (row, column) pair.
pub fn inject_nulls(
    dataset: &Dataset,
    null_probability: Probability,
    rng: &mut fastrand::Rng,
) -> Dataset {
    let mut corrupted = dataset.clone();

    for col in 0..corrupted.column_count() {
        for cell in corrupted.values_mut(col) {
            if null_probability.draw(rng) {
                *cell = Value::Missing;
            }
        }
    }

    corrupted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Column;

    fn id_name_dataset() -> Dataset {
        let names = [
            "alpha", "bravo", "charlie", "delta", "echo", "foxtrot", "golf", "hotel", "india",
            "juliet",
        ];
        Dataset::new(vec![
            Column::new("id", (1..=10).map(Value::Integer).collect()),
            Column::new("name", names.iter().map(|n| Value::text(*n)).collect()),
        ])
        .unwrap()
    }

    #[test]
    fn test_zero_probability_is_identity() {
        let dataset = id_name_dataset();
        let mut rng = fastrand::Rng::with_seed(1);
        assert_eq!(inject_nulls(&dataset, Probability::ZERO, &mut rng), dataset);
    }

    #[test]
    fn test_full_probability_blanks_everything() {
        let dataset = id_name_dataset();
        let mut rng = fastrand::Rng::with_seed(1);
        let result = inject_nulls(&dataset, Probability::ONE, &mut rng);

        assert_eq!(result.shape(), dataset.shape());
        assert_eq!(result.missing_count(), 20);
    }

    #[test]
    fn test_roughly_matches_probability() {
        let dataset = Dataset::new(vec![Column::new(
            "x",
            (0..10_000).map(Value::Integer).collect(),
        )])
        .unwrap();
        let mut rng = fastrand::Rng::with_seed(3);
        let result = inject_nulls(&dataset, DEFAULT_NULL_PROBABILITY, &mut rng);

        let missing = result.missing_count();
        assert!((800..1200).contains(&missing), "missing = {}", missing);
    }

    #[test]
    fn test_input_untouched() {
        let dataset = id_name_dataset();
        let mut rng = fastrand::Rng::with_seed(5);
        let _ = inject_nulls(&dataset, Probability::ONE, &mut rng);
        assert_eq!(dataset.missing_count(), 0);
    }
}
