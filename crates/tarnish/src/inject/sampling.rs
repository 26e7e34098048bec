//! Row sampling without replacement.

use super::probability::Probability;

/// Pick `fraction.sample_size(row_count)` distinct row indices uniformly at
/// random (partial Fisher-Yates).
pub fn sample_rows(rng: &mut fastrand::Rng, row_count: usize, fraction: Probability) -> Vec<usize> {
    let amount = fraction.sample_size(row_count);
    let mut indices: Vec<usize> = (0..row_count).collect();

    for i in 0..amount {
        let j = rng.usize(i..row_count);
        indices.swap(i, j);
    }

    indices.truncate(amount);
    indices
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sample_is_distinct_and_in_range() {
        let mut rng = fastrand::Rng::with_seed(42);
        let rows = sample_rows(&mut rng, 100, Probability::new(0.3).unwrap());

        assert_eq!(rows.len(), 30);
        assert!(rows.iter().all(|&r| r < 100));
        assert_eq!(rows.iter().collect::<HashSet<_>>().len(), 30);
    }

    #[test]
    fn test_full_and_empty_samples() {
        let mut rng = fastrand::Rng::with_seed(1);

        let mut all = sample_rows(&mut rng, 5, Probability::ONE);
        all.sort_unstable();
        assert_eq!(all, vec![0, 1, 2, 3, 4]);

        assert!(sample_rows(&mut rng, 5, Probability::ZERO).is_empty());
        assert!(sample_rows(&mut rng, 0, Probability::ONE).is_empty());
    }

    #[test]
    fn test_seeded_sampling_is_reproducible() {
        let fraction = Probability::new(0.5).unwrap();
        let a = sample_rows(&mut fastrand::Rng::with_seed(9), 20, fraction);
        let b = sample_rows(&mut fastrand::Rng::with_seed(9), 20, fraction);
        assert_eq!(a, b);
    }
}
