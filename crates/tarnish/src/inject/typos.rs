//! Single-keystroke typo injection.

use crate::dataset::{ColumnKind, Dataset, Value};

use super::probability::Probability;
use super::sampling::sample_rows;

/// Default share of rows per text column that receive a typo.
pub const DEFAULT_TYPO_PROBABILITY: Probability = Probability::constant(0.10);

/// Replace one character in a sample of cells of every text column.
///
/// Missing cells, numbers, and strings shorter than two characters are
/// left unchanged when sampled.
pub fn inject_typos(dataset: &Dataset, probability: Probability, rng: &mut fastrand::Rng) -> Dataset {
    let mut corrupted = dataset.clone();
    let row_count = corrupted.row_count();

    for col in 0..corrupted.column_count() {
        if corrupted.columns()[col].kind() != ColumnKind::Text {
            continue;
        }

        let rows = sample_rows(rng, row_count, probability);
        let values = corrupted.values_mut(col);

        for row in rows {
            if let Value::Text(word) = &mut values[row] {
                if let Some(misspelled) = typo(word, rng) {
                    *word = misspelled;
                }
            }
        }
    }

    corrupted
}

/// Swap one uniformly chosen character for a random lowercase letter.
fn typo(word: &str, rng: &mut fastrand::Rng) -> Option<String> {
    let mut chars: Vec<char> = word.chars().collect();
    if chars.len() < 2 {
        return None;
    }

    let position = rng.usize(..chars.len());
    chars[position] = rng.lowercase();
    Some(chars.into_iter().collect())
}
