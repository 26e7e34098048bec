//! Inconsistent text formatting injection.

use serde::{Deserialize, Serialize};

use crate::dataset::{ColumnKind, Dataset, Value};

use super::probability::Probability;
use super::sampling::sample_rows;

/// Default share of rows per text column that get reformatted.
pub const DEFAULT_FORMAT_PROBABILITY: Probability = Probability::constant(0.10);

/// One way of restyling a text value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatVariant {
    /// Fully upper-cased.
    Upper,
    /// Fully lower-cased.
    Lower,
    /// One space on each side.
    Padded,
    /// Every `-` replaced with `/`.
    SlashDelimited,
}

impl FormatVariant {
    /// All variants, equally likely.
    pub const ALL: [FormatVariant; 4] = [
        FormatVariant::Upper,
        FormatVariant::Lower,
        FormatVariant::Padded,
        FormatVariant::SlashDelimited,
    ];

    /// Restyle a value.
    pub fn apply(self, value: &str) -> String {
        match self {
            FormatVariant::Upper => value.to_uppercase(),
            FormatVariant::Lower => value.to_lowercase(),
            FormatVariant::Padded => format!(" {} ", value),
            FormatVariant::SlashDelimited => value.replace('-', "/"),
        }
    }

    /// Every restyling of `value`, in [`FormatVariant::ALL`] order.
    pub fn variants_of(value: &str) -> [String; 4] {
        Self::ALL.map(|variant| variant.apply(value))
    }

    fn random(rng: &mut fastrand::Rng) -> Self {
        Self::ALL[rng.usize(..Self::ALL.len())]
    }
}

/// Restyle a sample of the text cells of every text column.
pub fn inject_format_inconsistency(
    dataset: &Dataset,
    probability: Probability,
    rng: &mut fastrand::Rng,
) -> Dataset {
    let mut corrupted = dataset.clone();
    let row_count = corrupted.row_count();

    for col in 0..corrupted.column_count() {
        if corrupted.columns()[col].kind() != ColumnKind::Text {
            continue;
        }

        let rows = sample_rows(rng, row_count, probability);
        let values = corrupted.values_mut(col);

        for row in rows {
            if let Value::Text(text) = &mut values[row] {
                *text = FormatVariant::random(rng).apply(text);
            }
        }
    }

    corrupted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Column;

    #[test]
    fn test_variants() {
        assert_eq!(
            FormatVariant::variants_of("New-York"),
            [
                "NEW-YORK".to_string(),
                "new-york".to_string(),
                " New-York ".to_string(),
                "New/York".to_string(),
            ]
        );
    }

    #[test]
    fn test_changed_cells_are_variants() {
        let originals: Vec<String> = (0..40).map(|i| format!("Item-{}-Ab", i)).collect();
        let dataset = Dataset::new(vec![Column::new(
            "sku",
            originals.iter().map(|s| Value::text(s.as_str())).collect(),
        )])
        .unwrap();
        let mut rng = fastrand::Rng::with_seed(41);
        let result = inject_format_inconsistency(&dataset, Probability::ONE, &mut rng);

        for (original, after) in originals.iter().zip(result.column(0).unwrap().values()) {
            let after = after.as_text().unwrap().to_string();
            assert!(FormatVariant::variants_of(original).contains(&after));
        }
    }

    #[test]
    fn test_non_text_cells_untouched() {
        let dataset = Dataset::new(vec![
            Column::new("mixed", vec![Value::Missing, Value::Integer(7), Value::text("a-b")]),
            Column::new("n", vec![Value::Float(1.5), Value::Float(2.5), Value::Missing]),
        ])
        .unwrap();
        let mut rng = fastrand::Rng::with_seed(42);
        let result = inject_format_inconsistency(&dataset, Probability::ONE, &mut rng);

        let mixed = result.column(0).unwrap().values();
        assert_eq!(mixed[0], Value::Missing);
        assert_eq!(mixed[1], Value::Integer(7));
        assert_eq!(result.column(1), dataset.column(1));
    }
}
