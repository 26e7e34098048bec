//! Corruption transforms.
//!
//! Every injector takes a dataset by reference and returns a corrupted copy
//! of the same shape. Randomness comes from the caller's generator, so a
//! seeded [`fastrand::Rng`] makes any injector reproducible.

mod formats;
mod nulls;
mod outliers;
mod probability;
mod sampling;
mod stats;
mod types;
mod typos;

pub use formats::{DEFAULT_FORMAT_PROBABILITY, FormatVariant, inject_format_inconsistency};
pub use nulls::{DEFAULT_NULL_PROBABILITY, inject_nulls};
pub use outliers::{DEFAULT_OUTLIER_PROBABILITY, inject_outliers};
pub use probability::Probability;
pub use sampling::sample_rows;
pub use stats::{Moments, OutlierTarget};
pub use types::{
    DEFAULT_TYPE_ERROR_PROBABILITY, INVALID_SENTINEL, NUMERIC_NOISE, TYPE_ERROR_ROW_FRACTION,
    inject_type_errors,
};
pub use typos::{DEFAULT_TYPO_PROBABILITY, inject_typos};
