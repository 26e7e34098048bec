//! Validated probability / fraction parameter.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TarnishError};

/// A probability or row fraction in `[0, 1]`.
///
/// Out-of-range values and NaN are rejected at construction rather than
/// clamped.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Probability(f64);

impl Probability {
    /// Never fires / selects no rows.
    pub const ZERO: Probability = Probability(0.0);
    /// Always fires / selects every row.
    pub const ONE: Probability = Probability(1.0);

    /// Create a probability, rejecting values outside `[0, 1]`.
    pub fn new(value: f64) -> Result<Self> {
        Self::named("probability", value)
    }

    /// Like [`Probability::new`], naming the parameter in the error.
    pub fn named(parameter: &str, value: f64) -> Result<Self> {
        if (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(TarnishError::InvalidProbability {
                parameter: parameter.to_string(),
                value,
            })
        }
    }

    /// Built-in defaults. Only call with literals in `[0, 1]`.
    pub(crate) const fn constant(value: f64) -> Self {
        Self(value)
    }

    /// The raw value.
    pub fn value(self) -> f64 {
        self.0
    }

    /// One Bernoulli draw.
    pub fn draw(self, rng: &mut fastrand::Rng) -> bool {
        rng.f64() < self.0
    }

    /// Number of rows selected out of `row_count`, rounded half to even.
    pub fn sample_size(self, row_count: usize) -> usize {
        let size = (self.0 * row_count as f64).round_ties_even() as usize;
        size.min(row_count)
    }
}

impl TryFrom<f64> for Probability {
    type Error = TarnishError;

    fn try_from(value: f64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Probability> for f64 {
    fn from(probability: Probability) -> f64 {
        probability.0
    }
}
