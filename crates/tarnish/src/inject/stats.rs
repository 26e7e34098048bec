//! Column statistics used by the outlier injector.

use crate::dataset::Value;

/// Running mean and variance accumulator (Welford's algorithm).
#[derive(Debug, Clone, Default)]
pub struct Moments {
    count: usize,
    mean: f64,
    m2: f64, // Sum of squared differences from mean
}

impl Moments {
    /// Accumulate the numeric cells of a column, skipping everything else.
    pub fn from_values(values: &[Value]) -> Self {
        let mut moments = Self::default();
        for value in values.iter().filter_map(Value::as_f64) {
            moments.add(value);
        }
        moments
    }

    /// Add a value.
    pub fn add(&mut self, value: f64) {
        self.count += 1;

        let delta = value - self.mean;
        self.mean += delta / self.count as f64;
        let delta2 = value - self.mean;
        self.m2 += delta * delta2;
    }

    /// Number of values seen.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Mean, if any values were seen.
    pub fn mean(&self) -> Option<f64> {
        (self.count > 0).then_some(self.mean)
    }

    /// Sample standard deviation (n - 1 denominator); undefined below two values.
    pub fn sample_std(&self) -> Option<f64> {
        if self.count < 2 {
            None
        } else {
            Some((self.m2 / (self.count - 1) as f64).sqrt())
        }
    }
}

/// Replacement value for outlier cells, or why there is none.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutlierTarget {
    /// `mean + 10 * std` with a non-zero std.
    Extreme(f64),
    /// Zero variance: the target collapses to the mean.
    Mean(f64),
    /// Fewer than two values or non-finite statistics.
    Undefined,
}

impl OutlierTarget {
    /// Distance of the outlier from the mean, in standard deviations.
    pub const SIGMAS: f64 = 10.0;

    /// Decide the target value from a column's moments.
    pub fn from_moments(moments: &Moments) -> Self {
        let (Some(mean), Some(std)) = (moments.mean(), moments.sample_std()) else {
            return OutlierTarget::Undefined;
        };

        if !mean.is_finite() || !std.is_finite() {
            OutlierTarget::Undefined
        } else if std == 0.0 {
            OutlierTarget::Mean(mean)
        } else {
            OutlierTarget::Extreme(mean + Self::SIGMAS * std)
        }
    }

    /// The value to write, if any.
    pub fn value(self) -> Option<f64> {
        match self {
            OutlierTarget::Extreme(v) | OutlierTarget::Mean(v) => Some(v),
            OutlierTarget::Undefined => None,
        }
    }
}
