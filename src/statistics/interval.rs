//! Confidence intervals for a sample mean.

use serde::{Deserialize, Serialize};

/// Two-sided 95% quantile of the standard normal distribution.
pub const Z_95: f64 = 1.96;

/// Closed interval `[lo, hi]` around a sample mean.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    /// Lower bound.
    pub lo: f64,
    /// Upper bound.
    pub hi: f64,
}

impl ConfidenceInterval {
    /// Normal-approximation interval `mean ± z * stddev / sqrt(n)`.
    ///
    /// Propagates `NaN` when `stddev` is undefined.
    pub fn normal(mean: f64, stddev: f64, n: usize, z: f64) -> Self {
        let half_width = z * stddev / (n as f64).sqrt();
        Self {
            lo: mean - half_width,
            hi: mean + half_width,
        }
    }

    /// Distance between the bounds.
    pub fn width(&self) -> f64 {
        self.hi - self.lo
    }

    /// Whether `value` lies within the bounds (inclusive).
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lo && value <= self.hi
    }
}
