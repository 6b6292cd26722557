//! Serializable experiment results.

use serde::{Deserialize, Serialize};

use crate::statistics::ConfidenceInterval;

/// Snapshot of a finished Monte Carlo experiment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentSummary {
    /// Grid side length.
    pub grid_size: usize,

    /// Number of trials.
    pub trials: usize,

    /// Base seed the per-trial RNG streams were derived from.
    pub seed: u64,

    /// Sample mean of the percolation threshold.
    pub mean: f64,

    /// Sample standard deviation; `None` for a single trial.
    pub stddev: Option<f64>,

    /// Normal quantile used for the interval.
    pub confidence_z: f64,

    /// Confidence interval for the mean; `None` for a single trial.
    pub confidence_interval: Option<ConfidenceInterval>,
}

impl ExperimentSummary {
    /// Compact JSON, one line. Undefined spread is written as `null`.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Indented JSON for reports meant to be read.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Confidence level implied by `confidence_z`, as a percentage label.
    ///
    /// Only the common quantiles are named; anything else prints as `z=...`.
    pub fn confidence_label(&self) -> String {
        let known = [(1.645, "90%"), (1.96, "95%"), (2.576, "99%")];
        known
            .iter()
            .find(|(z, _)| (z - self.confidence_z).abs() < 1e-9)
            .map(|(_, label)| label.to_string())
            .unwrap_or_else(|| format!("z={}", self.confidence_z))
    }
}
