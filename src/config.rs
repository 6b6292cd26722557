//! Configuration for Monte Carlo experiments.

use std::env;

use crate::error::{PercolationError, Result};
use crate::statistics::Z_95;

/// Configuration options for `MonteCarloExperiment`.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Grid side length (default: 200).
    pub grid_size: usize,

    /// Number of independent trials (default: 100).
    pub trials: usize,

    /// Optional deterministic base seed.
    ///
    /// Trial `i` draws from its own stream derived from this seed, so equal
    /// seeds give equal samples regardless of thread count.
    pub seed: Option<u64>,

    /// Worker threads for the `parallel` feature (default: all logical CPUs).
    pub threads: Option<usize>,

    /// Normal quantile for the confidence interval (default: 1.96, i.e. 95%).
    pub confidence_z: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            grid_size: 200,
            trials: 100,
            seed: None,
            threads: None,
            confidence_z: Z_95,
        }
    }
}

impl Config {
    /// Configuration for an `n`-by-`n` grid and `trials` trials.
    pub fn new(grid_size: usize, trials: usize) -> Self {
        Self {
            grid_size,
            trials,
            ..Self::default()
        }
    }

    /// Set the grid side length.
    pub fn grid_size(mut self, n: usize) -> Self {
        self.grid_size = n;
        self
    }

    /// Set the trial count.
    pub fn trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    /// Set a deterministic base seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Cap the number of worker threads.
    pub fn threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    /// Set the normal quantile used for the confidence interval.
    pub fn confidence_z(mut self, z: f64) -> Self {
        self.confidence_z = z;
        self
    }

    /// Merge overrides from environment variables.
    ///
    /// Reads `PERCOLATION_GRID_SIZE`, `PERCOLATION_TRIALS`, `PERCOLATION_SEED`
    /// and `PERCOLATION_THREADS`. Values that do not parse are reported on
    /// stderr and ignored.
    pub fn from_env(mut self) -> Self {
        if let Some(n) = parse_env::<usize>("PERCOLATION_GRID_SIZE") {
            self = self.grid_size(n);
        }
        if let Some(trials) = parse_env::<usize>("PERCOLATION_TRIALS") {
            self = self.trials(trials);
        }
        if let Some(seed) = parse_env::<u64>("PERCOLATION_SEED") {
            self = self.seed(seed);
        }
        if let Some(threads) = parse_env::<usize>("PERCOLATION_THREADS") {
            self = self.threads(threads);
        }
        self
    }

    /// Reject non-positive grid sizes and trial counts, and a confidence
    /// quantile that is negative or not finite.
    pub fn validate(&self) -> Result<()> {
        if self.grid_size == 0 {
            return Err(PercolationError::InvalidGridSize { n: self.grid_size });
        }
        if self.trials == 0 {
            return Err(PercolationError::InvalidTrialCount { trials: self.trials });
        }
        // A negative z would swap the interval bounds around the mean
        if !self.confidence_z.is_finite() || self.confidence_z < 0.0 {
            return Err(PercolationError::InvalidConfidenceZ { z: self.confidence_z });
        }
        Ok(())
    }
}

fn parse_env<T: std::str::FromStr>(key: &str) -> Option<T> {
    let raw = env::var(key).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            eprintln!("[percolation] ignoring {}={:?}: not a valid number", key, raw);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.grid_size, 200);
        assert_eq!(config.trials, 100);
        assert_eq!(config.seed, None);
        assert_eq!(config.confidence_z, 1.96);
    }

    #[test]
    fn test_setters_chain() {
        let config = Config::new(20, 30).seed(7).threads(2).confidence_z(2.576);
        assert_eq!(config.grid_size, 20);
        assert_eq!(config.trials, 30);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.threads, Some(2));
        assert!((config.confidence_z - 2.576).abs() < 1e-12);
    }

    #[test]
    fn test_validate() {
        assert!(Config::new(1, 1).validate().is_ok());
        assert_eq!(
            Config::new(0, 5).validate(),
            Err(PercolationError::InvalidGridSize { n: 0 })
        );
        assert_eq!(
            Config::new(5, 0).validate(),
            Err(PercolationError::InvalidTrialCount { trials: 0 })
        );
    }

    #[test]
    fn test_validate_rejects_bad_confidence_z() {
        assert_eq!(
            Config::new(5, 10).confidence_z(-1.96).validate(),
            Err(PercolationError::InvalidConfidenceZ { z: -1.96 })
        );
        assert!(matches!(
            Config::new(5, 10).confidence_z(f64::NAN).validate(),
            Err(PercolationError::InvalidConfidenceZ { z }) if z.is_nan()
        ));
        assert!(Config::new(5, 10).confidence_z(f64::INFINITY).validate().is_err());
        assert!(Config::new(5, 10).confidence_z(0.0).validate().is_ok());
    }

    #[test]
    fn test_negative_z_rejected_before_running() {
        let config = Config::new(5, 10).seed(1).confidence_z(-1.96);
        let err = crate::MonteCarloExperiment::with_config(&config).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_from_env_overrides() {
        // Only this test touches these variables
        env::set_var("PERCOLATION_TRIALS", "12");
        env::set_var("PERCOLATION_SEED", "not-a-number");
        let config = Config::new(5, 3).from_env();
        env::remove_var("PERCOLATION_TRIALS");
        env::remove_var("PERCOLATION_SEED");

        assert_eq!(config.trials, 12);
        assert_eq!(config.seed, None);
        assert_eq!(config.grid_size, 5);
    }
}
