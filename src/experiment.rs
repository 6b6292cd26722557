//! Monte Carlo estimation of the percolation threshold.

use std::sync::OnceLock;

use rand::Rng;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::config::Config;
use crate::error::Result;
use crate::grid::Percolation;
use crate::result::ExperimentSummary;
use crate::statistics::{self, trial_rng, ConfidenceInterval};
use crate::thread_pool;

/// Repeated independent percolation trials on an n-by-n grid.
///
/// All trials run when the experiment is constructed. The per-trial
/// thresholds are immutable afterwards; `mean` and `stddev` are computed on
/// first access and cached.
///
/// # Example
///
/// ```
/// use percolation::MonteCarloExperiment;
///
/// let experiment = MonteCarloExperiment::new(20, 30).unwrap();
/// assert!(experiment.confidence_lo() <= experiment.mean());
/// assert!(experiment.mean() <= experiment.confidence_hi());
/// ```
#[derive(Debug, Clone)]
pub struct MonteCarloExperiment {
    grid_size: usize,
    thresholds: Vec<f64>,
    seed: u64,
    confidence_z: f64,
    mean: OnceLock<f64>,
    stddev: OnceLock<f64>,
}

impl MonteCarloExperiment {
    /// Run `trials` trials on an `n`-by-`n` grid with an OS-seeded RNG.
    ///
    /// # Errors
    ///
    /// Returns an invalid-argument error if `n` or `trials` is zero.
    pub fn new(n: usize, trials: usize) -> Result<Self> {
        Self::with_config(&Config::new(n, trials))
    }

    /// Run an experiment described by `config`.
    ///
    /// With `config.seed` set the thresholds are fully reproducible, with or
    /// without the `parallel` feature.
    pub fn with_config(config: &Config) -> Result<Self> {
        config.validate()?;

        let seed = config.seed.unwrap_or_else(|| rand::rng().random());
        let thresholds = run_trials(config.grid_size, config.trials, seed, config.threads)?;

        if config.trials == 1 {
            eprintln!("[percolation] single trial: standard deviation and confidence interval are undefined");
        }

        Ok(Self {
            grid_size: config.grid_size,
            thresholds,
            seed,
            confidence_z: config.confidence_z,
            mean: OnceLock::new(),
            stddev: OnceLock::new(),
        })
    }

    /// Grid side length used by every trial.
    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    /// Number of trials.
    pub fn trials(&self) -> usize {
        self.thresholds.len()
    }

    /// Base seed the trial streams were derived from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Per-trial thresholds, in trial order.
    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    /// Sample mean of the percolation threshold.
    pub fn mean(&self) -> f64 {
        *self.mean.get_or_init(|| statistics::mean(&self.thresholds))
    }

    /// Sample standard deviation of the percolation threshold.
    ///
    /// Divides by `trials - 1`. With a single trial the value is undefined
    /// and `NaN` is returned.
    pub fn stddev(&self) -> f64 {
        *self
            .stddev
            .get_or_init(|| statistics::sample_stddev(&self.thresholds))
    }

    /// Low endpoint of the confidence interval.
    pub fn confidence_lo(&self) -> f64 {
        self.confidence_interval().lo
    }

    /// High endpoint of the confidence interval.
    pub fn confidence_hi(&self) -> f64 {
        self.confidence_interval().hi
    }

    /// `mean ± z * stddev / sqrt(trials)`, with `z = 1.96` unless configured.
    pub fn confidence_interval(&self) -> ConfidenceInterval {
        ConfidenceInterval::normal(self.mean(), self.stddev(), self.trials(), self.confidence_z)
    }

    /// Serializable snapshot of the experiment.
    pub fn summary(&self) -> ExperimentSummary {
        let stddev = self.stddev();
        let defined = !stddev.is_nan();
        ExperimentSummary {
            grid_size: self.grid_size,
            trials: self.trials(),
            seed: self.seed,
            mean: self.mean(),
            stddev: defined.then_some(stddev),
            confidence_z: self.confidence_z,
            confidence_interval: defined.then(|| self.confidence_interval()),
        }
    }
}

/// Open uniformly random sites of a fresh `n`-by-`n` grid until it percolates.
///
/// Row and column are drawn independently from `[1, n]`; a draw that lands on
/// an open site is discarded and redrawn. Returns the fraction of open sites
/// at the moment of percolation, in `(0, 1]`.
pub fn run_trial<R: Rng>(n: usize, rng: &mut R) -> Result<f64> {
    let mut grid = Percolation::new(n)?;
    while !grid.percolates() {
        let row = rng.random_range(1..=n);
        let col = rng.random_range(1..=n);
        if !grid.is_open(row, col)? {
            grid.open(row, col)?;
        }
    }
    Ok(grid.number_of_open_sites() as f64 / (n * n) as f64)
}

/// Trial `i` always lands in slot `i`, whichever worker runs it.
#[cfg(feature = "parallel")]
fn run_trials(n: usize, trials: usize, seed: u64, threads: Option<usize>) -> Result<Vec<f64>> {
    thread_pool::install(threads, || {
        (0..trials)
            .into_par_iter()
            .map(|i| run_trial(n, &mut trial_rng(seed, i)))
            .collect()
    })
}

#[cfg(not(feature = "parallel"))]
fn run_trials(n: usize, trials: usize, seed: u64, threads: Option<usize>) -> Result<Vec<f64>> {
    thread_pool::install(threads, || {
        (0..trials)
            .map(|i| run_trial(n, &mut trial_rng(seed, i)))
            .collect()
    })
}
