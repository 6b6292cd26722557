//! Statistical helpers for the Monte Carlo experiment.
//!
//! This module provides:
//! - Sample moments (mean, sample standard deviation)
//! - Normal-approximation confidence intervals for a sample mean
//! - Counter-based seeding so every trial owns an independent RNG stream

mod interval;
mod moments;
mod seeding;

pub use interval::{ConfidenceInterval, Z_95};
pub use moments::{mean, sample_stddev, sample_variance};
pub use seeding::{counter_rng_seed, trial_rng};
