//! # percolation
//!
//! Estimate the percolation threshold of an n-by-n grid.
//!
//! This crate provides:
//! - [`DisjointSet`]: weighted quick-union with path compression
//! - [`Percolation`]: an incremental grid tracker answering open / full /
//!   percolates queries through two virtual boundary sites
//! - [`MonteCarloExperiment`]: repeated random trials aggregated into a mean,
//!   sample standard deviation and 95% confidence interval
//!
//! ## Quick Start
//!
//! ```
//! use percolation::{Config, MonteCarloExperiment, Percolation};
//!
//! let mut grid = Percolation::new(3).unwrap();
//! grid.open(1, 2).unwrap();
//! grid.open(2, 2).unwrap();
//! grid.open(3, 2).unwrap();
//! assert!(grid.percolates());
//!
//! let experiment = MonteCarloExperiment::with_config(&Config::new(20, 50).seed(7)).unwrap();
//! println!("threshold ~ {:.3}", experiment.mean());
//! ```
//!
//! ## Features
//!
//! - `parallel` (default): trials run on a rayon thread pool. Seeded
//!   experiments give identical samples with or without it.

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
mod config;
mod disjoint_set;
mod error;
mod experiment;
mod grid;
mod result;
mod thread_pool;

// Functional modules
pub mod output;
pub mod statistics;

// Re-exports for public API
pub use config::Config;
pub use disjoint_set::DisjointSet;
pub use error::{PercolationError, Result};
pub use experiment::{run_trial, MonteCarloExperiment};
pub use grid::Percolation;
pub use result::ExperimentSummary;
pub use statistics::ConfidenceInterval;

/// Run `trials` trials on an `n`-by-`n` grid and summarize them.
///
/// Shorthand for `MonteCarloExperiment::new(n, trials)?.summary()`.
///
/// # Errors
///
/// Returns an invalid-argument error if `n` or `trials` is zero.
pub fn estimate_threshold(n: usize, trials: usize) -> Result<ExperimentSummary> {
    Ok(MonteCarloExperiment::new(n, trials)?.summary())
}
