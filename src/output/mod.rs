//! Human-readable output.
//!
//! The grid snapshot is a pure consumer of the public query API: it only
//! calls `is_open` and `is_full`. JSON lives on
//! [`ExperimentSummary`](crate::ExperimentSummary) itself.

pub mod terminal;

pub use terminal::{format_summary, render_grid};
