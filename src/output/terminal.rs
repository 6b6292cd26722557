//! Terminal output: ASCII grid snapshots and coloured experiment reports.

use colored::Colorize;

use crate::error::Result;
use crate::grid::Percolation;
use crate::result::ExperimentSummary;

/// Glyph for a closed site.
pub const CLOSED: char = '#';
/// Glyph for an open site that is not full.
pub const OPEN: char = ' ';
/// Glyph for a full site.
pub const FULL: char = '@';

/// Draw the grid as ASCII art under `title`.
///
/// Each site is boxed by `+`, `-` and `|`, and drawn as [`CLOSED`], [`OPEN`]
/// or [`FULL`]. Illustrative only.
///
/// ```text
/// +-+-+
/// |@|#|
/// +-+-+
/// |@| |
/// +-+-+
/// ```
pub fn render_grid(grid: &mut Percolation, title: &str) -> Result<String> {
    let n = grid.size();
    let mut output = String::with_capacity((2 * n + 2) * (2 * n + 1) + title.len() + 1);
    output.push_str(title);
    output.push('\n');

    let border: String = "+-".repeat(n) + "+";
    for row in 1..=n {
        output.push_str(&border);
        output.push('\n');
        output.push('|');
        for col in 1..=n {
            output.push(site_glyph(grid, row, col)?);
            output.push('|');
        }
        output.push('\n');
    }
    output.push_str(&border);
    output.push('\n');

    Ok(output)
}

fn site_glyph(grid: &mut Percolation, row: usize, col: usize) -> Result<char> {
    if grid.is_full(row, col)? {
        Ok(FULL)
    } else if grid.is_open(row, col)? {
        Ok(OPEN)
    } else {
        Ok(CLOSED)
    }
}

/// Format an [`ExperimentSummary`] for human-readable terminal output.
///
/// The last three lines are the classic `mean`, `stddev` and confidence
/// interval report.
pub fn format_summary(summary: &ExperimentSummary) -> String {
    let mut output = String::new();
    let sep = "\u{2500}".repeat(62);

    output.push_str(&format!("{}\n", "percolation".bold()));
    output.push_str(&sep);
    output.push('\n');
    output.push_str(&format!(
        "  Grid: {}x{}   Trials: {}   Seed: 0x{:016x}\n",
        summary.grid_size, summary.grid_size, summary.trials, summary.seed
    ));
    output.push('\n');

    output.push_str(&format!("mean                    = {}\n", summary.mean));
    match (summary.stddev, summary.confidence_interval) {
        (Some(stddev), Some(ci)) => {
            output.push_str(&format!("stddev                  = {}\n", stddev));
            output.push_str(&format!(
                "{} confidence interval = [{}, {}]\n",
                summary.confidence_label(),
                ci.lo,
                ci.hi
            ));
        }
        _ => {
            output.push_str("stddev                  = undefined\n");
            output.push_str(&format!(
                "{} confidence interval = undefined\n",
                summary.confidence_label()
            ));
            output.push('\n');
            output.push_str(&format!(
                "  {}\n",
                "\u{26A0} A single trial has no spread; run at least two".yellow()
            ));
        }
    }

    output.push_str(&sep);
    output.push('\n');
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statistics::ConfidenceInterval;

    fn make_summary(trials: usize) -> ExperimentSummary {
        let spread = trials > 1;
        ExperimentSummary {
            grid_size: 200,
            trials,
            seed: 0xdead_beef,
            mean: 0.5929,
            stddev: spread.then_some(0.0087),
            confidence_z: 1.96,
            confidence_interval: spread.then_some(ConfidenceInterval { lo: 0.5912, hi: 0.5946 }),
        }
    }

    #[test]
    fn test_render_closed_grid() {
        let mut grid = Percolation::new(2).unwrap();
        let out = render_grid(&mut grid, "empty").unwrap();
        assert_eq!(out, "empty\n+-+-+\n|#|#|\n+-+-+\n|#|#|\n+-+-+\n");
    }

    #[test]
    fn test_render_open_and_full() {
        let mut grid = Percolation::new(2).unwrap();
        grid.open(1, 1).unwrap();
        grid.open(2, 2).unwrap();
        let out = render_grid(&mut grid, "t").unwrap();
        assert_eq!(out, "t\n+-+-+\n|@|#|\n+-+-+\n|#| |\n+-+-+\n");
    }

    #[test]
    fn test_format_summary() {
        let out = format_summary(&make_summary(100));
        assert!(out.contains("mean                    = 0.5929"));
        assert!(out.contains("stddev                  = 0.0087"));
        assert!(out.contains("95% confidence interval = [0.5912, 0.5946]"));
        assert!(out.contains("Trials: 100"));
    }

    #[test]
    fn test_format_single_trial() {
        let out = format_summary(&make_summary(1));
        assert!(out.contains("stddev                  = undefined"));
        assert!(out.contains("single trial"));
    }
}
