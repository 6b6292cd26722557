//! Error type shared by the grid, the union-find forest and the experiment runner.

/// Rejection of an invalid argument at the API boundary.
///
/// Every fallible operation in this crate fails for exactly one reason: the
/// caller passed something out of range. The variants only differ in the
/// context they carry. Nothing is ever recovered internally, and a rejected
/// call leaves all state untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum PercolationError {
    /// Grid side must be at least 1.
    InvalidGridSize {
        /// The rejected side length.
        n: usize,
    },
    /// Trial count must be at least 1.
    InvalidTrialCount {
        /// The rejected trial count.
        trials: usize,
    },
    /// Confidence quantile must be finite and non-negative.
    InvalidConfidenceZ {
        /// The rejected quantile.
        z: f64,
    },
    /// A `(row, col)` pair outside `[1, n] x [1, n]`.
    SiteOutOfBounds {
        /// Requested row (1-indexed).
        row: usize,
        /// Requested column (1-indexed).
        col: usize,
        /// Grid side.
        n: usize,
    },
    /// A union-find element id outside `[0, len - 1]`.
    ElementOutOfRange {
        /// Requested element id.
        index: usize,
        /// Number of elements in the forest.
        len: usize,
    },
}

impl PercolationError {
    /// Whether this is an invalid-argument rejection.
    ///
    /// Always true; kept so callers can match on the error class without
    /// caring about the variant.
    pub fn is_invalid_argument(&self) -> bool {
        true
    }
}

impl std::fmt::Display for PercolationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PercolationError::InvalidGridSize { n } => {
                write!(f, "invalid argument: grid size must be positive, got {}", n)
            }
            PercolationError::InvalidTrialCount { trials } => {
                write!(f, "invalid argument: trial count must be positive, got {}", trials)
            }
            PercolationError::InvalidConfidenceZ { z } => write!(
                f,
                "invalid argument: confidence quantile must be finite and non-negative, got {}",
                z
            ),
            PercolationError::SiteOutOfBounds { row, col, n } => write!(
                f,
                "invalid argument: site ({}, {}) is outside [1, {}] x [1, {}]",
                row, col, n, n
            ),
            PercolationError::ElementOutOfRange { index, len } => write!(
                f,
                "invalid argument: element {} is outside [0, {}]",
                index,
                len.saturating_sub(1)
            ),
        }
    }
}

impl std::error::Error for PercolationError {}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PercolationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_mentions_coordinates() {
        let err = PercolationError::SiteOutOfBounds { row: 0, col: 4, n: 3 };
        let msg = err.to_string();
        assert!(msg.contains("(0, 4)"));
        assert!(msg.contains("[1, 3]"));
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_element_range_display() {
        let err = PercolationError::ElementOutOfRange { index: 11, len: 11 };
        assert_eq!(err.to_string(), "invalid argument: element 11 is outside [0, 10]");
    }

    #[test]
    fn test_confidence_z_display() {
        let err = PercolationError::InvalidConfidenceZ { z: -1.0 };
        assert!(err.to_string().contains("got -1"));
        assert!(err.is_invalid_argument());
    }
}
