//! Error taxonomy for the simulation core.

use std::fmt;

/// Fatal errors raised while building the initial generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreError {
    /// Grid dimensions must both be at least 1.
    Allocation { rows: usize, columns: usize },
    /// The pattern contained no alive markers, so there is nothing to simulate.
    EmptyPattern,
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreError::Allocation { rows, columns } if *rows == 0 || *columns == 0 => write!(
                f,
                "cannot allocate a {}x{} grid: rows and columns must be greater than 0",
                rows, columns
            ),
            CoreError::Allocation { rows, columns } => {
                write!(f, "cannot allocate a {}x{} grid: too large", rows, columns)
            }
            CoreError::EmptyPattern => write!(f, "pattern contains no alive cells"),
        }
    }
}

impl std::error::Error for CoreError {}
