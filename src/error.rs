//! Error types for Matriz operations.
//!
//! The default matrix API reports failures through sentinel values (the
//! 0x0 null matrix, the scalar `0.0` determinant); the `try_*` variants
//! report them through this module instead.

use std::fmt;

/// Main error type for Matriz operations.
///
/// Distinguishes the failure modes the sentinel API collapses: a
/// dimension mismatch, a non-square input, a singular matrix, and an
/// out-of-range index.
///
/// # Examples
///
/// ```
/// use matriz::error::MatrizError;
///
/// let err = MatrizError::NotSquare { rows: 2, cols: 3 };
/// assert!(err.to_string().contains("square"));
/// ```
#[derive(Debug)]
pub enum MatrizError {
    /// Matrix dimensions don't match for the operation.
    DimensionMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// Operation requires a square matrix.
    NotSquare {
        /// Row count of the offending matrix
        rows: usize,
        /// Column count of the offending matrix
        cols: usize,
    },

    /// Matrix is singular (non-invertible).
    SingularMatrix {
        /// Pivot position where the zero diagonal entry survived
        pivot: usize,
    },

    /// Row or column index outside the valid range.
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Number of rows/columns available
        len: usize,
    },

    /// Literal grid rows have differing lengths.
    RaggedRows {
        /// Index of the first offending row
        row: usize,
        /// Length of the first row
        expected: usize,
        /// Length of the offending row
        actual: usize,
    },

    /// Generic error with string message.
    Other(String),
}

impl fmt::Display for MatrizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrizError::DimensionMismatch { expected, actual } => {
                write!(
                    f,
                    "Matrix dimension mismatch: expected {expected}, got {actual}"
                )
            }
            MatrizError::NotSquare { rows, cols } => {
                write!(f, "Matrix must be square, got {rows}x{cols}")
            }
            MatrizError::SingularMatrix { pivot } => {
                write!(
                    f,
                    "Singular matrix: zero pivot on diagonal entry {pivot}, cannot invert"
                )
            }
            MatrizError::IndexOutOfRange { index, len } => {
                write!(f, "Index {index} out of range for length {len}")
            }
            MatrizError::RaggedRows {
                row,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Ragged rows: row {row} has length {actual}, expected {expected}"
                )
            }
            MatrizError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for MatrizError {}

impl From<&str> for MatrizError {
    fn from(msg: &str) -> Self {
        MatrizError::Other(msg.to_string())
    }
}
