//! Error types for matriz operations.
//!
//! Every failure mode of the crate maps to one variant of [`MatrizError`].
//! All errors are detected synchronously at the offending call; nothing is
//! retried internally and recovery is the caller's responsibility.

use std::fmt;

/// Main error type for matriz operations.
///
/// # Examples
///
/// ```
/// use matriz::error::MatrizError;
///
/// let err = MatrizError::SizeMismatch {
///     expected: "3x3".to_string(),
///     actual: "3x2".to_string(),
/// };
/// assert!(err.to_string().contains("size mismatch"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum MatrizError {
    /// An argument is invalid on its own: a bad rectangle for `copy`/`paste`,
    /// a data buffer of the wrong length, a non-square matrix passed to a
    /// determinant or the solver.
    InvalidArgument {
        /// What was wrong with the argument
        message: String,
    },

    /// Two operands have incompatible dimensions.
    SizeMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// A row/column/element index lies outside the current bounds.
    OutOfRange {
        /// The offending index
        index: usize,
        /// The bound it had to stay below
        len: usize,
    },

    /// Gaussian elimination found no usable pivot in a column.
    Singular {
        /// The pivot column with no usable entry
        column: usize,
        /// The largest magnitude found in that column
        pivot: f64,
    },
}

impl fmt::Display for MatrizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrizError::InvalidArgument { message } => {
                write!(f, "invalid argument: {message}")
            }
            MatrizError::SizeMismatch { expected, actual } => {
                write!(f, "size mismatch: expected {expected}, got {actual}")
            }
            MatrizError::OutOfRange { index, len } => {
                write!(f, "index {index} out of range (len={len})")
            }
            MatrizError::Singular { column, pivot } => {
                write!(
                    f,
                    "singular system: no usable pivot in column {column} (best magnitude {pivot})"
                )
            }
        }
    }
}

impl std::error::Error for MatrizError {}

impl MatrizError {
    /// Create an invalid-argument error with a descriptive message.
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a size mismatch error from two dimension descriptions.
    #[must_use]
    pub fn size_mismatch(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::SizeMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Create an out-of-range error.
    #[must_use]
    pub fn out_of_range(index: usize, len: usize) -> Self {
        Self::OutOfRange { index, len }
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, MatrizError>;
