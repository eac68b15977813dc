//! Error types for matriz operations.
//!
//! Every fallible engine operation returns [`Result`]; failures are
//! reported to the immediate caller and never logged-and-swallowed.

use std::fmt;

/// Main error type for matriz operations.
///
/// # Examples
///
/// ```
/// use matriz::error::MatrizError;
///
/// let err = MatrizError::DimensionMismatch {
///     expected: "2x3".to_string(),
///     actual: "3x2".to_string(),
/// };
/// assert!(err.to_string().contains("dimension mismatch"));
/// ```
#[derive(Debug)]
pub enum MatrizError {
    /// A constructor was given a zero row or column count.
    InvalidDimensions {
        /// Requested row count
        rows: usize,
        /// Requested column count
        cols: usize,
    },

    /// Operand shapes are incompatible for the operation.
    DimensionMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// A square-only operation was given a rectangular matrix.
    NotSquare {
        /// Row count of the offending matrix
        rows: usize,
        /// Column count of the offending matrix
        cols: usize,
    },

    /// A row or column index is past the end of the matrix.
    IndexOutOfBounds {
        /// Index that was requested
        index: usize,
        /// Exclusive bound it must stay under
        bound: usize,
    },

    /// I/O error (file not found, permission denied, etc.).
    Io(std::io::Error),

    /// Malformed persisted matrix or record file.
    FormatError {
        /// Error description
        message: String,
    },

    /// Generic error with string message.
    Other(String),
}

impl fmt::Display for MatrizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrizError::InvalidDimensions { rows, cols } => {
                write!(
                    f,
                    "Invalid matrix dimensions: {rows}x{cols}, rows and cols must be positive"
                )
            }
            MatrizError::DimensionMismatch { expected, actual } => {
                write!(
                    f,
                    "Matrix dimension mismatch: expected {expected}, got {actual}"
                )
            }
            MatrizError::NotSquare { rows, cols } => {
                write!(f, "Matrix must be square, got {rows}x{cols}")
            }
            MatrizError::IndexOutOfBounds { index, bound } => {
                write!(f, "Index {index} out of bounds, must be below {bound}")
            }
            MatrizError::Io(e) => write!(f, "I/O error: {e}"),
            MatrizError::FormatError { message } => {
                write!(f, "Invalid matrix format: {message}")
            }
            MatrizError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for MatrizError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MatrizError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for MatrizError {
    fn from(err: std::io::Error) -> Self {
        MatrizError::Io(err)
    }
}

impl From<&str> for MatrizError {
    fn from(msg: &str) -> Self {
        MatrizError::Other(msg.to_string())
    }
}

impl From<String> for MatrizError {
    fn from(msg: String) -> Self {
        MatrizError::Other(msg)
    }
}

/// Convenience result type for matriz operations.
pub type Result<T> = std::result::Result<T, MatrizError>;
