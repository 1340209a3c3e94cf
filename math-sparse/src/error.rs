//! Error type shared by storage, elimination and arithmetic

use crate::sparse::Dim;
use thiserror::Error;

/// Errors raised by sparse matrix operations.
///
/// All of them are structural: they are reported at the point of detection
/// and the computation in progress is abandoned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    #[error("Coordinate ({row}, {col}) is outside a {rows}x{cols} matrix")]
    OutOfRange {
        row: Dim,
        col: Dim,
        rows: Dim,
        cols: Dim,
    },
    /// Operand shapes do not fit together; `left` is the receiver of the
    /// operation and `right` the shape it was required to match.
    #[error(
        "Matrix dimensions mismatch: {left_rows}x{left_cols} is incompatible with {right_rows}x{right_cols}"
    )]
    InvalidDimensions {
        left_rows: Dim,
        left_cols: Dim,
        right_rows: Dim,
        right_cols: Dim,
    },
    #[error("Matrix must be square, got {rows}x{cols}")]
    NotSquare { rows: Dim, cols: Dim },
    #[error("Determinant is zero: no pivot in column {column}")]
    ZeroDeterminant { column: Dim },
    #[error("Dense shape {rows}x{cols} does not fit 32-bit dimensions")]
    DimensionOverflow { rows: usize, cols: usize },
}

impl MatrixError {
    pub(crate) fn mismatch(left: (Dim, Dim), right: (Dim, Dim)) -> Self {
        MatrixError::InvalidDimensions {
            left_rows: left.0,
            left_cols: left.1,
            right_rows: right.0,
            right_cols: right.1,
        }
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, MatrixError>;
