//! Error types for matrix construction and operations.

use thiserror::Error;

/// Errors raised by matrix construction and operations.
///
/// Every error is surfaced synchronously to the caller of the failing
/// operation; there is no retry, no partial result, no internal recovery.
/// Floating-point degeneracy (division by a zero-modulus complex value) is
/// not an error and never appears here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// Construction with zero rows or zero columns.
    #[error("ShapeError: matrix must have at least one row and one column")]
    EmptyShape,

    /// Construction from a non-rectangular grid.
    #[error("ShapeError: row {row} has {got} columns, expected {expected}")]
    RaggedRows {
        /// Index of the offending row.
        row: usize,
        /// Its actual length.
        got: usize,
        /// Length of the first row.
        expected: usize,
    },

    /// Cell access outside the matrix bounds.
    #[error("BoundsError: attempt to access ({row}, {col}) of a {rows}x{cols} matrix")]
    OutOfBounds {
        /// Attempted row index.
        row: usize,
        /// Attempted column index.
        col: usize,
        /// Matrix row count.
        rows: usize,
        /// Matrix column count.
        cols: usize,
    },

    /// Element-wise addition of differently shaped matrices.
    #[error("DimensionMismatch: cannot add a {a_rows}x{a_cols} matrix and a {b_rows}x{b_cols} matrix")]
    AddDimensionMismatch {
        /// Left operand row count.
        a_rows: usize,
        /// Left operand column count.
        a_cols: usize,
        /// Right operand row count.
        b_rows: usize,
        /// Right operand column count.
        b_cols: usize,
    },

    /// Multiplication where the inner dimensions disagree.
    #[error("DimensionMismatch: cannot multiply a {a_rows}x{a_cols} matrix by a {b_rows}x{b_cols} matrix")]
    MulDimensionMismatch {
        /// Left operand row count.
        a_rows: usize,
        /// Left operand column count.
        a_cols: usize,
        /// Right operand row count.
        b_rows: usize,
        /// Right operand column count.
        b_cols: usize,
    },

    /// Determinant of a non-square matrix.
    #[error("determinant is undefined for a {rows}x{cols} matrix")]
    NonSquareDeterminant {
        /// Matrix row count.
        rows: usize,
        /// Matrix column count.
        cols: usize,
    },
}

impl MatrixError {
    /// Create an out-of-bounds error for a cell access.
    pub fn out_of_bounds(row: usize, col: usize, rows: usize, cols: usize) -> Self {
        MatrixError::OutOfBounds {
            row,
            col,
            rows,
            cols,
        }
    }
}

/// Result type alias for matrix operations.
pub type MatrixResult<T> = Result<T, MatrixError>;
