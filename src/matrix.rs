//! Dense rectangular matrices of complex values.
//!
//! Storage is a flat row-major buffer plus the two dimensions. Both
//! dimensions are at least 1 and fixed at construction; transposition and
//! multiplication always produce a new matrix. `clone()` produces an
//! independent grid whose cells can be mutated without affecting the
//! source.

use std::fmt;

use num_traits::Zero;
use serde::{Deserialize, Serialize};

use crate::complex::Complex;
use crate::error::{MatrixError, MatrixResult};

/// Dense `rows x cols` matrix of [`Complex`] values.
///
/// Serialized as a nested grid of rows; deserialization runs the same
/// shape validation as [`Matrix::from_rows`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Complex>>", into = "Vec<Vec<Complex>>")]
pub struct Matrix {
    pub(crate) data: Vec<Complex>,
    pub(crate) rows: usize,
    pub(crate) cols: usize,
}

impl TryFrom<Vec<Vec<Complex>>> for Matrix {
    type Error = MatrixError;

    fn try_from(grid: Vec<Vec<Complex>>) -> MatrixResult<Self> {
        Matrix::from_rows(grid)
    }
}

impl From<Matrix> for Vec<Vec<Complex>> {
    fn from(m: Matrix) -> Self {
        (0..m.rows)
            .map(|i| m.data[i * m.cols..(i + 1) * m.cols].to_vec())
            .collect()
    }
}

impl Matrix {
    /// Build a matrix from a pre-populated grid of rows.
    ///
    /// Fails with a shape error when the grid is empty, the first row is
    /// empty, or any row length differs from the first row's.
    pub fn from_rows(grid: Vec<Vec<Complex>>) -> MatrixResult<Self> {
        let rows = grid.len();
        let cols = grid.first().map_or(0, Vec::len);
        if rows == 0 || cols == 0 {
            return Err(MatrixError::EmptyShape);
        }
        let mut data = Vec::with_capacity(rows * cols);
        for (i, row) in grid.iter().enumerate() {
            if row.len() != cols {
                return Err(MatrixError::RaggedRows {
                    row: i,
                    got: row.len(),
                    expected: cols,
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self { data, rows, cols })
    }

    /// Build a zero-filled matrix of the given dimensions.
    pub fn zeros(rows: usize, cols: usize) -> MatrixResult<Self> {
        if rows == 0 || cols == 0 {
            return Err(MatrixError::EmptyShape);
        }
        Ok(Self {
            data: vec![Complex::zero(); rows * cols],
            rows,
            cols,
        })
    }

    /// The number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// The number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    pub(crate) fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    fn check_bounds(&self, row: usize, col: usize) -> MatrixResult<()> {
        if row >= self.rows || col >= self.cols {
            return Err(MatrixError::out_of_bounds(row, col, self.rows, self.cols));
        }
        Ok(())
    }

    /// Bounds-checked cell read.
    pub fn get(&self, row: usize, col: usize) -> MatrixResult<Complex> {
        self.check_bounds(row, col)?;
        Ok(self.data[self.index(row, col)])
    }

    /// Bounds-checked cell write, replacing the whole cell.
    pub fn set(&mut self, row: usize, col: usize, value: Complex) -> MatrixResult<()> {
        self.check_bounds(row, col)?;
        let idx = self.index(row, col);
        self.data[idx] = value;
        Ok(())
    }

    /// Bounds-checked write of the real component only; the cell keeps its
    /// current imaginary component.
    pub fn set_real(&mut self, row: usize, col: usize, value: f64) -> MatrixResult<()> {
        self.check_bounds(row, col)?;
        let idx = self.index(row, col);
        self.data[idx].re = value;
        Ok(())
    }

    /// Element-wise sum into a new matrix.
    ///
    /// Fails unless both matrices have identical dimensions. Neither
    /// operand is mutated.
    pub fn add(&self, other: &Matrix) -> MatrixResult<Matrix> {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(MatrixError::AddDimensionMismatch {
                a_rows: self.rows,
                a_cols: self.cols,
                b_rows: other.rows,
                b_cols: other.cols,
            });
        }
        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(&a, &b)| a + b)
            .collect();
        Ok(Matrix {
            data,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// New `cols x rows` matrix with cell `(j, i)` = this cell `(i, j)`.
    pub fn transpose(&self) -> Matrix {
        let mut data = vec![Complex::zero(); self.data.len()];
        for i in 0..self.rows {
            for j in 0..self.cols {
                data[j * self.rows + i] = self.data[self.index(i, j)];
            }
        }
        Matrix {
            data,
            rows: self.cols,
            cols: self.rows,
        }
    }
}

impl fmt::Display for Matrix {
    /// Each cell is rendered in the [`Complex`] text form followed by a
    /// tab; each row is terminated by a newline.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.rows {
            for j in 0..self.cols {
                write!(f, "{}\t", self.data[self.index(i, j)])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
