//! Matrix multiplication.

use num_traits::Zero;

use crate::complex::Complex;
use crate::error::{MatrixError, MatrixResult};
use crate::matrix::Matrix;

impl Matrix {
    /// Matrix product `self * other`.
    ///
    /// Fails unless `self.cols() == other.rows()`. The result is a
    /// `self.rows() x other.cols()` matrix where cell `(i, j)` is the
    /// complex dot product of row `i` of `self` and column `j` of `other`,
    /// accumulated from zero. Neither operand is mutated.
    pub fn multiply(&self, other: &Matrix) -> MatrixResult<Matrix> {
        if self.cols != other.rows {
            return Err(MatrixError::MulDimensionMismatch {
                a_rows: self.rows,
                a_cols: self.cols,
                b_rows: other.rows,
                b_cols: other.cols,
            });
        }

        let mut data = vec![Complex::zero(); self.rows * other.cols];
        for i in 0..self.rows {
            for j in 0..other.cols {
                let mut sum = Complex::zero();
                for k in 0..self.cols {
                    sum = sum + self.data[self.index(i, k)] * other.data[other.index(k, j)];
                }
                data[i * other.cols + j] = sum;
            }
        }

        Ok(Matrix {
            data,
            rows: self.rows,
            cols: other.cols,
        })
    }
}
