//! Determinant computation via Gaussian elimination with partial pivoting.
//!
//! Pivoting here only avoids division by an exact zero: when a diagonal
//! entry is the zero complex value, the first lower row with a non-zero
//! entry in that column is swapped into place. No pivot selection for
//! numerical stability is attempted.

use num_traits::{One, Zero};

use crate::complex::Complex;
use crate::error::{MatrixError, MatrixResult};
use crate::matrix::Matrix;

/// Outcome of readying a pivot position.
enum Pivot {
    /// The diagonal entry was already non-zero.
    Ready,
    /// A lower row was swapped into pivot position.
    Swapped,
    /// Every candidate entry in the column is zero.
    Singular,
}

impl Matrix {
    /// Determinant of a square matrix.
    ///
    /// Elimination runs on a working copy; the receiver is never mutated.
    /// Each elimination step computes `factor = tmp[j][i] / tmp[i][i]`,
    /// scales pivot row `i` by it, and subtracts the scaled row from row
    /// `j`. Every factor is accumulated into a coefficient, along with a
    /// `-1` per row swap, and the final diagonal product is divided by the
    /// accumulated coefficient to recover the determinant of the original
    /// matrix. A column with no usable pivot short-circuits: the matrix is
    /// singular and the determinant is zero.
    ///
    /// Fails only on non-square input. Singular matrices are a defined
    /// zero outcome, not an error.
    pub fn determinant(&self) -> MatrixResult<Complex> {
        if self.rows != self.cols {
            return Err(MatrixError::NonSquareDeterminant {
                rows: self.rows,
                cols: self.cols,
            });
        }

        let n = self.rows;
        let mut tmp = self.clone();
        let mut coef = Complex::one();

        for i in 0..n - 1 {
            match tmp.prepare_pivot(i) {
                Pivot::Ready => {}
                Pivot::Swapped => coef = coef * Complex::from_real(-1.0),
                Pivot::Singular => return Ok(Complex::zero()),
            }
            for j in i + 1..n {
                let entry = tmp.data[tmp.index(j, i)];
                if entry.is_zero() {
                    continue;
                }
                let factor = entry / tmp.data[tmp.index(i, i)];
                coef = coef * factor;
                tmp.scale_row(i, factor);
                tmp.subtract_row(j, i);
            }
        }

        let mut det = Complex::one();
        for i in 0..n {
            det = det * tmp.data[tmp.index(i, i)];
        }
        Ok(det / coef)
    }

    /// Ready the pivot at `(layer, layer)`, swapping the first lower row
    /// with a non-zero entry in the column into place when the diagonal
    /// entry is zero.
    fn prepare_pivot(&mut self, layer: usize) -> Pivot {
        if !self.data[self.index(layer, layer)].is_zero() {
            return Pivot::Ready;
        }
        for i in layer + 1..self.rows {
            if !self.data[self.index(i, layer)].is_zero() {
                self.swap_rows(layer, i);
                return Pivot::Swapped;
            }
        }
        Pivot::Singular
    }

    fn swap_rows(&mut self, a: usize, b: usize) {
        for j in 0..self.cols {
            let (ia, ib) = (self.index(a, j), self.index(b, j));
            self.data.swap(ia, ib);
        }
    }

    /// Multiply every entry of row `i` by `factor`, in place.
    fn scale_row(&mut self, i: usize, factor: Complex) {
        for j in 0..self.cols {
            let idx = self.index(i, j);
            self.data[idx] = self.data[idx] * factor;
        }
    }

    /// Subtract row `what` from row `from` element-wise, storing into row
    /// `from`.
    fn subtract_row(&mut self, from: usize, what: usize) {
        for j in 0..self.cols {
            let idx = self.index(from, j);
            let sub = self.data[self.index(what, j)];
            self.data[idx] = self.data[idx] - sub;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_reals(values: &[&[f64]]) -> Matrix {
        Matrix::from_rows(
            values
                .iter()
                .map(|row| row.iter().map(|&v| Complex::from_real(v)).collect())
                .collect(),
        )
        .unwrap()
    }

    fn assert_close(got: Complex, want: Complex) {
        assert!(
            (got.re - want.re).abs() < 1e-9 && (got.im - want.im).abs() < 1e-9,
            "expected {}, got {}",
            want,
            got
        );
    }

    #[test]
    fn test_determinant_1x1_is_sole_entry() {
        let m = Matrix::from_rows(vec![vec![Complex::new(4.0, -2.0)]]).unwrap();
        assert_eq!(m.determinant().unwrap(), Complex::new(4.0, -2.0));
    }

    #[test]
    fn test_determinant_2x2() {
        // det [1,2; 3,4] = 1*4 - 2*3 = -2
        let m = from_reals(&[&[1.0, 2.0], &[3.0, 4.0]]);
        assert_close(m.determinant().unwrap(), Complex::from_real(-2.0));
    }

    #[test]
    fn test_determinant_upper_triangular_is_diagonal_product() {
        let m = from_reals(&[&[2.0, 5.0, 1.0], &[0.0, 3.0, 7.0], &[0.0, 0.0, 4.0]]);
        assert_close(m.determinant().unwrap(), Complex::from_real(24.0));
    }

    #[test]
    fn test_determinant_with_row_swap_matches_cofactor_expansion() {
        // [0,1,2; 3,4,5; 6,7,9]: pivot (0,0) is zero, row 1 swaps in.
        // Cofactor expansion along the first row gives -3.
        let m = from_reals(&[&[0.0, 1.0, 2.0], &[3.0, 4.0, 5.0], &[6.0, 7.0, 9.0]]);
        assert_close(m.determinant().unwrap(), Complex::from_real(-3.0));
    }

    #[test]
    fn test_determinant_2x2_swap_has_correct_sign() {
        // [0,1; 1,0] is a permutation matrix with determinant -1; the swap
        // contributes the sign.
        let m = from_reals(&[&[0.0, 1.0], &[1.0, 0.0]]);
        assert_close(m.determinant().unwrap(), Complex::from_real(-1.0));
    }

    #[test]
    fn test_determinant_singular_column_returns_zero() {
        // Column 0 zero below and at the pivot: no usable pivot row.
        let m = from_reals(&[&[0.0, 1.0], &[0.0, 2.0]]);
        assert_eq!(m.determinant().unwrap(), Complex::zero());
    }

    #[test]
    fn test_determinant_zero_row_returns_zero() {
        let m = from_reals(&[&[1.0, 2.0, 3.0], &[0.0, 0.0, 0.0], &[4.0, 5.0, 6.0]]);
        assert_close(m.determinant().unwrap(), Complex::zero());
    }

    #[test]
    fn test_determinant_complex_entries() {
        // det [i,1; 1,i] = i*i - 1*1 = -2
        let m = Matrix::from_rows(vec![
            vec![Complex::new(0.0, 1.0), Complex::from_real(1.0)],
            vec![Complex::from_real(1.0), Complex::new(0.0, 1.0)],
        ])
        .unwrap();
        assert_close(m.determinant().unwrap(), Complex::from_real(-2.0));
    }

    #[test]
    fn test_determinant_non_square_is_undefined() {
        let m = Matrix::zeros(2, 3).unwrap();
        assert!(matches!(
            m.determinant(),
            Err(MatrixError::NonSquareDeterminant { rows: 2, cols: 3 })
        ));
    }

    #[test]
    fn test_determinant_does_not_mutate_receiver() {
        let m = from_reals(&[&[1.0, 2.0], &[3.0, 4.0]]);
        let before = m.clone();
        let _ = m.determinant().unwrap();
        assert_eq!(m, before);
    }
}
