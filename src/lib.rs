//! Dense linear algebra over complex numbers.
//!
//! This crate provides:
//!
//! - [`Complex`] — an immutable complex scalar with full field arithmetic
//!   against both complex and real operands
//! - [`Matrix`] — a rectangular grid of complex values with addition,
//!   multiplication, transposition, and a Gaussian-elimination determinant
//! - [`MatrixError`] for shape, bounds, and dimension failures
//!
//! Floating-point degeneracy (division by a zero-modulus value) is not an
//! error: it propagates IEEE-754 infinities/NaN the same way scalar `f64`
//! division does. Singular square matrices are not an error either; their
//! determinant is zero.

pub mod complex;
pub mod error;
pub mod matrix;

mod determinant;
mod matmul;

/// Prelude module for convenient imports
///
/// # Example
/// ```
/// use complex_linalg::prelude::*;
///
/// let m = Matrix::zeros(2, 2)?;
/// assert_eq!(m.determinant()?, Complex::zero());
/// # Ok::<(), MatrixError>(())
/// ```
pub mod prelude {
    pub use super::complex::Complex;
    pub use super::error::{MatrixError, MatrixResult};
    pub use super::matrix::Matrix;
    pub use num_traits::{One, Zero};
}

pub use prelude::*;
