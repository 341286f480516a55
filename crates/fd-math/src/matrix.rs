//! `Matrix` — a dense two-dimensional matrix of reals.
//!
//! A thin newtype around `nalgebra::DMatrix<f64>`. Difference and
//! integration operators are `Matrix`es; applying one to a sample vector
//! is a matrix–vector product.

use crate::array::Array;
use fd_core::{ensure, errors::Result, Real};
use nalgebra::DMatrix;
use std::ops::{Index, IndexMut, Mul};

/// A dynamically-sized dense 2D matrix of `Real` values.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix(DMatrix<Real>);

impl Matrix {
    /// Create a zero-filled `rows × cols` matrix.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self(DMatrix::zeros(rows, cols))
    }

    /// Create an identity matrix of size `n × n`.
    pub fn identity(n: usize) -> Self {
        Self(DMatrix::identity(n, n))
    }

    /// Create from a row-major data slice.
    pub fn from_row_slice(rows: usize, cols: usize, data: &[Real]) -> Self {
        Self(DMatrix::from_row_slice(rows, cols, data))
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.0.nrows()
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.0.ncols()
    }

    /// Return `true` if the matrix is square.
    pub fn is_square(&self) -> bool {
        self.0.nrows() == self.0.ncols()
    }

    /// Return `true` if every entry strictly above the diagonal is zero.
    pub fn is_lower_triangular(&self) -> bool {
        (0..self.rows()).all(|i| ((i + 1)..self.cols()).all(|j| self.0[(i, j)] == 0.0))
    }

    /// Borrow the inner `DMatrix`.
    pub fn inner(&self) -> &DMatrix<Real> {
        &self.0
    }

    /// Extract a row as an `Array`.
    pub fn row(&self, i: usize) -> Array {
        self.0.row(i).iter().copied().collect()
    }

    /// Sum of each row.
    pub fn row_sums(&self) -> Array {
        (0..self.rows()).map(|i| self.0.row(i).sum()).collect()
    }

    /// Matrix-vector product `M * v`.
    ///
    /// Panics if `v.size() != self.cols()`; see [`Matrix::try_mul_vec`].
    pub fn mul_vec(&self, v: &Array) -> Array {
        Array::from(&self.0 * v.inner())
    }

    /// Matrix-vector product `M * v`, checking the shapes first.
    pub fn try_mul_vec(&self, v: &Array) -> Result<Array> {
        ensure!(
            self.cols() == v.size(),
            "cannot multiply a {}x{} matrix by a vector of length {}",
            self.rows(),
            self.cols(),
            v.size()
        );
        Ok(self.mul_vec(v))
    }

    /// `self^k` by repeated left-multiplication with `self`.
    ///
    /// `power(1)` is a clone of `self`; `power(0)` is the identity. Requires
    /// a square matrix.
    pub fn power(&self, k: usize) -> Result<Self> {
        ensure!(
            self.is_square(),
            "matrix power needs a square matrix, got {}x{}",
            self.rows(),
            self.cols()
        );
        if k == 0 {
            return Ok(Self::identity(self.rows()));
        }
        let mut acc = self.clone();
        for _ in 1..k {
            acc = self * &acc;
        }
        Ok(acc)
    }
}

// ── From / Into ───────────────────────────────────────────────────────────────

impl From<DMatrix<Real>> for Matrix {
    fn from(m: DMatrix<Real>) -> Self {
        Self(m)
    }
}

impl From<Matrix> for DMatrix<Real> {
    fn from(m: Matrix) -> Self {
        m.0
    }
}

// ── Indexing ──────────────────────────────────────────────────────────────────

impl Index<(usize, usize)> for Matrix {
    type Output = Real;
    fn index(&self, (i, j): (usize, usize)) -> &Real {
        &self.0[(i, j)]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut Real {
        &mut self.0[(i, j)]
    }
}

// ── Arithmetic ────────────────────────────────────────────────────────────────

impl Mul for &Matrix {
    type Output = Matrix;
    fn mul(self, rhs: &Matrix) -> Matrix {
        Matrix(&self.0 * &rhs.0)
    }
}

impl Mul<&Array> for &Matrix {
    type Output = Array;
    fn mul(self, rhs: &Array) -> Array {
        self.mul_vec(rhs)
    }
}
