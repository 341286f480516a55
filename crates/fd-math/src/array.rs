//! `Array` — a one-dimensional vector of reals.
//!
//! A thin newtype around `nalgebra::DVector<f64>`. Sample vectors, grid
//! points, and operator outputs are all `Array`s.

use fd_core::Real;
use nalgebra::DVector;
use std::ops::{Index, IndexMut};

/// A dynamically-sized 1D vector of `Real` values.
#[derive(Debug, Clone, PartialEq)]
pub struct Array(DVector<Real>);

impl Array {
    /// Create a zero-filled array of length `n`.
    pub fn zeros(n: usize) -> Self {
        Self(DVector::zeros(n))
    }

    /// Create an array filled with `value`.
    pub fn from_element(n: usize, value: Real) -> Self {
        Self(DVector::from_element(n, value))
    }

    /// Create an array from a slice.
    pub fn from_slice(data: &[Real]) -> Self {
        Self(DVector::from_column_slice(data))
    }

    /// Create an array from a `Vec`.
    pub fn from_vec(data: Vec<Real>) -> Self {
        Self(DVector::from_vec(data))
    }

    /// Number of elements.
    pub fn size(&self) -> usize {
        self.0.len()
    }

    /// Return `true` if empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Return the elements as a slice.
    pub fn as_slice(&self) -> &[Real] {
        self.0.as_slice()
    }

    /// Borrow the inner `DVector`.
    pub fn inner(&self) -> &DVector<Real> {
        &self.0
    }

    /// First element, if any.
    pub fn first(&self) -> Option<Real> {
        self.as_slice().first().copied()
    }

    /// Last element, if any.
    pub fn last(&self) -> Option<Real> {
        self.as_slice().last().copied()
    }

    /// Sum of all elements.
    pub fn sum(&self) -> Real {
        self.0.sum()
    }

    /// Largest absolute value (`0.0` for an empty array).
    pub fn max_abs(&self) -> Real {
        self.0.iter().fold(0.0, |m: Real, x| m.max(x.abs()))
    }

    /// `true` if no element is `inf` or `NaN`.
    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|x| x.is_finite())
    }

    /// Apply a function element-wise, returning a new array.
    pub fn map<F: Fn(Real) -> Real>(&self, f: F) -> Self {
        Self(self.0.map(f))
    }

    /// Iterator over elements.
    pub fn iter(&self) -> impl Iterator<Item = &Real> {
        self.0.iter()
    }
}

// ── From / Into conversions ───────────────────────────────────────────────────

impl From<DVector<Real>> for Array {
    fn from(v: DVector<Real>) -> Self {
        Self(v)
    }
}

impl From<Array> for DVector<Real> {
    fn from(a: Array) -> Self {
        a.0
    }
}

impl From<Vec<Real>> for Array {
    fn from(v: Vec<Real>) -> Self {
        Self::from_vec(v)
    }
}

impl From<&[Real]> for Array {
    fn from(s: &[Real]) -> Self {
        Self::from_slice(s)
    }
}

impl From<Array> for Vec<Real> {
    fn from(a: Array) -> Self {
        a.as_slice().to_vec()
    }
}

impl FromIterator<Real> for Array {
    fn from_iter<I: IntoIterator<Item = Real>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

// ── Index ─────────────────────────────────────────────────────────────────────

impl Index<usize> for Array {
    type Output = Real;
    fn index(&self, i: usize) -> &Real {
        &self.0[i]
    }
}

impl IndexMut<usize> for Array {
    fn index_mut(&mut self, i: usize) -> &mut Real {
        &mut self.0[i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeros_and_fill() {
        let a = Array::zeros(5);
        assert_eq!(a.size(), 5);
        assert_eq!(a[0], 0.0);
        let c = Array::from_element(3, 2.5);
        assert_eq!(c.sum(), 7.5);
    }

    #[test]
    fn first_last() {
        let a = Array::from_slice(&[1.0, 2.0, 3.0]);
        assert_eq!(a.first(), Some(1.0));
        assert_eq!(a.last(), Some(3.0));
        assert_eq!(Array::zeros(0).last(), None);
    }

    #[test]
    fn max_abs() {
        let a = Array::from_slice(&[1.0, -4.0, 3.0]);
        assert_eq!(a.max_abs(), 4.0);
        assert_eq!(Array::zeros(0).max_abs(), 0.0);
    }

    #[test]
    fn finiteness() {
        assert!(Array::from_slice(&[0.0, 1.0]).is_finite());
        assert!(!Array::from_slice(&[0.0, Real::INFINITY]).is_finite());
        assert!(!Array::from_slice(&[Real::NAN]).is_finite());
    }

    #[test]
    fn collect_and_convert() {
        let a: Array = (0..4).map(|i| i as Real).collect();
        assert_eq!(a.size(), 4);
        let v: Vec<Real> = a.into();
        assert_eq!(v, vec![0.0, 1.0, 2.0, 3.0]);
    }
}
