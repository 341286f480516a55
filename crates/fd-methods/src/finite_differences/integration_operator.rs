use fd_core::{errors::Result, Real, Size};
use fd_math::Matrix;
use log::debug;

use super::{validate, GridOperator, OperatorKind};

/// Cumulative composite-trapezoidal operator on an equispaced grid.
///
/// `(I·f)[k]` approximates `∫ f` from `x₀` to `x_k`. Row 0 is zero; row `i`
/// copies row `i−1` and adds `h/2` to the entries at columns `i−1` and `i`,
/// so interior points collect weight `h` from their two sub-intervals.
///
/// The matrix is lower-triangular, row `i` sums to `h·i`, and the last row
/// holds the full-interval trapezoidal weights `h/2, h, …, h, h/2`.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntegrationOperator;

impl GridOperator for IntegrationOperator {
    const KIND: OperatorKind = OperatorKind::Integration;

    fn build(step: Real, intervals: Size) -> Result<Matrix> {
        validate(step, intervals)?;
        debug!("building integration operator: step = {step}, intervals = {intervals}");

        let n = intervals;
        let half = 0.5 * step;

        let mut m = Matrix::zeros(n + 1, n + 1);
        for i in 1..=n {
            for j in 0..i {
                m[(i, j)] = m[(i - 1, j)];
            }
            m[(i, i - 1)] += half;
            m[(i, i)] += half;
        }
        Ok(m)
    }
}

/// Build the `(N+1)×(N+1)` cumulative trapezoidal matrix for step `h` and
/// `N` intervals.
///
/// ```
/// use fd_methods::finite_differences::build_integration_operator;
/// let m = build_integration_operator(1.0, 2).unwrap();
/// assert_eq!(m.row(2).as_slice(), &[0.5, 1.0, 0.5]);
/// ```
pub fn build_integration_operator(h: Real, n: Size) -> Result<Matrix> {
    IntegrationOperator::build(h, n)
}
