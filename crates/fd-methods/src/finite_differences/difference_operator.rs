use fd_core::{errors::Result, Real, Size};
use fd_math::Matrix;
use log::debug;

use super::{validate, GridOperator, OperatorKind};

/// First-derivative operator on an equispaced grid.
///
/// For step `h` and `N` intervals the matrix `D` is
///
/// * row 0: `D[0][0] = −1/h`, `D[0][1] = 1/h` (forward difference);
/// * row N: `D[N][N−1] = −1/h`, `D[N][N] = 1/h` (backward difference);
/// * rows `1..N−1`: `D[i][i−1] = −1/(2h)`, `D[i][i+1] = 1/(2h)` (central
///   difference), zero elsewhere including the diagonal.
///
/// With `N = 1` only the two boundary rows exist.
#[derive(Debug, Clone, Copy, Default)]
pub struct DifferenceOperator;

impl GridOperator for DifferenceOperator {
    const KIND: OperatorKind = OperatorKind::Difference;

    fn build(step: Real, intervals: Size) -> Result<Matrix> {
        validate(step, intervals)?;
        debug!("building difference operator: step = {step}, intervals = {intervals}");

        let n = intervals;
        let one_sided = 1.0 / step;
        let central = 1.0 / (2.0 * step);

        let mut d = Matrix::zeros(n + 1, n + 1);
        d[(0, 0)] = -one_sided;
        d[(0, 1)] = one_sided;
        d[(n, n - 1)] = -one_sided;
        d[(n, n)] = one_sided;
        for i in 1..n {
            d[(i, i - 1)] = -central;
            d[(i, i + 1)] = central;
        }
        Ok(d)
    }
}

/// Build the `(N+1)×(N+1)` difference matrix for step `h` and `N` intervals.
///
/// ```
/// use fd_methods::finite_differences::build_difference_operator;
/// let d = build_difference_operator(0.5, 2).unwrap();
/// assert_eq!(d[(0, 0)], -2.0);
/// assert_eq!(d[(1, 2)], 1.0);
/// assert_eq!(d[(2, 2)], 2.0);
/// ```
pub fn build_difference_operator(h: Real, n: Size) -> Result<Matrix> {
    DifferenceOperator::build(h, n)
}
