//! Dense finite-difference and quadrature operators on equispaced grids.
//!
//! # Overview
//!
//! * [`DifferenceOperator`] — central-difference matrix with one-sided
//!   boundary rows
//! * [`IntegrationOperator`] — cumulative composite-trapezoidal matrix
//! * [`OperatorApplication`] — applies an operator (or a power of the
//!   difference operator) to a sample vector
//! * [`OperatorCache`] — optional memoization of operator matrices
//!
//! Both operators are `(N+1)×(N+1)` dense matrices fully determined by the
//! step `h` and the interval count `N`.
//!
//! # Overflow
//!
//! The only checks on `h` are that it is nonzero and finite. A step small
//! enough for `1/h` to overflow yields `inf` entries in the difference
//! matrix, and the resulting `inf`/`NaN` values propagate into the output
//! instead of being reported as an error.

mod application;
mod cache;
mod difference_operator;
mod integration_operator;

pub use application::{
    cumulative_integral, cumulative_integral_fn, definite_integral, first_derivative,
    first_derivative_fn, nth_derivative, nth_derivative_fn, second_derivative,
    second_derivative_fn, OperatorApplication, SampledResult,
};
pub use cache::OperatorCache;
pub use difference_operator::{build_difference_operator, DifferenceOperator};
pub use integration_operator::{build_integration_operator, IntegrationOperator};

use fd_core::{ensure_arg, errors::Result, Real, Size};
use fd_math::Matrix;

/// Which operator a matrix represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorKind {
    /// First-derivative central-difference matrix.
    Difference,
    /// Cumulative trapezoidal integration matrix.
    Integration,
}

/// A linear operator on an equispaced grid, materialised as a dense matrix.
pub trait GridOperator {
    /// Tag identifying the operator.
    const KIND: OperatorKind;

    /// Build the `(intervals+1)×(intervals+1)` matrix for step `step`.
    ///
    /// Fails with `InvalidArgument` if `intervals == 0` or `step` is zero
    /// or not finite.
    fn build(step: Real, intervals: Size) -> Result<Matrix>;
}

/// Argument checks shared by every operator builder.
pub(crate) fn validate(step: Real, intervals: Size) -> Result<()> {
    ensure_arg!(
        intervals >= 1,
        "interval count must be at least 1, got {intervals}"
    );
    ensure_arg!(step != 0.0, "step size must be nonzero");
    ensure_arg!(step.is_finite(), "step size must be finite, got {step}");
    Ok(())
}
