//! # fd-methods
//!
//! Matrix-based numerical differentiation and integration of sampled
//! functions on equispaced grids.
//!
//! # Modules
//!
//! * [`finite_differences`] — difference and integration operator matrices,
//!   their application to sample vectors, and an operator cache

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Difference/integration operators and their application.
pub mod finite_differences;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use finite_differences::{
    build_difference_operator, build_integration_operator, cumulative_integral,
    cumulative_integral_fn, definite_integral, first_derivative, first_derivative_fn,
    nth_derivative, nth_derivative_fn, second_derivative, second_derivative_fn,
    DifferenceOperator, GridOperator, IntegrationOperator, OperatorApplication, OperatorCache,
    OperatorKind, SampledResult,
};
