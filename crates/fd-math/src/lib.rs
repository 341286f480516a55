//! # fd-math
//!
//! Dense `Array`/`Matrix` newtypes (over nalgebra), floating-point
//! comparison helpers, and equispaced grids with function sampling.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// One-dimensional real vectors.
pub mod array;

/// Floating-point comparison utilities.
pub mod comparison;

/// Equispaced grids, `linspace`, and function sampling.
pub mod grid;

/// Dense real matrices.
pub mod matrix;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use array::Array;
pub use comparison::close;
pub use grid::{linspace, sample, Grid};
pub use matrix::Matrix;
