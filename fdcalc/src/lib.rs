//! # fdcalc
//!
//! Numerical derivatives and cumulative integrals of functions known only
//! through samples on an equispaced grid, computed with dense operator
//! matrices.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `fd-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! fdcalc = "0.1"
//! ```
//!
//! ```rust
//! use fdcalc::methods::{cumulative_integral_fn, first_derivative_fn};
//!
//! // ∫₀¹ x³ dx = 1/4 with the composite trapezoidal rule on 10 intervals.
//! let integral = cumulative_integral_fn(|x| x.powi(3), 0.0, 1.0, 10).unwrap();
//! assert!((integral.values[10] - 0.25).abs() < 1e-2);
//!
//! // d/dx (2x + 1) = 2 at every grid point, boundaries included.
//! let derivative = first_derivative_fn(|x| 2.0 * x + 1.0, 0.0, 1.0, 10).unwrap();
//! assert!(derivative.values.iter().all(|&v| (v - 2.0).abs() < 1e-12));
//! ```
//!
//! ## Errors and overflow
//!
//! Interval counts of zero, zero or non-finite steps, derivative orders of
//! zero, and grids that are misaligned with their samples or not
//! equispaced are rejected with [`core::Error::InvalidArgument`]. A step
//! that is nonzero but so small that `1/h` overflows is *not* rejected: the
//! resulting `inf`/`NaN` values are returned as part of the output.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, error definitions, and settings.
pub use fd_core as core;

/// Arrays, matrices, comparison helpers, and equispaced grids.
pub use fd_math as math;

/// Difference and integration operators and their application.
pub use fd_methods as methods;
