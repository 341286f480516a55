//! Error types for fdcalc.
//!
//! Every fallible operation in the workspace returns [`Result`]. Argument
//! checks run before any operator matrix is allocated and surface as
//! [`Error::InvalidArgument`]; the [`ensure_arg!`] macro is the usual way to
//! raise them.
//!
//! Floating-point overflow is deliberately *not* an error: a step size that
//! is nonzero but tiny enough for `1/h` to overflow produces `inf`/`NaN`
//! entries, and those special values propagate through the results.

use thiserror::Error;

/// The top-level error type used throughout fdcalc.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Internal precondition violated (raised by [`ensure!`]).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Caller-supplied argument rejected (raised by [`ensure_arg!`]).
    ///
    /// Covers non-positive interval counts, zero or non-finite step sizes,
    /// derivative orders below one, misaligned grid/sample vectors, and
    /// grids that are too short or not equispaced.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Shorthand `Result` type used throughout fdcalc.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use fd_core::{ensure, errors::Error};
/// fn square(rows: usize, cols: usize) -> fd_core::errors::Result<usize> {
///     ensure!(rows == cols, "expected a square shape, got {rows}x{cols}");
///     Ok(rows)
/// }
/// assert!(square(3, 3).is_ok());
/// assert!(matches!(square(3, 2), Err(Error::Precondition(_))));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Returns `Err(Error::InvalidArgument(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use fd_core::{ensure_arg, errors::Error};
/// fn intervals(n: usize) -> fd_core::errors::Result<usize> {
///     ensure_arg!(n >= 1, "interval count must be at least 1, got {n}");
///     Ok(n)
/// }
/// assert!(intervals(4).is_ok());
/// assert!(matches!(intervals(0), Err(Error::InvalidArgument(_))));
/// ```
#[macro_export]
macro_rules! ensure_arg {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidArgument(
                format!($($msg)*)
            ));
        }
    };
}
