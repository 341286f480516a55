//! Equispaced grids and function sampling.
//!
//! [`linspace`] produces evenly spaced points; [`Grid`] wraps such a point
//! set after checking that it is long enough and that its spacing is
//! nonzero and constant. [`sample`] evaluates a function on a grid to give
//! the sample vector the operators act on.

use crate::array::Array;
use crate::comparison::close;
use fd_core::{ensure_arg, errors::Result, Error, Real, Settings, Size};
use log::debug;

/// Rounding allowance on each spacing, in units of `ε·max|xᵢ|`.
const SPACING_ULPS: Real = 16.0;

/// `points` evenly spaced values from `a` to `b`, inclusive.
///
/// The first value is exactly `a` and the last exactly `b`; interior values
/// are `a + i·(b − a)/(points − 1)`. Needs at least two points and finite
/// end points.
///
/// ```
/// use fd_math::grid::linspace;
/// let x = linspace(0.0, 1.0, 5).unwrap();
/// assert_eq!(x.as_slice(), &[0.0, 0.25, 0.5, 0.75, 1.0]);
/// ```
pub fn linspace(a: Real, b: Real, points: Size) -> Result<Array> {
    ensure_arg!(points >= 2, "linspace needs at least 2 points, got {points}");
    ensure_arg!(
        a.is_finite() && b.is_finite(),
        "linspace end points must be finite, got [{a}, {b}]"
    );
    let step = (b - a) / (points - 1) as Real;
    let mut x: Array = (0..points).map(|i| a + i as Real * step).collect();
    x[points - 1] = b;
    Ok(x)
}

/// An equispaced set of `N + 1` grid points `x₀ … x_N`, `N ≥ 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    points: Array,
}

impl Grid {
    /// Validate `points` as an equispaced grid.
    ///
    /// Fails with `InvalidArgument` if there are fewer than two points, a
    /// point is not finite, the first spacing is zero, or any spacing
    /// differs from the first by more than `tol·|h| + 16·ε·max|xᵢ|`, where
    /// `tol` is [`Settings::grid_tolerance`]. The second term only absorbs
    /// the rounding in points far from zero; it never grows with `h`.
    pub fn new(points: impl Into<Array>) -> Result<Self> {
        let points = points.into();
        let n = points.size();
        ensure_arg!(n >= 2, "a grid needs at least 2 points, got {n}");
        ensure_arg!(points.is_finite(), "grid points must be finite");

        let x = points.as_slice();
        let h = x[1] - x[0];
        ensure_arg!(h != 0.0, "grid step is zero (x0 = x1 = {})", x[0]);

        let tolerance = Settings::instance().grid_tolerance() * h.abs()
            + SPACING_ULPS * Real::EPSILON * points.max_abs();
        if let Some(i) = (1..n).find(|&i| !close(x[i] - x[i - 1], h, tolerance)) {
            let spacing = x[i] - x[i - 1];
            debug!("rejecting grid: spacing {spacing} at index {i}, step {h}");
            return Err(Error::InvalidArgument(format!(
                "grid is not equispaced: spacing at index {i} is {spacing}, expected {h}"
            )));
        }
        Ok(Self { points })
    }

    /// The grid `linspace(a, b, intervals + 1)`.
    ///
    /// Fails with `InvalidArgument` if `intervals == 0`, `intervals + 1`
    /// does not fit in a `Size`, or `a == b`.
    pub fn uniform(a: Real, b: Real, intervals: Size) -> Result<Self> {
        ensure_arg!(
            intervals >= 1,
            "interval count must be at least 1, got {intervals}"
        );
        ensure_arg!(a != b, "degenerate interval [{a}, {b}] gives a zero step");
        let Some(points) = intervals.checked_add(1) else {
            return Err(Error::InvalidArgument(format!(
                "interval count {intervals} is too large"
            )));
        };
        Self::new(linspace(a, b, points)?)
    }

    /// Step size `h = x₁ − x₀` (negative for a decreasing grid).
    pub fn step(&self) -> Real {
        self.points[1] - self.points[0]
    }

    /// Number of intervals `N` (one less than the number of points).
    pub fn intervals(&self) -> Size {
        self.points.size() - 1
    }

    /// Number of points `N + 1`.
    pub fn size(&self) -> Size {
        self.points.size()
    }

    /// The grid points.
    pub fn points(&self) -> &Array {
        &self.points
    }

    /// Consume the grid, returning its points.
    pub fn into_points(self) -> Array {
        self.points
    }
}

/// Evaluate `f` at every grid point.
pub fn sample<F: Fn(Real) -> Real>(grid: &Grid, f: F) -> Array {
    grid.points().map(f)
}
