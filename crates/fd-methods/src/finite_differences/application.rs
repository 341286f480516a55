//! Applying operators to sampled functions.

use std::sync::Arc;

use fd_core::{ensure_arg, errors::Result, DerivativeStrategy, Real, Settings, Size};
use fd_math::{sample, Array, Grid, Matrix};
use log::debug;

use super::{DifferenceOperator, GridOperator, IntegrationOperator, OperatorCache};

/// A grid, the samples taken on it, and the operator output.
#[derive(Debug, Clone, PartialEq)]
pub struct SampledResult {
    /// Grid points `x₀ … x_N`.
    pub grid: Grid,
    /// Samples `f(xᵢ)`.
    pub samples: Array,
    /// Derivative or cumulative integral at each grid point.
    pub values: Array,
}

impl SampledResult {
    /// Split into `(grid points, samples, values)`.
    pub fn into_parts(self) -> (Array, Array, Array) {
        (self.grid.into_points(), self.samples, self.values)
    }
}

/// Applies difference and integration operators to sample vectors.
///
/// Holds the [`DerivativeStrategy`] used for orders two and up and an
/// optional [`OperatorCache`]. [`OperatorApplication::new`] takes the
/// strategy from the global [`Settings`].
#[derive(Debug, Clone)]
pub struct OperatorApplication {
    strategy: DerivativeStrategy,
    cache: Option<Arc<OperatorCache>>,
}

impl Default for OperatorApplication {
    fn default() -> Self {
        Self::new()
    }
}

impl OperatorApplication {
    /// Use the strategy currently configured in [`Settings`], no cache.
    pub fn new() -> Self {
        Self::with_strategy(Settings::instance().derivative_strategy())
    }

    /// Use `strategy`, no cache.
    pub fn with_strategy(strategy: DerivativeStrategy) -> Self {
        Self {
            strategy,
            cache: None,
        }
    }

    /// Fetch operator matrices through `cache` instead of rebuilding them.
    pub fn cached(mut self, cache: Arc<OperatorCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    /// The strategy used for orders two and up.
    pub fn strategy(&self) -> DerivativeStrategy {
        self.strategy
    }

    fn operator<O: GridOperator>(&self, grid: &Grid) -> Result<Arc<Matrix>> {
        match &self.cache {
            Some(cache) => cache.get::<O>(grid.step(), grid.intervals()),
            None => O::build(grid.step(), grid.intervals()).map(Arc::new),
        }
    }

    /// First derivative `D·f`.
    pub fn first_derivative(&self, grid: Grid, samples: Array) -> Result<SampledResult> {
        self.nth_derivative(grid, samples, 1)
    }

    /// Second derivative; identical to `nth_derivative(grid, samples, 2)`.
    pub fn second_derivative(&self, grid: Grid, samples: Array) -> Result<SampledResult> {
        self.nth_derivative(grid, samples, 2)
    }

    /// Derivative of order `order ≥ 1`.
    ///
    /// Order one is the single product `D·f`. Higher orders either apply
    /// `D^order` (composition) or apply `D` `order` times, depending on the
    /// strategy. Fails with `InvalidArgument` if `order == 0` or the samples
    /// do not line up with the grid.
    pub fn nth_derivative(&self, grid: Grid, samples: Array, order: Size) -> Result<SampledResult> {
        ensure_arg!(order >= 1, "derivative order must be at least 1, got {order}");
        check_aligned(&grid, &samples)?;

        let d = self.operator::<DifferenceOperator>(&grid)?;
        let values = if order == 1 {
            d.try_mul_vec(&samples)?
        } else {
            debug!("derivative of order {order} via {:?}", self.strategy);
            match self.strategy {
                DerivativeStrategy::Composition => d.power(order)?.try_mul_vec(&samples)?,
                DerivativeStrategy::RepeatedApplication => {
                    (0..order).try_fold(samples.clone(), |acc, _| d.try_mul_vec(&acc))?
                }
            }
        };
        Ok(SampledResult {
            grid,
            samples,
            values,
        })
    }

    /// Cumulative trapezoidal integral `I·f`; entry `k` approximates the
    /// integral from `x₀` to `x_k`, so entry 0 is always zero.
    pub fn cumulative_integral(&self, grid: Grid, samples: Array) -> Result<SampledResult> {
        check_aligned(&grid, &samples)?;
        let values = self
            .operator::<IntegrationOperator>(&grid)?
            .try_mul_vec(&samples)?;
        Ok(SampledResult {
            grid,
            samples,
            values,
        })
    }
}

fn check_aligned(grid: &Grid, samples: &Array) -> Result<()> {
    ensure_arg!(
        grid.size() == samples.size(),
        "grid has {} points but {} samples were given",
        grid.size(),
        samples.size()
    );
    Ok(())
}

// ── Free functions using the global settings ──────────────────────────────────

/// First derivative of sampled data. See [`OperatorApplication::first_derivative`].
pub fn first_derivative(grid: Grid, samples: Array) -> Result<SampledResult> {
    OperatorApplication::new().first_derivative(grid, samples)
}

/// Second derivative of sampled data. See [`OperatorApplication::second_derivative`].
pub fn second_derivative(grid: Grid, samples: Array) -> Result<SampledResult> {
    OperatorApplication::new().second_derivative(grid, samples)
}

/// Derivative of order `order` of sampled data. See
/// [`OperatorApplication::nth_derivative`].
pub fn nth_derivative(grid: Grid, samples: Array, order: Size) -> Result<SampledResult> {
    OperatorApplication::new().nth_derivative(grid, samples, order)
}

/// Cumulative integral of sampled data. See
/// [`OperatorApplication::cumulative_integral`].
pub fn cumulative_integral(grid: Grid, samples: Array) -> Result<SampledResult> {
    OperatorApplication::new().cumulative_integral(grid, samples)
}

/// Trapezoidal integral over the whole grid: the last entry of
/// [`cumulative_integral`].
pub fn definite_integral(grid: Grid, samples: Array) -> Result<Real> {
    let result = cumulative_integral(grid, samples)?;
    // A validated grid has at least two points.
    Ok(result.values.last().unwrap_or(0.0))
}

// ── Sample-then-apply wrappers ────────────────────────────────────────────────

fn sampled<F: Fn(Real) -> Real>(f: F, a: Real, b: Real, intervals: Size) -> Result<(Grid, Array)> {
    let grid = Grid::uniform(a, b, intervals)?;
    let samples = sample(&grid, f);
    Ok((grid, samples))
}

/// Sample `f` on `intervals + 1` points over `[a, b]`, then differentiate once.
///
/// ```
/// use fd_methods::finite_differences::first_derivative_fn;
/// let r = first_derivative_fn(|x| 3.0 * x, 0.0, 1.0, 4).unwrap();
/// assert!(r.values.iter().all(|&v| (v - 3.0).abs() < 1e-12));
/// ```
pub fn first_derivative_fn<F: Fn(Real) -> Real>(
    f: F,
    a: Real,
    b: Real,
    intervals: Size,
) -> Result<SampledResult> {
    let (grid, samples) = sampled(f, a, b, intervals)?;
    first_derivative(grid, samples)
}

/// Sample `f` on `intervals + 1` points over `[a, b]`, then differentiate twice.
pub fn second_derivative_fn<F: Fn(Real) -> Real>(
    f: F,
    a: Real,
    b: Real,
    intervals: Size,
) -> Result<SampledResult> {
    let (grid, samples) = sampled(f, a, b, intervals)?;
    second_derivative(grid, samples)
}

/// Sample `f` on `intervals + 1` points over `[a, b]`, then take the
/// derivative of order `order`.
pub fn nth_derivative_fn<F: Fn(Real) -> Real>(
    f: F,
    a: Real,
    b: Real,
    intervals: Size,
    order: Size,
) -> Result<SampledResult> {
    ensure_arg!(order >= 1, "derivative order must be at least 1, got {order}");
    let (grid, samples) = sampled(f, a, b, intervals)?;
    nth_derivative(grid, samples, order)
}

/// Sample `f` on `intervals + 1` points over `[a, b]`, then integrate
/// cumulatively from `a`.
pub fn cumulative_integral_fn<F: Fn(Real) -> Real>(
    f: F,
    a: Real,
    b: Real,
    intervals: Size,
) -> Result<SampledResult> {
    let (grid, samples) = sampled(f, a, b, intervals)?;
    cumulative_integral(grid, samples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use fd_core::Error;

    fn cubic_on_unit_interval() -> (Grid, Array) {
        let grid = Grid::uniform(0.0, 1.0, 10).unwrap();
        let samples = sample(&grid, |x| x * x * x);
        (grid, samples)
    }

    #[test]
    fn composition_and_repeated_application_agree() {
        let (grid, samples) = cubic_on_unit_interval();
        for order in 1..=4 {
            let composed = OperatorApplication::with_strategy(DerivativeStrategy::Composition)
                .nth_derivative(grid.clone(), samples.clone(), order)
                .unwrap();
            let repeated =
                OperatorApplication::with_strategy(DerivativeStrategy::RepeatedApplication)
                    .nth_derivative(grid.clone(), samples.clone(), order)
                    .unwrap();
            let scale = composed.values.max_abs().max(1.0);
            for i in 0..grid.size() {
                assert_abs_diff_eq!(
                    composed.values[i],
                    repeated.values[i],
                    epsilon = 1e-9 * scale
                );
            }
        }
    }

    #[test]
    fn second_derivative_matches_order_two_bitwise() {
        let (grid, samples) = cubic_on_unit_interval();
        for strategy in [
            DerivativeStrategy::Composition,
            DerivativeStrategy::RepeatedApplication,
        ] {
            let app = OperatorApplication::with_strategy(strategy);
            let second = app.second_derivative(grid.clone(), samples.clone()).unwrap();
            let nth = app.nth_derivative(grid.clone(), samples.clone(), 2).unwrap();
            assert_eq!(second, nth);
        }
    }

    #[test]
    fn order_one_is_single_product() {
        let (grid, samples) = cubic_on_unit_interval();
        let d = build_direct(&grid);
        let expected = d.mul_vec(&samples);
        for strategy in [
            DerivativeStrategy::Composition,
            DerivativeStrategy::RepeatedApplication,
        ] {
            let r = OperatorApplication::with_strategy(strategy)
                .nth_derivative(grid.clone(), samples.clone(), 1)
                .unwrap();
            assert_eq!(r.values, expected);
        }
    }

    fn build_direct(grid: &Grid) -> Matrix {
        DifferenceOperator::build(grid.step(), grid.intervals()).unwrap()
    }

    #[test]
    fn order_zero_is_rejected() {
        let (grid, samples) = cubic_on_unit_interval();
        assert!(matches!(
            nth_derivative(grid, samples, 0),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            nth_derivative_fn(|x| x, 0.0, 1.0, 10, 0),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn misaligned_samples_are_rejected() {
        let grid = Grid::uniform(0.0, 1.0, 4).unwrap();
        let samples = Array::zeros(4);
        assert!(matches!(
            first_derivative(grid.clone(), samples.clone()),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            cumulative_integral(grid, samples),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn cubic_integral_on_unit_interval() {
        let (grid, samples) = cubic_on_unit_interval();
        let r = cumulative_integral(grid, samples).unwrap();
        assert_eq!(r.values[0], 0.0);
        assert_abs_diff_eq!(r.values[10], 0.25, epsilon = 1e-2);
    }

    #[test]
    fn definite_integral_is_last_cumulative_value() {
        let (grid, samples) = cubic_on_unit_interval();
        let total = definite_integral(grid.clone(), samples.clone()).unwrap();
        let cumulative = cumulative_integral(grid, samples).unwrap();
        assert_eq!(total, cumulative.values[10]);
        // Composite trapezoid for x³ with h = 0.1: 0.25 + h²/4.
        assert_abs_diff_eq!(total, 0.2525, epsilon = 1e-12);
    }

    #[test]
    fn second_derivative_of_quadratic_in_interior() {
        let r = second_derivative_fn(|x| x * x, -1.0, 1.0, 20).unwrap();
        // Away from the one-sided boundary rows D² is exact for x².
        for i in 2..=18 {
            assert_abs_diff_eq!(r.values[i], 2.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn into_parts_returns_triple() {
        let r = first_derivative_fn(|x| x, 0.0, 2.0, 2).unwrap();
        let (x, f, df) = r.into_parts();
        assert_eq!(x.as_slice(), &[0.0, 1.0, 2.0]);
        assert_eq!(f.as_slice(), &[0.0, 1.0, 2.0]);
        assert_eq!(df.as_slice(), &[1.0, 1.0, 1.0]);
    }

    #[test]
    fn cached_application_matches_uncached() {
        let cache = Arc::new(OperatorCache::new());
        let (grid, samples) = cubic_on_unit_interval();
        let app = OperatorApplication::with_strategy(DerivativeStrategy::Composition);
        let cached = app.clone().cached(Arc::clone(&cache));

        let plain = app.nth_derivative(grid.clone(), samples.clone(), 3).unwrap();
        let first = cached.nth_derivative(grid.clone(), samples.clone(), 3).unwrap();
        let again = cached.nth_derivative(grid.clone(), samples.clone(), 3).unwrap();
        assert_eq!(plain, first);
        assert_eq!(first, again);

        let integral = cached.cumulative_integral(grid, samples).unwrap();
        assert_abs_diff_eq!(integral.values[10], 0.2525, epsilon = 1e-12);
        assert_eq!(cache.len(), 2);
    }
}
