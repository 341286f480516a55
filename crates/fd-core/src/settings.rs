//! Global library settings.
//!
//! [`Settings`] holds the process-wide defaults consulted by the operator
//! application layer:
//!
//! * the [`DerivativeStrategy`] used for derivatives of order two and up;
//! * the relative tolerance used when checking that a grid is equispaced.
//!
//! It is a singleton accessed via a `std::sync::OnceLock`; the values sit
//! behind a `Mutex` so that they can be changed from any thread. Code that
//! changes a setting temporarily should hold a [`ScopedSettings`] guard,
//! which restores the previous values when dropped.

use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

use crate::{ensure_arg, errors::Result, Real};

/// How a derivative of order `k ≥ 2` is obtained from the first-order
/// difference matrix `D`.
///
/// Both strategies agree to floating-point tolerance. Order one is always a
/// single product `D·f` regardless of the strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DerivativeStrategy {
    /// Form `Dᵏ` by repeated dense matrix multiplication, then apply it
    /// once. O(N³) per order.
    #[default]
    Composition,
    /// Apply `D` to the sample vector `k` times. O(N²) per order.
    RepeatedApplication,
}

/// Default relative tolerance for the equispaced-grid check.
pub const DEFAULT_GRID_TOLERANCE: Real = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Values {
    derivative_strategy: DerivativeStrategy,
    grid_tolerance: Real,
}

impl Default for Values {
    fn default() -> Self {
        Self {
            derivative_strategy: DerivativeStrategy::default(),
            grid_tolerance: DEFAULT_GRID_TOLERANCE,
        }
    }
}

/// Process-wide settings used by the fdcalc library.
pub struct Settings {
    values: Mutex<Values>,
}

static INSTANCE: OnceLock<Settings> = OnceLock::new();

impl Settings {
    /// Return a reference to the global singleton.
    pub fn instance() -> &'static Settings {
        INSTANCE.get_or_init(|| Settings {
            values: Mutex::new(Values::default()),
        })
    }

    // The guarded data is plain `Copy` values, so a poisoned lock is still
    // consistent.
    fn lock(&self) -> MutexGuard<'_, Values> {
        self.values.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Strategy used for derivatives of order two and up.
    pub fn derivative_strategy(&self) -> DerivativeStrategy {
        self.lock().derivative_strategy
    }

    /// Set the strategy used for derivatives of order two and up.
    pub fn set_derivative_strategy(&self, strategy: DerivativeStrategy) {
        self.lock().derivative_strategy = strategy;
    }

    /// Relative tolerance for the equispaced-grid check.
    ///
    /// A grid passes when every spacing differs from the first one, `h`, by
    /// at most `tolerance · |h|` plus a few ulps of the largest point.
    pub fn grid_tolerance(&self) -> Real {
        self.lock().grid_tolerance
    }

    /// Set the relative tolerance for the equispaced-grid check.
    ///
    /// Fails with `InvalidArgument` unless `tolerance` is finite and
    /// non-negative.
    pub fn set_grid_tolerance(&self, tolerance: Real) -> Result<()> {
        ensure_arg!(
            tolerance.is_finite() && tolerance >= 0.0,
            "grid tolerance must be finite and non-negative, got {tolerance}"
        );
        self.lock().grid_tolerance = tolerance;
        Ok(())
    }

    /// Restore every setting to its default.
    pub fn reset(&self) {
        *self.lock() = Values::default();
    }
}

/// Snapshot of the global settings that is restored on drop.
///
/// ```
/// use fd_core::{DerivativeStrategy, ScopedSettings, Settings};
///
/// let before = Settings::instance().derivative_strategy();
/// {
///     let _guard = ScopedSettings::new();
///     Settings::instance().set_derivative_strategy(DerivativeStrategy::RepeatedApplication);
/// }
/// assert_eq!(Settings::instance().derivative_strategy(), before);
/// ```
#[must_use = "settings are restored as soon as the guard is dropped"]
pub struct ScopedSettings {
    saved: Values,
}

impl ScopedSettings {
    /// Capture the current settings.
    pub fn new() -> Self {
        Self {
            saved: *Settings::instance().lock(),
        }
    }
}

impl Default for ScopedSettings {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ScopedSettings {
    fn drop(&mut self) {
        *Settings::instance().lock() = self.saved;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;

    // Tests in this module mutate the singleton; serialize them.
    static SERIAL: Mutex<()> = Mutex::new(());

    fn serial() -> MutexGuard<'static, ()> {
        SERIAL.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[test]
    fn defaults() {
        let _serial = serial();
        let _guard = ScopedSettings::new();
        Settings::instance().reset();
        assert_eq!(
            Settings::instance().derivative_strategy(),
            DerivativeStrategy::Composition
        );
        assert_eq!(Settings::instance().grid_tolerance(), DEFAULT_GRID_TOLERANCE);
    }

    #[test]
    fn scoped_guard_restores_values() {
        let _serial = serial();
        let settings = Settings::instance();
        let strategy = settings.derivative_strategy();
        let tolerance = settings.grid_tolerance();
        {
            let _guard = ScopedSettings::new();
            settings.set_derivative_strategy(DerivativeStrategy::RepeatedApplication);
            settings.set_grid_tolerance(1e-3).unwrap();
            assert_eq!(
                settings.derivative_strategy(),
                DerivativeStrategy::RepeatedApplication
            );
            assert_eq!(settings.grid_tolerance(), 1e-3);
        }
        assert_eq!(settings.derivative_strategy(), strategy);
        assert_eq!(settings.grid_tolerance(), tolerance);
    }

    #[test]
    fn rejects_bad_tolerance() {
        let _serial = serial();
        let settings = Settings::instance();
        let before = settings.grid_tolerance();
        for bad in [-1e-6, Real::NAN, Real::INFINITY] {
            assert!(matches!(
                settings.set_grid_tolerance(bad),
                Err(Error::InvalidArgument(_))
            ));
        }
        assert_eq!(settings.grid_tolerance(), before);
    }
}
