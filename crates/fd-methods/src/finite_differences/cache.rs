use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use fd_core::{errors::Result, Real, Size};
use fd_math::Matrix;
use log::trace;

use super::{DifferenceOperator, GridOperator, IntegrationOperator, OperatorKind};

type Key = (OperatorKind, u64, Size);

/// Memoizes operator matrices keyed by kind, step, and interval count.
///
/// Steps are compared by bit pattern, so `0.1` and `0.1 + ε` are distinct
/// entries. Cached matrices are shared through `Arc` and never mutated, so
/// one cache can serve several threads.
#[derive(Debug, Default)]
pub struct OperatorCache {
    entries: Mutex<HashMap<Key, Arc<Matrix>>>,
}

impl OperatorCache {
    /// An empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    // Entries are inserted fully built, so a poisoned map is still valid.
    fn lock(&self) -> MutexGuard<'_, HashMap<Key, Arc<Matrix>>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// The matrix of operator `O` for `step` and `intervals`, built on the
    /// first request. Invalid arguments are rejected and never cached.
    pub fn get<O: GridOperator>(&self, step: Real, intervals: Size) -> Result<Arc<Matrix>> {
        let key = (O::KIND, step.to_bits(), intervals);
        let mut entries = self.lock();
        if let Some(matrix) = entries.get(&key) {
            trace!("operator cache hit: {:?}, step = {step}, intervals = {intervals}", O::KIND);
            return Ok(Arc::clone(matrix));
        }
        let matrix = Arc::new(O::build(step, intervals)?);
        entries.insert(key, Arc::clone(&matrix));
        Ok(matrix)
    }

    /// Cached [`DifferenceOperator`] matrix.
    pub fn difference(&self, step: Real, intervals: Size) -> Result<Arc<Matrix>> {
        self.get::<DifferenceOperator>(step, intervals)
    }

    /// Cached [`IntegrationOperator`] matrix.
    pub fn integration(&self, step: Real, intervals: Size) -> Result<Arc<Matrix>> {
        self.get::<IntegrationOperator>(step, intervals)
    }

    /// Number of cached matrices.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// `true` if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Drop every cached matrix.
    pub fn clear(&self) {
        self.lock().clear();
    }
}
