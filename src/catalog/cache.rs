//! Memoized resolution.

use std::sync::Arc;

use dashmap::DashMap;
use once_cell::sync::OnceCell;

use crate::catalog::errors::ResolveError;
use crate::catalog::resolver::{AppearanceContext, BundleResolver};
use crate::catalog::ResolvedHandle;
use crate::core::manifest::Category;
use crate::core::symbol::{BundleIdentity, SymbolicConstant};

type CacheKey = (BundleIdentity, Category, String, AppearanceContext);

/// A [`BundleResolver`] that remembers successful resolutions.
///
/// Concurrent callers asking for the same key wait on one computation
/// instead of each resolving it. Errors are returned but never stored, so a
/// later call retries.
#[derive(Debug, Default)]
pub struct CachedResolver {
    inner: BundleResolver,
    cells: DashMap<CacheKey, Arc<OnceCell<ResolvedHandle>>>,
}

impl CachedResolver {
    pub fn new(inner: BundleResolver) -> Self {
        CachedResolver {
            inner,
            cells: DashMap::new(),
        }
    }

    pub fn inner(&self) -> &BundleResolver {
        &self.inner
    }

    pub fn resolve(
        &self,
        constant: &SymbolicConstant,
        bundle: &BundleIdentity,
        appearance: AppearanceContext,
    ) -> Result<ResolvedHandle, ResolveError> {
        let key = (
            bundle.clone(),
            constant.category,
            constant.target_name.clone(),
            appearance,
        );

        // Clone the cell out so the shard lock is not held while resolving.
        let cell = self.cells.entry(key.clone()).or_default().clone();

        let result = cell
            .get_or_try_init(|| self.inner.resolve(constant, bundle, appearance))
            .cloned();

        if result.is_err() {
            // Misses leave no entry behind. A cell filled by a concurrent
            // caller in the meantime stays.
            self.cells.remove_if(&key, |_, cell| cell.get().is_none());
        }

        result
    }

    /// Number of keys with a stored handle.
    pub fn len(&self) -> usize {
        self.cells.iter().filter(|cell| cell.value().get().is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.cells.clear();
    }
}
