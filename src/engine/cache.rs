//! Memoized implied-grid state for the fixed-capacity fit variant.
//!
//! ## Purpose
//!
//! When every fit runs against the same implied x-grid 0, 1, …, N−1, the
//! x-derived half of the normal equations is input-independent and can be
//! computed once. This module provides [`GridCache`], which memoizes that
//! work for a declared capacity `M` and serves every fit with N ≤ M.
//!
//! ## Design notes
//!
//! * **Prefix power sums**: The cache stores, for each exponent k ≤ 2n, the
//!   running sums of iᵏ over the grid. A fit of any N ≤ M then assembles its
//!   exact matrix by O(n²) lookups, matching the uncached variant's
//!   coefficients for every N rather than only N = M.
//! * **Explicit object**: The cache is a value the caller builds and
//!   injects. The core has no hidden global state and stays testable in
//!   isolation.
//! * **Shared table**: Under `std`, [`GridCache::shared`] additionally
//!   offers a process-wide table keyed by (degree, capacity), lazily
//!   populated once per key behind a mutex so concurrent first use is safe.
//!
//! ## Invariants
//!
//! * `prefix` holds `(2·degree + 1) · (capacity + 1)` entries.
//! * A built cache is immutable; reuse never invalidates it.
//!
//! ## Non-goals
//!
//! * This module does not cache anything derived from y-values.
//! * This module does not evict; caches live as long as their owner.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::collections::BTreeMap;
#[cfg(feature = "std")]
use std::sync::{Arc, Mutex, OnceLock, PoisonError};
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// ============================================================================
// Grid Cache
// ============================================================================

/// Memoized prefix power sums of the implied grid 0, 1, …, capacity−1.
#[derive(Debug, Clone)]
pub struct GridCache<P: Float> {
    /// Polynomial degree the sums were built for.
    degree: usize,

    /// Largest sample count this cache can serve.
    capacity: usize,

    /// Row-major prefix sums: entry [k][j] = Σ_{i<j} iᵏ, for k = 0..=2·degree
    /// and j = 0..=capacity.
    prefix: Vec<P>,
}

impl<P: Float> GridCache<P> {
    /// Build the cache for a degree and grid capacity.
    ///
    /// One-time O(capacity · degree) setup; every subsequent fit against the
    /// grid assembles its matrix from the stored sums.
    pub fn new(degree: usize, capacity: usize) -> Self {
        let rows = 2 * degree + 1;
        let width = capacity + 1;
        let mut prefix = vec![P::zero(); rows * width];

        for j in 0..capacity {
            let xi = P::from(j).unwrap();
            let mut power = P::one();
            for k in 0..rows {
                prefix[k * width + j + 1] = prefix[k * width + j] + power;
                power = power * xi;
            }
        }

        Self {
            degree,
            capacity,
            prefix,
        }
    }

    /// Degree the cache was built for.
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Largest sample count the cache can serve.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Fill `sums[k] = Σ_{i<n} iᵏ` from the stored prefixes.
    ///
    /// Callers must have validated `n <= capacity` and
    /// `sums.len() <= 2·degree + 1`.
    pub(crate) fn power_sums_into(&self, n: usize, sums: &mut [P]) {
        let width = self.capacity + 1;
        for (k, s) in sums.iter_mut().enumerate() {
            *s = self.prefix[k * width + n];
        }
    }
}

// ============================================================================
// Process-Wide Shared Table
// ============================================================================

/// Per-precision access to the process-wide cache table.
///
/// Bridges the generic cache API to one static table per concrete float
/// type, since statics cannot be generic.
#[cfg(feature = "std")]
pub trait SharedGridPrecision: Float + Sized {
    /// Fetch or build the shared cache for (degree, capacity).
    fn shared_cache(degree: usize, capacity: usize) -> Arc<GridCache<Self>>;
}

#[cfg(feature = "std")]
type SharedTable<P> = OnceLock<Mutex<BTreeMap<(usize, usize), Arc<GridCache<P>>>>>;

#[cfg(feature = "std")]
fn shared_cache_in<P: Float>(
    table: &SharedTable<P>,
    degree: usize,
    capacity: usize,
) -> Arc<GridCache<P>> {
    let table = table.get_or_init(|| Mutex::new(BTreeMap::new()));
    let mut table = table.lock().unwrap_or_else(PoisonError::into_inner);
    Arc::clone(
        table
            .entry((degree, capacity))
            .or_insert_with(|| Arc::new(GridCache::new(degree, capacity))),
    )
}

#[cfg(feature = "std")]
impl SharedGridPrecision for f32 {
    fn shared_cache(degree: usize, capacity: usize) -> Arc<GridCache<Self>> {
        static TABLE: SharedTable<f32> = OnceLock::new();
        shared_cache_in(&TABLE, degree, capacity)
    }
}

#[cfg(feature = "std")]
impl SharedGridPrecision for f64 {
    fn shared_cache(degree: usize, capacity: usize) -> Arc<GridCache<Self>> {
        static TABLE: SharedTable<f64> = OnceLock::new();
        shared_cache_in(&TABLE, degree, capacity)
    }
}

#[cfg(feature = "std")]
impl<P: SharedGridPrecision> GridCache<P> {
    /// Fetch the process-wide cache for (degree, capacity), building it on
    /// first use.
    ///
    /// Entries are built at most once per key; concurrent first calls are
    /// serialized by the table lock.
    pub fn shared(degree: usize, capacity: usize) -> Arc<Self> {
        P::shared_cache(degree, capacity)
    }
}
