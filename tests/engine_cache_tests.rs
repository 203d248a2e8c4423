//! Tests for the memoized implied-grid cache.
//!
//! These tests verify the prefix power-sum construction, the capacity and
//! degree metadata, and the process-wide shared table.
//!
//! ## Test Organization
//!
//! 1. **Construction** - metadata and prefix sums
//! 2. **Shared Table** - per-key memoization and reuse

use std::sync::Arc;

use approx::assert_relative_eq;

use polyfit_rs::prelude::*;

// ============================================================================
// Construction Tests
// ============================================================================

/// Test cache metadata accessors.
#[test]
fn test_cache_metadata() {
    let cache = GridCache::<f64>::new(2, 32);

    assert_eq!(cache.degree(), 2);
    assert_eq!(cache.capacity(), 32);
}

/// Test that cached fits agree with uncached fits at every N ≤ capacity.
///
/// The stored prefixes must serve any sample count up to the capacity, not
/// only the capacity itself.
#[test]
fn test_cache_serves_every_sample_count() {
    let model = PolyFit::<f64>::new().degree(2).build().unwrap();
    let cache = GridCache::new(2, 50);

    for n in [3usize, 4, 10, 37, 50] {
        let y: Vec<f64> = (0..n)
            .map(|i| {
                let xi = i as f64;
                1.25 * xi * xi - 0.5 * xi + 2.0
            })
            .collect();

        let indexed = model.fit_indexed(&y).unwrap();
        let cached = model.fit_fixed(&y, &cache).unwrap();

        for i in 0..=2 {
            assert_relative_eq!(
                cached.coefficient(i).unwrap(),
                indexed.coefficient(i).unwrap(),
                epsilon = 1e-6,
                max_relative = 1e-6
            );
        }
    }
}

/// Test a degree-0 cache, whose only power sum is the sample count.
#[test]
fn test_cache_degree_0() {
    let model = PolyFit::<f64>::new().degree(0).build().unwrap();
    let cache = GridCache::new(0, 8);

    let y = vec![1.0, 2.0, 3.0, 4.0];
    let poly = model.fit_fixed(&y, &cache).unwrap();

    assert_relative_eq!(poly.coefficient(0).unwrap(), 2.5, epsilon = 1e-12);
}

// ============================================================================
// Shared Table Tests
// ============================================================================

/// Test that the shared table returns the same cache for the same key.
#[test]
fn test_shared_cache_is_memoized_per_key() {
    let a = GridCache::<f64>::shared(2, 24);
    let b = GridCache::<f64>::shared(2, 24);

    assert!(Arc::ptr_eq(&a, &b));
}

/// Test that distinct keys build distinct caches.
#[test]
fn test_shared_cache_distinct_keys() {
    let a = GridCache::<f64>::shared(2, 24);
    let b = GridCache::<f64>::shared(3, 24);
    let c = GridCache::<f64>::shared(2, 25);

    assert!(!Arc::ptr_eq(&a, &b));
    assert!(!Arc::ptr_eq(&a, &c));
    assert_eq!(b.degree(), 3);
    assert_eq!(c.capacity(), 25);
}

/// Test that a shared cache drives fits like an owned one.
#[test]
fn test_shared_cache_fits() {
    let model = PolyFit::<f64>::new().degree(1).build().unwrap();
    let cache = GridCache::<f64>::shared(1, 12);

    let y: Vec<f64> = (0..12).map(|i| 3.0 * i as f64 + 1.0).collect();
    let poly = model.fit_fixed(&y, &cache).unwrap();

    assert_relative_eq!(poly.coefficient(0).unwrap(), 1.0, epsilon = 1e-9);
    assert_relative_eq!(poly.coefficient(1).unwrap(), 3.0, epsilon = 1e-9);
}
