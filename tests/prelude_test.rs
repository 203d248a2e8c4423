//! Tests for the prelude module.
//!
//! These tests verify that the prelude exports all necessary types for
//! convenient usage of the fitting API. The prelude should provide a
//! one-stop import for common functionality.
//!
//! ## Test Organization
//!
//! 1. **Import Verification** - all prelude exports are accessible
//! 2. **Builder Pattern** - complete workflows work with prelude imports

use polyfit_rs::prelude::*;

// ============================================================================
// Import Verification Tests
// ============================================================================

/// Test that all prelude imports work correctly.
///
/// Verifies that the prelude exports all necessary types for a basic fit.
#[test]
fn test_prelude_imports() {
    let x = vec![0.0, 1.0, 2.0, 3.0, 4.0];
    let y = vec![4.0, 9.0, 18.0, 31.0, 48.0];

    let result = PolyFit::<f64>::new().degree(2).build().unwrap().fit(&x, &y);

    assert!(result.is_ok(), "Basic fit should work with prelude imports");
}

/// Test that the error and polynomial types are nameable from the prelude.
#[test]
fn test_prelude_types_nameable() {
    let poly: Polynomial<f64> = Polynomial::zeros(1);
    assert_eq!(poly.order(), 1);

    let err: PolyfitError = PolyfitError::EmptyInput;
    assert_eq!(err, PolyfitError::EmptyInput);

    let cache: GridCache<f64> = GridCache::new(1, 4);
    assert_eq!(cache.capacity(), 4);
}

/// Test that a model value can be stored and reused.
#[test]
fn test_prelude_model_reuse() {
    let model: PolyFitModel<f64> = PolyFit::new().degree(1).build().unwrap();

    let first = model.fit_indexed(&vec![1.0, 3.0, 5.0]).unwrap();
    let second = model.fit_indexed(&vec![2.0, 4.0, 6.0]).unwrap();

    assert_eq!(first.order(), 1);
    assert_eq!(second.order(), 1);
}
