//! Tests for the error taxonomy.
//!
//! These tests verify that every error variant renders a diagnostic message
//! with its context values, and that variants compare by content.
//!
//! ## Test Organization
//!
//! 1. **Display** - message content per variant
//! 2. **Equality** - structural comparison

use polyfit_rs::prelude::*;

// ============================================================================
// Display Tests
// ============================================================================

/// Test precondition-violation messages carry their context values.
#[test]
fn test_display_precondition_errors() {
    assert_eq!(
        PolyfitError::EmptyInput.to_string(),
        "Input sequences are empty"
    );

    let msg = PolyfitError::MismatchedInputs { x_len: 3, y_len: 2 }.to_string();
    assert!(msg.contains('3') && msg.contains('2'), "got: {msg}");

    let msg = PolyfitError::TooFewPoints { got: 2, min: 4 }.to_string();
    assert!(msg.contains("got 2") && msg.contains("at least 4"), "got: {msg}");

    let msg = PolyfitError::InvalidDegree(1001).to_string();
    assert!(msg.contains("1001"), "got: {msg}");

    let msg = PolyfitError::InvalidNumericValue("y[1]=NaN".into()).to_string();
    assert!(msg.contains("y[1]=NaN"), "got: {msg}");
}

/// Test cache-related messages.
#[test]
fn test_display_cache_errors() {
    let msg = PolyfitError::CapacityExceeded { got: 10, capacity: 5 }.to_string();
    assert!(msg.contains("10") && msg.contains('5'), "got: {msg}");

    let msg = PolyfitError::CacheMismatch {
        cache_degree: 3,
        degree: 2,
    }
    .to_string();
    assert!(msg.contains("degree 3") && msg.contains("degree 2"), "got: {msg}");
}

/// Test numerical-failure and usage-error messages.
#[test]
fn test_display_numerical_and_usage_errors() {
    let msg = PolyfitError::SingularSystem { column: 1 }.to_string();
    assert!(msg.contains("singular") && msg.contains("column 1"), "got: {msg}");

    let msg = PolyfitError::CoefficientOutOfRange { index: 5, order: 2 }.to_string();
    assert!(msg.contains('5') && msg.contains('2'), "got: {msg}");

    let msg = PolyfitError::DerivativeOfConstant.to_string();
    assert!(msg.contains("degree-0"), "got: {msg}");

    let msg = PolyfitError::DuplicateParameter { parameter: "degree" }.to_string();
    assert!(msg.contains("'degree'"), "got: {msg}");
}

// ============================================================================
// Equality Tests
// ============================================================================

/// Test that variants compare by content.
#[test]
fn test_error_equality() {
    assert_eq!(
        PolyfitError::TooFewPoints { got: 2, min: 3 },
        PolyfitError::TooFewPoints { got: 2, min: 3 }
    );
    assert_ne!(
        PolyfitError::TooFewPoints { got: 2, min: 3 },
        PolyfitError::TooFewPoints { got: 2, min: 4 }
    );
    assert_ne!(
        PolyfitError::EmptyInput,
        PolyfitError::DerivativeOfConstant
    );
}

/// Test that the error implements the standard error trait.
#[test]
fn test_error_trait_object() {
    let err: Box<dyn std::error::Error> = Box::new(PolyfitError::EmptyInput);
    assert_eq!(err.to_string(), "Input sequences are empty");
}
