//! Input validation for fit configuration and sample data.
//!
//! ## Purpose
//!
//! This module provides validation for fit parameters and sample data:
//! sequence lengths, finite values, degree bounds, and cache agreement.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Precondition checks**: Mismatched lengths, empty input, and too few
//!   points are rejected before any matrix work starts.
//! * **Finite checks**: Non-finite samples would poison the power sums
//!   silently, so every value is screened.
//! * **Capacity checks**: The cached-grid variant never reads past the
//!   capacity its cache was built for.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective mathematical constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not transform or filter input data.
//! * This module does not perform the fit itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::PolyfitError;

/// Largest supported polynomial degree.
///
/// Keeps the 2·degree + 1 moment range and the (degree+1)² matrix within
/// sane bounds; fits this large are already outside the method's useful
/// conditioning range.
pub const MAX_DEGREE: usize = 1000;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for fit configuration and input data.
///
/// Provides static methods returning `Result<(), PolyfitError>` that fail
/// fast upon identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the polynomial degree.
    pub fn validate_degree(degree: usize) -> Result<(), PolyfitError> {
        if degree > MAX_DEGREE {
            return Err(PolyfitError::InvalidDegree(degree));
        }
        Ok(())
    }

    /// Validate that no builder parameter was set multiple times.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), PolyfitError> {
        if let Some(parameter) = duplicate_param {
            return Err(PolyfitError::DuplicateParameter { parameter });
        }
        Ok(())
    }

    // ========================================================================
    // Sample Validation
    // ========================================================================

    /// Validate paired x/y sample buffers for an explicit-grid fit.
    pub fn validate_samples<T: Float>(
        x: &[T],
        y: &[T],
        degree: usize,
    ) -> Result<(), PolyfitError> {
        // Check 1: Matching lengths
        if x.len() != y.len() {
            return Err(PolyfitError::MismatchedInputs {
                x_len: x.len(),
                y_len: y.len(),
            });
        }

        Self::validate_observations(y, degree)?;
        Self::validate_finite(x, "x")
    }

    /// Validate a y-only sample buffer for an implied-grid fit.
    pub fn validate_observations<T: Float>(y: &[T], degree: usize) -> Result<(), PolyfitError> {
        // Check 1: Non-empty input
        if y.is_empty() {
            return Err(PolyfitError::EmptyInput);
        }

        // Check 2: Enough points to determine degree + 1 coefficients
        if y.len() < degree + 1 {
            return Err(PolyfitError::TooFewPoints {
                got: y.len(),
                min: degree + 1,
            });
        }

        // Check 3: All values finite
        Self::validate_finite(y, "y")
    }

    /// Validate every value in a buffer for finiteness.
    pub fn validate_finite<T: Float>(values: &[T], name: &str) -> Result<(), PolyfitError> {
        for (i, &val) in values.iter().enumerate() {
            if !val.is_finite() {
                return Err(PolyfitError::InvalidNumericValue(format!(
                    "{}[{}]={}",
                    name,
                    i,
                    val.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }
        Ok(())
    }

    // ========================================================================
    // Cache Validation
    // ========================================================================

    /// Validate sample count and degree against an injected grid cache.
    pub fn validate_cache(
        sample_count: usize,
        cache_degree: usize,
        cache_capacity: usize,
        degree: usize,
    ) -> Result<(), PolyfitError> {
        if cache_degree != degree {
            return Err(PolyfitError::CacheMismatch {
                cache_degree,
                degree,
            });
        }
        if sample_count > cache_capacity {
            return Err(PolyfitError::CapacityExceeded {
                got: sample_count,
                capacity: cache_capacity,
            });
        }
        Ok(())
    }
}
