//! Polynomial value type with evaluation and calculus operations.
//!
//! ## Purpose
//!
//! This module provides [`Polynomial`], the immutable-degree coefficient
//! container returned by the regression engine. A polynomial evaluates at a
//! point, differentiates, integrates, and carries the metadata of the fit
//! that produced it (sample count and residual).
//!
//! ## Design notes
//!
//! * **Two type parameters**: `T` is the sample/output type seen by callers,
//!   `P` the internal precision all arithmetic runs in. They may differ, so
//!   low-precision data can be evaluated through a wide accumulator.
//! * **Horner evaluation**: Σ cᵢ·xⁱ is accumulated highest-degree-first with
//!   one multiply-add per coefficient.
//! * **Integral outputs**: Conversion back to an integral `T` rounds to
//!   nearest before casting (see `SampleValue`).
//! * **Calculus returns new values**: Differentiation and integration build a
//!   polynomial of adjacent degree; the receiver is never mutated.
//!
//! ## Invariants
//!
//! * `coefficients.len() == order + 1`, fixed for the value's lifetime.
//! * `sample_count` is 0 unless the polynomial came out of a fit.
//! * `residual` is `None` until computed by the engine or set by the caller.
//!
//! ## Non-goals
//!
//! * This module does not fit polynomials to data (handled by the engine).
//! * The `Display` rendering is diagnostic output, not a parseable format.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter};
use core::marker::PhantomData;
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::PolyfitError;
use crate::primitives::numeric::SampleValue;

// ============================================================================
// Polynomial
// ============================================================================

/// A polynomial of fixed degree with coefficients stored in ascending order
/// of exponent: index *i* holds the coefficient of xⁱ.
///
/// `T` is the sample/output type, `P` the internal arithmetic precision.
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial<T, P = T>
where
    T: SampleValue<P>,
    P: Float,
{
    /// Coefficients, exactly `order + 1` entries.
    coefficients: Vec<P>,

    /// Number of data points behind the fit (0 if not from a fit).
    sample_count: usize,

    /// Sum of squared errors of the fit, when computed.
    residual: Option<P>,

    _output: PhantomData<T>,
}

impl<T, P> Polynomial<T, P>
where
    T: SampleValue<P>,
    P: Float,
{
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create an all-zero polynomial of the given order.
    pub fn zeros(order: usize) -> Self {
        Self {
            coefficients: vec![P::zero(); order + 1],
            sample_count: 0,
            residual: None,
            _output: PhantomData,
        }
    }

    /// Create a polynomial from ascending-order coefficients.
    ///
    /// The order is `coefficients.len() - 1`; an empty sequence is rejected.
    pub fn from_coefficients(coefficients: Vec<P>) -> Result<Self, PolyfitError> {
        if coefficients.is_empty() {
            return Err(PolyfitError::EmptyInput);
        }
        Ok(Self {
            coefficients,
            sample_count: 0,
            residual: None,
            _output: PhantomData,
        })
    }

    /// Attach fit metadata to a freshly solved polynomial.
    pub(crate) fn with_fit_metadata(mut self, sample_count: usize, residual: Option<P>) -> Self {
        self.sample_count = sample_count;
        self.residual = residual;
        self
    }

    // ========================================================================
    // Evaluation
    // ========================================================================

    /// Evaluate the polynomial at `x`.
    ///
    /// Accumulation runs in `P`; the result converts back to `T`, rounding
    /// to nearest when `T` is integral.
    pub fn evaluate(&self, x: T) -> T {
        T::from_precision(self.evaluate_precision(x.into_precision()))
    }

    /// Evaluate at a point already in internal precision.
    ///
    /// Horner accumulation, highest degree first.
    pub fn evaluate_precision(&self, x: P) -> P {
        self.coefficients
            .iter()
            .rev()
            .fold(P::zero(), |acc, &c| acc * x + c)
    }

    // ========================================================================
    // Calculus
    // ========================================================================

    /// Differentiate, producing a polynomial of order `order - 1`.
    ///
    /// Coefficient *i* of the result is `(i + 1) · c[i + 1]`. Fails for a
    /// constant polynomial, whose derivative has no degree −1 representation.
    pub fn differentiate(&self) -> Result<Self, PolyfitError> {
        let order = self.order();
        if order == 0 {
            return Err(PolyfitError::DerivativeOfConstant);
        }

        let mut diff = Self::zeros(order - 1);
        for n in 1..=order {
            diff.coefficients[n - 1] = P::from(n).unwrap() * self.coefficients[n];
        }
        Ok(diff)
    }

    /// Integrate, producing a polynomial of order `order + 1`.
    ///
    /// Coefficient 0 of the result is the supplied integration constant;
    /// coefficient *i* (i ≥ 1) is `c[i - 1] / i`, divided in `P`.
    pub fn integrate(&self, constant: T) -> Self {
        let order = self.order();
        let mut integ = Self::zeros(order + 1);
        for n in 1..=order + 1 {
            integ.coefficients[n] = self.coefficients[n - 1] / P::from(n).unwrap();
        }
        integ.coefficients[0] = constant.into_precision();
        integ
    }

    // ========================================================================
    // Coefficient Access
    // ========================================================================

    /// Coefficient of xⁱ, bounds-checked against `[0, order]`.
    pub fn coefficient(&self, index: usize) -> Result<P, PolyfitError> {
        self.coefficients
            .get(index)
            .copied()
            .ok_or(PolyfitError::CoefficientOutOfRange {
                index,
                order: self.order(),
            })
    }

    /// Overwrite the coefficient of xⁱ, bounds-checked against `[0, order]`.
    pub fn set_coefficient(&mut self, index: usize, value: P) -> Result<(), PolyfitError> {
        let order = self.order();
        match self.coefficients.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(PolyfitError::CoefficientOutOfRange { index, order }),
        }
    }

    /// All coefficients in ascending order of exponent.
    pub fn coefficients(&self) -> &[P] {
        &self.coefficients
    }

    // ========================================================================
    // Metadata
    // ========================================================================

    /// Order (degree) of the polynomial.
    pub fn order(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// Number of data points the fit was computed from.
    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    /// Sum of squared errors of the fit, if computed.
    pub fn residual(&self) -> Option<P> {
        self.residual
    }

    /// Set the residual metric.
    pub fn set_residual(&mut self, residual: P) {
        self.residual = Some(residual);
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T, P> Display for Polynomial<T, P>
where
    T: SampleValue<P>,
    P: Float + Display,
{
    /// Render the algebraic form `aₙ * x^n + … + a₁ * x + a₀`.
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        for n in (0..=self.order()).rev() {
            let c = self.coefficients[n];
            match n {
                0 => write!(f, "{c}")?,
                1 => write!(f, "{c} * x + ")?,
                _ => write!(f, "{c} * x^{n} + ")?,
            }
        }
        Ok(())
    }
}
