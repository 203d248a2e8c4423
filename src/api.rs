//! High-level API for least-squares polynomial fitting.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point: a fluent
//! builder for configuring a fit, and the validated model exposing the
//! three fit variants (explicit grid, implied grid, cached grid).
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Parameters are checked once, when `.build()` is called;
//!   sample data is checked on every fit.
//! * **Type-Safe**: Generic over the sample/output type `T` and the internal
//!   precision `P`, so low-precision data can be fitted through a wide
//!   accumulator.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`PolyFit`] builder via `PolyFit::new()`.
//! 2. Chain configuration methods (`.degree()`, `.compute_residual()`).
//! 3. Call `.build()` to obtain a [`PolyFitModel`].
//! 4. Fit data via `.fit(&x, &y)`, `.fit_indexed(&y)` or
//!    `.fit_fixed(&y, &cache)`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::marker::PhantomData;

// Internal dependencies
use crate::engine::executor::{self, FitConfig};
use crate::engine::validator::Validator;
use crate::math::accumulators::MomentAccumulate;

// Publicly re-exported types
pub use crate::engine::cache::GridCache;
#[cfg(feature = "std")]
pub use crate::engine::cache::SharedGridPrecision;
pub use crate::math::polynomial::Polynomial;
pub use crate::primitives::errors::PolyfitError;
pub use crate::primitives::numeric::SampleValue;
pub use crate::primitives::sequence::SampleSequence;

// ============================================================================
// PolyFit Builder
// ============================================================================

/// Fluent builder for configuring a polynomial fit.
///
/// `T` is the sample/output type, `P` the internal accumulator precision
/// (defaults to `T`).
#[derive(Debug, Clone)]
pub struct PolyFit<T = f64, P = T>
where
    T: SampleValue<P>,
    P: MomentAccumulate,
{
    /// Polynomial degree.
    degree: Option<usize>,

    /// Whether fits should run the residual pass.
    compute_residual: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    duplicate_param: Option<&'static str>,

    _types: PhantomData<(T, P)>,
}

impl<T, P> Default for PolyFit<T, P>
where
    T: SampleValue<P>,
    P: MomentAccumulate,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P> PolyFit<T, P>
where
    T: SampleValue<P>,
    P: MomentAccumulate,
{
    /// Create a new builder with default settings (degree 1, no residual).
    pub fn new() -> Self {
        Self {
            degree: None,
            compute_residual: None,
            duplicate_param: None,
            _types: PhantomData,
        }
    }

    /// Set the polynomial degree.
    pub fn degree(mut self, degree: usize) -> Self {
        if self.degree.is_some() {
            self.duplicate_param = Some("degree");
        }
        self.degree = Some(degree);
        self
    }

    /// Enable or disable the residual pass on fitted polynomials.
    pub fn compute_residual(mut self, enabled: bool) -> Self {
        if self.compute_residual.is_some() {
            self.duplicate_param = Some("compute_residual");
        }
        self.compute_residual = Some(enabled);
        self
    }

    /// Validate the configuration and build the model.
    pub fn build(self) -> Result<PolyFitModel<T, P>, PolyfitError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let degree = self.degree.unwrap_or(1);
        Validator::validate_degree(degree)?;

        Ok(PolyFitModel {
            config: FitConfig {
                degree,
                compute_residual: self.compute_residual.unwrap_or(false),
            },
            _types: PhantomData,
        })
    }
}

// ============================================================================
// PolyFit Model
// ============================================================================

/// A validated fit configuration, ready to run against sample data.
#[derive(Debug, Clone)]
pub struct PolyFitModel<T, P = T>
where
    T: SampleValue<P>,
    P: MomentAccumulate,
{
    config: FitConfig,
    _types: PhantomData<(T, P)>,
}

impl<T, P> PolyFitModel<T, P>
where
    T: SampleValue<P>,
    P: MomentAccumulate,
{
    /// Degree the model was configured with.
    pub fn degree(&self) -> usize {
        self.config.degree
    }

    /// Fit explicit x/y sequences of equal length.
    ///
    /// The containers may differ in type and element type; any ordered
    /// container of [`SampleValue`] elements works (see [`SampleSequence`]).
    pub fn fit<CX, CY>(&self, x: &CX, y: &CY) -> Result<Polynomial<T, P>, PolyfitError>
    where
        CX: SampleSequence<P> + ?Sized,
        CY: SampleSequence<P> + ?Sized,
    {
        let mut x_buf = Vec::with_capacity(x.len());
        x.append_to(&mut x_buf);
        let mut y_buf = Vec::with_capacity(y.len());
        y.append_to(&mut y_buf);
        executor::fit_explicit(&self.config, &x_buf, &y_buf)
    }

    /// Fit a y-only sequence with x implied as 0, 1, …, N−1.
    pub fn fit_indexed<CY>(&self, y: &CY) -> Result<Polynomial<T, P>, PolyfitError>
    where
        CY: SampleSequence<P> + ?Sized,
    {
        let mut y_buf = Vec::with_capacity(y.len());
        y.append_to(&mut y_buf);
        executor::fit_implied(&self.config, &y_buf)
    }

    /// Fit a y-only sequence against a memoized implied grid.
    ///
    /// The cache must have been built for this model's degree and for a
    /// capacity of at least `y.len()`; see [`GridCache`].
    pub fn fit_fixed<CY>(
        &self,
        y: &CY,
        cache: &GridCache<P>,
    ) -> Result<Polynomial<T, P>, PolyfitError>
    where
        CY: SampleSequence<P> + ?Sized,
    {
        let mut y_buf = Vec::with_capacity(y.len());
        y.append_to(&mut y_buf);
        executor::fit_cached(&self.config, &y_buf, cache)
    }
}
