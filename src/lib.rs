//! # polyfit-rs — Least-Squares Polynomial Fitting for Rust
//!
//! Fits a polynomial of fixed degree to sample points by ordinary least
//! squares and exposes the result as a reusable [`Polynomial`](prelude::Polynomial) value
//! supporting evaluation, symbolic differentiation, symbolic integration,
//! and residual tracking.
//!
//! ## How it works
//!
//! Polynomial regression models the expected value of y as an nth-degree
//! polynomial:
//!
//! ```text
//! y = c₀ + c₁·x + c₂·x² + … + cₙ·xⁿ
//! ```
//!
//! The engine minimizes Σ(yᵢ − P(xᵢ))² by:
//!
//! 1. Accumulating power sums `S_k = Σ xᵢᵏ` (k ≤ 2n) and moments
//!    `T_k = Σ yᵢ·xᵢᵏ` (k ≤ n) in the internal precision.
//! 2. Assembling the symmetric normal-equations system, entry [i][j] = `S_{i+j}`.
//! 3. Solving it by Gaussian elimination with partial pivoting.
//! 4. Packaging the coefficients, the sample count, and (optionally) the
//!    sum-of-squared-errors residual into a [`Polynomial`](prelude::Polynomial).
//!
//! ## Quick Start
//!
//! ```rust
//! use polyfit_rs::prelude::*;
//!
//! // Samples of y = 2x² + 3x + 4
//! let x = vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
//! let y: Vec<f64> = x.iter().map(|&xi| 2.0 * xi * xi + 3.0 * xi + 4.0).collect();
//!
//! // Build the model
//! let model = PolyFit::<f64>::new()
//!     .degree(2)      // Fit a quadratic
//!     .build()?;
//!
//! // Fit the model to the data
//! let poly = model.fit(&x, &y)?;
//!
//! assert!((poly.evaluate(0.5) - 6.0).abs() < 1e-9);
//! assert!((poly.differentiate()?.evaluate(0.5) - 5.0).abs() < 1e-9);
//! # Result::<(), PolyfitError>::Ok(())
//! ```
//!
//! ## Fit Variants
//!
//! | Variant       | Entry point            | x-values                         |
//! |---------------|------------------------|----------------------------------|
//! | Explicit      | [`fit`](prelude::PolyFitModel::fit)        | Caller-supplied sequence   |
//! | Implied grid  | [`fit_indexed`](prelude::PolyFitModel::fit_indexed) | 0, 1, …, N−1              |
//! | Cached grid   | [`fit_fixed`](prelude::PolyFitModel::fit_fixed)   | 0, 1, …, N−1, memoized    |
//!
//! The implied-grid variant drops the x sequence entirely:
//!
//! ```rust
//! use polyfit_rs::prelude::*;
//!
//! let y = vec![4.0, 9.0, 18.0, 31.0, 48.0];
//!
//! let model = PolyFit::<f64>::new().degree(2).build()?;
//! let poly = model.fit_indexed(&y)?;
//!
//! assert!((poly.evaluate(0.5) - 6.0).abs() < 1e-9);
//! # Result::<(), PolyfitError>::Ok(())
//! ```
//!
//! When many windows are fitted against the same implied grid (e.g., a
//! real-time pipeline refitting every new sample window over a fixed time
//! axis), build a [`GridCache`](prelude::GridCache) once and reuse it; the x-derived half of the
//! normal equations is then never recomputed:
//!
//! ```rust
//! use polyfit_rs::prelude::*;
//!
//! let model = PolyFit::<f64>::new().degree(2).build()?;
//! let cache = GridCache::new(2, 64); // capacity 64 samples
//!
//! for window in [[4.0, 9.0, 18.0, 31.0], [5.0, 10.0, 19.0, 32.0]] {
//!     let poly = model.fit_fixed(&window, &cache)?;
//!     let _ = poly.evaluate(0.5);
//! }
//! # Result::<(), PolyfitError>::Ok(())
//! ```
//!
//! Under `std`, `GridCache::shared(degree, capacity)` returns a process-wide
//! cache built at most once per (degree, capacity) key, safe for concurrent
//! first use.
//!
//! ## The Polynomial Surface
//!
//! ```rust
//! use polyfit_rs::prelude::*;
//!
//! let y = vec![4.0, 9.0, 18.0, 31.0, 48.0];
//! let model = PolyFit::<f64>::new().degree(2).compute_residual(true).build()?;
//! let poly = model.fit_indexed(&y)?;
//!
//! poly.evaluate(2.5);                   // value at a point
//! poly.coefficient(1)?;                 // bounds-checked access
//! poly.order();                         // 2
//! poly.sample_count();                  // 5
//! poly.residual();                      // Some(sse), ~0 here
//! let dp = poly.differentiate()?;       // order 1
//! let ip = poly.integrate(0.0);         // order 3, constant term 0
//! println!("{poly}");                   // "2 * x^2 + 3 * x + 4"
//! # let _ = (dp, ip);
//! # Result::<(), PolyfitError>::Ok(())
//! ```
//!
//! ## Sample Containers and Precision
//!
//! Fit entry points accept any ordered container of numeric values (`Vec`,
//! slices, arrays, `VecDeque`, even `BTreeSet` for x), and the x and y
//! containers may differ. Sample, output and accumulator types are
//! independent: low-precision data can be fitted through a wide accumulator
//! and read back in its own type, with rounding to nearest for integral
//! outputs.
//!
//! ```rust
//! use polyfit_rs::prelude::*;
//!
//! // u8 samples, f64 accumulator, u8 outputs
//! let x: Vec<u8> = (0..10).collect();
//! let y: Vec<u8> = x.iter().map(|&xi| 2 * xi * xi + 3 * xi + 4).collect();
//!
//! let model = PolyFit::<u8, f64>::new().degree(2).build()?;
//! let poly = model.fit(&x, &y)?;
//!
//! assert_eq!(poly.evaluate(3), y[3]);
//! # Result::<(), PolyfitError>::Ok(())
//! ```
//!
//! ## Result and Error Handling
//!
//! Every fallible operation returns `Result<_, PolyfitError>`; the `?`
//! operator is idiomatic:
//!
//! ```rust
//! use polyfit_rs::prelude::*;
//!
//! let x = vec![1.0, 2.0, 3.0];
//! let y = vec![2.0, 4.0];
//!
//! let model = PolyFit::<f64>::new().degree(1).build()?;
//!
//! match model.fit(&x, &y) {
//!     Ok(poly) => println!("fit: {poly}"),
//!     Err(e) => eprintln!("fit failed: {e}"), // length mismatch here
//! }
//! # Result::<(), PolyfitError>::Ok(())
//! ```
//!
//! A fit either succeeds completely or fails with a precondition or
//! numerical error; no degenerate polynomial is ever returned. Fitting
//! fewer than `degree + 1` points is rejected up front; duplicate x-values
//! collapsing the system rank surface as a distinct singular-system error.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments. Disable default features to
//! remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! polyfit-rs = { version = "0.1", default-features = false }
//! ```
//!
//! Without `std` the process-wide shared cache table is unavailable; build
//! and own [`GridCache`](prelude::GridCache) values explicitly.
//!
//! ## Parameters
//!
//! | Parameter            | Default | Description                                |
//! |----------------------|---------|--------------------------------------------|
//! | **degree**           | 1       | Polynomial degree (0 = mean of y)          |
//! | **compute_residual** | false   | Run the Σ(y − P(x))² pass after solving    |
//!
//! ## References
//!
//! - Legendre, A.-M. (1805). "Nouvelles méthodes pour la détermination des orbites des comètes" (least squares)
//! - Golub, G. H. & Van Loan, C. F. (2013). "Matrix Computations", §3.4 (pivoted Gaussian elimination)

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - errors and numeric seams.
//
// Contains the error taxonomy, the conversion seam between sample types and
// internal precision, and the ordered-sequence abstraction.
mod primitives;

// Layer 2: Math - pure mathematical building blocks.
//
// Contains the Polynomial value type, moment accumulation (scalar and SIMD),
// and the pivoted Gaussian-elimination solver.
mod math;

// Layer 3: Engine - orchestration of one fit.
//
// Contains input validation, the normal-equations working set, the fit
// pipeline, and the memoized implied-grid cache.
mod engine;

// High-level fluent API for polynomial fitting.
//
// Provides the `PolyFit` builder and the `PolyFitModel` fit entry points.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard polyfit prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use polyfit_rs::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "std")]
    pub use crate::api::SharedGridPrecision;
    pub use crate::api::{
        GridCache, PolyFit, PolyFitModel, PolyfitError, Polynomial, SampleSequence, SampleValue,
    };
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing
/// purposes. It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change
/// without notice. Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and utilities.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math building blocks.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal execution engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
