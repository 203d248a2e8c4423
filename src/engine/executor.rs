//! Fit pipeline: validate, accumulate, solve, package.
//!
//! ## Purpose
//!
//! This module orchestrates one least-squares fit from validated sample
//! buffers to a packaged [`Polynomial`]: moment accumulation, normal-equation
//! assembly, the pivoted linear solve, and the optional residual pass.
//!
//! ## Design notes
//!
//! * **One atomic fit-or-fail per call**: Every failure surfaces before a
//!   polynomial exists; no degenerate coefficients ever leave the engine.
//! * **Three entry points**: Explicit x/y, implied grid, and cached grid.
//!   They share the solve-and-package tail; only the source of the power
//!   sums differs.
//! * **Residual is opt-in**: The residual is a second O(N·n) pass over the
//!   samples and is skipped unless the configuration requests it.
//!
//! ## Key concepts
//!
//! * **Degree 0**: The system degenerates to `N·c₀ = Σy`; the general
//!   elimination path solves the 1×1 case without special treatment.
//!
//! ## Invariants
//!
//! * A returned polynomial has order `config.degree` and sample count N.
//! * Buffers handed to the solver are never reused afterwards.
//!
//! ## Non-goals
//!
//! * This module does not collect caller containers (handled by the API).
//! * This module does not own cache lifetimes.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::cache::GridCache;
use crate::engine::validator::Validator;
use crate::engine::workspace::NormalEquations;
use crate::math::accumulators::MomentAccumulate;
use crate::math::linalg::GaussianSolver;
use crate::math::polynomial::Polynomial;
use crate::primitives::errors::PolyfitError;
use crate::primitives::numeric::SampleValue;

// ============================================================================
// Fit Configuration
// ============================================================================

/// Resolved configuration of one fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FitConfig {
    /// Polynomial degree n.
    pub degree: usize,

    /// Whether to run the residual pass after solving.
    pub compute_residual: bool,
}

// ============================================================================
// Fit Entry Points
// ============================================================================

/// Fit against explicit x/y sample buffers.
pub fn fit_explicit<T, P>(
    config: &FitConfig,
    x: &[P],
    y: &[P],
) -> Result<Polynomial<T, P>, PolyfitError>
where
    T: SampleValue<P>,
    P: MomentAccumulate,
{
    Validator::validate_samples(x, y, config.degree)?;

    let mut equations = NormalEquations::new(config.degree);
    equations.accumulate(x, y);
    solve_and_package(config, equations, x, y)
}

/// Fit against y-only samples with x implied as 0, 1, …, N−1.
pub fn fit_implied<T, P>(config: &FitConfig, y: &[P]) -> Result<Polynomial<T, P>, PolyfitError>
where
    T: SampleValue<P>,
    P: MomentAccumulate,
{
    Validator::validate_observations(y, config.degree)?;

    let x = implied_grid(y.len());
    let mut equations = NormalEquations::new(config.degree);
    equations.accumulate(&x, y);
    solve_and_package(config, equations, &x, y)
}

/// Fit against y-only samples using memoized implied-grid power sums.
pub fn fit_cached<T, P>(
    config: &FitConfig,
    y: &[P],
    cache: &GridCache<P>,
) -> Result<Polynomial<T, P>, PolyfitError>
where
    T: SampleValue<P>,
    P: MomentAccumulate,
{
    Validator::validate_observations(y, config.degree)?;
    Validator::validate_cache(y.len(), cache.degree(), cache.capacity(), config.degree)?;

    // Moments still depend on y; only the power sums come from the cache.
    let x = implied_grid(y.len());
    let mut equations = NormalEquations::new(config.degree);
    cache.power_sums_into(y.len(), &mut equations.power_sums);
    P::weighted_power_sums(&x, y, &mut equations.moments);
    solve_and_package(config, equations, &x, y)
}

// ============================================================================
// Shared Pipeline Tail
// ============================================================================

/// The implied grid 0, 1, …, n−1 in internal precision.
fn implied_grid<P: Float>(n: usize) -> Vec<P> {
    (0..n).map(|i| P::from(i).unwrap()).collect()
}

/// Assemble, solve, and package the result polynomial.
fn solve_and_package<T, P>(
    config: &FitConfig,
    mut equations: NormalEquations<P>,
    x: &[P],
    y: &[P],
) -> Result<Polynomial<T, P>, PolyfitError>
where
    T: SampleValue<P>,
    P: MomentAccumulate,
{
    equations.assemble();

    let coefficients =
        GaussianSolver::solve(&mut equations.matrix, &mut equations.rhs, config.degree + 1)
            .map_err(|column| PolyfitError::SingularSystem { column })?;

    let polynomial = Polynomial::from_coefficients(coefficients)?;
    let residual = config
        .compute_residual
        .then(|| sum_squared_errors(&polynomial, x, y));

    Ok(polynomial.with_fit_metadata(y.len(), residual))
}

/// Residual pass: Σ (yᵢ − P(xᵢ))² in internal precision.
fn sum_squared_errors<T, P>(polynomial: &Polynomial<T, P>, x: &[P], y: &[P]) -> P
where
    T: SampleValue<P>,
    P: Float,
{
    x.iter()
        .zip(y.iter())
        .fold(P::zero(), |acc, (&xi, &yi)| {
            let err = yi - polynomial.evaluate_precision(xi);
            acc + err * err
        })
}
