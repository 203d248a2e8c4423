//! Moment accumulation for normal-equations assembly.
//!
//! ## Purpose
//!
//! This module computes the two families of sums the regression engine needs:
//! power sums `S_k = Σ xᵢᵏ` (k = 0..=2n) for the normal-equations matrix and
//! moments `T_k = Σ yᵢ·xᵢᵏ` (k = 0..=n) for the right-hand side.
//!
//! ## Design notes
//!
//! * **Running powers**: Each sample contributes `xᵏ` built incrementally by
//!   one multiply per exponent, never via `powi`.
//! * **Scalar + SIMD**: A generic scalar path serves every `Float`; `f64`
//!   overrides it with a two-lane `wide::f64x2` path plus a scalar tail.
//! * **Bridging trait**: [`MomentAccumulate`] dispatches generic engine code
//!   to the per-type implementation.
//!
//! ## Invariants
//!
//! * `sums[k]` on return equals the full sum over all samples, both paths.
//! * Output slices are fully overwritten; no stale values survive.
//!
//! ## Non-goals
//!
//! * This module does not assemble the matrix (handled by the engine).
//! * This module does not validate sample finiteness.

// External dependencies
use num_traits::Float;
use wide::f64x2;

// ============================================================================
// MomentAccumulate Trait
// ============================================================================

/// Per-type entry points for moment accumulation.
///
/// Bridges generic engine code to the optimized accumulation path for the
/// concrete precision type.
pub trait MomentAccumulate: Float {
    /// Fill `sums[k] = Σ xᵢᵏ` for k = 0..=sums.len()-1.
    fn power_sums(x: &[Self], sums: &mut [Self]);

    /// Fill `sums[k] = Σ yᵢ·xᵢᵏ` for k = 0..=sums.len()-1.
    ///
    /// `x` and `y` must have equal length (guaranteed by the validator).
    fn weighted_power_sums(x: &[Self], y: &[Self], sums: &mut [Self]);
}

impl MomentAccumulate for f32 {
    #[inline]
    fn power_sums(x: &[Self], sums: &mut [Self]) {
        power_sums_scalar(x, sums);
    }

    #[inline]
    fn weighted_power_sums(x: &[Self], y: &[Self], sums: &mut [Self]) {
        weighted_power_sums_scalar(x, y, sums);
    }
}

impl MomentAccumulate for f64 {
    #[inline]
    fn power_sums(x: &[Self], sums: &mut [Self]) {
        power_sums_simd(x, sums);
    }

    #[inline]
    fn weighted_power_sums(x: &[Self], y: &[Self], sums: &mut [Self]) {
        weighted_power_sums_simd(x, y, sums);
    }
}

// ============================================================================
// Scalar Accumulation
// ============================================================================

/// Power-sum accumulation over any `Float` type (scalar).
pub fn power_sums_scalar<T: Float>(x: &[T], sums: &mut [T]) {
    for s in sums.iter_mut() {
        *s = T::zero();
    }
    for &xi in x {
        let mut power = T::one();
        for s in sums.iter_mut() {
            *s = *s + power;
            power = power * xi;
        }
    }
}

/// Weighted power-sum accumulation over any `Float` type (scalar).
pub fn weighted_power_sums_scalar<T: Float>(x: &[T], y: &[T], sums: &mut [T]) {
    for s in sums.iter_mut() {
        *s = T::zero();
    }
    for (&xi, &yi) in x.iter().zip(y.iter()) {
        let mut power = T::one();
        for s in sums.iter_mut() {
            *s = *s + yi * power;
            power = power * xi;
        }
    }
}

// ============================================================================
// SIMD Accumulation (f64)
// ============================================================================

/// Power-sum accumulation for `f64` using two-lane SIMD with a scalar tail.
pub fn power_sums_simd(x: &[f64], sums: &mut [f64]) {
    let n = x.len();
    let k = sums.len();
    let mut acc = [f64x2::splat(0.0); MAX_SIMD_MOMENTS];

    if k > MAX_SIMD_MOMENTS {
        // Degree too high for the fixed lane buffer; scalar path covers it.
        power_sums_scalar(x, sums);
        return;
    }

    let mut i = 0;
    while i + 2 <= n {
        let xv = f64x2::new([x[i], x[i + 1]]);
        let mut power = f64x2::splat(1.0);
        for a in acc.iter_mut().take(k) {
            *a += power;
            power *= xv;
        }
        i += 2;
    }

    for (s, a) in sums.iter_mut().zip(acc.iter()) {
        *s = a.reduce_add();
    }

    // Tail
    for &xi in &x[i..] {
        let mut power = 1.0;
        for s in sums.iter_mut() {
            *s += power;
            power *= xi;
        }
    }
}

/// Weighted power-sum accumulation for `f64` using two-lane SIMD.
pub fn weighted_power_sums_simd(x: &[f64], y: &[f64], sums: &mut [f64]) {
    let n = x.len();
    let k = sums.len();
    let mut acc = [f64x2::splat(0.0); MAX_SIMD_MOMENTS];

    if k > MAX_SIMD_MOMENTS {
        weighted_power_sums_scalar(x, y, sums);
        return;
    }

    let mut i = 0;
    while i + 2 <= n {
        let xv = f64x2::new([x[i], x[i + 1]]);
        let yv = f64x2::new([y[i], y[i + 1]]);
        let mut power = f64x2::splat(1.0);
        for a in acc.iter_mut().take(k) {
            *a += yv * power;
            power *= xv;
        }
        i += 2;
    }

    for (s, a) in sums.iter_mut().zip(acc.iter()) {
        *s = a.reduce_add();
    }

    // Tail
    for (&xi, &yi) in x[i..].iter().zip(y[i..].iter()) {
        let mut power = 1.0;
        for s in sums.iter_mut() {
            *s += yi * power;
            power *= xi;
        }
    }
}

/// Lane-buffer capacity of the SIMD paths: covers 2·degree + 1 moments up to
/// degree 64 before falling back to the scalar loop.
const MAX_SIMD_MOMENTS: usize = 129;
