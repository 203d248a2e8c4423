//! Working set of a single fit: buffers, sums, matrix and right-hand side.
//!
//! ## Purpose
//!
//! This module owns the transient state one least-squares fit flows through:
//! sample buffers widened to internal precision, the power sums and moments,
//! and the assembled normal-equations system.
//!
//! ## Design notes
//!
//! * **Symmetric by construction**: Matrix entry [i][j] is the power sum
//!   `S_{i+j}`, so assembly reads one flat sums slice instead of touching
//!   the samples again.
//! * **Transient**: A workspace lives for the duration of one fit call. The
//!   solver consumes the matrix and rhs in place.
//!
//! ## Invariants
//!
//! * `power_sums.len() == 2·degree + 1`, `moments.len() == degree + 1`.
//! * `matrix` is row-major `(degree + 1)²`.
//!
//! ## Non-goals
//!
//! * This module does not validate inputs and does not solve the system.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::accumulators::MomentAccumulate;

// ============================================================================
// Normal Equations
// ============================================================================

/// The normal-equations working set for a degree-n fit.
pub struct NormalEquations<P: Float> {
    /// Polynomial degree n.
    pub degree: usize,

    /// Power sums `S_k = Σ xᵢᵏ`, k = 0..=2n.
    pub power_sums: Vec<P>,

    /// Moments `T_k = Σ yᵢ·xᵢᵏ`, k = 0..=n.
    pub moments: Vec<P>,

    /// Row-major (n+1)×(n+1) matrix, entry [i][j] = `S_{i+j}`.
    pub matrix: Vec<P>,

    /// Right-hand side, entry i = `T_i`.
    pub rhs: Vec<P>,
}

impl<P: MomentAccumulate> NormalEquations<P> {
    /// Allocate an all-zero working set for the given degree.
    pub fn new(degree: usize) -> Self {
        let coeffs = degree + 1;
        Self {
            degree,
            power_sums: vec![P::zero(); 2 * degree + 1],
            moments: vec![P::zero(); coeffs],
            matrix: vec![P::zero(); coeffs * coeffs],
            rhs: vec![P::zero(); coeffs],
        }
    }

    /// Accumulate both sum families from sample buffers.
    pub fn accumulate(&mut self, x: &[P], y: &[P]) {
        P::power_sums(x, &mut self.power_sums);
        P::weighted_power_sums(x, y, &mut self.moments);
    }

    /// Fill the matrix and right-hand side from the accumulated sums.
    pub fn assemble(&mut self) {
        let coeffs = self.degree + 1;
        for i in 0..coeffs {
            for j in 0..coeffs {
                self.matrix[i * coeffs + j] = self.power_sums[i + j];
            }
            self.rhs[i] = self.moments[i];
        }
    }
}
