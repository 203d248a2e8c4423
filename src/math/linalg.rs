//! Dense linear solver for the normal equations.
//!
//! ## Purpose
//!
//! This module solves the square system `A·c = b` produced by normal-equation
//! assembly, via Gaussian elimination with partial pivoting.
//!
//! ## Design notes
//!
//! * **Partial pivoting**: Each elimination step pivots on the largest
//!   remaining magnitude in the column. Normal-equation matrices become
//!   ill-conditioned as the degree grows; pivoting keeps the direct solve
//!   usable for the intended degree range.
//! * **In-place**: The caller's matrix and right-hand side are consumed as
//!   scratch space; both are transient working-set buffers.
//! * **Failure carries the column**: A missing pivot means a singular or
//!   rank-deficient system; the engine maps the failing column index to a
//!   distinct error.
//!
//! ## Invariants
//!
//! * On success, the returned vector has exactly `n` entries.
//! * The pivot threshold only rejects magnitudes at or below `T::epsilon()`.
//!
//! ## Non-goals
//!
//! * No QR, SVD or other orthogonal factorization.
//! * No iterative refinement or condition-number estimation.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// ============================================================================
// Gaussian Solver
// ============================================================================

/// Direct dense solver for small square systems.
pub struct GaussianSolver;

impl GaussianSolver {
    /// Solve `A·c = b` for `c`, where `a` is the row-major n×n matrix.
    ///
    /// Both `a` and `b` are overwritten during elimination. Returns the
    /// failing column index when no usable pivot exists.
    pub fn solve<T: Float>(a: &mut [T], b: &mut [T], n: usize) -> Result<Vec<T>, usize> {
        debug_assert_eq!(a.len(), n * n);
        debug_assert_eq!(b.len(), n);

        // Forward elimination with row pivoting
        for col in 0..n {
            let mut pivot_row = col;
            let mut pivot_mag = a[col * n + col].abs();
            for row in col + 1..n {
                let mag = a[row * n + col].abs();
                if mag > pivot_mag {
                    pivot_row = row;
                    pivot_mag = mag;
                }
            }

            if pivot_mag <= T::epsilon() {
                return Err(col);
            }

            if pivot_row != col {
                for j in col..n {
                    a.swap(col * n + j, pivot_row * n + j);
                }
                b.swap(col, pivot_row);
            }

            let pivot = a[col * n + col];
            for row in col + 1..n {
                let factor = a[row * n + col] / pivot;
                if factor == T::zero() {
                    continue;
                }
                a[row * n + col] = T::zero();
                for j in col + 1..n {
                    a[row * n + j] = a[row * n + j] - factor * a[col * n + j];
                }
                b[row] = b[row] - factor * b[col];
            }
        }

        // Back substitution
        let mut c = vec![T::zero(); n];
        for row in (0..n).rev() {
            let mut sum = b[row];
            for j in row + 1..n {
                sum = sum - a[row * n + j] * c[j];
            }
            c[row] = sum / a[row * n + row];
        }

        Ok(c)
    }
}
