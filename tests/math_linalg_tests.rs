#![cfg(feature = "dev")]
//! Tests for the Gaussian elimination solver.
//!
//! These tests verify the pivoted direct solve on known systems: well-posed
//! solutions, pivot selection when the natural pivot is zero, and singular
//! detection.
//!
//! ## Test Organization
//!
//! 1. **Known Systems** - solutions checked against hand-solved values
//! 2. **Pivoting** - zero and small leading pivots
//! 3. **Singularity** - rank-deficient systems are rejected

use approx::assert_relative_eq;

use polyfit_rs::internals::math::linalg::GaussianSolver;

// ============================================================================
// Known System Tests
// ============================================================================

/// Test the 1×1 system (the degree-0 degenerate case).
#[test]
fn test_solve_1x1() {
    let mut a = vec![4.0];
    let mut b = vec![10.0];

    let c = GaussianSolver::solve(&mut a, &mut b, 1).unwrap();
    assert_relative_eq!(c[0], 2.5);
}

/// Test a 2×2 system with a known solution.
#[test]
fn test_solve_2x2() {
    // 2x + y = 5, x + 3y = 10  ->  x = 1, y = 3
    let mut a = vec![2.0, 1.0, 1.0, 3.0];
    let mut b = vec![5.0, 10.0];

    let c = GaussianSolver::solve(&mut a, &mut b, 2).unwrap();
    assert_relative_eq!(c[0], 1.0, epsilon = 1e-12);
    assert_relative_eq!(c[1], 3.0, epsilon = 1e-12);
}

/// Test a symmetric 3×3 system of the normal-equations shape.
#[test]
fn test_solve_3x3_symmetric() {
    // Power sums of x = [0, 1, 2]: S = [3, 3, 5, 9, 17]
    // Right-hand side for y = x^2: T = [5, 9, 17]
    // Solution is the exact interpolant c = [0, 0, 1].
    let mut a = vec![3.0, 3.0, 5.0, 3.0, 5.0, 9.0, 5.0, 9.0, 17.0];
    let mut b = vec![5.0, 9.0, 17.0];

    let c = GaussianSolver::solve(&mut a, &mut b, 3).unwrap();
    assert_relative_eq!(c[0], 0.0, epsilon = 1e-10);
    assert_relative_eq!(c[1], 0.0, epsilon = 1e-10);
    assert_relative_eq!(c[2], 1.0, epsilon = 1e-10);
}

/// Test the solver with f32 entries.
#[test]
fn test_solve_f32() {
    let mut a = vec![2.0f32, 0.0, 0.0, 4.0];
    let mut b = vec![6.0f32, 8.0];

    let c = GaussianSolver::solve(&mut a, &mut b, 2).unwrap();
    assert_relative_eq!(c[0], 3.0f32);
    assert_relative_eq!(c[1], 2.0f32);
}

// ============================================================================
// Pivoting Tests
// ============================================================================

/// Test that a zero leading entry is handled by row pivoting.
#[test]
fn test_solve_zero_leading_pivot() {
    // Without pivoting the first elimination step divides by zero.
    // y = 4, x + y = 6  ->  x = 2, y = 4
    let mut a = vec![0.0, 1.0, 1.0, 1.0];
    let mut b = vec![4.0, 6.0];

    let c = GaussianSolver::solve(&mut a, &mut b, 2).unwrap();
    assert_relative_eq!(c[0], 2.0, epsilon = 1e-12);
    assert_relative_eq!(c[1], 4.0, epsilon = 1e-12);
}

/// Test that the largest available pivot magnitude is selected.
#[test]
fn test_solve_prefers_large_pivot() {
    // Row 2 has the dominant first-column magnitude; the solve must still
    // produce the exact solution x = 1, y = 1.
    let mut a = vec![1e-3, 1.0, 10.0, 1.0];
    let mut b = vec![1.001, 11.0];

    let c = GaussianSolver::solve(&mut a, &mut b, 2).unwrap();
    assert_relative_eq!(c[0], 1.0, epsilon = 1e-9);
    assert_relative_eq!(c[1], 1.0, epsilon = 1e-9);
}

// ============================================================================
// Singularity Tests
// ============================================================================

/// Test that a rank-deficient system reports the failing column.
#[test]
fn test_solve_singular_reports_column() {
    // Second row is a multiple of the first.
    let mut a = vec![1.0, 2.0, 2.0, 4.0];
    let mut b = vec![3.0, 6.0];

    assert_eq!(GaussianSolver::solve(&mut a, &mut b, 2), Err(1));
}

/// Test that an all-zero matrix fails in the first column.
#[test]
fn test_solve_zero_matrix() {
    let mut a = vec![0.0; 4];
    let mut b = vec![1.0, 1.0];

    assert_eq!(GaussianSolver::solve(&mut a, &mut b, 2), Err(0));
}
