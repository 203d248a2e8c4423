//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the mathematical core of the crate:
//! - The `Polynomial` value type with evaluation and calculus operations
//! - Moment (power-sum) accumulation, scalar and SIMD
//! - The Gaussian-elimination solver for the normal equations
//!
//! These are reusable building blocks with no orchestration logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Moment accumulation for normal-equations assembly.
pub mod accumulators;

/// Dense linear solver (Gaussian elimination with partial pivoting).
pub mod linalg;

/// Polynomial value type.
pub mod polynomial;
