//! Sample sequence abstraction over ordered containers.
//!
//! ## Purpose
//!
//! This module defines [`SampleSequence`], the input abstraction for fit
//! entry points: any finite, ordered container of numeric values. Vectors,
//! slices, arrays, deques and ordered sets all qualify without copies or
//! adapter types at the call site.
//!
//! ## Design notes
//!
//! * **Capability-minimal**: Only sequential traversal and a length query
//!   are required of a container.
//! * **Heterogeneous**: The x and y containers of one fit may differ in both
//!   container type and element type.
//! * **Extensible**: Custom containers opt in by implementing the trait;
//!   the standard container families are covered out of the box.
//!
//! ## Invariants
//!
//! * `len()` matches the number of values appended by `append_to`.
//! * Traversal order is the container's iteration order.
//!
//! ## Non-goals
//!
//! * This module does not validate the values it traverses.
//! * This module does not support unsized streams of unknown length.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::collections::{BTreeSet, VecDeque};
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::collections::{BTreeSet, VecDeque};
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::numeric::SampleValue;

// ============================================================================
// SampleSequence Trait
// ============================================================================

/// A finite, ordered sequence of numeric samples.
///
/// Implemented for `Vec<S>`, slices, arrays, `VecDeque<S>` and `BTreeSet<S>`
/// over any [`SampleValue`] element type `S`.
pub trait SampleSequence<P: Float> {
    /// Number of samples in the sequence.
    fn len(&self) -> usize;

    /// Whether the sequence is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append every sample, widened to the accumulator precision, to `out`.
    fn append_to(&self, out: &mut Vec<P>);
}

macro_rules! impl_sample_sequence {
    ($($container:ty),*) => {
        $(
            impl<P: Float, S: SampleValue<P>> SampleSequence<P> for $container {
                fn len(&self) -> usize {
                    self.iter().len()
                }

                fn append_to(&self, out: &mut Vec<P>) {
                    out.extend(self.iter().map(|sample| sample.into_precision()));
                }
            }
        )*
    };
}

impl_sample_sequence!(Vec<S>, [S], VecDeque<S>, BTreeSet<S>);

impl<P: Float, S: SampleValue<P>, const N: usize> SampleSequence<P> for [S; N] {
    fn len(&self) -> usize {
        N
    }

    fn append_to(&self, out: &mut Vec<P>) {
        out.extend(self.iter().map(|sample| sample.into_precision()));
    }
}
