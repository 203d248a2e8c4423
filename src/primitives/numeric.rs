//! Numeric conversion seam between sample types and internal precision.
//!
//! ## Purpose
//!
//! This module defines the [`SampleValue`] trait bridging the public sample
//! and output types (integers or floats of any width) to the internal
//! accumulator precision used for fitting and evaluation.
//!
//! ## Design notes
//!
//! * **Asymmetric widths**: Samples may be narrower than the accumulator
//!   (e.g., `u8` data fitted with an `f64` accumulator).
//! * **Rounding**: Conversion back to an integral type rounds to nearest
//!   before casting. Plain truncation would bias integral outputs downward.
//! * **Saturation**: Integral conversions saturate at the type bounds when
//!   the accumulated value overflows the target.
//!
//! ## Invariants
//!
//! * Float-to-float conversion never rounds beyond the target's precision.
//! * `from_precision` and `into_precision` are total for every implementor.
//!
//! ## Non-goals
//!
//! * This module does not support non-primitive numeric types.
//! * This module does not detect precision loss.

// External dependencies
use num_traits::{Float, NumCast};

// ============================================================================
// SampleValue Trait
// ============================================================================

/// Conversion between a public sample/output type and the internal
/// accumulator precision `P`.
///
/// Implemented for all primitive floats and integers. Integral types round
/// to nearest on the way out of the accumulator.
pub trait SampleValue<P: Float>: Copy {
    /// Widen this sample into the accumulator precision.
    fn into_precision(self) -> P;

    /// Narrow an accumulated value back into this type.
    fn from_precision(value: P) -> Self;
}

macro_rules! impl_sample_value_float {
    ($($t:ty),*) => {
        $(
            impl<P: Float> SampleValue<P> for $t {
                #[inline]
                fn into_precision(self) -> P {
                    P::from(self).unwrap()
                }

                #[inline]
                fn from_precision(value: P) -> Self {
                    NumCast::from(value).unwrap_or(<$t>::NAN)
                }
            }
        )*
    };
}

macro_rules! impl_sample_value_int {
    ($($t:ty),*) => {
        $(
            impl<P: Float> SampleValue<P> for $t {
                #[inline]
                fn into_precision(self) -> P {
                    P::from(self).unwrap()
                }

                #[inline]
                fn from_precision(value: P) -> Self {
                    let rounded = value.round();
                    NumCast::from(rounded).unwrap_or_else(|| {
                        // Out of range for the target (including NaN): saturate.
                        if rounded > P::zero() {
                            <$t>::MAX
                        } else {
                            <$t>::MIN
                        }
                    })
                }
            }
        )*
    };
}

impl_sample_value_float!(f32, f64);
impl_sample_value_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
