//! Core scalar trait
//!
//! [`RealField`] is the element type accepted by the eliminator and the back
//! solver. It is implemented for `f64` and `f32`; integer data must be widened
//! first (see [`crate::widen`]).

use num_traits::{Float, NumAssign, ToPrimitive};
use std::fmt::{Debug, Display, LowerExp};

/// Trait for real floating-point scalars used in elimination.
///
/// # Implementations
///
/// Provided for:
/// - `f64` (default for most problems)
/// - `f32` (for memory-constrained applications)
pub trait RealField:
    Float
    + NumAssign
    + Send
    + Sync
    + Debug
    + Display
    + LowerExp
    + 'static
{
    /// Convert a primitive value into this float type.
    ///
    /// Returns `None` when the value has no representation. Values outside the
    /// exact integer range of the float (2^53 for `f64`, 2^24 for `f32`) are
    /// rounded to the nearest representable float.
    fn widen_from<I: ToPrimitive>(value: &I) -> Option<Self>;

    /// Check if this is exactly zero (`-0.0` included)
    fn is_exact_zero(&self) -> bool {
        *self == Self::zero()
    }
}

impl RealField for f64 {
    #[inline]
    fn widen_from<I: ToPrimitive>(value: &I) -> Option<Self> {
        value.to_f64()
    }
}

impl RealField for f32 {
    #[inline]
    fn widen_from<I: ToPrimitive>(value: &I) -> Option<Self> {
        value.to_f32()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_zero() {
        assert!(0.0_f64.is_exact_zero());
        assert!((-0.0_f64).is_exact_zero());
        assert!(!1e-300_f64.is_exact_zero());
        assert!(!f64::NAN.is_exact_zero());
        assert!(0.0_f32.is_exact_zero());
    }

    #[test]
    fn test_widen_from_integers() {
        assert_eq!(f64::widen_from(&3_i32), Some(3.0));
        assert_eq!(f64::widen_from(&-7_i64), Some(-7.0));
        assert_eq!(f32::widen_from(&255_u8), Some(255.0));
    }
}
