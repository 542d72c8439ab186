//! Element type bounds for Level-1 kernels.

use num_complex::Complex;
use std::fmt::Debug;

/// Shared trait bounds for every element type a Level-1 kernel accepts.
///
/// Covers what AXPY and DOT need: copy, add, multiply, an additive identity,
/// and conjugation (identity on reals).
pub trait Element:
    Copy
    + Send
    + Sync
    + Debug
    + PartialEq
    + std::ops::Mul<Output = Self>
    + std::ops::Add<Output = Self>
    + num_traits::Zero
    + crate::ElementOpApply
    + 'static
{
}

impl Element for f32 {}
impl Element for f64 {}
impl Element for Complex<f32> {}
impl Element for Complex<f64> {}

/// Real IEEE-754 element types (`f32`, `f64`).
///
/// Adds `num_traits::Float` for `sqrt`/`abs` and raw bit access for exact
/// sign manipulation.
pub trait Real: Element + num_traits::Float {
    /// Unsigned integer holding the IEEE representation.
    type Bits: Copy
        + Eq
        + Debug
        + std::ops::BitAnd<Output = Self::Bits>
        + std::ops::BitOr<Output = Self::Bits>
        + std::ops::Not<Output = Self::Bits>;

    /// Mask selecting the sign bit.
    const SIGN_MASK: Self::Bits;

    fn to_ieee_bits(self) -> Self::Bits;
    fn from_ieee_bits(bits: Self::Bits) -> Self;

    /// Magnitude of `self`, sign bit of `sign`, by bit manipulation.
    ///
    /// Preserves NaN payloads and handles signed zero exactly.
    #[inline(always)]
    fn copysign_bits(self, sign: Self) -> Self {
        let magnitude = self.to_ieee_bits() & !Self::SIGN_MASK;
        let sign = sign.to_ieee_bits() & Self::SIGN_MASK;
        Self::from_ieee_bits(magnitude | sign)
    }
}

macro_rules! impl_real {
    ($t:ty, $bits:ty) => {
        impl Real for $t {
            type Bits = $bits;

            const SIGN_MASK: $bits = 1 << (<$bits>::BITS - 1);

            #[inline(always)]
            fn to_ieee_bits(self) -> $bits {
                self.to_bits()
            }

            #[inline(always)]
            fn from_ieee_bits(bits: $bits) -> Self {
                <$t>::from_bits(bits)
            }
        }
    };
}

impl_real!(f32, u32);
impl_real!(f64, u64);
