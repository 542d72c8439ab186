//! Reading a vector operand as stored or conjugated.
//!
//! The dot kernels take the reader as a type parameter `Op` and accumulate
//! `Op::apply(x[i]) * y[i]`. `dotu` passes [`Identity`] and `dotc` passes
//! [`Conj`], so both compile to one loop body with no branch per element.
//! On real elements the two readers agree.

use num_complex::Complex;
use num_traits::Num;

// ---------------------------------------------------------------------------
// Conjugation of a single element
// ---------------------------------------------------------------------------

/// Element types a `dotc` operand can be read through.
///
/// `conj` negates the imaginary part of a complex element. Real elements
/// have none, so `f32` and `f64` take the provided method, which hands the
/// value back untouched.
pub trait ElementOpApply: Copy {
    #[inline(always)]
    fn conj(self) -> Self {
        self
    }
}

macro_rules! impl_element_op_apply_real {
    ($($t:ty),*) => {
        $(impl ElementOpApply for $t {})*
    };
}

impl_element_op_apply_real!(f32, f64);

impl<T: Num + Copy + Clone + std::ops::Neg<Output = T>> ElementOpApply for Complex<T> {
    #[inline(always)]
    fn conj(self) -> Self {
        Complex::conj(&self)
    }
}

// ---------------------------------------------------------------------------
// Operand readers
// ---------------------------------------------------------------------------

/// Reads `x[i]` as stored. Selected by `dot` and `dotu`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Identity;

/// Reads `x[i]` conjugated. Selected by `dotc`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Conj;

/// How a kernel reads each element of its first vector operand.
///
/// [`Identity`] accepts any `Copy` element. [`Conj`] needs [`ElementOpApply`].
pub trait ElementOp<T>: Copy + Default + 'static {
    /// Set for [`Identity`]; lets a kernel share the unconjugated loop.
    const IS_IDENTITY: bool = false;

    /// The value the kernel sees in place of `value`.
    fn apply(value: T) -> T;
}

impl<T: Copy> ElementOp<T> for Identity {
    const IS_IDENTITY: bool = true;

    #[inline(always)]
    fn apply(value: T) -> T {
        value
    }
}

impl<T: ElementOpApply> ElementOp<T> for Conj {
    #[inline(always)]
    fn apply(value: T) -> T {
        value.conj()
    }
}
