//! Elementwise kernels over contiguous real vectors.
//!
//! Every operation writes `out[i]` from the same-index elements of its
//! inputs, so an input may be the output itself ([`Input::Out`]).
//!
//! Lengths must match. Mismatches trip a `debug_assert!`; release builds
//! process the shortest operand.

use crate::backend::{ActiveBackend, RealKernels};
use crate::operand::Input;
use crate::ops::{self, BinaryOp, ScalarOp, UnaryOp};
use level1_traits::Real;

#[inline]
fn common_len(out_len: usize, a_len: usize, b_len: usize) -> usize {
    debug_assert!(
        out_len == a_len && out_len == b_len,
        "elementwise length mismatch: out={out_len}, a={a_len}, b={b_len}"
    );
    out_len.min(a_len).min(b_len)
}

/// Safe elementwise operations, provided for every backend.
pub trait Elementwise<T: Real>: RealKernels<T> {
    /// `out[i] = Op(a[i], b[i])`
    #[inline]
    fn binary<'a, Op: BinaryOp>(
        out: &mut [T],
        a: impl Into<Input<'a, T>>,
        b: impl Into<Input<'a, T>>,
    ) {
        let out_len = out.len();
        let dst = out.as_mut_ptr();
        let (a, a_len) = a.into().resolve(dst, out_len);
        let (b, b_len) = b.into().resolve(dst, out_len);
        let n = common_len(out_len, a_len, b_len);
        // SAFETY: each pointer covers at least `n` elements; `Out` operands
        // are the destination at the same index.
        unsafe { Self::raw_binary::<Op>(n, dst, a, b) }
    }

    /// `out[i] = Op(c, a[i])`
    #[inline]
    fn scalar<'a, Op: ScalarOp>(out: &mut [T], a: impl Into<Input<'a, T>>, c: T) {
        let out_len = out.len();
        let dst = out.as_mut_ptr();
        let (a, a_len) = a.into().resolve(dst, out_len);
        let n = common_len(out_len, a_len, a_len);
        // SAFETY: as in `binary`.
        unsafe { Self::raw_scalar::<Op>(n, dst, a, c) }
    }

    /// `out[i] = Op(a[i])`
    #[inline]
    fn unary<'a, Op: UnaryOp>(out: &mut [T], a: impl Into<Input<'a, T>>) {
        let out_len = out.len();
        let dst = out.as_mut_ptr();
        let (a, a_len) = a.into().resolve(dst, out_len);
        let n = common_len(out_len, a_len, a_len);
        // SAFETY: as in `binary`.
        unsafe { Self::raw_unary::<Op>(n, dst, a) }
    }

    fn add<'a>(out: &mut [T], a: impl Into<Input<'a, T>>, b: impl Into<Input<'a, T>>) {
        Self::binary::<ops::Add>(out, a, b)
    }

    fn sub<'a>(out: &mut [T], a: impl Into<Input<'a, T>>, b: impl Into<Input<'a, T>>) {
        Self::binary::<ops::Sub>(out, a, b)
    }

    fn mul<'a>(out: &mut [T], a: impl Into<Input<'a, T>>, b: impl Into<Input<'a, T>>) {
        Self::binary::<ops::Mul>(out, a, b)
    }

    fn div<'a>(out: &mut [T], a: impl Into<Input<'a, T>>, b: impl Into<Input<'a, T>>) {
        Self::binary::<ops::Div>(out, a, b)
    }

    /// Strict `<`: a NaN in either operand yields `b[i]`.
    fn min<'a>(out: &mut [T], a: impl Into<Input<'a, T>>, b: impl Into<Input<'a, T>>) {
        Self::binary::<ops::Min>(out, a, b)
    }

    /// Strict `>`: a NaN in either operand yields `b[i]`.
    fn max<'a>(out: &mut [T], a: impl Into<Input<'a, T>>, b: impl Into<Input<'a, T>>) {
        Self::binary::<ops::Max>(out, a, b)
    }

    /// Magnitude of `a[i]`, sign bit of `b[i]`.
    fn copysign<'a>(out: &mut [T], a: impl Into<Input<'a, T>>, b: impl Into<Input<'a, T>>) {
        Self::binary::<ops::CopySign>(out, a, b)
    }

    fn const_add<'a>(out: &mut [T], a: impl Into<Input<'a, T>>, c: T) {
        Self::scalar::<ops::ConstAdd>(out, a, c)
    }

    fn const_mul<'a>(out: &mut [T], a: impl Into<Input<'a, T>>, c: T) {
        Self::scalar::<ops::ConstMul>(out, a, c)
    }

    /// `out[i] = c / a[i]`
    fn const_div<'a>(out: &mut [T], a: impl Into<Input<'a, T>>, c: T) {
        Self::scalar::<ops::ConstDiv>(out, a, c)
    }

    fn sqrt<'a>(out: &mut [T], a: impl Into<Input<'a, T>>) {
        Self::unary::<ops::Sqrt>(out, a)
    }

    fn abs<'a>(out: &mut [T], a: impl Into<Input<'a, T>>) {
        Self::unary::<ops::Abs>(out, a)
    }

    /// `y[i] = y[i] + x[i] * alpha`, computed as one multiply then one add.
    #[inline]
    fn add_scaled(y: &mut [T], alpha: T, x: &[T]) {
        let n = common_len(y.len(), x.len(), x.len());
        let dst = y.as_mut_ptr();
        // SAFETY: `x` and `y` cover `n` elements; `y` is read before written.
        unsafe { Self::raw_axpy_unitary(n, alpha, x.as_ptr(), dst, dst) }
    }
}

impl<T: Real, B: RealKernels<T>> Elementwise<T> for B {}

// ---------------------------------------------------------------------------
// Free functions on the active backend
// ---------------------------------------------------------------------------

/// `out[i] = a[i] + b[i]`
pub fn add<'a, T: Real>(out: &mut [T], a: impl Into<Input<'a, T>>, b: impl Into<Input<'a, T>>)
where
    ActiveBackend: RealKernels<T>,
{
    ActiveBackend::add(out, a, b)
}

/// `out[i] = a[i] - b[i]`
pub fn sub<'a, T: Real>(out: &mut [T], a: impl Into<Input<'a, T>>, b: impl Into<Input<'a, T>>)
where
    ActiveBackend: RealKernels<T>,
{
    ActiveBackend::sub(out, a, b)
}

/// `out[i] = a[i] * b[i]`
pub fn mul<'a, T: Real>(out: &mut [T], a: impl Into<Input<'a, T>>, b: impl Into<Input<'a, T>>)
where
    ActiveBackend: RealKernels<T>,
{
    ActiveBackend::mul(out, a, b)
}

/// `out[i] = a[i] / b[i]`
pub fn div<'a, T: Real>(out: &mut [T], a: impl Into<Input<'a, T>>, b: impl Into<Input<'a, T>>)
where
    ActiveBackend: RealKernels<T>,
{
    ActiveBackend::div(out, a, b)
}

/// `out[i] = if a[i] < b[i] { a[i] } else { b[i] }`
pub fn min<'a, T: Real>(out: &mut [T], a: impl Into<Input<'a, T>>, b: impl Into<Input<'a, T>>)
where
    ActiveBackend: RealKernels<T>,
{
    ActiveBackend::min(out, a, b)
}

/// `out[i] = if a[i] > b[i] { a[i] } else { b[i] }`
pub fn max<'a, T: Real>(out: &mut [T], a: impl Into<Input<'a, T>>, b: impl Into<Input<'a, T>>)
where
    ActiveBackend: RealKernels<T>,
{
    ActiveBackend::max(out, a, b)
}

/// Magnitude of `a[i]` with the sign bit of `b[i]`, by bit manipulation.
pub fn copysign<'a, T: Real>(
    out: &mut [T],
    a: impl Into<Input<'a, T>>,
    b: impl Into<Input<'a, T>>,
) where
    ActiveBackend: RealKernels<T>,
{
    ActiveBackend::copysign(out, a, b)
}

/// `out[i] = c + a[i]`
pub fn const_add<'a, T: Real>(out: &mut [T], a: impl Into<Input<'a, T>>, c: T)
where
    ActiveBackend: RealKernels<T>,
{
    ActiveBackend::const_add(out, a, c)
}

/// `out[i] = c * a[i]`
pub fn const_mul<'a, T: Real>(out: &mut [T], a: impl Into<Input<'a, T>>, c: T)
where
    ActiveBackend: RealKernels<T>,
{
    ActiveBackend::const_mul(out, a, c)
}

/// `out[i] = c / a[i]`
pub fn const_div<'a, T: Real>(out: &mut [T], a: impl Into<Input<'a, T>>, c: T)
where
    ActiveBackend: RealKernels<T>,
{
    ActiveBackend::const_div(out, a, c)
}

/// `out[i] = sqrt(a[i])`
pub fn sqrt<'a, T: Real>(out: &mut [T], a: impl Into<Input<'a, T>>)
where
    ActiveBackend: RealKernels<T>,
{
    ActiveBackend::sqrt(out, a)
}

/// `out[i] = |a[i]|`
pub fn abs<'a, T: Real>(out: &mut [T], a: impl Into<Input<'a, T>>)
where
    ActiveBackend: RealKernels<T>,
{
    ActiveBackend::abs(out, a)
}

/// `y[i] += x[i] * alpha`
pub fn add_scaled<T: Real>(y: &mut [T], alpha: T, x: &[T])
where
    ActiveBackend: RealKernels<T>,
{
    ActiveBackend::add_scaled(y, alpha, x)
}
