//! Scaled accumulate: `dst[i] = alpha * x[i] + y[i]`.
//!
//! Always one multiply followed by one add, in that operand order, never a
//! fused multiply-add. `alpha == 0` is not special-cased.
//!
//! The unitary kernels work on slices. The strided kernels work on
//! [`StridedVec`] views, each with its own increment and start offset; only
//! the positions a view visits are read or written.
//!
//! Either source may be the destination itself ([`Input::Out`],
//! [`StridedInput::Out`]):
//!
//! | `x`   | `y`   | result             |
//! |-------|-------|--------------------|
//! | slice | slice | `dst = a*x + y`    |
//! | slice | `Out` | `dst = a*x + dst`  |
//! | `Out` | slice | `dst = a*dst + y`  |
//! | `Out` | `Out` | `dst = a*dst + dst`|

use crate::backend::{ActiveBackend, VectorKernels};
use crate::operand::{Input, StridedInput};
use level1_traits::Element;
use level1_view::{StridedVec, StridedVecMut};

#[inline]
fn common_len(dst_len: usize, x_len: usize, y_len: usize) -> usize {
    debug_assert!(
        dst_len == x_len && dst_len == y_len,
        "axpy length mismatch: dst={dst_len}, x={x_len}, y={y_len}"
    );
    dst_len.min(x_len).min(y_len)
}

/// Safe AXPY entry points, provided for every backend.
pub trait Axpy<T: Element>: VectorKernels<T> {
    /// `dst[i] = alpha * x[i] + y[i]` over contiguous operands.
    #[inline]
    fn axpy_unitary<'a>(
        alpha: T,
        x: impl Into<Input<'a, T>>,
        y: impl Into<Input<'a, T>>,
        dst: &mut [T],
    ) {
        let dst_len = dst.len();
        let d = dst.as_mut_ptr();
        let (x, x_len) = x.into().resolve(d, dst_len);
        let (y, y_len) = y.into().resolve(d, dst_len);
        let n = common_len(dst_len, x_len, y_len);
        // SAFETY: each pointer covers `n` elements; aliases are the
        // destination at the same index.
        unsafe { Self::raw_axpy_unitary(n, alpha, x, y, d) }
    }

    /// `dst[i] = alpha * x[i] + y[i]` into a distinct destination.
    #[inline]
    fn axpy_unitary_to(alpha: T, x: &[T], y: &[T], dst: &mut [T]) {
        Self::axpy_unitary(alpha, x, y, dst)
    }

    /// `y[i] = alpha * x[i] + y[i]`
    #[inline]
    fn axpy_unitary_inplace(alpha: T, x: &[T], y: &mut [T]) {
        Self::axpy_unitary(alpha, x, Input::Out, y)
    }

    /// `dst[k] = alpha * x[k] + y[k]` over the logical elements of strided
    /// views.
    #[inline]
    fn axpy_inc<'a>(
        alpha: T,
        x: impl Into<StridedInput<'a, T>>,
        y: impl Into<StridedInput<'a, T>>,
        dst: &mut StridedVecMut<'_, T>,
    ) {
        let dst_len = dst.len();
        let inc_dst = dst.inc();
        let d = dst.as_mut_ptr();
        let (x, inc_x, x_len) = x.into().resolve(d, inc_dst, dst_len);
        let (y, inc_y, y_len) = y.into().resolve(d, inc_dst, dst_len);
        let n = common_len(dst_len, x_len, y_len);
        // SAFETY: views were validated at construction for their own length,
        // and `n` does not exceed any of them. `Out` shares increment and
        // offset with the destination.
        unsafe { Self::raw_axpy_inc(n, alpha, x, inc_x, y, inc_y, d, inc_dst) }
    }

    /// Strided AXPY into a distinct destination view.
    #[inline]
    fn axpy_inc_to(
        alpha: T,
        x: StridedVec<'_, T>,
        y: StridedVec<'_, T>,
        dst: &mut StridedVecMut<'_, T>,
    ) {
        Self::axpy_inc(alpha, x, y, dst)
    }

    /// `y[k] = alpha * x[k] + y[k]` on strided views.
    #[inline]
    fn axpy_inc_inplace(alpha: T, x: StridedVec<'_, T>, y: &mut StridedVecMut<'_, T>) {
        Self::axpy_inc(alpha, x, StridedInput::Out, y)
    }
}

impl<T: Element, B: VectorKernels<T>> Axpy<T> for B {}

// ---------------------------------------------------------------------------
// Free functions on the active backend
// ---------------------------------------------------------------------------

/// See [`Axpy::axpy_unitary`].
pub fn axpy_unitary<'a, T: Element>(
    alpha: T,
    x: impl Into<Input<'a, T>>,
    y: impl Into<Input<'a, T>>,
    dst: &mut [T],
) where
    ActiveBackend: VectorKernels<T>,
{
    ActiveBackend::axpy_unitary(alpha, x, y, dst)
}

/// See [`Axpy::axpy_unitary_to`].
pub fn axpy_unitary_to<T: Element>(alpha: T, x: &[T], y: &[T], dst: &mut [T])
where
    ActiveBackend: VectorKernels<T>,
{
    ActiveBackend::axpy_unitary_to(alpha, x, y, dst)
}

/// See [`Axpy::axpy_unitary_inplace`].
pub fn axpy_unitary_inplace<T: Element>(alpha: T, x: &[T], y: &mut [T])
where
    ActiveBackend: VectorKernels<T>,
{
    ActiveBackend::axpy_unitary_inplace(alpha, x, y)
}

/// See [`Axpy::axpy_inc`].
pub fn axpy_inc<'a, T: Element>(
    alpha: T,
    x: impl Into<StridedInput<'a, T>>,
    y: impl Into<StridedInput<'a, T>>,
    dst: &mut StridedVecMut<'_, T>,
) where
    ActiveBackend: VectorKernels<T>,
{
    ActiveBackend::axpy_inc(alpha, x, y, dst)
}

/// See [`Axpy::axpy_inc_to`].
pub fn axpy_inc_to<T: Element>(
    alpha: T,
    x: StridedVec<'_, T>,
    y: StridedVec<'_, T>,
    dst: &mut StridedVecMut<'_, T>,
) where
    ActiveBackend: VectorKernels<T>,
{
    ActiveBackend::axpy_inc_to(alpha, x, y, dst)
}

/// See [`Axpy::axpy_inc_inplace`].
pub fn axpy_inc_inplace<T: Element>(alpha: T, x: StridedVec<'_, T>, y: &mut StridedVecMut<'_, T>)
where
    ActiveBackend: VectorKernels<T>,
{
    ActiveBackend::axpy_inc_inplace(alpha, x, y)
}
