//! Inner products.
//!
//! - `dot` / `dotu`: `Σ y[i] * x[i]`
//! - `dotc`: `Σ y[i] * conj(x[i])`
//!
//! For real elements all three agree. Empty inputs give zero. Inf and NaN
//! propagate through plain complex multiplication, with no recovery of
//! infinite products.

use crate::backend::{ActiveBackend, VectorKernels};
use level1_traits::{Conj, Element, ElementOp, Identity};
use level1_view::StridedVec;

/// Safe DOT entry points, provided for every backend.
pub trait Dot<T: Element>: VectorKernels<T> {
    /// `Σ y[i] * Op(x[i])` over contiguous operands.
    #[inline]
    fn dot_unitary_with<Op: ElementOp<T>>(x: &[T], y: &[T]) -> T {
        debug_assert_eq!(x.len(), y.len(), "dot length mismatch");
        let n = x.len().min(y.len());
        // SAFETY: both slices cover `n` elements.
        unsafe { Self::raw_dot_unitary::<Op>(n, x.as_ptr(), y.as_ptr()) }
    }

    /// `Σ y[k] * Op(x[k])` over the logical elements of two views.
    #[inline]
    fn dot_inc_with<Op: ElementOp<T>>(x: StridedVec<'_, T>, y: StridedVec<'_, T>) -> T {
        debug_assert_eq!(x.len(), y.len(), "dot length mismatch");
        let n = x.len().min(y.len());
        // SAFETY: each view was validated for its own length, `n` is no longer.
        unsafe { Self::raw_dot_inc::<Op>(n, x.as_ptr(), x.inc(), y.as_ptr(), y.inc()) }
    }

    fn dot_unitary(x: &[T], y: &[T]) -> T {
        Self::dot_unitary_with::<Identity>(x, y)
    }

    fn dotu_unitary(x: &[T], y: &[T]) -> T {
        Self::dot_unitary_with::<Identity>(x, y)
    }

    /// Conjugates `x`.
    fn dotc_unitary(x: &[T], y: &[T]) -> T {
        Self::dot_unitary_with::<Conj>(x, y)
    }

    fn dot_inc(x: StridedVec<'_, T>, y: StridedVec<'_, T>) -> T {
        Self::dot_inc_with::<Identity>(x, y)
    }

    fn dotu_inc(x: StridedVec<'_, T>, y: StridedVec<'_, T>) -> T {
        Self::dot_inc_with::<Identity>(x, y)
    }

    /// Conjugates `x`.
    fn dotc_inc(x: StridedVec<'_, T>, y: StridedVec<'_, T>) -> T {
        Self::dot_inc_with::<Conj>(x, y)
    }
}

impl<T: Element, B: VectorKernels<T>> Dot<T> for B {}

// ---------------------------------------------------------------------------
// Free functions on the active backend
// ---------------------------------------------------------------------------

/// `Σ x[i] * y[i]`
pub fn dot_unitary<T: Element>(x: &[T], y: &[T]) -> T
where
    ActiveBackend: VectorKernels<T>,
{
    ActiveBackend::dot_unitary(x, y)
}

/// `Σ y[i] * x[i]`, no conjugation.
pub fn dotu_unitary<T: Element>(x: &[T], y: &[T]) -> T
where
    ActiveBackend: VectorKernels<T>,
{
    ActiveBackend::dotu_unitary(x, y)
}

/// `Σ y[i] * conj(x[i])`
pub fn dotc_unitary<T: Element>(x: &[T], y: &[T]) -> T
where
    ActiveBackend: VectorKernels<T>,
{
    ActiveBackend::dotc_unitary(x, y)
}

/// Strided [`dot_unitary`].
pub fn dot_inc<T: Element>(x: StridedVec<'_, T>, y: StridedVec<'_, T>) -> T
where
    ActiveBackend: VectorKernels<T>,
{
    ActiveBackend::dot_inc(x, y)
}

/// Strided [`dotu_unitary`].
pub fn dotu_inc<T: Element>(x: StridedVec<'_, T>, y: StridedVec<'_, T>) -> T
where
    ActiveBackend: VectorKernels<T>,
{
    ActiveBackend::dotu_inc(x, y)
}

/// Strided [`dotc_unitary`].
pub fn dotc_inc<T: Element>(x: StridedVec<'_, T>, y: StridedVec<'_, T>) -> T
where
    ActiveBackend: VectorKernels<T>,
{
    ActiveBackend::dotc_inc(x, y)
}
