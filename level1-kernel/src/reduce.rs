//! Reductions over contiguous real vectors.

use crate::backend::{ActiveBackend, RealKernels};
use level1_traits::Real;

/// Safe reductions, provided for every backend.
pub trait Reduce<T: Real>: RealKernels<T> {
    /// `Σ a[i]`; zero for an empty slice.
    ///
    /// The summation order belongs to the backend and is deterministic for
    /// a given backend and length.
    #[inline]
    fn sum(a: &[T]) -> T {
        // SAFETY: `a` covers `a.len()` elements.
        unsafe { Self::raw_sum(a.len(), a.as_ptr()) }
    }

    /// Smallest element under strict `<`, scanning from `a[0]`.
    ///
    /// NaN elements never replace the running minimum; a leading NaN is
    /// returned as is.
    ///
    /// # Panics
    /// Panics if `a` is empty.
    #[inline]
    fn min_element(a: &[T]) -> T {
        assert!(!a.is_empty(), "min_element of an empty vector");
        // SAFETY: non-empty, `a` covers `a.len()` elements.
        unsafe { Self::raw_min(a.len(), a.as_ptr()) }
    }

    /// Largest element under strict `>`, scanning from `a[0]`.
    ///
    /// # Panics
    /// Panics if `a` is empty.
    #[inline]
    fn max_element(a: &[T]) -> T {
        assert!(!a.is_empty(), "max_element of an empty vector");
        // SAFETY: as in `min_element`.
        unsafe { Self::raw_max(a.len(), a.as_ptr()) }
    }
}

impl<T: Real, B: RealKernels<T>> Reduce<T> for B {}

/// `Σ a[i]` on the active backend.
pub fn sum<T: Real>(a: &[T]) -> T
where
    ActiveBackend: RealKernels<T>,
{
    ActiveBackend::sum(a)
}

/// See [`Reduce::min_element`].
pub fn min_element<T: Real>(a: &[T]) -> T
where
    ActiveBackend: RealKernels<T>,
{
    ActiveBackend::min_element(a)
}

/// See [`Reduce::max_element`].
pub fn max_element<T: Real>(a: &[T]) -> T
where
    ActiveBackend: RealKernels<T>,
{
    ActiveBackend::max_element(a)
}
