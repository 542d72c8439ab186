//! Backend abstraction for Level-1 kernel dispatch.
//!
//! This module defines the [`Backend`], [`VectorKernels`] and [`RealKernels`]
//! traits, marker structs for each backend, and the [`ActiveBackend`] type
//! alias that serves as the single point of backend selection based on Cargo
//! features.
//!
//! Every raw kernel method has a default body that runs the portable loop,
//! so a backend only overrides the kernels it actually accelerates. Raw
//! methods take pointers to the first *visited* element of each operand; the
//! start offset has already been applied by the caller.

use crate::ops::{BinaryOp, ScalarOp, UnaryOp};
use crate::portable;
use level1_traits::{Element, ElementOp, Real};

/// Static description of a backend.
pub trait Backend: Copy + Default + Send + Sync + 'static {
    /// Short name used in logs and test messages.
    const NAME: &'static str;
}

/// Kernels defined for every element type: AXPY and DOT.
///
/// # Safety contract (all methods)
/// - Each pointer, advanced `n - 1` times by its increment, stays inside one
///   live allocation; nothing is dereferenced when `n == 0`.
/// - A destination may equal a source pointer only with the same increment.
pub trait VectorKernels<T: Element>: Backend {
    /// `dst[i] = alpha * x[i] + y[i]` over `n` contiguous elements.
    #[inline]
    unsafe fn raw_axpy_unitary(n: usize, alpha: T, x: *const T, y: *const T, dst: *mut T) {
        portable::axpy_unitary(n, alpha, x, y, dst)
    }

    /// `dst[i*inc_dst] = alpha * x[i*inc_x] + y[i*inc_y]` for `i < n`.
    #[inline]
    #[allow(clippy::too_many_arguments)]
    unsafe fn raw_axpy_inc(
        n: usize,
        alpha: T,
        x: *const T,
        inc_x: isize,
        y: *const T,
        inc_y: isize,
        dst: *mut T,
        inc_dst: isize,
    ) {
        portable::axpy_inc(n, alpha, x, inc_x, y, inc_y, dst, inc_dst)
    }

    /// `Σ y[i] * Op(x[i])` over `n` contiguous elements.
    #[inline]
    unsafe fn raw_dot_unitary<Op: ElementOp<T>>(n: usize, x: *const T, y: *const T) -> T {
        portable::dot_unitary::<T, Op>(n, x, y)
    }

    /// `Σ y[i*inc_y] * Op(x[i*inc_x])` for `i < n`.
    #[inline]
    unsafe fn raw_dot_inc<Op: ElementOp<T>>(
        n: usize,
        x: *const T,
        inc_x: isize,
        y: *const T,
        inc_y: isize,
    ) -> T {
        portable::dot_inc::<T, Op>(n, x, inc_x, y, inc_y)
    }
}

/// Kernels defined only for real element types: elementwise ops and
/// reductions over contiguous data.
///
/// Same safety contract as [`VectorKernels`]; the min/max reductions also
/// require `n >= 1`.
pub trait RealKernels<T: Real>: VectorKernels<T> {
    /// `out[i] = Op(a[i], b[i])`.
    #[inline]
    unsafe fn raw_binary<Op: BinaryOp>(n: usize, out: *mut T, a: *const T, b: *const T) {
        portable::binary::<T, Op>(n, out, a, b)
    }

    /// `out[i] = Op(c, a[i])`.
    #[inline]
    unsafe fn raw_scalar<Op: ScalarOp>(n: usize, out: *mut T, a: *const T, c: T) {
        portable::scalar::<T, Op>(n, out, a, c)
    }

    /// `out[i] = Op(a[i])`.
    #[inline]
    unsafe fn raw_unary<Op: UnaryOp>(n: usize, out: *mut T, a: *const T) {
        portable::unary::<T, Op>(n, out, a)
    }

    /// `Σ a[i]`, zero for `n == 0`.
    #[inline]
    unsafe fn raw_sum(n: usize, a: *const T) -> T {
        portable::sum(n, a)
    }

    /// Strict-`<` minimum, starting from `a[0]`.
    #[inline]
    unsafe fn raw_min(n: usize, a: *const T) -> T {
        portable::min_element(n, a)
    }

    /// Strict-`>` maximum, starting from `a[0]`.
    #[inline]
    unsafe fn raw_max(n: usize, a: *const T) -> T {
        portable::max_element(n, a)
    }
}

// ---------------------------------------------------------------------------
// Marker structs
// ---------------------------------------------------------------------------

/// Reference backend: plain sequential loops, no target-specific code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PortableBackend;

impl Backend for PortableBackend {
    const NAME: &'static str = "portable";
}

impl<T: Element> VectorKernels<T> for PortableBackend {}

impl<T: Real> RealKernels<T> for PortableBackend {}

/// Vectorized backend using [`pulp`] runtime CPU dispatch.
///
/// Accelerates contiguous real kernels; strided and complex kernels run the
/// portable loops.
#[cfg(feature = "simd")]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimdBackend;

#[cfg(feature = "simd")]
impl Backend for SimdBackend {
    const NAME: &'static str = "simd";
}

// ---------------------------------------------------------------------------
// ActiveBackend type alias -- the SINGLE point of backend selection
// ---------------------------------------------------------------------------

/// The active backend, selected by Cargo features.
///
/// - `simd` -> [`SimdBackend`]
/// - no backend feature -> [`PortableBackend`]
#[cfg(feature = "simd")]
pub type ActiveBackend = SimdBackend;

#[cfg(not(feature = "simd"))]
pub type ActiveBackend = PortableBackend;
