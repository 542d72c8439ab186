//! BLAS Level-1 vector kernels over dense and strided vectors.
//!
//! This crate bundles the strided-level1 workspace behind one import:
//! element traits from `level1-traits`, one-dimensional views from
//! `level1-view`, and the kernels with their backends from `level1-kernel`.
//!
//! # Core Types
//!
//! - [`StridedVec`] / [`StridedVecMut`]: validated views with a start offset
//!   and a non-zero increment, possibly negative
//! - [`Element`] / [`Real`]: the scalar types kernels accept
//! - [`Input`] / [`StridedInput`]: a source operand, or the destination itself
//!
//! # Kernel Families
//!
//! - [`elementwise`]: `out[i] = op(a[i], b[i])` and scalar/unary variants
//! - [`reduce`]: [`sum`], [`min_element`], [`max_element`]
//! - [`axpy`]: `dst = alpha * x + y`
//! - [`dot`]: `dot`, `dotu`, `dotc`
//!
//! Free functions run on [`ActiveBackend`]. The family traits ([`Axpy`],
//! [`Dot`], [`Elementwise`], [`Reduce`]) are implemented for every backend
//! marker, so a specific backend can be called directly.
//!
//! # Example
//!
//! ```rust
//! use strided_level1::prelude::*;
//! use strided_level1::{axpy, dot};
//!
//! let x = [1.0, 2.0, 3.0];
//! let mut y = [10.0, 20.0, 30.0];
//! axpy::axpy_unitary_inplace(2.0, &x, &mut y);
//! assert_eq!(y, [12.0, 24.0, 36.0]);
//!
//! // Every other element of a four-element buffer.
//! let buf = [1.0, 0.0, 2.0, 0.0];
//! let xs = StridedVec::from_inc(&buf, 2, 2).unwrap();
//! let ys = StridedVec::contiguous(&[3.0, 4.0]);
//! assert_eq!(dot::dot_inc(xs, ys), 11.0);
//!
//! // The same kernel on an explicit backend.
//! assert_eq!(PortableBackend::dot_unitary(&[1.0, 2.0], &[3.0, 4.0]), 11.0);
//! ```
//!
//! # Aliasing Example
//!
//! ```rust
//! use strided_level1::{elementwise, Input};
//!
//! // out = out * out
//! let mut v = [1.5, -2.0, 3.0];
//! elementwise::mul(&mut v, Input::Out, Input::Out);
//! assert_eq!(v, [2.25, 4.0, 9.0]);
//! ```

// ============================================================================
// Kernel modules
// ============================================================================
pub use level1_kernel::{axpy, backend, dot, elementwise, operand, ops, reduce};

// ============================================================================
// Family traits and backends
// ============================================================================
pub use level1_kernel::{
    ActiveBackend, Axpy, Backend, Dot, Elementwise, PortableBackend, RealKernels, Reduce,
    VectorKernels,
};

#[cfg(feature = "simd")]
pub use level1_kernel::{SimdBackend, SIMD_THRESHOLD};

// ============================================================================
// Operands
// ============================================================================
pub use level1_kernel::{Input, StridedInput};

// ============================================================================
// Element types and operations
// ============================================================================
pub use level1_traits::{Conj, Element, ElementOp, Identity, Real};
pub use num_complex::{Complex, Complex32, Complex64};

// ============================================================================
// View types
// ============================================================================
pub use level1_view::{
    required_len, start_offset, Result, StridedError, StridedVec, StridedVecMut,
};

// ============================================================================
// Reductions
// ============================================================================
pub use level1_kernel::reduce::{max_element, min_element, sum};

/// Traits and types needed to call kernels on an explicit backend.
pub mod prelude {
    pub use crate::{
        ActiveBackend, Axpy, Backend, Dot, Element, Elementwise, Input, PortableBackend, Real,
        Reduce, StridedInput, StridedVec, StridedVecMut,
    };

    #[cfg(feature = "simd")]
    pub use crate::SimdBackend;
}

/// Name of the backend the free functions dispatch to.
pub fn backend_name() -> &'static str {
    <ActiveBackend as Backend>::NAME
}

/// Log the active backend once at startup.
///
/// Emits a single `info` event with the backend name, whether the `simd`
/// feature is compiled in, and the target architecture. Returns the backend
/// name.
pub fn report_backend() -> &'static str {
    let name = backend_name();
    tracing::info!(
        backend = name,
        simd = cfg!(feature = "simd"),
        arch = std::env::consts::ARCH,
        "level-1 kernel backend"
    );
    name
}
