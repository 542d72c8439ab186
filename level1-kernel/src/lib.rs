//! BLAS Level-1 kernels over dense and strided vectors.
//!
//! # Kernel families
//!
//! - [`elementwise`]: `add`, `sub`, `mul`, `div`, `min`, `max`, `copysign`,
//!   `const_add`, `const_mul`, `const_div`, `sqrt`, `abs`, `add_scaled`
//! - [`reduce`]: `sum`, `min_element`, `max_element`
//! - [`axpy`]: `dst = alpha * x + y`, unitary and strided
//! - [`dot`]: real `dot`, complex `dotu`/`dotc`, unitary and strided
//!
//! # Backends
//!
//! Each family is a trait with provided methods over the raw kernel traits
//! [`VectorKernels`] and [`RealKernels`], so the same call works on any
//! backend:
//!
//! ```ignore
//! use level1_kernel::{Dot, PortableBackend};
//! let d = PortableBackend::dot_unitary(&[1.0, 2.0], &[3.0, 4.0]);
//! ```
//!
//! The free functions of each module use [`ActiveBackend`], which is
//! [`SimdBackend`] when the `simd` feature is on and [`PortableBackend`]
//! otherwise. Both backends produce the same bits for every elementwise and
//! AXPY kernel; sums and dot products may round differently because the
//! SIMD backend reassociates.
//!
//! # Aliasing
//!
//! A destination may alias a source only as the same logical sequence. This
//! is written with [`Input::Out`] / [`StridedInput::Out`] rather than a
//! second borrow.

pub mod axpy;
pub mod backend;
pub mod dot;
pub mod elementwise;
pub mod operand;
pub mod ops;
mod portable;
pub mod reduce;

#[cfg(feature = "simd")]
mod simd;

pub use axpy::Axpy;
pub use backend::{ActiveBackend, Backend, PortableBackend, RealKernels, VectorKernels};
pub use dot::Dot;
pub use elementwise::Elementwise;
pub use operand::{Input, StridedInput};
pub use reduce::Reduce;

#[cfg(feature = "simd")]
pub use backend::SimdBackend;

pub use level1_traits::{Conj, Element, ElementOp, Identity, Real};
pub use level1_view::{StridedError, StridedVec, StridedVecMut};

/// Length at which the SIMD backend switches from the scalar loop to
/// vector code. Shorter inputs never reach `pulp`.
#[cfg(feature = "simd")]
pub const SIMD_THRESHOLD: usize = simd::SIMD_THRESHOLD;
