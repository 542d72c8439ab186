//! One-dimensional strided vector views.
//!
//! A view is the triple `(buffer, increment, start offset)` plus a logical
//! length `n`. Logical element `i` lives at physical index
//! `offset + i * inc`. The increment may be negative; the caller then points
//! `offset` at the element visited first (see [`start_offset`]).
//!
//! # Core Types
//!
//! - [`StridedVec`] / [`StridedVecMut`]: validated views over borrowed slices
//! - [`start_offset`], [`required_len`]: the offset and length convention
//!
//! Construction is where validation happens. Kernels that consume a view
//! trust it and never re-check bounds.

mod view;

pub use level1_traits::{Element, Real};
pub use view::{required_len, start_offset, StridedVec, StridedVecMut};

// ============================================================================
// Error types
// ============================================================================

/// Errors that can occur while constructing a strided view.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StridedError {
    /// Zero increment is not a valid vector stride.
    #[error("invalid increment 0 for a vector of length {n}")]
    ZeroStride { n: usize },

    /// Integer overflow while computing an element offset.
    #[error("offset overflow while computing element index")]
    OffsetOverflow,

    /// A visited element lies outside the buffer.
    #[error("element index {index} out of bounds for buffer of length {len}")]
    OutOfBounds { index: isize, len: usize },
}

/// Result type for strided view construction.
pub type Result<T> = std::result::Result<T, StridedError>;
