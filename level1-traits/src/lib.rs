//! Shared traits for the strided-level1 crates.
//!
//! This crate provides the element-type vocabulary used by `level1-view` and
//! `level1-kernel`:
//!
//! - [`Element`]: any value a Level-1 kernel can scale, add and multiply
//!   (`f32`, `f64`, `Complex<f32>`, `Complex<f64>`)
//! - [`Real`]: the real subset, with IEEE bit access for sign manipulation
//! - [`ElementOp`] with [`Identity`] and [`Conj`]: type-level operations applied
//!   to an operand as it is read (used to tell `dotu` from `dotc`)

pub mod element_op;
pub mod scalar;

pub use element_op::{Conj, ElementOp, ElementOpApply, Identity};
pub use scalar::{Element, Real};
