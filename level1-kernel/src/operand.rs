//! Source operands that may name the destination.
//!
//! A kernel writing `dst` can read from a separate buffer or from `dst`
//! itself. Passing [`Input::Out`] (or [`StridedInput::Out`]) selects the
//! second case, so `x = alpha*x + y` and `x = alpha*x + x` need no second
//! borrow of `x`. Aliasing with a different stride or offset cannot be
//! written this way.

use level1_view::StridedVec;

/// A contiguous source operand.
#[derive(Debug, Clone, Copy)]
pub enum Input<'a, T> {
    /// A buffer distinct from the destination.
    Slice(&'a [T]),
    /// The destination itself, read before each element is written.
    Out,
}

impl<'a, T> Input<'a, T> {
    /// Start pointer and length, with `Out` resolved to the destination.
    #[inline]
    pub(crate) fn resolve(self, out: *mut T, out_len: usize) -> (*const T, usize) {
        match self {
            Input::Slice(s) => (s.as_ptr(), s.len()),
            Input::Out => (out as *const T, out_len),
        }
    }
}

impl<'a, T> From<&'a [T]> for Input<'a, T> {
    fn from(s: &'a [T]) -> Self {
        Input::Slice(s)
    }
}

impl<'a, T> From<&'a Vec<T>> for Input<'a, T> {
    fn from(v: &'a Vec<T>) -> Self {
        Input::Slice(v.as_slice())
    }
}

impl<'a, T, const N: usize> From<&'a [T; N]> for Input<'a, T> {
    fn from(a: &'a [T; N]) -> Self {
        Input::Slice(a.as_slice())
    }
}

/// A strided source operand.
#[derive(Debug, Clone, Copy)]
pub enum StridedInput<'a, T> {
    /// A view distinct from the destination.
    View(StridedVec<'a, T>),
    /// The destination view itself: same increment, same offset.
    Out,
}

impl<'a, T> StridedInput<'a, T> {
    /// Pointer to the first visited element, increment and length.
    #[inline]
    pub(crate) fn resolve(
        self,
        dst: *mut T,
        dst_inc: isize,
        dst_len: usize,
    ) -> (*const T, isize, usize) {
        match self {
            StridedInput::View(v) => (v.as_ptr(), v.inc(), v.len()),
            StridedInput::Out => (dst as *const T, dst_inc, dst_len),
        }
    }
}

impl<'a, T> From<StridedVec<'a, T>> for StridedInput<'a, T> {
    fn from(v: StridedVec<'a, T>) -> Self {
        StridedInput::View(v)
    }
}

impl<'a, T> From<&'a [T]> for StridedInput<'a, T> {
    fn from(s: &'a [T]) -> Self {
        StridedInput::View(StridedVec::contiguous(s))
    }
}
