//! Strided vector view types.
//!
//! - [`StridedVec`]: immutable view, `Copy`
//! - [`StridedVecMut`]: mutable view over an exclusively borrowed slice

use crate::{Result, StridedError};

// ============================================================================
// Offset convention
// ============================================================================

/// Conventional start offset for a vector of `n` elements with increment `inc`.
///
/// For `inc > 0` this is 0. For `inc < 0` it is `(n - 1) * |inc|`, so the
/// first visited element is the lexically last one and traversal walks
/// towards index 0. Kernels never apply this themselves; callers pass the
/// offset explicitly.
#[inline]
pub fn start_offset(n: usize, inc: isize) -> usize {
    if inc < 0 && n > 0 {
        (n - 1) * inc.unsigned_abs()
    } else {
        0
    }
}

/// Minimum buffer length addressed by `n` elements at increment `inc`,
/// assuming the conventional start offset.
#[inline]
pub fn required_len(n: usize, inc: isize) -> usize {
    if n == 0 {
        0
    } else {
        (n - 1) * inc.unsigned_abs() + 1
    }
}

// ============================================================================
// Validation helpers
// ============================================================================

/// Validate that every visited index `offset + i * inc`, `i < n`, stays within `[0, len)`.
fn validate_bounds(len: usize, n: usize, inc: isize, offset: usize) -> Result<()> {
    if inc == 0 {
        return Err(StridedError::ZeroStride { n });
    }
    // Empty vector - no access needed
    if n == 0 {
        return Ok(());
    }
    let first = isize::try_from(offset).map_err(|_| StridedError::OffsetOverflow)?;
    let span = isize::try_from(n - 1)
        .ok()
        .and_then(|steps| steps.checked_mul(inc))
        .ok_or(StridedError::OffsetOverflow)?;
    let last = first
        .checked_add(span)
        .ok_or(StridedError::OffsetOverflow)?;
    let (lo, hi) = if span >= 0 { (first, last) } else { (last, first) };
    if lo < 0 {
        return Err(StridedError::OutOfBounds { index: lo, len });
    }
    if hi as usize >= len {
        return Err(StridedError::OutOfBounds { index: hi, len });
    }
    Ok(())
}

fn checked(len: usize, n: usize, inc: isize, offset: usize) -> Result<()> {
    validate_bounds(len, n, inc, offset).map_err(|err| {
        tracing::debug!(len, n, inc, offset, %err, "rejected strided vector view");
        err
    })
}

// ============================================================================
// StridedVec
// ============================================================================

/// Immutable strided vector view.
///
/// Logical element `i` is `data[offset + i * inc]`. Construction through
/// [`StridedVec::new`] guarantees every logical element is in bounds.
pub struct StridedVec<'a, T> {
    data: &'a [T],
    n: usize,
    inc: isize,
    offset: usize,
}

impl<T> Clone for StridedVec<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for StridedVec<'_, T> {}

impl<T> std::fmt::Debug for StridedVec<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StridedVec")
            .field("n", &self.n)
            .field("inc", &self.inc)
            .field("offset", &self.offset)
            .finish()
    }
}

impl<'a, T> StridedVec<'a, T> {
    /// Create a view of `n` elements starting at `offset`, advancing by `inc`.
    ///
    /// A zero `inc` is rejected with [`StridedError::ZeroStride`] even when
    /// `n == 0`.
    pub fn new(data: &'a [T], n: usize, inc: isize, offset: usize) -> Result<Self> {
        checked(data.len(), n, inc, offset)?;
        Ok(Self {
            data,
            n,
            inc,
            offset,
        })
    }

    /// Create a view using the conventional start offset for `inc`.
    ///
    /// Fails with [`StridedError::ZeroStride`] for `inc == 0`, whatever `n`.
    pub fn from_inc(data: &'a [T], n: usize, inc: isize) -> Result<Self> {
        Self::new(data, n, inc, start_offset(n, inc))
    }

    /// Unit-stride view over the whole slice.
    pub fn contiguous(data: &'a [T]) -> Self {
        Self {
            data,
            n: data.len(),
            inc: 1,
            offset: 0,
        }
    }

    /// Create a view without bounds checking.
    ///
    /// # Safety
    /// `inc` must be non-zero and `offset + i * inc` must lie in
    /// `[0, data.len())` for every `i < n`.
    pub unsafe fn new_unchecked(data: &'a [T], n: usize, inc: isize, offset: usize) -> Self {
        debug_assert!(validate_bounds(data.len(), n, inc, offset).is_ok());
        Self {
            data,
            n,
            inc,
            offset,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    #[inline]
    pub fn inc(&self) -> isize {
        self.inc
    }

    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    #[inline]
    pub fn data(&self) -> &'a [T] {
        self.data
    }

    /// Raw pointer to the first visited element.
    ///
    /// Only dereferenceable when the view is non-empty.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.data.as_ptr().wrapping_add(self.offset)
    }

    /// Physical index of logical element `i`.
    #[inline]
    fn physical(&self, i: usize) -> usize {
        (self.offset as isize + i as isize * self.inc) as usize
    }
}

impl<'a, T: Copy> StridedVec<'a, T> {
    /// Logical element `i`, or `None` past the end.
    pub fn get(&self, i: usize) -> Option<T> {
        (i < self.n).then(|| self.data[self.physical(i)])
    }

    /// Iterate logical elements in traversal order.
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        (0..self.n).map(move |i| self.data[self.physical(i)])
    }

    /// Collect logical elements in traversal order.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().collect()
    }
}

impl<'a, T> From<&'a [T]> for StridedVec<'a, T> {
    fn from(data: &'a [T]) -> Self {
        Self::contiguous(data)
    }
}

// ============================================================================
// StridedVecMut
// ============================================================================

/// Mutable strided vector view.
///
/// Holds the whole slice exclusively, so a kernel may read and write the
/// visited positions through one pointer (the `Out` aliasing shape).
pub struct StridedVecMut<'a, T> {
    data: &'a mut [T],
    n: usize,
    inc: isize,
    offset: usize,
}

impl<T> std::fmt::Debug for StridedVecMut<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StridedVecMut")
            .field("n", &self.n)
            .field("inc", &self.inc)
            .field("offset", &self.offset)
            .finish()
    }
}

impl<'a, T> StridedVecMut<'a, T> {
    /// Create a mutable view of `n` elements starting at `offset`, advancing by `inc`.
    ///
    /// A zero `inc` is rejected with [`StridedError::ZeroStride`] even when
    /// `n == 0`.
    pub fn new(data: &'a mut [T], n: usize, inc: isize, offset: usize) -> Result<Self> {
        checked(data.len(), n, inc, offset)?;
        Ok(Self {
            data,
            n,
            inc,
            offset,
        })
    }

    /// Create a mutable view using the conventional start offset for `inc`.
    ///
    /// Fails with [`StridedError::ZeroStride`] for `inc == 0`, whatever `n`.
    pub fn from_inc(data: &'a mut [T], n: usize, inc: isize) -> Result<Self> {
        Self::new(data, n, inc, start_offset(n, inc))
    }

    /// Unit-stride mutable view over the whole slice.
    pub fn contiguous(data: &'a mut [T]) -> Self {
        let n = data.len();
        Self {
            data,
            n,
            inc: 1,
            offset: 0,
        }
    }

    /// Create a mutable view without bounds checking.
    ///
    /// # Safety
    /// Same contract as [`StridedVec::new_unchecked`].
    pub unsafe fn new_unchecked(data: &'a mut [T], n: usize, inc: isize, offset: usize) -> Self {
        debug_assert!(validate_bounds(data.len(), n, inc, offset).is_ok());
        Self {
            data,
            n,
            inc,
            offset,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    #[inline]
    pub fn inc(&self) -> isize {
        self.inc
    }

    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Raw pointer to the first visited element.
    ///
    /// Only dereferenceable when the view is non-empty.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.data.as_mut_ptr().wrapping_add(self.offset)
    }

    /// Reborrow as an immutable view with the same geometry.
    pub fn as_view(&self) -> StridedVec<'_, T> {
        StridedVec {
            data: &*self.data,
            n: self.n,
            inc: self.inc,
            offset: self.offset,
        }
    }

    #[inline]
    fn physical(&self, i: usize) -> usize {
        (self.offset as isize + i as isize * self.inc) as usize
    }
}

impl<'a, T: Copy> StridedVecMut<'a, T> {
    /// Logical element `i`, or `None` past the end.
    pub fn get(&self, i: usize) -> Option<T> {
        (i < self.n).then(|| self.data[self.physical(i)])
    }

    /// Overwrite logical element `i`.
    ///
    /// # Panics
    /// Panics if `i >= len()`.
    pub fn set(&mut self, i: usize, value: T) {
        assert!(i < self.n, "index {} out of bounds for length {}", i, self.n);
        let idx = self.physical(i);
        self.data[idx] = value;
    }
}

impl<'a, T> From<&'a mut [T]> for StridedVecMut<'a, T> {
    fn from(data: &'a mut [T]) -> Self {
        Self::contiguous(data)
    }
}
