//! Buffers flanked by sentinel guard regions.
//!
//! A [`Guarded`] buffer stores a logical vector at a given increment inside
//! `GUARD` sentinel elements on each side. Positions between visited
//! elements (stride padding) hold the sentinel too. After a kernel call the
//! guards and the padding must still be sentinel: anything else is an
//! out-of-range access.
//!
//! [`Guarded::shifted`] adds extra sentinel elements in front of the data so
//! the first element lands at a chosen offset from the allocation start.

use super::TestElement;
use level1_kernel::{StridedVec, StridedVecMut};
use level1_view::{required_len, start_offset};

/// Sentinel elements on each side of the data.
pub const GUARD: usize = 7;

pub struct Guarded<T> {
    buf: Vec<T>,
    n: usize,
    inc: isize,
    /// Sentinel elements between the front guard and the data.
    lead: usize,
}

impl<T: TestElement> Guarded<T> {
    /// Lays out `values` at increment `inc`, with the conventional start
    /// offset for negative increments.
    pub fn new(values: &[T], inc: isize) -> Self {
        let n = values.len();
        let len = required_len(n, inc);
        let mut buf = vec![T::sentinel(); GUARD + len + GUARD];
        let start = start_offset(n, inc) as isize;
        for (i, &v) in values.iter().enumerate() {
            let at = start + i as isize * inc;
            buf[GUARD + at as usize] = v;
        }
        Self { buf, n, inc, lead: 0 }
    }

    /// Lays out `values[i]` at physical index `i * |inc|`, whatever the
    /// sign of `inc`. A negative-increment view then visits `values` in
    /// reverse.
    pub fn physical(values: &[T], inc: isize) -> Self {
        let n = values.len();
        let step = inc.unsigned_abs();
        let mut buf = vec![T::sentinel(); GUARD + required_len(n, inc) + GUARD];
        for (i, &v) in values.iter().enumerate() {
            buf[GUARD + i * step] = v;
        }
        Self { buf, n, inc, lead: 0 }
    }

    /// Unit-stride buffer whose data starts `shift` elements further in.
    /// The extra elements count as front guard.
    pub fn shifted(values: &[T], shift: usize) -> Self {
        let n = values.len();
        let mut buf = vec![T::sentinel(); GUARD + shift + n + GUARD];
        buf[GUARD + shift..GUARD + shift + n].copy_from_slice(values);
        Self { buf, n, inc: 1, lead: shift }
    }

    /// Unit-stride buffer.
    pub fn contiguous(values: &[T]) -> Self {
        Self::new(values, 1)
    }

    /// The region between the guards.
    pub fn data(&self) -> &[T] {
        let end = self.buf.len() - GUARD;
        &self.buf[GUARD + self.lead..end]
    }

    pub fn data_mut(&mut self) -> &mut [T] {
        let end = self.buf.len() - GUARD;
        &mut self.buf[GUARD + self.lead..end]
    }

    pub fn view(&self) -> StridedVec<'_, T> {
        StridedVec::from_inc(self.data(), self.n, self.inc).unwrap()
    }

    pub fn view_mut(&mut self) -> StridedVecMut<'_, T> {
        let (n, inc) = (self.n, self.inc);
        StridedVecMut::from_inc(self.data_mut(), n, inc).unwrap()
    }

    /// The logical vector, read back through the increment.
    pub fn logical(&self) -> Vec<T> {
        self.view().to_vec()
    }

    /// Panics if a guard element or an unvisited interior element changed.
    #[track_caller]
    pub fn check(&self, what: &str) {
        let len = self.buf.len();
        for (i, v) in self.buf[..GUARD + self.lead].iter().enumerate() {
            assert!(v.is_sentinel(), "{what}: front guard {i} overwritten: {v:?}");
        }
        for (i, v) in self.buf[len - GUARD..].iter().enumerate() {
            assert!(v.is_sentinel(), "{what}: back guard {i} overwritten: {v:?}");
        }

        let step = self.inc.unsigned_abs();
        for (i, v) in self.data().iter().enumerate() {
            if i % step != 0 {
                assert!(v.is_sentinel(), "{what}: stride padding {i} overwritten: {v:?}");
            }
        }
    }
}
