//! Reference loops.
//!
//! Plain sequential loops over raw pointers, one element per step, in
//! logical order. These define the results every other backend must match.
//!
//! Pointers are advanced with `wrapping_offset` so that stepping past the
//! last visited element never forms an out-of-range pointer with `offset`.
//! Destinations are written through raw pointers only, which keeps the
//! same-index aliasing shapes (`dst == x`, `dst == y`) well defined.

use crate::ops::{BinaryOp, ScalarOp, UnaryOp};
use level1_traits::{Element, ElementOp, Real};

/// `dst[i] = alpha * x[i] + y[i]`
#[inline(always)]
pub(crate) unsafe fn axpy_unitary<T: Element>(
    n: usize,
    alpha: T,
    x: *const T,
    y: *const T,
    dst: *mut T,
) {
    for i in 0..n {
        *dst.add(i) = alpha * *x.add(i) + *y.add(i);
    }
}

/// `dst[k*inc_dst] = alpha * x[k*inc_x] + y[k*inc_y]`
#[inline(always)]
#[allow(clippy::too_many_arguments)]
pub(crate) unsafe fn axpy_inc<T: Element>(
    n: usize,
    alpha: T,
    x: *const T,
    inc_x: isize,
    y: *const T,
    inc_y: isize,
    dst: *mut T,
    inc_dst: isize,
) {
    let mut xp = x;
    let mut yp = y;
    let mut dp = dst;
    for _ in 0..n {
        *dp = alpha * *xp + *yp;
        xp = xp.wrapping_offset(inc_x);
        yp = yp.wrapping_offset(inc_y);
        dp = dp.wrapping_offset(inc_dst);
    }
}

/// `Σ y[i] * Op(x[i])`, accumulated left to right from zero.
#[inline(always)]
pub(crate) unsafe fn dot_unitary<T: Element, Op: ElementOp<T>>(
    n: usize,
    x: *const T,
    y: *const T,
) -> T {
    let mut acc = T::zero();
    for i in 0..n {
        acc = acc + *y.add(i) * Op::apply(*x.add(i));
    }
    acc
}

#[inline(always)]
pub(crate) unsafe fn dot_inc<T: Element, Op: ElementOp<T>>(
    n: usize,
    x: *const T,
    inc_x: isize,
    y: *const T,
    inc_y: isize,
) -> T {
    let mut acc = T::zero();
    let mut xp = x;
    let mut yp = y;
    for _ in 0..n {
        acc = acc + *yp * Op::apply(*xp);
        xp = xp.wrapping_offset(inc_x);
        yp = yp.wrapping_offset(inc_y);
    }
    acc
}

#[inline(always)]
pub(crate) unsafe fn binary<T: Real, Op: BinaryOp>(
    n: usize,
    out: *mut T,
    a: *const T,
    b: *const T,
) {
    for i in 0..n {
        *out.add(i) = Op::apply(*a.add(i), *b.add(i));
    }
}

#[inline(always)]
pub(crate) unsafe fn scalar<T: Real, Op: ScalarOp>(n: usize, out: *mut T, a: *const T, c: T) {
    for i in 0..n {
        *out.add(i) = Op::apply(c, *a.add(i));
    }
}

#[inline(always)]
pub(crate) unsafe fn unary<T: Real, Op: UnaryOp>(n: usize, out: *mut T, a: *const T) {
    for i in 0..n {
        *out.add(i) = Op::apply(*a.add(i));
    }
}

#[inline(always)]
pub(crate) unsafe fn sum<T: Real>(n: usize, a: *const T) -> T {
    let mut acc = T::zero();
    for i in 0..n {
        acc = acc + *a.add(i);
    }
    acc
}

/// Requires `n >= 1`.
#[inline(always)]
pub(crate) unsafe fn min_element<T: Real>(n: usize, a: *const T) -> T {
    let mut min = *a;
    for i in 1..n {
        let v = *a.add(i);
        if v < min {
            min = v;
        }
    }
    min
}

/// Requires `n >= 1`.
#[inline(always)]
pub(crate) unsafe fn max_element<T: Real>(n: usize, a: *const T) -> T {
    let mut max = *a;
    for i in 1..n {
        let v = *a.add(i);
        if v > max {
            max = v;
        }
    }
    max
}
