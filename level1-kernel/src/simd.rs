//! [`SimdBackend`] kernels built on `pulp` runtime dispatch.
//!
//! Only contiguous `f32`/`f64` kernels are vectorized. Every lane operation
//! is a single IEEE add, sub, mul or div, so elementwise and AXPY results
//! are bit-identical to the portable loops. `sum` and `dot` keep four
//! accumulators and therefore reassociate.
//!
//! Strided and complex kernels use the portable defaults.

use crate::backend::{RealKernels, SimdBackend, VectorKernels};
use crate::ops::{Arith, BinaryOp, ScalarOp};
use crate::portable;
use core::any::TypeId;
use level1_traits::{Conj, ElementOp};
use num_complex::Complex;
use pulp::{Simd, WithSimd};

/// Below this length the runtime dispatch costs more than the loop.
pub(crate) const SIMD_THRESHOLD: usize = 64;

#[inline(always)]
fn dispatch<W: WithSimd>(kernel: W) -> W::Output {
    pulp::Arch::new().dispatch(kernel)
}

/// Whether `Op` is known to leave real values unchanged.
#[inline(always)]
fn is_real_identity<T, Op: ElementOp<T>>() -> bool {
    Op::IS_IDENTITY || TypeId::of::<Op>() == TypeId::of::<Conj>()
}

macro_rules! impl_simd_real {
    (
        $t:ty, $module:ident, $lanes:ident,
        $splat:ident, $add:ident, $sub:ident, $mul:ident, $div:ident,
        $mul_add:ident, $reduce_sum:ident
    ) => {
        mod $module {
            use super::*;

            #[inline(always)]
            fn width<S: Simd>() -> usize {
                core::mem::size_of::<S::$lanes>() / core::mem::size_of::<$t>()
            }

            #[inline(always)]
            unsafe fn load<S: Simd>(p: *const $t) -> S::$lanes {
                (p as *const S::$lanes).read_unaligned()
            }

            #[inline(always)]
            unsafe fn store<S: Simd>(p: *mut $t, v: S::$lanes) {
                (p as *mut S::$lanes).write_unaligned(v)
            }

            #[inline(always)]
            fn arith<S: Simd>(simd: S, op: Arith, a: S::$lanes, b: S::$lanes) -> S::$lanes {
                match op {
                    Arith::Add => simd.$add(a, b),
                    Arith::Sub => simd.$sub(a, b),
                    Arith::Mul => simd.$mul(a, b),
                    Arith::Div => simd.$div(a, b),
                }
            }

            struct Binary {
                op: Arith,
                n: usize,
                out: *mut $t,
                a: *const $t,
                b: *const $t,
            }

            impl WithSimd for Binary {
                type Output = ();

                #[inline(always)]
                fn with_simd<S: Simd>(self, simd: S) {
                    let w = width::<S>();
                    let mut i = 0usize;
                    // SAFETY: the raw kernel contract covers `n` elements of each pointer.
                    unsafe {
                        while i + w <= self.n {
                            let va = load::<S>(self.a.add(i));
                            let vb = load::<S>(self.b.add(i));
                            store::<S>(self.out.add(i), arith(simd, self.op, va, vb));
                            i += w;
                        }
                        for j in i..self.n {
                            *self.out.add(j) = self.op.apply(*self.a.add(j), *self.b.add(j));
                        }
                    }
                }
            }

            struct Scalar {
                op: Arith,
                n: usize,
                out: *mut $t,
                a: *const $t,
                c: $t,
            }

            impl WithSimd for Scalar {
                type Output = ();

                #[inline(always)]
                fn with_simd<S: Simd>(self, simd: S) {
                    let w = width::<S>();
                    let vc = simd.$splat(self.c);
                    let mut i = 0usize;
                    // SAFETY: see `Binary`.
                    unsafe {
                        while i + w <= self.n {
                            let va = load::<S>(self.a.add(i));
                            store::<S>(self.out.add(i), arith(simd, self.op, vc, va));
                            i += w;
                        }
                        for j in i..self.n {
                            *self.out.add(j) = self.op.apply(self.c, *self.a.add(j));
                        }
                    }
                }
            }

            struct Axpy {
                n: usize,
                alpha: $t,
                x: *const $t,
                y: *const $t,
                dst: *mut $t,
            }

            impl WithSimd for Axpy {
                type Output = ();

                #[inline(always)]
                fn with_simd<S: Simd>(self, simd: S) {
                    let w = width::<S>();
                    let va = simd.$splat(self.alpha);
                    let mut i = 0usize;
                    // SAFETY: see `Binary`. Each chunk is loaded before it is
                    // stored, so `dst` may equal `x` or `y`.
                    unsafe {
                        while i + w <= self.n {
                            let vx = load::<S>(self.x.add(i));
                            let vy = load::<S>(self.y.add(i));
                            // Separate mul and add: must round like `alpha * x + y`.
                            store::<S>(self.dst.add(i), simd.$add(simd.$mul(va, vx), vy));
                            i += w;
                        }
                        for j in i..self.n {
                            *self.dst.add(j) = self.alpha * *self.x.add(j) + *self.y.add(j);
                        }
                    }
                }
            }

            struct Sum {
                n: usize,
                a: *const $t,
            }

            impl WithSimd for Sum {
                type Output = $t;

                #[inline(always)]
                fn with_simd<S: Simd>(self, simd: S) -> $t {
                    let w = width::<S>();
                    let mut acc0 = simd.$splat(0.0);
                    let mut acc1 = simd.$splat(0.0);
                    let mut acc2 = simd.$splat(0.0);
                    let mut acc3 = simd.$splat(0.0);

                    let mut i = 0usize;
                    // SAFETY: see `Binary`.
                    unsafe {
                        while i + 4 * w <= self.n {
                            acc0 = simd.$add(acc0, load::<S>(self.a.add(i)));
                            acc1 = simd.$add(acc1, load::<S>(self.a.add(i + w)));
                            acc2 = simd.$add(acc2, load::<S>(self.a.add(i + 2 * w)));
                            acc3 = simd.$add(acc3, load::<S>(self.a.add(i + 3 * w)));
                            i += 4 * w;
                        }
                        while i + w <= self.n {
                            acc0 = simd.$add(acc0, load::<S>(self.a.add(i)));
                            i += w;
                        }

                        let acc = simd.$add(simd.$add(acc0, acc1), simd.$add(acc2, acc3));
                        let mut sum = simd.$reduce_sum(acc);
                        for j in i..self.n {
                            sum += *self.a.add(j);
                        }
                        sum
                    }
                }
            }

            struct Dot {
                n: usize,
                x: *const $t,
                y: *const $t,
            }

            impl WithSimd for Dot {
                type Output = $t;

                #[inline(always)]
                fn with_simd<S: Simd>(self, simd: S) -> $t {
                    let w = width::<S>();
                    let mut acc0 = simd.$splat(0.0);
                    let mut acc1 = simd.$splat(0.0);
                    let mut acc2 = simd.$splat(0.0);
                    let mut acc3 = simd.$splat(0.0);

                    let (x, y) = (self.x, self.y);
                    let mut i = 0usize;
                    // SAFETY: see `Binary`.
                    unsafe {
                        while i + 4 * w <= self.n {
                            acc0 = simd.$mul_add(load::<S>(y.add(i)), load::<S>(x.add(i)), acc0);
                            acc1 = simd.$mul_add(
                                load::<S>(y.add(i + w)),
                                load::<S>(x.add(i + w)),
                                acc1,
                            );
                            acc2 = simd.$mul_add(
                                load::<S>(y.add(i + 2 * w)),
                                load::<S>(x.add(i + 2 * w)),
                                acc2,
                            );
                            acc3 = simd.$mul_add(
                                load::<S>(y.add(i + 3 * w)),
                                load::<S>(x.add(i + 3 * w)),
                                acc3,
                            );
                            i += 4 * w;
                        }
                        while i + w <= self.n {
                            acc0 = simd.$mul_add(load::<S>(y.add(i)), load::<S>(x.add(i)), acc0);
                            i += w;
                        }

                        let acc = simd.$add(simd.$add(acc0, acc1), simd.$add(acc2, acc3));
                        let mut sum = simd.$reduce_sum(acc);
                        for j in i..self.n {
                            sum += *y.add(j) * *x.add(j);
                        }
                        sum
                    }
                }
            }

            impl VectorKernels<$t> for SimdBackend {
                #[inline]
                unsafe fn raw_axpy_unitary(
                    n: usize,
                    alpha: $t,
                    x: *const $t,
                    y: *const $t,
                    dst: *mut $t,
                ) {
                    if n >= SIMD_THRESHOLD {
                        dispatch(Axpy { n, alpha, x, y, dst })
                    } else {
                        portable::axpy_unitary(n, alpha, x, y, dst)
                    }
                }

                #[inline]
                unsafe fn raw_dot_unitary<Op: ElementOp<$t>>(
                    n: usize,
                    x: *const $t,
                    y: *const $t,
                ) -> $t {
                    if n >= SIMD_THRESHOLD && is_real_identity::<$t, Op>() {
                        dispatch(Dot { n, x, y })
                    } else {
                        portable::dot_unitary::<$t, Op>(n, x, y)
                    }
                }
            }

            impl RealKernels<$t> for SimdBackend {
                #[inline]
                unsafe fn raw_binary<Op: BinaryOp>(
                    n: usize,
                    out: *mut $t,
                    a: *const $t,
                    b: *const $t,
                ) {
                    match Op::ARITH {
                        Some(op) if n >= SIMD_THRESHOLD => dispatch(Binary { op, n, out, a, b }),
                        _ => portable::binary::<$t, Op>(n, out, a, b),
                    }
                }

                #[inline]
                unsafe fn raw_scalar<Op: ScalarOp>(n: usize, out: *mut $t, a: *const $t, c: $t) {
                    match Op::ARITH {
                        Some(op) if n >= SIMD_THRESHOLD => dispatch(Scalar { op, n, out, a, c }),
                        _ => portable::scalar::<$t, Op>(n, out, a, c),
                    }
                }

                #[inline]
                unsafe fn raw_sum(n: usize, a: *const $t) -> $t {
                    if n >= SIMD_THRESHOLD {
                        dispatch(Sum { n, a })
                    } else {
                        portable::sum(n, a)
                    }
                }
            }
        }
    };
}

impl_simd_real!(
    f32, simd_f32, f32s, splat_f32s, add_f32s, sub_f32s, mul_f32s, div_f32s, mul_add_f32s,
    reduce_sum_f32s
);
impl_simd_real!(
    f64, simd_f64, f64s, splat_f64s, add_f64s, sub_f64s, mul_f64s, div_f64s, mul_add_f64s,
    reduce_sum_f64s
);

impl VectorKernels<Complex<f32>> for SimdBackend {}
impl VectorKernels<Complex<f64>> for SimdBackend {}
