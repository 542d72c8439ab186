#[macro_use]
mod support;

use level1_kernel::ops::{self, BinaryOp};
use level1_kernel::{Elementwise, Input};
use support::{assert_same, Guarded, TestReal};

const LENS: &[usize] = &[0, 1, 3, 4, 7, 8, 9, 15, 16, 17, 31, 63, 64, 65, 100, 257];

fn values<T: TestReal>(n: usize, k: usize) -> Vec<T> {
    // Nonzero, mixed sign, exact in f32.
    (0..n)
        .map(|i| {
            let v = ((i * k) % 17) as f64 - 8.0;
            T::from_f64(if v == 0.0 { 0.5 } else { v })
        })
        .collect()
}

fn apply_binary<T: TestReal>(f: fn(T, T) -> T, a: &[T], b: &[T]) -> Vec<T> {
    a.iter().zip(b).map(|(&x, &y)| f(x, y)).collect()
}

fn apply_unary<T: TestReal>(a: &[T], f: impl Fn(T) -> T) -> Vec<T> {
    a.iter().map(|&x| f(x)).collect()
}

fn check_op<T: TestReal, B: Elementwise<T>, Op: BinaryOp>(name: &str, scalar: fn(T, T) -> T) {
    for &n in LENS {
        let a = values::<T>(n, 5);
        let b = values::<T>(n, 3);
        let want = apply_binary(scalar, &a, &b);
        let what = format!("{} {} {name} n={n}", B::NAME, std::any::type_name::<T>());

        let ga = Guarded::contiguous(&a);
        let gb = Guarded::contiguous(&b);
        let mut gout = Guarded::contiguous(&vec![T::sentinel(); n]);
        B::binary::<Op>(gout.data_mut(), ga.data(), gb.data());
        assert_same(gout.data(), &want, &what);
        assert_same(ga.data(), &a, &what);
        assert_same(gb.data(), &b, &what);
        ga.check(&what);
        gb.check(&what);
        gout.check(&what);
    }
}

fn check_binary<T: TestReal, B: Elementwise<T>>() {
    check_op::<T, B, ops::Add>("add", |x, y| x + y);
    check_op::<T, B, ops::Sub>("sub", |x, y| x - y);
    check_op::<T, B, ops::Mul>("mul", |x, y| x * y);
    check_op::<T, B, ops::Div>("div", |x, y| x / y);
    check_op::<T, B, ops::Min>("min", |x, y| if x < y { x } else { y });
    check_op::<T, B, ops::Max>("max", |x, y| if x > y { x } else { y });
    // Operands are never zero or NaN, so |x| * sign(y) is exact.
    check_op::<T, B, ops::CopySign>("copysign", |x, y| x.abs() * y.signum());
}

#[test]
fn test_binary_kernels() {
    for_each_backend!(check_binary, f64);
    for_each_backend!(check_binary, f32);
}

fn check_binary_aliasing<T: TestReal, B: Elementwise<T>>() {
    for &n in LENS {
        let a = values::<T>(n, 7);
        let b = values::<T>(n, 2);
        let what = format!("{} {} n={n}", B::NAME, std::any::type_name::<T>());

        // out = a
        let mut g = Guarded::contiguous(&a);
        B::div(g.data_mut(), Input::Out, &b);
        assert_same(g.data(), &apply_binary(|x, y| x / y, &a, &b), &what);
        g.check(&what);

        // out = b
        let mut g = Guarded::contiguous(&b);
        B::sub(g.data_mut(), &a, Input::Out);
        assert_same(g.data(), &apply_binary(|x, y| x - y, &a, &b), &what);
        g.check(&what);

        // out = a = b
        let mut g = Guarded::contiguous(&a);
        B::mul(g.data_mut(), Input::Out, Input::Out);
        assert_same(g.data(), &apply_binary(|x, y| x * y, &a, &a), &what);
        g.check(&what);
    }
}

#[test]
fn test_binary_aliasing() {
    for_each_backend!(check_binary_aliasing, f64);
    for_each_backend!(check_binary_aliasing, f32);
}

fn check_scalar_and_unary<T: TestReal, B: Elementwise<T>>() {
    let c = |v: f64| T::from_f64(v);
    for &n in LENS {
        let a = values::<T>(n, 11);
        let what = format!("{} {} n={n}", B::NAME, std::any::type_name::<T>());
        let mut out = Guarded::contiguous(&vec![T::sentinel(); n]);

        B::const_div(out.data_mut(), &a, c(3.0));
        assert_same(out.data(), &apply_unary(&a, |x| c(3.0) / x), &what);
        B::const_mul(out.data_mut(), &a, c(-1.5));
        assert_same(out.data(), &apply_unary(&a, |x| c(-1.5) * x), &what);
        B::const_add(out.data_mut(), &a, c(0.25));
        assert_same(out.data(), &apply_unary(&a, |x| c(0.25) + x), &what);
        B::abs(out.data_mut(), &a);
        assert_same(out.data(), &apply_unary(&a, |x| x.abs()), &what);
        B::sqrt(out.data_mut(), Input::Out);
        assert_same(out.data(), &apply_unary(&a, |x| x.abs().sqrt()), &what);
        out.check(&what);

        let mut y = Guarded::contiguous(&a);
        B::add_scaled(y.data_mut(), c(2.0), &a);
        assert_same(y.data(), &apply_unary(&a, |x| x + x * c(2.0)), &what);
        y.check(&what);
    }
}

#[test]
fn test_scalar_and_unary_kernels() {
    for_each_backend!(check_scalar_and_unary, f64);
    for_each_backend!(check_scalar_and_unary, f32);
}

#[test]
fn test_min_max_nan_asymmetry() {
    let nan = f64::NAN;
    let a = [nan, 1.0, nan, 2.0];
    let b = [1.0, nan, nan, 3.0];
    let mut out = [0.0; 4];
    level1_kernel::elementwise::min(&mut out, &a, &b);
    // Comparison with NaN is false, so `b` wins.
    assert_eq!(out[0], 1.0);
    assert!(out[1].is_nan());
    assert!(out[2].is_nan());
    assert_eq!(out[3], 2.0);

    level1_kernel::elementwise::max(&mut out, &a, &b);
    assert_eq!(out[0], 1.0);
    assert!(out[1].is_nan());
    assert_eq!(out[3], 3.0);

    // Arithmetic does propagate.
    level1_kernel::elementwise::add(&mut out, &a, &b);
    assert!(out.iter().take(3).all(|v| v.is_nan()));
}

#[test]
fn test_copysign_exact_bits() {
    let payload = f64::from_bits(0x7ff8_0000_0000_1234);
    let a = [0.0, -0.0, payload, 5.0, f64::INFINITY];
    let b = [-0.0, 1.0, -1.0, f64::from_bits(0xfff8_0000_0000_0001), -2.0];
    let mut out = [0.0; 5];
    level1_kernel::elementwise::copysign(&mut out, &a, &b);
    assert_eq!(out[0].to_bits(), (-0.0f64).to_bits());
    assert_eq!(out[1].to_bits(), 0.0f64.to_bits());
    assert_eq!(out[2].to_bits(), 0xfff8_0000_0000_1234);
    assert_eq!(out[3], -5.0);
    assert_eq!(out[4], f64::NEG_INFINITY);
}

#[test]
fn test_sqrt_special_values() {
    let a = [-1.0f32, -0.0, 0.0, f32::INFINITY, f32::NAN, 2.25];
    let mut out = [0.0f32; 6];
    level1_kernel::elementwise::sqrt(&mut out, &a);
    assert!(out[0].is_nan());
    assert!(out[1] == 0.0 && out[1].is_sign_negative());
    assert!(out[2] == 0.0 && out[2].is_sign_positive());
    assert_eq!(out[3], f32::INFINITY);
    assert!(out[4].is_nan());
    assert_eq!(out[5], 1.5);
}

#[test]
fn test_const_div_by_zero() {
    let a = [0.0, -0.0, f64::INFINITY];
    let mut out = [0.0; 3];
    level1_kernel::elementwise::const_div(&mut out, &a, 1.0);
    assert_eq!(out[0], f64::INFINITY);
    assert_eq!(out[1], f64::NEG_INFINITY);
    assert!(out[2] == 0.0 && out[2].is_sign_positive());
}
