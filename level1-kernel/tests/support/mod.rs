#![allow(dead_code)]

pub mod guard;

use num_complex::Complex;
use rand::rngs::StdRng;
use rand::Rng;
use std::fmt::{Debug, Display};

pub use guard::Guarded;

/// Runs `$check::<B>()`, or `$check::<T, B>()` for an element type, for
/// every backend compiled in.
#[allow(unused_macros)]
macro_rules! for_each_backend {
    ($check:ident) => {{
        $check::<level1_kernel::PortableBackend>();
        #[cfg(feature = "simd")]
        $check::<level1_kernel::SimdBackend>();
    }};
    ($check:ident, $t:ty) => {{
        $check::<$t, level1_kernel::PortableBackend>();
        #[cfg(feature = "simd")]
        $check::<$t, level1_kernel::SimdBackend>();
    }};
}

/// Element helpers shared by the integration tests.
pub trait TestElement: level1_kernel::Element + Debug {
    /// Guard value: NaN in every component.
    fn sentinel() -> Self;

    fn is_sentinel(self) -> bool;

    /// Same bits, or NaN in the same components.
    fn same(self, other: Self) -> bool;

    /// Small integer-valued element, exact under + and *.
    fn from_i32(v: i32) -> Self;

    fn random(rng: &mut StdRng) -> Self;
}

macro_rules! impl_test_real {
    ($t:ty) => {
        impl TestElement for $t {
            fn sentinel() -> Self {
                <$t>::NAN
            }

            fn is_sentinel(self) -> bool {
                self.is_nan()
            }

            fn same(self, other: Self) -> bool {
                (self.is_nan() && other.is_nan()) || self.to_bits() == other.to_bits()
            }

            fn from_i32(v: i32) -> Self {
                v as $t
            }

            fn random(rng: &mut StdRng) -> Self {
                rng.gen_range(-4.0..4.0)
            }
        }

        impl TestReal for $t {
            fn specials() -> Vec<Self> {
                vec![
                    0.0,
                    -0.0,
                    <$t>::INFINITY,
                    <$t>::NEG_INFINITY,
                    <$t>::NAN,
                    -<$t>::NAN,
                    <$t>::MIN_POSITIVE,
                    <$t>::MIN_POSITIVE / 4.0,
                    <$t>::MAX,
                    -<$t>::MAX,
                    1.0,
                    -1.0,
                ]
            }

            fn from_f64(v: f64) -> Self {
                v as $t
            }
        }
    };
}

/// Real test elements, with the IEEE special values of their width.
pub trait TestReal:
    TestElement
    + level1_kernel::Real
    + Display
    + approx::AbsDiffEq<Epsilon = Self>
    + approx::RelativeEq
{
    /// Signed zeros, infinities, NaNs, subnormals, extremes and +-1.
    fn specials() -> Vec<Self>;

    /// Rounds to the nearest value of this width.
    fn from_f64(v: f64) -> Self;
}

impl_test_real!(f32);
impl_test_real!(f64);

impl<T> TestElement for Complex<T>
where
    T: TestElement,
    Complex<T>: level1_kernel::Element,
{
    fn sentinel() -> Self {
        Complex::new(T::sentinel(), T::sentinel())
    }

    fn is_sentinel(self) -> bool {
        self.re.is_sentinel() && self.im.is_sentinel()
    }

    fn same(self, other: Self) -> bool {
        self.re.same(other.re) && self.im.same(other.im)
    }

    fn from_i32(v: i32) -> Self {
        Complex::new(T::from_i32(v), T::from_i32(-v / 2))
    }

    fn random(rng: &mut StdRng) -> Self {
        Complex::new(T::random(rng), T::random(rng))
    }
}

/// Asserts elementwise [`TestElement::same`].
#[track_caller]
pub fn assert_same<T: TestElement>(got: &[T], want: &[T], what: &str) {
    assert_eq!(got.len(), want.len(), "{what}: length");
    for (i, (&g, &w)) in got.iter().zip(want).enumerate() {
        assert!(g.same(w), "{what}: element {i}: got {g:?}, want {w:?}");
    }
}

/// `[v0, v1, ...]` as test elements.
pub fn elems<T: TestElement>(values: &[i32]) -> Vec<T> {
    values.iter().map(|&v| T::from_i32(v)).collect()
}

pub fn random_vec<T: TestElement>(rng: &mut StdRng, n: usize) -> Vec<T> {
    (0..n).map(|_| T::random(rng)).collect()
}

/// Increment pairs with a shared sign, as used by strided callers.
pub fn same_sign_incs(incs: &[isize]) -> Vec<(isize, isize)> {
    let mut out = Vec::new();
    for &a in incs {
        for &b in incs {
            if (a > 0) == (b > 0) {
                out.push((a, b));
            }
        }
    }
    out
}
