//! Operation markers for the elementwise kernels.
//!
//! Each operation is a zero-sized type implementing one of [`BinaryOp`],
//! [`ScalarOp`] or [`UnaryOp`]. Kernels are generic over the marker, so every
//! operation gets its own monomorphized loop.
//!
//! [`Arith`] tags the operations that map onto a single IEEE arithmetic
//! instruction. A vectorized backend may only run those lane-wise; every
//! other operation goes through the scalar `apply`.

use level1_traits::Real;

/// A single correctly-rounded IEEE operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arith {
    Add,
    Sub,
    Mul,
    Div,
}

impl Arith {
    #[inline(always)]
    pub fn apply<T: Real>(self, a: T, b: T) -> T {
        match self {
            Arith::Add => a + b,
            Arith::Sub => a - b,
            Arith::Mul => a * b,
            Arith::Div => a / b,
        }
    }
}

/// `out[i] = op(a[i], b[i])`
pub trait BinaryOp: Copy + Default + 'static {
    /// Set when `apply(a, b)` is exactly `arith.apply(a, b)`.
    const ARITH: Option<Arith> = None;

    fn apply<T: Real>(a: T, b: T) -> T;
}

/// `out[i] = op(c, a[i])` with a broadcast scalar `c`.
pub trait ScalarOp: Copy + Default + 'static {
    /// Set when `apply(c, a)` is exactly `arith.apply(c, a)`.
    const ARITH: Option<Arith> = None;

    fn apply<T: Real>(c: T, a: T) -> T;
}

/// `out[i] = op(a[i])`
pub trait UnaryOp: Copy + Default + 'static {
    fn apply<T: Real>(a: T) -> T;
}

macro_rules! arith_binary_op {
    ($(#[$doc:meta])* $name:ident, $arith:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
        pub struct $name;

        impl BinaryOp for $name {
            const ARITH: Option<Arith> = Some(Arith::$arith);

            #[inline(always)]
            fn apply<T: Real>(a: T, b: T) -> T {
                Arith::$arith.apply(a, b)
            }
        }
    };
}

arith_binary_op!(
    /// `a + b`
    Add,
    Add
);
arith_binary_op!(
    /// `a - b`
    Sub,
    Sub
);
arith_binary_op!(
    /// `a * b`
    Mul,
    Mul
);
arith_binary_op!(
    /// `a / b`
    Div,
    Div
);

/// `if a < b { a } else { b }`
///
/// A NaN in either operand makes the comparison false, so the result is `b`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Min;

impl BinaryOp for Min {
    #[inline(always)]
    fn apply<T: Real>(a: T, b: T) -> T {
        if a < b {
            a
        } else {
            b
        }
    }
}

/// `if a > b { a } else { b }`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Max;

impl BinaryOp for Max {
    #[inline(always)]
    fn apply<T: Real>(a: T, b: T) -> T {
        if a > b {
            a
        } else {
            b
        }
    }
}

/// Magnitude of `a` with the sign bit of `b`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopySign;

impl BinaryOp for CopySign {
    #[inline(always)]
    fn apply<T: Real>(a: T, b: T) -> T {
        a.copysign_bits(b)
    }
}

macro_rules! arith_scalar_op {
    ($(#[$doc:meta])* $name:ident, $arith:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
        pub struct $name;

        impl ScalarOp for $name {
            const ARITH: Option<Arith> = Some(Arith::$arith);

            #[inline(always)]
            fn apply<T: Real>(c: T, a: T) -> T {
                Arith::$arith.apply(c, a)
            }
        }
    };
}

arith_scalar_op!(
    /// `c + a`
    ConstAdd,
    Add
);
arith_scalar_op!(
    /// `c * a`
    ConstMul,
    Mul
);
arith_scalar_op!(
    /// `c / a`
    ConstDiv,
    Div
);

/// Square root; NaN for negative inputs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sqrt;

impl UnaryOp for Sqrt {
    #[inline(always)]
    fn apply<T: Real>(a: T) -> T {
        a.sqrt()
    }
}

/// Absolute value (clears the sign bit).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Abs;

impl UnaryOp for Abs {
    #[inline(always)]
    fn apply<T: Real>(a: T) -> T {
        a.abs()
    }
}
