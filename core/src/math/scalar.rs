//! Classification of the primitive types usable as vector elements.
//!
//! [`Scalar`] marks the primitive numeric types and carries the small
//! amount of shared machinery the vector operations need from them.
//! [`Promote`] resolves the element type of a mixed-type expression the
//! way native arithmetic widening would. [`Character`] classifies the
//! code-value types whose formatting differs from glyph output.

use core::fmt::{Debug, Display};
use core::ops::Neg;

use num_traits::{AsPrimitive, NumAssignOps, NumOps, One, Zero};

/// Trait for the primitive numeric types that can serve as vector
/// elements.
///
/// Implemented for the built-in integer and floating-point types; not
/// intended to be implemented for anything else.
pub trait Scalar:
    Copy
    + Default
    + PartialOrd
    + Debug
    + Display
    + Zero
    + One
    + NumOps
    + NumAssignOps
    + AsPrimitive<f64>
    + Send
    + Sync
    + 'static
{
    /// The floating-point type that preserves this scalar's precision
    /// class: `f32` for `f32`, `f64` for every other scalar.
    type Float: Float;

    /// Converts `self` into its precision-class float type.
    fn to_float(self) -> Self::Float;

    /// Converts `self` to `f64` with `as`-cast semantics.
    #[inline]
    fn to_f64(self) -> f64 {
        self.as_()
    }
}

/// The machine floating-point types, `f32` and `f64`.
pub trait Float: Scalar + Neg<Output = Self> {
    /// The ratio of a circle's circumference to its diameter.
    const PI: Self;
    /// The machine epsilon of this type.
    const EPSILON: Self;

    /// Returns the square root of `self`.
    fn sqrt(self) -> Self;
    /// Returns the absolute value of `self`.
    fn abs(self) -> Self;
    /// Returns the arccosine of `self`, in radians.
    fn acos(self) -> Self;
    /// Returns whether `self` is neither zero, infinite, subnormal,
    /// nor NaN.
    fn is_normal(self) -> bool;
    /// Converts from `f64` with `as`-cast semantics.
    fn from_f64(x: f64) -> Self;
}

macro_rules! impl_scalar {
    ($($ty:ty => $float:ty),+ $(,)?) => {$(
        impl Scalar for $ty {
            type Float = $float;

            #[inline]
            fn to_float(self) -> $float {
                self as $float
            }
        }
    )+};
}

impl_scalar! {
    i8 => f64, i16 => f64, i32 => f64, i64 => f64, isize => f64,
    u8 => f64, u16 => f64, u32 => f64, u64 => f64, usize => f64,
    f32 => f32, f64 => f64,
}

impl Float for f32 {
    const PI: Self = core::f32::consts::PI;
    const EPSILON: Self = f32::EPSILON;

    #[inline]
    fn sqrt(self) -> Self {
        f32::sqrt(self)
    }
    #[inline]
    fn abs(self) -> Self {
        f32::abs(self)
    }
    #[inline]
    fn acos(self) -> Self {
        f32::acos(self)
    }
    #[inline]
    fn is_normal(self) -> bool {
        f32::is_normal(self)
    }
    #[inline]
    fn from_f64(x: f64) -> Self {
        x as f32
    }
}

impl Float for f64 {
    const PI: Self = core::f64::consts::PI;
    const EPSILON: Self = f64::EPSILON;

    #[inline]
    fn sqrt(self) -> Self {
        f64::sqrt(self)
    }
    #[inline]
    fn abs(self) -> Self {
        f64::abs(self)
    }
    #[inline]
    fn acos(self) -> Self {
        f64::acos(self)
    }
    #[inline]
    fn is_normal(self) -> bool {
        f64::is_normal(self)
    }
    #[inline]
    fn from_f64(x: f64) -> Self {
        x
    }
}

/// Marker for element types that carry character data.
///
/// Values of these types format as their numeric code value, never as
/// glyphs. `char` itself carries no arithmetic in Rust, so character
/// vectors store one of the code-unit types (`u8`, `u16`, `u32`), whose
/// `Display` output already is the code value.
pub trait Character: Copy {
    /// Returns the code value of `self`.
    fn code_point(self) -> u32;
}

impl Character for char {
    #[inline]
    fn code_point(self) -> u32 {
        self as u32
    }
}
impl Character for u8 {
    #[inline]
    fn code_point(self) -> u32 {
        self as u32
    }
}
impl Character for u16 {
    #[inline]
    fn code_point(self) -> u32 {
        self as u32
    }
}
impl Character for u32 {
    #[inline]
    fn code_point(self) -> u32 {
        self
    }
}

/// Resolves the element type of a mixed-type binary operation.
///
/// The mapping mirrors the widening a native arithmetic expression
/// applies: floating-point beats integer and `f64` beats `f32`; among
/// integers the wider type wins, and equal width with mixed signedness
/// resolves to the unsigned type. Same-type pairs map to themselves.
pub trait Promote<Rhs: Scalar = Self>: Scalar {
    /// The element type of the promoted result.
    type Output: Scalar;

    /// Widens `self` to the promoted type.
    fn promote(self) -> <Self as Promote<Rhs>>::Output;

    /// Widens a right-hand operand to the promoted type.
    fn promote_rhs(rhs: Rhs) -> <Self as Promote<Rhs>>::Output;
}

/// The element type resulting from promoting `T` against `U`.
pub type Promoted<T, U> = <T as Promote<U>>::Output;

macro_rules! impl_promote {
    ($($lhs:ty, $rhs:ty => $out:ty;)+) => {$(
        impl Promote<$rhs> for $lhs {
            type Output = $out;

            #[inline]
            fn promote(self) -> $out {
                self as $out
            }
            #[inline]
            fn promote_rhs(rhs: $rhs) -> $out {
                rhs as $out
            }
        }
    )+};
}

impl_promote! {
    i8, i8 => i8;    i8, i16 => i16;  i8, i32 => i32;  i8, i64 => i64;
    i8, u8 => u8;    i8, u16 => u16;  i8, u32 => u32;  i8, u64 => u64;
    i8, f32 => f32;  i8, f64 => f64;

    i16, i8 => i16;  i16, i16 => i16; i16, i32 => i32; i16, i64 => i64;
    i16, u8 => i16;  i16, u16 => u16; i16, u32 => u32; i16, u64 => u64;
    i16, f32 => f32; i16, f64 => f64;

    i32, i8 => i32;  i32, i16 => i32; i32, i32 => i32; i32, i64 => i64;
    i32, u8 => i32;  i32, u16 => i32; i32, u32 => u32; i32, u64 => u64;
    i32, f32 => f32; i32, f64 => f64;

    i64, i8 => i64;  i64, i16 => i64; i64, i32 => i64; i64, i64 => i64;
    i64, u8 => i64;  i64, u16 => i64; i64, u32 => i64; i64, u64 => u64;
    i64, f32 => f32; i64, f64 => f64;

    u8, i8 => u8;    u8, i16 => i16;  u8, i32 => i32;  u8, i64 => i64;
    u8, u8 => u8;    u8, u16 => u16;  u8, u32 => u32;  u8, u64 => u64;
    u8, f32 => f32;  u8, f64 => f64;

    u16, i8 => u16;  u16, i16 => u16; u16, i32 => i32; u16, i64 => i64;
    u16, u8 => u16;  u16, u16 => u16; u16, u32 => u32; u16, u64 => u64;
    u16, f32 => f32; u16, f64 => f64;

    u32, i8 => u32;  u32, i16 => u32; u32, i32 => u32; u32, i64 => i64;
    u32, u8 => u32;  u32, u16 => u32; u32, u32 => u32; u32, u64 => u64;
    u32, f32 => f32; u32, f64 => f64;

    u64, i8 => u64;  u64, i16 => u64; u64, i32 => u64; u64, i64 => u64;
    u64, u8 => u64;  u64, u16 => u64; u64, u32 => u64; u64, u64 => u64;
    u64, f32 => f32; u64, f64 => f64;

    f32, i8 => f32;  f32, i16 => f32; f32, i32 => f32; f32, i64 => f32;
    f32, u8 => f32;  f32, u16 => f32; f32, u32 => f32; f32, u64 => f32;
    f32, f32 => f32; f32, f64 => f64;

    f64, i8 => f64;  f64, i16 => f64; f64, i32 => f64; f64, i64 => f64;
    f64, u8 => f64;  f64, u16 => f64; f64, u32 => f64; f64, u64 => f64;
    f64, f32 => f64; f64, f64 => f64;

    // Pointer-width integers have no portable rank against the fixed-width
    // types; they promote only against themselves and the floats.
    isize, isize => isize; isize, f32 => f32; isize, f64 => f64;
    usize, usize => usize; usize, f32 => f32; usize, f64 => f64;
    f32, isize => f32; f64, isize => f64;
    f32, usize => f32; f64, usize => f64;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn promoted<T: Promote<U>, U: Scalar>(a: T, b: U) -> Promoted<T, U> {
        a.promote() + T::promote_rhs(b)
    }

    #[test]
    fn float_beats_integer() {
        let x: f32 = promoted(1i32, 2.5f32);
        assert_eq!(x, 3.5);
        let y: f64 = promoted(1u8, 2.5f64);
        assert_eq!(y, 3.5);
    }

    #[test]
    fn double_beats_float() {
        let x: f64 = promoted(1.5f32, 2.25f64);
        assert_eq!(x, 3.75);
    }

    #[test]
    fn wider_integer_wins() {
        let x: i32 = promoted(1i8, 2i32);
        assert_eq!(x, 3);
        let y: i64 = promoted(200u8, 3i64);
        assert_eq!(y, 203);
    }

    #[test]
    fn equal_width_mixed_sign_is_unsigned() {
        let x: u32 = promoted(1i32, 2u32);
        assert_eq!(x, 3);
    }

    #[test]
    fn precision_class_is_preserved() {
        let f: f32 = 1.0f32.to_float();
        assert_eq!(f, 1.0);
        let d: f64 = 1i32.to_float();
        assert_eq!(d, 1.0);
        let d: f64 = 1.0f64.to_float();
        assert_eq!(d, 1.0);
    }

    #[test]
    fn code_points() {
        assert_eq!('A'.code_point(), 65);
        assert_eq!(65u8.code_point(), 65);
        assert_eq!(0x20ACu16.code_point(), 0x20AC);
    }
}
