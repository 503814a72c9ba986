//! Scalar angle-unit conversions.
//!
//! The return type preserves the input's precision class: converting an
//! `f32` yields an `f32`, converting anything else yields an `f64`. This
//! is a contract, not an approximation — callers rely on single-precision
//! angles staying single-precision.

use crate::math::scalar::{Float, Scalar};

/// Converts the given measure of radians to degrees.
///
/// Returns `f32` if `radians` is `f32`, otherwise `f64`.
///
/// # Examples
/// ```
/// use vecmat_core::math::rad_to_deg;
///
/// assert_eq!(rad_to_deg(core::f64::consts::PI), 180.0);
/// let single: f32 = rad_to_deg(core::f32::consts::PI);
/// let double: f64 = rad_to_deg(1);
/// ```
#[inline]
pub fn rad_to_deg<T: Scalar>(radians: T) -> T::Float {
    let pi = <T::Float as Float>::PI;
    radians.to_float() / pi * <T::Float as Float>::from_f64(180.0)
}

/// Converts the given measure of degrees to radians.
///
/// Returns `f32` if `degrees` is `f32`, otherwise `f64`.
#[inline]
pub fn deg_to_rad<T: Scalar>(degrees: T) -> T::Float {
    let pi = <T::Float as Float>::PI;
    degrees.to_float() * pi / <T::Float as Float>::from_f64(180.0)
}
