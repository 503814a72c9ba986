//! Vector math and closely related utilities.
//!
//! Includes [fixed-size vectors][vec], a minimal [matrix type][mat],
//! [angle-unit conversions][angle], and [approximate equality
//! comparisons][approx].
//!
//! Vectors are generic over both their element type and their dimension.
//! Mixed-element-type arithmetic is supported and resolves its result
//! element type through the [`Promote`] mapping, mirroring the widening
//! a native mixed-type expression would perform. Numeric edge cases
//! follow IEEE 754: division by zero and zero-vector normalization
//! propagate infinities and NaNs rather than failing, with
//! [`scaled_to`][Vector::scaled_to] as the one explicitly guarded
//! exception.

pub use {
    angle::{deg_to_rad, rad_to_deg},
    approx::ApproxEq,
    mat::{Mat3, Mat4, Matrix},
    scalar::{Character, Float, Promote, Promoted, Scalar},
    vec::{
        Color3, Color4, Vec2, Vec2i, Vec3, Vec3i, Vec4, Vector, splat, vec2,
        vec3, vec4,
    },
};

pub mod angle;
pub mod approx;
mod check;
pub mod mat;
pub mod scalar;
pub mod vec;

/// Errors arising from violated preconditions or mismatched conversions.
///
/// Numeric degeneration (division by zero, normalizing a zero vector) is
/// *not* an error: it propagates IEEE 754 infinities and NaNs instead.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum Error {
    /// An argument was required to be a unit vector but was not.
    #[error(
        "expected a unit vector (length 1), \
         but the argument has length {length}"
    )]
    NotUnitLength {
        /// The actual length of the offending vector.
        length: f32,
    },
    /// Two vectors were required to have the same dimension.
    #[error("dimension mismatch: expected {expected} elements, found {actual}")]
    DimensionMismatch {
        /// The dimension required by the operation.
        expected: usize,
        /// The dimension actually supplied.
        actual: usize,
    },
}

/// Linearly interpolates between two vectors.
///
/// Returns `from` if `t` = 0 and `to` if `t` = 1. `t` is not clamped:
/// values outside [0, 1] extrapolate beyond the segment.
#[inline]
pub fn lerp<T, const N: usize>(
    t: f32,
    from: Vector<T, N>,
    to: Vector<T, N>,
) -> Vector<Promoted<T, f32>, N>
where
    T: Promote<f32>,
{
    from.lerp(&to, t)
}
