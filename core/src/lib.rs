//! Core functionality of the `vecmat` project.
//!
//! A small linear-algebra primitive library: fixed-size vectors of two,
//! three, and four components as well as a general N-dimensional form,
//! with arithmetic, geometric, and comparison operations; scalar
//! angle-unit conversions; and a minimal matrix type. Intended as a
//! building block for graphics and physics code, not an application.
//!
//! # Crate features
//!
//! * `checks`:
//!   Compiles in runtime validation of the unit-vector preconditions of
//!   [`parallel`][math::Vector::parallel] and its siblings. Violations
//!   panic with a [`NotUnitLength`][math::Error::NotUnitLength] message.
//!   Off by default; when disabled, none of the validation code is
//!   compiled in.
//!
//! * `lenient`:
//!   Makes [`from_other`][math::Vector::from_other] zero-pad or truncate
//!   on dimension mismatch instead of returning an error.
//!
//! All features are disabled by default.

pub mod math;

pub mod prelude {
    pub use crate::math::{
        ApproxEq, Color3, Color4, Error, Mat3, Mat4, Matrix, Scalar, Vec2,
        Vec3, Vec4, Vector, deg_to_rad, lerp, rad_to_deg, splat, vec2, vec3,
        vec4,
    };
}
