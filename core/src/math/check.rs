//! Validation of geometric preconditions.
//!
//! Only compiled in when the `checks` feature is enabled; otherwise the
//! guards are empty inline functions and the release path carries no
//! validation cost at all.

#[cfg(feature = "checks")]
use crate::math::Error;
use crate::math::scalar::Scalar;
use crate::math::vec::Vector;

/// Panics if `v` does not have a length within epsilon of 1.
///
/// The panic message is the [`Error::NotUnitLength`] rendering, carrying
/// the offending vector's actual length.
#[cfg(feature = "checks")]
pub(crate) fn expect_unit<T: Scalar, const N: usize>(v: &Vector<T, N>) {
    if !v.is_unit_vector() {
        panic!("{}", Error::NotUnitLength { length: v.length() });
    }
}

#[cfg(not(feature = "checks"))]
#[inline(always)]
pub(crate) fn expect_unit<T: Scalar, const N: usize>(_: &Vector<T, N>) {}
