//! Testing and asserting approximate equality.
//!
//! Floating-point results rarely compare exactly equal even when their
//! real-number counterparts would. [`ApproxEq`] compares values by
//! absolute difference against a small tolerance, "epsilon". The default
//! epsilon is the machine epsilon of the operand's precision class
//! (`f32::EPSILON` or `f64::EPSILON`); an explicit epsilon can be given
//! where more error has accrued.

use core::iter::zip;

/// Trait for testing approximate equality.
pub trait ApproxEq<Other: ?Sized = Self, Epsilon = Self> {
    /// Returns whether `self` and `other` differ by at most the default
    /// epsilon of [`Self::default_epsilon`].
    fn approx_eq(&self, other: &Other) -> bool {
        self.approx_eq_eps(other, &Self::default_epsilon())
    }

    /// Returns whether `self` and `other` differ by at most `eps`.
    fn approx_eq_eps(&self, other: &Other, eps: &Epsilon) -> bool;

    /// Returns the machine epsilon of the operand's precision class.
    fn default_epsilon() -> Epsilon;
}

impl ApproxEq for f32 {
    fn approx_eq_eps(&self, other: &Self, eps: &Self) -> bool {
        (self - other).abs() <= *eps
    }
    fn default_epsilon() -> Self {
        f32::EPSILON
    }
}

impl ApproxEq for f64 {
    fn approx_eq_eps(&self, other: &Self, eps: &Self) -> bool {
        (self - other).abs() <= *eps
    }
    fn default_epsilon() -> Self {
        f64::EPSILON
    }
}

impl<E, T: Sized + ApproxEq<T, E>> ApproxEq<Self, E> for [T] {
    fn approx_eq_eps(&self, other: &Self, eps: &E) -> bool {
        self.len() == other.len()
            && zip(self, other).all(|(s, o)| s.approx_eq_eps(o, eps))
    }
    fn default_epsilon() -> E {
        T::default_epsilon()
    }
}

impl<E, T: Sized + ApproxEq<T, E>, const N: usize> ApproxEq<Self, E>
    for [T; N]
{
    fn approx_eq_eps(&self, other: &Self, eps: &E) -> bool {
        self.as_slice().approx_eq_eps(other, eps)
    }
    fn default_epsilon() -> E {
        T::default_epsilon()
    }
}

impl<E, T: ApproxEq<T, E>> ApproxEq<Self, E> for Option<T> {
    fn approx_eq_eps(&self, other: &Self, eps: &E) -> bool {
        match (self, other) {
            (Some(s), Some(o)) => s.approx_eq_eps(o, eps),
            (Some(_), None) | (None, Some(_)) => false,
            (None, None) => true,
        }
    }
    fn default_epsilon() -> E {
        T::default_epsilon()
    }
}

/// Asserts that two values are approximately equal.
///
/// Requires that the left operand has an applicable [`ApproxEq`] impl and
/// that both operands impl `Debug` unless a custom message is given.
/// The epsilon, if present, must come before the format string.
///
/// # Panics
///
/// If the given values are not approximately equal.
///
/// # Examples
/// ```
/// # use vecmat_core::assert_approx_eq;
/// assert_ne!(0.1 + 0.2, 0.3);
/// assert_approx_eq!(0.1 + 0.2, 0.3);
/// assert_approx_eq!(100.0f32, 100.5, eps = 1.0);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($a:expr, $b:expr) => {
        match (&$a, &$b) {
            (a, b) => $crate::assert_approx_eq!(
                *a, *b,
                "assertion failed: `{a:?} ≅ {b:?}`"
            )
        }
    };
    ($a:expr, $b:expr, eps = $eps:expr) => {
        match (&$a, &$b) {
            (a, b) => $crate::assert_approx_eq!(
                *a, *b, eps = $eps,
                "assertion failed: `{a:?} ≅ {b:?}`"
            )
        }
    };
    ($a:expr, $b:expr, $fmt:literal $(, $args:expr)*) => {{
        use $crate::math::approx::ApproxEq;
        match (&$a, &$b) {
            (a, b) => assert!(ApproxEq::approx_eq(a, b), $fmt $(, $args)*)
        }
    }};
    ($a:expr, $b:expr, eps = $eps:expr, $fmt:literal $(, $args:expr)*) => {{
        use $crate::math::approx::ApproxEq;
        match (&$a, &$b) {
            (a, b) => assert!(
                ApproxEq::approx_eq_eps(a, b, &$eps),
                $fmt $(, $args)*
            )
        }
    }};
}
