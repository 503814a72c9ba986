//! Matrices.
//!
//! Storage and construction only for now; the algebraic operations are
//! deliberately not implemented.

use crate::math::scalar::Scalar;

/// A row-major `R`×`C` matrix of scalar type `T`.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Matrix<T, const R: usize, const C: usize>(pub [[T; C]; R]);

/// A 3×3 matrix.
pub type Mat3<T = f32> = Matrix<T, 3, 3>;
/// A 4×4 matrix.
pub type Mat4<T = f32> = Matrix<T, 4, 4>;

impl<T: Scalar, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Returns a matrix with the given rows.
    #[inline]
    pub const fn new(rows: [[T; C]; R]) -> Self {
        Self(rows)
    }

    /// Returns the zero matrix.
    #[inline]
    pub fn zero() -> Self {
        Self([[T::zero(); C]; R])
    }

    /// Returns a matrix with every element set to `value`.
    #[inline]
    pub fn splat(value: T) -> Self {
        Self([[value; C]; R])
    }

    /// Returns the `i`th row.
    #[inline]
    pub fn row(&self, i: usize) -> &[T; C] {
        &self.0[i]
    }
}

impl<T: Scalar, const N: usize> Matrix<T, N, N> {
    /// Returns the identity matrix.
    pub fn identity() -> Self {
        let mut m = Self::zero();
        for i in 0..N {
            m.0[i][i] = T::one();
        }
        m
    }
}

impl<T: Scalar, const R: usize, const C: usize> Default for Matrix<T, R, C> {
    /// Returns the zero matrix.
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_and_default() {
        assert_eq!(Mat3::<f32>::zero(), Mat3::<f32>::default());
        assert_eq!(Mat3::<i32>::zero().row(1), &[0, 0, 0]);
    }

    #[test]
    fn identity() {
        let m = Mat4::<f32>::identity();
        for i in 0..4 {
            for j in 0..4 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_eq!(m.0[i][j], expected);
            }
        }
    }

    #[test]
    fn rows() {
        let m = Matrix::new([[1, 2, 3], [4, 5, 6]]);
        assert_eq!(m.row(0), &[1, 2, 3]);
        assert_eq!(m.row(1), &[4, 5, 6]);
    }
}
