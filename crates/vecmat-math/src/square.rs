//! Square-matrix algebra and size changes.
//!
//! - [`determinant`](Matrix::determinant) and [`inverse`](Matrix::inverse)
//!   for 2x2, 3x3 and 4x4 floating-point matrices
//! - [`extend`](Matrix::extend) to the next size up (identity-filled) and
//!   [`truncate`](Matrix::truncate) to the upper-left block

use tracing::trace;
use vecmat_core::{Real, Scalar};

use crate::matrix::Matrix;
use crate::vector::Vector;

// 1 / det, or None when det is zero, NaN, or so small the reciprocal overflows
fn reciprocal_det<T: Real>(det: T, shape: &'static str) -> Option<T> {
    let inv_det = T::ONE / det;
    if det == T::ZERO || !inv_det.is_finite() {
        trace!(det = %det, shape, "singular matrix");
        return None;
    }
    Some(inv_det)
}

impl<T: Real> Matrix<T, 2, 2> {
    /// Computes the determinant.
    #[inline]
    pub fn determinant(&self) -> T {
        let m = self.to_rows_array();
        m[0][0] * m[1][1] - m[0][1] * m[1][0]
    }

    /// Computes the inverse of this matrix.
    ///
    /// Returns `None` if the determinant is zero or its reciprocal is not
    /// finite. No tolerance is applied, so a uniformly small matrix still
    /// inverts.
    pub fn inverse(&self) -> Option<Self> {
        let inv_det = reciprocal_det(self.determinant(), "mat2")?;
        let m = self.to_rows_array();
        Some(Self::from_rows_array([
            [m[1][1] * inv_det, -m[0][1] * inv_det],
            [-m[1][0] * inv_det, m[0][0] * inv_det],
        ]))
    }
}

impl<T: Real> Matrix<T, 3, 3> {
    /// Computes the determinant.
    #[inline]
    pub fn determinant(&self) -> T {
        let m = self.to_rows_array();
        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    /// Computes the inverse of this matrix.
    ///
    /// Returns `None` if the determinant is zero or its reciprocal is not finite.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vecmat_math::{vec3, Mat3};
    ///
    /// let m = Mat3::from_diagonal(vec3(2.0, 4.0, 8.0));
    /// let inv = m.inverse().unwrap();
    /// assert_eq!(inv.diagonal(), vec3(0.5, 0.25, 0.125));
    /// ```
    pub fn inverse(&self) -> Option<Self> {
        let inv_det = reciprocal_det(self.determinant(), "mat3")?;
        let m = self.to_rows_array();

        // Cofactor matrix, transposed and scaled by 1/det
        Some(Self::from_rows_array([
            [
                (m[1][1] * m[2][2] - m[1][2] * m[2][1]) * inv_det,
                (m[0][2] * m[2][1] - m[0][1] * m[2][2]) * inv_det,
                (m[0][1] * m[1][2] - m[0][2] * m[1][1]) * inv_det,
            ],
            [
                (m[1][2] * m[2][0] - m[1][0] * m[2][2]) * inv_det,
                (m[0][0] * m[2][2] - m[0][2] * m[2][0]) * inv_det,
                (m[0][2] * m[1][0] - m[0][0] * m[1][2]) * inv_det,
            ],
            [
                (m[1][0] * m[2][1] - m[1][1] * m[2][0]) * inv_det,
                (m[0][1] * m[2][0] - m[0][0] * m[2][1]) * inv_det,
                (m[0][0] * m[1][1] - m[0][1] * m[1][0]) * inv_det,
            ],
        ]))
    }
}

impl<T: Real> Matrix<T, 4, 4> {
    /// Computes the determinant.
    pub fn determinant(&self) -> T {
        let (s, c) = self.minors();
        s[0] * c[5] - s[1] * c[4] + s[2] * c[3] + s[3] * c[2] - s[4] * c[1] + s[5] * c[0]
    }

    /// Computes the inverse of this matrix.
    ///
    /// Returns `None` if the determinant is zero or its reciprocal is not finite.
    pub fn inverse(&self) -> Option<Self> {
        let (s, c) = self.minors();
        let det = s[0] * c[5] - s[1] * c[4] + s[2] * c[3] + s[3] * c[2] - s[4] * c[1] + s[5] * c[0];
        let inv_det = reciprocal_det(det, "mat4")?;
        let a = self.to_rows_array();

        let rows = [
            [
                a[1][1] * c[5] - a[1][2] * c[4] + a[1][3] * c[3],
                -a[0][1] * c[5] + a[0][2] * c[4] - a[0][3] * c[3],
                a[3][1] * s[5] - a[3][2] * s[4] + a[3][3] * s[3],
                -a[2][1] * s[5] + a[2][2] * s[4] - a[2][3] * s[3],
            ],
            [
                -a[1][0] * c[5] + a[1][2] * c[2] - a[1][3] * c[1],
                a[0][0] * c[5] - a[0][2] * c[2] + a[0][3] * c[1],
                -a[3][0] * s[5] + a[3][2] * s[2] - a[3][3] * s[1],
                a[2][0] * s[5] - a[2][2] * s[2] + a[2][3] * s[1],
            ],
            [
                a[1][0] * c[4] - a[1][1] * c[2] + a[1][3] * c[0],
                -a[0][0] * c[4] + a[0][1] * c[2] - a[0][3] * c[0],
                a[3][0] * s[4] - a[3][1] * s[2] + a[3][3] * s[0],
                -a[2][0] * s[4] + a[2][1] * s[2] - a[2][3] * s[0],
            ],
            [
                -a[1][0] * c[3] + a[1][1] * c[1] - a[1][2] * c[0],
                a[0][0] * c[3] - a[0][1] * c[1] + a[0][2] * c[0],
                -a[3][0] * s[3] + a[3][1] * s[1] - a[3][2] * s[0],
                a[2][0] * s[3] - a[2][1] * s[1] + a[2][2] * s[0],
            ],
        ];

        Some(Self::from_rows_array(rows) * inv_det)
    }

    // 2x2 minors of rows 0-1 (s) and rows 2-3 (c), Laplace expansion order
    fn minors(&self) -> ([T; 6], [T; 6]) {
        let a = self.to_rows_array();
        let s = [
            a[0][0] * a[1][1] - a[1][0] * a[0][1],
            a[0][0] * a[1][2] - a[1][0] * a[0][2],
            a[0][0] * a[1][3] - a[1][0] * a[0][3],
            a[0][1] * a[1][2] - a[1][1] * a[0][2],
            a[0][1] * a[1][3] - a[1][1] * a[0][3],
            a[0][2] * a[1][3] - a[1][2] * a[0][3],
        ];
        let c = [
            a[2][0] * a[3][1] - a[3][0] * a[2][1],
            a[2][0] * a[3][2] - a[3][0] * a[2][2],
            a[2][0] * a[3][3] - a[3][0] * a[2][3],
            a[2][1] * a[3][2] - a[3][1] * a[2][2],
            a[2][1] * a[3][3] - a[3][1] * a[2][3],
            a[2][2] * a[3][3] - a[3][2] * a[2][3],
        ];
        (s, c)
    }
}

impl<T: Scalar> Matrix<T, 2, 2> {
    /// Embeds this matrix in the upper-left of a 3x3 identity.
    pub fn extend(self) -> Matrix<T, 3, 3> {
        let [r0, r1] = self.0;
        Matrix([r0.extend(T::ZERO), r1.extend(T::ZERO), Vector::<T, 3>::UNIT_Z])
    }
}

impl<T: Scalar> Matrix<T, 3, 3> {
    /// Embeds this matrix in the upper-left of a 4x4 identity.
    pub fn extend(self) -> Matrix<T, 4, 4> {
        let [r0, r1, r2] = self.0;
        Matrix([
            r0.extend(T::ZERO),
            r1.extend(T::ZERO),
            r2.extend(T::ZERO),
            Vector::<T, 4>::UNIT_W,
        ])
    }

    /// Upper-left 2x2 block.
    pub fn truncate(self) -> Matrix<T, 2, 2> {
        let [r0, r1, _] = self.0;
        Matrix([r0.truncate(), r1.truncate()])
    }
}

impl<T: Scalar> Matrix<T, 4, 4> {
    /// Upper-left 3x3 block.
    pub fn truncate(self) -> Matrix<T, 3, 3> {
        let [r0, r1, r2, _] = self.0;
        Matrix([r0.truncate(), r1.truncate(), r2.truncate()])
    }
}

impl<T: Scalar> From<Matrix<T, 2, 2>> for Matrix<T, 3, 3> {
    #[inline]
    fn from(m: Matrix<T, 2, 2>) -> Self {
        m.extend()
    }
}

impl<T: Scalar> From<Matrix<T, 3, 3>> for Matrix<T, 4, 4> {
    #[inline]
    fn from(m: Matrix<T, 3, 3>) -> Self {
        m.extend()
    }
}

#[cfg(test)]
mod tests {
    use crate::{dvec2, dvec3, vec2, vec3, DMat2, DMat3, DMat4, Mat2, Mat3, Mat4};

    fn assert_near_identity4(m: DMat4) {
        for i in 0..4 {
            for j in 0..4 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!((m[(i, j)] - expected).abs() < 1e-9, "[{i}, {j}] = {}", m[(i, j)]);
            }
        }
    }

    #[test]
    fn test_mat2_inverse() {
        let m = DMat2::from_rows_array([[4.0, 7.0], [2.0, 6.0]]);
        assert_eq!(m.determinant(), 10.0);
        let inv = m.inverse().unwrap();
        let expected = DMat2::from_rows_array([[0.6, -0.7], [-0.2, 0.4]]);
        for i in 0..2 {
            for j in 0..2 {
                assert!((inv[(i, j)] - expected[(i, j)]).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_mat3_determinant() {
        let m = Mat3::from_rows_array([
            [1.0, 2.0, 3.0],
            [0.0, 1.0, 4.0],
            [5.0, 6.0, 0.0],
        ]);
        assert!((m.determinant() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_mat3_inverse() {
        let m = DMat3::from_rows_array([
            [1.0, 2.0, 3.0],
            [0.0, 1.0, 4.0],
            [5.0, 6.0, 0.0],
        ]);
        let result = m * m.inverse().unwrap();

        // Should be close to identity
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!((result[(i, j)] - expected).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_singular() {
        let m = Mat3::from_rows_array([
            [1.0, 2.0, 3.0],
            [2.0, 4.0, 6.0], // Row 2 = 2 * Row 1
            [1.0, 1.0, 1.0],
        ]);
        assert!(m.inverse().is_none());
        assert!(Mat4::ZERO.inverse().is_none());
        assert!(Mat2::ZERO.inverse().is_none());
    }

    #[test]
    fn test_small_scale_inverts() {
        for s in [1e-3_f32, 1e-4, 1e-6] {
            let m = Mat4::from_scale(vec3(s, s, s));
            let inv = m.inverse().unwrap_or_else(|| panic!("scale {s} reported singular"));
            let expected = Mat4::from_scale(vec3(1.0 / s, 1.0 / s, 1.0 / s));
            for i in 0..4 {
                for j in 0..4 {
                    let tol = 1e-5 * expected[(i, j)].abs().max(1.0);
                    assert!((inv[(i, j)] - expected[(i, j)]).abs() < tol, "scale {s} [{i}, {j}]");
                }
            }
        }

        let tiny = DMat2::from_diagonal(dvec2(1e-9, 1e-9));
        let d = tiny.inverse().unwrap().diagonal();
        assert!((d.x() / 1e9 - 1.0).abs() < 1e-12 && (d.y() / 1e9 - 1.0).abs() < 1e-12, "{d}");
        let m3 = Mat3::from_diagonal(vec3(1e-5, 1e-5, 1e-5));
        assert!(m3.inverse().is_some());
    }

    #[test]
    fn test_reciprocal_overflow_is_singular() {
        // det = 1e-40 is subnormal in f32 and 1 / det overflows
        let m = Mat2::from_diagonal(vec2(1e-20, 1e-20));
        assert!(m.inverse().is_none());
    }

    #[test]
    fn test_mat4_inverse() {
        let m = DMat4::from_rows_array([
            [2.0, 0.0, 0.0, 0.0],
            [0.0, 0.0, 3.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [4.0, 5.0, 6.0, 1.0],
        ]);
        assert!((m.determinant() + 6.0).abs() < 1e-12);
        let inv = m.inverse().unwrap();
        assert_near_identity4(m * inv);
        assert_near_identity4(inv * m);
    }

    #[test]
    fn test_mat4_determinant_identity() {
        assert_eq!(Mat4::identity().determinant(), 1.0);
        assert_eq!(DMat4::from_diagonal(dvec3(2.0, 3.0, 4.0).extend(5.0)).determinant(), 120.0);
    }

    #[test]
    fn test_extend_truncate() {
        let m = Mat2::from_rows_array([[1.0, 2.0], [3.0, 4.0]]);
        let m3: Mat3 = m.into();
        assert_eq!(m3.row(2), crate::Vec3::UNIT_Z);
        assert_eq!(m3.col(2), crate::Vec3::UNIT_Z);
        assert_eq!(m3.truncate(), m);

        let m4 = Mat4::from(m3);
        assert_eq!(m4.trace(), 1.0 + 4.0 + 1.0 + 1.0);
        assert_eq!(m4.truncate().truncate().row(1), vec2(3.0, 4.0));
    }
}
