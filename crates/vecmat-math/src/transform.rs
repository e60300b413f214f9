//! 4x4 affine transform helpers.
//!
//! A transform matrix here keeps rotation and scale in the upper-left 3x3
//! block, one axis per row, and the translation in the xyz of the last row:
//!
//! ```text
//! | rx.x*sx  rx.y*sx  rx.z*sx  0 |
//! | ry.x*sy  ry.y*sy  ry.z*sy  0 |
//! | rz.x*sz  rz.y*sz  rz.z*sz  0 |
//! | tx       ty       tz       1 |
//! ```
//!
//! Points transform as row vectors, `p' = [p, 1] * M`; see
//! [`transform_point`](Matrix::transform_point).
//!
//! Extracting the rotation is not implemented.
//! [`get_rotation`](Matrix::get_rotation) reports [`Error::Unimplemented`].

use tracing::{debug, trace};
use vecmat_core::{Error, Real, Result};

use crate::matrix::Matrix;
use crate::vector::Vector;

impl<T: Real> Matrix<T, 4, 4> {
    /// Translation by `t`.
    ///
    /// ```rust
    /// use vecmat_math::{vec3, Mat4};
    ///
    /// let m = Mat4::from_translation(vec3(1.0, 2.0, 3.0));
    /// assert_eq!(m.get_translation(), vec3(1.0, 2.0, 3.0));
    /// assert_eq!(m.transform_point(vec3(1.0, 1.0, 1.0)), vec3(2.0, 3.0, 4.0));
    /// ```
    pub fn from_translation(t: Vector<T, 3>) -> Self {
        let mut m = Self::identity();
        m.0[3] = t.extend(T::ONE);
        m
    }

    /// Per-axis scale by `s`.
    pub fn from_scale(s: Vector<T, 3>) -> Self {
        Self::from_diagonal(s.extend(T::ONE))
    }

    /// Length of the xyz part of each of the first three rows.
    pub fn get_scale(&self) -> Vector<T, 3> {
        Vector([
            self.0[0].truncate().length(),
            self.0[1].truncate().length(),
            self.0[2].truncate().length(),
        ])
    }

    /// The xyz of the last row.
    #[inline]
    pub fn get_translation(&self) -> Vector<T, 3> {
        self.0[3].truncate()
    }

    /// Not implemented; always returns [`Error::Unimplemented`].
    ///
    /// A correct extraction has to respect what
    /// [`clear_scale`](Matrix::clear_scale) and
    /// [`clear_rotation`](Matrix::clear_rotation) assume: an orthogonal
    /// rotation block with one scale factor per row.
    pub fn get_rotation(&self) -> Result<Matrix<T, 3, 3>> {
        debug!("rotation extraction requested on a mat4; not implemented");
        Err(Error::unimplemented("mat4 rotation extraction"))
    }

    /// Divides the xyz of each of the first three rows by its own length.
    ///
    /// No zero check: a row with zero xyz becomes NaN.
    pub fn clear_scale(&mut self) {
        for (axis, row) in self.0.iter_mut().take(3).enumerate() {
            let len = row.truncate().length();
            if len == T::ZERO {
                trace!(axis, "clear_scale on a zero-length row");
            }
            for c in row.0.iter_mut().take(3) {
                *c /= len;
            }
        }
    }

    /// Zeroes the xyz of the last row.
    pub fn clear_translation(&mut self) {
        for c in self.0[3].0.iter_mut().take(3) {
            *c = T::ZERO;
        }
    }

    /// Resets each of the first three rows to its axis times its xyz length.
    ///
    /// Any rotation collapses; per-axis scale and the `w` column are kept.
    ///
    /// ```rust
    /// use vecmat_math::{vec3, vec4, Mat4};
    ///
    /// let mut m = Mat4::from_rows_array([
    ///     [0.0, 2.0, 0.0, 0.0],
    ///     [-3.0, 0.0, 0.0, 0.0],
    ///     [0.0, 0.0, 4.0, 0.0],
    ///     [5.0, 6.0, 7.0, 1.0],
    /// ]);
    /// m.clear_rotation();
    /// assert_eq!(m.get_scale(), vec3(2.0, 3.0, 4.0));
    /// assert_eq!(m.row(0), vec4(2.0, 0.0, 0.0, 0.0));
    /// assert_eq!(m.get_translation(), vec3(5.0, 6.0, 7.0));
    /// ```
    pub fn clear_rotation(&mut self) {
        for (axis, row) in self.0.iter_mut().take(3).enumerate() {
            let len = row.truncate().length();
            for (j, c) in row.0.iter_mut().take(3).enumerate() {
                *c = if j == axis { len } else { T::ZERO };
            }
        }
    }

    /// Transforms a point: `[p, 1] * self`, translation applied.
    pub fn transform_point(&self, p: Vector<T, 3>) -> Vector<T, 3> {
        (self.transpose() * p.extend(T::ONE)).truncate()
    }

    /// Transforms a direction: `[v, 0] * self`, translation ignored.
    pub fn transform_vector(&self, v: Vector<T, 3>) -> Vector<T, 3> {
        (self.transpose() * v.extend(T::ZERO)).truncate()
    }
}

#[cfg(test)]
mod tests {
    use crate::{dvec3, vec3, vec4, DMat4, Mat4, Vec3};

    fn scaled_translated() -> Mat4 {
        Mat4::from_rows_array([
            [2.0, 0.0, 0.0, 0.0],
            [0.0, 0.0, 3.0, 0.0],
            [0.0, -4.0, 0.0, 0.0],
            [1.0, 2.0, 3.0, 1.0],
        ])
    }

    #[test]
    fn test_get_scale_and_translation() {
        let m = scaled_translated();
        assert_eq!(m.get_scale(), vec3(2.0, 3.0, 4.0));
        assert_eq!(m.get_translation(), vec3(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_clear_scale() {
        let mut m = scaled_translated();
        m.clear_scale();
        assert_eq!(m.get_scale(), Vec3::ONE);
        assert_eq!(m.row(2), vec4(0.0, -1.0, 0.0, 0.0));
        // translation row untouched
        assert_eq!(m.get_translation(), vec3(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_clear_scale_zero_row_is_nan() {
        let mut m = Mat4::ZERO;
        m.clear_scale();
        assert!(m.row(0).is_nan());
    }

    #[test]
    fn test_clear_translation() {
        let mut m = scaled_translated();
        m.clear_translation();
        assert_eq!(m.get_translation(), Vec3::ZERO);
        assert_eq!(m[(3, 3)], 1.0);
        assert_eq!(m.get_scale(), vec3(2.0, 3.0, 4.0));
    }

    #[test]
    fn test_clear_rotation() {
        let mut m = scaled_translated();
        m.clear_rotation();
        assert_eq!(m.truncate(), crate::Mat3::from_diagonal(vec3(2.0, 3.0, 4.0)));
    }

    #[test]
    fn test_get_rotation_unimplemented() {
        let err = DMat4::identity().get_rotation().unwrap_err();
        assert!(err.is_unimplemented());
    }

    #[test]
    fn test_transform_point_and_vector() {
        let m = DMat4::from_scale(dvec3(2.0, 2.0, 2.0)) * DMat4::from_translation(dvec3(1.0, 0.0, 0.0));
        // row-vector convention: scale first, then translate
        assert_eq!(m.transform_point(dvec3(1.0, 1.0, 1.0)), dvec3(3.0, 2.0, 2.0));
        assert_eq!(m.transform_vector(dvec3(1.0, 1.0, 1.0)), dvec3(2.0, 2.0, 2.0));
    }
}
