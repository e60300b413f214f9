//! Conversions to and from [`glam`] types.
//!
//! Enabled by the `glam` feature (on by default).
//!
//! glam stores matrices column-major; these conversions keep element
//! `[r, c]` in place, transposing the storage as needed. The transform
//! helpers keep translation in the last *row* while glam keeps it in the last
//! *column*, so a transform matrix needs `.transpose()` when it crosses over.
//!
//! ```rust
//! use vecmat_math::{vec3, Mat3};
//!
//! let m = Mat3::from_rows_array([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
//! let g: glam::Mat3 = m.into();
//! assert_eq!(g.row(0), glam::Vec3::new(1.0, 2.0, 3.0));
//! assert_eq!(Mat3::from(g), m);
//!
//! let v: glam::Vec3 = vec3(1.0, 2.0, 3.0).into();
//! assert_eq!(g * v, glam::Vec3::from((m * vec3(1.0, 2.0, 3.0)).to_array()));
//! ```

use crate::matrix::Matrix;
use crate::vector::Vector;

macro_rules! impl_glam_vector {
    ($($glam:ty => $t:ty, $n:literal;)+) => {
        $(
            impl From<Vector<$t, $n>> for $glam {
                #[inline]
                fn from(v: Vector<$t, $n>) -> $glam {
                    <$glam>::from_array(v.to_array())
                }
            }

            impl From<$glam> for Vector<$t, $n> {
                #[inline]
                fn from(v: $glam) -> Self {
                    Vector::from_array(v.to_array())
                }
            }
        )+
    };
}

impl_glam_vector! {
    glam::Vec2 => f32, 2;
    glam::Vec3 => f32, 3;
    glam::Vec4 => f32, 4;
    glam::DVec2 => f64, 2;
    glam::DVec3 => f64, 3;
    glam::DVec4 => f64, 4;
    glam::IVec2 => i32, 2;
    glam::IVec3 => i32, 3;
    glam::IVec4 => i32, 4;
}

macro_rules! impl_glam_matrix {
    ($($glam:ty => $t:ty, $n:literal;)+) => {
        $(
            impl From<Matrix<$t, $n, $n>> for $glam {
                #[inline]
                fn from(m: Matrix<$t, $n, $n>) -> $glam {
                    <$glam>::from_cols_array_2d(&m.transpose().to_rows_array())
                }
            }

            impl From<$glam> for Matrix<$t, $n, $n> {
                #[inline]
                fn from(m: $glam) -> Self {
                    Matrix::from_cols(m.to_cols_array_2d().map(Vector::from_array))
                }
            }
        )+
    };
}

impl_glam_matrix! {
    glam::Mat2 => f32, 2;
    glam::Mat3 => f32, 3;
    glam::Mat4 => f32, 4;
    glam::DMat2 => f64, 2;
    glam::DMat3 => f64, 3;
    glam::DMat4 => f64, 4;
}
