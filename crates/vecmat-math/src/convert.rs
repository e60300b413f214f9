//! Conversions between element types.
//!
//! Widening goes through [`From`]: `ivec -> vec -> dvec` and `mat -> dmat`.
//! Narrowing is explicit with `cast`, which truncates like `as`:
//!
//! ```rust
//! use vecmat_math::{dvec2, ivec2, vec2, DVec2, IVec2, Vec2};
//!
//! let wide: DVec2 = vec2(1.5, -2.5).into();
//! assert_eq!(wide, dvec2(1.5, -2.5));
//!
//! let f: Vec2 = ivec2(3, 4).into();
//! assert_eq!(f.length(), 5.0);
//!
//! let narrow: IVec2 = wide.cast();
//! assert_eq!(narrow, ivec2(1, -2));
//! ```

use crate::matrix::Matrix;
use crate::vector::Vector;

macro_rules! impl_widening {
    ($($from:ty => $to:ty),+) => {
        $(
            impl<const N: usize> From<Vector<$from, N>> for Vector<$to, N> {
                #[inline]
                fn from(v: Vector<$from, N>) -> Self {
                    v.map(|c| c as $to)
                }
            }
        )+
    };
}

impl_widening!(i32 => f32, i32 => f64, f32 => f64);

impl<const R: usize, const C: usize> From<Matrix<f32, R, C>> for Matrix<f64, R, C> {
    #[inline]
    fn from(m: Matrix<f32, R, C>) -> Self {
        m.map(|c| c as f64)
    }
}

#[cfg(test)]
mod tests {
    use crate::{dvec3, ivec3, vec3, DMat2, DVec3, IVec3, Mat2, Vec3};

    #[test]
    fn test_widening() {
        let i = ivec3(1, -2, 3);
        let f: Vec3 = i.into();
        let d: DVec3 = i.into();
        assert_eq!(f, vec3(1.0, -2.0, 3.0));
        assert_eq!(d, dvec3(1.0, -2.0, 3.0));
        assert_eq!(DVec3::from(f), d);
    }

    #[test]
    fn test_narrowing_truncates() {
        let d = dvec3(0.75, -0.75, 7.5);
        assert_eq!(d.cast::<i32>(), IVec3::new(0, 0, 7));
        assert_eq!(d.cast::<f32>(), vec3(0.75, -0.75, 7.5));
    }

    #[test]
    fn test_matrix_widening() {
        let m = Mat2::from_rows_array([[0.5, 1.0], [2.0, 4.0]]);
        let d: DMat2 = m.into();
        assert_eq!(d.row(1).x(), 2.0);
        assert_eq!(d.cast::<f32>(), m);
    }
}
