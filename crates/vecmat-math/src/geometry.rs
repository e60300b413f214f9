//! Free-function forms of the vector geometry operations.
//!
//! Each function returns a new value and leaves its arguments alone, which
//! keeps call sites that read like shader code short:
//!
//! ```rust
//! use vecmat_math::geometry::{dot, lerp, normalize};
//! use vecmat_math::vec2;
//!
//! assert_eq!(dot(vec2(1.0, 2.0), vec2(3.0, 4.0)), 11.0);
//! assert_eq!(lerp(vec2(0.0, 0.0), vec2(10.0, 10.0), 0.5), vec2(5.0, 5.0));
//! assert_eq!(normalize(vec2(0.0, 2.0)), vec2(0.0, 1.0));
//! ```

use vecmat_core::{Real, Scalar};

use crate::vector::Vector;

/// Dot product.
#[inline]
pub fn dot<T: Scalar, const N: usize>(a: Vector<T, N>, b: Vector<T, N>) -> T {
    a.dot(b)
}

/// Cross product of two 3-vectors.
#[inline]
pub fn cross<T: Scalar>(a: Vector<T, 3>, b: Vector<T, 3>) -> Vector<T, 3> {
    a.cross(b)
}

/// Length; truncated for integer vectors.
#[inline]
pub fn length<T: Scalar, const N: usize>(v: Vector<T, N>) -> T {
    v.length()
}

/// Squared length.
#[inline]
pub fn length_squared<T: Scalar, const N: usize>(v: Vector<T, N>) -> T {
    v.length_squared()
}

/// Distance between two points.
#[inline]
pub fn distance<T: Scalar, const N: usize>(a: Vector<T, N>, b: Vector<T, N>) -> T {
    a.dist_to(b)
}

/// Unit-length copy of `v`; NaN for a zero vector.
#[inline]
pub fn normalize<T: Real, const N: usize>(v: Vector<T, N>) -> Vector<T, N> {
    v.normalized()
}

/// Angle between two vectors in radians.
#[inline]
pub fn angle<T: Real, const N: usize>(a: Vector<T, N>, b: Vector<T, N>) -> T {
    a.angle_to(b)
}

/// Reflects `v` about the plane with normal `n`.
#[inline]
pub fn reflect<T: Real, const N: usize>(v: Vector<T, N>, n: Vector<T, N>) -> Vector<T, N> {
    v.reflect(n)
}

/// Linear interpolation; `t` is not clamped.
#[inline]
pub fn lerp<T: Real, const N: usize>(a: Vector<T, N>, b: Vector<T, N>, t: T) -> Vector<T, N> {
    a.lerp(b, t)
}

/// Quadratic Bezier through `a`, `b`, `c`.
#[inline]
pub fn bezier<T: Real, const N: usize>(
    a: Vector<T, N>,
    b: Vector<T, N>,
    c: Vector<T, N>,
    t: T,
) -> Vector<T, N> {
    Vector::bezier(a, b, c, t)
}
