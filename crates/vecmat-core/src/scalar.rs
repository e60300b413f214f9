//! Scalar math helpers.
//!
//! Free functions over single element values, mirroring the component-wise
//! vector operations in `vecmat-math`:
//!
//! - Rounding: [`floor`], [`ceil`], [`fract`]
//! - Range: [`abs`], [`min`], [`max`], [`clamp`], [`saturate`]
//! - Transcendental: [`sqrt`], [`sin`], [`cos`], [`tan`], [`asin`], [`acos`],
//!   [`atan`], [`atan2`], [`pow`]
//! - Interpolation: [`lerp`], [`inverse_lerp`], [`remap`], [`smoothstep`],
//!   [`bezier`]
//!
//! # Usage
//!
//! ```rust
//! use vecmat_core::scalar::{bezier, lerp};
//!
//! assert_eq!(lerp(0.0_f32, 10.0, 0.5), 5.0);
//! assert_eq!(bezier(0.0_f64, 1.0, 0.0, 0.5), 0.5);
//! ```
//!
//! Interpolation parameters are never clamped; `t` outside `[0, 1]`
//! extrapolates.

use crate::element::{Real, Scalar};

/// Largest integer less than or equal to `x`.
#[inline]
pub fn floor<T: Real>(x: T) -> T {
    x.floor()
}

/// Smallest integer greater than or equal to `x`.
#[inline]
pub fn ceil<T: Real>(x: T) -> T {
    x.ceil()
}

/// Fractional part, `x - floor(x)`.
///
/// # Example
///
/// ```rust
/// use vecmat_core::scalar::fract;
///
/// assert!((fract(1.75_f32) - 0.75).abs() < 1e-6);
/// assert!((fract(-0.25_f32) - 0.75).abs() < 1e-6);
/// ```
#[inline]
pub fn fract<T: Real>(x: T) -> T {
    x.fract()
}

/// Absolute value.
#[inline]
pub fn abs<T: Scalar>(x: T) -> T {
    x.abs()
}

/// Smaller of two values.
#[inline]
pub fn min<T: Scalar>(a: T, b: T) -> T {
    a.min(b)
}

/// Larger of two values.
#[inline]
pub fn max<T: Scalar>(a: T, b: T) -> T {
    a.max(b)
}

/// Clamps a value to the range [min, max].
///
/// # Example
///
/// ```rust
/// use vecmat_core::scalar::clamp;
///
/// assert_eq!(clamp(-0.5_f32, 0.0, 1.0), 0.0);
/// assert_eq!(clamp(7_i32, 0, 5), 5);
/// ```
#[inline]
pub fn clamp<T: Scalar>(value: T, min: T, max: T) -> T {
    value.max(min).min(max)
}

/// Clamps a value to [0, 1].
#[inline]
pub fn saturate<T: Real>(value: T) -> T {
    clamp(value, T::ZERO, T::ONE)
}

/// Square root; integers truncate (see [`Scalar::sqrt`]).
#[inline]
pub fn sqrt<T: Scalar>(x: T) -> T {
    x.sqrt()
}

/// Sine (radians).
#[inline]
pub fn sin<T: Real>(x: T) -> T {
    x.sin()
}

/// Cosine (radians).
#[inline]
pub fn cos<T: Real>(x: T) -> T {
    x.cos()
}

/// Tangent (radians).
#[inline]
pub fn tan<T: Real>(x: T) -> T {
    x.tan()
}

/// Arcsine.
#[inline]
pub fn asin<T: Real>(x: T) -> T {
    x.asin()
}

/// Arccosine. NaN outside `[-1, 1]`.
#[inline]
pub fn acos<T: Real>(x: T) -> T {
    x.acos()
}

/// Arctangent.
#[inline]
pub fn atan<T: Real>(x: T) -> T {
    x.atan()
}

/// Four-quadrant arctangent of `y / x`.
#[inline]
pub fn atan2<T: Real>(y: T, x: T) -> T {
    y.atan2(x)
}

/// `base` raised to `exp`.
#[inline]
pub fn pow<T: Real>(base: T, exp: T) -> T {
    base.powf(exp)
}

/// Linear interpolation between two values.
///
/// Returns `a` when `t = 0`, and `b` when `t = 1`.
///
/// # Formula
///
/// `a + (b - a) * t`
///
/// # Example
///
/// ```rust
/// use vecmat_core::scalar::lerp;
///
/// assert_eq!(lerp(0.0_f64, 10.0, 0.0), 0.0);
/// assert_eq!(lerp(0.0_f64, 10.0, 2.0), 20.0);
/// ```
#[inline]
pub fn lerp<T: Real>(a: T, b: T, t: T) -> T {
    a + (b - a) * t
}

/// Inverse linear interpolation.
///
/// Given a value between `a` and `b`, returns the corresponding `t`.
/// Returns zero when `a` and `b` coincide.
#[inline]
pub fn inverse_lerp<T: Real>(a: T, b: T, value: T) -> T {
    if (b - a).abs() < T::EPSILON {
        T::ZERO
    } else {
        (value - a) / (b - a)
    }
}

/// Remaps a value from one range to another.
///
/// # Example
///
/// ```rust
/// use vecmat_core::scalar::remap;
///
/// assert_eq!(remap(0.5_f32, 0.0, 1.0, 0.0, 100.0), 50.0);
/// ```
#[inline]
pub fn remap<T: Real>(value: T, in_min: T, in_max: T, out_min: T, out_max: T) -> T {
    lerp(out_min, out_max, inverse_lerp(in_min, in_max, value))
}

/// Hermite smoothstep: 0 below `edge0`, 1 above `edge1`, cubic in between.
#[inline]
pub fn smoothstep<T: Real>(edge0: T, edge1: T, x: T) -> T {
    let t = saturate(inverse_lerp(edge0, edge1, x));
    t * t * (T::lit(3.0) - T::lit(2.0) * t)
}

/// Quadratic Bezier through control points `a`, `b`, `c`.
///
/// # Formula
///
/// `(1 - t)^2 * a + 2 * (1 - t) * t * b + t^2 * c`
///
/// # Example
///
/// ```rust
/// use vecmat_core::scalar::bezier;
///
/// assert_eq!(bezier(0.0_f32, 2.0, 4.0, 0.0), 0.0);
/// assert_eq!(bezier(0.0_f32, 2.0, 4.0, 1.0), 4.0);
/// ```
#[inline]
pub fn bezier<T: Real>(a: T, b: T, c: T, t: T) -> T {
    let u = T::ONE - t;
    u * u * a + T::lit(2.0) * u * t * b + t * t * c
}
