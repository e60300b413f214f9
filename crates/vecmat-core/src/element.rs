//! Element types for vectors and matrices.
//!
//! Two traits describe what a vector or matrix component may be:
//!
//! - [`Scalar`] - any supported element (`i32`, `f32`, `f64`)
//! - [`Real`] - floating-point elements (`f32`, `f64`)
//!
//! # Design
//!
//! Algorithms are written once against these traits. Per-type behavior lives
//! in the trait implementations, so quirks survive generalization. The main
//! one is [`Scalar::sqrt`]: integers take the root in `f64` and truncate back,
//! which makes `ivec.length()` an integer.
//!
//! ```
//! use vecmat_core::Scalar;
//!
//! assert_eq!(Scalar::sqrt(10_i32), 3);
//! assert_eq!(Scalar::sqrt(16.0_f32), 4.0);
//! ```
//!
//! # Dependencies
//!
//! - [`num_traits`] - `Num`, `ConstZero`, `ConstOne` supertraits

use num_traits::{ConstOne, ConstZero, Num};
use std::fmt;
use std::ops::{AddAssign, DivAssign, MulAssign, Neg, SubAssign};

/// Trait for vector and matrix element types.
///
/// Implemented for:
/// - `i32` - integer vectors (`ivec*`)
/// - `f32` - single precision (`vec*`, `mat*`)
/// - `f64` - double precision (`dvec*`, `dmat*`)
///
/// # Constants
///
/// - [`PREFIX`](Scalar::PREFIX) - Short type-name prefix (`"i"`, `""`, `"d"`)
/// - [`IS_FLOAT`](Scalar::IS_FLOAT) - Whether this is a floating-point type
pub trait Scalar:
    Num
    + ConstZero
    + ConstOne
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + Copy
    + Default
    + PartialOrd
    + fmt::Debug
    + fmt::Display
    + Send
    + Sync
    + 'static
{
    /// Prefix used in short type names: `ivec3`, `vec3`, `dvec3`.
    const PREFIX: &'static str;

    /// Whether this is a floating-point format.
    const IS_FLOAT: bool;

    /// Square root.
    ///
    /// For integers the root is computed in `f64` and truncated toward zero.
    fn sqrt(self) -> Self;

    /// Absolute value.
    fn abs(self) -> Self;

    /// Smaller of two values.
    fn min(self, other: Self) -> Self;

    /// Larger of two values.
    fn max(self, other: Self) -> Self;

    /// Converts to `f64`.
    fn as_f64(self) -> f64;

    /// Converts from `f64` with `as` semantics (truncating, saturating).
    fn from_f64(v: f64) -> Self;

    /// Converts between element types with `as` semantics.
    #[inline]
    fn cast<U: Scalar>(self) -> U {
        U::from_f64(self.as_f64())
    }
}

/// Floating-point element types.
///
/// Adds the rounding and transcendental functions needed by `normalize`,
/// `angle_to`, `lerp` and friends.
pub trait Real: Scalar {
    /// Tolerance for near-zero ranges, see [`scalar::inverse_lerp`](crate::scalar::inverse_lerp).
    const EPSILON: Self;

    /// Archimedes' constant.
    const PI: Self;

    /// Largest integer less than or equal to `self`.
    fn floor(self) -> Self;
    /// Smallest integer greater than or equal to `self`.
    fn ceil(self) -> Self;
    /// Nearest integer, half away from zero.
    fn round(self) -> Self;
    /// Sine (radians).
    fn sin(self) -> Self;
    /// Cosine (radians).
    fn cos(self) -> Self;
    /// Tangent (radians).
    fn tan(self) -> Self;
    /// Arcsine, NaN outside `[-1, 1]`.
    fn asin(self) -> Self;
    /// Arccosine, NaN outside `[-1, 1]`.
    fn acos(self) -> Self;
    /// Arctangent.
    fn atan(self) -> Self;
    /// Four-quadrant arctangent of `self / x`.
    fn atan2(self, x: Self) -> Self;
    /// Raises `self` to a floating-point power.
    fn powf(self, exp: Self) -> Self;
    /// `e^self`.
    fn exp(self) -> Self;
    /// Natural logarithm.
    fn ln(self) -> Self;
    /// `true` if neither infinite nor NaN.
    fn is_finite(self) -> bool;
    /// `true` if NaN.
    fn is_nan(self) -> bool;

    /// Fractional part: `self - floor(self)`, always in `[0, 1)` for finite input.
    #[inline]
    fn fract(self) -> Self {
        self - self.floor()
    }

    /// Converts a literal such as `0.5` into this type.
    #[inline]
    fn lit(v: f64) -> Self {
        Self::from_f64(v)
    }
}

impl Scalar for i32 {
    const PREFIX: &'static str = "i";
    const IS_FLOAT: bool = false;

    #[inline]
    fn sqrt(self) -> Self {
        (self as f64).sqrt() as i32
    }

    #[inline]
    fn abs(self) -> Self {
        i32::abs(self)
    }

    #[inline]
    fn min(self, other: Self) -> Self {
        Ord::min(self, other)
    }

    #[inline]
    fn max(self, other: Self) -> Self {
        Ord::max(self, other)
    }

    #[inline]
    fn as_f64(self) -> f64 {
        self as f64
    }

    #[inline]
    fn from_f64(v: f64) -> Self {
        v as i32
    }
}

macro_rules! impl_float_element {
    ($t:ident, $prefix:literal, $eps:expr) => {
        impl Scalar for $t {
            const PREFIX: &'static str = $prefix;
            const IS_FLOAT: bool = true;

            #[inline]
            fn sqrt(self) -> Self {
                $t::sqrt(self)
            }

            #[inline]
            fn abs(self) -> Self {
                $t::abs(self)
            }

            #[inline]
            fn min(self, other: Self) -> Self {
                $t::min(self, other)
            }

            #[inline]
            fn max(self, other: Self) -> Self {
                $t::max(self, other)
            }

            #[inline]
            fn as_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn from_f64(v: f64) -> Self {
                v as $t
            }
        }

        impl Real for $t {
            const EPSILON: Self = $eps;
            const PI: Self = std::$t::consts::PI;

            #[inline]
            fn floor(self) -> Self {
                $t::floor(self)
            }

            #[inline]
            fn ceil(self) -> Self {
                $t::ceil(self)
            }

            #[inline]
            fn round(self) -> Self {
                $t::round(self)
            }

            #[inline]
            fn sin(self) -> Self {
                $t::sin(self)
            }

            #[inline]
            fn cos(self) -> Self {
                $t::cos(self)
            }

            #[inline]
            fn tan(self) -> Self {
                $t::tan(self)
            }

            #[inline]
            fn asin(self) -> Self {
                $t::asin(self)
            }

            #[inline]
            fn acos(self) -> Self {
                $t::acos(self)
            }

            #[inline]
            fn atan(self) -> Self {
                $t::atan(self)
            }

            #[inline]
            fn atan2(self, x: Self) -> Self {
                $t::atan2(self, x)
            }

            #[inline]
            fn powf(self, exp: Self) -> Self {
                $t::powf(self, exp)
            }

            #[inline]
            fn exp(self) -> Self {
                $t::exp(self)
            }

            #[inline]
            fn ln(self) -> Self {
                $t::ln(self)
            }

            #[inline]
            fn is_finite(self) -> bool {
                $t::is_finite(self)
            }

            #[inline]
            fn is_nan(self) -> bool {
                $t::is_nan(self)
            }
        }
    };
}

impl_float_element!(f32, "", 1e-10);
impl_float_element!(f64, "d", 1e-14);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_sqrt_truncates() {
        assert_eq!(Scalar::sqrt(0_i32), 0);
        assert_eq!(Scalar::sqrt(8_i32), 2);
        assert_eq!(Scalar::sqrt(9_i32), 3);
        assert_eq!(Scalar::sqrt(24_i32), 4);
    }

    #[test]
    fn test_cast_truncates() {
        assert_eq!(2.9_f32.cast::<i32>(), 2);
        assert_eq!((-2.9_f64).cast::<i32>(), -2);
        assert_eq!(7_i32.cast::<f64>(), 7.0);
    }

    #[test]
    fn test_prefix() {
        assert_eq!(<i32 as Scalar>::PREFIX, "i");
        assert_eq!(<f32 as Scalar>::PREFIX, "");
        assert_eq!(<f64 as Scalar>::PREFIX, "d");
    }

    #[test]
    fn test_fract_is_floor_based() {
        assert!((Real::fract(1.25_f32) - 0.25).abs() < 1e-6);
        assert!((Real::fract(-0.25_f64) - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_float_min_max() {
        assert_eq!(Scalar::min(1.0_f32, 2.0), 1.0);
        assert_eq!(Scalar::max(1.0_f64, 2.0), 2.0);
        assert_eq!(Scalar::min(-3_i32, 2), -3);
    }
}
