//! Fixed-size vector type.
//!
//! [`Vector<T, N>`] holds `N` components of element type `T` contiguously,
//! with no padding. The named aliases (`Vec3`, `IVec2`, `DVec4`, ...) cover
//! the 2, 3 and 4 component shapes for `i32`, `f32` and `f64`.
//!
//! # Usage
//!
//! ```rust
//! use vecmat_math::{vec3, Vec3};
//!
//! let v = vec3(3.0, 0.0, 4.0);
//! assert_eq!(v.length(), 5.0);
//! assert_eq!(v.normalized(), Vec3::new(0.6, 0.0, 0.8));
//! ```
//!
//! # Zero-length vectors
//!
//! [`normalized`](Vector::normalized), [`angle_to`](Vector::angle_to) and
//! [`reflect`](Vector::reflect) divide by a length or a squared length and do
//! not guard against zero. Floating-point results become NaN or infinite;
//! callers that can see zero vectors must check first.

use std::array;
use std::fmt;
use std::ops::{Index, IndexMut};

use vecmat_core::{scalar, Error, Real, Result, Scalar};

/// A vector of `N` components of type `T`.
///
/// Value semantics: `Copy`, compared component-wise.
///
/// # Components
///
/// Access via `.x()`, `.y()`, `.z()`, `.w()` (for the sizes that have them),
/// index `[0]..[N-1]`, or the checked [`get`](Vector::get) /
/// [`set`](Vector::set).
///
/// # Example
///
/// ```rust
/// use vecmat_math::{ivec2, IVec2};
///
/// let mut v = ivec2(12, 4);
/// assert_eq!(v, IVec2::new(12, 4));
/// v[1] = 5;
/// assert_eq!(v.y(), 5);
/// assert!(v.get(2).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>(pub(crate) [T; N]);

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// Number of components.
    pub const LEN: usize = N;

    /// All components zero.
    pub const ZERO: Self = Self([T::ZERO; N]);

    /// All components one.
    pub const ONE: Self = Self([T::ONE; N]);

    /// Creates from an array.
    #[inline]
    pub const fn from_array(a: [T; N]) -> Self {
        Self(a)
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [T; N] {
        self.0
    }

    /// Borrows the components as an array.
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    /// Mutably borrows the components as an array.
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.0
    }

    /// Creates a vector with all components set to the same value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vecmat_math::{DVec3, dvec3};
    ///
    /// assert_eq!(DVec3::splat(0.5), dvec3(0.5, 0.5, 0.5));
    /// ```
    #[inline]
    pub fn splat(v: T) -> Self {
        Self([v; N])
    }

    /// Short shader-style type name: `vec3`, `ivec2`, `dvec4`.
    pub fn type_name() -> String {
        format!("{}vec{}", T::PREFIX, N)
    }

    /// Returns component `i`, or an error if `i >= N`.
    #[inline]
    pub fn get(&self, i: usize) -> Result<T> {
        self.0
            .get(i)
            .copied()
            .ok_or_else(|| Error::index_out_of_bounds(i, N, Self::type_name()))
    }

    /// Sets component `i`, or returns an error if `i >= N`.
    #[inline]
    pub fn set(&mut self, i: usize, value: T) -> Result<()> {
        match self.0.get_mut(i) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(Error::index_out_of_bounds(i, N, Self::type_name())),
        }
    }

    /// Iterates over the components in order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }

    /// Applies `f` to every component.
    #[inline]
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Vector<U, N> {
        Vector(self.0.map(f))
    }

    /// Combines matching components of `self` and `other` with `f`.
    #[inline]
    pub fn zip_map<U, F: FnMut(T, T) -> U>(self, other: Self, mut f: F) -> Vector<U, N> {
        Vector(array::from_fn(|i| f(self.0[i], other.0[i])))
    }

    /// Sum of the components.
    #[inline]
    pub fn sum(self) -> T {
        self.0.iter().fold(T::ZERO, |acc, &c| acc + c)
    }

    /// Dot product: sum of the component-wise product.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vecmat_math::vec3;
    ///
    /// assert_eq!(vec3(1.0, 2.0, 3.0).dot(vec3(4.0, 5.0, 6.0)), 32.0);
    /// ```
    ///
    /// # Panics
    ///
    /// For `i32` elements the products and sum use plain integer arithmetic,
    /// so overflow panics in debug builds and wraps in release builds.
    /// `ivec2(40000, 40000).dot(..)` with itself already exceeds `i32::MAX`.
    #[inline]
    pub fn dot(self, other: Self) -> T {
        self.0
            .iter()
            .zip(other.0.iter())
            .fold(T::ZERO, |acc, (&a, &b)| acc + a * b)
    }

    /// Squared length, `dot(self, self)`.
    ///
    /// Exact for integer vectors and cheaper than [`length`](Vector::length);
    /// prefer it for comparisons.
    ///
    /// # Panics
    ///
    /// Overflows like [`dot`](Vector::dot) for large `i32` components.
    #[inline]
    pub fn length_squared(self) -> T {
        self.dot(self)
    }

    /// Length (magnitude) of the vector.
    ///
    /// For integer vectors the root is truncated to an integer:
    /// `ivec2(1, 1).length() == 1`. Use
    /// [`length_squared`](Vector::length_squared) for exact integer distances.
    ///
    /// # Panics
    ///
    /// The squared length is formed first, so an `i32` vector whose squared
    /// length exceeds `i32::MAX` overflows as in [`dot`](Vector::dot), even
    /// when the length itself would fit.
    #[inline]
    pub fn length(self) -> T {
        self.length_squared().sqrt()
    }

    /// Distance to `other`, the length of `other - self`.
    #[inline]
    pub fn dist_to(self, other: Self) -> T {
        (other - self).length()
    }

    /// Component-wise absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        self.map(Scalar::abs)
    }

    /// Component-wise minimum.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        self.zip_map(other, Scalar::min)
    }

    /// Component-wise maximum.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        self.zip_map(other, Scalar::max)
    }

    /// Clamps each component to `[min, max]`.
    #[inline]
    pub fn clamp(self, min: Self, max: Self) -> Self {
        self.max(min).min(max)
    }

    /// Returns the smallest component.
    #[inline]
    pub fn min_element(self) -> T {
        self.0.into_iter().reduce(Scalar::min).unwrap_or(T::ZERO)
    }

    /// Returns the largest component.
    #[inline]
    pub fn max_element(self) -> T {
        self.0.into_iter().reduce(Scalar::max).unwrap_or(T::ZERO)
    }

    /// Converts every component to another element type with `as` semantics.
    ///
    /// Float to integer truncates toward zero.
    ///
    /// ```rust
    /// use vecmat_math::{vec2, IVec2};
    ///
    /// let v: IVec2 = vec2(2.9, -1.5).cast();
    /// assert_eq!(v, IVec2::new(2, -1));
    /// ```
    #[inline]
    pub fn cast<U: Scalar>(self) -> Vector<U, N> {
        self.map(Scalar::cast)
    }
}

impl<T: Real, const N: usize> Vector<T, N> {
    /// Returns this vector scaled to unit length.
    ///
    /// No zero check: a zero vector yields NaN components.
    #[inline]
    #[must_use]
    pub fn normalized(self) -> Self {
        self / self.length()
    }

    /// Scales this vector to unit length in place.
    ///
    /// See [`normalized`](Vector::normalized) for the zero-length case.
    #[inline]
    pub fn normalize(&mut self) {
        *self = self.normalized();
    }

    /// Angle in radians between `self` and `other`.
    ///
    /// `acos(dot / (|self| * |other|))`; NaN if either vector is zero.
    #[inline]
    pub fn angle_to(self, other: Self) -> T {
        (self.dot(other) / (self.length() * other.length())).acos()
    }

    /// Reflects `self` about the plane with the given normal.
    ///
    /// The normal does not need unit length; the projection divides by
    /// `dot(normal, normal)`.
    ///
    /// ```rust
    /// use vecmat_math::vec2;
    ///
    /// let r = vec2(1.0, -1.0).reflect(vec2(0.0, 3.0));
    /// assert_eq!(r, vec2(1.0, 1.0));
    /// ```
    #[inline]
    pub fn reflect(self, normal: Self) -> Self {
        self - normal * (T::lit(2.0) * (self.dot(normal) / normal.dot(normal)))
    }

    /// Linear interpolation between `self` and `other`.
    ///
    /// `t = 0` returns `self`, `t = 1` returns `other`; other values
    /// extrapolate along the same line.
    #[inline]
    pub fn lerp(self, other: Self, t: T) -> Self {
        self + (other - self) * t
    }

    /// Evaluates the quadratic Bezier curve with control points `a`, `b`, `c`.
    ///
    /// `t` is not clamped.
    ///
    /// ```rust
    /// use vecmat_math::{vec2, Vec2};
    ///
    /// let p = Vec2::bezier(vec2(0.0, 0.0), vec2(1.0, 2.0), vec2(2.0, 0.0), 0.5);
    /// assert_eq!(p, vec2(1.0, 1.0));
    /// ```
    #[inline]
    pub fn bezier(a: Self, b: Self, c: Self, t: T) -> Self {
        Self(array::from_fn(|i| scalar::bezier(a.0[i], b.0[i], c.0[i], t)))
    }

    /// Component-wise floor.
    #[inline]
    pub fn floor(self) -> Self {
        self.map(Real::floor)
    }

    /// Component-wise ceiling.
    #[inline]
    pub fn ceil(self) -> Self {
        self.map(Real::ceil)
    }

    /// Component-wise fractional part, `v - floor(v)`.
    #[inline]
    pub fn fract(self) -> Self {
        self.map(Real::fract)
    }

    /// Returns true if all components are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(self) -> bool {
        self.0.iter().all(|c| c.is_finite())
    }

    /// Returns true if any component is NaN.
    #[inline]
    pub fn is_nan(self) -> bool {
        self.0.iter().any(|c| c.is_nan())
    }
}

impl<T: Scalar, const N: usize> Default for Vector<T, N> {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl<T: Scalar, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        match self.0.get(i) {
            Some(c) => c,
            None => panic!("{}", Error::index_out_of_bounds(i, N, Self::type_name())),
        }
    }
}

impl<T: Scalar, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        match self.0.get_mut(i) {
            Some(c) => c,
            None => panic!("{}", Error::index_out_of_bounds(i, N, Self::type_name())),
        }
    }
}

// "(x, y, ...)", for logs only
impl<T: Scalar, const N: usize> fmt::Display for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(c, f)?;
        }
        f.write_str(")")
    }
}

impl<T: Scalar, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(a: [T; N]) -> Self {
        Self::from_array(a)
    }
}

impl<T: Scalar, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(v: Vector<T, N>) -> [T; N] {
        v.to_array()
    }
}

impl<T: Scalar, const N: usize> AsRef<[T]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T: Scalar, const N: usize> IntoIterator for Vector<T, N> {
    type Item = T;
    type IntoIter = array::IntoIter<T, N>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
