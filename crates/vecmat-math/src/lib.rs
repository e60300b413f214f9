//! # vecmat-math
//!
//! Fixed-size vectors and matrices for graphics and geometry code.
//!
//! This crate provides:
//!
//! - [`Vector`] - 2, 3 and 4 component vectors over `i32`, `f32` and `f64`
//! - [`Matrix`] - row-major matrices from 2x2 to 4x4, rectangular shapes included
//! - Swizzles, both generic ([`Vector::swizzle`]) and named (`.xy()`, `.zyx()`, `.set_xz(..)`)
//! - Geometry helpers (dot, cross, lerp, reflect, bezier, ...), also as free
//!   functions in [`geometry`]
//! - 4x4 transform helpers (scale, translation, clearing either)
//!
//! # Design
//!
//! Both types are thin wrappers over arrays with the component count fixed
//! by a const generic, so they are `Copy` and stack-allocated. Matrices are
//! **row-major** and multiply **column vectors**:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! Nothing here guards against zero: normalizing a zero vector or clearing
//! the scale of a degenerate matrix yields NaN, and integer division by zero
//! panics as it does for plain `i32`.
//!
//! # Usage
//!
//! ```rust
//! use vecmat_math::{ivec3, vec2, vec3, Mat3, Vec3};
//!
//! let v = vec3(1.0, 2.0, 3.0);
//! assert_eq!(v.zyx(), vec3(3.0, 2.0, 1.0));
//! assert_eq!(v.xy() * 2.0, vec2(2.0, 4.0));
//!
//! let rotate_z = Mat3::from_rows_array([
//!     [0.0, -1.0, 0.0],
//!     [1.0, 0.0, 0.0],
//!     [0.0, 0.0, 1.0],
//! ]);
//! assert_eq!(rotate_z * Vec3::UNIT_X, Vec3::UNIT_Y);
//!
//! // integer lengths truncate
//! assert_eq!(ivec3(1, 1, 1).length(), 1);
//! ```
//!
//! # Features
//!
//! - `glam` (default) - `From` conversions to and from [`glam`] types
//! - `serde` - `Serialize`/`Deserialize`, vectors as sequences, matrices as rows
//! - `approx` - `AbsDiffEq`, `RelativeEq` and `UlpsEq` for float vectors and matrices
//!
//! # Dependencies
//!
//! - [`vecmat-core`] - Element traits, errors, scalar helpers
//! - [`tracing`] - Diagnostics for singular inversions and degenerate transforms
//!
//! [`vecmat-core`]: vecmat_core

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod components;
mod convert;
pub mod geometry;
mod matrix;
mod ops;
mod square;
mod swizzle;
mod transform;
mod vector;

#[cfg(feature = "approx")]
mod approx_impl;
#[cfg(feature = "glam")]
mod glam_interop;
#[cfg(feature = "serde")]
mod serde_impl;

pub use matrix::Matrix;
pub use vector::Vector;

pub use vecmat_core::{scalar, Error, Real, Result, Scalar};

/// 2-component `f32` vector.
pub type Vec2 = Vector<f32, 2>;
/// 3-component `f32` vector.
pub type Vec3 = Vector<f32, 3>;
/// 4-component `f32` vector.
pub type Vec4 = Vector<f32, 4>;
/// 2-component `i32` vector.
pub type IVec2 = Vector<i32, 2>;
/// 3-component `i32` vector.
pub type IVec3 = Vector<i32, 3>;
/// 4-component `i32` vector.
pub type IVec4 = Vector<i32, 4>;
/// 2-component `f64` vector.
pub type DVec2 = Vector<f64, 2>;
/// 3-component `f64` vector.
pub type DVec3 = Vector<f64, 3>;
/// 4-component `f64` vector.
pub type DVec4 = Vector<f64, 4>;

/// 2x2 `f32` matrix.
pub type Mat2 = Matrix<f32, 2, 2>;
/// 3x3 `f32` matrix.
pub type Mat3 = Matrix<f32, 3, 3>;
/// 4x4 `f32` matrix.
pub type Mat4 = Matrix<f32, 4, 4>;
/// 2x2 `f64` matrix.
pub type DMat2 = Matrix<f64, 2, 2>;
/// 3x3 `f64` matrix.
pub type DMat3 = Matrix<f64, 3, 3>;
/// 4x4 `f64` matrix.
pub type DMat4 = Matrix<f64, 4, 4>;

/// `f32` matrix, 2 rows by 3 columns.
pub type Mat2x3 = Matrix<f32, 2, 3>;
/// `f32` matrix, 2 rows by 4 columns.
pub type Mat2x4 = Matrix<f32, 2, 4>;
/// `f32` matrix, 3 rows by 2 columns.
pub type Mat3x2 = Matrix<f32, 3, 2>;
/// `f32` matrix, 3 rows by 4 columns.
pub type Mat3x4 = Matrix<f32, 3, 4>;
/// `f32` matrix, 4 rows by 2 columns.
pub type Mat4x2 = Matrix<f32, 4, 2>;
/// `f32` matrix, 4 rows by 3 columns.
pub type Mat4x3 = Matrix<f32, 4, 3>;
/// `f64` matrix, 2 rows by 3 columns.
pub type DMat2x3 = Matrix<f64, 2, 3>;
/// `f64` matrix, 2 rows by 4 columns.
pub type DMat2x4 = Matrix<f64, 2, 4>;
/// `f64` matrix, 3 rows by 2 columns.
pub type DMat3x2 = Matrix<f64, 3, 2>;
/// `f64` matrix, 3 rows by 4 columns.
pub type DMat3x4 = Matrix<f64, 3, 4>;
/// `f64` matrix, 4 rows by 2 columns.
pub type DMat4x2 = Matrix<f64, 4, 2>;
/// `f64` matrix, 4 rows by 3 columns.
pub type DMat4x3 = Matrix<f64, 4, 3>;

macro_rules! vector_constructors {
    ($($name:ident -> $alias:ident ($($c:ident),+): $t:ty;)+) => {
        $(
            #[doc = concat!("Shorthand for [`", stringify!($alias), "::new`].")]
            #[inline]
            pub const fn $name($($c: $t),+) -> $alias {
                Vector([$($c),+])
            }
        )+
    };
}

vector_constructors! {
    vec2 -> Vec2 (x, y): f32;
    vec3 -> Vec3 (x, y, z): f32;
    vec4 -> Vec4 (x, y, z, w): f32;
    ivec2 -> IVec2 (x, y): i32;
    ivec3 -> IVec3 (x, y, z): i32;
    ivec4 -> IVec4 (x, y, z, w): i32;
    dvec2 -> DVec2 (x, y): f64;
    dvec3 -> DVec3 (x, y, z): f64;
    dvec4 -> DVec4 (x, y, z, w): f64;
}

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use vecmat_math::prelude::*;
///
/// let v: Vec3 = vec3(1.0, 0.0, 0.0);
/// assert_eq!(Mat3::identity() * v, v);
/// ```
pub mod prelude {
    pub use crate::{
        dvec2, dvec3, dvec4, ivec2, ivec3, ivec4, vec2, vec3, vec4, DMat2, DMat3, DMat4, DVec2,
        DVec3, DVec4, IVec2, IVec3, IVec4, Mat2, Mat3, Mat4, Matrix, Vec2, Vec3, Vec4, Vector,
    };
    pub use vecmat_core::prelude::*;
}
