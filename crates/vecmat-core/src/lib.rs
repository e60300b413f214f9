//! # vecmat-core
//!
//! Core types shared by the vecmat crates.
//!
//! - [`Scalar`], [`Real`] - element traits for vector and matrix components
//! - [`scalar`] - free scalar helpers (floor, fract, lerp, bezier, ...)
//! - [`Error`], [`Result`] - errors reported by checked accessors
//!
//! ## Crate Structure
//!
//! ```text
//! vecmat-core (this crate)
//!    ^
//!    |
//!    +-- vecmat-math (vectors, matrices, swizzles)
//!    +-- vecmat-tests (integration tests)
//! ```
//!
//! ## Element types
//!
//! | Type  | Prefix | Vectors           | Matrices          |
//! |-------|--------|-------------------|-------------------|
//! | `i32` | `i`    | `ivec2`..`ivec4`  | -                 |
//! | `f32` |        | `vec2`..`vec4`    | `mat2`..`mat4`    |
//! | `f64` | `d`    | `dvec2`..`dvec4`  | `dmat2`..`dmat4`  |

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod element;
pub mod error;
pub mod scalar;

pub use element::{Real, Scalar};
pub use error::*;

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use vecmat_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::element::{Real, Scalar};
    pub use crate::error::{Error, Result};
}
