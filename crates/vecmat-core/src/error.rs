//! Error types for vecmat operations.
//!
//! Vector and matrix operators panic on misuse, the same way slice indexing
//! does. Every panicking accessor also has a checked twin that reports the
//! failure through [`Error`] instead.
//!
//! # Overview
//!
//! The [`Error`] enum covers:
//! - Component access outside `[0, N)` on a vector
//! - Element access outside `R x C` on a matrix
//! - Swizzle writes that name the same component twice
//! - Features that exist in the API but are not implemented
//!
//! # Usage
//!
//! ```rust
//! use vecmat_core::{Error, Result};
//!
//! fn component(values: &[f32; 3], i: usize) -> Result<f32> {
//!     values
//!         .get(i)
//!         .copied()
//!         .ok_or(Error::index_out_of_bounds(i, 3, "vec3"))
//! }
//!
//! assert!(component(&[1.0, 2.0, 3.0], 3).is_err());
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in vector and matrix operations.
///
/// Type names are the short shader-style names (`vec3`, `ivec2`, `dmat4`,
/// `mat2x3`) so messages read the same whatever the generic parameters are.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Component index is outside the vector.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vecmat_core::Error;
    ///
    /// let err = Error::index_out_of_bounds(4, 3, "vec3");
    /// assert_eq!(err.to_string(), "vec3 index out of bounds: 4 (len 3)");
    /// ```
    #[error("{type_name} index out of bounds: {index} (len {len})")]
    IndexOutOfBounds {
        /// Index that was accessed
        index: usize,
        /// Number of components
        len: usize,
        /// Short type name
        type_name: String,
    },

    /// Row or column is outside the matrix.
    #[error("{type_name} index out of bounds: [{row}, {col}] (shape {rows}x{cols})")]
    MatrixIndexOutOfBounds {
        /// Row that was accessed
        row: usize,
        /// Column that was accessed
        col: usize,
        /// Row count
        rows: usize,
        /// Column count
        cols: usize,
        /// Short type name
        type_name: String,
    },

    /// A swizzle write names the same component more than once.
    ///
    /// Reading `v.xx()` is fine; writing through it has no single answer.
    #[error("{type_name} swizzle writes component {index} more than once")]
    RepeatedComponent {
        /// Component named twice
        index: usize,
        /// Short type name
        type_name: String,
    },

    /// The operation is part of the API but has no implementation.
    #[error("{feature} is not implemented")]
    Unimplemented {
        /// Name of the missing operation
        feature: &'static str,
    },
}

impl Error {
    /// Creates an [`Error::IndexOutOfBounds`] error.
    #[inline]
    pub fn index_out_of_bounds(index: usize, len: usize, type_name: impl Into<String>) -> Self {
        Self::IndexOutOfBounds {
            index,
            len,
            type_name: type_name.into(),
        }
    }

    /// Creates an [`Error::MatrixIndexOutOfBounds`] error.
    ///
    /// # Arguments
    ///
    /// * `at` - `(row, col)` that was accessed
    /// * `shape` - `(rows, cols)` of the matrix
    /// * `type_name` - Short matrix name such as `mat3`
    #[inline]
    pub fn matrix_index_out_of_bounds(
        at: (usize, usize),
        shape: (usize, usize),
        type_name: impl Into<String>,
    ) -> Self {
        Self::MatrixIndexOutOfBounds {
            row: at.0,
            col: at.1,
            rows: shape.0,
            cols: shape.1,
            type_name: type_name.into(),
        }
    }

    /// Creates an [`Error::RepeatedComponent`] error.
    #[inline]
    pub fn repeated_component(index: usize, type_name: impl Into<String>) -> Self {
        Self::RepeatedComponent {
            index,
            type_name: type_name.into(),
        }
    }

    /// Creates an [`Error::Unimplemented`] error.
    #[inline]
    pub fn unimplemented(feature: &'static str) -> Self {
        Self::Unimplemented { feature }
    }

    /// Returns `true` if this is a bounds-related error.
    #[inline]
    pub fn is_bounds_error(&self) -> bool {
        matches!(
            self,
            Self::IndexOutOfBounds { .. } | Self::MatrixIndexOutOfBounds { .. }
        )
    }

    /// Returns `true` if this reports a missing implementation.
    #[inline]
    pub fn is_unimplemented(&self) -> bool {
        matches!(self, Self::Unimplemented { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_out_of_bounds() {
        let err = Error::index_out_of_bounds(7, 4, "ivec4");
        let msg = err.to_string();
        assert!(msg.contains("ivec4"));
        assert!(msg.contains('7'));
        assert!(msg.contains('4'));
        assert!(err.is_bounds_error());
    }

    #[test]
    fn test_matrix_index_out_of_bounds() {
        let err = Error::matrix_index_out_of_bounds((2, 5), (3, 3), "dmat3");
        let msg = err.to_string();
        assert!(msg.contains("[2, 5]"));
        assert!(msg.contains("3x3"));
        assert!(msg.contains("dmat3"));
        assert!(err.is_bounds_error());
    }

    #[test]
    fn test_repeated_component() {
        let err = Error::repeated_component(1, "vec2");
        assert!(err.to_string().contains("more than once"));
        assert!(!err.is_bounds_error());
    }

    #[test]
    fn test_unimplemented() {
        let err = Error::unimplemented("rotation extraction");
        assert_eq!(err.to_string(), "rotation extraction is not implemented");
        assert!(err.is_unimplemented());
    }
}
