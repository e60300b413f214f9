//! Swizzles: reading and writing a vector's components in another order.
//!
//! The general form takes the component indices as an array:
//!
//! ```rust
//! use vecmat_math::{vec4, vec2, vec3};
//!
//! let v = vec4(1.0, 2.0, 3.0, 4.0);
//! assert_eq!(v.swizzle([3, 2, 1]), vec3(4.0, 3.0, 2.0));
//! assert_eq!(v.swizzle([0, 0]), vec2(1.0, 1.0));
//! ```
//!
//! Named accessors exist for every combination of 2 to 4 components a
//! vector has: `v.xy()`, `v.zx()`, `v.yyy()`, `v.wzyx()`. A write accessor
//! (`set_xy`, `set_zyx`) exists exactly when every component in the name is
//! distinct; `xx` has no setter because the write-back would be ambiguous.

use std::array;

use vecmat_core::{Error, Result, Scalar};

use crate::vector::Vector;

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// Gathers the components at `indices` into a new vector.
    ///
    /// # Panics
    ///
    /// Panics if any index is `>= N`.
    #[inline]
    pub fn swizzle<const M: usize>(self, indices: [usize; M]) -> Vector<T, M> {
        Vector(indices.map(|i| self[i]))
    }

    /// Checked form of [`swizzle`](Vector::swizzle).
    pub fn try_swizzle<const M: usize>(self, indices: [usize; M]) -> Result<Vector<T, M>> {
        self.check_indices(&indices)?;
        Ok(Vector(array::from_fn(|k| self.0[indices[k]])))
    }

    /// Writes `values` into the components named by `indices`.
    ///
    /// Fails with [`Error::RepeatedComponent`] when an index appears twice and
    /// with [`Error::IndexOutOfBounds`] when an index is `>= N`. Nothing is
    /// written on failure.
    ///
    /// ```rust
    /// use vecmat_math::{ivec2, ivec4};
    ///
    /// let mut v = ivec4(1, 2, 3, 4);
    /// v.set_swizzle([3, 0], ivec2(9, 8)).unwrap();
    /// assert_eq!(v, ivec4(8, 2, 3, 9));
    /// assert!(v.set_swizzle([1, 1], ivec2(0, 0)).is_err());
    /// ```
    pub fn set_swizzle<const M: usize>(
        &mut self,
        indices: [usize; M],
        values: Vector<T, M>,
    ) -> Result<()> {
        self.check_indices(&indices)?;
        for (k, &i) in indices.iter().enumerate() {
            if indices[..k].contains(&i) {
                return Err(Error::repeated_component(i, Self::type_name()));
            }
        }
        for (&i, value) in indices.iter().zip(values) {
            self.0[i] = value;
        }
        Ok(())
    }

    fn check_indices(&self, indices: &[usize]) -> Result<()> {
        match indices.iter().find(|&&i| i >= N) {
            Some(&i) => Err(Error::index_out_of_bounds(i, N, Self::type_name())),
            None => Ok(()),
        }
    }
}

// Named accessors for every 2-, 3- and 4-component swizzle of each size.
include!(concat!(env!("OUT_DIR"), "/swizzles.rs"));
