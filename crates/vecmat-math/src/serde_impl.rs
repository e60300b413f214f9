//! `Serialize` / `Deserialize` for vectors and matrices.
//!
//! Enabled by the `serde` feature. A vector is a fixed-length sequence of
//! its components and a matrix is a sequence of its rows, so `Mat2` reads
//! as `[[1.0, 0.0], [0.0, 1.0]]` in JSON. Deserializing checks the length
//! at every level.

use std::fmt;

use serde::de::{self, Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeTuple, Serializer};
use vecmat_core::Scalar;

use crate::matrix::Matrix;
use crate::vector::Vector;

impl<T: Scalar + Serialize, const N: usize> Serialize for Vector<T, N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tup = serializer.serialize_tuple(N)?;
        for c in &self.0 {
            tup.serialize_element(c)?;
        }
        tup.end()
    }
}

impl<T: Scalar + Serialize, const R: usize, const C: usize> Serialize for Matrix<T, R, C> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tup = serializer.serialize_tuple(R)?;
        for row in &self.0 {
            tup.serialize_element(row)?;
        }
        tup.end()
    }
}

/// Fills `[E; N]` from exactly `N` sequence elements.
struct ArrayVisitor<E, const N: usize> {
    fill: E,
    expecting: &'static str,
}

impl<'de, E: Copy + Deserialize<'de>, const N: usize> Visitor<'de> for ArrayVisitor<E, N> {
    type Value = [E; N];

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "a sequence of {} {}", N, self.expecting)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<[E; N], A::Error> {
        let mut out = [self.fill; N];
        for (i, slot) in out.iter_mut().enumerate() {
            *slot = seq
                .next_element()?
                .ok_or_else(|| de::Error::invalid_length(i, &self))?;
        }
        if seq.next_element::<de::IgnoredAny>()?.is_some() {
            return Err(de::Error::invalid_length(N + 1, &self));
        }
        Ok(out)
    }
}

impl<'de, T: Scalar + Deserialize<'de>, const N: usize> Deserialize<'de> for Vector<T, N> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let visitor = ArrayVisitor::<T, N> {
            fill: T::ZERO,
            expecting: "components",
        };
        deserializer.deserialize_tuple(N, visitor).map(Vector)
    }
}

impl<'de, T: Scalar + Deserialize<'de>, const R: usize, const C: usize> Deserialize<'de>
    for Matrix<T, R, C>
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let visitor = ArrayVisitor::<Vector<T, C>, R> {
            fill: Vector::ZERO,
            expecting: "rows",
        };
        deserializer.deserialize_tuple(R, visitor).map(Matrix)
    }
}
