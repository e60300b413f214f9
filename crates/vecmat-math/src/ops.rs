//! Arithmetic operators for [`Vector`].
//!
//! Vector-vector operators are component-wise. Vector-scalar operators
//! broadcast the scalar to every component. Division is unchecked: float
//! division by zero follows IEEE-754, integer division by zero panics.

use std::array;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use vecmat_core::Scalar;

use crate::vector::Vector;

macro_rules! impl_componentwise_op {
    ($op:ident, $method:ident, $op_assign:ident, $method_assign:ident, $sym:tt) => {
        // Vector op Vector
        impl<T: Scalar, const N: usize> $op for Vector<T, N> {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: Self) -> Self {
                Self(array::from_fn(|i| self.0[i] $sym rhs.0[i]))
            }
        }

        // Vector op T
        impl<T: Scalar, const N: usize> $op<T> for Vector<T, N> {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: T) -> Self {
                Self(self.0.map(|c| c $sym rhs))
            }
        }

        impl<T: Scalar, const N: usize> $op_assign for Vector<T, N> {
            #[inline]
            fn $method_assign(&mut self, rhs: Self) {
                *self = *self $sym rhs;
            }
        }

        impl<T: Scalar, const N: usize> $op_assign<T> for Vector<T, N> {
            #[inline]
            fn $method_assign(&mut self, rhs: T) {
                *self = *self $sym rhs;
            }
        }
    };
}

impl_componentwise_op!(Add, add, AddAssign, add_assign, +);
impl_componentwise_op!(Sub, sub, SubAssign, sub_assign, -);
impl_componentwise_op!(Mul, mul, MulAssign, mul_assign, *);
impl_componentwise_op!(Div, div, DivAssign, div_assign, /);

impl<T: Scalar, const N: usize> Neg for Vector<T, N> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.map(|c| -c)
    }
}

// scalar * Vector, one impl per element type (orphan rules)
macro_rules! impl_scalar_lhs_mul {
    ($($t:ty),+) => {
        $(
            impl<const N: usize> Mul<Vector<$t, N>> for $t {
                type Output = Vector<$t, N>;

                #[inline]
                fn mul(self, rhs: Vector<$t, N>) -> Vector<$t, N> {
                    rhs * self
                }
            }
        )+
    };
}

impl_scalar_lhs_mul!(i32, f32, f64);

impl<T: Scalar, const N: usize> std::iter::Sum for Vector<T, N> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, v| acc + v)
    }
}
