//! Fixed-size matrix type.
//!
//! [`Matrix<T, R, C>`] stores `R` rows, each a [`Vector<T, C>`]. Rows are
//! stored; columns are gathered on demand, one component from each row.
//!
//! # Convention
//!
//! Matrices are **row-major** and multiply **column vectors**:
//!
//! ```text
//! | m00 m01 m02 |   | x |   | row0 . v |
//! | m10 m11 m12 | * | y | = | row1 . v |
//! | m20 m21 m22 |   | z |   | row2 . v |
//! ```
//!
//! Matrix products are only defined when the inner dimensions agree; an
//! `R x K` times `K x C` product is checked by the type system, so a shape
//! mismatch does not compile.
//!
//! # Usage
//!
//! ```rust
//! use vecmat_math::{vec2, Mat2, Mat2x3, Mat3x2};
//!
//! let a = Mat2x3::from_rows_array([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
//! let b: Mat3x2 = a.transpose();
//! let square: Mat2 = a * b;
//! assert_eq!(square[(0, 0)], 14.0);
//! assert_eq!(Mat2::identity() * vec2(3.0, 4.0), vec2(3.0, 4.0));
//! ```

use std::array;
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use vecmat_core::{Error, Result, Scalar};

use crate::vector::Vector;

/// A matrix of `R` rows by `C` columns with elements of type `T`.
///
/// Stored in row-major order as `R` contiguous row vectors. Use
/// [`Matrix::from_rows`] or [`Matrix::from_cols`] to construct from vectors.
///
/// # Example
///
/// ```rust
/// use vecmat_math::{vec3, Mat3};
///
/// let identity = Mat3::identity();
/// let v = vec3(1.0, 2.0, 3.0);
/// assert_eq!(identity * v, v);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Matrix<T, const R: usize, const C: usize>(pub(crate) [Vector<T, C>; R]);

impl<T: Scalar, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Number of rows.
    pub const ROWS: usize = R;

    /// Number of columns.
    pub const COLS: usize = C;

    /// Zero matrix.
    pub const ZERO: Self = Self([Vector::<T, C>::ZERO; R]);

    /// Creates a matrix from row vectors.
    #[inline]
    pub const fn from_rows(rows: [Vector<T, C>; R]) -> Self {
        Self(rows)
    }

    /// Creates a matrix from row arrays.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vecmat_math::Mat2;
    ///
    /// let m = Mat2::from_rows_array([[1.0, 0.0], [0.0, 1.0]]);
    /// assert_eq!(m, Mat2::identity());
    /// ```
    #[inline]
    pub fn from_rows_array(rows: [[T; C]; R]) -> Self {
        Self(rows.map(Vector))
    }

    /// Creates a matrix from column vectors.
    ///
    /// Transposes the input (columns become rows internally).
    #[inline]
    pub fn from_cols(cols: [Vector<T, R>; C]) -> Self {
        Self(array::from_fn(|r| Vector(array::from_fn(|c| cols[c].0[r]))))
    }

    /// Converts to row arrays.
    #[inline]
    pub fn to_rows_array(self) -> [[T; C]; R] {
        self.0.map(Vector::to_array)
    }

    /// Short shader-style type name: `mat3`, `dmat4`, `mat2x3`.
    pub fn type_name() -> String {
        if R == C {
            format!("{}mat{}", T::PREFIX, R)
        } else {
            format!("{}mat{}x{}", T::PREFIX, R, C)
        }
    }

    /// Borrows the rows.
    #[inline]
    pub const fn rows(&self) -> &[Vector<T, C>; R] {
        &self.0
    }

    /// Returns row `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= R`.
    #[inline]
    pub fn row(&self, i: usize) -> Vector<T, C> {
        self[i]
    }

    /// Mutable reference to row `i`.
    #[inline]
    pub fn row_mut(&mut self, i: usize) -> &mut Vector<T, C> {
        &mut self[i]
    }

    /// Replaces row `i`.
    #[inline]
    pub fn set_row(&mut self, i: usize, row: Vector<T, C>) {
        self[i] = row;
    }

    /// Gathers column `j`, component `j` of every row.
    ///
    /// # Panics
    ///
    /// Panics if `j >= C`, reporting `j` against the column count.
    #[inline]
    pub fn col(&self, j: usize) -> Vector<T, R> {
        if j >= C {
            panic!("{}", Error::index_out_of_bounds(j, C, Self::type_name()));
        }
        Vector(self.0.map(|row| row.0[j]))
    }

    /// Scatters `col` into column `j`.
    ///
    /// # Panics
    ///
    /// Panics if `j >= C`, as [`col`](Matrix::col) does.
    #[inline]
    pub fn set_col(&mut self, j: usize, col: Vector<T, R>) {
        if j >= C {
            panic!("{}", Error::index_out_of_bounds(j, C, Self::type_name()));
        }
        for (row, value) in self.0.iter_mut().zip(col) {
            row.0[j] = value;
        }
    }

    /// Returns element `[row, col]`, or an error when out of range.
    pub fn get(&self, row: usize, col: usize) -> Result<T> {
        if row >= R || col >= C {
            return Err(Error::matrix_index_out_of_bounds((row, col), (R, C), Self::type_name()));
        }
        Ok(self.0[row].0[col])
    }

    /// Sets element `[row, col]`, or returns an error when out of range.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        if row >= R || col >= C {
            return Err(Error::matrix_index_out_of_bounds((row, col), (R, C), Self::type_name()));
        }
        self.0[row].0[col] = value;
        Ok(())
    }

    /// Returns the transpose: a `C x R` matrix whose rows are these columns.
    #[inline]
    pub fn transpose(&self) -> Matrix<T, C, R> {
        Matrix(array::from_fn(|j| Vector(self.0.map(|row| row.0[j]))))
    }

    /// Applies `f` to every element.
    #[inline]
    pub fn map<U, F: FnMut(T) -> U>(self, mut f: F) -> Matrix<U, R, C> {
        Matrix(self.0.map(|row| row.map(&mut f)))
    }

    /// Converts every element to another type with `as` semantics.
    #[inline]
    pub fn cast<U: Scalar>(self) -> Matrix<U, R, C> {
        self.map(Scalar::cast)
    }
}

impl<T: Scalar, const N: usize> Matrix<T, N, N> {
    /// Identity matrix.
    pub fn identity() -> Self {
        Self::from_diagonal(Vector::ONE)
    }

    /// Creates a matrix with `d` on the diagonal and zero elsewhere.
    pub fn from_diagonal(d: Vector<T, N>) -> Self {
        let mut m = Self::ZERO;
        m.set_diagonal(d);
        m
    }

    /// Elements `[i, i]`.
    #[inline]
    pub fn diagonal(&self) -> Vector<T, N> {
        Vector(array::from_fn(|i| self.0[i].0[i]))
    }

    /// Overwrites elements `[i, i]`.
    #[inline]
    pub fn set_diagonal(&mut self, d: Vector<T, N>) {
        for (i, value) in d.into_iter().enumerate() {
            self.0[i].0[i] = value;
        }
    }

    /// Sum of the diagonal.
    #[inline]
    pub fn trace(&self) -> T {
        self.diagonal().sum()
    }
}

impl<T: Scalar, const R: usize, const C: usize> Default for Matrix<T, R, C> {
    fn default() -> Self {
        Self::ZERO
    }
}

// Row access
impl<T: Scalar, const R: usize, const C: usize> Index<usize> for Matrix<T, R, C> {
    type Output = Vector<T, C>;

    #[inline]
    fn index(&self, i: usize) -> &Vector<T, C> {
        match self.0.get(i) {
            Some(row) => row,
            None => panic!("{}", Error::matrix_index_out_of_bounds((i, 0), (R, C), Self::type_name())),
        }
    }
}

impl<T: Scalar, const R: usize, const C: usize> IndexMut<usize> for Matrix<T, R, C> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut Vector<T, C> {
        match self.0.get_mut(i) {
            Some(row) => row,
            None => panic!("{}", Error::matrix_index_out_of_bounds((i, 0), (R, C), Self::type_name())),
        }
    }
}

// Element access: row checked here, column by the row's own indexer
impl<T: Scalar, const R: usize, const C: usize> Index<(usize, usize)> for Matrix<T, R, C> {
    type Output = T;

    #[inline]
    fn index(&self, (r, c): (usize, usize)) -> &T {
        &self[r][c]
    }
}

impl<T: Scalar, const R: usize, const C: usize> IndexMut<(usize, usize)> for Matrix<T, R, C> {
    #[inline]
    fn index_mut(&mut self, (r, c): (usize, usize)) -> &mut T {
        &mut self[r][c]
    }
}

// Matrix * Vector
impl<T: Scalar, const R: usize, const C: usize> Mul<Vector<T, C>> for Matrix<T, R, C> {
    type Output = Vector<T, R>;

    #[inline]
    fn mul(self, rhs: Vector<T, C>) -> Vector<T, R> {
        Vector(self.0.map(|row| row.dot(rhs)))
    }
}

// Matrix * Matrix, inner dimension K
impl<T: Scalar, const R: usize, const K: usize, const C: usize> Mul<Matrix<T, K, C>>
    for Matrix<T, R, K>
{
    type Output = Matrix<T, R, C>;

    #[inline]
    fn mul(self, rhs: Matrix<T, K, C>) -> Matrix<T, R, C> {
        let cols = rhs.transpose();
        Matrix(self.0.map(|row| Vector(cols.0.map(|col| row.dot(col)))))
    }
}

impl<T: Scalar, const R: usize, const C: usize> MulAssign<Matrix<T, C, C>> for Matrix<T, R, C> {
    #[inline]
    fn mul_assign(&mut self, rhs: Matrix<T, C, C>) {
        *self = *self * rhs;
    }
}

// Matrix * T
impl<T: Scalar, const R: usize, const C: usize> Mul<T> for Matrix<T, R, C> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: T) -> Self {
        Self(self.0.map(|row| row * rhs))
    }
}

impl<T: Scalar, const R: usize, const C: usize> MulAssign<T> for Matrix<T, R, C> {
    #[inline]
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

impl<T: Scalar, const R: usize, const C: usize> Div<T> for Matrix<T, R, C> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: T) -> Self {
        Self(self.0.map(|row| row / rhs))
    }
}

impl<T: Scalar, const R: usize, const C: usize> DivAssign<T> for Matrix<T, R, C> {
    #[inline]
    fn div_assign(&mut self, rhs: T) {
        *self = *self / rhs;
    }
}

impl<T: Scalar, const R: usize, const C: usize> Add for Matrix<T, R, C> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self(array::from_fn(|i| self.0[i] + rhs.0[i]))
    }
}

impl<T: Scalar, const R: usize, const C: usize> AddAssign for Matrix<T, R, C> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Scalar, const R: usize, const C: usize> Sub for Matrix<T, R, C> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self(array::from_fn(|i| self.0[i] - rhs.0[i]))
    }
}

impl<T: Scalar, const R: usize, const C: usize> SubAssign for Matrix<T, R, C> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Scalar, const R: usize, const C: usize> Neg for Matrix<T, R, C> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self(self.0.map(|row| -row))
    }
}

macro_rules! impl_scalar_lhs_mul {
    ($($t:ty),+) => {
        $(
            impl<const R: usize, const C: usize> Mul<Matrix<$t, R, C>> for $t {
                type Output = Matrix<$t, R, C>;

                #[inline]
                fn mul(self, rhs: Matrix<$t, R, C>) -> Matrix<$t, R, C> {
                    rhs * self
                }
            }
        )+
    };
}

impl_scalar_lhs_mul!(i32, f32, f64);

// "((a, b), (c, d))", for logs only
impl<T: Scalar, const R: usize, const C: usize> fmt::Display for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, row) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(row, f)?;
        }
        f.write_str(")")
    }
}

impl<T: Scalar, const R: usize, const C: usize> From<[[T; C]; R]> for Matrix<T, R, C> {
    #[inline]
    fn from(rows: [[T; C]; R]) -> Self {
        Self::from_rows_array(rows)
    }
}

impl<T: Scalar, const R: usize, const C: usize> From<[Vector<T, C>; R]> for Matrix<T, R, C> {
    #[inline]
    fn from(rows: [Vector<T, C>; R]) -> Self {
        Self::from_rows(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{vec2, vec3, DMat3, Mat2, Mat2x3, Mat3, Mat3x2, Mat4};

    fn sample() -> Mat3 {
        Mat3::from_rows_array([
            [1.0, 2.0, 3.0],
            [4.0, 5.0, 6.0],
            [7.0, 8.0, 9.0],
        ])
    }

    #[test]
    fn test_mat_identity() {
        let v = vec3(1.0, 2.0, 3.0);
        assert_eq!(Mat3::identity() * v, v);
        assert_eq!(Mat3::identity() * sample(), sample());
        assert_eq!(sample() * Mat3::identity(), sample());
    }

    #[test]
    fn test_mat_rows_and_cols() {
        let m = sample();
        assert_eq!(m.row(1), vec3(4.0, 5.0, 6.0));
        assert_eq!(m.col(1), vec3(2.0, 5.0, 8.0));
        assert_eq!(Mat3::from_cols([m.col(0), m.col(1), m.col(2)]), m);

        let mut n = m;
        n.set_col(0, vec3(0.0, 0.0, 0.0));
        assert_eq!(n.row(2), vec3(0.0, 8.0, 9.0));
        n.set_row(0, Vector::ONE);
        assert_eq!(n[(0, 2)], 1.0);
    }

    #[test]
    fn test_mat_transpose() {
        let m = sample();
        let t = m.transpose();
        assert_eq!(t[(0, 1)], 4.0);
        assert_eq!(t[(1, 0)], 2.0);
        assert_eq!(t.transpose(), m);

        let r = Mat2x3::from_rows_array([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        let rt: Mat3x2 = r.transpose();
        assert_eq!(rt.row(2), vec2(3.0, 6.0));
    }

    #[test]
    fn test_mat_diagonal_trace() {
        let mut m = sample();
        assert_eq!(m.diagonal(), vec3(1.0, 5.0, 9.0));
        assert_eq!(m.trace(), 15.0);
        m.set_diagonal(Vector::ZERO);
        assert_eq!(m.trace(), 0.0);
        assert_eq!(m[(0, 1)], 2.0);
    }

    #[test]
    fn test_mat_mul_rectangular() {
        let a = Mat2x3::from_rows_array([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        let b = a.transpose();
        let c: Mat2 = a * b;
        assert_eq!(c, Mat2::from_rows_array([[14.0, 32.0], [32.0, 77.0]]));
        assert_eq!(a * vec3(1.0, 0.0, -1.0), vec2(-2.0, -2.0));
    }

    #[test]
    fn test_mat_scalar_ops() {
        let m = Mat2::identity();
        assert_eq!(m * 3.0, Mat2::from_diagonal(vec2(3.0, 3.0)));
        assert_eq!(3.0 * m, m * 3.0);
        assert_eq!((m * 4.0) / 2.0, m + m);
        assert_eq!(m - m, Mat2::ZERO);
        assert_eq!(-m, m * -1.0);
    }

    #[test]
    fn test_integer_scalar_on_the_left() {
        let m = Matrix::<i32, 2, 2>::from_rows_array([[1, -2], [3, 4]]);
        assert_eq!(3 * m, m * 3);
        assert_eq!(3 * m, Matrix::from_rows_array([[3, -6], [9, 12]]));
        assert_eq!(0 * m, Matrix::ZERO);
    }

    #[test]
    fn test_mat_checked_access() {
        let mut m = Mat4::identity();
        assert_eq!(m.get(3, 3), Ok(1.0));
        assert!(m.get(4, 0).unwrap_err().is_bounds_error());
        assert!(m.set(0, 4, 1.0).is_err());
        m.set(0, 3, 5.0).unwrap();
        assert_eq!(m[(0, 3)], 5.0);
    }

    #[test]
    #[should_panic(expected = "dmat3 index out of bounds: [3, 0]")]
    fn test_mat_row_index_panics() {
        let m = DMat3::identity();
        let _ = m[(3, 0)];
    }

    #[test]
    #[should_panic(expected = "vec3 index out of bounds: 5")]
    fn test_mat_col_index_uses_row_indexer() {
        let m = Mat3::identity();
        let _ = m[(0, 5)];
    }

    #[test]
    #[should_panic(expected = "mat3x2 index out of bounds: 2 (len 2)")]
    fn test_col_reports_column_count() {
        let _col = Mat3x2::ZERO.col(2);
    }

    #[test]
    #[should_panic(expected = "mat2x3 index out of bounds: 3 (len 3)")]
    fn test_set_col_reports_column_count() {
        let mut m = Mat2x3::ZERO;
        m.set_col(3, vec2(1.0, 2.0));
    }

    #[test]
    fn test_type_names() {
        assert_eq!(Mat3::type_name(), "mat3");
        assert_eq!(DMat3::type_name(), "dmat3");
        assert_eq!(Mat2x3::type_name(), "mat2x3");
    }

    #[test]
    fn test_display() {
        assert_eq!(Mat2::identity().to_string(), "((1, 0), (0, 1))");
    }
}
