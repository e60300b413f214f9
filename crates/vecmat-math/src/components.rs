//! Per-size vector API: named components, unit axes, tuples, resizing.
//!
//! These items only make sense for one component count, so they are
//! implemented on `Vector<T, 2>`, `Vector<T, 3>` and `Vector<T, 4>` directly.

use vecmat_core::Scalar;

use crate::vector::Vector;

macro_rules! component_accessors {
    ($($get:ident, $get_mut:ident, $set:ident => $i:literal;)+) => {
        $(
            #[doc = concat!("Component `", stringify!($get), "` (index ", stringify!($i), ").")]
            #[inline]
            pub fn $get(&self) -> T {
                self.0[$i]
            }

            #[doc = concat!("Mutable reference to component `", stringify!($get), "`.")]
            #[inline]
            pub fn $get_mut(&mut self) -> &mut T {
                &mut self.0[$i]
            }

            #[doc = concat!("Sets component `", stringify!($get), "`.")]
            #[inline]
            pub fn $set(&mut self, value: T) {
                self.0[$i] = value;
            }
        )+
    };
}

macro_rules! impl_tuple_conversions {
    ($n:literal: $($t:ident $i:tt),+) => {
        impl<T: Scalar> From<($($t,)+)> for Vector<T, $n> {
            #[inline]
            fn from(t: ($($t,)+)) -> Self {
                Self([$(t.$i),+])
            }
        }

        impl<T: Scalar> From<Vector<T, $n>> for ($($t,)+) {
            #[inline]
            fn from(v: Vector<T, $n>) -> Self {
                ($(v.0[$i],)+)
            }
        }
    };
}

impl_tuple_conversions!(2: T 0, T 1);
impl_tuple_conversions!(3: T 0, T 1, T 2);
impl_tuple_conversions!(4: T 0, T 1, T 2, T 3);

impl<T: Scalar> Vector<T, 2> {
    /// Unit X vector (1, 0).
    pub const UNIT_X: Self = Self([T::ONE, T::ZERO]);
    /// Unit Y vector (0, 1).
    pub const UNIT_Y: Self = Self([T::ZERO, T::ONE]);

    /// Creates a new vector.
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self([x, y])
    }

    component_accessors! {
        x, x_mut, set_x => 0;
        y, y_mut, set_y => 1;
    }

    /// Appends a `z` component.
    #[inline]
    pub fn extend(self, z: T) -> Vector<T, 3> {
        Vector([self.0[0], self.0[1], z])
    }
}

impl<T: Scalar> Vector<T, 3> {
    /// Unit X vector (1, 0, 0).
    pub const UNIT_X: Self = Self([T::ONE, T::ZERO, T::ZERO]);
    /// Unit Y vector (0, 1, 0).
    pub const UNIT_Y: Self = Self([T::ZERO, T::ONE, T::ZERO]);
    /// Unit Z vector (0, 0, 1).
    pub const UNIT_Z: Self = Self([T::ZERO, T::ZERO, T::ONE]);

    /// Creates a new vector.
    #[inline]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self([x, y, z])
    }

    component_accessors! {
        x, x_mut, set_x => 0;
        y, y_mut, set_y => 1;
        z, z_mut, set_z => 2;
    }

    /// Appends a `w` component.
    #[inline]
    pub fn extend(self, w: T) -> Vector<T, 4> {
        Vector([self.0[0], self.0[1], self.0[2], w])
    }

    /// Drops the `z` component.
    #[inline]
    pub fn truncate(self) -> Vector<T, 2> {
        Vector([self.0[0], self.0[1]])
    }

    /// Cross product, right-handed: `UNIT_X.cross(UNIT_Y) == UNIT_Z`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vecmat_math::Vec3;
    ///
    /// assert_eq!(Vec3::UNIT_Y.cross(Vec3::UNIT_Z), Vec3::UNIT_X);
    /// ```
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        let [ax, ay, az] = self.0;
        let [bx, by, bz] = other.0;
        Self([ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx])
    }
}

impl<T: Scalar> Vector<T, 4> {
    /// Unit X vector (1, 0, 0, 0).
    pub const UNIT_X: Self = Self([T::ONE, T::ZERO, T::ZERO, T::ZERO]);
    /// Unit Y vector (0, 1, 0, 0).
    pub const UNIT_Y: Self = Self([T::ZERO, T::ONE, T::ZERO, T::ZERO]);
    /// Unit Z vector (0, 0, 1, 0).
    pub const UNIT_Z: Self = Self([T::ZERO, T::ZERO, T::ONE, T::ZERO]);
    /// Unit W vector (0, 0, 0, 1).
    pub const UNIT_W: Self = Self([T::ZERO, T::ZERO, T::ZERO, T::ONE]);

    /// Creates a new vector.
    #[inline]
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self([x, y, z, w])
    }

    component_accessors! {
        x, x_mut, set_x => 0;
        y, y_mut, set_y => 1;
        z, z_mut, set_z => 2;
        w, w_mut, set_w => 3;
    }

    /// Drops the `w` component.
    #[inline]
    pub fn truncate(self) -> Vector<T, 3> {
        Vector([self.0[0], self.0[1], self.0[2]])
    }
}

#[cfg(test)]
mod tests {
    use crate::{dvec4, ivec2, vec2, vec3, IVec2, IVec3, Vec2, Vec3, Vec4};

    #[test]
    fn test_tuple_round_trip() {
        let v: Vec3 = (1.5, -2.0, 3.25).into();
        assert_eq!(v.x(), 1.5);
        assert_eq!(v.y(), -2.0);
        assert_eq!(v.z(), 3.25);

        let (x, y): (i32, i32) = IVec2::from((7, 8)).into();
        assert_eq!((x, y), (7, 8));
    }

    #[test]
    fn test_setters() {
        let mut v = vec2(1.0, 2.0);
        v.set_x(5.0);
        *v.y_mut() += 1.0;
        assert_eq!(v, Vec2::new(5.0, 3.0));
    }

    #[test]
    fn test_cross() {
        assert_eq!(Vec3::UNIT_X.cross(Vec3::UNIT_Y), Vec3::UNIT_Z);
        assert_eq!(Vec3::UNIT_Z.cross(Vec3::UNIT_Y), -Vec3::UNIT_X);
        let v = vec3(1.0, 2.0, 3.0);
        assert_eq!(v.cross(v), Vec3::ZERO);
        assert_eq!(IVec3::UNIT_Y.cross(IVec3::UNIT_Z), IVec3::UNIT_X);
    }

    #[test]
    fn test_extend_truncate() {
        let v = ivec2(1, 2).extend(3);
        assert_eq!(v, IVec3::new(1, 2, 3));
        assert_eq!(v.truncate(), ivec2(1, 2));
        assert_eq!(vec3(1.0, 2.0, 3.0).extend(1.0), Vec4::new(1.0, 2.0, 3.0, 1.0));
        assert_eq!(dvec4(1.0, 2.0, 3.0, 4.0).truncate().z(), 3.0);
    }

    #[test]
    fn test_unit_w() {
        assert_eq!(Vec4::UNIT_W.w(), 1.0);
        assert_eq!(Vec4::UNIT_W.sum(), 1.0);
    }
}
