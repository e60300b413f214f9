//! Integration tests for vecmat crates.
//!
//! This crate contains end-to-end tests that exercise `vecmat-math` with
//! every optional feature turned on, together with the helpers from
//! `vecmat-core`.

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use serde::{Deserialize, Serialize};
    use vecmat_core::scalar;
    use vecmat_math::{
        dvec2, dvec3, ivec3, vec2, vec3, vec4, DMat2x3, DMat4, DVec3, Error, IVec3, Mat3, Mat4,
        Result, Vec2, Vec3,
    };

    /// Scene node as a consumer would store it.
    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Node {
        name: String,
        position: Vec3,
        cell: IVec3,
        transform: DMat4,
    }

    /// Rotation by 90 degrees about Z, row-vector convention.
    fn rotate_z_90() -> DMat4 {
        DMat4::from_rows_array([
            [0.0, 1.0, 0.0, 0.0],
            [-1.0, 0.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    #[test]
    fn test_serde_vector_json() {
        let v = vec3(1.5, -2.0, 0.25);
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, "[1.5,-2.0,0.25]");
        let back: Vec3 = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v);

        let i: IVec3 = serde_json::from_str("[1, 2, 3]").unwrap();
        assert_eq!(i, ivec3(1, 2, 3));
    }

    #[test]
    fn test_serde_matrix_is_rows() {
        let m = DMat2x3::from_rows_array([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "[[1.0,2.0,3.0],[4.0,5.0,6.0]]");
        let back: DMat2x3 = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
    }

    #[test]
    fn test_serde_rejects_wrong_length() {
        assert!(serde_json::from_str::<Vec3>("[1.0, 2.0]").is_err());
        assert!(serde_json::from_str::<Vec2>("[1.0, 2.0, 3.0]").is_err());
        assert!(serde_json::from_str::<Mat3>("[[1,0,0],[0,1,0]]").is_err());
        assert!(serde_json::from_str::<Mat3>("[[1,0,0],[0,1],[0,0,1]]").is_err());
    }

    #[test]
    fn test_serde_nested_struct() {
        let node = Node {
            name: "pivot".into(),
            position: vec3(0.0, 1.0, 0.0),
            cell: ivec3(-1, 0, 4),
            transform: DMat4::from_translation(dvec3(1.0, 2.0, 3.0)),
        };
        let json = serde_json::to_string_pretty(&node).unwrap();
        let back: Node = serde_json::from_str(&json).unwrap();
        assert_eq!(back, node);
        assert_eq!(back.transform.get_translation(), dvec3(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_glam_transform_agrees() {
        // glam multiplies column vectors with translation in the last
        // column; ours keeps it in the last row, hence the transpose.
        let ours = rotate_z_90() * DMat4::from_translation(dvec3(5.0, 0.0, 0.0));
        let theirs = glam::DMat4::from(ours.transpose());

        let p = dvec3(1.0, 0.0, 0.0);
        let expected = theirs.transform_point3(glam::DVec3::from(p));
        assert_abs_diff_eq!(ours.transform_point(p), DVec3::from(expected), epsilon = 1e-12);
        assert_abs_diff_eq!(ours.transform_point(p), dvec3(5.0, 1.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn test_glam_inverse_agrees() {
        let m = Mat4::from_rows_array([
            [2.0, 0.0, 1.0, 0.0],
            [0.0, 3.0, 0.0, 0.0],
            [1.0, 0.0, 1.0, 0.0],
            [4.0, 5.0, 6.0, 1.0],
        ]);
        let ours = m.inverse().unwrap();
        let theirs = Mat4::from(glam::Mat4::from(m).inverse());
        assert_relative_eq!(ours, theirs, epsilon = 1e-5);
        assert_relative_eq!(m.determinant(), glam::Mat4::from(m).determinant());
    }

    #[test]
    fn test_clear_rotation_keeps_scale() {
        let mut m = DMat4::from_scale(dvec3(2.0, 3.0, 4.0)) * rotate_z_90();
        assert_relative_eq!(m.get_scale(), dvec3(2.0, 3.0, 4.0));
        m.clear_rotation();
        assert_relative_eq!(m, DMat4::from_scale(dvec3(2.0, 3.0, 4.0)));
    }

    #[test]
    fn test_scalar_helpers_agree_with_vectors() {
        let a = vec2(0.0, 10.0);
        let b = vec2(10.0, 30.0);
        let t = 0.25;
        let v = a.lerp(b, t);
        assert_relative_eq!(v.x(), scalar::lerp(a.x(), b.x(), t));
        assert_relative_eq!(v.y(), scalar::lerp(a.y(), b.y(), t));

        let c = vec2(20.0, 10.0);
        let q = Vec2::bezier(a, b, c, 0.5);
        assert_relative_eq!(q.y(), scalar::bezier(10.0, 30.0, 10.0, 0.5));

        assert_relative_eq!(vec2(-1.25, 2.5).fract(), vec2(0.75, 0.5));
        assert_relative_eq!(scalar::fract(-1.25f32), 0.75);
    }

    #[test]
    fn test_angle_and_reflect() {
        let a = dvec2(1.0, 0.0);
        let b = dvec2(1.0, 1.0);
        assert_relative_eq!(a.angle_to(b), std::f64::consts::FRAC_PI_4, epsilon = 1e-12);
        assert_relative_eq!(dvec2(1.0, -1.0).reflect(dvec2(0.0, 1.0)), dvec2(1.0, 1.0));
    }

    fn diagonal_sum(m: &Mat3, rows: &[usize]) -> Result<f32> {
        let mut sum = 0.0;
        for &r in rows {
            sum += m.get(r, r)?;
        }
        Ok(sum)
    }

    #[test]
    fn test_errors_propagate_with_question_mark() {
        let m = Mat3::from_diagonal(vec3(1.0, 2.0, 3.0));
        assert_eq!(diagonal_sum(&m, &[0, 1, 2]).unwrap(), m.trace());

        let err = diagonal_sum(&m, &[0, 3]).unwrap_err();
        assert!(err.is_bounds_error());
        assert!(matches!(
            err,
            Error::MatrixIndexOutOfBounds { row: 3, col: 3, rows: 3, cols: 3, .. }
        ));
    }

    #[test]
    fn test_homogeneous_round_trip() {
        let p = vec3(1.0, 2.0, 3.0);
        let h = p.extend(1.0);
        assert_eq!(h, vec4(1.0, 2.0, 3.0, 1.0));
        assert_eq!(h.truncate(), p);
        assert_eq!(h.xyz(), p);
    }
}
