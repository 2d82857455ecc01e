//! 4D vector types (single and double precision).

use crate::matrix::Mat4F32;
use crate::vector::{Vec2F32, Vec3F32};
use crate::QuatF32;

define_vector_type!(
    /// 4D vector (single precision).
    Vec4F32,
    f32,
    [f32; 4],
    [x, y, z, w]
);

define_vector_type!(
    /// 4D vector (double precision).
    Vec4F64,
    f64,
    [f64; 4],
    [x, y, z, w]
);

impl Vec4F32 {
    /// Unit vector along the x axis.
    pub const UNIT_X: Self = Self {
        x: 1.0,
        y: 0.0,
        z: 0.0,
        w: 0.0,
    };

    /// Unit vector along the y axis.
    pub const UNIT_Y: Self = Self {
        x: 0.0,
        y: 1.0,
        z: 0.0,
        w: 0.0,
    };

    /// Unit vector along the z axis.
    pub const UNIT_Z: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 1.0,
        w: 0.0,
    };

    /// Unit vector along the w axis.
    pub const UNIT_W: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
        w: 1.0,
    };

    /// Transform by a 4x4 matrix (full four-component product).
    #[inline]
    pub fn transform(self, m: &Mat4F32) -> Self {
        Self::new(
            self.x * m.m11() + self.y * m.m21() + self.z * m.m31() + self.w * m.m41(),
            self.x * m.m12() + self.y * m.m22() + self.z * m.m32() + self.w * m.m42(),
            self.x * m.m13() + self.y * m.m23() + self.z * m.m33() + self.w * m.m43(),
            self.x * m.m14() + self.y * m.m24() + self.z * m.m34() + self.w * m.m44(),
        )
    }

    /// Rotate the x, y and z components by a quaternion; `w` is unchanged.
    #[inline]
    pub fn rotate(self, q: QuatF32) -> Self {
        let r = Vec3F32::new(self.x, self.y, self.z).rotate(q);
        Self::new(r.x, r.y, r.z, self.w)
    }

    /// Rotate a 2D point by a quaternion (z = 0) and return it as a
    /// homogeneous point with `w` = 1.
    #[inline]
    pub fn from_rotated_point2(point: Vec2F32, rotation: QuatF32) -> Self {
        let r = Vec3F32::new(point.x, point.y, 0.0).rotate(rotation);
        Self::new(r.x, r.y, r.z, 1.0)
    }

    /// Rotate a 3D point by a quaternion and return it as a homogeneous
    /// point with `w` = 1.
    #[inline]
    pub fn from_rotated_point3(point: Vec3F32, rotation: QuatF32) -> Self {
        let r = point.rotate(rotation);
        Self::new(r.x, r.y, r.z, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_vec4f32_basic() {
        let v = Vec4F32::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);
        assert_eq!(v.w, 4.0);
    }

    #[test]
    fn test_vec4f32_from_array() {
        let v = Vec4F32::from_array([1.0, 2.0, 3.0, 4.0]);
        assert_eq!(v.to_array(), [1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_vec4f32_transform_identity() {
        let v = Vec4F32::new(1.0, -2.0, 3.0, -4.0);
        assert_eq!(v.transform(&Mat4F32::IDENTITY), v);
        assert_eq!(v.rotate(QuatF32::IDENTITY), v);
    }

    #[test]
    fn test_vec4f32_transform_translation_scales_with_w() {
        let mut m = Mat4F32::IDENTITY;
        m.set_translation(Vec3F32::new(10.0, 0.0, 0.0));
        let p = Vec4F32::new(1.0, 0.0, 0.0, 1.0).transform(&m);
        assert_eq!(p, Vec4F32::new(11.0, 0.0, 0.0, 1.0));
        // A direction (w = 0) ignores the translation row.
        let dir = Vec4F32::UNIT_X.transform(&m);
        assert_eq!(dir, Vec4F32::UNIT_X);
    }

    #[test]
    fn test_vec4f32_from_rotated_points_are_homogeneous() {
        let q = QuatF32::from_axis_angle(Vec3F32::UNIT_Z, std::f32::consts::FRAC_PI_2);
        let p2 = Vec4F32::from_rotated_point2(Vec2F32::new(1.0, 0.0), q);
        assert_relative_eq!(p2.y, 1.0, epsilon = 1e-6);
        assert_eq!(p2.w, 1.0);

        let p3 = Vec4F32::from_rotated_point3(Vec3F32::UNIT_X, q);
        assert_relative_eq!(p3.y, 1.0, epsilon = 1e-6);
        assert_eq!(p3.w, 1.0);
    }

    #[test]
    fn test_vec4f64_arithmetic() {
        let v1 = Vec4F64::new(1.0, 2.0, 3.0, 4.0);
        let v2 = Vec4F64::new(5.0, 6.0, 7.0, 8.0);
        assert_eq!(v1 + v2, Vec4F64::new(6.0, 8.0, 10.0, 12.0));
        assert_eq!(v1 * 2.0, Vec4F64::new(2.0, 4.0, 6.0, 8.0));
    }
}
