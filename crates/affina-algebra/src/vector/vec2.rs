//! 2D vector types (single and double precision).

use crate::matrix::{Mat3x2F32, Mat4F32};
use crate::QuatF32;

define_vector_type!(
    /// 2D vector (single precision).
    Vec2F32,
    f32,
    [f32; 2],
    [x, y]
);

define_vector_type!(
    /// 2D vector (double precision).
    Vec2F64,
    f64,
    [f64; 2],
    [x, y]
);

impl Vec2F32 {
    /// Unit vector along the x axis.
    pub const UNIT_X: Self = Self { x: 1.0, y: 0.0 };

    /// Unit vector along the y axis.
    pub const UNIT_Y: Self = Self { x: 0.0, y: 1.0 };

    /// Transform as a point by an affine 3x2 matrix (translation applied).
    #[inline]
    pub fn transform_point(self, m: &Mat3x2F32) -> Self {
        Self::new(
            self.x * m.m11() + self.y * m.m21() + m.m31(),
            self.x * m.m12() + self.y * m.m22() + m.m32(),
        )
    }

    /// Transform as a direction by an affine 3x2 matrix (translation ignored).
    #[inline]
    pub fn transform_normal(self, m: &Mat3x2F32) -> Self {
        Self::new(
            self.x * m.m11() + self.y * m.m21(),
            self.x * m.m12() + self.y * m.m22(),
        )
    }

    /// Transform as a point by a 4x4 matrix, using its upper 2x2 block and
    /// the translation row (m41, m42).
    #[inline]
    pub fn transform_point4(self, m: &Mat4F32) -> Self {
        Self::new(
            self.x * m.m11() + self.y * m.m21() + m.m41(),
            self.x * m.m12() + self.y * m.m22() + m.m42(),
        )
    }

    /// Transform as a direction by a 4x4 matrix, using its upper 2x2 block.
    #[inline]
    pub fn transform_normal4(self, m: &Mat4F32) -> Self {
        Self::new(
            self.x * m.m11() + self.y * m.m21(),
            self.x * m.m12() + self.y * m.m22(),
        )
    }

    /// Rotate by a quaternion, treating the vector as lying in the z = 0
    /// plane and discarding the rotated z component.
    #[inline]
    pub fn rotate(self, q: QuatF32) -> Self {
        let x2 = q.x + q.x;
        let y2 = q.y + q.y;
        let z2 = q.z + q.z;

        let wz2 = q.w * z2;
        let xx2 = q.x * x2;
        let xy2 = q.x * y2;
        let yy2 = q.y * y2;
        let zz2 = q.z * z2;

        Self::new(
            self.x * (1.0 - yy2 - zz2) + self.y * (xy2 - wz2),
            self.x * (xy2 + wz2) + self.y * (1.0 - xx2 - zz2),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec2f32_basic() {
        let v = Vec2F32::new(1.0, 2.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
    }

    #[test]
    fn test_vec2f32_from_array() {
        let v = Vec2F32::from_array([1.0, 2.0]);
        assert_eq!(v.to_array(), [1.0, 2.0]);
    }

    #[test]
    fn test_vec2f32_arithmetic() {
        let v1 = Vec2F32::new(1.0, 2.0);
        let v2 = Vec2F32::new(3.0, 4.0);
        assert_eq!(v1 + v2, Vec2F32::new(4.0, 6.0));
        assert_eq!(v1 * 2.0, Vec2F32::new(2.0, 4.0));
        assert_eq!(v1 * v2, Vec2F32::new(3.0, 8.0));
    }

    #[test]
    fn test_vec2f32_transform_identity() {
        let v = Vec2F32::new(3.0, -4.0);
        assert_eq!(v.transform_point(&Mat3x2F32::IDENTITY), v);
        assert_eq!(v.transform_normal(&Mat3x2F32::IDENTITY), v);
        assert_eq!(v.transform_point4(&Mat4F32::IDENTITY), v);
        assert_eq!(v.rotate(QuatF32::IDENTITY), v);
    }

    #[test]
    fn test_vec2f32_transform_translation() {
        let mut m = Mat3x2F32::IDENTITY;
        m.set_m31(10.0);
        m.set_m32(20.0);
        let v = Vec2F32::new(1.0, 2.0);
        assert_eq!(v.transform_point(&m), Vec2F32::new(11.0, 22.0));
        // Directions are unaffected by translation.
        assert_eq!(v.transform_normal(&m), v);
    }

    #[test]
    fn test_vec2f64_basic() {
        let v = Vec2F64::new(1.0, 2.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
    }

    #[test]
    fn test_vec2f64_arithmetic() {
        let v1 = Vec2F64::new(1.0, 2.0);
        let v2 = Vec2F64::new(3.0, 4.0);
        assert_eq!(v1 + v2, Vec2F64::new(4.0, 6.0));
        assert_eq!(v1 * 2.0, Vec2F64::new(2.0, 4.0));
    }
}
