//! 3D vector types (single and double precision).

use crate::matrix::Mat4F32;
use crate::QuatF32;

define_vector_type!(
    /// 3D vector (single precision).
    Vec3F32,
    f32,
    [f32; 3],
    [x, y, z]
);

define_vector_type!(
    /// 3D vector (double precision).
    Vec3F64,
    f64,
    [f64; 3],
    [x, y, z]
);

impl Vec3F32 {
    /// Unit vector along the x axis.
    pub const UNIT_X: Self = Self {
        x: 1.0,
        y: 0.0,
        z: 0.0,
    };

    /// Unit vector along the y axis.
    pub const UNIT_Y: Self = Self {
        x: 0.0,
        y: 1.0,
        z: 0.0,
    };

    /// Unit vector along the z axis.
    pub const UNIT_Z: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 1.0,
    };

    /// Cross product between two vectors.
    #[inline]
    pub fn cross(self, rhs: Self) -> Self {
        Self::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }

    /// Transform as a point by a 4x4 matrix (translation row applied).
    #[inline]
    pub fn transform_point(self, m: &Mat4F32) -> Self {
        Self::new(
            self.x * m.m11() + self.y * m.m21() + self.z * m.m31() + m.m41(),
            self.x * m.m12() + self.y * m.m22() + self.z * m.m32() + m.m42(),
            self.x * m.m13() + self.y * m.m23() + self.z * m.m33() + m.m43(),
        )
    }

    /// Transform as a direction by a 4x4 matrix, using only its 3x3 linear
    /// part (translation ignored).
    #[inline]
    pub fn transform_normal(self, m: &Mat4F32) -> Self {
        Self::new(
            self.x * m.m11() + self.y * m.m21() + self.z * m.m31(),
            self.x * m.m12() + self.y * m.m22() + self.z * m.m32(),
            self.x * m.m13() + self.y * m.m23() + self.z * m.m33(),
        )
    }

    /// Rotate by a quaternion.
    #[inline]
    pub fn rotate(self, q: QuatF32) -> Self {
        let x2 = q.x + q.x;
        let y2 = q.y + q.y;
        let z2 = q.z + q.z;

        let wx2 = q.w * x2;
        let wy2 = q.w * y2;
        let wz2 = q.w * z2;
        let xx2 = q.x * x2;
        let xy2 = q.x * y2;
        let xz2 = q.x * z2;
        let yy2 = q.y * y2;
        let yz2 = q.y * z2;
        let zz2 = q.z * z2;

        Self::new(
            self.x * (1.0 - yy2 - zz2) + self.y * (xy2 - wz2) + self.z * (xz2 + wy2),
            self.x * (xy2 + wz2) + self.y * (1.0 - xx2 - zz2) + self.z * (yz2 - wx2),
            self.x * (xz2 - wy2) + self.y * (yz2 + wx2) + self.z * (1.0 - xx2 - yy2),
        )
    }
}
