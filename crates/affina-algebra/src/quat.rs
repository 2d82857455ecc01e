//! Rotation quaternion (single precision).

use crate::{AlgebraError, Frozen, Vec3F32};

/// Rotation quaternion (single precision).
///
/// The identity rotation is `(0, 0, 0, 1)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuatF32 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl QuatF32 {
    /// Identity quaternion.
    pub const IDENTITY: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
        w: 1.0,
    };

    /// Create a new quaternion from x, y, z, w components.
    #[inline]
    pub fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Create a quaternion from x, y, z, w components.
    #[inline]
    pub fn from_xyzw(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Create a quaternion rotating by `angle` radians around `axis`.
    ///
    /// `axis` is expected to be unit length.
    #[inline]
    pub fn from_axis_angle(axis: Vec3F32, angle: f32) -> Self {
        let half = angle * 0.5;
        let s = half.sin();
        Self {
            x: axis.x * s,
            y: axis.y * s,
            z: axis.z * s,
            w: half.cos(),
        }
    }

    /// Create a quaternion from an `[x, y, z, w]` array.
    #[inline]
    pub fn from_array(arr: [f32; 4]) -> Self {
        let [x, y, z, w] = arr;
        Self { x, y, z, w }
    }

    /// Convert the quaternion to an `[x, y, z, w]` array.
    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// Conjugate quaternion (inverse rotation for unit quaternions).
    #[inline]
    pub fn conjugate(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
            w: self.w,
        }
    }

    /// Dot product between two quaternions.
    #[inline]
    pub fn dot(self, rhs: Self) -> f32 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z + self.w * rhs.w
    }

    /// Euclidean length of the quaternion.
    #[inline]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Squared Euclidean length of the quaternion.
    #[inline]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    /// Normalize the quaternion to unit length.
    ///
    /// Returns [`AlgebraError::ZeroLength`] when the length is exactly zero.
    #[inline]
    pub fn normalize(self) -> Result<Self, AlgebraError> {
        let len = self.length();
        if len == 0.0 {
            return Err(AlgebraError::ZeroLength);
        }
        let inv = 1.0 / len;
        Ok(Self {
            x: self.x * inv,
            y: self.y * inv,
            z: self.z * inv,
            w: self.w * inv,
        })
    }

    /// Freeze the quaternion into a permanently read-only value.
    #[inline]
    pub fn freeze(self) -> Frozen<Self> {
        Frozen::new(self)
    }
}

impl Default for QuatF32 {
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<[f32; 4]> for QuatF32 {
    #[inline]
    fn from(arr: [f32; 4]) -> Self {
        Self::from_array(arr)
    }
}

impl From<QuatF32> for [f32; 4] {
    #[inline]
    fn from(q: QuatF32) -> Self {
        q.to_array()
    }
}

// Hamilton product.
impl std::ops::Mul for QuatF32 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        Self {
            x: self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            y: self.w * rhs.y + self.y * rhs.w + self.z * rhs.x - self.x * rhs.z,
            z: self.w * rhs.z + self.z * rhs.w + self.x * rhs.y - self.y * rhs.x,
            w: self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
        }
    }
}

impl std::fmt::Display for QuatF32 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<{}, {}, {}, {}>", self.x, self.y, self.z, self.w)
    }
}
