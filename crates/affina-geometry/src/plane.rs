//! Plane in 3D space.

use affina_algebra::{AlgebraError, Frozen, Mat4F32, QuatF32, Vec3F32, Vec4F32};

/// A plane described by a normal and its signed distance from the origin,
/// `normal · p + d == 0` for every point `p` on the plane.
///
/// Transform operations require `normal` to be unit length; construction
/// does not normalize automatically.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Plane {
    /// Plane normal. Expected to be unit length before transforms.
    pub normal: Vec3F32,
    /// Signed distance from the origin along the normal.
    pub d: f32,
}

impl Plane {
    /// Create a plane from a normal and a signed distance.
    #[inline]
    pub fn new(normal: Vec3F32, d: f32) -> Self {
        Self { normal, d }
    }

    /// Create the plane passing through three vertices, with the normal
    /// oriented by the winding `p1 -> p2 -> p3`.
    ///
    /// Collinear vertices produce a zero cross product and the result
    /// propagates NaN through the division; no error is raised.
    pub fn from_vertices(p1: Vec3F32, p2: Vec3F32, p3: Vec3F32) -> Self {
        let cross = (p2 - p1).cross(p3 - p1);
        let normal = cross / cross.length();
        Self {
            normal,
            d: -normal.dot(p1),
        }
    }

    /// Normalize the plane so that `normal` is unit length, rescaling `d`
    /// by the same factor.
    ///
    /// A plane whose squared normal length is already within `f32::EPSILON`
    /// of 1.0 is returned untouched, skipping the square root. Returns
    /// [`AlgebraError::ZeroLength`] when the squared length is exactly zero.
    pub fn normalize(self) -> Result<Self, AlgebraError> {
        let sq = self.normal.length_squared();
        if (sq - 1.0).abs() < f32::EPSILON {
            return Ok(self);
        }
        if sq == 0.0 {
            return Err(AlgebraError::ZeroLength);
        }
        let inv = 1.0 / sq.sqrt();
        Ok(Self {
            normal: self.normal * inv,
            d: self.d * inv,
        })
    }

    /// Transform the plane by a 4x4 matrix.
    ///
    /// The plane must already be normalized. Normals transform by the
    /// transpose of the inverse, so the matrix is inverted into a local
    /// value and `(normal, d)` is multiplied through the inverse's rows.
    /// Returns [`AlgebraError::SingularMatrix`] when the matrix cannot be
    /// inverted.
    pub fn transform(&self, matrix: &Mat4F32) -> Result<Self, AlgebraError> {
        let inverse = matrix.invert()?;
        let m = inverse.as_view();
        let (x, y, z, d) = (self.normal.x, self.normal.y, self.normal.z, self.d);
        Ok(Self {
            normal: Vec3F32::new(
                x * m.m11() + y * m.m12() + z * m.m13() + d * m.m14(),
                x * m.m21() + y * m.m22() + z * m.m23() + d * m.m24(),
                x * m.m31() + y * m.m32() + z * m.m33() + d * m.m34(),
            ),
            d: x * m.m41() + y * m.m42() + z * m.m43() + d * m.m44(),
        })
    }

    /// Rotate the plane by a quaternion.
    ///
    /// Only the normal rotates; `d` is unchanged since the rotation is
    /// centered on the origin.
    #[inline]
    pub fn rotate(&self, rotation: QuatF32) -> Self {
        Self {
            normal: self.normal.rotate(rotation),
            d: self.d,
        }
    }

    /// Dot product of the plane's `(normal, d)` with a 4D vector.
    #[inline]
    pub fn dot(&self, v: Vec4F32) -> f32 {
        self.normal.x * v.x + self.normal.y * v.y + self.normal.z * v.z + self.d * v.w
    }

    /// Signed distance from a point to the plane.
    #[inline]
    pub fn dot_coordinate(&self, point: Vec3F32) -> f32 {
        self.normal.dot(point) + self.d
    }

    /// Dot product of the plane normal with a direction vector.
    #[inline]
    pub fn dot_normal(&self, direction: Vec3F32) -> f32 {
        self.normal.dot(direction)
    }

    /// Freeze the plane into a permanently read-only value.
    #[inline]
    pub fn freeze(self) -> Frozen<Self> {
        Frozen::new(self)
    }
}

impl std::fmt::Display for Plane {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{normal: {}, d: {}}}", self.normal, self.d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_plane_from_vertices() {
        let p = Plane::from_vertices(
            Vec3F32::ZERO,
            Vec3F32::new(1.0, 0.0, 0.0),
            Vec3F32::new(0.0, 1.0, 0.0),
        );
        assert_relative_eq!(p.normal.x, 0.0);
        assert_relative_eq!(p.normal.y, 0.0);
        assert_relative_eq!(p.normal.z, 1.0);
        assert_relative_eq!(p.d, 0.0);
    }

    #[test]
    fn test_plane_from_collinear_vertices_is_nan() {
        let p = Plane::from_vertices(
            Vec3F32::ZERO,
            Vec3F32::new(1.0, 0.0, 0.0),
            Vec3F32::new(2.0, 0.0, 0.0),
        );
        assert!(p.normal.x.is_nan());
        assert!(p.d.is_nan());
    }

    #[test]
    fn test_plane_normalize_rescales_d() {
        let p = Plane::new(Vec3F32::new(0.0, 0.0, 4.0), 8.0).normalize().unwrap();
        assert_eq!(p.normal, Vec3F32::UNIT_Z);
        assert_eq!(p.d, 2.0);
    }

    #[test]
    fn test_plane_normalize_early_out_is_bit_exact() {
        let p = Plane::new(Vec3F32::UNIT_Y, 3.25);
        let n = p.normalize().unwrap();
        assert_eq!(n.normal.x.to_bits(), p.normal.x.to_bits());
        assert_eq!(n.normal.y.to_bits(), p.normal.y.to_bits());
        assert_eq!(n.normal.z.to_bits(), p.normal.z.to_bits());
        assert_eq!(n.d.to_bits(), p.d.to_bits());
    }

    #[test]
    fn test_plane_normalize_zero_is_error() {
        let p = Plane::new(Vec3F32::ZERO, 1.0);
        assert_eq!(p.normalize(), Err(AlgebraError::ZeroLength));
    }

    #[test]
    fn test_plane_transform_identity() {
        let p = Plane::new(Vec3F32::UNIT_Z, -5.0);
        assert_eq!(p.transform(&Mat4F32::IDENTITY).unwrap(), p);
    }

    #[test]
    fn test_plane_transform_translation() {
        // Translating the z = 0 plane up by 2 moves it to z = 2, whose
        // signed distance is -2.
        let p = Plane::new(Vec3F32::UNIT_Z, 0.0);
        let mut m = Mat4F32::IDENTITY;
        m.set_translation(Vec3F32::new(0.0, 0.0, 2.0));
        let t = p.transform(&m).unwrap();
        assert_relative_eq!(t.normal.z, 1.0, epsilon = 1e-6);
        assert_relative_eq!(t.d, -2.0, epsilon = 1e-6);
        assert_relative_eq!(t.dot_coordinate(Vec3F32::new(0.0, 0.0, 2.0)), 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_plane_transform_singular_is_error() {
        let p = Plane::new(Vec3F32::UNIT_Z, 0.0);
        let singular = Mat4F32([0.0; 16]);
        assert_eq!(p.transform(&singular), Err(AlgebraError::SingularMatrix));
    }

    #[test]
    fn test_plane_rotate_keeps_d() {
        let p = Plane::new(Vec3F32::UNIT_X, 7.0);
        let q = QuatF32::from_axis_angle(Vec3F32::UNIT_Z, std::f32::consts::FRAC_PI_2);
        let r = p.rotate(q);
        assert_relative_eq!(r.normal.y, 1.0, epsilon = 1e-6);
        assert_eq!(r.d, 7.0);
    }

    #[test]
    fn test_plane_dot_family() {
        let p = Plane::new(Vec3F32::UNIT_Z, -1.0);
        assert_eq!(p.dot(Vec4F32::new(0.0, 0.0, 3.0, 1.0)), 2.0);
        assert_eq!(p.dot_coordinate(Vec3F32::new(0.0, 0.0, 3.0)), 2.0);
        assert_eq!(p.dot_normal(Vec3F32::new(0.0, 0.0, 3.0)), 3.0);
    }

    #[test]
    fn test_plane_display() {
        let p = Plane::new(Vec3F32::UNIT_Z, -1.5);
        assert_eq!(p.to_string(), "{normal: <0, 0, 1>, d: -1.5}");
    }
}
