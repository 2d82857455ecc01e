//! 3x2 affine matrices (single and double precision).
//!
//! Layout is column-major with three rows: `m11 m21 m31` form the first
//! column and `m12 m22 m32` the second. The third row (`m31`, `m32`) holds
//! the 2D translation, so a point transforms as
//! `(x*m11 + y*m21 + m31, x*m12 + y*m22 + m32)`.

define_matrix_type!(
    /// 3x2 affine matrix (single precision).
    Mat3x2F32,
    Mat3x2ViewF32,
    Mat3x2ViewMutF32,
    f32,
    [f32; 6],
    identity: [1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
    diag: [0, 4],
    fields: [
        m11 set_m11 => 0,
        m21 set_m21 => 1,
        m31 set_m31 => 2,
        m12 set_m12 => 3,
        m22 set_m22 => 4,
        m32 set_m32 => 5,
    ]
);

define_matrix_type!(
    /// 3x2 affine matrix (double precision).
    Mat3x2F64,
    Mat3x2ViewF64,
    Mat3x2ViewMutF64,
    f64,
    [f64; 6],
    identity: [1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
    diag: [0, 4],
    fields: [
        m11 set_m11 => 0,
        m21 set_m21 => 1,
        m31 set_m31 => 2,
        m12 set_m12 => 3,
        m22 set_m22 => 4,
        m32 set_m32 => 5,
    ]
);

macro_rules! impl_mat3x2_ops {
    ($name:ident, $scalar:ty) => {
        // Affine composition: self applied first, then rhs.
        impl std::ops::Mul for $name {
            type Output = Self;

            fn mul(self, rhs: Self) -> Self::Output {
                let mut out = Self::IDENTITY;
                out.set_m11(self.m11() * rhs.m11() + self.m12() * rhs.m21());
                out.set_m12(self.m11() * rhs.m12() + self.m12() * rhs.m22());
                out.set_m21(self.m21() * rhs.m11() + self.m22() * rhs.m21());
                out.set_m22(self.m21() * rhs.m12() + self.m22() * rhs.m22());
                out.set_m31(self.m31() * rhs.m11() + self.m32() * rhs.m21() + rhs.m31());
                out.set_m32(self.m31() * rhs.m12() + self.m32() * rhs.m22() + rhs.m32());
                out
            }
        }

        impl $name {
            /// Create a translation matrix.
            #[inline]
            pub fn from_translation(x: $scalar, y: $scalar) -> Self {
                let mut m = Self::IDENTITY;
                m.set_m31(x);
                m.set_m32(y);
                m
            }
        }
    };
}

impl_mat3x2_ops!(Mat3x2F32, f32);
impl_mat3x2_ops!(Mat3x2F64, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mat3x2f32_default_is_identity() {
        let m = Mat3x2F32::default();
        assert!(m.is_identity());
        assert_eq!(m, Mat3x2F32::IDENTITY);
    }

    #[test]
    fn test_mat3x2f32_accessor_offsets() {
        let mut m = Mat3x2F32::IDENTITY;
        assert_eq!(m.set_m12(7.0), 7.0);
        // m12 lives at offset 3 in the column-major backing array.
        assert_eq!(m.as_slice()[3], 7.0);
        assert_eq!(m.m12(), 7.0);
        assert!(!m.is_identity());
    }

    #[test]
    fn test_mat3x2f32_compose_translations() {
        let a = Mat3x2F32::from_translation(1.0, 2.0);
        let b = Mat3x2F32::from_translation(10.0, 20.0);
        let c = a * b;
        assert_eq!(c.m31(), 11.0);
        assert_eq!(c.m32(), 22.0);
    }

    #[test]
    fn test_mat3x2f64_accessor_offsets() {
        let mut m = Mat3x2F64::IDENTITY;
        m.set_m32(3.5);
        assert_eq!(m.as_slice()[5], 3.5);
        assert_eq!(m.m32(), 3.5);
    }
}
