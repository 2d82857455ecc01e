//! 4x4 matrices (single and double precision).
//!
//! Layout is column-major: `mij` lives at offset `(i - 1) + (j - 1) * 4`,
//! so the first column is `m11 m21 m31 m41` and the translation of an
//! affine transform sits in the fourth row at `m41 m42 m43` (offsets 3, 7
//! and 11). Points transform in row-vector convention, `v' = v * M`.

use crate::AlgebraError;

define_matrix_type!(
    /// 4x4 matrix (single precision).
    Mat4F32,
    Mat4ViewF32,
    Mat4ViewMutF32,
    f32,
    [f32; 16],
    identity: [
        1.0, 0.0, 0.0, 0.0,
        0.0, 1.0, 0.0, 0.0,
        0.0, 0.0, 1.0, 0.0,
        0.0, 0.0, 0.0, 1.0,
    ],
    diag: [0, 5, 10, 15],
    fields: [
        m11 set_m11 => 0,
        m21 set_m21 => 1,
        m31 set_m31 => 2,
        m41 set_m41 => 3,
        m12 set_m12 => 4,
        m22 set_m22 => 5,
        m32 set_m32 => 6,
        m42 set_m42 => 7,
        m13 set_m13 => 8,
        m23 set_m23 => 9,
        m33 set_m33 => 10,
        m43 set_m43 => 11,
        m14 set_m14 => 12,
        m24 set_m24 => 13,
        m34 set_m34 => 14,
        m44 set_m44 => 15,
    ]
);

define_matrix_type!(
    /// 4x4 matrix (double precision).
    Mat4F64,
    Mat4ViewF64,
    Mat4ViewMutF64,
    f64,
    [f64; 16],
    identity: [
        1.0, 0.0, 0.0, 0.0,
        0.0, 1.0, 0.0, 0.0,
        0.0, 0.0, 1.0, 0.0,
        0.0, 0.0, 0.0, 1.0,
    ],
    diag: [0, 5, 10, 15],
    fields: [
        m11 set_m11 => 0,
        m21 set_m21 => 1,
        m31 set_m31 => 2,
        m41 set_m41 => 3,
        m12 set_m12 => 4,
        m22 set_m22 => 5,
        m32 set_m32 => 6,
        m42 set_m42 => 7,
        m13 set_m13 => 8,
        m23 set_m23 => 9,
        m33 set_m33 => 10,
        m43 set_m43 => 11,
        m14 set_m14 => 12,
        m24 set_m24 => 13,
        m34 set_m34 => 14,
        m44 set_m44 => 15,
    ]
);

macro_rules! impl_mat4_ops {
    ($name:ident, $scalar:ty, $vec3:ty) => {
        impl $name {
            /// Translation row (m41, m42, m43).
            #[inline]
            pub fn translation(&self) -> $vec3 {
                <$vec3>::new(self.m41(), self.m42(), self.m43())
            }

            /// Set the translation row (m41, m42, m43).
            #[inline]
            pub fn set_translation(&mut self, t: $vec3) {
                let mut v = self.as_view_mut();
                v.set_m41(t.x);
                v.set_m42(t.y);
                v.set_m43(t.z);
            }

            /// Transposed matrix.
            pub fn transpose(&self) -> Self {
                let m = &self.0;
                let mut out = [0.0 as $scalar; 16];
                for c in 0..4 {
                    for r in 0..4 {
                        out[c * 4 + r] = m[r * 4 + c];
                    }
                }
                Self(out)
            }

            /// Determinant by cofactor expansion along the first column.
            pub fn determinant(&self) -> $scalar {
                let c = self.cofactor_col0();
                let m = &self.0;
                m[0] * c[0] + m[1] * c[1] + m[2] * c[2] + m[3] * c[3]
            }

            /// Inverse of the matrix.
            ///
            /// Returns [`AlgebraError::SingularMatrix`] when the determinant
            /// is exactly zero.
            pub fn invert(&self) -> Result<Self, AlgebraError> {
                let m = &self.0;
                let mut inv = [0.0 as $scalar; 16];

                let c0 = self.cofactor_col0();
                inv[0] = c0[0];
                inv[4] = c0[1];
                inv[8] = c0[2];
                inv[12] = c0[3];
                inv[1] = -m[1] * m[10] * m[15] + m[1] * m[11] * m[14] + m[9] * m[2] * m[15]
                    - m[9] * m[3] * m[14]
                    - m[13] * m[2] * m[11]
                    + m[13] * m[3] * m[10];
                inv[5] = m[0] * m[10] * m[15] - m[0] * m[11] * m[14] - m[8] * m[2] * m[15]
                    + m[8] * m[3] * m[14]
                    + m[12] * m[2] * m[11]
                    - m[12] * m[3] * m[10];
                inv[9] = -m[0] * m[9] * m[15] + m[0] * m[11] * m[13] + m[8] * m[1] * m[15]
                    - m[8] * m[3] * m[13]
                    - m[12] * m[1] * m[11]
                    + m[12] * m[3] * m[9];
                inv[13] = m[0] * m[9] * m[14] - m[0] * m[10] * m[13] - m[8] * m[1] * m[14]
                    + m[8] * m[2] * m[13]
                    + m[12] * m[1] * m[10]
                    - m[12] * m[2] * m[9];
                inv[2] = m[1] * m[6] * m[15] - m[1] * m[7] * m[14] - m[5] * m[2] * m[15]
                    + m[5] * m[3] * m[14]
                    + m[13] * m[2] * m[7]
                    - m[13] * m[3] * m[6];
                inv[6] = -m[0] * m[6] * m[15] + m[0] * m[7] * m[14] + m[4] * m[2] * m[15]
                    - m[4] * m[3] * m[14]
                    - m[12] * m[2] * m[7]
                    + m[12] * m[3] * m[6];
                inv[10] = m[0] * m[5] * m[15] - m[0] * m[7] * m[13] - m[4] * m[1] * m[15]
                    + m[4] * m[3] * m[13]
                    + m[12] * m[1] * m[7]
                    - m[12] * m[3] * m[5];
                inv[14] = -m[0] * m[5] * m[14] + m[0] * m[6] * m[13] + m[4] * m[1] * m[14]
                    - m[4] * m[2] * m[13]
                    - m[12] * m[1] * m[6]
                    + m[12] * m[2] * m[5];
                inv[3] = -m[1] * m[6] * m[11] + m[1] * m[7] * m[10] + m[5] * m[2] * m[11]
                    - m[5] * m[3] * m[10]
                    - m[9] * m[2] * m[7]
                    + m[9] * m[3] * m[6];
                inv[7] = m[0] * m[6] * m[11] - m[0] * m[7] * m[10] - m[4] * m[2] * m[11]
                    + m[4] * m[3] * m[10]
                    + m[8] * m[2] * m[7]
                    - m[8] * m[3] * m[6];
                inv[11] = -m[0] * m[5] * m[11] + m[0] * m[7] * m[9] + m[4] * m[1] * m[11]
                    - m[4] * m[3] * m[9]
                    - m[8] * m[1] * m[7]
                    + m[8] * m[3] * m[5];
                inv[15] = m[0] * m[5] * m[10] - m[0] * m[6] * m[9] - m[4] * m[1] * m[10]
                    + m[4] * m[2] * m[9]
                    + m[8] * m[1] * m[6]
                    - m[8] * m[2] * m[5];

                let det = m[0] * inv[0] + m[1] * inv[4] + m[2] * inv[8] + m[3] * inv[12];
                if det == 0.0 as $scalar {
                    return Err(AlgebraError::SingularMatrix);
                }
                let inv_det = (1.0 as $scalar) / det;
                Ok(Self(inv.map(|x| x * inv_det)))
            }

            // Cofactors of the first column, shared by determinant and the
            // first column of the adjugate.
            fn cofactor_col0(&self) -> [$scalar; 4] {
                let m = &self.0;
                [
                    m[5] * m[10] * m[15] - m[5] * m[11] * m[14] - m[9] * m[6] * m[15]
                        + m[9] * m[7] * m[14]
                        + m[13] * m[6] * m[11]
                        - m[13] * m[7] * m[10],
                    -m[4] * m[10] * m[15] + m[4] * m[11] * m[14] + m[8] * m[6] * m[15]
                        - m[8] * m[7] * m[14]
                        - m[12] * m[6] * m[11]
                        + m[12] * m[7] * m[10],
                    m[4] * m[9] * m[15] - m[4] * m[11] * m[13] - m[8] * m[5] * m[15]
                        + m[8] * m[7] * m[13]
                        + m[12] * m[5] * m[11]
                        - m[12] * m[7] * m[9],
                    -m[4] * m[9] * m[14] + m[4] * m[10] * m[13] + m[8] * m[5] * m[14]
                        - m[8] * m[6] * m[13]
                        - m[12] * m[5] * m[10]
                        + m[12] * m[6] * m[9],
                ]
            }
        }

        // Matrix-matrix multiplication.
        impl std::ops::Mul for $name {
            type Output = Self;

            fn mul(self, rhs: Self) -> Self::Output {
                let a = &self.0;
                let b = &rhs.0;
                let mut out = [0.0 as $scalar; 16];
                for c in 0..4 {
                    for r in 0..4 {
                        let mut acc = 0.0 as $scalar;
                        for k in 0..4 {
                            acc += a[k * 4 + r] * b[c * 4 + k];
                        }
                        out[c * 4 + r] = acc;
                    }
                }
                Self(out)
            }
        }
    };
}

impl_mat4_ops!(Mat4F32, f32, crate::Vec3F32);
impl_mat4_ops!(Mat4F64, f64, crate::Vec3F64);
