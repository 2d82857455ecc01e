//! Macro to define a vector type.
//!
//! # Arguments
//!
//! * `name` - The name of the vector type.
//! * `scalar` - The scalar type.
//! * `array` - The array type.
//! * `fields` - The fields of the vector.
//!
macro_rules! define_vector_type {
    ($(#[$meta:meta])* $name:ident, $scalar:ty, $array:ty, [$($field:ident),+]) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Default)]
        pub struct $name {
            $(pub $field: $scalar),+
        }

        impl $name {
            /// Create a new vector from its components.
            #[inline]
            pub fn new($($field: $scalar),+) -> Self {
                Self { $($field),+ }
            }

            /// Create a vector with all components set to `v`.
            #[inline]
            pub fn splat(v: $scalar) -> Self {
                Self { $($field: v),+ }
            }

            /// Create a vector from an array.
            #[inline]
            pub fn from_array(arr: $array) -> Self {
                let [$($field),+] = arr;
                Self { $($field),+ }
            }

            /// Convert the vector to an array.
            #[inline]
            pub fn to_array(self) -> $array {
                [$(self.$field),+]
            }

            /// Write the components into `dest` starting at `offset`.
            ///
            /// Panics if `dest` is too short to hold them.
            #[inline]
            pub fn write_to_slice(self, dest: &mut [$scalar], offset: usize) {
                let arr = self.to_array();
                dest[offset..offset + arr.len()].copy_from_slice(&arr);
            }

            /// Zero vector.
            pub const ZERO: Self = Self {
                $($field: 0.0 as $scalar),+
            };

            /// Vector with all components set to one.
            pub const ONE: Self = Self {
                $($field: 1.0 as $scalar),+
            };

            /// Euclidean length (magnitude) of the vector.
            #[inline]
            pub fn length(self) -> $scalar {
                self.length_squared().sqrt()
            }

            /// Squared Euclidean length of the vector.
            #[inline]
            pub fn length_squared(self) -> $scalar {
                self.dot(self)
            }

            /// Dot product between two vectors.
            #[inline]
            pub fn dot(self, rhs: Self) -> $scalar {
                0.0 as $scalar $(+ self.$field * rhs.$field)+
            }

            /// Distance to another vector.
            #[inline]
            pub fn distance(self, rhs: Self) -> $scalar {
                (rhs - self).length()
            }

            /// Squared distance to another vector.
            #[inline]
            pub fn distance_squared(self, rhs: Self) -> $scalar {
                (rhs - self).length_squared()
            }

            /// Normalize the vector to unit length.
            ///
            /// Returns [`AlgebraError::ZeroLength`] when the length is
            /// exactly zero; every other degenerate input (NaN, infinity)
            /// propagates through the arithmetic unchecked.
            #[inline]
            pub fn normalize(self) -> Result<Self, crate::AlgebraError> {
                let len = self.length();
                if len == 0.0 as $scalar {
                    return Err(crate::AlgebraError::ZeroLength);
                }
                Ok(self / len)
            }

            /// Clamp each component between the matching components of
            /// `min` and `max`.
            ///
            /// The min bound is applied first and the max bound second, so
            /// on a crossed interval (`min > max`) the max bound wins:
            /// `clamp(5.0, min = 0.0, max = -1.0) == -1.0`.
            #[inline]
            pub fn clamp(self, min: Self, max: Self) -> Self {
                Self {
                    $($field: self.$field.max(min.$field).min(max.$field)),+
                }
            }

            /// Linear interpolation towards `rhs` by factor `t` (unclamped).
            #[inline]
            pub fn lerp(self, rhs: Self, t: $scalar) -> Self {
                Self {
                    $($field: self.$field + (rhs.$field - self.$field) * t),+
                }
            }

            /// Component-wise minimum of two vectors.
            #[inline]
            pub fn min(self, rhs: Self) -> Self {
                Self {
                    $($field: self.$field.min(rhs.$field)),+
                }
            }

            /// Component-wise maximum of two vectors.
            #[inline]
            pub fn max(self, rhs: Self) -> Self {
                Self {
                    $($field: self.$field.max(rhs.$field)),+
                }
            }

            /// Component-wise absolute value.
            #[inline]
            pub fn abs(self) -> Self {
                Self {
                    $($field: self.$field.abs()),+
                }
            }

            /// Component-wise square root.
            #[inline]
            pub fn sqrt(self) -> Self {
                Self {
                    $($field: self.$field.sqrt()),+
                }
            }

            /// Freeze the vector into a permanently read-only value.
            #[inline]
            pub fn freeze(self) -> crate::Frozen<Self> {
                crate::Frozen::new(self)
            }
        }

        // Conversions to and from arrays.
        impl From<$array> for $name {
            #[inline]
            fn from(arr: $array) -> Self {
                Self::from_array(arr)
            }
        }

        impl From<$name> for $array {
            #[inline]
            fn from(v: $name) -> Self {
                v.to_array()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "<")?;
                let mut first = true;
                for c in self.to_array() {
                    if !first {
                        write!(f, ", ")?;
                    }
                    first = false;
                    write!(f, "{c}")?;
                }
                write!(f, ">")
            }
        }

        #[cfg(feature = "approx")]
        impl approx::AbsDiffEq for $name {
            type Epsilon = <$scalar as approx::AbsDiffEq>::Epsilon;

            #[inline]
            fn default_epsilon() -> Self::Epsilon {
                <$scalar as approx::AbsDiffEq>::default_epsilon()
            }

            #[inline]
            fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
                let a: $array = (*self).to_array();
                let b: $array = (*other).to_array();
                a.iter()
                    .zip(b.iter())
                    .all(|(ai, bi)| <$scalar as approx::AbsDiffEq>::abs_diff_eq(ai, bi, epsilon))
            }
        }

        #[cfg(feature = "approx")]
        impl approx::RelativeEq for $name {
            #[inline]
            fn default_max_relative() -> Self::Epsilon {
                <$scalar as approx::RelativeEq>::default_max_relative()
            }

            #[inline]
            fn relative_eq(
                &self,
                other: &Self,
                epsilon: Self::Epsilon,
                max_relative: Self::Epsilon,
            ) -> bool {
                let a: $array = (*self).to_array();
                let b: $array = (*other).to_array();
                a.iter().zip(b.iter()).all(|(ai, bi)| {
                    <$scalar as approx::RelativeEq>::relative_eq(ai, bi, epsilon, max_relative)
                })
            }
        }

        // Arithmetic operations, component-wise.
        impl std::ops::Add for $name {
            type Output = Self;

            #[inline]
            fn add(self, rhs: Self) -> Self::Output {
                Self {
                    $($field: self.$field + rhs.$field),+
                }
            }
        }

        impl std::ops::Add<$scalar> for $name {
            type Output = Self;

            #[inline]
            fn add(self, rhs: $scalar) -> Self::Output {
                Self {
                    $($field: self.$field + rhs),+
                }
            }
        }

        impl std::ops::Sub for $name {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: Self) -> Self::Output {
                Self {
                    $($field: self.$field - rhs.$field),+
                }
            }
        }

        impl std::ops::Sub<$scalar> for $name {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: $scalar) -> Self::Output {
                Self {
                    $($field: self.$field - rhs),+
                }
            }
        }

        impl std::ops::Mul for $name {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: Self) -> Self::Output {
                Self {
                    $($field: self.$field * rhs.$field),+
                }
            }
        }

        impl std::ops::Mul<$scalar> for $name {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: $scalar) -> Self::Output {
                Self {
                    $($field: self.$field * rhs),+
                }
            }
        }

        impl std::ops::Mul<$name> for $scalar {
            type Output = $name;

            #[inline]
            fn mul(self, rhs: $name) -> Self::Output {
                $name {
                    $($field: self * rhs.$field),+
                }
            }
        }

        impl std::ops::Div for $name {
            type Output = Self;

            #[inline]
            fn div(self, rhs: Self) -> Self::Output {
                Self {
                    $($field: self.$field / rhs.$field),+
                }
            }
        }

        impl std::ops::Div<$scalar> for $name {
            type Output = Self;

            #[inline]
            fn div(self, rhs: $scalar) -> Self::Output {
                Self {
                    $($field: self.$field / rhs),+
                }
            }
        }

        impl std::ops::Neg for $name {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self::Output {
                Self {
                    $($field: -self.$field),+
                }
            }
        }

        impl std::ops::AddAssign for $name {
            #[inline]
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }

        impl std::ops::SubAssign for $name {
            #[inline]
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }

        impl std::ops::MulAssign<$scalar> for $name {
            #[inline]
            fn mul_assign(&mut self, rhs: $scalar) {
                *self = *self * rhs;
            }
        }

        impl std::ops::DivAssign<$scalar> for $name {
            #[inline]
            fn div_assign(&mut self, rhs: $scalar) {
                *self = *self / rhs;
            }
        }
    };
}
