//! Macro to define a matrix type over a flat column-major array.
//!
//! The `fields` table is the single source of truth for the layout: each
//! entry binds a semantic field name (`m11`, `m21`, ...) and its setter to a
//! fixed offset in the backing array, following standard column-major
//! indexing (`mij` lives at `(i - 1) + (j - 1) * rows`). Every accessor the
//! macro expands is an `#[inline]` indexed read or write with the offset
//! known at compile time, so named access costs the same as raw indexing.
//!
//! Alongside the matrix type itself the macro generates two borrowed views
//! over a bare backing array, so a matrix embedded in a larger flat buffer
//! can be read and written through the same named accessors without copying:
//!
//! * the read view exposes one getter per field and never mutates,
//! * the write view exposes getters and setters; setters return the written
//!   value so assignments can be chained.
//!
//! # Arguments
//!
//! * `name` - The name of the matrix type.
//! * `view` - The name of the generated read view type.
//! * `view_mut` - The name of the generated write view type.
//! * `scalar` - The scalar type.
//! * `array` - The backing column-major array type.
//! * `identity` - The identity matrix as a column-major array.
//! * `diag` - The offsets of the diagonal entries.
//! * `fields` - `getter setter => offset` for every semantic field.
//!
macro_rules! define_matrix_type {
    (
        $(#[$meta:meta])*
        $name:ident,
        $view:ident,
        $view_mut:ident,
        $scalar:ty,
        $array:ty,
        identity: [$($identity:expr),+ $(,)?],
        diag: [$($diag:expr),+ $(,)?],
        fields: [$($field:ident $setter:ident => $offset:expr),+ $(,)?]
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq)]
        #[repr(transparent)]
        pub struct $name(pub $array);

        impl $name {
            /// Identity matrix.
            pub const IDENTITY: Self = Self([$($identity),+]);

            /// Create a matrix from a column-major array.
            #[inline]
            pub fn from_cols_array(arr: &$array) -> Self {
                Self(*arr)
            }

            /// Return the matrix as a column-major array.
            #[inline]
            pub fn to_cols_array(&self) -> $array {
                self.0
            }

            /// View the backing storage as a flat slice.
            #[inline]
            pub fn as_slice(&self) -> &[$scalar] {
                &self.0
            }

            $(
                #[inline]
                pub fn $field(&self) -> $scalar {
                    self.0[$offset]
                }

                #[inline]
                pub fn $setter(&mut self, v: $scalar) -> $scalar {
                    self.0[$offset] = v;
                    v
                }
            )+

            /// `true` when the matrix is exactly the identity matrix.
            ///
            /// The diagonal is checked first so the common identity case
            /// returns without touching off-diagonal entries.
            #[inline]
            pub fn is_identity(&self) -> bool {
                $(
                    if self.0[$diag] != 1.0 as $scalar {
                        return false;
                    }
                )+
                self.0 == Self::IDENTITY.0
            }

            /// Borrow the matrix as a read-only named-field view.
            #[inline]
            pub fn as_view(&self) -> $view<'_> {
                $view(&self.0)
            }

            /// Borrow the matrix as a mutable named-field view.
            #[inline]
            pub fn as_view_mut(&mut self) -> $view_mut<'_> {
                $view_mut(&mut self.0)
            }

            /// Freeze the matrix into a permanently read-only value.
            #[inline]
            pub fn freeze(self) -> crate::Frozen<Self> {
                crate::Frozen::new(self)
            }
        }

        impl Default for $name {
            #[inline]
            fn default() -> Self {
                Self::IDENTITY
            }
        }

        // Conversions to and from column-major arrays.
        impl From<$array> for $name {
            #[inline]
            fn from(arr: $array) -> Self {
                Self(arr)
            }
        }

        impl From<$name> for $array {
            #[inline]
            fn from(m: $name) -> Self {
                m.0
            }
        }

        /// Read-only named-field view over a borrowed column-major array.
        #[derive(Debug, Clone, Copy)]
        pub struct $view<'a>(pub &'a $array);

        impl $view<'_> {
            $(
                #[inline]
                pub fn $field(&self) -> $scalar {
                    self.0[$offset]
                }
            )+
        }

        /// Mutable named-field view over a borrowed column-major array.
        #[derive(Debug)]
        pub struct $view_mut<'a>(pub &'a mut $array);

        impl $view_mut<'_> {
            $(
                #[inline]
                pub fn $field(&self) -> $scalar {
                    self.0[$offset]
                }

                #[inline]
                pub fn $setter(&mut self, v: $scalar) -> $scalar {
                    self.0[$offset] = v;
                    v
                }
            )+
        }
    };
}
