//! Flat-array linear algebra types for affina.
//!
//! This crate provides:
//! - 2D/3D/4D vector types (`vector` module) in single and double precision
//! - 3x2 and 4x4 matrices (`matrix` module) stored as flat column-major
//!   arrays with macro-generated named accessors (`m11` .. `m44`) and
//!   zero-copy reader/writer views
//! - a rotation quaternion and a [`Frozen`] wrapper for permanently
//!   read-only values

mod error;
mod frozen;
mod matrix;
mod quat;
mod vector;

pub use error::AlgebraError;
pub use frozen::Frozen;
pub use matrix::{
    Mat3x2F32, Mat3x2F64, Mat3x2ViewF32, Mat3x2ViewF64, Mat3x2ViewMutF32, Mat3x2ViewMutF64,
    Mat4F32, Mat4F64, Mat4ViewF32, Mat4ViewF64, Mat4ViewMutF32, Mat4ViewMutF64,
};
pub use quat::QuatF32;
pub use vector::{Vec2F32, Vec2F64, Vec3F32, Vec3F64, Vec4F32, Vec4F64};

// Type aliases for the default single-precision surface
pub type Vec2 = Vec2F32;
pub type Vec3 = Vec3F32;
pub type Vec4 = Vec4F32;
pub type Mat3x2 = Mat3x2F32;
pub type Mat4 = Mat4F32;
pub type Mat3x2View<'a> = Mat3x2ViewF32<'a>;
pub type Mat3x2ViewMut<'a> = Mat3x2ViewMutF32<'a>;
pub type Mat4View<'a> = Mat4ViewF32<'a>;
pub type Mat4ViewMut<'a> = Mat4ViewMutF32<'a>;
pub type Quat = QuatF32;
