//! Matrix types module.
//!
//! This module provides flat-array matrix types for affina:
//! - Mat3x2: 3x2 affine matrix (2D linear part plus translation row)
//! - Mat4: 4x4 matrix
//!
//! Each type is backed by a single column-major array and carries
//! macro-generated named accessors plus zero-copy reader/writer views over
//! bare backing arrays.

#[macro_use]
mod mat;

mod mat3x2;
mod mat4;

pub use mat3x2::{
    Mat3x2F32, Mat3x2F64, Mat3x2ViewF32, Mat3x2ViewF64, Mat3x2ViewMutF32, Mat3x2ViewMutF64,
};
pub use mat4::{Mat4F32, Mat4F64, Mat4ViewF32, Mat4ViewF64, Mat4ViewMutF32, Mat4ViewMutF64};
