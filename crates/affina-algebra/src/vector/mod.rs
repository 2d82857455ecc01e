//! Vector types module.
//!
//! This module provides vector types for affina:
//! - Vec2F32 / Vec2F64: 2D vector
//! - Vec3F32 / Vec3F64: 3D vector
//! - Vec4F32 / Vec4F64: 4D vector

#[macro_use]
mod vec;

mod vec2;
mod vec3;
mod vec4;

pub use {vec2::Vec2F32, vec2::Vec2F64};
pub use {vec3::Vec3F32, vec3::Vec3F64};
pub use {vec4::Vec4F32, vec4::Vec4F64};
