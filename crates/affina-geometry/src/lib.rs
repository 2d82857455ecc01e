//! Plane geometry for affina.
//!
//! This crate provides:
//! - [`Plane`]: a plane described by a unit normal and a signed distance,
//!   with construction from vertices, normalization, and matrix/quaternion
//!   transforms over the `affina-algebra` types

mod plane;

pub use plane::Plane;
