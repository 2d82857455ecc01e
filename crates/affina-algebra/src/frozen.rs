//! Permanently read-only wrapper for value types.

use std::ops::Deref;

/// A permanently frozen value.
///
/// `Frozen` takes ownership of the value it wraps, so the mutable owner is
/// gone after freezing, and only hands out shared references through
/// [`Deref`]. There is no `&mut` path and no unwrapping: once frozen, that
/// instance stays frozen for its whole lifetime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frozen<T>(T);

impl<T> Frozen<T> {
    /// Freeze a value, consuming the mutable owner.
    #[inline]
    pub fn new(value: T) -> Self {
        Self(value)
    }

    /// Shared reference to the frozen value.
    #[inline]
    pub fn get(&self) -> &T {
        &self.0
    }
}

impl<T> Deref for Frozen<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
