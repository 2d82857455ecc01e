/// An error type for algebra operations.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgebraError {
    /// Error when normalizing a vector or normal of exactly zero length.
    #[error("cannot normalize a zero-length vector")]
    ZeroLength,

    /// Error when inverting a singular matrix.
    #[error("matrix is singular and cannot be inverted")]
    SingularMatrix,
}
