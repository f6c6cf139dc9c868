use thiserror::Error;

/// Errors returned by vector and rectangle operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeometryError {
    #[error("division of a vector by zero")]
    DivisionByZero,

    #[error("operation is undefined for the null vector")]
    NullVector,

    #[error("interpolation needs at least 2 points, got {requested}")]
    TooFewPoints { requested: usize },
}

/// Convenience type alias for results using [`GeometryError`].
pub type Result<T> = std::result::Result<T, GeometryError>;
