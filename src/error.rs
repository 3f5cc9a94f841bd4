//! Error types for the physics engine.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PhysicsError {
    /// Operands of a vector operation (or a conversion) have different dimensions.
    #[error("vector dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    /// Geometry for which the requested quantity is undefined, e.g. two coincident centers.
    #[error("degenerate geometry: {0}")]
    DegenerateGeometry(&'static str),

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type for physics engine operations
pub type Result<T> = std::result::Result<T, PhysicsError>;
