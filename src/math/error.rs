// src/math/error.rs
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    #[error("Insufficient points for operation: expected at least {expected}, got {actual}")]
    InsufficientPoints { expected: usize, actual: usize },

    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("Invalid operation: {operation}")]
    InvalidOperation { operation: String },

    #[error("Degenerate input: {reason}")]
    DegenerateInput { reason: String },

    #[error("Dimension mismatch: expected at most {expected} components, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}

pub type MathResult<T> = Result<T, MathError>;
