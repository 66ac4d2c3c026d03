use thiserror::Error;

use crate::types::InputKind;

/// Errors that can occur during regression operations
#[derive(Error, Debug)]
pub enum RegressionError {
    #[error("Input kind mismatch: x is a {x}, y is a {y} (both must be the same kind)")]
    TypeMismatch { x: InputKind, y: InputKind },

    #[error("Length mismatch: left input has {left} elements, right has {right}")]
    LengthMismatch { left: usize, right: usize },

    #[error("The model has not been fitted")]
    NotFitted,

    #[error("Empty input: {field} cannot be empty")]
    EmptyInput { field: &'static str },

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for regression operations
pub type RegressionResult<T> = Result<T, RegressionError>;
