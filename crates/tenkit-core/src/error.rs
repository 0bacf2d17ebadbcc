//! Error types for dense tensor operations
//!
//! Every failure in this crate is a caller-input error detected before any
//! state is touched, so the variants carry enough context to point at the
//! offending argument.

use thiserror::Error;

/// Error type for dense tensor operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TensorError {
    /// Mode index outside `[0, order)`, or repeated inside an unfolding group
    #[error("Invalid mode {mode}: must be < {order}. {context}")]
    InvalidMode {
        mode: usize,
        order: usize,
        context: String,
    },

    /// Matrix column count does not match the size of the target mode
    #[error("{operation}: dimension mismatch - expected {expected}, got {actual}")]
    DimensionMismatch {
        operation: String,
        expected: usize,
        actual: usize,
    },

    /// Two operands (or metadata and data) disagree on shape
    #[error("Shape mismatch: {0}")]
    ShapeMismatch(String),

    /// Strict fold requested on a tensor that is not unfolded
    #[error("Tensor is not unfolded: nothing to fold")]
    NotUnfolded,

    /// Raw buffer length does not match the declared shape
    #[error("Invalid shape: {0}")]
    InvalidShape(String),
}

/// Result type for dense tensor operations
pub type TensorResult<T> = Result<T, TensorError>;

impl TensorError {
    /// Create an invalid mode error
    pub fn invalid_mode(mode: usize, order: usize, context: impl Into<String>) -> Self {
        TensorError::InvalidMode {
            mode,
            order,
            context: context.into(),
        }
    }

    /// Create a dimension mismatch error
    pub fn dimension_mismatch(operation: impl Into<String>, expected: usize, actual: usize) -> Self {
        TensorError::DimensionMismatch {
            operation: operation.into(),
            expected,
            actual,
        }
    }
}
