//! Error types for tensor kernel operations
//!
//! Kernel errors carry the operation name and the shapes involved so that a
//! failure deep inside a reconstruction still points at the offending operand.

use std::fmt;
use tenkit_core::TensorError;

/// Error type for tensor kernel operations
#[derive(Debug, Clone, PartialEq)]
pub enum KernelError {
    /// Dimension mismatch between operands
    DimensionMismatch {
        operation: String,
        expected: Vec<usize>,
        actual: Vec<usize>,
        context: String,
    },

    /// Invalid mode/axis specification
    InvalidMode {
        mode: usize,
        max_mode: usize,
        context: String,
    },

    /// Empty input not allowed
    EmptyInput {
        operation: String,
        parameter: String,
    },

    /// Failure reported by a dense tensor operation
    Tensor(TensorError),
}

impl fmt::Display for KernelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KernelError::DimensionMismatch {
                operation,
                expected,
                actual,
                context,
            } => write!(
                f,
                "{}: dimension mismatch - expected {:?}, got {:?}. {}",
                operation, expected, actual, context
            ),

            KernelError::InvalidMode {
                mode,
                max_mode,
                context,
            } => write!(
                f,
                "Invalid mode {}: must be < {}. {}",
                mode, max_mode, context
            ),

            KernelError::EmptyInput {
                operation,
                parameter,
            } => write!(
                f,
                "{}: empty input not allowed for parameter '{}'",
                operation, parameter
            ),

            KernelError::Tensor(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for KernelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            KernelError::Tensor(err) => Some(err),
            _ => None,
        }
    }
}

impl From<TensorError> for KernelError {
    fn from(err: TensorError) -> Self {
        match err {
            TensorError::InvalidMode {
                mode,
                order,
                context,
            } => KernelError::InvalidMode {
                mode,
                max_mode: order,
                context,
            },
            TensorError::DimensionMismatch {
                operation,
                expected,
                actual,
            } => KernelError::DimensionMismatch {
                operation,
                expected: vec![expected],
                actual: vec![actual],
                context: String::new(),
            },
            other => KernelError::Tensor(other),
        }
    }
}

/// Result type for kernel operations
pub type KernelResult<T> = Result<T, KernelError>;

impl KernelError {
    /// Create a dimension mismatch error
    pub fn dimension_mismatch(
        operation: impl Into<String>,
        expected: Vec<usize>,
        actual: Vec<usize>,
        context: impl Into<String>,
    ) -> Self {
        KernelError::DimensionMismatch {
            operation: operation.into(),
            expected,
            actual,
            context: context.into(),
        }
    }

    /// Create an invalid mode error
    pub fn invalid_mode(mode: usize, max_mode: usize, context: impl Into<String>) -> Self {
        KernelError::InvalidMode {
            mode,
            max_mode,
            context: context.into(),
        }
    }

    /// Create an empty input error
    pub fn empty_input(operation: impl Into<String>, parameter: impl Into<String>) -> Self {
        KernelError::EmptyInput {
            operation: operation.into(),
            parameter: parameter.into(),
        }
    }
}
