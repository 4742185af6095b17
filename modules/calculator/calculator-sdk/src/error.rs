use crate::Operation;

/// Error type for Calculator operations
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CalculatorError {
    #[error("invalid argument for {operation}: {message}")]
    InvalidArgument {
        operation: Operation,
        message: String,
    },
}

impl CalculatorError {
    #[must_use]
    pub fn invalid_argument(operation: Operation, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            operation,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    /// Operation that rejected its input.
    #[must_use]
    pub fn operation(&self) -> Operation {
        match self {
            Self::InvalidArgument { operation, .. } => *operation,
        }
    }
}
