//! Money-level error types.

use thiserror::Error;

/// Result type alias using `MoneyError`.
pub type MoneyResult<T> = Result<T, MoneyError>;

/// Errors that can occur when constructing or combining money values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    /// The raw input could not be parsed as an exact decimal amount.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Attempted to divide an amount by zero.
    #[error("Division by zero")]
    DivisionByZero,
}

impl MoneyError {
    /// Returns the error code for presentation-layer messages.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidAmount(_) => "INVALID_AMOUNT",
            Self::DivisionByZero => "DIVISION_BY_ZERO",
        }
    }
}
