//! Error types shared by every provider.
//!
//! A provider that simply has no answer for a query does NOT return an error.
//! Errors are reserved for invalid requests, so an aggregator can tell
//! "abort" apart from "ask the next provider".

use thiserror::Error;

/// Result type alias using `MoneyError`.
pub type MoneyResult<T> = Result<T, MoneyError>;

/// Money handling error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    /// A required argument was missing or malformed.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Currency code not present in the registry.
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    /// Text could not be parsed into a monetary amount.
    #[error("Parse error: {0}")]
    Parse(String),
}

impl MoneyError {
    /// Returns the stable error code for this error.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidArgument(_) => "INVALID_ARGUMENT",
            Self::UnknownCurrency(_) => "UNKNOWN_CURRENCY",
            Self::Parse(_) => "PARSE_ERROR",
        }
    }

    /// Shorthand for building an `InvalidArgument` error.
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}
