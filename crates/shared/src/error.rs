//! Application-wide error types.

use thiserror::Error;

use crate::types::UnknownCurrency;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded or deserialized.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Validation error.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Failure in the tool itself rather than in its input.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the process exit code for this error (`sysexits.h` values).
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Config(_) => 78,
            Self::Validation(_) => 65,
            Self::Internal(_) => 70,
        }
    }

    /// Returns a stable machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Config(_) => "CONFIG_ERROR",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<UnknownCurrency> for AppError {
    fn from(err: UnknownCurrency) -> Self {
        Self::Validation(err.to_string())
    }
}
