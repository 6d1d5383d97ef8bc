use thiserror::Error;

/// Errors produced by type operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    /// The input is not a recognizable color expression.
    #[error("invalid hex color value: {0}")]
    InvalidColor(String),
}

/// Result alias for type operations.
pub type TypeResult<T> = Result<T, TypeError>;
