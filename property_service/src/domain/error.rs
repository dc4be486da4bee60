//! Domain error types

use property_model::PropertyValidationError;
use thiserror::Error;

/// Domain-level errors for property operations
#[derive(Debug, Error)]
pub enum PropertyError {
    /// Resource not found
    #[error("{0}")]
    NotFound(String),

    /// Validation error
    #[error("validation error: {0}")]
    Validation(#[from] PropertyValidationError),

    /// Internal error (wraps storage errors)
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Result type for domain operations
pub type Result<T> = std::result::Result<T, PropertyError>;
