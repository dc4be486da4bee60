//! Feature error taxonomy
//!
//! All errors carry a stable identifying code and an HTTP-equivalent status
//! code; raw store errors are never surfaced directly. A field belonging to
//! a different group is reported exactly like an absent one.

use property_model::PropertyValidationError;
use property_service::domain::PropertyError;
use thiserror::Error;

/// Typed errors surfaced by the custom profile attributes manager
#[derive(Debug, Error)]
pub enum CpaError {
    /// The field does not exist, or belongs to a different group
    #[error("property field not found")]
    FieldNotFound,

    /// The field fails base validation
    #[error("invalid property field: {0}")]
    InvalidField(#[from] PropertyValidationError),

    /// The group's active field count is at the configured ceiling
    #[error("field limit of {limit} reached")]
    QuotaExceeded { limit: usize },

    /// Opaque backing store failure
    #[error("store failure: {0}")]
    StoreFailure(#[source] anyhow::Error),
}

impl CpaError {
    /// Stable identifier for API layers.
    pub fn id(&self) -> &'static str {
        match self {
            CpaError::FieldNotFound => "field-not-found",
            CpaError::InvalidField(_) => "invalid-field",
            CpaError::QuotaExceeded { .. } => "quota-exceeded",
            CpaError::StoreFailure(_) => "store-failure",
        }
    }

    /// HTTP-equivalent status code.
    pub fn status_code(&self) -> u16 {
        match self {
            CpaError::FieldNotFound => 404,
            CpaError::InvalidField(_) => 400,
            CpaError::QuotaExceeded { .. } => 422,
            CpaError::StoreFailure(_) => 500,
        }
    }
}

impl From<PropertyError> for CpaError {
    fn from(err: PropertyError) -> Self {
        match err {
            PropertyError::NotFound(_) => CpaError::FieldNotFound,
            PropertyError::Validation(e) => CpaError::InvalidField(e),
            PropertyError::Internal(e) => CpaError::StoreFailure(e),
        }
    }
}
