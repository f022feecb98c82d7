//! Use-case error type.

use grange_api::ApiError;
use grange_core::GrangeError;
use thiserror::Error;

/// Errors surfaced by the application layer.
///
/// Validation failures never reach the network; session errors come from the
/// durable store; everything else is a classified backend error.
#[derive(Error, Debug)]
pub enum UseCaseError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Session error: {0}")]
    Session(String),
}

impl UseCaseError {
    /// True when the failure was caught before any network call.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// True when the backend rejected the bearer token.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Api(ApiError::Unauthorized))
    }
}

impl From<GrangeError> for UseCaseError {
    fn from(err: GrangeError) -> Self {
        match err {
            GrangeError::Validation(message) => Self::Validation(message),
            GrangeError::NotFound {
                entity_type: "auth token",
                ..
            } => Self::Api(ApiError::MissingToken),
            other => Self::Session(other.to_string()),
        }
    }
}
