//! Classified backend errors.
//!
//! Failure classes are kept apart so callers can react differently:
//! `Unauthorized` forces a logout, `Network` is retryable, `Server` and
//! `Decode` are surfaced to the user.

use thiserror::Error;

/// Errors from the backend collaborator.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The bearer token was rejected (401/403). The session is stale;
    /// callers should force a logout.
    #[error("Unauthorized: backend rejected the bearer token")]
    Unauthorized,

    /// The request never completed (DNS, connect, timeout). Retryable.
    #[error("Network error: {0}")]
    Network(String),

    /// The backend answered with a non-success status.
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// The response body did not match the expected envelope.
    #[error("Decode error: {0}")]
    Decode(String),

    /// No token is held; the call was never attempted.
    #[error("No auth token found")]
    MissingToken,
}

impl ApiError {
    /// True for transient failures worth retrying as-is.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Network(_))
    }

    /// True when the session should be discarded.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            Self::Server {
                status: status.as_u16(),
                message: err.to_string(),
            }
        } else {
            // Timeouts, connection refusals and request build failures all
            // count as the request never having completed.
            Self::Network(err.to_string())
        }
    }
}
