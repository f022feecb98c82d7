//! Authentication endpoints.
//!
//! `POST /auth/login` returns `{ "access_token": ... }`; the token is opaque
//! and carries no refresh mechanism. Registration mirrors the signup form
//! fields.

use crate::client::{BackendClient, MessageResponse};
use crate::error::ApiError;
use serde::{Deserialize, Serialize};

/// Login credentials. Email is lowercased before sending, matching the
/// backend's account lookup.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into().to_lowercase(),
            password: password.into(),
        }
    }
}

/// Registration form fields.
#[derive(Debug, Clone, Serialize)]
pub struct Registration {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    access_token: String,
}

impl BackendClient {
    /// Exchanges credentials for a bearer token.
    pub async fn login(&self, credentials: &Credentials) -> Result<String, ApiError> {
        let response: LoginResponse = self.post_public("/auth/login", credentials).await?;
        Ok(response.access_token)
    }

    /// Registers a new account.
    pub async fn register(&self, registration: &Registration) -> Result<String, ApiError> {
        let response: MessageResponse = self.post_public("/auth/register", registration).await?;
        Ok(response.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_lowercase_email() {
        let credentials = Credentials::new("Farmer@Example.COM", "pw");
        assert_eq!(credentials.email, "farmer@example.com");
    }

    #[test]
    fn test_login_response_envelope() {
        let response: LoginResponse =
            serde_json::from_str(r#"{"access_token": "tok-123"}"#).unwrap();
        assert_eq!(response.access_token, "tok-123");
    }
}
