//! Backend HTTP client.
//!
//! Thin wrapper over `reqwest::Client`: base URL joining, bearer header,
//! per-request timeout and uniform status/envelope handling. The per-resource
//! modules add typed endpoint methods on top of this.

use crate::error::ApiError;
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the farm-management REST backend.
#[derive(Clone)]
pub struct BackendClient {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl BackendClient {
    /// Creates a client for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Sets the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    fn request(&self, method: Method, path: &str, token: Option<&str>) -> RequestBuilder {
        let mut request = self
            .client
            .request(method, self.url(path))
            .timeout(self.timeout);
        if let Some(token) = token {
            request = request.header("Authorization", format!("Bearer {}", token));
        }
        request
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let response = request.send().await.map_err(ApiError::from)?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(ApiError::Unauthorized);
        }
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ApiError::Server {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// GET an authenticated endpoint.
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        token: &str,
        path: &str,
    ) -> Result<T, ApiError> {
        debug!(path, "GET");
        self.send(self.request(Method::GET, path, Some(token))).await
    }

    /// GET an authenticated endpoint with a query string.
    pub(crate) async fn get_with_query<Q: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        token: &str,
        path: &str,
        query: &Q,
    ) -> Result<T, ApiError> {
        debug!(path, "GET");
        self.send(self.request(Method::GET, path, Some(token)).query(query))
            .await
    }

    /// POST a JSON body to an authenticated endpoint.
    pub(crate) async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        token: &str,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        debug!(path, "POST");
        self.send(self.request(Method::POST, path, Some(token)).json(body))
            .await
    }

    /// POST a JSON body without authentication (login/register).
    pub(crate) async fn post_public<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        debug!(path, "POST");
        self.send(self.request(Method::POST, path, None).json(body))
            .await
    }

    /// PUT a JSON body to an authenticated endpoint.
    pub(crate) async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        token: &str,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        debug!(path, "PUT");
        self.send(self.request(Method::PUT, path, Some(token)).json(body))
            .await
    }

    /// DELETE an authenticated endpoint.
    pub(crate) async fn delete<T: DeserializeOwned>(
        &self,
        token: &str,
        path: &str,
    ) -> Result<T, ApiError> {
        debug!(path, "DELETE");
        self.send(self.request(Method::DELETE, path, Some(token)))
            .await
    }
}

/// Generic `{ "message": ... }` acknowledgement envelope.
#[derive(Debug, serde::Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
