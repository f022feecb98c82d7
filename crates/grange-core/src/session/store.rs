//! Session store trait.
//!
//! Defines the interface for the single source of truth for "is the user
//! logged in" and "which farm is active", shared across all callers.

use super::model::Session;
use crate::error::Result;
use async_trait::async_trait;

/// An abstract store for the client session, backed by durable storage.
///
/// This trait decouples callers from the specific storage mechanism
/// (e.g., a JSON file under the platform config directory). Implementations
/// must await the durable write before flipping in-memory state, so that a
/// crash between the two leaves at worst a disagreement that the next
/// startup restore resolves from storage.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Persists the token and marks the session authenticated.
    ///
    /// Any non-empty token is accepted; no format or expiry check is
    /// performed. When `farm_id` is given it is persisted and selected in
    /// the same call.
    ///
    /// # Returns
    ///
    /// - `Ok(())`: Token (and farm id, if given) persisted and state updated
    /// - `Err(_)`: Storage write failed; in-memory state unchanged
    async fn login(&self, token: &str, farm_id: Option<i64>) -> Result<()>;

    /// Clears the durable entries and resets in-memory state unconditionally.
    ///
    /// Idempotent: a second logout is a no-op with the same end state. The
    /// bearer token is not invalidated backend-side.
    async fn logout(&self) -> Result<()>;

    /// Persists and selects the active farm.
    ///
    /// No validation that the farm belongs to the current user; ownership is
    /// enforced by the backend on the next request.
    async fn set_farm_id(&self, farm_id: i64) -> Result<()>;

    /// Returns a snapshot of the current session state.
    async fn session(&self) -> Session;

    /// Returns the bearer token, or a NotFound error when logged out.
    async fn require_token(&self) -> Result<String> {
        self.session()
            .await
            .auth_token
            .ok_or_else(|| crate::GrangeError::not_found("auth token", "session"))
    }
}
