//! Session domain model.
//!
//! This module contains the core Session entity that represents
//! the client-side authentication state in the application's domain layer.

use serde::{Deserialize, Serialize};

/// Represents the client-side session state.
///
/// A session contains:
/// - Whether the user is currently authenticated
/// - The opaque bearer token sent on every authenticated request
/// - The currently selected farm, if any
///
/// This is the "pure" domain model that business logic operates on,
/// independent of any specific storage format. Invariant: after a completed
/// logout both the token and the selected farm are absent; a selected farm
/// id is only meaningful while the session is authenticated.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Session {
    /// True when a bearer token is held. The token is not validated against
    /// the backend here; a stale token surfaces lazily as an Unauthorized
    /// error on the first API call.
    pub is_authenticated: bool,
    /// Opaque bearer token, absent when logged out
    pub auth_token: Option<String>,
    /// Currently selected farm id, absent until a farm is chosen
    pub selected_farm_id: Option<i64>,
}

impl Session {
    /// Returns an authenticated session holding the given token.
    pub fn authenticated(token: impl Into<String>, farm_id: Option<i64>) -> Self {
        Self {
            is_authenticated: true,
            auth_token: Some(token.into()),
            selected_farm_id: farm_id,
        }
    }

    /// Returns the logged-out session.
    pub fn logged_out() -> Self {
        Self::default()
    }
}
