//! The consolidated farm-scoped fetch.
//!
//! Every resource screen needs "the list of X belonging to the user's farm".
//! The procedure is always the same:
//!
//! 1. Fetch the farm list for the current session.
//! 2. Empty list → `NoFarm`; the resource fetch step must not run.
//! 3. Otherwise select the session's farm when it is in the list, else the
//!    first farm.
//! 4. Fetch the full resource collection and filter client-side by farm id
//!    (the backend does not filter most resources server-side).
//!
//! An `Unauthorized` answer anywhere forces a logout through the session
//! store: the persisted token is stale and keeping it would wedge every
//! subsequent screen.

use crate::error::UseCaseError;
use grange_api::{ApiError, FarmBackend};
use grange_core::farm::{Farm, FarmScoped};
use grange_core::session::SessionStore;
use std::sync::Arc;
use tracing::{debug, warn};

/// Outcome of farm resolution.
#[derive(Debug, Clone, PartialEq)]
pub enum FarmScope {
    /// The user owns no farm; callers route to farm creation.
    NoFarm,
    /// The farm all subsequent fetches are scoped to.
    Selected(Farm),
}

/// Shared dependencies for every use case: the backend seam and the session
/// store, both dependency-injected.
#[derive(Clone)]
pub struct FarmContext {
    backend: Arc<dyn FarmBackend>,
    session: Arc<dyn SessionStore>,
}

impl FarmContext {
    pub fn new(backend: Arc<dyn FarmBackend>, session: Arc<dyn SessionStore>) -> Self {
        Self { backend, session }
    }

    pub fn backend(&self) -> &dyn FarmBackend {
        self.backend.as_ref()
    }

    pub fn session(&self) -> &dyn SessionStore {
        self.session.as_ref()
    }

    /// Returns the bearer token or `MissingToken` without touching the
    /// network.
    pub async fn token(&self) -> Result<String, UseCaseError> {
        self.session
            .require_token()
            .await
            .map_err(UseCaseError::from)
    }

    /// Maps a backend result, forcing a logout when the token was rejected.
    pub async fn check_auth<T>(&self, result: Result<T, ApiError>) -> Result<T, UseCaseError> {
        match result {
            Err(ApiError::Unauthorized) => {
                warn!("backend rejected bearer token, clearing session");
                if let Err(e) = self.session.logout().await {
                    warn!(error = %e, "failed to clear session after rejection");
                }
                Err(UseCaseError::Api(ApiError::Unauthorized))
            }
            other => other.map_err(UseCaseError::from),
        }
    }

    /// Resolves the farm scope for the current session (steps 1-3 above).
    pub async fn resolve_scope(&self) -> Result<FarmScope, UseCaseError> {
        let token = self.token().await?;
        let farms = self
            .check_auth(self.backend.list_farms(&token).await)
            .await?;

        let Some(first) = farms.first() else {
            debug!("no farms for user");
            return Ok(FarmScope::NoFarm);
        };

        let preferred = self.session.session().await.selected_farm_id;
        let farm = preferred
            .and_then(|id| farms.iter().find(|f| f.farm_id == id))
            .unwrap_or(first)
            .clone();
        debug!(farm_id = farm.farm_id, "farm scope resolved");
        Ok(FarmScope::Selected(farm))
    }
}

/// Client-side scoping: keeps only the items belonging to the selected farm.
pub fn scope_items<T: FarmScoped>(items: Vec<T>, farm_id: i64) -> Vec<T> {
    items
        .into_iter()
        .filter(|item| item.farm_id() == farm_id)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{FakeBackend, farm, fake_store, livestock};

    fn context(backend: FakeBackend) -> FarmContext {
        FarmContext::new(Arc::new(backend), fake_store("tok-1", None))
    }

    #[tokio::test]
    async fn test_no_farms_resolves_no_farm() {
        let ctx = context(FakeBackend::default());
        let scope = ctx.resolve_scope().await.unwrap();
        assert_eq!(scope, FarmScope::NoFarm);
    }

    #[tokio::test]
    async fn test_first_farm_selected_by_default() {
        let backend = FakeBackend::default().with_farms(vec![farm(1), farm(2)]);
        let ctx = context(backend);
        match ctx.resolve_scope().await.unwrap() {
            FarmScope::Selected(selected) => assert_eq!(selected.farm_id, 1),
            other => panic!("expected Selected, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_session_farm_wins_when_present() {
        let backend = FakeBackend::default().with_farms(vec![farm(1), farm(2)]);
        let ctx = FarmContext::new(Arc::new(backend), fake_store("tok-1", Some(2)));
        match ctx.resolve_scope().await.unwrap() {
            FarmScope::Selected(selected) => assert_eq!(selected.farm_id, 2),
            other => panic!("expected Selected, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_stale_session_farm_falls_back_to_first() {
        let backend = FakeBackend::default().with_farms(vec![farm(1), farm(2)]);
        let ctx = FarmContext::new(Arc::new(backend), fake_store("tok-1", Some(99)));
        match ctx.resolve_scope().await.unwrap() {
            FarmScope::Selected(selected) => assert_eq!(selected.farm_id, 1),
            other => panic!("expected Selected, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unauthorized_forces_logout() {
        let backend = FakeBackend::default().rejecting_tokens();
        let store = fake_store("stale-tok", Some(1));
        let ctx = FarmContext::new(Arc::new(backend), store.clone());

        let err = ctx.resolve_scope().await.unwrap_err();
        assert!(err.is_unauthorized());

        let session = store.session().await;
        assert!(!session.is_authenticated);
        assert!(session.selected_farm_id.is_none());
    }

    #[tokio::test]
    async fn test_logged_out_never_calls_backend() {
        let backend = FakeBackend::default().with_farms(vec![farm(1)]);
        let counters = backend.counters();
        let dir = tempfile::TempDir::new().unwrap();
        let store = grange_infrastructure::SessionStoreImpl::with_storage(
            grange_infrastructure::SessionStorage::with_path(dir.path().join("session.json")),
        )
        .unwrap();
        let ctx = FarmContext::new(Arc::new(backend), Arc::new(store));

        let err = ctx.resolve_scope().await.unwrap_err();
        assert!(matches!(err, UseCaseError::Api(ApiError::MissingToken)));
        assert_eq!(counters.farm_lists(), 0);
    }

    #[test]
    fn test_scope_items_filters_by_farm() {
        let items = vec![livestock(1, 1), livestock(2, 2), livestock(3, 1)];
        let scoped = scope_items(items, 1);
        assert_eq!(scoped.len(), 2);
        assert!(scoped.iter().all(|l| l.farm_id == 1));
    }

    #[test]
    fn test_scope_items_empty_result_is_fine() {
        let items = vec![livestock(1, 2)];
        let scoped = scope_items(items, 1);
        assert!(scoped.is_empty());
    }
}
