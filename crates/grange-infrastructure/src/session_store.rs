//! Session store implementation.
//!
//! Single source of truth for "is the user logged in" and "which farm is
//! active". State is cached in memory and persisted through
//! [`SessionStorage`]; every mutation awaits the durable write before
//! flipping the in-memory state, so a storage failure leaves memory
//! untouched and a crash between the two is resolved by the next startup
//! restore.

use crate::storage::session_storage::{SessionRecord, SessionStorage};
use async_trait::async_trait;
use grange_core::error::{GrangeError, Result};
use grange_core::session::{Session, SessionStore};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

/// Durable session store backed by the session file.
///
/// All methods are async to support non-blocking I/O in async contexts.
/// Internally the state is wrapped in `Arc<Mutex<_>>` for thread-safe
/// access, mirroring the lifecycle of the app: restored once at boot,
/// mutated by login/logout/farm selection.
#[derive(Clone)]
pub struct SessionStoreImpl {
    /// Cached session state restored from storage.
    state: Arc<Mutex<Session>>,
    /// Durable storage for the two session entries.
    storage: Arc<SessionStorage>,
}

impl SessionStoreImpl {
    /// Creates a store over the default session file and restores persisted
    /// state.
    ///
    /// Authentication is assumed from token presence alone; a token that has
    /// expired backend-side surfaces lazily as an Unauthorized error on the
    /// first API call.
    pub fn new() -> Result<Self> {
        let storage = SessionStorage::new().map_err(GrangeError::from)?;
        Self::with_storage(storage)
    }

    /// Creates a store over a specific storage location (for testing).
    pub fn with_storage(storage: SessionStorage) -> Result<Self> {
        let record = storage.load()?.unwrap_or_default();
        let session = Session {
            is_authenticated: record.access_token.is_some(),
            selected_farm_id: record.farm_id_value(),
            auth_token: record.access_token,
        };
        debug!(
            authenticated = session.is_authenticated,
            farm_id = ?session.selected_farm_id,
            "session restored"
        );
        Ok(Self {
            state: Arc::new(Mutex::new(session)),
            storage: Arc::new(storage),
        })
    }

    /// Writes a record on a blocking thread and waits for it.
    async fn persist(&self, record: SessionRecord) -> Result<()> {
        let storage = self.storage.clone();
        tokio::task::spawn_blocking(move || storage.save(&record).map_err(GrangeError::from))
            .await
            .map_err(|e| GrangeError::internal(format!("Failed to join task: {}", e)))?
    }
}

#[async_trait]
impl SessionStore for SessionStoreImpl {
    async fn login(&self, token: &str, farm_id: Option<i64>) -> Result<()> {
        if token.is_empty() {
            return Err(GrangeError::validation("auth token must not be empty"));
        }

        let mut state = self.state.lock().await;

        // Keep any previously selected farm unless the caller provides one.
        let selected = farm_id.or(state.selected_farm_id);
        let mut record = SessionRecord {
            access_token: Some(token.to_string()),
            farm_id: None,
        };
        if let Some(id) = selected {
            record.set_farm_id_value(id);
        }

        // Durable write first; state flips only after it succeeds.
        self.persist(record).await?;

        *state = Session::authenticated(token, selected);
        debug!(farm_id = ?selected, "login recorded");
        Ok(())
    }

    async fn logout(&self) -> Result<()> {
        let mut state = self.state.lock().await;

        let storage = self.storage.clone();
        tokio::task::spawn_blocking(move || storage.clear().map_err(GrangeError::from))
            .await
            .map_err(|e| GrangeError::internal(format!("Failed to join task: {}", e)))??;

        *state = Session::logged_out();
        debug!("session cleared");
        Ok(())
    }

    async fn set_farm_id(&self, farm_id: i64) -> Result<()> {
        let mut state = self.state.lock().await;

        let mut record = SessionRecord {
            access_token: state.auth_token.clone(),
            farm_id: None,
        };
        record.set_farm_id_value(farm_id);
        self.persist(record).await?;

        state.selected_farm_id = Some(farm_id);
        Ok(())
    }

    async fn session(&self) -> Session {
        self.state.lock().await.clone()
    }
}
