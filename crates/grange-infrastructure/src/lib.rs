//! Infrastructure layer: durable storage and session persistence.
//!
//! This crate provides the concrete implementations behind the traits in
//! `grange-core`: platform path resolution, the durable session file, the
//! application config file, and the session store.

pub mod paths;
pub mod session_store;
pub mod storage;

pub use paths::GrangePaths;
pub use session_store::SessionStoreImpl;
pub use storage::config_storage::AppConfig;
pub use storage::session_storage::{SessionRecord, SessionStorage};
