//! Durable storage backends.

pub mod config_storage;
pub mod session_storage;
