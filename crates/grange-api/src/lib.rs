//! HTTP client for the farm-management backend.
//!
//! Every resource lives under a REST endpoint with bearer-token
//! authentication (`Authorization: Bearer <token>`). Response envelopes are
//! typed per resource because the backend wraps collections inconsistently
//! (`{farms: [...]}`, `{sale: {...}}`, bare objects for the dashboard).
//!
//! The [`backend::FarmBackend`] trait is the seam the application layer
//! consumes, so use cases can be tested against a fake without a live
//! server.

pub mod auth;
pub mod backend;
pub mod client;
pub mod crops;
pub mod dashboard;
pub mod error;
pub mod expenses;
pub mod farms;
pub mod livestock;
pub mod sales;

pub use backend::FarmBackend;
pub use client::BackendClient;
pub use error::ApiError;
