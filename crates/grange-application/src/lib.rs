//! Application layer: the use cases behind every screen.
//!
//! Every screen needs the same fetch-filter-redirect procedure; it is
//! consolidated once in [`farm_scope`] and the per-resource use cases stay
//! thin. Each use case owns `Arc` handles to the session store and the
//! backend seam, so screens receive an explicit dependency-injected engine
//! rather than ambient global state.

pub mod auth;
pub mod crops;
pub mod dashboard;
pub mod error;
pub mod expenses;
pub mod farm_scope;
pub mod farms;
pub mod livestock;
pub mod reports;
pub mod sales;
pub mod screen;

pub use error::UseCaseError;
pub use farm_scope::{FarmContext, FarmScope};
pub use screen::ScreenState;

#[cfg(test)]
mod test_support;
