pub mod crop;
pub mod dashboard;
pub mod error;
pub mod expense;
pub mod farm;
pub mod livestock;
pub mod sale;
pub mod session;
pub mod validate;

// Re-export common error type
pub use error::GrangeError;

pub use farm::FarmScoped;
