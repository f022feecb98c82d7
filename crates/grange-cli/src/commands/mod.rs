pub mod auth;
pub mod context;
pub mod crop;
pub mod dashboard;
pub mod expense;
pub mod farm;
pub mod livestock;
pub mod report;
pub mod sale;
pub mod utils;
