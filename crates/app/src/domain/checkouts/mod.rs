//! Checkouts

pub mod errors;
pub mod models;
mod repository;
pub mod service;
mod validate;

pub use errors::CheckoutsServiceError;
pub use service::*;
