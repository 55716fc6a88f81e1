//! Accounts

pub mod errors;
pub mod models;
mod repository;
pub mod service;
mod validate;

pub use errors::AccountsServiceError;
pub use service::*;
