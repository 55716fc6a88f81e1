//! Comments

pub mod errors;
pub mod models;
mod repository;
pub mod service;

pub use errors::CommentsServiceError;
pub use service::*;
