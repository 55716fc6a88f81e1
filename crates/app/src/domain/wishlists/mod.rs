//! Wishlists

pub mod errors;
pub mod models;
mod repository;
pub mod service;

pub use errors::WishlistsServiceError;
pub use service::*;
