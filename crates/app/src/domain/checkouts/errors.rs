//! Checkouts service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

use crate::domain::validation::FieldError;

#[derive(Debug, Error)]
pub enum CheckoutsServiceError {
    #[error("invalid shipping data")]
    Validation(Vec<FieldError>),

    #[error("cart is already checked out")]
    CartClosed,

    #[error("cart has no items")]
    EmptyCart,

    #[error("cart or checkout not found")]
    NotFound,

    #[error("checkout already exists")]
    AlreadyExists,

    #[error("related resource not found")]
    InvalidReference,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for CheckoutsServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadyExists,
            Some(ErrorKind::ForeignKeyViolation) => Self::InvalidReference,
            _ => Self::Sql(error),
        }
    }
}
