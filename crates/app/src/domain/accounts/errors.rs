//! Accounts service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

use crate::domain::validation::FieldError;

#[derive(Debug, Error)]
pub enum AccountsServiceError {
    #[error("invalid account data")]
    Validation(Vec<FieldError>),

    #[error("account already exists")]
    AlreadyExists,

    #[error("account not found")]
    NotFound,

    #[error("related resource not found")]
    InvalidReference,

    #[error("missing required data")]
    MissingRequiredData,

    #[error("invalid data")]
    InvalidData,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for AccountsServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadyExists,
            Some(ErrorKind::ForeignKeyViolation) => Self::InvalidReference,
            Some(ErrorKind::NotNullViolation) => Self::MissingRequiredData,
            Some(ErrorKind::CheckViolation) => Self::InvalidData,
            Some(ErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}

/// Turn a registration unique violation into the field it collides on.
pub(crate) fn registration_conflict(error: Error) -> AccountsServiceError {
    let constraint = error
        .as_database_error()
        .and_then(DatabaseError::constraint);

    match constraint {
        Some("accounts_username_key") => AccountsServiceError::Validation(vec![FieldError::new(
            "username",
            "username already taken",
        )]),
        Some("accounts_email_key") => AccountsServiceError::Validation(vec![FieldError::new(
            "email",
            "email already registered",
        )]),
        _ => AccountsServiceError::from(error),
    }
}
