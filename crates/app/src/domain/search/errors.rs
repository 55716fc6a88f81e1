//! Search service errors.

use sqlx::Error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchServiceError {
    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for SearchServiceError {
    fn from(error: Error) -> Self {
        Self::Sql(error)
    }
}
