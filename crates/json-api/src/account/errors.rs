//! Errors

use salvo::http::StatusError;
use tracing::error;

use bookery_app::domain::accounts::AccountsServiceError;

/// Maps every variant except `Validation`, which carries field errors
/// and is rendered as a form-invalid body by the handler.
pub(crate) fn into_status_error(error: AccountsServiceError) -> StatusError {
    match error {
        AccountsServiceError::NotFound => StatusError::not_found(),
        AccountsServiceError::AlreadyExists => {
            StatusError::conflict().brief("Account already exists")
        }
        AccountsServiceError::Validation(_)
        | AccountsServiceError::InvalidReference
        | AccountsServiceError::MissingRequiredData
        | AccountsServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid account payload")
        }
        AccountsServiceError::Sql(source) => {
            error!("accounts storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
