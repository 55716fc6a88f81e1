//! Errors

use salvo::http::StatusError;
use tracing::error;

use bookery_app::domain::{carts::CartsServiceError, checkouts::CheckoutsServiceError};

pub(crate) fn into_status_error(error: CartsServiceError) -> StatusError {
    match error {
        CartsServiceError::NotFound => StatusError::not_found(),
        CartsServiceError::InvalidReference
        | CartsServiceError::MissingRequiredData
        | CartsServiceError::InvalidData => StatusError::bad_request().brief("Invalid cart payload"),
        CartsServiceError::Sql(source) => {
            error!("cart storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}

/// Maps every variant except `Validation`, which carries field errors
/// and is rendered as a form-invalid body by the handler.
pub(crate) fn checkout_into_status_error(error: CheckoutsServiceError) -> StatusError {
    match error {
        CheckoutsServiceError::CartClosed | CheckoutsServiceError::AlreadyExists => {
            StatusError::conflict().brief("Cart is already checked out")
        }
        CheckoutsServiceError::EmptyCart => {
            StatusError::unprocessable_entity().brief("Cart has no items")
        }
        CheckoutsServiceError::NotFound => StatusError::not_found(),
        CheckoutsServiceError::Validation(_) | CheckoutsServiceError::InvalidReference => {
            StatusError::bad_request().brief("Invalid checkout payload")
        }
        CheckoutsServiceError::Sql(source) => {
            error!("checkout storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
