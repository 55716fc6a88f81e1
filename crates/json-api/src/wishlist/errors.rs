//! Errors

use salvo::http::StatusError;
use tracing::error;

use bookery_app::domain::wishlists::WishlistsServiceError;

pub(crate) fn into_status_error(error: WishlistsServiceError) -> StatusError {
    match error {
        WishlistsServiceError::NotFound => StatusError::not_found(),
        WishlistsServiceError::InvalidReference => {
            StatusError::bad_request().brief("Invalid wishlist payload")
        }
        WishlistsServiceError::Sql(source) => {
            error!("wishlist storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
