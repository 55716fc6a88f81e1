//! Wishlist Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    books::models::BookResponse, extensions::*, state::State, wishlist::errors::into_status_error,
};

/// Wishlist Index Handler
///
/// Returns the caller's wishlist books.
#[endpoint(
    tags("wishlist"),
    summary = "List wishlist books",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Wishlist books"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Unauthorized"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<BookResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let account = depot.account_uuid_or_401()?;

    let books = state
        .app
        .wishlists
        .list(account)
        .await
        .map_err(into_status_error)?;

    Ok(Json(books.into_iter().map(BookResponse::from).collect()))
}
