//! Remove From Wishlist Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use bookery_app::domain::wishlists::models::WishlistRemoveOutcome;

use crate::{extensions::*, state::State, wishlist::errors::into_status_error};

/// Wishlist Remove Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct WishlistRemoveResponse {
    /// `removed`, or `not_present` when the book was never listed
    pub status: String,
}

/// Remove From Wishlist Handler
///
/// Idempotent remove; removing an absent book reports `not_present`.
#[endpoint(
    tags("wishlist"),
    summary = "Remove a book from the wishlist",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Membership state after the remove"),
        (status_code = StatusCode::NOT_FOUND, description = "Unknown book"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Unauthorized"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    slug: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<WishlistRemoveResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let account = depot.account_uuid_or_401()?;

    let outcome = state
        .app
        .wishlists
        .remove(account, &slug.into_inner())
        .await
        .map_err(into_status_error)?;

    let status = match outcome {
        WishlistRemoveOutcome::Removed => "removed",
        WishlistRemoveOutcome::NotPresent => "not_present",
    };

    Ok(Json(WishlistRemoveResponse {
        status: status.to_string(),
    }))
}
