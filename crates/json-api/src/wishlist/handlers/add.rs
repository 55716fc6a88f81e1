//! Add To Wishlist Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use bookery_app::domain::wishlists::models::WishlistAddOutcome;

use crate::{extensions::*, state::State, wishlist::errors::into_status_error};

/// Wishlist Add Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct WishlistAddResponse {
    /// `added`, or `already_present` for a repeat add
    pub status: String,
}

/// Add To Wishlist Handler
///
/// Idempotent add; a repeat add reports `already_present`.
#[endpoint(
    tags("wishlist"),
    summary = "Add a book to the wishlist",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Membership state after the add"),
        (status_code = StatusCode::NOT_FOUND, description = "Unknown book"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Unauthorized"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    slug: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<WishlistAddResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let account = depot.account_uuid_or_401()?;

    let outcome = state
        .app
        .wishlists
        .add(account, &slug.into_inner())
        .await
        .map_err(into_status_error)?;

    let status = match outcome {
        WishlistAddOutcome::Added => "added",
        WishlistAddOutcome::AlreadyPresent => "already_present",
    };

    Ok(Json(WishlistAddResponse {
        status: status.to_string(),
    }))
}
