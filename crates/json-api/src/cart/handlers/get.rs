//! Get Cart Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    cart::{errors::into_status_error, models::CartResponse},
    extensions::*,
    state::State,
};

/// Get Cart Handler
///
/// Returns the caller's open cart, creating an empty one on first use.
#[endpoint(
    tags("cart"),
    summary = "Get the open cart",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "The open cart"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Unauthorized"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let account = depot.account_uuid_or_401()?;

    let cart = state
        .app
        .carts
        .open_cart(account)
        .await
        .map_err(into_status_error)?;

    Ok(Json(cart.into()))
}
