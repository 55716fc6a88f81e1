//! Recalc Cart Handler

use std::{collections::BTreeMap, sync::Arc};

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bookery_app::domain::carts::models::CartItemUuid;

use crate::{
    cart::{errors::into_status_error, models::CartResponse},
    extensions::*,
    state::State,
};

/// Recalc Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct RecalcRequest {
    /// Quantities keyed by cart item UUID
    pub items: BTreeMap<Uuid, u64>,
}

/// Recalc Cart Handler
///
/// Bulk-sets line quantities. Fails with 404 when any item does not
/// belong to the caller's open cart; nothing is applied in that case.
#[endpoint(
    tags("cart"),
    summary = "Bulk-set cart quantities",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "The recalculated cart"),
        (status_code = StatusCode::NOT_FOUND, description = "An item is not in the caller's cart"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid quantity"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Unauthorized"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<RecalcRequest>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let account = depot.account_uuid_or_401()?;

    let quantities: Vec<(CartItemUuid, u64)> = json
        .into_inner()
        .items
        .into_iter()
        .map(|(uuid, qty)| (CartItemUuid::from_uuid(uuid), qty))
        .collect();

    let cart = state
        .app
        .carts
        .set_quantities(account, quantities)
        .await
        .map_err(into_status_error)?;

    Ok(Json(cart.into()))
}
