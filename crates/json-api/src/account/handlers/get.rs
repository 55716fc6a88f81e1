//! Get Account Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    account::errors::into_status_error, auth::models::AccountResponse, extensions::*, state::State,
};

/// Get Account Handler
///
/// Returns the caller's account profile.
#[endpoint(
    tags("account"),
    summary = "Get own account",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "The caller's account"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Unauthorized"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<AccountResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let account = depot.account_uuid_or_401()?;

    let account = state
        .app
        .accounts
        .get_account(account)
        .await
        .map_err(into_status_error)?;

    Ok(Json(account.into()))
}
