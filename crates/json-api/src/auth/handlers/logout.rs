//! Logout Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{
    auth::{errors::into_status_error, extract_bearer_token},
    extensions::*,
    state::State,
};

/// Logout Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct LogoutResponse {
    /// Always `"logged_out"`.
    pub status: String,
}

/// Logout Handler
///
/// Revokes the presented session token.
#[endpoint(
    tags("auth"),
    summary = "Log out",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Session revoked"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Unauthorized"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<LogoutResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    // The middleware has already authenticated this token.
    let token = extract_bearer_token(req)
        .ok_or_else(|| StatusError::unauthorized().brief("Missing or invalid Authorization header"))?;

    state
        .app
        .auth
        .logout(token)
        .await
        .map_err(into_status_error)?;

    Ok(Json(LogoutResponse {
        status: "logged_out".to_string(),
    }))
}
