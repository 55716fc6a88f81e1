//! Update Account Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use bookery_app::domain::accounts::{AccountsServiceError, models::ProfileUpdate};

use crate::{
    account::errors::into_status_error, auth::models::AccountResponse, extensions::*,
    forms::FormInvalidResponse, state::State,
};

/// Update Account Request
///
/// Absent fields are left unchanged.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateAccountRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub image: Option<String>,
}

impl From<UpdateAccountRequest> for ProfileUpdate {
    fn from(request: UpdateAccountRequest) -> Self {
        ProfileUpdate {
            first_name: request.first_name,
            last_name: request.last_name,
            email: request.email,
            image: request.image,
        }
    }
}

/// Update Account Handler
///
/// Updates the caller's profile fields.
#[endpoint(
    tags("account"),
    summary = "Update own account",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "The updated account"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Invalid form input"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Unauthorized"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<UpdateAccountRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<(), StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let account = depot.account_uuid_or_401()?;

    let result = state
        .app
        .accounts
        .update_profile(account, json.into_inner().into())
        .await;

    match result {
        Ok(account) => {
            res.render(Json(AccountResponse::from(account)));
        }
        Err(AccountsServiceError::Validation(errors)) => {
            res.status_code(StatusCode::UNPROCESSABLE_ENTITY);
            res.render(Json(FormInvalidResponse::from_errors(errors)));
        }
        Err(error) => return Err(into_status_error(error)),
    }

    Ok(())
}
