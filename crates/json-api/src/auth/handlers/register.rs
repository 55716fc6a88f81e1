//! Register Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use tracing::error;

use bookery_app::domain::accounts::{AccountsServiceError, models::NewAccount};

use crate::{auth::models::AccountResponse, extensions::*, forms::FormInvalidResponse, state::State};

/// Register Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl From<RegisterRequest> for NewAccount {
    fn from(request: RegisterRequest) -> Self {
        NewAccount {
            username: request.username,
            email: request.email,
            password: request.password,
            confirm_password: request.confirm_password,
        }
    }
}

/// Register Handler
///
/// Creates a new account. Invalid form input is returned field-scoped
/// with a 422 status.
#[endpoint(
    tags("auth"),
    summary = "Register",
    responses(
        (status_code = StatusCode::CREATED, description = "Account created"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Invalid form input"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<RegisterRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<(), StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    match state.app.accounts.register(json.into_inner().into()).await {
        Ok(account) => {
            res.status_code(StatusCode::CREATED);
            res.render(Json(AccountResponse::from(account)));
        }
        Err(AccountsServiceError::Validation(errors)) => {
            res.status_code(StatusCode::UNPROCESSABLE_ENTITY);
            res.render(Json(FormInvalidResponse::from_errors(errors)));
        }
        Err(error) => {
            error!("failed to register account: {error}");

            return Err(StatusError::internal_server_error());
        }
    }

    Ok(())
}
