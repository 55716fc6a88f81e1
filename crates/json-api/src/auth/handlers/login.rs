//! Login Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{
    auth::{errors::into_status_error, models::AccountResponse},
    extensions::*,
    state::State,
};

/// Login Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct LoginResponse {
    /// One-time bearer session token
    pub token: String,

    /// The authenticated account
    pub account: AccountResponse,
}

/// Login Handler
///
/// Verifies credentials and issues a bearer session token.
#[endpoint(
    tags("auth"),
    summary = "Log in",
    responses(
        (status_code = StatusCode::OK, description = "Session issued"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Invalid credentials"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<LoginRequest>,
    depot: &mut Depot,
) -> Result<Json<LoginResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();

    let session = state
        .app
        .auth
        .login(&request.username, &request.password)
        .await
        .map_err(into_status_error)?;

    Ok(Json(LoginResponse {
        token: session.token,
        account: session.account.into(),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;
    use uuid::Uuid;

    use bookery_app::auth::{AuthServiceError, IssuedSession, MockAuthService};

    use crate::test_helpers::{make_account, public_service, state_with_auth};

    use super::*;

    fn make_service(auth: MockAuthService) -> Service {
        public_service(
            state_with_auth(auth),
            Router::with_path("auth/login").post(handler),
        )
    }

    #[tokio::test]
    async fn test_login_success_returns_token_and_account() -> TestResult {
        let mut auth = MockAuthService::new();

        auth.expect_login()
            .once()
            .withf(|username, password| username == "reader" && password == "123456")
            .return_once(|_, _| {
                Ok(IssuedSession {
                    token: "bk_v1_token".to_string(),
                    session_uuid: Uuid::nil(),
                    account: make_account("reader"),
                })
            });

        let mut res = TestClient::post("http://example.com/auth/login")
            .json(&json!({ "username": "reader", "password": "123456" }))
            .send(&make_service(auth))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: LoginResponse = res.take_json().await?;

        assert_eq!(body.token, "bk_v1_token");
        assert_eq!(body.account.username, "reader");

        Ok(())
    }

    #[tokio::test]
    async fn test_wrong_credentials_return_401() -> TestResult {
        let mut auth = MockAuthService::new();

        auth.expect_login()
            .once()
            .return_once(|_, _| Err(AuthServiceError::InvalidCredentials));

        let res = TestClient::post("http://example.com/auth/login")
            .json(&json!({ "username": "reader", "password": "wrong" }))
            .send(&make_service(auth))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }
}
