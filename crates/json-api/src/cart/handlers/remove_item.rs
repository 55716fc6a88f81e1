//! Remove Cart Item Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use bookery_app::domain::carts::models::CartItemUuid;

use crate::{cart::errors::into_status_error, extensions::*, state::State};

/// Remove Cart Item Handler
///
/// Deletes a cart line; removing an unknown or foreign line is a no-op.
#[endpoint(
    tags("cart"),
    summary = "Remove a cart line",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Line removed (or was absent)"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Unauthorized"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    uuid: PathParam<Uuid>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<(), StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let account = depot.account_uuid_or_401()?;

    state
        .app
        .carts
        .remove_item(account, CartItemUuid::from_uuid(uuid.into_inner()))
        .await
        .map_err(into_status_error)?;

    res.status_code(StatusCode::NO_CONTENT);

    Ok(())
}

#[cfg(test)]
mod tests {
    use salvo::test::TestClient;
    use testresult::TestResult;

    use bookery_app::domain::carts::MockCartsService;

    use crate::test_helpers::{TEST_ACCOUNT_UUID, authed_service, state_with_carts};

    use super::*;

    #[tokio::test]
    async fn test_remove_item_returns_204() -> TestResult {
        let item = Uuid::now_v7();

        let mut carts = MockCartsService::new();

        carts
            .expect_remove_item()
            .once()
            .withf(move |account, uuid| {
                *account == TEST_ACCOUNT_UUID && *uuid == CartItemUuid::from_uuid(item)
            })
            .return_once(|_, _| Ok(()));

        let service = authed_service(
            state_with_carts(carts),
            Router::with_path("cart/items/{uuid}").delete(handler),
        );

        let res = TestClient::delete(format!("http://example.com/cart/items/{item}"))
            .send(&service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NO_CONTENT));

        Ok(())
    }
}
