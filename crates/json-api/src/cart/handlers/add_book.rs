//! Add Book To Cart Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use bookery_app::domain::carts::models::CartAddOutcome;

use crate::{
    cart::{errors::into_status_error, models::CartItemResponse},
    extensions::*,
    state::State,
};

/// Cart Add Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartAddResponse {
    /// `added` for a new line, `incremented` for a repeat add
    pub status: String,

    /// The affected cart line after the operation
    pub item: CartItemResponse,
}

/// Add Book To Cart Handler
///
/// Creates a qty-1 line for the book, or bumps the existing line's qty.
#[endpoint(
    tags("cart"),
    summary = "Add a book to the cart",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Line state after the add"),
        (status_code = StatusCode::NOT_FOUND, description = "Unknown book"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Unauthorized"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    slug: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<CartAddResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let account = depot.account_uuid_or_401()?;

    let outcome = state
        .app
        .carts
        .add_book(account, &slug.into_inner())
        .await
        .map_err(into_status_error)?;

    let (status, item) = match outcome {
        CartAddOutcome::Added(item) => ("added", item),
        CartAddOutcome::Incremented(item) => ("incremented", item),
    };

    Ok(Json(CartAddResponse {
        status: status.to_string(),
        item: item.into(),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use bookery_app::domain::carts::{CartsServiceError, MockCartsService};

    use crate::test_helpers::{TEST_ACCOUNT_UUID, authed_service, make_cart_item, state_with_carts};

    use super::*;

    fn make_service(carts: MockCartsService) -> Service {
        authed_service(
            state_with_carts(carts),
            Router::with_path("cart/books/{slug}").post(handler),
        )
    }

    #[tokio::test]
    async fn test_first_add_reports_added() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_add_book()
            .once()
            .withf(|account, slug| *account == TEST_ACCOUNT_UUID && slug == "dead-souls")
            .return_once(|_, _| Ok(CartAddOutcome::Added(make_cart_item("dead-souls", 1, 50_00))));

        let mut res = TestClient::post("http://example.com/cart/books/dead-souls")
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: CartAddResponse = res.take_json().await?;

        assert_eq!(body.status, "added");
        assert_eq!(body.item.qty, 1);
        assert_eq!(body.item.final_price, 50_00);

        Ok(())
    }

    #[tokio::test]
    async fn test_repeat_add_reports_incremented() -> TestResult {
        let mut carts = MockCartsService::new();

        carts.expect_add_book().once().return_once(|_, _| {
            Ok(CartAddOutcome::Incremented(make_cart_item(
                "dead-souls",
                2,
                50_00,
            )))
        });

        let mut res = TestClient::post("http://example.com/cart/books/dead-souls")
            .send(&make_service(carts))
            .await;

        let body: CartAddResponse = res.take_json().await?;

        assert_eq!(body.status, "incremented");
        assert_eq!(body.item.qty, 2);
        assert_eq!(body.item.final_price, 100_00);

        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_book_returns_404() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_add_book()
            .once()
            .return_once(|_, _| Err(CartsServiceError::NotFound));

        let res = TestClient::post("http://example.com/cart/books/missing")
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
