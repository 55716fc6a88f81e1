//! Category Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    books::errors::into_status_error, categories::models::CategoryResponse, extensions::*,
    state::State,
};

/// Category Index Handler
///
/// Returns the main categories used for navigation.
#[endpoint(
    tags("categories"),
    summary = "List main categories",
    responses(
        (status_code = StatusCode::OK, description = "Main categories"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<CategoryResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let categories = state
        .app
        .catalog
        .list_main_categories()
        .await
        .map_err(into_status_error)?;

    Ok(Json(
        categories.into_iter().map(CategoryResponse::from).collect(),
    ))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use bookery_app::domain::catalog::MockCatalogService;

    use crate::test_helpers::{make_category, public_service, state_with_catalog};

    use super::*;

    #[tokio::test]
    async fn test_index_returns_main_categories() -> TestResult {
        let mut catalog = MockCatalogService::new();

        catalog
            .expect_list_main_categories()
            .once()
            .return_once(|| Ok(vec![make_category("fiction")]));

        let service = public_service(
            state_with_catalog(catalog),
            Router::with_path("categories").get(handler),
        );

        let mut res = TestClient::get("http://example.com/categories")
            .send(&service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: Vec<CategoryResponse> = res.take_json().await?;

        assert_eq!(body.len(), 1);
        assert_eq!(body[0].slug, "fiction");
        assert_eq!(body[0].kind, "main");

        Ok(())
    }
}
