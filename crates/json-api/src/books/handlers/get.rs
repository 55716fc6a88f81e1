//! Get Book Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use bookery_app::domain::comments::RECENT_COMMENTS;

use crate::{
    auth::extract_bearer_token,
    books::{errors::into_status_error, models::BookResponse},
    comments::models::CommentResponse,
    extensions::*,
    state::State,
};

/// Book Detail Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct BookDetailResponse {
    /// The book itself
    pub book: BookResponse,

    /// Books from the same categories, best mark first
    pub also_like: Vec<BookResponse>,

    /// The most recent comments
    pub comments: Vec<CommentResponse>,

    /// Whether the book is on the caller's wishlist; absent for
    /// anonymous requests
    pub on_wishlist: Option<bool>,
}

/// Get Book Handler
///
/// Book detail: the book, similar books, its latest comments, and the
/// caller's wishlist flag when a valid session is presented.
#[endpoint(
    tags("books"),
    summary = "Get book detail",
    responses(
        (status_code = StatusCode::OK, description = "Book detail"),
        (status_code = StatusCode::NOT_FOUND, description = "Unknown book"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    slug: PathParam<String>,
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<BookDetailResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let slug = slug.into_inner();

    let book = state
        .app
        .catalog
        .get_book(&slug)
        .await
        .map_err(into_status_error)?;

    let also_like = state
        .app
        .catalog
        .also_like(&slug)
        .await
        .map_err(into_status_error)?;

    let comments = state
        .app
        .comments
        .list_book_comments(&slug, RECENT_COMMENTS)
        .await
        .map_err(crate::comments::errors::into_status_error)?;

    // This route is public; a presented session only enriches the
    // response, so auth failures degrade to an anonymous view.
    let account = match extract_bearer_token(req) {
        Some(token) => state.app.auth.authenticate_bearer(token).await.ok(),
        None => None,
    };

    let on_wishlist = match account {
        Some(account) => Some(
            state
                .app
                .wishlists
                .contains(account, &slug)
                .await
                .or_500("failed to check wishlist membership")?,
        ),
        None => None,
    };

    Ok(Json(BookDetailResponse {
        book: book.into(),
        also_like: also_like.into_iter().map(BookResponse::from).collect(),
        comments: comments.into_iter().map(CommentResponse::from).collect(),
        on_wishlist,
    }))
}

#[cfg(test)]
mod tests {
    use salvo::{
        http::header::AUTHORIZATION,
        test::{ResponseExt, TestClient},
    };
    use testresult::TestResult;

    use bookery_app::{
        auth::MockAuthService,
        domain::{
            catalog::{CatalogServiceError, MockCatalogService},
            comments::MockCommentsService,
            wishlists::MockWishlistsService,
        },
    };

    use crate::test_helpers::{TEST_ACCOUNT_UUID, Mocks, make_book, public_service};

    use super::*;

    fn happy_catalog() -> MockCatalogService {
        let mut catalog = MockCatalogService::new();

        catalog
            .expect_get_book()
            .once()
            .withf(|slug| slug == "dead-souls")
            .return_once(|_| Ok(make_book("dead-souls", 50_00)));

        catalog
            .expect_also_like()
            .once()
            .withf(|slug| slug == "dead-souls")
            .return_once(|_| Ok(vec![make_book("sibling", 10_00)]));

        catalog
    }

    fn happy_comments() -> MockCommentsService {
        let mut comments = MockCommentsService::new();

        comments
            .expect_list_book_comments()
            .once()
            .return_once(|_, _| Ok(Vec::new()));

        comments
    }

    fn route() -> Router {
        Router::with_path("books/{slug}").get(handler)
    }

    #[tokio::test]
    async fn test_anonymous_detail_has_no_wishlist_flag() -> TestResult {
        let mocks = Mocks {
            catalog: happy_catalog(),
            comments: happy_comments(),
            ..Mocks::new()
        };

        let mut res = TestClient::get("http://example.com/books/dead-souls")
            .send(&public_service(mocks.into_state(), route()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: BookDetailResponse = res.take_json().await?;

        assert_eq!(body.book.slug, "dead-souls");
        assert_eq!(body.also_like.len(), 1);
        assert_eq!(body.on_wishlist, None);

        Ok(())
    }

    #[tokio::test]
    async fn test_authenticated_detail_includes_wishlist_flag() -> TestResult {
        let mut auth = MockAuthService::new();

        auth.expect_authenticate_bearer()
            .once()
            .withf(|token| token == "abc123")
            .return_once(|_| Ok(TEST_ACCOUNT_UUID));

        let mut wishlists = MockWishlistsService::new();

        wishlists
            .expect_contains()
            .once()
            .withf(|account, slug| *account == TEST_ACCOUNT_UUID && slug == "dead-souls")
            .return_once(|_, _| Ok(true));

        let mocks = Mocks {
            auth,
            catalog: happy_catalog(),
            comments: happy_comments(),
            wishlists,
            ..Mocks::new()
        };

        let mut res = TestClient::get("http://example.com/books/dead-souls")
            .add_header(AUTHORIZATION, "Bearer abc123", true)
            .send(&public_service(mocks.into_state(), route()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: BookDetailResponse = res.take_json().await?;

        assert_eq!(body.on_wishlist, Some(true));

        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_book_returns_404() -> TestResult {
        let mut catalog = MockCatalogService::new();

        catalog
            .expect_get_book()
            .once()
            .return_once(|_| Err(CatalogServiceError::NotFound));

        catalog.expect_also_like().never();

        let mocks = Mocks {
            catalog,
            ..Mocks::new()
        };

        let res = TestClient::get("http://example.com/books/missing")
            .send(&public_service(mocks.into_state(), route()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
