//! Category Books Handler

use std::sync::Arc;

use salvo::{
    oapi::extract::{PathParam, QueryParam},
    prelude::*,
};

use crate::{
    books::{errors::into_status_error, models::BookPageResponse},
    extensions::*,
    state::State,
};

/// Category Books Handler
///
/// Paginated listing of a book category's books.
#[endpoint(
    tags("categories"),
    summary = "List a category's books",
    responses(
        (status_code = StatusCode::OK, description = "One page of books"),
        (status_code = StatusCode::NOT_FOUND, description = "Unknown category"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    slug: PathParam<String>,
    page: QueryParam<u32, false>,
    depot: &mut Depot,
) -> Result<Json<BookPageResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let page = page.into_inner().unwrap_or(1);

    let books = state
        .app
        .catalog
        .list_books_in_category(&slug.into_inner(), page)
        .await
        .map_err(into_status_error)?;

    Ok(Json(books.into()))
}
