//! Book Index Handler

use std::sync::Arc;

use salvo::{oapi::extract::QueryParam, prelude::*};

use crate::{
    books::{errors::into_status_error, models::BookPageResponse},
    extensions::*,
    state::State,
};

/// Book Index Handler
///
/// Paginated catalog listing, optionally filtered by a special category
/// slug.
#[endpoint(
    tags("books"),
    summary = "List books",
    responses(
        (status_code = StatusCode::OK, description = "One page of books"),
        (status_code = StatusCode::NOT_FOUND, description = "Unknown special category"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    page: QueryParam<u32, false>,
    special: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<BookPageResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let page = page.into_inner().unwrap_or(1);

    let books = match special.into_inner() {
        Some(slug) => state.app.catalog.list_books_in_special(&slug, page).await,
        None => state.app.catalog.list_books(page).await,
    }
    .map_err(into_status_error)?;

    Ok(Json(books.into()))
}
