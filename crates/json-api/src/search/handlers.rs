//! Search Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{
    books::models::BookResponse, categories::models::CategoryResponse, extensions::*, state::State,
};

/// Search Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SearchRequest {
    /// Search term matched against titles and slugs
    pub search: String,
}

/// Search Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SearchResponse {
    /// Matching book and special categories
    pub categories: Vec<CategoryResponse>,

    /// Matching books
    pub books: Vec<BookResponse>,
}

/// Search Handler
///
/// Case-insensitive substring search across categories and books.
#[endpoint(
    tags("search"),
    summary = "Search the catalog",
    responses(
        (status_code = StatusCode::OK, description = "Search results"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<SearchRequest>,
    depot: &mut Depot,
) -> Result<Json<SearchResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let results = state
        .app
        .search
        .search(&json.into_inner().search)
        .await
        .or_500("search failed")?;

    Ok(Json(SearchResponse {
        categories: results
            .categories
            .into_iter()
            .map(CategoryResponse::from)
            .collect(),
        books: results.books.into_iter().map(BookResponse::from).collect(),
    }))
}
