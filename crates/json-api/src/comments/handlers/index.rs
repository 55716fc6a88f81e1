//! Comment Index Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use bookery_app::domain::comments::RECENT_COMMENTS;

use crate::{
    comments::{errors::into_status_error, models::CommentResponse},
    extensions::*,
    state::State,
};

/// Comment Index Handler
///
/// Returns a book's comments, oldest first.
#[endpoint(
    tags("comments"),
    summary = "List book comments",
    responses(
        (status_code = StatusCode::OK, description = "Comments for the book"),
        (status_code = StatusCode::NOT_FOUND, description = "Unknown book"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    slug: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<Vec<CommentResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let comments = state
        .app
        .comments
        .list_book_comments(&slug.into_inner(), RECENT_COMMENTS)
        .await
        .map_err(into_status_error)?;

    Ok(Json(
        comments.into_iter().map(CommentResponse::from).collect(),
    ))
}
