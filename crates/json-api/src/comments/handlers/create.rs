//! Create Comment Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};

use bookery_app::domain::comments::{CommentsServiceError, models::NewComment};

use crate::{
    comments::{errors::into_status_error, models::CommentResponse},
    extensions::*,
    forms::FormInvalidResponse,
    state::State,
};

/// Create Comment Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateCommentRequest {
    pub text: String,
    pub mark: i16,
}

/// Comment Created Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CommentCreatedResponse {
    /// Always true on this arm; mirrors the legacy widget contract.
    pub good: bool,

    /// The stored comment with author info.
    pub comment_info: CommentInfoResponse,
}

/// Stored comment with author info and a link back to the comment list.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CommentInfoResponse {
    #[serde(flatten)]
    pub comment: CommentResponse,

    /// URL of the book's comment list
    pub url: String,
}

/// Create Comment Handler
///
/// Stores a comment and returns it with author info; the book's
/// aggregated mark is refreshed before this responds.
#[endpoint(
    tags("comments"),
    summary = "Comment on a book",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Comment stored"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Invalid form input"),
        (status_code = StatusCode::NOT_FOUND, description = "Unknown book"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Unauthorized"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    slug: PathParam<String>,
    json: JsonBody<CreateCommentRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<(), StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let account = depot.account_uuid_or_401()?;
    let slug = slug.into_inner();
    let request = json.into_inner();

    let result = state
        .app
        .comments
        .add_comment(
            &slug,
            account,
            NewComment {
                text: request.text,
                mark: request.mark,
            },
        )
        .await;

    match result {
        Ok(comment) => {
            res.status_code(StatusCode::CREATED);
            res.render(Json(CommentCreatedResponse {
                good: true,
                comment_info: CommentInfoResponse {
                    comment: comment.into(),
                    url: format!("/books/{slug}/comments"),
                },
            }));
        }
        Err(CommentsServiceError::Validation(errors)) => {
            res.status_code(StatusCode::UNPROCESSABLE_ENTITY);
            res.render(Json(FormInvalidResponse::from_errors(errors)));
        }
        Err(error) => return Err(into_status_error(error)),
    }

    Ok(())
}
