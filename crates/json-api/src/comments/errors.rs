//! Errors

use salvo::http::StatusError;
use tracing::error;

use bookery_app::domain::comments::CommentsServiceError;

/// Maps every variant except `Validation`, which carries field errors
/// and is rendered as a form-invalid body by the handler.
pub(crate) fn into_status_error(error: CommentsServiceError) -> StatusError {
    match error {
        CommentsServiceError::NotFound => StatusError::not_found(),
        CommentsServiceError::Validation(_)
        | CommentsServiceError::InvalidReference
        | CommentsServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid comment payload")
        }
        CommentsServiceError::Sql(source) => {
            error!("comments storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
