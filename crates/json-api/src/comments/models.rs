//! Comment response models.

use jiff::tz::TimeZone;
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bookery_app::domain::comments::models::BookComment;

/// Comment representation matching the book-detail comment widget.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CommentResponse {
    /// The unique identifier of the comment
    pub uuid: Uuid,

    /// Author's avatar image path
    pub profile_image: String,

    /// Author's username
    pub profile_username: String,

    /// Creation date, e.g. `August 06, 2026`
    pub date: String,

    /// Comment text
    pub text: String,

    /// The 1-5 mark attached to this comment
    pub book_mark: i16,
}

impl From<BookComment> for CommentResponse {
    fn from(comment: BookComment) -> Self {
        let date = comment
            .created_at
            .to_zoned(TimeZone::UTC)
            .strftime("%B %d, %Y")
            .to_string();

        Self {
            uuid: comment.uuid.into_uuid(),
            profile_image: comment.author_image,
            profile_username: comment.author_username,
            date,
            text: comment.text,
            book_mark: comment.mark,
        }
    }
}
