//! Comment Models

use jiff::Timestamp;

use crate::uuids::TypedUuid;

/// Comment UUID
pub type CommentUuid = TypedUuid<BookComment>;

/// A stored comment joined with its author's public profile.
#[derive(Debug, Clone)]
pub struct BookComment {
    pub uuid: CommentUuid,
    pub text: String,
    /// Integer 1-5.
    pub mark: i16,
    pub created_at: Timestamp,
    pub author_username: String,
    pub author_image: String,
}

/// New Comment Model
#[derive(Debug, Clone, PartialEq)]
pub struct NewComment {
    pub text: String,
    pub mark: i16,
}
