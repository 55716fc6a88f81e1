//! Comments service and rating aggregation.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        accounts::models::AccountUuid,
        comments::{
            errors::CommentsServiceError,
            models::{BookComment, CommentUuid, NewComment},
            repository::PgCommentsRepository,
        },
        validation::FieldError,
    },
};

/// Comments shown on a book detail page.
pub const RECENT_COMMENTS: i64 = 5;

/// Longest accepted comment text.
pub const MAX_COMMENT_LEN: usize = 255;

#[derive(Debug, Clone)]
pub struct PgCommentsService {
    db: Db,
    repository: PgCommentsRepository,
}

impl PgCommentsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgCommentsRepository::new(),
        }
    }
}

fn validate_comment(comment: &NewComment) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();

    if comment.text.trim().is_empty() {
        errors.push(FieldError::new("text", "comment text is required"));
    } else if comment.text.len() > MAX_COMMENT_LEN {
        errors.push(FieldError::new(
            "text",
            format!("comment text is limited to {MAX_COMMENT_LEN} characters"),
        ));
    }

    if !(1..=5).contains(&comment.mark) {
        errors.push(FieldError::new("mark", "mark must be between 1 and 5"));
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

#[async_trait]
impl CommentsService for PgCommentsService {
    async fn add_comment(
        &self,
        book_slug: &str,
        account: AccountUuid,
        comment: NewComment,
    ) -> Result<BookComment, CommentsServiceError> {
        validate_comment(&comment).map_err(CommentsServiceError::Validation)?;

        let mut tx = self.db.begin_transaction().await?;

        let book = self.repository.get_book_uuid(&mut tx, book_slug).await?;
        let uuid = CommentUuid::new();

        self.repository
            .create_comment(&mut tx, uuid, book, account, &comment.text, comment.mark)
            .await?;

        // The aggregated mark must be in step with the comment before the
        // write is acknowledged.
        self.repository.refresh_book_mark(&mut tx, book).await?;

        let created = self.repository.get_book_comment(&mut tx, uuid).await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn remove_comment(
        &self,
        account: AccountUuid,
        comment: CommentUuid,
    ) -> Result<(), CommentsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let book = self
            .repository
            .delete_comment(&mut tx, comment, account)
            .await?
            .ok_or(CommentsServiceError::NotFound)?;

        self.repository.refresh_book_mark(&mut tx, book).await?;

        tx.commit().await?;

        Ok(())
    }

    async fn list_book_comments(
        &self,
        book_slug: &str,
        limit: i64,
    ) -> Result<Vec<BookComment>, CommentsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let book = self.repository.get_book_uuid(&mut tx, book_slug).await?;

        let comments = self
            .repository
            .list_book_comments(&mut tx, book, limit)
            .await?;

        tx.commit().await?;

        Ok(comments)
    }
}

#[automock]
#[async_trait]
pub trait CommentsService: Send + Sync {
    /// Validate and store a comment, refreshing the book's mark in the
    /// same transaction.
    async fn add_comment(
        &self,
        book_slug: &str,
        account: AccountUuid,
        comment: NewComment,
    ) -> Result<BookComment, CommentsServiceError>;

    /// Delete an owned comment and refresh the book's mark.
    async fn remove_comment(
        &self,
        account: AccountUuid,
        comment: CommentUuid,
    ) -> Result<(), CommentsServiceError>;

    /// Oldest comments first, up to `limit`.
    async fn list_book_comments(
        &self,
        book_slug: &str,
        limit: i64,
    ) -> Result<Vec<BookComment>, CommentsServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{domain::catalog::CatalogService, test::TestContext};

    use super::*;

    fn comment(mark: i16) -> NewComment {
        NewComment {
            text: "test".to_string(),
            mark,
        }
    }

    #[test]
    fn marks_outside_one_to_five_are_invalid() {
        assert!(validate_comment(&comment(1)).is_ok());
        assert!(validate_comment(&comment(5)).is_ok());
        assert!(validate_comment(&comment(0)).is_err());
        assert!(validate_comment(&comment(6)).is_err());
        assert!(validate_comment(&comment(-1)).is_err());
    }

    #[test]
    fn blank_text_is_invalid() {
        let blank = NewComment {
            text: "   ".to_string(),
            mark: 3,
        };

        let errors = validate_comment(&blank).expect_err("should fail");

        assert_eq!(errors[0].field, "text");
    }

    #[tokio::test]
    async fn one_to_five_marks_average_to_three() -> TestResult {
        let ctx = TestContext::new().await;

        let book = ctx.create_book("Dead Souls", 10_00).await;

        for mark in 1..=5 {
            let author = ctx.register_account(&format!("reader{mark}")).await;

            ctx.comments
                .add_comment(&book.slug, author, comment(mark))
                .await?;
        }

        let book = ctx.catalog.get_book(&book.slug).await?;

        assert!(
            (book.mark - 3.0).abs() < f64::EPSILON,
            "expected mark 3.0, got {}",
            book.mark
        );

        Ok(())
    }

    #[tokio::test]
    async fn mark_tracks_inserts_and_deletes() -> TestResult {
        let ctx = TestContext::new().await;

        let book = ctx.create_book("Dead Souls", 10_00).await;
        let author = ctx.register_account("reader").await;

        let low = ctx.comments.add_comment(&book.slug, author, comment(1)).await?;
        let high = ctx.comments.add_comment(&book.slug, author, comment(5)).await?;

        assert!((ctx.catalog.get_book(&book.slug).await?.mark - 3.0).abs() < f64::EPSILON);

        ctx.comments.remove_comment(author, high.uuid).await?;

        assert!((ctx.catalog.get_book(&book.slug).await?.mark - 1.0).abs() < f64::EPSILON);

        ctx.comments.remove_comment(author, low.uuid).await?;

        assert!(
            ctx.catalog.get_book(&book.slug).await?.mark.abs() < f64::EPSILON,
            "mark must fall back to 0 with no comments"
        );

        Ok(())
    }

    #[tokio::test]
    async fn invalid_mark_is_rejected_before_persistence() -> TestResult {
        let ctx = TestContext::new().await;

        let book = ctx.create_book("Dead Souls", 10_00).await;
        let author = ctx.register_account("reader").await;

        let result = ctx
            .comments
            .add_comment(&book.slug, author, comment(6))
            .await;

        assert!(
            matches!(result, Err(CommentsServiceError::Validation(_))),
            "expected Validation, got {result:?}"
        );

        assert!(
            ctx.comments
                .list_book_comments(&book.slug, RECENT_COMMENTS)
                .await?
                .is_empty(),
            "rejected comment must not be stored"
        );

        Ok(())
    }

    #[tokio::test]
    async fn comments_on_unknown_book_return_not_found() {
        let ctx = TestContext::new().await;

        let author = ctx.register_account("reader").await;

        let result = ctx.comments.add_comment("missing", author, comment(3)).await;

        assert!(
            matches!(result, Err(CommentsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn listing_is_oldest_first_and_limited() -> TestResult {
        let ctx = TestContext::new().await;

        let book = ctx.create_book("Dead Souls", 10_00).await;
        let author = ctx.register_account("reader").await;

        for i in 0..7 {
            ctx.comments
                .add_comment(
                    &book.slug,
                    author,
                    NewComment {
                        text: format!("comment {i}"),
                        mark: 3,
                    },
                )
                .await?;
        }

        let comments = ctx
            .comments
            .list_book_comments(&book.slug, RECENT_COMMENTS)
            .await?;

        assert_eq!(comments.len(), 5);
        assert_eq!(comments[0].text, "comment 0");
        assert_eq!(comments[0].author_username, "reader");

        Ok(())
    }

    #[tokio::test]
    async fn removing_someone_elses_comment_is_not_found() -> TestResult {
        let ctx = TestContext::new().await;

        let book = ctx.create_book("Dead Souls", 10_00).await;
        let author = ctx.register_account("author").await;
        let intruder = ctx.register_account("intruder").await;

        let created = ctx
            .comments
            .add_comment(&book.slug, author, comment(4))
            .await?;

        let result = ctx.comments.remove_comment(intruder, created.uuid).await;

        assert!(
            matches!(result, Err(CommentsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );

        Ok(())
    }
}
