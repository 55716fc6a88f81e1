//! Comments Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as, query_scalar};
use uuid::Uuid;

use crate::domain::{
    accounts::models::AccountUuid,
    catalog::models::BookUuid,
    comments::models::{BookComment, CommentUuid},
};

const GET_BOOK_UUID_SQL: &str = include_str!("sql/get_book_uuid.sql");
const CREATE_COMMENT_SQL: &str = include_str!("sql/create_comment.sql");
const GET_BOOK_COMMENT_SQL: &str = include_str!("sql/get_book_comment.sql");
const LIST_BOOK_COMMENTS_SQL: &str = include_str!("sql/list_book_comments.sql");
const DELETE_COMMENT_SQL: &str = include_str!("sql/delete_comment.sql");
const REFRESH_BOOK_MARK_SQL: &str = include_str!("sql/refresh_book_mark.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgCommentsRepository;

impl PgCommentsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn get_book_uuid(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        slug: &str,
    ) -> Result<BookUuid, sqlx::Error> {
        let uuid: Uuid = query_scalar(GET_BOOK_UUID_SQL)
            .bind(slug)
            .fetch_one(&mut **tx)
            .await?;

        Ok(BookUuid::from_uuid(uuid))
    }

    pub(crate) async fn create_comment(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        uuid: CommentUuid,
        book: BookUuid,
        account: AccountUuid,
        text: &str,
        mark: i16,
    ) -> Result<(), sqlx::Error> {
        query(CREATE_COMMENT_SQL)
            .bind(uuid.into_uuid())
            .bind(book.into_uuid())
            .bind(account.into_uuid())
            .bind(text)
            .bind(mark)
            .execute(&mut **tx)
            .await?;

        Ok(())
    }

    pub(crate) async fn get_book_comment(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        uuid: CommentUuid,
    ) -> Result<BookComment, sqlx::Error> {
        query_as::<Postgres, BookComment>(GET_BOOK_COMMENT_SQL)
            .bind(uuid.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn list_book_comments(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        book: BookUuid,
        limit: i64,
    ) -> Result<Vec<BookComment>, sqlx::Error> {
        query_as::<Postgres, BookComment>(LIST_BOOK_COMMENTS_SQL)
            .bind(book.into_uuid())
            .bind(limit)
            .fetch_all(&mut **tx)
            .await
    }

    /// Delete an owned comment, returning the book it was attached to.
    pub(crate) async fn delete_comment(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        uuid: CommentUuid,
        account: AccountUuid,
    ) -> Result<Option<BookUuid>, sqlx::Error> {
        let book: Option<Uuid> = query_scalar(DELETE_COMMENT_SQL)
            .bind(uuid.into_uuid())
            .bind(account.into_uuid())
            .fetch_optional(&mut **tx)
            .await?;

        Ok(book.map(BookUuid::from_uuid))
    }

    /// Recompute the book's aggregated mark from its remaining comments.
    pub(crate) async fn refresh_book_mark(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        book: BookUuid,
    ) -> Result<(), sqlx::Error> {
        query(REFRESH_BOOK_MARK_SQL)
            .bind(book.into_uuid())
            .execute(&mut **tx)
            .await?;

        Ok(())
    }
}

impl<'r> FromRow<'r, PgRow> for BookComment {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: CommentUuid::from_uuid(row.try_get("uuid")?),
            text: row.try_get("text")?,
            mark: row.try_get("mark")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            author_username: row.try_get("author_username")?,
            author_image: row.try_get("author_image")?,
        })
    }
}
