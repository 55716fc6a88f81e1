//! Wishlists Repository

use sqlx::{Postgres, Transaction, query, query_as, query_scalar};
use uuid::Uuid;

use crate::domain::{
    accounts::models::AccountUuid,
    catalog::models::{Book, BookUuid},
};

const GET_BOOK_UUID_SQL: &str = include_str!("sql/get_book_uuid.sql");
const ADD_WISHLIST_BOOK_SQL: &str = include_str!("sql/add_wishlist_book.sql");
const REMOVE_WISHLIST_BOOK_SQL: &str = include_str!("sql/remove_wishlist_book.sql");
const LIST_WISHLIST_BOOKS_SQL: &str = include_str!("sql/list_wishlist_books.sql");
const CONTAINS_BOOK_SQL: &str = include_str!("sql/contains_book.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgWishlistsRepository;

impl PgWishlistsRepository {
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

    /// Returns the number of rows inserted: 0 when already present.
    pub(crate) async fn add_book(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        account: AccountUuid,
        book: BookUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(ADD_WISHLIST_BOOK_SQL)
            .bind(account.into_uuid())
            .bind(book.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    /// Returns the number of rows deleted: 0 when not present.
    pub(crate) async fn remove_book(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        account: AccountUuid,
        book: BookUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(REMOVE_WISHLIST_BOOK_SQL)
            .bind(account.into_uuid())
            .bind(book.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn list_books(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        account: AccountUuid,
    ) -> Result<Vec<Book>, sqlx::Error> {
        query_as::<Postgres, Book>(LIST_WISHLIST_BOOKS_SQL)
            .bind(account.into_uuid())
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn contains_book(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        account: AccountUuid,
        slug: &str,
    ) -> Result<bool, sqlx::Error> {
        query_scalar(CONTAINS_BOOK_SQL)
            .bind(account.into_uuid())
            .bind(slug)
            .fetch_one(&mut **tx)
            .await
    }
}
