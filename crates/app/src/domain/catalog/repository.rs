//! Catalog Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as, query_scalar};

use crate::{
    database::{to_i64, to_u64},
    domain::catalog::models::{Book, BookUuid, Category, CategoryKind, CategoryUuid},
};

const LIST_BOOKS_SQL: &str = include_str!("sql/list_books.sql");
const COUNT_BOOKS_SQL: &str = include_str!("sql/count_books.sql");
const GET_BOOK_SQL: &str = include_str!("sql/get_book.sql");
const GET_CATEGORY_SQL: &str = include_str!("sql/get_category.sql");
const GET_MEMBERSHIP_CATEGORY_SQL: &str = include_str!("sql/get_membership_category.sql");
const LIST_BOOKS_IN_CATEGORY_SQL: &str = include_str!("sql/list_books_in_category.sql");
const COUNT_BOOKS_IN_CATEGORY_SQL: &str = include_str!("sql/count_books_in_category.sql");
const ALSO_LIKE_SQL: &str = include_str!("sql/also_like.sql");
const LIST_MAIN_CATEGORIES_SQL: &str = include_str!("sql/list_main_categories.sql");
const CREATE_CATEGORY_SQL: &str = include_str!("sql/create_category.sql");
const CREATE_BOOK_SQL: &str = include_str!("sql/create_book.sql");
const ADD_BOOK_TO_CATEGORY_SQL: &str = include_str!("sql/add_book_to_category.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgCatalogRepository;

impl PgCatalogRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_books(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Book>, sqlx::Error> {
        query_as::<Postgres, Book>(LIST_BOOKS_SQL)
            .bind(limit)
            .bind(offset)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn count_books(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<u64, sqlx::Error> {
        let count: i64 = query_scalar(COUNT_BOOKS_SQL).fetch_one(&mut **tx).await?;

        to_u64(count, "count")
    }

    pub(crate) async fn get_book(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        slug: &str,
    ) -> Result<Book, sqlx::Error> {
        query_as::<Postgres, Book>(GET_BOOK_SQL)
            .bind(slug)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn get_category(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        slug: &str,
        kind: CategoryKind,
    ) -> Result<Category, sqlx::Error> {
        query_as::<Postgres, Category>(GET_CATEGORY_SQL)
            .bind(slug)
            .bind(kind.as_str())
            .fetch_one(&mut **tx)
            .await
    }

    /// Category a book may belong to: book or special kind, never main.
    pub(crate) async fn get_membership_category(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        slug: &str,
    ) -> Result<Category, sqlx::Error> {
        query_as::<Postgres, Category>(GET_MEMBERSHIP_CATEGORY_SQL)
            .bind(slug)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn list_books_in_category(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        category: CategoryUuid,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Book>, sqlx::Error> {
        query_as::<Postgres, Book>(LIST_BOOKS_IN_CATEGORY_SQL)
            .bind(category.into_uuid())
            .bind(limit)
            .bind(offset)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn count_books_in_category(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        category: CategoryUuid,
    ) -> Result<u64, sqlx::Error> {
        let count: i64 = query_scalar(COUNT_BOOKS_IN_CATEGORY_SQL)
            .bind(category.into_uuid())
            .fetch_one(&mut **tx)
            .await?;

        to_u64(count, "count")
    }

    pub(crate) async fn also_like(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        book: BookUuid,
    ) -> Result<Vec<Book>, sqlx::Error> {
        query_as::<Postgres, Book>(ALSO_LIKE_SQL)
            .bind(book.into_uuid())
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn list_main_categories(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<Category>, sqlx::Error> {
        query_as::<Postgres, Category>(LIST_MAIN_CATEGORIES_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn create_category(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        uuid: CategoryUuid,
        kind: CategoryKind,
        title: &str,
        slug: &str,
        main_category: Option<CategoryUuid>,
    ) -> Result<Category, sqlx::Error> {
        query_as::<Postgres, Category>(CREATE_CATEGORY_SQL)
            .bind(uuid.into_uuid())
            .bind(kind.as_str())
            .bind(title)
            .bind(slug)
            .bind(main_category.map(CategoryUuid::into_uuid))
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn create_book(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        uuid: BookUuid,
        title: &str,
        slug: &str,
        image: &str,
        info: &str,
        price: u64,
    ) -> Result<Book, sqlx::Error> {
        let price_i64 = to_i64(price, "price")?;

        query_as::<Postgres, Book>(CREATE_BOOK_SQL)
            .bind(uuid.into_uuid())
            .bind(title)
            .bind(slug)
            .bind(image)
            .bind(info)
            .bind(price_i64)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn add_book_to_category(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        book: BookUuid,
        category: CategoryUuid,
    ) -> Result<(), sqlx::Error> {
        query(ADD_BOOK_TO_CATEGORY_SQL)
            .bind(book.into_uuid())
            .bind(category.into_uuid())
            .execute(&mut **tx)
            .await?;

        Ok(())
    }
}

impl<'r> FromRow<'r, PgRow> for Book {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let price_i64: i64 = row.try_get("price")?;
        let price = to_u64(price_i64, "price")?;

        Ok(Self {
            uuid: BookUuid::from_uuid(row.try_get("uuid")?),
            title: row.try_get("title")?,
            slug: row.try_get("slug")?,
            image: row.try_get("image")?,
            info: row.try_get("info")?,
            price,
            mark: row.try_get("mark")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}

impl<'r> FromRow<'r, PgRow> for Category {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let kind: String = row.try_get("kind")?;

        let kind = match kind.as_str() {
            "main" => CategoryKind::Main,
            "book" => CategoryKind::Book,
            "special" => CategoryKind::Special,
            other => {
                return Err(sqlx::Error::ColumnDecode {
                    index: "kind".to_string(),
                    source: format!("unknown category kind: {other}").into(),
                });
            }
        };

        Ok(Self {
            uuid: CategoryUuid::from_uuid(row.try_get("uuid")?),
            kind,
            title: row.try_get("title")?,
            slug: row.try_get("slug")?,
            main_category_uuid: row
                .try_get::<Option<uuid::Uuid>, _>("main_category_uuid")?
                .map(CategoryUuid::from_uuid),
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
