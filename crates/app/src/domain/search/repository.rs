//! Search Repository

use sqlx::{Postgres, Transaction, query_as};

use crate::domain::catalog::models::{Book, Category};

const SEARCH_CATEGORIES_SQL: &str = include_str!("sql/search_categories.sql");
const SEARCH_BOOKS_SQL: &str = include_str!("sql/search_books.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgSearchRepository;

impl PgSearchRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn search_categories(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        pattern: &str,
    ) -> Result<Vec<Category>, sqlx::Error> {
        query_as::<Postgres, Category>(SEARCH_CATEGORIES_SQL)
            .bind(pattern)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn search_books(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        pattern: &str,
    ) -> Result<Vec<Book>, sqlx::Error> {
        query_as::<Postgres, Book>(SEARCH_BOOKS_SQL)
            .bind(pattern)
            .fetch_all(&mut **tx)
            .await
    }
}
