//! Search service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::search::{
        errors::SearchServiceError, models::SearchResults, repository::PgSearchRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgSearchService {
    db: Db,
    repository: PgSearchRepository,
}

impl PgSearchService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgSearchRepository::new(),
        }
    }
}

#[async_trait]
impl SearchService for PgSearchService {
    async fn search(&self, term: &str) -> Result<SearchResults, SearchServiceError> {
        let pattern = contains_pattern(term.trim());

        let mut tx = self.db.begin_transaction().await?;

        let categories = self.repository.search_categories(&mut tx, &pattern).await?;
        let books = self.repository.search_books(&mut tx, &pattern).await?;

        tx.commit().await?;

        Ok(SearchResults { categories, books })
    }
}

#[automock]
#[async_trait]
pub trait SearchService: Send + Sync {
    /// Case-insensitive substring match on title or slug, across book
    /// categories, special categories, and books independently.
    async fn search(&self, term: &str) -> Result<SearchResults, SearchServiceError>;
}

/// `ILIKE` pattern matching `term` anywhere, with wildcards escaped.
fn contains_pattern(term: &str) -> String {
    let escaped = term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");

    format!("%{escaped}%")
}
