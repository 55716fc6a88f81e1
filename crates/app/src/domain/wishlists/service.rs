//! Wishlists service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        accounts::models::AccountUuid,
        catalog::models::Book,
        wishlists::{
            errors::WishlistsServiceError,
            models::{WishlistAddOutcome, WishlistRemoveOutcome},
            repository::PgWishlistsRepository,
        },
    },
};

#[derive(Debug, Clone)]
pub struct PgWishlistsService {
    db: Db,
    repository: PgWishlistsRepository,
}

impl PgWishlistsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgWishlistsRepository::new(),
        }
    }
}

#[async_trait]
impl WishlistsService for PgWishlistsService {
    async fn add(
        &self,
        account: AccountUuid,
        book_slug: &str,
    ) -> Result<WishlistAddOutcome, WishlistsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let book = self.repository.get_book_uuid(&mut tx, book_slug).await?;
        let inserted = self.repository.add_book(&mut tx, account, book).await?;

        tx.commit().await?;

        if inserted == 0 {
            Ok(WishlistAddOutcome::AlreadyPresent)
        } else {
            Ok(WishlistAddOutcome::Added)
        }
    }

    async fn remove(
        &self,
        account: AccountUuid,
        book_slug: &str,
    ) -> Result<WishlistRemoveOutcome, WishlistsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let book = self.repository.get_book_uuid(&mut tx, book_slug).await?;
        let removed = self.repository.remove_book(&mut tx, account, book).await?;

        tx.commit().await?;

        if removed == 0 {
            Ok(WishlistRemoveOutcome::NotPresent)
        } else {
            Ok(WishlistRemoveOutcome::Removed)
        }
    }

    async fn list(&self, account: AccountUuid) -> Result<Vec<Book>, WishlistsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let books = self.repository.list_books(&mut tx, account).await?;

        tx.commit().await?;

        Ok(books)
    }

    async fn contains(
        &self,
        account: AccountUuid,
        book_slug: &str,
    ) -> Result<bool, WishlistsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let contains = self
            .repository
            .contains_book(&mut tx, account, book_slug)
            .await?;

        tx.commit().await?;

        Ok(contains)
    }
}

#[automock]
#[async_trait]
pub trait WishlistsService: Send + Sync {
    /// Idempotent add; reports whether the book was already present.
    async fn add(
        &self,
        account: AccountUuid,
        book_slug: &str,
    ) -> Result<WishlistAddOutcome, WishlistsServiceError>;

    /// Idempotent remove; reports whether the book was present at all.
    async fn remove(
        &self,
        account: AccountUuid,
        book_slug: &str,
    ) -> Result<WishlistRemoveOutcome, WishlistsServiceError>;

    /// Books on the account's wishlist, oldest first.
    async fn list(&self, account: AccountUuid) -> Result<Vec<Book>, WishlistsServiceError>;

    /// Whether the given book is on the account's wishlist.
    async fn contains(
        &self,
        account: AccountUuid,
        book_slug: &str,
    ) -> Result<bool, WishlistsServiceError>;
}
