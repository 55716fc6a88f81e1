//! Catalog service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::catalog::{
        errors::CatalogServiceError,
        models::{Book, BookPage, Category, CategoryKind, NewBook, NewCategory},
        repository::PgCatalogRepository,
        slug::create_slug,
    },
    uuids::TypedUuid,
};

/// Books shown per catalog page.
pub const BOOKS_PER_PAGE: u32 = 4;

/// Image path used when a book is created without one.
pub const DEFAULT_BOOK_IMAGE: &str = "default_book_image.jpg";

#[derive(Debug, Clone)]
pub struct PgCatalogService {
    db: Db,
    repository: PgCatalogRepository,
}

impl PgCatalogService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgCatalogRepository::new(),
        }
    }
}

fn page_window(page: u32) -> (u32, i64, i64) {
    let page = page.max(1);
    let offset = i64::from(page - 1) * i64::from(BOOKS_PER_PAGE);

    (page, i64::from(BOOKS_PER_PAGE), offset)
}

#[async_trait]
impl CatalogService for PgCatalogService {
    async fn list_books(&self, page: u32) -> Result<BookPage, CatalogServiceError> {
        let (page, limit, offset) = page_window(page);

        let mut tx = self.db.begin_transaction().await?;

        let books = self.repository.list_books(&mut tx, limit, offset).await?;
        let total = self.repository.count_books(&mut tx).await?;

        tx.commit().await?;

        Ok(BookPage {
            books,
            page,
            per_page: BOOKS_PER_PAGE,
            total,
        })
    }

    async fn list_books_in_special(
        &self,
        slug: &str,
        page: u32,
    ) -> Result<BookPage, CatalogServiceError> {
        self.list_category_page(slug, CategoryKind::Special, page)
            .await
    }

    async fn list_books_in_category(
        &self,
        slug: &str,
        page: u32,
    ) -> Result<BookPage, CatalogServiceError> {
        self.list_category_page(slug, CategoryKind::Book, page).await
    }

    async fn get_book(&self, slug: &str) -> Result<Book, CatalogServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let book = self.repository.get_book(&mut tx, slug).await?;

        tx.commit().await?;

        Ok(book)
    }

    async fn also_like(&self, slug: &str) -> Result<Vec<Book>, CatalogServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let book = self.repository.get_book(&mut tx, slug).await?;
        let books = self.repository.also_like(&mut tx, book.uuid).await?;

        tx.commit().await?;

        Ok(books)
    }

    async fn list_main_categories(&self) -> Result<Vec<Category>, CatalogServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let categories = self.repository.list_main_categories(&mut tx).await?;

        tx.commit().await?;

        Ok(categories)
    }

    async fn create_category(
        &self,
        category: NewCategory,
    ) -> Result<Category, CatalogServiceError> {
        if category.main_category.is_some() && category.kind != CategoryKind::Book {
            return Err(CatalogServiceError::InvalidData);
        }

        let slug = category
            .slug
            .unwrap_or_else(|| create_slug(&category.title));

        let mut tx = self.db.begin_transaction().await?;

        let main_category = match category.main_category {
            Some(main_slug) => Some(
                self.repository
                    .get_category(&mut tx, &main_slug, CategoryKind::Main)
                    .await?
                    .uuid,
            ),
            None => None,
        };

        let created = self
            .repository
            .create_category(
                &mut tx,
                TypedUuid::new(),
                category.kind,
                &category.title,
                &slug,
                main_category,
            )
            .await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn create_book(&self, book: NewBook) -> Result<Book, CatalogServiceError> {
        let slug = book.slug.unwrap_or_else(|| create_slug(&book.title));

        let image = match book.image {
            Some(image) if !image.is_empty() => image,
            _ => DEFAULT_BOOK_IMAGE.to_string(),
        };

        let mut tx = self.db.begin_transaction().await?;

        let created = self
            .repository
            .create_book(
                &mut tx,
                TypedUuid::new(),
                &book.title,
                &slug,
                &image,
                &book.info,
                book.price,
            )
            .await?;

        for category_slug in &book.categories {
            let category = self
                .repository
                .get_membership_category(&mut tx, category_slug)
                .await?;

            self.repository
                .add_book_to_category(&mut tx, created.uuid, category.uuid)
                .await?;
        }

        tx.commit().await?;

        Ok(created)
    }
}

impl PgCatalogService {
    async fn list_category_page(
        &self,
        slug: &str,
        kind: CategoryKind,
        page: u32,
    ) -> Result<BookPage, CatalogServiceError> {
        let (page, limit, offset) = page_window(page);

        let mut tx = self.db.begin_transaction().await?;

        let category = self.repository.get_category(&mut tx, slug, kind).await?;

        let books = self
            .repository
            .list_books_in_category(&mut tx, category.uuid, limit, offset)
            .await?;

        let total = self
            .repository
            .count_books_in_category(&mut tx, category.uuid)
            .await?;

        tx.commit().await?;

        Ok(BookPage {
            books,
            page,
            per_page: BOOKS_PER_PAGE,
            total,
        })
    }
}

#[automock]
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Retrieves one page of the full catalog.
    async fn list_books(&self, page: u32) -> Result<BookPage, CatalogServiceError>;

    /// Retrieves one page of a special category's books.
    async fn list_books_in_special(
        &self,
        slug: &str,
        page: u32,
    ) -> Result<BookPage, CatalogServiceError>;

    /// Retrieves one page of a book category's books.
    async fn list_books_in_category(
        &self,
        slug: &str,
        page: u32,
    ) -> Result<BookPage, CatalogServiceError>;

    /// Retrieve a single book by slug.
    async fn get_book(&self, slug: &str) -> Result<Book, CatalogServiceError>;

    /// Books sharing a book category with the given one, best mark first.
    async fn also_like(&self, slug: &str) -> Result<Vec<Book>, CatalogServiceError>;

    /// Retrieves all main categories.
    async fn list_main_categories(&self) -> Result<Vec<Category>, CatalogServiceError>;

    /// Creates a new category.
    async fn create_category(&self, category: NewCategory)
    -> Result<Category, CatalogServiceError>;

    /// Creates a new book with its category memberships.
    async fn create_book(&self, book: NewBook) -> Result<Book, CatalogServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::test::TestContext;

    use super::*;

    fn new_book(title: &str, price: u64) -> NewBook {
        NewBook {
            title: title.to_string(),
            slug: None,
            image: None,
            info: String::new(),
            price,
            categories: Vec::new(),
        }
    }

    #[tokio::test]
    async fn create_book_generates_slug_and_default_image() -> TestResult {
        let ctx = TestContext::new().await;

        let book = ctx
            .catalog
            .create_book(new_book("Crime and Punishment", 50_00))
            .await?;

        assert!(
            book.slug.starts_with("crime-and-punishment-"),
            "unexpected slug: {}",
            book.slug
        );
        assert_eq!(book.image, DEFAULT_BOOK_IMAGE);
        assert_eq!(book.price, 50_00);
        assert_eq!(book.mark, 0.0);

        Ok(())
    }

    #[tokio::test]
    async fn create_book_keeps_explicit_slug() -> TestResult {
        let ctx = TestContext::new().await;

        let book = ctx
            .catalog
            .create_book(NewBook {
                slug: Some("the-idiot".to_string()),
                ..new_book("The Idiot", 30_00)
            })
            .await?;

        assert_eq!(book.slug, "the-idiot");

        let fetched = ctx.catalog.get_book("the-idiot").await?;

        assert_eq!(fetched.uuid, book.uuid);

        Ok(())
    }

    #[tokio::test]
    async fn create_book_duplicate_slug_returns_already_exists() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.catalog
            .create_book(NewBook {
                slug: Some("dupe".to_string()),
                ..new_book("First", 10_00)
            })
            .await?;

        let result = ctx
            .catalog
            .create_book(NewBook {
                slug: Some("dupe".to_string()),
                ..new_book("Second", 20_00)
            })
            .await;

        assert!(
            matches!(result, Err(CatalogServiceError::AlreadyExists)),
            "expected AlreadyExists, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn get_book_unknown_slug_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx.catalog.get_book("missing").await;

        assert!(
            matches!(result, Err(CatalogServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn listing_paginates_four_books_per_page() -> TestResult {
        let ctx = TestContext::new().await;

        for i in 0..5 {
            ctx.catalog.create_book(new_book(&format!("Book {i}"), 10_00)).await?;
        }

        let first = ctx.catalog.list_books(1).await?;
        let second = ctx.catalog.list_books(2).await?;
        let third = ctx.catalog.list_books(3).await?;

        assert_eq!(first.books.len(), 4);
        assert_eq!(first.total, 5);
        assert_eq!(first.per_page, BOOKS_PER_PAGE);
        assert_eq!(second.books.len(), 1);
        assert!(third.books.is_empty(), "page past the end should be empty");

        Ok(())
    }

    #[tokio::test]
    async fn special_listing_is_scoped_to_the_category() -> TestResult {
        let ctx = TestContext::new().await;

        let special = ctx.create_special_category("Bestsellers").await;

        let inside = ctx
            .catalog
            .create_book(NewBook {
                categories: vec![special.slug.clone()],
                ..new_book("Inside", 10_00)
            })
            .await?;

        ctx.catalog.create_book(new_book("Outside", 10_00)).await?;

        let page = ctx.catalog.list_books_in_special(&special.slug, 1).await?;

        assert_eq!(page.total, 1);
        assert_eq!(page.books.len(), 1);
        assert_eq!(page.books[0].uuid, inside.uuid);

        Ok(())
    }

    #[tokio::test]
    async fn special_listing_unknown_slug_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx.catalog.list_books_in_special("missing", 1).await;

        assert!(
            matches!(result, Err(CatalogServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn also_like_returns_category_siblings_only() -> TestResult {
        let ctx = TestContext::new().await;

        let category = ctx.create_book_category("Classics").await;

        let book = ctx
            .catalog
            .create_book(NewBook {
                categories: vec![category.slug.clone()],
                ..new_book("Anchor", 10_00)
            })
            .await?;

        let sibling = ctx
            .catalog
            .create_book(NewBook {
                categories: vec![category.slug.clone()],
                ..new_book("Sibling", 10_00)
            })
            .await?;

        ctx.catalog.create_book(new_book("Stranger", 10_00)).await?;

        let suggestions = ctx.catalog.also_like(&book.slug).await?;

        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].uuid, sibling.uuid);

        Ok(())
    }

    #[tokio::test]
    async fn book_category_can_reference_a_main_category() -> TestResult {
        let ctx = TestContext::new().await;

        let main = ctx
            .catalog
            .create_category(NewCategory {
                kind: CategoryKind::Main,
                title: "Fiction".to_string(),
                slug: None,
                main_category: None,
            })
            .await?;

        let child = ctx
            .catalog
            .create_category(NewCategory {
                kind: CategoryKind::Book,
                title: "Detective Fiction".to_string(),
                slug: None,
                main_category: Some(main.slug.clone()),
            })
            .await?;

        assert_eq!(child.kind, CategoryKind::Book);
        assert_eq!(child.main_category_uuid, Some(main.uuid));

        let mains = ctx.catalog.list_main_categories().await?;

        assert!(mains.iter().any(|c| c.uuid == main.uuid));
        assert!(!mains.iter().any(|c| c.uuid == child.uuid));

        Ok(())
    }

    #[tokio::test]
    async fn main_category_reference_on_non_book_kind_is_invalid() {
        let ctx = TestContext::new().await;

        let result = ctx
            .catalog
            .create_category(NewCategory {
                kind: CategoryKind::Special,
                title: "Sale".to_string(),
                slug: None,
                main_category: Some("anything".to_string()),
            })
            .await;

        assert!(
            matches!(result, Err(CatalogServiceError::InvalidData)),
            "expected InvalidData, got {result:?}"
        );
    }
}
