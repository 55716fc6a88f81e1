//! Catalog Models

use jiff::Timestamp;

use crate::uuids::TypedUuid;

/// Category UUID
pub type CategoryUuid = TypedUuid<Category>;

/// Book UUID
pub type BookUuid = TypedUuid<Book>;

/// Category kind discriminant.
///
/// One table holds all three category shapes; only `Book`-kind rows may
/// reference a `Main`-kind parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryKind {
    Main,
    Book,
    Special,
}

impl CategoryKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::Book => "book",
            Self::Special => "special",
        }
    }
}

/// Category Model
#[derive(Debug, Clone)]
pub struct Category {
    pub uuid: CategoryUuid,
    pub kind: CategoryKind,
    pub title: String,
    pub slug: String,
    pub main_category_uuid: Option<CategoryUuid>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// New Category Model
#[derive(Debug, Clone, PartialEq)]
pub struct NewCategory {
    pub kind: CategoryKind,
    pub title: String,
    /// Generated from the title when absent.
    pub slug: Option<String>,
    /// Slug of the owning main category; only meaningful for `Book` kind.
    pub main_category: Option<String>,
}

/// Book Model
#[derive(Debug, Clone)]
pub struct Book {
    pub uuid: BookUuid,
    pub title: String,
    pub slug: String,
    pub image: String,
    pub info: String,
    /// Price in cents.
    pub price: u64,
    /// Mean of comment marks; 0 with no comments.
    pub mark: f64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// New Book Model
#[derive(Debug, Clone, PartialEq)]
pub struct NewBook {
    pub title: String,
    /// Generated from the title when absent.
    pub slug: Option<String>,
    /// Defaulted when absent or empty.
    pub image: Option<String>,
    pub info: String,
    pub price: u64,
    /// Slugs of book/special categories the book belongs to.
    pub categories: Vec<String>,
}

/// One page of the book listing.
#[derive(Debug, Clone)]
pub struct BookPage {
    pub books: Vec<Book>,
    /// 1-based page number.
    pub page: u32,
    pub per_page: u32,
    /// Total matching books across all pages.
    pub total: u64,
}
