//! Book response models.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bookery_app::domain::catalog::models::{Book, BookPage};

/// Public book representation.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct BookResponse {
    /// The unique identifier of the book
    pub uuid: Uuid,

    /// The book title
    pub title: String,

    /// The URL slug
    pub slug: String,

    /// Cover image path
    pub image: String,

    /// Description text
    pub info: String,

    /// Price in cents
    pub price: u64,

    /// Mean of comment marks; 0 with no comments
    pub mark: f64,
}

impl From<Book> for BookResponse {
    fn from(book: Book) -> Self {
        Self {
            uuid: book.uuid.into_uuid(),
            title: book.title,
            slug: book.slug,
            image: book.image,
            info: book.info,
            price: book.price,
            mark: book.mark,
        }
    }
}

/// One page of the book listing.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct BookPageResponse {
    /// Books on this page
    pub books: Vec<BookResponse>,

    /// 1-based page number
    pub page: u32,

    /// Page size
    pub per_page: u32,

    /// Total matching books across all pages
    pub total: u64,
}

impl From<BookPage> for BookPageResponse {
    fn from(page: BookPage) -> Self {
        Self {
            books: page.books.into_iter().map(BookResponse::from).collect(),
            page: page.page,
            per_page: page.per_page,
            total: page.total,
        }
    }
}
