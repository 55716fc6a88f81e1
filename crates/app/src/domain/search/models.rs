//! Search Models

use crate::domain::catalog::models::{Book, Category};

/// Search Results
///
/// Book and special categories are folded into one list; books stay
/// separate.
#[derive(Debug, Clone)]
pub struct SearchResults {
    pub categories: Vec<Category>,
    pub books: Vec<Book>,
}
