//! Category response models.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bookery_app::domain::catalog::models::Category;

/// Public category representation.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CategoryResponse {
    /// The unique identifier of the category
    pub uuid: Uuid,

    /// The category kind: `main`, `book`, or `special`
    pub kind: String,

    /// The category title
    pub title: String,

    /// The URL slug
    pub slug: String,

    /// The owning main category, for book categories
    pub main_category_uuid: Option<Uuid>,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            uuid: category.uuid.into_uuid(),
            kind: category.kind.as_str().to_string(),
            title: category.title,
            slug: category.slug,
            main_category_uuid: category.main_category_uuid.map(Into::into),
        }
    }
}
