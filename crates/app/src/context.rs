//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    auth::{AuthService, PgAuthService},
    database::{self, Db},
    domain::{
        accounts::{AccountsService, PgAccountsService},
        carts::{CartsService, PgCartsService},
        catalog::{CatalogService, PgCatalogService},
        checkouts::{CheckoutsService, PgCheckoutsService},
        comments::{CommentsService, PgCommentsService},
        search::{PgSearchService, SearchService},
        wishlists::{PgWishlistsService, WishlistsService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),
}

#[derive(Clone)]
pub struct AppContext {
    pub accounts: Arc<dyn AccountsService>,
    pub auth: Arc<dyn AuthService>,
    pub carts: Arc<dyn CartsService>,
    pub catalog: Arc<dyn CatalogService>,
    pub checkouts: Arc<dyn CheckoutsService>,
    pub comments: Arc<dyn CommentsService>,
    pub search: Arc<dyn SearchService>,
    pub wishlists: Arc<dyn WishlistsService>,
}

impl AppContext {
    /// Build application context from a database URL.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection fails.
    pub async fn from_database_url(url: &str) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        let db = Db::new(pool.clone());

        Ok(Self {
            accounts: Arc::new(PgAccountsService::new(db.clone())),
            auth: Arc::new(PgAuthService::new(pool)),
            carts: Arc::new(PgCartsService::new(db.clone())),
            catalog: Arc::new(PgCatalogService::new(db.clone())),
            checkouts: Arc::new(PgCheckoutsService::new(db.clone())),
            comments: Arc::new(PgCommentsService::new(db.clone())),
            search: Arc::new(PgSearchService::new(db.clone())),
            wishlists: Arc::new(PgWishlistsService::new(db)),
        })
    }
}
