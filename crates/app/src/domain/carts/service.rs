//! Carts service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        accounts::models::AccountUuid,
        carts::{
            errors::CartsServiceError,
            models::{Cart, CartAddOutcome, CartItemUuid},
            repositories::{PgCartItemsRepository, PgCartsRepository},
        },
    },
};

#[derive(Debug, Clone)]
pub struct PgCartsService {
    db: Db,
    carts_repository: PgCartsRepository,
    items_repository: PgCartItemsRepository,
}

impl PgCartsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            carts_repository: PgCartsRepository::new(),
            items_repository: PgCartItemsRepository::new(),
        }
    }
}

#[async_trait]
impl CartsService for PgCartsService {
    async fn open_cart(&self, account: AccountUuid) -> Result<Cart, CartsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let mut cart = self.carts_repository.open_cart_locked(&mut tx, account).await?;

        let items = self
            .items_repository
            .list_cart_items(&mut tx, cart.uuid)
            .await?;

        tx.commit().await?;

        cart.items = items;

        Ok(cart)
    }

    async fn add_book(
        &self,
        account: AccountUuid,
        book_slug: &str,
    ) -> Result<CartAddOutcome, CartsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let cart = self.carts_repository.open_cart_locked(&mut tx, account).await?;
        let book = self
            .carts_repository
            .get_book_for_cart(&mut tx, book_slug)
            .await?;

        let existing = self
            .items_repository
            .find_cart_item_by_book(&mut tx, cart.uuid, book)
            .await?;

        let outcome = match existing {
            Some(item) => {
                self.items_repository
                    .increment_cart_item(&mut tx, item, cart.uuid)
                    .await?;

                let item = self
                    .items_repository
                    .get_cart_item(&mut tx, item, cart.uuid)
                    .await?;

                CartAddOutcome::Incremented(item)
            }
            None => {
                let item = CartItemUuid::new();

                self.items_repository
                    .create_cart_item(&mut tx, item, cart.uuid, book)
                    .await?;

                let item = self
                    .items_repository
                    .get_cart_item(&mut tx, item, cart.uuid)
                    .await?;

                CartAddOutcome::Added(item)
            }
        };

        tx.commit().await?;

        Ok(outcome)
    }

    async fn set_quantities(
        &self,
        account: AccountUuid,
        quantities: Vec<(CartItemUuid, u64)>,
    ) -> Result<Cart, CartsServiceError> {
        if quantities.iter().any(|(_, qty)| *qty == 0) {
            return Err(CartsServiceError::InvalidData);
        }

        let mut tx = self.db.begin_transaction().await?;

        let mut cart = self.carts_repository.open_cart_locked(&mut tx, account).await?;

        // All-or-nothing: one foreign item id fails the whole batch and
        // rolls the transaction back.
        for (item, qty) in quantities {
            let rows_affected = self
                .items_repository
                .set_cart_item_qty(&mut tx, item, cart.uuid, qty)
                .await?;

            if rows_affected == 0 {
                return Err(CartsServiceError::NotFound);
            }
        }

        let items = self
            .items_repository
            .list_cart_items(&mut tx, cart.uuid)
            .await?;

        tx.commit().await?;

        cart.items = items;

        Ok(cart)
    }

    async fn remove_item(
        &self,
        account: AccountUuid,
        item: CartItemUuid,
    ) -> Result<(), CartsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        // No open cart means nothing to remove; match the idempotent
        // remove semantics instead of failing.
        let Some(cart) = self
            .carts_repository
            .find_open_cart_locked(&mut tx, account)
            .await?
        else {
            return Ok(());
        };

        self.items_repository
            .delete_cart_item(&mut tx, item, cart.uuid)
            .await?;

        tx.commit().await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// The account's open cart with items; created on first use.
    async fn open_cart(&self, account: AccountUuid) -> Result<Cart, CartsServiceError>;

    /// Add a book to the open cart, or bump its qty when already present.
    async fn add_book(
        &self,
        account: AccountUuid,
        book_slug: &str,
    ) -> Result<CartAddOutcome, CartsServiceError>;

    /// Bulk-set line quantities. Fails whole when any item is not in the
    /// caller's open cart.
    async fn set_quantities(
        &self,
        account: AccountUuid,
        quantities: Vec<(CartItemUuid, u64)>,
    ) -> Result<Cart, CartsServiceError>;

    /// Delete a line item; no-op when it is not in the caller's open cart.
    async fn remove_item(
        &self,
        account: AccountUuid,
        item: CartItemUuid,
    ) -> Result<(), CartsServiceError>;
}
