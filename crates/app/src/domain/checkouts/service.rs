//! Checkouts service.
//!
//! The cart state machine lives here: OPEN -> CLOSED, one-way. A cart is
//! closed by exactly one checkout; a second attempt fails loudly.

use async_trait::async_trait;
use jiff::Zoned;
use mockall::automock;
use tracing::info;

use crate::{
    database::Db,
    domain::{
        accounts::models::AccountUuid,
        carts::models::CartUuid,
        checkouts::{
            errors::CheckoutsServiceError,
            models::{Checkout, CheckoutUuid, ShippingInfo},
            repository::PgCheckoutsRepository,
            validate::validate_shipping,
        },
    },
};

#[derive(Debug, Clone)]
pub struct PgCheckoutsService {
    db: Db,
    repository: PgCheckoutsRepository,
}

impl PgCheckoutsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgCheckoutsRepository::new(),
        }
    }
}

#[async_trait]
impl CheckoutsService for PgCheckoutsService {
    async fn checkout(
        &self,
        account: AccountUuid,
        cart: CartUuid,
        shipping: ShippingInfo,
    ) -> Result<Checkout, CheckoutsServiceError> {
        validate_shipping(&shipping, Zoned::now().date())
            .map_err(CheckoutsServiceError::Validation)?;

        let mut tx = self.db.begin_transaction().await?;

        let is_used = self
            .repository
            .lock_cart(&mut tx, cart, account)
            .await?
            .ok_or(CheckoutsServiceError::NotFound)?;

        if is_used {
            return Err(CheckoutsServiceError::CartClosed);
        }

        if self.repository.count_cart_items(&mut tx, cart).await? == 0 {
            return Err(CheckoutsServiceError::EmptyCart);
        }

        let uuid = CheckoutUuid::new();

        self.repository
            .create_checkout(&mut tx, uuid, cart, account, &shipping)
            .await?;

        self.repository.close_cart(&mut tx, cart).await?;

        let checkout = self.repository.get_checkout(&mut tx, uuid, account).await?;

        tx.commit().await?;

        info!("cart {cart} checked out as {uuid}");

        Ok(checkout)
    }

    async fn get_checkout(
        &self,
        account: AccountUuid,
        checkout: CheckoutUuid,
    ) -> Result<Checkout, CheckoutsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let checkout = self
            .repository
            .get_checkout(&mut tx, checkout, account)
            .await?;

        tx.commit().await?;

        Ok(checkout)
    }
}

#[automock]
#[async_trait]
pub trait CheckoutsService: Send + Sync {
    /// Close the cart and snapshot it into a checkout record.
    async fn checkout(
        &self,
        account: AccountUuid,
        cart: CartUuid,
        shipping: ShippingInfo,
    ) -> Result<Checkout, CheckoutsServiceError>;

    /// Retrieve one of the account's checkouts.
    async fn get_checkout(
        &self,
        account: AccountUuid,
        checkout: CheckoutUuid,
    ) -> Result<Checkout, CheckoutsServiceError>;
}
