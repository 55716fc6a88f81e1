//! Checkouts Repository

use jiff_sqlx::{Date as SqlxDate, Timestamp as SqlxTimestamp};
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as, query_scalar};

use crate::{
    database::to_u64,
    domain::{
        accounts::models::AccountUuid,
        carts::models::CartUuid,
        checkouts::models::{Checkout, CheckoutUuid, ShippingInfo},
    },
    uuids::TypedUuid,
};

const GET_CART_FOR_CHECKOUT_SQL: &str = include_str!("sql/get_cart_for_checkout.sql");
const COUNT_CART_ITEMS_SQL: &str = include_str!("sql/count_cart_items.sql");
const CREATE_CHECKOUT_SQL: &str = include_str!("sql/create_checkout.sql");
const CLOSE_CART_SQL: &str = include_str!("sql/close_cart.sql");
const GET_CHECKOUT_SQL: &str = include_str!("sql/get_checkout.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgCheckoutsRepository;

impl PgCheckoutsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Lock the cart row and report whether it is already closed.
    pub(crate) async fn lock_cart(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: CartUuid,
        account: AccountUuid,
    ) -> Result<Option<bool>, sqlx::Error> {
        let row = query(GET_CART_FOR_CHECKOUT_SQL)
            .bind(cart.into_uuid())
            .bind(account.into_uuid())
            .fetch_optional(&mut **tx)
            .await?;

        row.map(|row| row.try_get("is_used")).transpose()
    }

    pub(crate) async fn count_cart_items(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: CartUuid,
    ) -> Result<i64, sqlx::Error> {
        query_scalar(COUNT_CART_ITEMS_SQL)
            .bind(cart.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn create_checkout(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        uuid: CheckoutUuid,
        cart: CartUuid,
        account: AccountUuid,
        shipping: &ShippingInfo,
    ) -> Result<(), sqlx::Error> {
        query(CREATE_CHECKOUT_SQL)
            .bind(uuid.into_uuid())
            .bind(cart.into_uuid())
            .bind(account.into_uuid())
            .bind(&shipping.first_name)
            .bind(&shipping.last_name)
            .bind(&shipping.email)
            .bind(&shipping.address)
            .bind(shipping.comment.as_deref())
            .bind(SqlxDate::from(shipping.delivery_date))
            .execute(&mut **tx)
            .await?;

        Ok(())
    }

    pub(crate) async fn close_cart(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: CartUuid,
    ) -> Result<(), sqlx::Error> {
        query(CLOSE_CART_SQL)
            .bind(cart.into_uuid())
            .execute(&mut **tx)
            .await?;

        Ok(())
    }

    pub(crate) async fn get_checkout(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        uuid: CheckoutUuid,
        account: AccountUuid,
    ) -> Result<Checkout, sqlx::Error> {
        query_as::<Postgres, Checkout>(GET_CHECKOUT_SQL)
            .bind(uuid.into_uuid())
            .bind(account.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for Checkout {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let total_price = to_u64(row.try_get("total_price")?, "total_price")?;

        Ok(Self {
            uuid: CheckoutUuid::from_uuid(row.try_get("uuid")?),
            cart_uuid: TypedUuid::from_uuid(row.try_get("cart_uuid")?),
            account_uuid: TypedUuid::from_uuid(row.try_get("account_uuid")?),
            first_name: row.try_get("first_name")?,
            last_name: row.try_get("last_name")?,
            email: row.try_get("email")?,
            address: row.try_get("address")?,
            comment: row.try_get("comment")?,
            delivery_date: row.try_get::<SqlxDate, _>("delivery_date")?.to_jiff(),
            total_price,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
