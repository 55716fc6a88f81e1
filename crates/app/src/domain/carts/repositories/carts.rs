//! Carts Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};
use uuid::Uuid;

use crate::{
    domain::{
        accounts::models::AccountUuid,
        carts::models::{Cart, CartUuid},
        catalog::models::BookUuid,
    },
    uuids::TypedUuid,
};

const ENSURE_OPEN_CART_SQL: &str = include_str!("../sql/ensure_open_cart.sql");
const FIND_OPEN_CART_SQL: &str = include_str!("../sql/find_open_cart.sql");
const GET_BOOK_FOR_CART_SQL: &str = include_str!("../sql/get_book_for_cart.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgCartsRepository;

impl PgCartsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Fetch the account's open cart, creating one when absent, and lock
    /// its row for the rest of the transaction.
    pub(crate) async fn open_cart_locked(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        account: AccountUuid,
    ) -> Result<Cart, sqlx::Error> {
        query(ENSURE_OPEN_CART_SQL)
            .bind(Uuid::now_v7())
            .bind(account.into_uuid())
            .execute(&mut **tx)
            .await?;

        query_as::<Postgres, Cart>(FIND_OPEN_CART_SQL)
            .bind(account.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    /// Fetch the account's open cart without creating one.
    pub(crate) async fn find_open_cart_locked(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        account: AccountUuid,
    ) -> Result<Option<Cart>, sqlx::Error> {
        query_as::<Postgres, Cart>(FIND_OPEN_CART_SQL)
            .bind(account.into_uuid())
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn get_book_for_cart(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        slug: &str,
    ) -> Result<BookUuid, sqlx::Error> {
        let row = query(GET_BOOK_FOR_CART_SQL)
            .bind(slug)
            .fetch_one(&mut **tx)
            .await?;

        Ok(BookUuid::from_uuid(row.try_get("uuid")?))
    }
}

impl<'r> FromRow<'r, PgRow> for Cart {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: CartUuid::from_uuid(row.try_get("uuid")?),
            account_uuid: TypedUuid::from_uuid(row.try_get("account_uuid")?),
            is_used: row.try_get("is_used")?,
            items: Vec::new(),
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
