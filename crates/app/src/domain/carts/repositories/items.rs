//! Cart Items Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::{
    database::{to_i64, to_u64},
    domain::{
        carts::models::{CartItem, CartItemUuid, CartUuid},
        catalog::models::BookUuid,
    },
};

const LIST_CART_ITEMS_SQL: &str = include_str!("../sql/list_cart_items.sql");
const GET_CART_ITEM_SQL: &str = include_str!("../sql/get_cart_item.sql");
const FIND_CART_ITEM_BY_BOOK_SQL: &str = include_str!("../sql/find_cart_item_by_book.sql");
const CREATE_CART_ITEM_SQL: &str = include_str!("../sql/create_cart_item.sql");
const INCREMENT_CART_ITEM_SQL: &str = include_str!("../sql/increment_cart_item.sql");
const SET_CART_ITEM_QTY_SQL: &str = include_str!("../sql/set_cart_item_qty.sql");
const DELETE_CART_ITEM_SQL: &str = include_str!("../sql/delete_cart_item.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgCartItemsRepository;

impl PgCartItemsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_cart_items(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: CartUuid,
    ) -> Result<Vec<CartItem>, sqlx::Error> {
        query_as::<Postgres, CartItem>(LIST_CART_ITEMS_SQL)
            .bind(cart.into_uuid())
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_cart_item(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        item: CartItemUuid,
        cart: CartUuid,
    ) -> Result<CartItem, sqlx::Error> {
        query_as::<Postgres, CartItem>(GET_CART_ITEM_SQL)
            .bind(item.into_uuid())
            .bind(cart.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn find_cart_item_by_book(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: CartUuid,
        book: BookUuid,
    ) -> Result<Option<CartItemUuid>, sqlx::Error> {
        let row = query(FIND_CART_ITEM_BY_BOOK_SQL)
            .bind(cart.into_uuid())
            .bind(book.into_uuid())
            .fetch_optional(&mut **tx)
            .await?;

        row.map(|row| Ok(CartItemUuid::from_uuid(row.try_get("uuid")?)))
            .transpose()
    }

    /// Insert a qty-1 line priced from the book row.
    pub(crate) async fn create_cart_item(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        item: CartItemUuid,
        cart: CartUuid,
        book: BookUuid,
    ) -> Result<(), sqlx::Error> {
        query(CREATE_CART_ITEM_SQL)
            .bind(item.into_uuid())
            .bind(cart.into_uuid())
            .bind(book.into_uuid())
            .execute(&mut **tx)
            .await?;

        Ok(())
    }

    pub(crate) async fn increment_cart_item(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        item: CartItemUuid,
        cart: CartUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(INCREMENT_CART_ITEM_SQL)
            .bind(item.into_uuid())
            .bind(cart.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn set_cart_item_qty(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        item: CartItemUuid,
        cart: CartUuid,
        qty: u64,
    ) -> Result<u64, sqlx::Error> {
        let qty_i64 = to_i64(qty, "qty")?;

        let rows_affected = query(SET_CART_ITEM_QTY_SQL)
            .bind(item.into_uuid())
            .bind(cart.into_uuid())
            .bind(qty_i64)
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn delete_cart_item(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        item: CartItemUuid,
        cart: CartUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_CART_ITEM_SQL)
            .bind(item.into_uuid())
            .bind(cart.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for CartItem {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let unit_price = to_u64(row.try_get("unit_price")?, "unit_price")?;
        let qty = to_u64(row.try_get("qty")?, "qty")?;
        let final_price = to_u64(row.try_get("final_price")?, "final_price")?;

        Ok(Self {
            uuid: CartItemUuid::from_uuid(row.try_get("uuid")?),
            book_uuid: BookUuid::from_uuid(row.try_get("book_uuid")?),
            book_title: row.try_get("book_title")?,
            book_slug: row.try_get("book_slug")?,
            unit_price,
            qty,
            final_price,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
