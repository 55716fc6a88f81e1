//! Cart response models.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bookery_app::domain::{
    carts::models::{Cart, CartItem},
    checkouts::models::Checkout,
};

/// The caller's open cart.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartResponse {
    /// The unique identifier of the cart
    pub uuid: Uuid,

    /// The items in the cart
    pub items: Vec<CartItemResponse>,

    /// Sum of line quantities
    pub total_qty: u64,

    /// Sum of line totals in cents
    pub total_price: u64,
}

impl From<Cart> for CartResponse {
    fn from(cart: Cart) -> Self {
        let total_qty = cart.total_qty();
        let total_price = cart.total_price();

        Self {
            uuid: cart.uuid.into_uuid(),
            items: cart.items.into_iter().map(CartItemResponse::from).collect(),
            total_qty,
            total_price,
        }
    }
}

/// One cart line.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartItemResponse {
    /// The unique identifier of the cart item
    pub uuid: Uuid,

    /// The book on this line
    pub book_uuid: Uuid,

    /// The book title
    pub book_title: String,

    /// The book's URL slug
    pub book_slug: String,

    /// Unit price in cents
    pub unit_price: u64,

    /// Quantity, at least 1
    pub qty: u64,

    /// `unit_price * qty` as of the last save
    pub final_price: u64,
}

impl From<CartItem> for CartItemResponse {
    fn from(item: CartItem) -> Self {
        Self {
            uuid: item.uuid.into_uuid(),
            book_uuid: item.book_uuid.into_uuid(),
            book_title: item.book_title,
            book_slug: item.book_slug,
            unit_price: item.unit_price,
            qty: item.qty,
            final_price: item.final_price,
        }
    }
}

/// A finalized checkout.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CheckoutResponse {
    /// The unique identifier of the checkout
    pub uuid: Uuid,

    /// The consumed cart
    pub cart_uuid: Uuid,

    /// Shipping first name
    pub first_name: String,

    /// Shipping last name
    pub last_name: String,

    /// Contact email
    pub email: String,

    /// Shipping address
    pub address: String,

    /// Optional order comment
    pub comment: Option<String>,

    /// Requested delivery date (ISO 8601)
    pub delivery_date: String,

    /// Order total in cents
    pub total_price: u64,
}

impl From<Checkout> for CheckoutResponse {
    fn from(checkout: Checkout) -> Self {
        Self {
            uuid: checkout.uuid.into_uuid(),
            cart_uuid: checkout.cart_uuid.into_uuid(),
            first_name: checkout.first_name,
            last_name: checkout.last_name,
            email: checkout.email,
            address: checkout.address,
            comment: checkout.comment,
            delivery_date: checkout.delivery_date.to_string(),
            total_price: checkout.total_price,
        }
    }
}
