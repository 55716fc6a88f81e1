//! Cart Models

use jiff::Timestamp;

use crate::{
    domain::{accounts::models::AccountUuid, catalog::models::BookUuid},
    uuids::TypedUuid,
};

/// Cart UUID
pub type CartUuid = TypedUuid<Cart>;

/// Cart Item UUID
pub type CartItemUuid = TypedUuid<CartItem>;

/// Cart Model
#[derive(Debug, Clone)]
pub struct Cart {
    pub uuid: CartUuid,
    pub account_uuid: AccountUuid,
    /// Closed carts are immutable; exactly one checkout references them.
    pub is_used: bool,
    pub items: Vec<CartItem>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Cart {
    /// Sum of line quantities; 0 for an empty cart.
    #[must_use]
    pub fn total_qty(&self) -> u64 {
        self.items.iter().map(|item| item.qty).sum()
    }

    /// Sum of line totals in cents; 0 for an empty cart.
    #[must_use]
    pub fn total_price(&self) -> u64 {
        self.items.iter().map(|item| item.final_price).sum()
    }
}

/// CartItem Model
#[derive(Debug, Clone)]
pub struct CartItem {
    pub uuid: CartItemUuid,
    pub book_uuid: BookUuid,
    pub book_title: String,
    pub book_slug: String,
    /// Book price in cents at read time.
    pub unit_price: u64,
    pub qty: u64,
    /// `unit_price * qty` as of the last save.
    pub final_price: u64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Result of adding a book to a cart.
#[derive(Debug, Clone)]
pub enum CartAddOutcome {
    /// The book was not in the cart; a new line with qty 1 was created.
    Added(CartItem),
    /// The book was already in the cart; its qty was incremented.
    Incremented(CartItem),
}

impl CartAddOutcome {
    #[must_use]
    pub fn item(&self) -> &CartItem {
        match self {
            Self::Added(item) | Self::Incremented(item) => item,
        }
    }
}
