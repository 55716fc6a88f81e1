//! Checkout Models

use jiff::{Timestamp, civil::Date};

use crate::{
    domain::{accounts::models::AccountUuid, carts::models::CartUuid},
    uuids::TypedUuid,
};

/// Checkout UUID
pub type CheckoutUuid = TypedUuid<Checkout>;

/// Checkout Model
///
/// Immutable snapshot of a closed cart plus shipping details.
#[derive(Debug, Clone)]
pub struct Checkout {
    pub uuid: CheckoutUuid,
    pub cart_uuid: CartUuid,
    pub account_uuid: AccountUuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub address: String,
    pub comment: Option<String>,
    pub delivery_date: Date,
    /// Sum of the closed cart's line totals in cents.
    pub total_price: u64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Shipping details collected at checkout.
#[derive(Debug, Clone, PartialEq)]
pub struct ShippingInfo {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub address: String,
    pub comment: Option<String>,
    pub delivery_date: Date,
}
