//! Shipping form validation.

use jiff::civil::Date;

use crate::domain::{
    checkouts::models::ShippingInfo,
    validation::{FieldError, is_single_word, is_valid_email},
};

/// The delivery date must be strictly after `today`; the form layer may
/// have checked this already, but it is re-validated here for integrity.
pub(crate) fn validate_shipping(
    shipping: &ShippingInfo,
    today: Date,
) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();

    if !is_single_word(&shipping.first_name) {
        errors.push(FieldError::new(
            "first_name",
            format!("\"{}\" must be one word string", shipping.first_name),
        ));
    }

    if !is_single_word(&shipping.last_name) {
        errors.push(FieldError::new(
            "last_name",
            format!("\"{}\" must be one word string", shipping.last_name),
        ));
    }

    if !is_valid_email(&shipping.email) {
        errors.push(FieldError::new("email", "enter a valid email address"));
    }

    if shipping.address.trim().is_empty() {
        errors.push(FieldError::new("address", "address is required"));
    }

    if shipping.delivery_date <= today {
        errors.push(FieldError::new(
            "delivery_date",
            "delivery date must be after today",
        ));
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
