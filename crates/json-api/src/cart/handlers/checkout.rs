//! Checkout Handler

use std::sync::Arc;

use jiff::civil::Date;
use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use bookery_app::domain::{
    checkouts::{CheckoutsServiceError, models::ShippingInfo},
    validation::FieldError,
};

use crate::{
    cart::{
        errors::{checkout_into_status_error, into_status_error},
        models::CheckoutResponse,
    },
    extensions::*,
    forms::FormInvalidResponse,
    state::State,
};

/// Checkout Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CheckoutRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub address: String,
    pub comment: Option<String>,

    /// ISO 8601 date, strictly after today
    pub delivery_date: String,
}

/// Checkout Handler
///
/// Closes the caller's open cart into an immutable checkout record.
#[endpoint(
    tags("cart"),
    summary = "Check out the open cart",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Checkout created"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Invalid form input or empty cart"),
        (status_code = StatusCode::CONFLICT, description = "Cart already checked out"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Unauthorized"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CheckoutRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<(), StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let account = depot.account_uuid_or_401()?;
    let request = json.into_inner();

    let Ok(delivery_date) = request.delivery_date.parse::<Date>() else {
        res.status_code(StatusCode::UNPROCESSABLE_ENTITY);
        res.render(Json(FormInvalidResponse::from_errors(vec![FieldError::new(
            "delivery_date",
            "enter a valid date",
        )])));

        return Ok(());
    };

    let cart = state
        .app
        .carts
        .open_cart(account)
        .await
        .map_err(into_status_error)?;

    let result = state
        .app
        .checkouts
        .checkout(
            account,
            cart.uuid,
            ShippingInfo {
                first_name: request.first_name,
                last_name: request.last_name,
                email: request.email,
                address: request.address,
                comment: request.comment,
                delivery_date,
            },
        )
        .await;

    match result {
        Ok(checkout) => {
            res.status_code(StatusCode::CREATED);
            res.render(Json(CheckoutResponse::from(checkout)));
        }
        Err(CheckoutsServiceError::Validation(errors)) => {
            res.status_code(StatusCode::UNPROCESSABLE_ENTITY);
            res.render(Json(FormInvalidResponse::from_errors(errors)));
        }
        Err(error) => return Err(checkout_into_status_error(error)),
    }

    Ok(())
}
