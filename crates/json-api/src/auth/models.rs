//! Auth response models.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bookery_app::domain::accounts::models::Account;

/// Public account representation.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AccountResponse {
    /// The unique identifier of the account
    pub uuid: Uuid,

    /// The unique login name
    pub username: String,

    /// The account's email address
    pub email: String,

    /// Optional profile first name
    pub first_name: Option<String>,

    /// Optional profile last name
    pub last_name: Option<String>,

    /// Avatar image path
    pub image: String,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            uuid: account.uuid.into_uuid(),
            username: account.username,
            email: account.email,
            first_name: account.first_name,
            last_name: account.last_name,
            image: account.image,
        }
    }
}
