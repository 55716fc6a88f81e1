//! Account Models

use jiff::Timestamp;

use crate::uuids::TypedUuid;

/// Account UUID
pub type AccountUuid = TypedUuid<Account>;

/// Account Model
#[derive(Debug, Clone)]
pub struct Account {
    pub uuid: AccountUuid,
    pub username: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub image: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// New Account Model
#[derive(Debug, Clone, PartialEq)]
pub struct NewAccount {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Profile Update Model
///
/// `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub image: Option<String>,
}
