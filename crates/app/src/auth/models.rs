//! Auth data models.

use uuid::Uuid;

use crate::{
    auth::SessionTokenVersion,
    domain::accounts::models::{Account, AccountUuid},
};

/// Session data used during bearer authentication.
#[derive(Debug, Clone)]
pub(crate) struct ActiveSession {
    /// Account that owns this session.
    pub account_uuid: AccountUuid,

    /// Token format/digest version.
    pub version: SessionTokenVersion,

    /// Digest of the session's verifier input.
    pub token_hash: String,
}

/// Stored credentials looked up at login.
#[derive(Debug, Clone)]
pub(crate) struct AccountCredentials {
    pub account_uuid: AccountUuid,
    pub password_salt: String,
    pub password_hash: String,
}

/// Session issuance result with one-time raw token.
#[derive(Debug, Clone)]
pub struct IssuedSession {
    pub token: String,
    pub session_uuid: Uuid,
    pub account: Account,
}
