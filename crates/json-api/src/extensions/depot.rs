//! Depot helper extensions.

use std::any::Any;

use salvo::prelude::{Depot, StatusError};

use bookery_app::domain::accounts::models::AccountUuid;

const ACCOUNT_UUID_KEY: &str = "bookery.account_uuid";

/// Helpers for mapping depot extraction failures to HTTP errors.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError>;

    fn insert_account_uuid(&mut self, account: AccountUuid);

    fn account_uuid_or_401(&self) -> Result<AccountUuid, StatusError>;

    fn account_uuid(&self) -> Option<AccountUuid>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError> {
        self.obtain::<T>()
            .map_err(|_ignored| StatusError::internal_server_error())
    }

    fn insert_account_uuid(&mut self, account: AccountUuid) {
        self.insert(ACCOUNT_UUID_KEY, account);
    }

    fn account_uuid_or_401(&self) -> Result<AccountUuid, StatusError> {
        self.account_uuid()
            .ok_or_else(|| StatusError::unauthorized().brief("Not authenticated"))
    }

    fn account_uuid(&self) -> Option<AccountUuid> {
        self.get::<AccountUuid>(ACCOUNT_UUID_KEY).ok().copied()
    }
}
