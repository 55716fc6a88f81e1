//! Accounts service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    auth::passwords::{generate_salt, hash_password},
    database::Db,
    domain::accounts::{
        errors::{AccountsServiceError, registration_conflict},
        models::{Account, AccountUuid, NewAccount, ProfileUpdate},
        repository::PgAccountsRepository,
        validate::{validate_profile, validate_registration},
    },
    uuids::TypedUuid,
};

/// Image path used when an account has no avatar.
pub const DEFAULT_AVATAR_IMAGE: &str = "default_avatar.jpg";

#[derive(Debug, Clone)]
pub struct PgAccountsService {
    db: Db,
    repository: PgAccountsRepository,
}

impl PgAccountsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgAccountsRepository::new(),
        }
    }
}

#[async_trait]
impl AccountsService for PgAccountsService {
    async fn register(&self, account: NewAccount) -> Result<Account, AccountsServiceError> {
        validate_registration(&account).map_err(AccountsServiceError::Validation)?;

        let salt = generate_salt();
        let hash = hash_password(&salt, &account.password);

        let mut tx = self.db.begin_transaction().await?;

        let created = self
            .repository
            .create_account(
                &mut tx,
                TypedUuid::new(),
                &account.username,
                &account.email,
                &salt,
                &hash,
            )
            .await
            .map_err(registration_conflict)?;

        tx.commit().await?;

        Ok(created)
    }

    async fn get_account(&self, account: AccountUuid) -> Result<Account, AccountsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let account = self.repository.get_account(&mut tx, account).await?;

        tx.commit().await?;

        Ok(account)
    }

    async fn update_profile(
        &self,
        account: AccountUuid,
        update: ProfileUpdate,
    ) -> Result<Account, AccountsServiceError> {
        validate_profile(&update).map_err(AccountsServiceError::Validation)?;

        // An explicitly cleared avatar falls back to the default.
        let image = update.image.map(|image| {
            if image.is_empty() {
                DEFAULT_AVATAR_IMAGE.to_string()
            } else {
                image
            }
        });

        let mut tx = self.db.begin_transaction().await?;

        let updated = self
            .repository
            .update_profile(
                &mut tx,
                account,
                update.first_name.as_deref(),
                update.last_name.as_deref(),
                update.email.as_deref(),
                image.as_deref(),
            )
            .await?;

        tx.commit().await?;

        Ok(updated)
    }
}

#[automock]
#[async_trait]
pub trait AccountsService: Send + Sync {
    /// Validates and creates a new account.
    async fn register(&self, account: NewAccount) -> Result<Account, AccountsServiceError>;

    /// Retrieve a single account.
    async fn get_account(&self, account: AccountUuid) -> Result<Account, AccountsServiceError>;

    /// Updates profile fields; `None` fields are left unchanged.
    async fn update_profile(
        &self,
        account: AccountUuid,
        update: ProfileUpdate,
    ) -> Result<Account, AccountsServiceError>;
}
