//! Accounts Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::domain::accounts::models::{Account, AccountUuid};

const CREATE_ACCOUNT_SQL: &str = include_str!("sql/create_account.sql");
const GET_ACCOUNT_SQL: &str = include_str!("sql/get_account.sql");
const UPDATE_PROFILE_SQL: &str = include_str!("sql/update_profile.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgAccountsRepository;

impl PgAccountsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_account(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        uuid: AccountUuid,
        username: &str,
        email: &str,
        password_salt: &str,
        password_hash: &str,
    ) -> Result<Account, sqlx::Error> {
        query_as::<Postgres, Account>(CREATE_ACCOUNT_SQL)
            .bind(uuid.into_uuid())
            .bind(username)
            .bind(email)
            .bind(password_salt)
            .bind(password_hash)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn get_account(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        account: AccountUuid,
    ) -> Result<Account, sqlx::Error> {
        query_as::<Postgres, Account>(GET_ACCOUNT_SQL)
            .bind(account.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn update_profile(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        account: AccountUuid,
        first_name: Option<&str>,
        last_name: Option<&str>,
        email: Option<&str>,
        image: Option<&str>,
    ) -> Result<Account, sqlx::Error> {
        query_as::<Postgres, Account>(UPDATE_PROFILE_SQL)
            .bind(account.into_uuid())
            .bind(first_name)
            .bind(last_name)
            .bind(email)
            .bind(image)
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for Account {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: AccountUuid::from_uuid(row.try_get("uuid")?),
            username: row.try_get("username")?,
            email: row.try_get("email")?,
            first_name: row.try_get("first_name")?,
            last_name: row.try_get("last_name")?,
            image: row.try_get("image")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
