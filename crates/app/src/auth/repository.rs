//! Auth Repository

use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query, query_as};
use uuid::Uuid;

use crate::{
    auth::{
        SessionTokenVersion,
        models::{AccountCredentials, ActiveSession},
    },
    domain::accounts::models::{Account, AccountUuid},
};

const FIND_CREDENTIALS_SQL: &str = include_str!("sql/find_credentials.sql");
const CREATE_SESSION_SQL: &str = include_str!("sql/create_session.sql");
const FIND_ACTIVE_SESSION_SQL: &str = include_str!("sql/find_active_session.sql");
const TOUCH_SESSION_SQL: &str = include_str!("sql/touch_session.sql");
const REVOKE_SESSION_SQL: &str = include_str!("sql/revoke_session.sql");
const GET_ACCOUNT_SQL: &str = include_str!("sql/get_account.sql");

#[derive(Debug, Clone)]
pub(crate) struct PgAuthRepository {
    pool: PgPool,
}

impl PgAuthRepository {
    #[must_use]
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub(crate) async fn find_credentials_by_username(
        &self,
        username: &str,
    ) -> Result<Option<AccountCredentials>, sqlx::Error> {
        query_as::<Postgres, AccountCredentials>(FIND_CREDENTIALS_SQL)
            .bind(username)
            .fetch_optional(&self.pool)
            .await
    }

    pub(crate) async fn create_session(
        &self,
        session_uuid: Uuid,
        account: AccountUuid,
        version: SessionTokenVersion,
        token_hash: &str,
    ) -> Result<(), sqlx::Error> {
        query(CREATE_SESSION_SQL)
            .bind(session_uuid)
            .bind(account.into_uuid())
            .bind(version.as_i16())
            .bind(token_hash)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub(crate) async fn find_active_session(
        &self,
        session_uuid: Uuid,
    ) -> Result<Option<ActiveSession>, sqlx::Error> {
        query_as::<Postgres, ActiveSession>(FIND_ACTIVE_SESSION_SQL)
            .bind(session_uuid)
            .fetch_optional(&self.pool)
            .await
    }

    pub(crate) async fn touch_session_last_used(
        &self,
        session_uuid: Uuid,
    ) -> Result<(), sqlx::Error> {
        query(TOUCH_SESSION_SQL)
            .bind(session_uuid)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub(crate) async fn revoke_session(&self, session_uuid: Uuid) -> Result<u64, sqlx::Error> {
        let rows_affected = query(REVOKE_SESSION_SQL)
            .bind(session_uuid)
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn get_account(&self, account: AccountUuid) -> Result<Account, sqlx::Error> {
        query_as::<Postgres, Account>(GET_ACCOUNT_SQL)
            .bind(account.into_uuid())
            .fetch_one(&self.pool)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for AccountCredentials {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            account_uuid: AccountUuid::from_uuid(row.try_get("uuid")?),
            password_salt: row.try_get("password_salt")?,
            password_hash: row.try_get("password_hash")?,
        })
    }
}

impl<'r> FromRow<'r, PgRow> for ActiveSession {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let version: i16 = row.try_get("version")?;

        let version =
            SessionTokenVersion::try_from(version).map_err(|e| sqlx::Error::ColumnDecode {
                index: "version".to_string(),
                source: Box::new(e),
            })?;

        Ok(Self {
            account_uuid: AccountUuid::from_uuid(row.try_get("account_uuid")?),
            version,
            token_hash: row.try_get("token_hash")?,
        })
    }
}
