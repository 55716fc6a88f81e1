//! Auth service.

use async_trait::async_trait;
use mockall::automock;
use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use crate::{
    auth::{
        AuthServiceError, IssuedSession, SessionTokenVersion, build_verifier_input,
        digest_verifier_input, format_session_token, generate_session_secret, parse_session_token,
        passwords::verify_password, repository::PgAuthRepository,
    },
    domain::accounts::models::AccountUuid,
};

#[derive(Debug, Clone)]
pub struct PgAuthService {
    repository: PgAuthRepository,
}

impl PgAuthService {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: PgAuthRepository::new(pool),
        }
    }
}

#[async_trait]
impl AuthService for PgAuthService {
    async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<IssuedSession, AuthServiceError> {
        let credentials = self
            .repository
            .find_credentials_by_username(username)
            .await?
            .ok_or(AuthServiceError::InvalidCredentials)?;

        if !verify_password(
            &credentials.password_salt,
            password,
            &credentials.password_hash,
        ) {
            debug!("rejected login for {username}");

            return Err(AuthServiceError::InvalidCredentials);
        }

        let session_uuid = Uuid::now_v7();
        let version = SessionTokenVersion::V1;
        let secret = generate_session_secret();
        let token = format_session_token(session_uuid, version, &secret);

        let verifier_input =
            build_verifier_input(&session_uuid, version, &credentials.account_uuid, &secret);

        let token_hash = digest_verifier_input(&verifier_input);

        self.repository
            .create_session(session_uuid, credentials.account_uuid, version, &token_hash)
            .await?;

        let account = self.repository.get_account(credentials.account_uuid).await?;

        Ok(IssuedSession {
            token,
            session_uuid,
            account,
        })
    }

    async fn authenticate_bearer(
        &self,
        bearer_token: &str,
    ) -> Result<AccountUuid, AuthServiceError> {
        let parsed_token =
            parse_session_token(bearer_token).map_err(|_| AuthServiceError::NotFound)?;

        let session = self
            .repository
            .find_active_session(parsed_token.session_uuid)
            .await?
            .ok_or(AuthServiceError::NotFound)?;

        if session.version != parsed_token.version {
            return Err(AuthServiceError::NotFound);
        }

        let verifier_input = build_verifier_input(
            &parsed_token.session_uuid,
            parsed_token.version,
            &session.account_uuid,
            &parsed_token.secret,
        );

        if digest_verifier_input(&verifier_input) != session.token_hash {
            return Err(AuthServiceError::NotFound);
        }

        // Best-effort metadata update; auth success should not depend on this write.
        let _touch_result = self
            .repository
            .touch_session_last_used(parsed_token.session_uuid)
            .await;

        Ok(session.account_uuid)
    }

    async fn logout(&self, bearer_token: &str) -> Result<(), AuthServiceError> {
        let parsed_token =
            parse_session_token(bearer_token).map_err(|_| AuthServiceError::NotFound)?;

        let revoked = self
            .repository
            .revoke_session(parsed_token.session_uuid)
            .await?;

        if revoked == 0 {
            return Err(AuthServiceError::NotFound);
        }

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Verify credentials and issue a new bearer session.
    async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<IssuedSession, AuthServiceError>;

    /// Resolve a bearer token to the owning account.
    async fn authenticate_bearer(
        &self,
        bearer_token: &str,
    ) -> Result<AccountUuid, AuthServiceError>;

    /// Revoke the presented session.
    async fn logout(&self, bearer_token: &str) -> Result<(), AuthServiceError>;
}
