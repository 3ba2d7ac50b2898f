use async_trait::async_trait;
use orus_application::CredentialStore;
use orus_core::{AppError, AppResult, AuthSession};
use tower_sessions::Session;

pub const AUTH_SESSION_KEY: &str = "auth_session";
pub const CODE_VERIFIER_KEY: &str = "pkce_code_verifier";

/// Credential store backed by the request's cookie session.
#[derive(Clone)]
pub struct SessionCredentials {
    session: Session,
}

impl SessionCredentials {
    pub fn new(session: Session) -> Self {
        Self { session }
    }
}

#[async_trait]
impl CredentialStore for SessionCredentials {
    async fn load_session(&self) -> AppResult<Option<AuthSession>> {
        self.session
            .get::<AuthSession>(AUTH_SESSION_KEY)
            .await
            .map_err(|error| AppError::Internal(format!("failed to read auth session: {error}")))
    }

    async fn store_session(&self, session: AuthSession) -> AppResult<()> {
        self.session.cycle_id().await.map_err(|error| {
            AppError::Internal(format!("failed to rotate session id: {error}"))
        })?;

        self.session
            .insert(AUTH_SESSION_KEY, session)
            .await
            .map_err(|error| AppError::Internal(format!("failed to store auth session: {error}")))
    }

    async fn clear_session(&self) -> AppResult<()> {
        self.session
            .remove::<AuthSession>(AUTH_SESSION_KEY)
            .await
            .map(|_| ())
            .map_err(|error| AppError::Internal(format!("failed to clear auth session: {error}")))
    }

    async fn store_code_verifier(&self, code_verifier: String) -> AppResult<()> {
        self.session
            .insert(CODE_VERIFIER_KEY, code_verifier)
            .await
            .map_err(|error| AppError::Internal(format!("failed to store code verifier: {error}")))
    }

    async fn take_code_verifier(&self) -> AppResult<Option<String>> {
        self.session
            .remove::<String>(CODE_VERIFIER_KEY)
            .await
            .map_err(|error| AppError::Internal(format!("failed to read code verifier: {error}")))
    }
}
