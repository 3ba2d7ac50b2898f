use async_trait::async_trait;

use orus_core::{AppResult, AuthSession};

/// Request-scoped credential state, backed by the session cookie.
///
/// Implementations read the underlying store on every call; services never
/// cache what they load from it.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Loads the auth session stored for this browser, if any.
    async fn load_session(&self) -> AppResult<Option<AuthSession>>;

    /// Stores the auth session, replacing any previous one.
    async fn store_session(&self, session: AuthSession) -> AppResult<()>;

    /// Removes the stored auth session.
    async fn clear_session(&self) -> AppResult<()>;

    /// Stores the PKCE verifier for a pending email link flow.
    async fn store_code_verifier(&self, code_verifier: String) -> AppResult<()>;

    /// Removes and returns the pending PKCE verifier.
    async fn take_code_verifier(&self) -> AppResult<Option<String>>;
}
