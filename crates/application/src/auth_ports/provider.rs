use async_trait::async_trait;

use orus_core::{AppResult, AuthSession, Identity};

/// Sign-up submission forwarded to the auth service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpRequest {
    /// Validated email.
    pub email: String,
    /// Validated password.
    pub password: String,
    /// Display name stored as user metadata.
    pub full_name: Option<String>,
    /// Link target of the confirmation email.
    pub email_redirect_to: String,
    /// PKCE challenge bound to the confirmation link.
    pub code_challenge: String,
}

/// Auth service answer to a sign-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignUpResult {
    /// Email confirmation is disabled and a session was issued right away.
    SessionIssued(AuthSession),
    /// A confirmation email was sent.
    ConfirmationRequired,
}

/// Password recovery submission forwarded to the auth service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecoveryRequest {
    /// Account email.
    pub email: String,
    /// Link target of the recovery email.
    pub redirect_to: String,
    /// PKCE challenge bound to the recovery link.
    pub code_challenge: String,
}

/// Hosted auth service.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Resolves the user behind an access token.
    ///
    /// Returns `Ok(None)` when the service reports no active session for the
    /// token; any other failure is an error.
    async fn get_user(&self, access_token: &str) -> AppResult<Option<Identity>>;

    /// Signs in with email and password.
    ///
    /// Rejected credentials are `AppError::Unauthorized`.
    async fn sign_in_with_password(&self, email: &str, password: &str) -> AppResult<AuthSession>;

    /// Trades a refresh token for a new session.
    ///
    /// A token the service no longer honors is `AppError::Unauthorized`.
    async fn refresh_session(&self, refresh_token: &str) -> AppResult<AuthSession>;

    /// Registers a new account.
    async fn sign_up(&self, request: SignUpRequest) -> AppResult<SignUpResult>;

    /// Exchanges an email-link auth code for a session.
    async fn exchange_code_for_session(
        &self,
        auth_code: &str,
        code_verifier: &str,
    ) -> AppResult<AuthSession>;

    /// Sends a password recovery email.
    async fn reset_password_for_email(&self, request: RecoveryRequest) -> AppResult<()>;

    /// Sets a new password for the user behind the access token.
    async fn update_password(&self, access_token: &str, new_password: &str) -> AppResult<()>;

    /// Revokes the session behind the access token.
    async fn sign_out(&self, access_token: &str) -> AppResult<()>;
}
