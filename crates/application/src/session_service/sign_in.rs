use orus_core::{AppError, AppResult, Identity};
use orus_domain::{EmailAddress, validate_new_password};

use crate::pkce::generate_pkce_pair;
use crate::{CredentialStore, SignUpRequest, SignUpResult};

use super::{AuthStateChange, SessionService};

/// Registration form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpInput {
    /// Account email.
    pub email: String,
    /// Chosen password.
    pub password: String,
    /// Password confirmation field.
    pub password_confirmation: String,
    /// Optional display name.
    pub full_name: Option<String>,
}

/// Result of a registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignUpOutcome {
    /// The auth service issued a session right away.
    SignedIn(Identity),
    /// The user has to follow the confirmation email first.
    ConfirmationPending,
}

impl SessionService {
    /// Signs in with email and password and stores the session.
    pub async fn sign_in(
        &self,
        credentials: &dyn CredentialStore,
        email: &str,
        password: &str,
    ) -> AppResult<Identity> {
        let email = EmailAddress::new(email)?;
        if password.is_empty() {
            return Err(AppError::Validation("password must not be empty".to_owned()));
        }

        let session = self
            .auth_provider
            .sign_in_with_password(email.as_str(), password)
            .await?;
        let identity = session.identity.clone();
        credentials.store_session(session).await?;

        self.signed_in(&identity).await;
        Ok(identity)
    }

    /// Registers a new account.
    ///
    /// The confirmation email links back to the callback route with a PKCE
    /// bound auth code.
    pub async fn sign_up(
        &self,
        credentials: &dyn CredentialStore,
        input: SignUpInput,
    ) -> AppResult<SignUpOutcome> {
        let email = EmailAddress::new(input.email)?;
        validate_new_password(&input.password, &input.password_confirmation)?;
        let full_name = input
            .full_name
            .map(|value| value.trim().to_owned())
            .filter(|value| !value.is_empty());

        let pkce = generate_pkce_pair()?;
        credentials.store_code_verifier(pkce.code_verifier).await?;

        let result = self
            .auth_provider
            .sign_up(SignUpRequest {
                email: email.into(),
                password: input.password,
                full_name,
                email_redirect_to: self.callback_url.clone(),
                code_challenge: pkce.code_challenge,
            })
            .await?;

        match result {
            SignUpResult::SessionIssued(session) => {
                let identity = session.identity.clone();
                credentials.take_code_verifier().await?;
                credentials.store_session(session).await?;
                self.signed_in(&identity).await;
                Ok(SignUpOutcome::SignedIn(identity))
            }
            SignUpResult::ConfirmationRequired => Ok(SignUpOutcome::ConfirmationPending),
        }
    }

    /// Clears the local session after a best-effort remote sign-out.
    pub async fn sign_out(&self, credentials: &dyn CredentialStore) -> AppResult<()> {
        let session = credentials.load_session().await?;
        let user_id = session.as_ref().map(|session| session.identity.id());

        if let Some(session) = session
            && let Err(error) = self.auth_provider.sign_out(&session.access_token).await
        {
            tracing::warn!(error = %error, "remote sign-out failed");
        }

        credentials.clear_session().await?;
        self.publish(AuthStateChange::SignedOut { user_id });
        Ok(())
    }
}
