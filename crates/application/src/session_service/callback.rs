use orus_core::{AppError, AppResult, AuthSession, Identity};
use orus_domain::routes;

use crate::CredentialStore;

use super::SessionService;

/// Result of the email-link callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallbackOutcome {
    /// The code was exchanged and the session stored.
    SignedIn(Identity),
    /// The request carried no auth code.
    MissingCode,
    /// The exchange or the session write failed.
    ExchangeFailed,
}

impl CallbackOutcome {
    /// Returns where the browser goes next.
    #[must_use]
    pub fn redirect_target(&self) -> &'static str {
        match self {
            Self::SignedIn(_) => routes::ROOT,
            Self::MissingCode => routes::LOGIN,
            Self::ExchangeFailed => routes::LOGIN_CALLBACK_FAILED,
        }
    }
}

impl SessionService {
    /// Completes an email-link flow by exchanging its auth code.
    pub async fn complete_callback(
        &self,
        credentials: &dyn CredentialStore,
        auth_code: Option<&str>,
    ) -> CallbackOutcome {
        let Some(auth_code) = auth_code
            .map(str::trim)
            .filter(|value| !value.is_empty())
        else {
            return CallbackOutcome::MissingCode;
        };

        let session = match self.exchange(credentials, auth_code).await {
            Ok(session) => session,
            Err(error) => {
                tracing::warn!(error = %error, "auth code exchange failed");
                return CallbackOutcome::ExchangeFailed;
            }
        };

        let identity = session.identity.clone();
        if let Err(error) = credentials.store_session(session).await {
            tracing::warn!(error = %error, "storing exchanged session failed");
            return CallbackOutcome::ExchangeFailed;
        }

        self.signed_in(&identity).await;
        CallbackOutcome::SignedIn(identity)
    }

    async fn exchange(
        &self,
        credentials: &dyn CredentialStore,
        auth_code: &str,
    ) -> AppResult<AuthSession> {
        let code_verifier = credentials.take_code_verifier().await?.ok_or_else(|| {
            AppError::Validation("no pending code verifier for this browser".to_owned())
        })?;

        self.auth_provider
            .exchange_code_for_session(auth_code, &code_verifier)
            .await
    }
}
