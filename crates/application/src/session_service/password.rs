use orus_core::{AppError, AppResult};
use orus_domain::{EmailAddress, validate_new_password};

use crate::live_session::load_live_session;
use crate::pkce::generate_pkce_pair;
use crate::{CredentialStore, RecoveryRequest};

use super::{AuthStateChange, SessionService};

impl SessionService {
    /// Sends a recovery email whose link signs the user in through the
    /// callback route.
    ///
    /// Unknown emails succeed as well; the auth service does not reveal
    /// whether an account exists.
    pub async fn request_password_reset(
        &self,
        credentials: &dyn CredentialStore,
        email: &str,
    ) -> AppResult<()> {
        let email = EmailAddress::new(email)?;

        let pkce = generate_pkce_pair()?;
        credentials.store_code_verifier(pkce.code_verifier).await?;

        self.auth_provider
            .reset_password_for_email(RecoveryRequest {
                email: email.into(),
                redirect_to: self.callback_url.clone(),
                code_challenge: pkce.code_challenge,
            })
            .await?;

        self.publish(AuthStateChange::PasswordRecoveryRequested);
        Ok(())
    }

    /// Sets a new password for the signed-in user.
    ///
    /// An expired stored session is refreshed first; one that cannot be
    /// refreshed is `AppError::Unauthorized`.
    pub async fn update_password(
        &self,
        credentials: &dyn CredentialStore,
        new_password: &str,
        confirmation: &str,
    ) -> AppResult<()> {
        validate_new_password(new_password, confirmation)?;

        let session = load_live_session(self.auth_provider.as_ref(), credentials)
            .await
            .map_err(|degraded| {
                AppError::Internal(format!(
                    "{} unavailable: {}",
                    degraded.source_name(),
                    degraded.reason()
                ))
            })?;
        let Some(session) = session else {
            return Err(AppError::Unauthorized("no active session".to_owned()));
        };

        self.auth_provider
            .update_password(&session.access_token, new_password)
            .await?;

        self.publish(AuthStateChange::UserUpdated {
            user_id: session.identity.id(),
        });
        Ok(())
    }
}
