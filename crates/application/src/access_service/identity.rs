use orus_core::{AuthSession, Degradable, Degraded, Identity};

use crate::CredentialStore;
use crate::live_session::load_live_session;

use super::AccessService;

impl AccessService {
    /// Resolves the signed-in identity, distinguishing absence from failure.
    ///
    /// `Ok(None)` covers both "no stored session" and "the auth service
    /// reports no active session for the stored token". An expired session
    /// is refreshed first.
    pub async fn resolve_identity(
        &self,
        credentials: &dyn CredentialStore,
    ) -> Degradable<Option<Identity>> {
        let Some(session) = load_live_session(self.auth_provider.as_ref(), credentials).await?
        else {
            return Ok(None);
        };

        self.auth_provider
            .get_user(&session.access_token)
            .await
            .map_err(|error| Degraded::from_error("auth_provider", &error))
    }

    /// Returns the signed-in identity, or `None`.
    ///
    /// Unexpected failures are logged and reported as `None`.
    pub async fn get_identity(&self, credentials: &dyn CredentialStore) -> Option<Identity> {
        match self.resolve_identity(credentials).await {
            Ok(identity) => identity,
            Err(degraded) => {
                tracing::warn!(
                    source = degraded.source_name(),
                    reason = degraded.reason(),
                    "identity lookup degraded"
                );
                None
            }
        }
    }

    /// Returns the stored session, refreshing it once past its expiry.
    ///
    /// The auth service is only contacted for a refresh. A session that
    /// cannot be refreshed is treated as absent.
    pub async fn get_session(&self, credentials: &dyn CredentialStore) -> Option<AuthSession> {
        match load_live_session(self.auth_provider.as_ref(), credentials).await {
            Ok(session) => session,
            Err(degraded) => {
                tracing::warn!(
                    source = degraded.source_name(),
                    reason = degraded.reason(),
                    "session read degraded"
                );
                None
            }
        }
    }
}
