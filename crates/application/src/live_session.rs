use chrono::Utc;

use orus_core::{AppError, AuthSession, Degradable, Degraded};

use crate::{AuthProvider, CredentialStore};

/// Loads the stored session, trading an expired one for a fresh session.
///
/// A refresh token the auth service rejects clears the stored session and
/// reads as absence. A refreshed session replaces the stored one.
pub(crate) async fn load_live_session(
    auth_provider: &dyn AuthProvider,
    credentials: &dyn CredentialStore,
) -> Degradable<Option<AuthSession>> {
    let session = match credentials.load_session().await {
        Ok(Some(session)) => session,
        Ok(None) => return Ok(None),
        Err(error) => return Err(Degraded::from_error("credential_store", &error)),
    };

    if !session.is_expired_at(Utc::now().timestamp()) {
        return Ok(Some(session));
    }

    match auth_provider.refresh_session(&session.refresh_token).await {
        Ok(refreshed) => {
            credentials
                .store_session(refreshed.clone())
                .await
                .map_err(|error| Degraded::from_error("credential_store", &error))?;
            tracing::debug!(user_id = %refreshed.identity.id(), "auth session refreshed");
            Ok(Some(refreshed))
        }
        Err(AppError::Unauthorized(reason)) => {
            tracing::debug!(reason = %reason, "refresh token rejected");
            credentials
                .clear_session()
                .await
                .map_err(|error| Degraded::from_error("credential_store", &error))?;
            Ok(None)
        }
        Err(error) => Err(Degraded::from_error("auth_provider", &error)),
    }
}

#[cfg(test)]
mod tests {
    use orus_core::AuthSession;

    use crate::CredentialStore;
    use crate::test_support::{FakeAuthProvider, FakeCredentialStore, identity, session_for};

    use super::load_live_session;

    fn expired(session: AuthSession) -> AuthSession {
        AuthSession {
            expires_at: Some(1),
            ..session
        }
    }

    #[tokio::test]
    async fn unexpired_session_is_returned_without_refresh() {
        let user = identity("ada@orus.dev");
        let credentials = FakeCredentialStore::with_session(session_for(&user, "token-1"));
        let provider = FakeAuthProvider::default();

        let session = load_live_session(&provider, &credentials).await;

        assert!(matches!(session, Ok(Some(ref value)) if value.access_token == "token-1"));
        assert_eq!(provider.call_count("refresh_session").await, 0);
    }

    #[tokio::test]
    async fn expired_session_is_refreshed_and_stored() {
        let user = identity("ada@orus.dev");
        let stale = expired(session_for(&user, "token-1"));
        let fresh = session_for(&user, "token-2");
        let mut provider = FakeAuthProvider::default();
        provider
            .sessions_by_refresh_token
            .insert(stale.refresh_token.clone(), fresh.clone());
        let credentials = FakeCredentialStore::with_session(stale);

        let session = load_live_session(&provider, &credentials).await;

        assert!(matches!(session, Ok(Some(ref value)) if value == &fresh));
        assert_eq!(credentials.load_session().await.ok().flatten(), Some(fresh));
    }

    #[tokio::test]
    async fn rejected_refresh_token_clears_session() {
        let user = identity("ada@orus.dev");
        let credentials =
            FakeCredentialStore::with_session(expired(session_for(&user, "token-1")));
        let provider = FakeAuthProvider::default();

        let session = load_live_session(&provider, &credentials).await;

        assert!(matches!(session, Ok(None)));
        assert_eq!(provider.call_count("refresh_session").await, 1);
        assert_eq!(credentials.load_session().await.ok().flatten(), None);
    }

    #[tokio::test]
    async fn refresh_outage_degrades_and_keeps_session() {
        let user = identity("ada@orus.dev");
        let stale = expired(session_for(&user, "token-1"));
        let credentials = FakeCredentialStore::with_session(stale.clone());

        let session = load_live_session(&FakeAuthProvider::down(), &credentials).await;

        assert!(
            matches!(session, Err(ref degraded) if degraded.source_name() == "auth_provider")
        );
        assert_eq!(credentials.load_session().await.ok().flatten(), Some(stale));
    }
}
