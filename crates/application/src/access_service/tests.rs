use std::sync::Arc;

use orus_core::{AppError, Identity};
use orus_domain::{Capability, ClientPermission, Profile, UserId};

use crate::test_support::{
    FakeAuthProvider, FakeCredentialStore, FakeDirectory, identity, permission, session_for,
};
use crate::{AuthorizationService, CredentialStore};

use super::{AccessService, AccessState, GuardRedirect};

fn service(auth_provider: FakeAuthProvider, directory: Arc<FakeDirectory>) -> AccessService {
    AccessService::new(
        Arc::new(auth_provider),
        directory.clone(),
        AuthorizationService::new(directory),
    )
}

fn signed_in(email: &str) -> (Identity, FakeAuthProvider, FakeCredentialStore) {
    let user = identity(email);
    let provider = FakeAuthProvider::with_user("token-1", &user);
    let credentials = FakeCredentialStore::with_session(session_for(&user, "token-1"));
    (user, provider, credentials)
}

#[tokio::test]
async fn no_stored_session_skips_auth_service() {
    let provider = Arc::new(FakeAuthProvider::default());
    let directory = Arc::new(FakeDirectory::default());
    let service = AccessService::new(
        provider.clone(),
        directory.clone(),
        AuthorizationService::new(directory),
    );

    let identity = service.get_identity(&FakeCredentialStore::default()).await;

    assert!(identity.is_none());
    assert_eq!(provider.call_count("get_user").await, 0);
}

#[tokio::test]
async fn valid_session_resolves_identity() {
    let (user, provider, credentials) = signed_in("ada@orus.dev");
    let service = service(provider, Arc::new(FakeDirectory::default()));

    let resolved = service.get_identity(&credentials).await;

    assert_eq!(resolved, Some(user));
}

#[tokio::test]
async fn rejected_token_is_absence_not_degradation() {
    let user = identity("ada@orus.dev");
    let credentials = FakeCredentialStore::with_session(session_for(&user, "stale-token"));
    let service = service(FakeAuthProvider::default(), Arc::new(FakeDirectory::default()));

    let resolved = service.resolve_identity(&credentials).await;

    assert!(matches!(resolved, Ok(None)));
}

#[tokio::test]
async fn auth_service_failure_degrades_to_none() {
    let user = identity("ada@orus.dev");
    let credentials = FakeCredentialStore::with_session(session_for(&user, "token-1"));
    let service = service(FakeAuthProvider::down(), Arc::new(FakeDirectory::default()));

    let resolved = service.resolve_identity(&credentials).await;
    assert!(
        matches!(resolved, Err(ref degraded) if degraded.source_name() == "auth_provider")
    );
    assert!(service.get_identity(&credentials).await.is_none());
}

#[tokio::test]
async fn credential_store_failure_degrades_to_none() {
    let service = service(FakeAuthProvider::default(), Arc::new(FakeDirectory::default()));
    let credentials = FakeCredentialStore::failing();

    let resolved = service.resolve_identity(&credentials).await;
    assert!(
        matches!(resolved, Err(ref degraded) if degraded.source_name() == "credential_store")
    );
    assert!(service.get_identity(&credentials).await.is_none());
}

#[tokio::test]
async fn identity_is_read_afresh_on_every_call() {
    let (user, provider, credentials) = signed_in("ada@orus.dev");
    let service = service(provider, Arc::new(FakeDirectory::default()));

    assert_eq!(service.get_identity(&credentials).await, Some(user));
    assert!(credentials.clear_session().await.is_ok());
    assert!(service.get_identity(&credentials).await.is_none());
}

#[tokio::test]
async fn expired_stored_session_is_not_returned() {
    let user = identity("ada@orus.dev");
    let mut session = session_for(&user, "token-1");
    session.expires_at = Some(1);
    let credentials = FakeCredentialStore::with_session(session);
    let service = service(FakeAuthProvider::default(), Arc::new(FakeDirectory::default()));

    assert!(service.get_session(&credentials).await.is_none());
}

#[tokio::test]
async fn expired_session_is_refreshed_before_resolving_identity() {
    let user = identity("ada@orus.dev");
    let mut stale = session_for(&user, "token-1");
    stale.expires_at = Some(1);
    let mut provider = FakeAuthProvider::with_user("token-2", &user);
    provider
        .sessions_by_refresh_token
        .insert(stale.refresh_token.clone(), session_for(&user, "token-2"));
    let credentials = FakeCredentialStore::with_session(stale);
    let service = service(provider, Arc::new(FakeDirectory::default()));

    assert_eq!(service.get_identity(&credentials).await, Some(user));
    let stored = credentials.load_session().await.ok().flatten();
    assert_eq!(
        stored.map(|session| session.access_token),
        Some("token-2".to_owned())
    );
}

#[tokio::test]
async fn profile_is_not_queried_without_identity() {
    let directory = Arc::new(FakeDirectory::default());
    let service = service(FakeAuthProvider::default(), directory.clone());

    let profile = service.get_profile(&FakeCredentialStore::default()).await;

    assert!(profile.is_none());
    assert_eq!(*directory.profile_queries.lock().await, 0);
}

#[tokio::test]
async fn profile_matching_identity_is_returned() {
    let (user, provider, credentials) = signed_in("ada@orus.dev");
    let directory = Arc::new(FakeDirectory::default());
    let mut stored = Profile::new(UserId::from(&user));
    stored.full_name = Some("Ada Lovelace".to_owned());
    directory.add_profile(stored.clone()).await;
    let service = service(provider, directory.clone());

    let profile = service.get_profile(&credentials).await;

    assert_eq!(profile, Some(stored));
    assert_eq!(*directory.profile_queries.lock().await, 1);
}

#[tokio::test]
async fn orphaned_identity_renders_signed_out() {
    let (user, provider, credentials) = signed_in("ada@orus.dev");
    let service = service(provider, Arc::new(FakeDirectory::default()));

    let state = service.access_state(&credentials).await;

    assert_eq!(state, AccessState::AuthenticatedNoProfile(user));
    assert!(!state.is_signed_in_for_ui());
    assert!(state.identity().is_some());
}

#[tokio::test]
async fn profile_query_failure_degrades_to_none() {
    let (user, provider, credentials) = signed_in("ada@orus.dev");
    let directory = Arc::new(FakeDirectory {
        fail_profiles: true,
        ..FakeDirectory::default()
    });
    let service = service(provider, directory);

    assert!(service.resolve_profile(&user).await.is_err());
    assert!(service.get_profile(&credentials).await.is_none());
}

#[tokio::test]
async fn permissions_are_empty_without_session() {
    let service = service(FakeAuthProvider::default(), Arc::new(FakeDirectory::default()));
    let credentials = FakeCredentialStore::default();

    assert!(service.get_permissions(&credentials).await.is_empty());
    assert!(!service.has_permission(&credentials, "users.read").await);
}

#[tokio::test]
async fn has_permission_matches_direct_grant_by_name() {
    let (user, provider, credentials) = signed_in("ada@orus.dev");
    let directory = Arc::new(FakeDirectory::default());
    let grant = permission("audit_logs.read");
    directory.add_permission(grant.clone()).await;
    directory.link_permission(UserId::from(&user), grant.id).await;
    let service = service(provider, directory);

    assert!(service.has_permission(&credentials, "audit_logs.read").await);
    assert!(!service.has_permission(&credentials, "users.manage").await);
}

#[tokio::test]
async fn client_permission_resolves_from_aggregated_set() {
    let (user, provider, credentials) = signed_in("ada@orus.dev");
    let directory = Arc::new(FakeDirectory::default());
    directory
        .grant_via_role(UserId::from(&user), &["roles.read"])
        .await;
    let service = service(provider, directory);

    let granted = service.check_client_permission(&credentials, "roles.read").await;
    let denied = service
        .check_client_permission(&credentials, "roles.manage")
        .await;

    assert_eq!(granted, ClientPermission::Resolved { granted: true });
    assert!(!denied.has_permission());
    assert!(!denied.is_loading());
}

#[tokio::test]
async fn require_capability_uses_aggregated_set() {
    let (user, provider, _credentials) = signed_in("ada@orus.dev");
    let service = service(provider, Arc::new(FakeDirectory::default()));

    let result = service
        .require_capability(&user, Capability::AuditLogsRead)
        .await;

    assert!(matches!(result, Err(AppError::Forbidden(_))));
}

#[tokio::test]
async fn require_auth_redirects_to_login_without_session() {
    let service = service(FakeAuthProvider::default(), Arc::new(FakeDirectory::default()));

    let result = service.require_auth(&FakeCredentialStore::default()).await;

    assert_eq!(result, Err(GuardRedirect::LOGIN));
    assert_eq!(GuardRedirect::LOGIN.location(), "/auth/login");
}

#[tokio::test]
async fn require_auth_returns_identity_unchanged() {
    let (user, provider, credentials) = signed_in("ada@orus.dev");
    let service = service(provider, Arc::new(FakeDirectory::default()));

    assert_eq!(service.require_auth(&credentials).await, Ok(user));
}

#[tokio::test]
async fn require_guest_redirects_signed_in_user_to_dashboard() {
    let (_user, provider, credentials) = signed_in("ada@orus.dev");
    let service = service(provider, Arc::new(FakeDirectory::default()));

    let result = service.require_guest(&credentials).await;

    assert_eq!(result, Err(GuardRedirect::DASHBOARD));
    assert_eq!(GuardRedirect::DASHBOARD.location(), "/dashboard");
}

#[tokio::test]
async fn require_guest_allows_anonymous_request() {
    let service = service(FakeAuthProvider::default(), Arc::new(FakeDirectory::default()));

    assert_eq!(
        service.require_guest(&FakeCredentialStore::default()).await,
        Ok(())
    );
}

#[tokio::test]
async fn access_state_for_known_identity_loads_profile() {
    let user = identity("ada@orus.dev");
    let directory = Arc::new(FakeDirectory::default());
    let stored = Profile::new(UserId::from(&user));
    directory.add_profile(stored.clone()).await;
    let service = service(FakeAuthProvider::default(), directory);

    let state = service.access_state_for(user.clone()).await;

    assert_eq!(
        state,
        AccessState::AuthenticatedWithProfile {
            identity: user,
            profile: stored,
        }
    );
    assert!(state.is_signed_in_for_ui());
}
