use std::collections::HashMap;
use std::sync::Arc;

use orus_core::AppError;
use orus_domain::UserId;

use crate::CredentialStore;
use crate::pkce::code_challenge_for;
use crate::test_support::{
    FakeAuthProvider, FakeCredentialStore, FakeDirectory, identity, session_for,
};

use super::{AuthStateChange, CallbackOutcome, SessionService, SignUpInput, SignUpOutcome};

fn service(provider: Arc<FakeAuthProvider>, directory: Arc<FakeDirectory>) -> SessionService {
    SessionService::new(provider, directory, "http://localhost:3000/")
}

fn sign_up_input(password_confirmation: &str) -> SignUpInput {
    SignUpInput {
        email: "new.user@orus.dev".to_owned(),
        password: "correct horse battery".to_owned(),
        password_confirmation: password_confirmation.to_owned(),
        full_name: Some("  New User ".to_owned()),
    }
}

#[tokio::test]
async fn callback_url_is_built_from_frontend_url() {
    let service = service(
        Arc::new(FakeAuthProvider::default()),
        Arc::new(FakeDirectory::default()),
    );

    assert_eq!(service.callback_url(), "http://localhost:3000/auth/callback");
}

#[tokio::test]
async fn sign_in_stores_session_records_last_sign_in_and_publishes() {
    let user = identity("ada@orus.dev");
    let provider = Arc::new(FakeAuthProvider {
        sessions_by_credentials: HashMap::from([(
            ("ada@orus.dev".to_owned(), "secret-password".to_owned()),
            session_for(&user, "token-1"),
        )]),
        ..FakeAuthProvider::default()
    });
    let directory = Arc::new(FakeDirectory::default());
    let service = service(provider, directory.clone());
    let mut events = service.subscribe();
    let credentials = FakeCredentialStore::default();

    let result = service
        .sign_in(&credentials, " Ada@Orus.dev ", "secret-password")
        .await;

    assert_eq!(result.ok(), Some(user.clone()));
    assert!(credentials.session.lock().await.is_some());
    assert_eq!(
        directory
            .sign_ins
            .lock()
            .await
            .first()
            .map(|(user_id, _)| *user_id),
        Some(UserId::from(&user))
    );
    assert_eq!(
        events.try_recv().ok(),
        Some(AuthStateChange::SignedIn { user_id: user.id() })
    );
}

#[tokio::test]
async fn sign_in_with_wrong_password_is_unauthorized() {
    let service = service(
        Arc::new(FakeAuthProvider::default()),
        Arc::new(FakeDirectory::default()),
    );
    let credentials = FakeCredentialStore::default();

    let result = service
        .sign_in(&credentials, "ada@orus.dev", "wrong-password")
        .await;

    assert!(matches!(result, Err(AppError::Unauthorized(_))));
    assert!(credentials.session.lock().await.is_none());
}

#[tokio::test]
async fn sign_in_rejects_malformed_email_before_calling_auth_service() {
    let provider = Arc::new(FakeAuthProvider::default());
    let service = service(provider.clone(), Arc::new(FakeDirectory::default()));

    let result = service
        .sign_in(&FakeCredentialStore::default(), "not-an-email", "secret")
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));
    assert_eq!(provider.call_count("sign_in_with_password").await, 0);
}

#[tokio::test]
async fn sign_in_survives_last_sign_in_failure() {
    let user = identity("ada@orus.dev");
    let provider = Arc::new(FakeAuthProvider {
        sessions_by_credentials: HashMap::from([(
            ("ada@orus.dev".to_owned(), "secret-password".to_owned()),
            session_for(&user, "token-1"),
        )]),
        ..FakeAuthProvider::default()
    });
    let directory = Arc::new(FakeDirectory {
        fail_profiles: true,
        ..FakeDirectory::default()
    });
    let service = service(provider, directory);

    let result = service
        .sign_in(&FakeCredentialStore::default(), "ada@orus.dev", "secret-password")
        .await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn sign_up_sends_challenge_and_keeps_verifier_until_confirmation() {
    let provider = Arc::new(FakeAuthProvider::default());
    let service = service(provider.clone(), Arc::new(FakeDirectory::default()));
    let credentials = FakeCredentialStore::default();

    let outcome = service
        .sign_up(&credentials, sign_up_input("correct horse battery"))
        .await;

    assert_eq!(outcome.ok(), Some(SignUpOutcome::ConfirmationPending));
    let verifier = credentials.code_verifier.lock().await.clone();
    let requests = provider.sign_up_requests.lock().await;
    let request = requests.first();
    assert_eq!(
        request.map(|value| value.code_challenge.clone()),
        verifier.as_deref().map(code_challenge_for)
    );
    assert_eq!(
        request.map(|value| value.email_redirect_to.as_str()),
        Some("http://localhost:3000/auth/callback")
    );
    assert_eq!(
        request.and_then(|value| value.full_name.as_deref()),
        Some("New User")
    );
}

#[tokio::test]
async fn sign_up_with_immediate_session_signs_in() {
    let user = identity("new.user@orus.dev");
    let provider = Arc::new(FakeAuthProvider {
        sign_up_session: Some(session_for(&user, "token-new")),
        ..FakeAuthProvider::default()
    });
    let service = service(provider, Arc::new(FakeDirectory::default()));
    let credentials = FakeCredentialStore::default();

    let outcome = service
        .sign_up(&credentials, sign_up_input("correct horse battery"))
        .await;

    assert_eq!(outcome.ok(), Some(SignUpOutcome::SignedIn(user)));
    assert!(credentials.session.lock().await.is_some());
    assert!(credentials.code_verifier.lock().await.is_none());
}

#[tokio::test]
async fn sign_up_rejects_mismatched_confirmation() {
    let provider = Arc::new(FakeAuthProvider::default());
    let service = service(provider.clone(), Arc::new(FakeDirectory::default()));

    let outcome = service
        .sign_up(&FakeCredentialStore::default(), sign_up_input("something else"))
        .await;

    assert!(matches!(outcome, Err(AppError::Validation(_))));
    assert_eq!(provider.call_count("sign_up").await, 0);
}

#[tokio::test]
async fn password_reset_links_to_callback_and_publishes() {
    let provider = Arc::new(FakeAuthProvider::default());
    let service = service(provider.clone(), Arc::new(FakeDirectory::default()));
    let mut events = service.subscribe();
    let credentials = FakeCredentialStore::default();

    let result = service
        .request_password_reset(&credentials, "ada@orus.dev")
        .await;

    assert!(result.is_ok());
    assert!(credentials.code_verifier.lock().await.is_some());
    assert_eq!(
        provider
            .recovery_requests
            .lock()
            .await
            .first()
            .map(|request| request.redirect_to.clone()),
        Some("http://localhost:3000/auth/callback".to_owned())
    );
    assert_eq!(
        events.try_recv().ok(),
        Some(AuthStateChange::PasswordRecoveryRequested)
    );
}

#[tokio::test]
async fn update_password_requires_stored_session() {
    let service = service(
        Arc::new(FakeAuthProvider::default()),
        Arc::new(FakeDirectory::default()),
    );

    let result = service
        .update_password(
            &FakeCredentialStore::default(),
            "correct horse battery",
            "correct horse battery",
        )
        .await;

    assert!(matches!(result, Err(AppError::Unauthorized(_))));
}

#[tokio::test]
async fn update_password_with_unrefreshable_session_is_unauthorized() {
    let user = identity("ada@orus.dev");
    let provider = Arc::new(FakeAuthProvider::with_user("token-1", &user));
    let service = service(provider.clone(), Arc::new(FakeDirectory::default()));
    let mut stale = session_for(&user, "token-1");
    stale.expires_at = Some(1);
    let credentials = FakeCredentialStore::with_session(stale);

    let result = service
        .update_password(&credentials, "correct horse battery", "correct horse battery")
        .await;

    assert!(matches!(result, Err(AppError::Unauthorized(_))));
    assert_eq!(provider.call_count("update_password").await, 0);
    assert_eq!(credentials.load_session().await.ok().flatten(), None);
}

#[tokio::test]
async fn update_password_publishes_user_updated() {
    let user = identity("ada@orus.dev");
    let provider = Arc::new(FakeAuthProvider::with_user("token-1", &user));
    let service = service(provider, Arc::new(FakeDirectory::default()));
    let mut events = service.subscribe();
    let credentials = FakeCredentialStore::with_session(session_for(&user, "token-1"));

    let result = service
        .update_password(&credentials, "correct horse battery", "correct horse battery")
        .await;

    assert!(result.is_ok());
    assert_eq!(
        events.try_recv().ok(),
        Some(AuthStateChange::UserUpdated { user_id: user.id() })
    );
}

#[tokio::test]
async fn callback_without_code_redirects_to_login() {
    let provider = Arc::new(FakeAuthProvider::default());
    let service = service(provider.clone(), Arc::new(FakeDirectory::default()));
    let credentials = FakeCredentialStore::default();

    for code in [None, Some(""), Some("   ")] {
        let outcome = service.complete_callback(&credentials, code).await;
        assert_eq!(outcome, CallbackOutcome::MissingCode);
        assert_eq!(outcome.redirect_target(), "/auth/login");
    }
    assert_eq!(provider.call_count("exchange_code_for_session").await, 0);
}

#[tokio::test]
async fn callback_with_valid_code_signs_in_and_redirects_home() {
    let user = identity("ada@orus.dev");
    let provider = Arc::new(FakeAuthProvider {
        sessions_by_code: HashMap::from([("code-1".to_owned(), session_for(&user, "token-1"))]),
        ..FakeAuthProvider::default()
    });
    let service = service(provider.clone(), Arc::new(FakeDirectory::default()));
    let mut events = service.subscribe();
    let credentials = FakeCredentialStore::default();
    assert!(
        credentials
            .store_code_verifier("verifier-1".to_owned())
            .await
            .is_ok()
    );

    let outcome = service.complete_callback(&credentials, Some("code-1")).await;

    assert_eq!(outcome, CallbackOutcome::SignedIn(user.clone()));
    assert_eq!(outcome.redirect_target(), "/");
    assert_eq!(
        provider.exchanged_verifiers.lock().await.as_slice(),
        ["verifier-1".to_owned()]
    );
    assert!(credentials.session.lock().await.is_some());
    assert_eq!(
        events.try_recv().ok(),
        Some(AuthStateChange::SignedIn { user_id: user.id() })
    );
}

#[tokio::test]
async fn callback_with_rejected_code_redirects_with_error() {
    let service = service(
        Arc::new(FakeAuthProvider::default()),
        Arc::new(FakeDirectory::default()),
    );
    let credentials = FakeCredentialStore::default();
    assert!(
        credentials
            .store_code_verifier("verifier-1".to_owned())
            .await
            .is_ok()
    );

    let outcome = service.complete_callback(&credentials, Some("bogus")).await;

    assert_eq!(outcome, CallbackOutcome::ExchangeFailed);
    assert_eq!(
        outcome.redirect_target(),
        "/auth/login?error=callback-failed"
    );
    assert!(credentials.session.lock().await.is_none());
}

#[tokio::test]
async fn callback_without_pending_verifier_fails_exchange() {
    let provider = Arc::new(FakeAuthProvider::default());
    let service = service(provider.clone(), Arc::new(FakeDirectory::default()));

    let outcome = service
        .complete_callback(&FakeCredentialStore::default(), Some("code-1"))
        .await;

    assert_eq!(outcome, CallbackOutcome::ExchangeFailed);
    assert_eq!(provider.call_count("exchange_code_for_session").await, 0);
}

#[tokio::test]
async fn sign_out_clears_session_even_when_remote_call_fails() {
    let user = identity("ada@orus.dev");
    let service = service(
        Arc::new(FakeAuthProvider::down()),
        Arc::new(FakeDirectory::default()),
    );
    let mut events = service.subscribe();
    let credentials = FakeCredentialStore::with_session(session_for(&user, "token-1"));

    let result = service.sign_out(&credentials).await;

    assert!(result.is_ok());
    assert!(credentials.session.lock().await.is_none());
    assert_eq!(
        events.try_recv().ok(),
        Some(AuthStateChange::SignedOut {
            user_id: Some(user.id())
        })
    );
}
