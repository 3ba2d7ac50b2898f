use std::sync::Arc;

use chrono::Utc;
use tokio::sync::broadcast;

use orus_core::{Degradable, Degraded, Identity};
use orus_domain::{UserId, routes};

use crate::{AuthProvider, ProfileRepository};

mod callback;
mod events;
mod password;
mod sign_in;

#[cfg(test)]
mod tests;

pub use callback::CallbackOutcome;
pub use events::AuthStateChange;
pub use sign_in::{SignUpInput, SignUpOutcome};

const AUTH_EVENT_CAPACITY: usize = 64;

/// Application service driving sign-in, sign-up, recovery and sign-out.
#[derive(Clone)]
pub struct SessionService {
    auth_provider: Arc<dyn AuthProvider>,
    profile_repository: Arc<dyn ProfileRepository>,
    events: broadcast::Sender<AuthStateChange>,
    callback_url: String,
}

impl SessionService {
    /// Creates a session service.
    ///
    /// Email links point at the callback route under `frontend_url`.
    #[must_use]
    pub fn new(
        auth_provider: Arc<dyn AuthProvider>,
        profile_repository: Arc<dyn ProfileRepository>,
        frontend_url: &str,
    ) -> Self {
        let (events, _) = broadcast::channel(AUTH_EVENT_CAPACITY);
        Self {
            auth_provider,
            profile_repository,
            events,
            callback_url: format!(
                "{}{}",
                frontend_url.trim_end_matches('/'),
                routes::AUTH_CALLBACK
            ),
        }
    }

    /// Subscribes to auth state changes.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<AuthStateChange> {
        self.events.subscribe()
    }

    /// Returns the link target used in confirmation and recovery emails.
    #[must_use]
    pub fn callback_url(&self) -> &str {
        self.callback_url.as_str()
    }

    fn publish(&self, change: AuthStateChange) {
        if self.events.send(change).is_err() {
            tracing::debug!("no auth state subscribers");
        }
    }

    async fn record_last_sign_in(&self, identity: &Identity) -> Degradable<()> {
        self.profile_repository
            .record_sign_in(UserId::from(identity), Utc::now())
            .await
            .map_err(|error| Degraded::from_error("profiles", &error))
    }

    async fn signed_in(&self, identity: &Identity) {
        if let Err(degraded) = self.record_last_sign_in(identity).await {
            tracing::warn!(
                user_id = %identity.id(),
                source = degraded.source_name(),
                reason = degraded.reason(),
                "last sign-in update degraded"
            );
        }

        self.publish(AuthStateChange::SignedIn {
            user_id: identity.id(),
        });
    }
}
