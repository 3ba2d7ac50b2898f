use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Minimal authenticated-session record returned by the auth service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    id: Uuid,
    email: Option<String>,
}

impl Identity {
    /// Creates an identity from the auth service user id and email.
    #[must_use]
    pub fn new(id: Uuid, email: Option<String>) -> Self {
        Self { id, email }
    }

    /// Returns the opaque user id issued by the auth service.
    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Returns the email, if the auth service returned one.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }
}

/// Token pair issued by the auth service for one signed-in browser session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    /// Bearer token sent to the auth service.
    pub access_token: String,
    /// Token used to obtain a new access token.
    pub refresh_token: String,
    /// Access token expiry as a unix timestamp, when reported.
    pub expires_at: Option<i64>,
    /// Identity the tokens were issued for.
    pub identity: Identity,
}

impl AuthSession {
    /// Returns whether the access token is past its reported expiry.
    #[must_use]
    pub fn is_expired_at(&self, unix_now: i64) -> bool {
        self.expires_at
            .is_some_and(|expires_at| expires_at <= unix_now)
    }
}
