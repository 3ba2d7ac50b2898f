use uuid::Uuid;

/// Auth state transition published to subscribers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthStateChange {
    /// A session was established.
    SignedIn {
        /// Signed-in user.
        user_id: Uuid,
    },
    /// The local session was cleared.
    SignedOut {
        /// User of the cleared session, when one was stored.
        user_id: Option<Uuid>,
    },
    /// The user changed their password.
    UserUpdated {
        /// Updated user.
        user_id: Uuid,
    },
    /// A recovery email was requested.
    PasswordRecoveryRequested,
}

impl AuthStateChange {
    /// Returns a stable event name for logs.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SignedIn { .. } => "signed_in",
            Self::SignedOut { .. } => "signed_out",
            Self::UserUpdated { .. } => "user_updated",
            Self::PasswordRecoveryRequested => "password_recovery",
        }
    }
}
