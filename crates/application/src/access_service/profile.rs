use orus_core::{Degradable, Degraded, Identity};
use orus_domain::{Profile, UserId};

use crate::CredentialStore;

use super::AccessService;

/// What the current request knows about its user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessState {
    /// No identity.
    Unauthenticated,
    /// Identity without a profile row.
    AuthenticatedNoProfile(Identity),
    /// Identity and its profile row.
    AuthenticatedWithProfile {
        /// Signed-in identity.
        identity: Identity,
        /// Matching profile.
        profile: Profile,
    },
}

impl AccessState {
    /// Returns the identity, when one is signed in.
    #[must_use]
    pub fn identity(&self) -> Option<&Identity> {
        match self {
            Self::Unauthenticated => None,
            Self::AuthenticatedNoProfile(identity)
            | Self::AuthenticatedWithProfile { identity, .. } => Some(identity),
        }
    }

    /// Returns the profile, when one exists.
    #[must_use]
    pub fn profile(&self) -> Option<&Profile> {
        match self {
            Self::AuthenticatedWithProfile { profile, .. } => Some(profile),
            _ => None,
        }
    }

    /// Returns whether UI chrome should render as signed in.
    ///
    /// An identity without a profile renders as signed out.
    #[must_use]
    pub fn is_signed_in_for_ui(&self) -> bool {
        matches!(self, Self::AuthenticatedWithProfile { .. })
    }
}

impl AccessService {
    /// Loads the profile of an identity, distinguishing absence from failure.
    pub async fn resolve_profile(&self, identity: &Identity) -> Degradable<Option<Profile>> {
        self.profile_repository
            .find_profile(UserId::from(identity))
            .await
            .map_err(|error| Degraded::from_error("profiles", &error))
    }

    /// Returns the profile of the signed-in user, or `None`.
    pub async fn get_profile(&self, credentials: &dyn CredentialStore) -> Option<Profile> {
        let identity = self.get_identity(credentials).await?;
        self.profile_or_none(&identity).await
    }

    /// Resolves identity and profile together.
    pub async fn access_state(&self, credentials: &dyn CredentialStore) -> AccessState {
        match self.get_identity(credentials).await {
            Some(identity) => self.access_state_for(identity).await,
            None => AccessState::Unauthenticated,
        }
    }

    /// Loads the profile for an already resolved identity.
    pub async fn access_state_for(&self, identity: Identity) -> AccessState {
        match self.profile_or_none(&identity).await {
            Some(profile) => AccessState::AuthenticatedWithProfile { identity, profile },
            None => AccessState::AuthenticatedNoProfile(identity),
        }
    }

    async fn profile_or_none(&self, identity: &Identity) -> Option<Profile> {
        match self.resolve_profile(identity).await {
            Ok(profile) => profile,
            Err(degraded) => {
                tracing::warn!(
                    user_id = %identity.id(),
                    source = degraded.source_name(),
                    reason = degraded.reason(),
                    "profile lookup degraded"
                );
                None
            }
        }
    }
}
