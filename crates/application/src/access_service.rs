use std::sync::Arc;

use crate::{AuthProvider, AuthorizationService, ProfileRepository};

mod guards;
mod identity;
mod permissions;
mod profile;

#[cfg(test)]
mod tests;

pub use guards::GuardRedirect;
pub use profile::AccessState;

/// Per-request evaluation of who is signed in and what they may do.
///
/// Every call reads the request's credential store afresh. Nothing is cached
/// between calls, so two calls in one request may observe different state.
#[derive(Clone)]
pub struct AccessService {
    auth_provider: Arc<dyn AuthProvider>,
    profile_repository: Arc<dyn ProfileRepository>,
    authorization_service: AuthorizationService,
}

impl AccessService {
    /// Creates an access service.
    #[must_use]
    pub fn new(
        auth_provider: Arc<dyn AuthProvider>,
        profile_repository: Arc<dyn ProfileRepository>,
        authorization_service: AuthorizationService,
    ) -> Self {
        Self {
            auth_provider,
            profile_repository,
            authorization_service,
        }
    }
}
