use orus_core::Identity;
use orus_domain::routes;

use crate::CredentialStore;

use super::AccessService;

/// Guard outcome that ends the request with a redirect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuardRedirect {
    location: &'static str,
}

impl GuardRedirect {
    /// Redirect to the login page.
    pub const LOGIN: Self = Self {
        location: routes::LOGIN,
    };

    /// Redirect to the dashboard.
    pub const DASHBOARD: Self = Self {
        location: routes::DASHBOARD,
    };

    /// Returns the redirect target.
    #[must_use]
    pub fn location(&self) -> &'static str {
        self.location
    }
}

impl AccessService {
    /// Requires a signed-in identity; otherwise redirects to the login page.
    pub async fn require_auth(
        &self,
        credentials: &dyn CredentialStore,
    ) -> Result<Identity, GuardRedirect> {
        self.get_identity(credentials)
            .await
            .ok_or(GuardRedirect::LOGIN)
    }

    /// Requires no signed-in identity; otherwise redirects to the dashboard.
    pub async fn require_guest(
        &self,
        credentials: &dyn CredentialStore,
    ) -> Result<(), GuardRedirect> {
        match self.get_identity(credentials).await {
            Some(_) => Err(GuardRedirect::DASHBOARD),
            None => Ok(()),
        }
    }
}
