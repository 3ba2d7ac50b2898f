use std::sync::Arc;

use orus_core::{AppError, AppResult, Degraded, Identity};
use orus_domain::{Capability, EffectivePermissions, Permission, UserId};

use crate::AuthorizationRepository;

/// Aggregated permission set of one user plus the branches that failed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PermissionResolution {
    /// Deduplicated role-derived and direct permissions.
    pub permissions: EffectivePermissions,
    /// Lookup branches that contributed nothing because they failed.
    pub degraded: Vec<Degraded>,
}

impl PermissionResolution {
    /// Returns whether any lookup branch failed.
    #[must_use]
    pub fn is_degraded(&self) -> bool {
        !self.degraded.is_empty()
    }
}

/// Application service aggregating and checking user permissions.
#[derive(Clone)]
pub struct AuthorizationService {
    repository: Arc<dyn AuthorizationRepository>,
}

impl AuthorizationService {
    /// Creates a new authorization service from a repository implementation.
    #[must_use]
    pub fn new(repository: Arc<dyn AuthorizationRepository>) -> Self {
        Self { repository }
    }

    /// Aggregates the effective permissions of a user.
    ///
    /// Role-derived permissions come first, direct grants second, and the
    /// first occurrence of each permission id wins. A failing branch
    /// contributes nothing and is reported in `degraded`.
    pub async fn permissions_for_user(&self, user_id: UserId) -> PermissionResolution {
        let (role_branch, direct_branch) = tokio::join!(
            self.repository.list_roles_with_permissions_for_user(user_id),
            self.repository.list_direct_permissions_for_user(user_id),
        );

        let mut degraded = Vec::new();

        let roles = match role_branch {
            Ok(roles) => roles,
            Err(error) => {
                degraded.push(Degraded::from_error("role_permissions", &error));
                Vec::new()
            }
        };

        let direct: Vec<Permission> = match direct_branch {
            Ok(direct) => direct,
            Err(error) => {
                degraded.push(Degraded::from_error("user_permissions", &error));
                Vec::new()
            }
        };

        for value in &degraded {
            tracing::warn!(
                user_id = %user_id,
                source = value.source_name(),
                reason = value.reason(),
                "permission lookup degraded"
            );
        }

        PermissionResolution {
            permissions: EffectivePermissions::from_sources(roles, direct),
            degraded,
        }
    }

    /// Ensures the identity holds a capability.
    ///
    /// A degraded lookup denies, even if the remaining branch grants.
    pub async fn require_capability(
        &self,
        identity: &Identity,
        capability: Capability,
    ) -> AppResult<()> {
        let user_id = UserId::from(identity);
        let resolution = self.permissions_for_user(user_id).await;

        if resolution.is_degraded() {
            return Err(AppError::Forbidden(format!(
                "permission '{capability}' could not be verified for user '{user_id}'"
            )));
        }

        if !resolution.permissions.contains_name(capability.as_str()) {
            return Err(AppError::Forbidden(format!(
                "user '{user_id}' is missing permission '{capability}'"
            )));
        }

        Ok(())
    }
}
