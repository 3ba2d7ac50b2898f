use async_trait::async_trait;

use orus_core::AppResult;
use orus_domain::{Permission, RoleWithPermissions, UserId};

/// Repository port for the two permission branches of one user.
#[async_trait]
pub trait AuthorizationRepository: Send + Sync {
    /// Lists the user's roles, each expanded through `role_permissions`.
    async fn list_roles_with_permissions_for_user(
        &self,
        user_id: UserId,
    ) -> AppResult<Vec<RoleWithPermissions>>;

    /// Lists permissions granted directly through `user_permissions`.
    async fn list_direct_permissions_for_user(
        &self,
        user_id: UserId,
    ) -> AppResult<Vec<Permission>>;
}
