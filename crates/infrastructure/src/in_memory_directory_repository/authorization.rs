use async_trait::async_trait;

use orus_application::{AuthorizationRepository, RoleRepository};
use orus_core::AppResult;
use orus_domain::{Permission, PermissionId, RoleWithPermissions, UserId};

use super::{InMemoryDirectoryRepository, InMemoryFailure};

#[async_trait]
impl AuthorizationRepository for InMemoryDirectoryRepository {
    async fn list_roles_with_permissions_for_user(
        &self,
        user_id: UserId,
    ) -> AppResult<Vec<RoleWithPermissions>> {
        self.check(InMemoryFailure::RoleBranch).await?;

        let roles = self.list_roles_for_user(user_id).await?;
        let mut expanded = Vec::with_capacity(roles.len());
        for role in roles {
            let permissions = self.list_role_permissions(role.id).await?;
            expanded.push(RoleWithPermissions { role, permissions });
        }
        Ok(expanded)
    }

    async fn list_direct_permissions_for_user(
        &self,
        user_id: UserId,
    ) -> AppResult<Vec<Permission>> {
        self.check(InMemoryFailure::DirectBranch).await?;

        let ids: Vec<PermissionId> = self
            .user_permissions
            .read()
            .await
            .iter()
            .filter(|link| link.user_id == user_id)
            .map(|link| link.permission_id)
            .collect();
        Ok(self.permissions_by_ids(ids).await)
    }
}
