use async_trait::async_trait;

use orus_core::AppResult;
use orus_domain::{
    Permission, PermissionId, Role, RoleId, RoleInput, RolePermission, UserId, UserRole,
};

/// Repository port for roles and their links.
#[async_trait]
pub trait RoleRepository: Send + Sync {
    /// Lists all roles ordered by name.
    async fn list_roles(&self) -> AppResult<Vec<Role>>;

    /// Lists every `role_permissions` link.
    async fn list_role_permission_links(&self) -> AppResult<Vec<RolePermission>>;

    /// Finds one role.
    async fn find_role(&self, role_id: RoleId) -> AppResult<Option<Role>>;

    /// Lists permissions linked to one role.
    async fn list_role_permissions(&self, role_id: RoleId) -> AppResult<Vec<Permission>>;

    /// Creates a role. Duplicate names are `AppError::Conflict`.
    async fn create_role(&self, input: &RoleInput) -> AppResult<Role>;

    /// Updates name and description of a role.
    async fn update_role(&self, role_id: RoleId, input: &RoleInput) -> AppResult<Role>;

    /// Deletes a role together with its links.
    async fn delete_role(&self, role_id: RoleId) -> AppResult<()>;

    /// Replaces the permission set of a role.
    async fn replace_role_permissions(
        &self,
        role_id: RoleId,
        permission_ids: &[PermissionId],
    ) -> AppResult<()>;

    /// Lists the roles assigned to a user.
    async fn list_roles_for_user(&self, user_id: UserId) -> AppResult<Vec<Role>>;

    /// Inserts a `user_roles` link; an existing link is kept.
    async fn assign_role(&self, link: UserRole) -> AppResult<()>;

    /// Deletes a `user_roles` link.
    async fn remove_role(&self, link: UserRole) -> AppResult<()>;
}
