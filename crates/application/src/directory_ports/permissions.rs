use async_trait::async_trait;

use orus_core::AppResult;
use orus_domain::{Permission, PermissionId, PermissionInput, UserPermission};

/// Repository port for permissions and direct grants.
#[async_trait]
pub trait PermissionRepository: Send + Sync {
    /// Lists all permissions ordered by resource, then action.
    async fn list_permissions(&self) -> AppResult<Vec<Permission>>;

    /// Finds one permission.
    async fn find_permission(&self, permission_id: PermissionId) -> AppResult<Option<Permission>>;

    /// Creates a permission. Duplicate names are `AppError::Conflict`.
    async fn create_permission(&self, input: &PermissionInput) -> AppResult<Permission>;

    /// Inserts a `user_permissions` link; an existing link is kept.
    async fn grant_to_user(&self, link: UserPermission) -> AppResult<()>;

    /// Deletes a `user_permissions` link.
    async fn revoke_from_user(&self, link: UserPermission) -> AppResult<()>;
}
