use serde_json::json;

use orus_core::{AppResult, Identity};
use orus_domain::{AuditAction, Capability, Permission, PermissionInput};

use super::DirectoryAdminService;

impl DirectoryAdminService {
    /// Lists all permissions.
    pub async fn list_permissions(&self, actor: &Identity) -> AppResult<Vec<Permission>> {
        self.authorization_service
            .require_capability(actor, Capability::PermissionsRead)
            .await?;

        self.permission_repository.list_permissions().await
    }

    /// Creates a permission.
    pub async fn create_permission(
        &self,
        actor: &Identity,
        input: PermissionInput,
    ) -> AppResult<Permission> {
        self.authorization_service
            .require_capability(actor, Capability::PermissionsManage)
            .await?;

        let permission = self.permission_repository.create_permission(&input).await?;

        self.append_audit(
            actor,
            AuditAction::PermissionCreated,
            permission.id.to_string(),
            Some(json!({
                "name": permission.name,
                "resource": permission.resource,
                "action": permission.action,
            })),
        )
        .await?;

        Ok(permission)
    }
}
