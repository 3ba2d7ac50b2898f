use serde_json::json;

use orus_core::{AppError, AppResult, Identity};
use orus_domain::{
    AuditAction, Capability, PermissionId, RoleId, UserId, UserPermission, UserRole,
};

use super::DirectoryAdminService;

// Link writes require a profile row for the target user.
impl DirectoryAdminService {
    /// Assigns a role to a user.
    pub async fn assign_role(
        &self,
        actor: &Identity,
        user_id: UserId,
        role_id: RoleId,
    ) -> AppResult<()> {
        self.authorization_service
            .require_capability(actor, Capability::UsersManage)
            .await?;

        self.existing_user(user_id).await?;
        let role = self.existing_role(role_id).await?;
        self.role_repository
            .assign_role(UserRole { user_id, role_id })
            .await?;

        self.append_audit(
            actor,
            AuditAction::RoleAssigned,
            user_id.to_string(),
            Some(json!({ "role_id": role_id.to_string(), "role_name": role.name })),
        )
        .await
    }

    /// Removes a role from a user.
    pub async fn unassign_role(
        &self,
        actor: &Identity,
        user_id: UserId,
        role_id: RoleId,
    ) -> AppResult<()> {
        self.authorization_service
            .require_capability(actor, Capability::UsersManage)
            .await?;

        self.existing_user(user_id).await?;
        self.role_repository
            .remove_role(UserRole { user_id, role_id })
            .await?;

        self.append_audit(
            actor,
            AuditAction::RoleUnassigned,
            user_id.to_string(),
            Some(json!({ "role_id": role_id.to_string() })),
        )
        .await
    }

    /// Grants a permission directly to a user.
    pub async fn grant_permission(
        &self,
        actor: &Identity,
        user_id: UserId,
        permission_id: PermissionId,
    ) -> AppResult<()> {
        self.authorization_service
            .require_capability(actor, Capability::UsersManage)
            .await?;

        self.existing_user(user_id).await?;
        let permission = self
            .permission_repository
            .find_permission(permission_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("permission '{permission_id}' does not exist"))
            })?;
        self.permission_repository
            .grant_to_user(UserPermission {
                user_id,
                permission_id,
            })
            .await?;

        self.append_audit(
            actor,
            AuditAction::PermissionGranted,
            user_id.to_string(),
            Some(json!({
                "permission_id": permission_id.to_string(),
                "permission_name": permission.name,
            })),
        )
        .await
    }

    /// Revokes a direct permission grant.
    pub async fn revoke_permission(
        &self,
        actor: &Identity,
        user_id: UserId,
        permission_id: PermissionId,
    ) -> AppResult<()> {
        self.authorization_service
            .require_capability(actor, Capability::UsersManage)
            .await?;

        self.existing_user(user_id).await?;
        self.permission_repository
            .revoke_from_user(UserPermission {
                user_id,
                permission_id,
            })
            .await?;

        self.append_audit(
            actor,
            AuditAction::PermissionRevoked,
            user_id.to_string(),
            Some(json!({ "permission_id": permission_id.to_string() })),
        )
        .await
    }
}
