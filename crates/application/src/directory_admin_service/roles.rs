use std::collections::{HashMap, HashSet};

use serde_json::json;

use orus_core::{AppError, AppResult, Identity};
use orus_domain::{AuditAction, Capability, Permission, PermissionId, Role, RoleId, RoleInput};

use super::DirectoryAdminService;

/// Role listing row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleSummary {
    /// The role row.
    pub role: Role,
    /// Number of linked permissions.
    pub permission_count: usize,
}

/// Role detail view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleDetail {
    /// The role row.
    pub role: Role,
    /// Permissions linked to the role.
    pub permissions: Vec<Permission>,
    /// Every permission that could be linked.
    pub available_permissions: Vec<Permission>,
}

impl DirectoryAdminService {
    /// Lists roles with their permission counts.
    ///
    /// Counts come from a separate query and are matched by role id; roles
    /// without links count zero.
    pub async fn list_roles(&self, actor: &Identity) -> AppResult<Vec<RoleSummary>> {
        self.authorization_service
            .require_capability(actor, Capability::RolesRead)
            .await?;

        let roles = self.role_repository.list_roles().await?;
        let links = self.role_repository.list_role_permission_links().await?;

        let mut counts: HashMap<RoleId, usize> = HashMap::new();
        for link in links {
            *counts.entry(link.role_id).or_default() += 1;
        }

        Ok(roles
            .into_iter()
            .map(|role| RoleSummary {
                permission_count: counts.get(&role.id).copied().unwrap_or_default(),
                role,
            })
            .collect())
    }

    /// Loads one role with linked and linkable permissions.
    pub async fn role_detail(&self, actor: &Identity, role_id: RoleId) -> AppResult<RoleDetail> {
        self.authorization_service
            .require_capability(actor, Capability::RolesRead)
            .await?;

        let role = self.existing_role(role_id).await?;
        let permissions = self.role_repository.list_role_permissions(role_id).await?;
        let available_permissions = self.permission_repository.list_permissions().await?;

        Ok(RoleDetail {
            role,
            permissions,
            available_permissions,
        })
    }

    /// Creates a role.
    pub async fn create_role(&self, actor: &Identity, input: RoleInput) -> AppResult<Role> {
        self.authorization_service
            .require_capability(actor, Capability::RolesManage)
            .await?;

        let role = self.role_repository.create_role(&input).await?;

        self.append_audit(
            actor,
            AuditAction::RoleCreated,
            role.id.to_string(),
            Some(json!({ "name": role.name })),
        )
        .await?;

        Ok(role)
    }

    /// Renames or re-describes a role.
    pub async fn update_role(
        &self,
        actor: &Identity,
        role_id: RoleId,
        input: RoleInput,
    ) -> AppResult<Role> {
        self.authorization_service
            .require_capability(actor, Capability::RolesManage)
            .await?;

        let role = self.role_repository.update_role(role_id, &input).await?;

        self.append_audit(
            actor,
            AuditAction::RoleUpdated,
            role.id.to_string(),
            Some(json!({ "name": role.name, "description": role.description })),
        )
        .await?;

        Ok(role)
    }

    /// Deletes a role and its links.
    pub async fn delete_role(&self, actor: &Identity, role_id: RoleId) -> AppResult<()> {
        self.authorization_service
            .require_capability(actor, Capability::RolesManage)
            .await?;

        let role = self.existing_role(role_id).await?;
        self.role_repository.delete_role(role_id).await?;

        self.append_audit(
            actor,
            AuditAction::RoleDeleted,
            role_id.to_string(),
            Some(json!({ "name": role.name })),
        )
        .await
    }

    /// Replaces the permissions linked to a role.
    pub async fn set_role_permissions(
        &self,
        actor: &Identity,
        role_id: RoleId,
        permission_ids: Vec<PermissionId>,
    ) -> AppResult<()> {
        self.authorization_service
            .require_capability(actor, Capability::RolesManage)
            .await?;

        self.existing_role(role_id).await?;

        let mut seen = HashSet::new();
        let permission_ids: Vec<PermissionId> = permission_ids
            .into_iter()
            .filter(|permission_id| seen.insert(*permission_id))
            .collect();

        self.role_repository
            .replace_role_permissions(role_id, &permission_ids)
            .await?;

        let linked: Vec<String> = permission_ids.iter().map(ToString::to_string).collect();
        self.append_audit(
            actor,
            AuditAction::RolePermissionsReplaced,
            role_id.to_string(),
            Some(json!({ "permission_ids": linked })),
        )
        .await
    }

    pub(super) async fn existing_role(&self, role_id: RoleId) -> AppResult<Role> {
        self.role_repository
            .find_role(role_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("role '{role_id}' does not exist")))
    }
}
