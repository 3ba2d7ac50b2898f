use orus_application::{AuditLogEntry, RoleDetail, RoleSummary, UserAccessDetail};
use orus_domain::{Permission, Profile, ProfileUpdate, Role};

use super::types::{
    AuditLogEntryResponse, PermissionResponse, ProfileResponse, RoleDetailResponse,
    RoleResponse, RoleSummaryResponse, UpdateProfileRequest, UserAccessDetailResponse,
};

impl From<Profile> for ProfileResponse {
    fn from(value: Profile) -> Self {
        Self {
            id: value.id.to_string(),
            display_name: value.display_name().to_owned(),
            full_name: value.full_name,
            avatar_url: value.avatar_url,
            role: value.role,
            email: value.email,
            phone: value.phone,
            department: value.department,
            position: value.position,
            last_sign_in: value.last_sign_in.map(|value| value.to_rfc3339()),
        }
    }
}

impl From<UpdateProfileRequest> for ProfileUpdate {
    fn from(value: UpdateProfileRequest) -> Self {
        Self {
            full_name: value.full_name,
            avatar_url: value.avatar_url,
            phone: value.phone,
            department: value.department,
            position: value.position,
            role: value.role,
        }
    }
}

impl From<Role> for RoleResponse {
    fn from(value: Role) -> Self {
        Self {
            id: value.id.to_string(),
            name: value.name,
            description: value.description,
            created_at: value.created_at.to_rfc3339(),
            updated_at: value.updated_at.to_rfc3339(),
        }
    }
}

impl From<RoleSummary> for RoleSummaryResponse {
    fn from(value: RoleSummary) -> Self {
        Self {
            role: RoleResponse::from(value.role),
            permission_count: value.permission_count,
        }
    }
}

impl From<RoleDetail> for RoleDetailResponse {
    fn from(value: RoleDetail) -> Self {
        Self {
            role: RoleResponse::from(value.role),
            permissions: value
                .permissions
                .into_iter()
                .map(PermissionResponse::from)
                .collect(),
            available_permissions: value
                .available_permissions
                .into_iter()
                .map(PermissionResponse::from)
                .collect(),
        }
    }
}

impl From<Permission> for PermissionResponse {
    fn from(value: Permission) -> Self {
        Self {
            id: value.id.to_string(),
            name: value.name,
            description: value.description,
            resource: value.resource,
            action: value.action,
        }
    }
}

impl From<UserAccessDetail> for UserAccessDetailResponse {
    fn from(value: UserAccessDetail) -> Self {
        Self {
            profile: ProfileResponse::from(value.profile),
            roles: value.roles.into_iter().map(RoleResponse::from).collect(),
            direct_permissions: value
                .direct_permissions
                .into_iter()
                .map(PermissionResponse::from)
                .collect(),
            effective_permissions: value
                .effective_permissions
                .iter()
                .cloned()
                .map(PermissionResponse::from)
                .collect(),
            degraded_sources: value
                .degraded
                .iter()
                .map(|degraded| degraded.source_name().to_owned())
                .collect(),
        }
    }
}

impl From<AuditLogEntry> for AuditLogEntryResponse {
    fn from(value: AuditLogEntry) -> Self {
        Self {
            id: value.id.to_string(),
            actor_id: value.actor_id.map(|actor_id| actor_id.to_string()),
            entity: value.entity,
            entity_id: value.entity_id,
            action: value.action,
            details: value.details.map(|details| details.to_string()),
            created_at: value.created_at.to_rfc3339(),
        }
    }
}
