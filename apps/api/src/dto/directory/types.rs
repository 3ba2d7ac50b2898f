use orus_domain::{PermissionId, RoleId};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// API representation of a profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/profile-response.ts"
)]
pub struct ProfileResponse {
    pub id: String,
    pub display_name: String,
    pub full_name: Option<String>,
    pub avatar_url: Option<String>,
    pub role: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub department: Option<String>,
    pub position: Option<String>,
    pub last_sign_in: Option<String>,
}

/// Incoming payload for profile edits.
#[derive(Debug, Default, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/update-profile-request.ts"
)]
pub struct UpdateProfileRequest {
    pub full_name: Option<String>,
    pub avatar_url: Option<String>,
    pub phone: Option<String>,
    pub department: Option<String>,
    pub position: Option<String>,
    pub role: Option<String>,
}

/// API representation of a role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/role-response.ts"
)]
pub struct RoleResponse {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Role list row with its permission count.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/role-summary-response.ts"
)]
pub struct RoleSummaryResponse {
    pub role: RoleResponse,
    pub permission_count: usize,
}

/// Role detail page model.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/role-detail-response.ts"
)]
pub struct RoleDetailResponse {
    pub role: RoleResponse,
    pub permissions: Vec<PermissionResponse>,
    pub available_permissions: Vec<PermissionResponse>,
}

/// Incoming payload for role creation and edits.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/role-request.ts"
)]
pub struct RoleRequest {
    pub name: String,
    pub description: Option<String>,
}

/// Incoming payload replacing the permissions of a role.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/set-role-permissions-request.ts"
)]
pub struct SetRolePermissionsRequest {
    #[ts(type = "Array<string>")]
    pub permission_ids: Vec<PermissionId>,
}

/// API representation of a permission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/permission-response.ts"
)]
pub struct PermissionResponse {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub resource: String,
    pub action: String,
}

/// Incoming payload for permission creation.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/create-permission-request.ts"
)]
pub struct CreatePermissionRequest {
    pub name: String,
    pub description: Option<String>,
    pub resource: String,
    pub action: String,
}

/// Incoming payload for role assignment.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/assign-role-request.ts"
)]
pub struct AssignRoleRequest {
    #[ts(type = "string")]
    pub role_id: RoleId,
}

/// Incoming payload for a direct permission grant.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/grant-permission-request.ts"
)]
pub struct GrantPermissionRequest {
    #[ts(type = "string")]
    pub permission_id: PermissionId,
}

/// User detail page model.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/user-access-detail-response.ts"
)]
pub struct UserAccessDetailResponse {
    pub profile: ProfileResponse,
    pub roles: Vec<RoleResponse>,
    pub direct_permissions: Vec<PermissionResponse>,
    pub effective_permissions: Vec<PermissionResponse>,
    pub degraded_sources: Vec<String>,
}

/// API representation of an audit log entry.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/audit-log-entry-response.ts"
)]
pub struct AuditLogEntryResponse {
    pub id: String,
    pub actor_id: Option<String>,
    pub entity: String,
    pub entity_id: Option<String>,
    pub action: String,
    pub details: Option<String>,
    pub created_at: String,
}
