mod conversions;
mod types;

pub use types::{
    AssignRoleRequest, AuditLogEntryResponse, CreatePermissionRequest, GrantPermissionRequest,
    PermissionResponse, ProfileResponse, RoleDetailResponse, RoleRequest, RoleResponse,
    RoleSummaryResponse, SetRolePermissionsRequest, UpdateProfileRequest,
    UserAccessDetailResponse,
};
