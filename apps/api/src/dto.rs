mod auth;
mod common;
mod directory;
mod shell;

pub use auth::{
    AccessStateResponse, AuthActionResponse, AuthPageResponse, ForgotPasswordRequest,
    LoginRequest, RegisterRequest, UpdatePasswordRequest,
};
pub use common::{
    DashboardResponse, EffectivePermissionsResponse, HealthDependencyStatus, HealthResponse,
    PermissionCheckResponse,
};
pub use directory::{
    AssignRoleRequest, AuditLogEntryResponse, CreatePermissionRequest, GrantPermissionRequest,
    PermissionResponse, ProfileResponse, RoleDetailResponse, RoleRequest, RoleResponse,
    RoleSummaryResponse, SetRolePermissionsRequest, UpdateProfileRequest,
    UserAccessDetailResponse,
};
pub use shell::{ShellReduceRequest, ShellStateResponse};
