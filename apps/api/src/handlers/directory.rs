use axum::Json;
use axum::extract::{Extension, Path, State};
use axum::http::StatusCode;
use orus_core::Identity;
use orus_domain::{PermissionId, PermissionInput, ProfileUpdate, RoleId, RoleInput, UserId};

use crate::dto::{
    AssignRoleRequest, CreatePermissionRequest, GrantPermissionRequest, PermissionResponse,
    ProfileResponse, RoleRequest, RoleResponse, SetRolePermissionsRequest, UpdateProfileRequest,
};
use crate::error::ApiResult;
use crate::state::AppState;

mod assignments;
mod permissions;
mod profiles;
mod roles;


pub use assignments::{
    assign_role_handler, grant_permission_handler, revoke_permission_handler,
    unassign_role_handler,
};
pub use permissions::create_permission_handler;
pub use profiles::{update_own_profile_handler, update_profile_handler};
pub use roles::{
    create_role_handler, delete_role_handler, set_role_permissions_handler, update_role_handler,
};
