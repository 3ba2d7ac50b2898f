use axum::Json;
use axum::extract::{Extension, Path, Query, State};
use orus_application::AuditLogQuery;
use orus_core::Identity;
use orus_domain::shell::AppModule;
use orus_domain::{Capability, EffectivePermissions, RoleId, UserId};
use serde::Deserialize;

use crate::dto::{
    AccessStateResponse, AuditLogEntryResponse, DashboardResponse, PermissionResponse,
    ProfileResponse, RoleDetailResponse, RoleSummaryResponse, UserAccessDetailResponse,
};
use crate::error::ApiResult;
use crate::state::AppState;

mod audit;
mod overview;
mod roles;
mod users;


pub use audit::audit_logs_page_handler;
pub use overview::{dashboard_handler, profile_page_handler};
pub use roles::{permissions_page_handler, role_detail_page_handler, roles_page_handler};
pub use users::{user_detail_page_handler, users_page_handler};
