use std::sync::Arc;

use serde_json::Value;

use orus_core::{AppResult, Identity};
use orus_domain::{AuditAction, UserId};

use crate::{
    AuditLogRepository, AuthorizationRepository, AuthorizationService, NewAuditLogEntry,
    PermissionRepository, ProfileRepository, RoleRepository,
};

mod assignments;
mod audit;
mod permissions;
mod roles;
mod users;


pub use roles::{RoleDetail, RoleSummary};
pub use users::UserAccessDetail;

/// Maximum page size of audit log listings.
pub const AUDIT_LOG_PAGE_LIMIT: usize = 200;

/// Deepest offset an audit log listing may page to.
pub const AUDIT_LOG_MAX_OFFSET: usize = 5_000;

/// Application service for the administrative directory views and mutations.
///
/// Every operation checks a capability of the acting identity first. Every
/// mutation appends an audit log entry after it succeeds.
#[derive(Clone)]
pub struct DirectoryAdminService {
    authorization_service: AuthorizationService,
    profile_repository: Arc<dyn ProfileRepository>,
    role_repository: Arc<dyn RoleRepository>,
    permission_repository: Arc<dyn PermissionRepository>,
    authorization_repository: Arc<dyn AuthorizationRepository>,
    audit_log_repository: Arc<dyn AuditLogRepository>,
}

/// Repository handles used by [`DirectoryAdminService`].
#[derive(Clone)]
pub struct DirectoryRepositories {
    /// Profiles.
    pub profiles: Arc<dyn ProfileRepository>,
    /// Roles and role links.
    pub roles: Arc<dyn RoleRepository>,
    /// Permissions and direct grants.
    pub permissions: Arc<dyn PermissionRepository>,
    /// Per-user permission branches.
    pub authorization: Arc<dyn AuthorizationRepository>,
    /// Audit log.
    pub audit_logs: Arc<dyn AuditLogRepository>,
}

impl DirectoryAdminService {
    /// Creates a directory administration service.
    #[must_use]
    pub fn new(
        authorization_service: AuthorizationService,
        repositories: DirectoryRepositories,
    ) -> Self {
        Self {
            authorization_service,
            profile_repository: repositories.profiles,
            role_repository: repositories.roles,
            permission_repository: repositories.permissions,
            authorization_repository: repositories.authorization,
            audit_log_repository: repositories.audit_logs,
        }
    }

    async fn append_audit(
        &self,
        actor: &Identity,
        action: AuditAction,
        entity_id: String,
        details: Option<Value>,
    ) -> AppResult<()> {
        self.audit_log_repository
            .append_entry(NewAuditLogEntry {
                actor_id: UserId::from(actor),
                action,
                entity_id,
                details,
            })
            .await
    }
}
