//! Application services and ports.

#![forbid(unsafe_code)]

mod access_service;
mod auth_ports;
mod authorization_service;
mod directory_admin_service;
mod directory_ports;
mod live_session;
mod session_service;

/// PKCE helpers for email-link flows.
pub mod pkce;

#[cfg(test)]
mod test_support;

pub use access_service::{AccessService, AccessState, GuardRedirect};
pub use auth_ports::{AuthProvider, CredentialStore, RecoveryRequest, SignUpRequest, SignUpResult};
pub use authorization_service::{AuthorizationService, PermissionResolution};
pub use directory_admin_service::{
    AUDIT_LOG_MAX_OFFSET, AUDIT_LOG_PAGE_LIMIT, DirectoryAdminService, DirectoryRepositories,
    RoleDetail, RoleSummary, UserAccessDetail,
};
pub use directory_ports::{
    AuditLogEntry, AuditLogQuery, AuditLogRepository, AuthorizationRepository, NewAuditLogEntry,
    PermissionRepository, ProfileRepository, RoleRepository,
};
pub use session_service::{
    AuthStateChange, CallbackOutcome, SessionService, SignUpInput, SignUpOutcome,
};
