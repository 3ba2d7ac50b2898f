mod audit;
mod authorization;
mod permissions;
mod profiles;
mod roles;

pub use audit::{AuditLogEntry, AuditLogQuery, AuditLogRepository, NewAuditLogEntry};
pub use authorization::AuthorizationRepository;
pub use permissions::PermissionRepository;
pub use profiles::ProfileRepository;
pub use roles::RoleRepository;
