//! Domain entities and invariants.

#![forbid(unsafe_code)]

mod client_permission;
mod directory;
mod effective_permissions;
mod ids;
pub mod routes;
mod security;
pub mod shell;
mod user;

pub use client_permission::ClientPermission;
pub use directory::{
    Permission, PermissionInput, Profile, ProfileUpdate, Role, RoleInput, RolePermission,
    RoleWithPermissions, UserPermission, UserRole,
};
pub use effective_permissions::EffectivePermissions;
pub use ids::{AuditLogId, PermissionId, RoleId, UserId};
pub use security::{AuditAction, Capability};
pub use user::{EmailAddress, PASSWORD_MAX_LENGTH, PASSWORD_MIN_LENGTH, validate_new_password};
