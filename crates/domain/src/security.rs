use std::fmt::{Display, Formatter};
use std::str::FromStr;

use orus_core::AppError;
use serde::{Deserialize, Serialize};

/// Permission names the portal itself checks before administrative actions.
///
/// Permission rows are matched by their `name` column, so these values must
/// exist in the `permissions` relation for the portal to be usable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Capability {
    /// Allows listing profiles and viewing user access.
    UsersRead,
    /// Allows editing profiles and changing assignments and direct grants.
    UsersManage,
    /// Allows listing roles and viewing role grants.
    RolesRead,
    /// Allows creating, editing and deleting roles.
    RolesManage,
    /// Allows listing the permission catalog.
    PermissionsRead,
    /// Allows adding permissions to the catalog.
    PermissionsManage,
    /// Allows reading audit log entries.
    AuditLogsRead,
}

impl Capability {
    /// Returns the permission name matched against permission rows.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UsersRead => "users.read",
            Self::UsersManage => "users.manage",
            Self::RolesRead => "roles.read",
            Self::RolesManage => "roles.manage",
            Self::PermissionsRead => "permissions.read",
            Self::PermissionsManage => "permissions.manage",
            Self::AuditLogsRead => "audit_logs.read",
        }
    }

    /// Returns all known capabilities.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[Capability] = &[
            Capability::UsersRead,
            Capability::UsersManage,
            Capability::RolesRead,
            Capability::RolesManage,
            Capability::PermissionsRead,
            Capability::PermissionsManage,
            Capability::AuditLogsRead,
        ];

        ALL
    }
}

impl Display for Capability {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for Capability {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|capability| capability.as_str() == value)
            .ok_or_else(|| AppError::Validation(format!("unknown capability '{value}'")))
    }
}

/// Stable audit actions written by directory mutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuditAction {
    /// A role was created.
    RoleCreated,
    /// A role name or description changed.
    RoleUpdated,
    /// A role was deleted.
    RoleDeleted,
    /// The permission links of a role were replaced.
    RolePermissionsReplaced,
    /// A role was assigned to a profile.
    RoleAssigned,
    /// A role was removed from a profile.
    RoleUnassigned,
    /// A permission was granted directly to a profile.
    PermissionGranted,
    /// A direct permission grant was removed.
    PermissionRevoked,
    /// A permission was added to the catalog.
    PermissionCreated,
    /// A profile was edited.
    ProfileUpdated,
}

impl AuditAction {
    /// Returns the stored action value.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RoleCreated => "role.created",
            Self::RoleUpdated => "role.updated",
            Self::RoleDeleted => "role.deleted",
            Self::RolePermissionsReplaced => "role.permissions_replaced",
            Self::RoleAssigned => "user.role_assigned",
            Self::RoleUnassigned => "user.role_unassigned",
            Self::PermissionGranted => "user.permission_granted",
            Self::PermissionRevoked => "user.permission_revoked",
            Self::PermissionCreated => "permission.created",
            Self::ProfileUpdated => "profile.updated",
        }
    }

    /// Returns the audited entity kind.
    #[must_use]
    pub fn entity(&self) -> &'static str {
        match self {
            Self::RoleCreated
            | Self::RoleUpdated
            | Self::RoleDeleted
            | Self::RolePermissionsReplaced => "role",
            Self::RoleAssigned
            | Self::RoleUnassigned
            | Self::PermissionGranted
            | Self::PermissionRevoked => "user",
            Self::PermissionCreated => "permission",
            Self::ProfileUpdated => "profile",
        }
    }
}
