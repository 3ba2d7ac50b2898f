//! Row shapes shared by the Postgres directory repositories.

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use orus_core::AppError;
use orus_domain::{Permission, PermissionId, Profile, Role, RoleId, UserId};

pub(crate) const PROFILE_COLUMNS: &str =
    "id, full_name, avatar_url, role, email, phone, department, position, last_sign_in";

pub(crate) const ROLE_COLUMNS: &str = "id, name, description, created_at, updated_at";

pub(crate) const PERMISSION_COLUMNS: &str =
    "id, name, description, resource, action, created_at, updated_at";

#[derive(Debug, FromRow)]
pub(crate) struct ProfileRow {
    id: Uuid,
    full_name: Option<String>,
    avatar_url: Option<String>,
    role: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    department: Option<String>,
    position: Option<String>,
    last_sign_in: Option<DateTime<Utc>>,
}

impl From<ProfileRow> for Profile {
    fn from(row: ProfileRow) -> Self {
        Self {
            id: UserId::from_uuid(row.id),
            full_name: row.full_name,
            avatar_url: row.avatar_url,
            role: row.role,
            email: row.email,
            phone: row.phone,
            department: row.department,
            position: row.position,
            last_sign_in: row.last_sign_in,
        }
    }
}

#[derive(Debug, FromRow)]
pub(crate) struct RoleRow {
    id: Uuid,
    name: String,
    description: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<RoleRow> for Role {
    fn from(row: RoleRow) -> Self {
        Self {
            id: RoleId::from_uuid(row.id),
            name: row.name,
            description: row.description,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, FromRow)]
pub(crate) struct PermissionRow {
    id: Uuid,
    name: String,
    description: Option<String>,
    resource: String,
    action: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<PermissionRow> for Permission {
    fn from(row: PermissionRow) -> Self {
        Self {
            id: PermissionId::from_uuid(row.id),
            name: row.name,
            description: row.description,
            resource: row.resource,
            action: row.action,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Maps a unique violation to a conflict and everything else to an internal error.
pub(crate) fn map_unique_violation(
    error: sqlx::Error,
    conflict: String,
    context: &str,
) -> AppError {
    if let sqlx::Error::Database(database_error) = &error
        && database_error.code().as_deref() == Some("23505")
    {
        return AppError::Conflict(conflict);
    }

    AppError::Internal(format!("{context}: {error}"))
}
