use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use orus_application::AuthorizationRepository;
use orus_core::{AppError, AppResult};
use orus_domain::{Permission, PermissionId, Role, RoleId, RoleWithPermissions, UserId};

use crate::postgres_rows::PermissionRow;

/// PostgreSQL-backed repository for the two permission branches of a user.
#[derive(Clone)]
pub struct PostgresAuthorizationRepository {
    pool: PgPool,
}

impl PostgresAuthorizationRepository {
    /// Creates a repository with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct RoleGrantRow {
    role_id: Uuid,
    role_name: String,
    role_description: Option<String>,
    role_created_at: DateTime<Utc>,
    role_updated_at: DateTime<Utc>,
    permission_id: Option<Uuid>,
    permission_name: Option<String>,
    permission_description: Option<String>,
    permission_resource: Option<String>,
    permission_action: Option<String>,
    permission_created_at: Option<DateTime<Utc>>,
    permission_updated_at: Option<DateTime<Utc>>,
}

impl RoleGrantRow {
    fn permission(&self) -> Option<Permission> {
        Some(Permission {
            id: PermissionId::from_uuid(self.permission_id?),
            name: self.permission_name.clone()?,
            description: self.permission_description.clone(),
            resource: self.permission_resource.clone()?,
            action: self.permission_action.clone()?,
            created_at: self.permission_created_at?,
            updated_at: self.permission_updated_at?,
        })
    }
}

#[async_trait]
impl AuthorizationRepository for PostgresAuthorizationRepository {
    async fn list_roles_with_permissions_for_user(
        &self,
        user_id: UserId,
    ) -> AppResult<Vec<RoleWithPermissions>> {
        let rows = sqlx::query_as::<_, RoleGrantRow>(
            r#"
            SELECT
                roles.id AS role_id,
                roles.name AS role_name,
                roles.description AS role_description,
                roles.created_at AS role_created_at,
                roles.updated_at AS role_updated_at,
                permissions.id AS permission_id,
                permissions.name AS permission_name,
                permissions.description AS permission_description,
                permissions.resource AS permission_resource,
                permissions.action AS permission_action,
                permissions.created_at AS permission_created_at,
                permissions.updated_at AS permission_updated_at
            FROM user_roles
            INNER JOIN roles
                ON roles.id = user_roles.role_id
            LEFT JOIN role_permissions
                ON role_permissions.role_id = roles.id
            LEFT JOIN permissions
                ON permissions.id = role_permissions.permission_id
            WHERE user_roles.user_id = $1
            ORDER BY roles.name, permissions.name
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|error| {
            AppError::Internal(format!("failed to load role permissions: {error}"))
        })?;

        Ok(aggregate_role_grants(rows))
    }

    async fn list_direct_permissions_for_user(
        &self,
        user_id: UserId,
    ) -> AppResult<Vec<Permission>> {
        let rows = sqlx::query_as::<_, PermissionRow>(
            r#"
            SELECT
                permissions.id,
                permissions.name,
                permissions.description,
                permissions.resource,
                permissions.action,
                permissions.created_at,
                permissions.updated_at
            FROM user_permissions
            INNER JOIN permissions
                ON permissions.id = user_permissions.permission_id
            WHERE user_permissions.user_id = $1
            ORDER BY permissions.name
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|error| {
            AppError::Internal(format!("failed to load direct permissions: {error}"))
        })?;

        Ok(rows.into_iter().map(Permission::from).collect())
    }
}

/// Folds joined rows into one record per role, keeping row order.
fn aggregate_role_grants(rows: Vec<RoleGrantRow>) -> Vec<RoleWithPermissions> {
    let mut roles: Vec<RoleWithPermissions> = Vec::new();

    for row in rows {
        let permission = row.permission();
        let role_id = RoleId::from_uuid(row.role_id);

        let index = match roles.iter().position(|entry| entry.role.id == role_id) {
            Some(index) => index,
            None => {
                roles.push(RoleWithPermissions {
                    role: Role {
                        id: role_id,
                        name: row.role_name,
                        description: row.role_description,
                        created_at: row.role_created_at,
                        updated_at: row.role_updated_at,
                    },
                    permissions: Vec::new(),
                });
                roles.len() - 1
            }
        };

        if let Some(permission) = permission
            && let Some(entry) = roles.get_mut(index)
        {
            entry.permissions.push(permission);
        }
    }

    roles
}
