use async_trait::async_trait;
use sqlx::PgPool;

use orus_application::PermissionRepository;
use orus_core::{AppError, AppResult};
use orus_domain::{Permission, PermissionId, PermissionInput, UserPermission};

use crate::postgres_rows::{PERMISSION_COLUMNS, PermissionRow, map_unique_violation};

/// PostgreSQL-backed repository for permissions and direct grants.
#[derive(Clone)]
pub struct PostgresPermissionRepository {
    pool: PgPool,
}

impl PostgresPermissionRepository {
    /// Creates a repository with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PermissionRepository for PostgresPermissionRepository {
    async fn list_permissions(&self) -> AppResult<Vec<Permission>> {
        let rows = sqlx::query_as::<_, PermissionRow>(&format!(
            "SELECT {PERMISSION_COLUMNS} FROM permissions ORDER BY resource, action"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to list permissions: {error}")))?;

        Ok(rows.into_iter().map(Permission::from).collect())
    }

    async fn find_permission(&self, permission_id: PermissionId) -> AppResult<Option<Permission>> {
        let row = sqlx::query_as::<_, PermissionRow>(&format!(
            "SELECT {PERMISSION_COLUMNS} FROM permissions WHERE id = $1"
        ))
        .bind(permission_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to load permission: {error}")))?;

        Ok(row.map(Permission::from))
    }

    async fn create_permission(&self, input: &PermissionInput) -> AppResult<Permission> {
        let row = sqlx::query_as::<_, PermissionRow>(&format!(
            r#"
            INSERT INTO permissions (name, description, resource, action)
            VALUES ($1, $2, $3, $4)
            RETURNING {PERMISSION_COLUMNS}
            "#
        ))
        .bind(input.name())
        .bind(input.description())
        .bind(input.resource())
        .bind(input.action())
        .fetch_one(&self.pool)
        .await
        .map_err(|error| {
            map_unique_violation(
                error,
                format!("permission '{}' already exists", input.name()),
                "failed to create permission",
            )
        })?;

        Ok(row.into())
    }

    async fn grant_to_user(&self, link: UserPermission) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO user_permissions (user_id, permission_id)
            VALUES ($1, $2)
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(link.user_id.as_uuid())
        .bind(link.permission_id.as_uuid())
        .execute(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to grant permission: {error}")))?;

        Ok(())
    }

    async fn revoke_from_user(&self, link: UserPermission) -> AppResult<()> {
        sqlx::query(
            r#"
            DELETE FROM user_permissions
            WHERE user_id = $1 AND permission_id = $2
            "#,
        )
        .bind(link.user_id.as_uuid())
        .bind(link.permission_id.as_uuid())
        .execute(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to revoke permission: {error}")))?;

        Ok(())
    }
}
