use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use orus_application::RoleRepository;
use orus_core::{AppError, AppResult};
use orus_domain::{
    Permission, PermissionId, Role, RoleId, RoleInput, RolePermission, UserId, UserRole,
};

use crate::postgres_rows::{PermissionRow, ROLE_COLUMNS, RoleRow, map_unique_violation};

/// PostgreSQL-backed repository for roles and their links.
#[derive(Clone)]
pub struct PostgresRoleRepository {
    pool: PgPool,
}

impl PostgresRoleRepository {
    /// Creates a repository with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct RolePermissionRow {
    role_id: Uuid,
    permission_id: Uuid,
}

#[async_trait]
impl RoleRepository for PostgresRoleRepository {
    async fn list_roles(&self) -> AppResult<Vec<Role>> {
        let rows = sqlx::query_as::<_, RoleRow>(&format!(
            "SELECT {ROLE_COLUMNS} FROM roles ORDER BY name"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to list roles: {error}")))?;

        Ok(rows.into_iter().map(Role::from).collect())
    }

    async fn list_role_permission_links(&self) -> AppResult<Vec<RolePermission>> {
        let rows = sqlx::query_as::<_, RolePermissionRow>(
            r#"
            SELECT role_id, permission_id
            FROM role_permissions
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|error| {
            AppError::Internal(format!("failed to list role permission links: {error}"))
        })?;

        Ok(rows
            .into_iter()
            .map(|row| RolePermission {
                role_id: RoleId::from_uuid(row.role_id),
                permission_id: PermissionId::from_uuid(row.permission_id),
            })
            .collect())
    }

    async fn find_role(&self, role_id: RoleId) -> AppResult<Option<Role>> {
        let row = sqlx::query_as::<_, RoleRow>(&format!(
            "SELECT {ROLE_COLUMNS} FROM roles WHERE id = $1"
        ))
        .bind(role_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to load role: {error}")))?;

        Ok(row.map(Role::from))
    }

    async fn list_role_permissions(&self, role_id: RoleId) -> AppResult<Vec<Permission>> {
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
            FROM role_permissions
            INNER JOIN permissions
                ON permissions.id = role_permissions.permission_id
            WHERE role_permissions.role_id = $1
            ORDER BY permissions.resource, permissions.action
            "#,
        )
        .bind(role_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|error| {
            AppError::Internal(format!("failed to list role permissions: {error}"))
        })?;

        Ok(rows.into_iter().map(Permission::from).collect())
    }

    async fn create_role(&self, input: &RoleInput) -> AppResult<Role> {
        let row = sqlx::query_as::<_, RoleRow>(&format!(
            r#"
            INSERT INTO roles (name, description)
            VALUES ($1, $2)
            RETURNING {ROLE_COLUMNS}
            "#
        ))
        .bind(input.name())
        .bind(input.description())
        .fetch_one(&self.pool)
        .await
        .map_err(|error| {
            map_unique_violation(
                error,
                format!("role '{}' already exists", input.name()),
                "failed to create role",
            )
        })?;

        Ok(row.into())
    }

    async fn update_role(&self, role_id: RoleId, input: &RoleInput) -> AppResult<Role> {
        let row = sqlx::query_as::<_, RoleRow>(&format!(
            r#"
            UPDATE roles
            SET name = $2,
                description = $3,
                updated_at = now()
            WHERE id = $1
            RETURNING {ROLE_COLUMNS}
            "#
        ))
        .bind(role_id.as_uuid())
        .bind(input.name())
        .bind(input.description())
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| {
            map_unique_violation(
                error,
                format!("role '{}' already exists", input.name()),
                "failed to update role",
            )
        })?
        .ok_or_else(|| AppError::NotFound(format!("role '{role_id}' does not exist")))?;

        Ok(row.into())
    }

    async fn delete_role(&self, role_id: RoleId) -> AppResult<()> {
        let mut transaction =
            self.pool.begin().await.map_err(|error| {
                AppError::Internal(format!("failed to begin transaction: {error}"))
            })?;

        for statement in [
            "DELETE FROM role_permissions WHERE role_id = $1",
            "DELETE FROM user_roles WHERE role_id = $1",
        ] {
            sqlx::query(statement)
                .bind(role_id.as_uuid())
                .execute(&mut *transaction)
                .await
                .map_err(|error| {
                    AppError::Internal(format!("failed to delete role links: {error}"))
                })?;
        }

        let deleted = sqlx::query("DELETE FROM roles WHERE id = $1")
            .bind(role_id.as_uuid())
            .execute(&mut *transaction)
            .await
            .map_err(|error| AppError::Internal(format!("failed to delete role: {error}")))?;

        if deleted.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "role '{role_id}' does not exist"
            )));
        }

        transaction.commit().await.map_err(|error| {
            AppError::Internal(format!("failed to commit transaction: {error}"))
        })?;

        Ok(())
    }

    async fn replace_role_permissions(
        &self,
        role_id: RoleId,
        permission_ids: &[PermissionId],
    ) -> AppResult<()> {
        let permission_ids: Vec<Uuid> = permission_ids.iter().map(PermissionId::as_uuid).collect();

        let mut transaction =
            self.pool.begin().await.map_err(|error| {
                AppError::Internal(format!("failed to begin transaction: {error}"))
            })?;

        sqlx::query("DELETE FROM role_permissions WHERE role_id = $1")
            .bind(role_id.as_uuid())
            .execute(&mut *transaction)
            .await
            .map_err(|error| {
                AppError::Internal(format!("failed to clear role permissions: {error}"))
            })?;

        sqlx::query(
            r#"
            INSERT INTO role_permissions (role_id, permission_id)
            SELECT $1, permission_id
            FROM UNNEST($2::UUID[]) AS permission_id
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(role_id.as_uuid())
        .bind(permission_ids)
        .execute(&mut *transaction)
        .await
        .map_err(|error| {
            AppError::Internal(format!("failed to persist role permissions: {error}"))
        })?;

        transaction.commit().await.map_err(|error| {
            AppError::Internal(format!("failed to commit transaction: {error}"))
        })?;

        Ok(())
    }

    async fn list_roles_for_user(&self, user_id: UserId) -> AppResult<Vec<Role>> {
        let rows = sqlx::query_as::<_, RoleRow>(
            r#"
            SELECT
                roles.id,
                roles.name,
                roles.description,
                roles.created_at,
                roles.updated_at
            FROM user_roles
            INNER JOIN roles
                ON roles.id = user_roles.role_id
            WHERE user_roles.user_id = $1
            ORDER BY roles.name
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to list user roles: {error}")))?;

        Ok(rows.into_iter().map(Role::from).collect())
    }

    async fn assign_role(&self, link: UserRole) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO user_roles (user_id, role_id)
            VALUES ($1, $2)
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(link.user_id.as_uuid())
        .bind(link.role_id.as_uuid())
        .execute(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to assign role: {error}")))?;

        Ok(())
    }

    async fn remove_role(&self, link: UserRole) -> AppResult<()> {
        sqlx::query(
            r#"
            DELETE FROM user_roles
            WHERE user_id = $1 AND role_id = $2
            "#,
        )
        .bind(link.user_id.as_uuid())
        .bind(link.role_id.as_uuid())
        .execute(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to remove role: {error}")))?;

        Ok(())
    }
}
