use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use orus_application::ProfileRepository;
use orus_core::{AppError, AppResult};
use orus_domain::{Profile, ProfileUpdate, UserId};

use crate::postgres_rows::{PROFILE_COLUMNS, ProfileRow};

/// PostgreSQL-backed repository for the `profiles` relation.
#[derive(Clone)]
pub struct PostgresProfileRepository {
    pool: PgPool,
}

impl PostgresProfileRepository {
    /// Creates a repository with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileRepository for PostgresProfileRepository {
    async fn find_profile(&self, user_id: UserId) -> AppResult<Option<Profile>> {
        let row = sqlx::query_as::<_, ProfileRow>(&format!(
            "SELECT {PROFILE_COLUMNS} FROM profiles WHERE id = $1"
        ))
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to load profile: {error}")))?;

        Ok(row.map(Profile::from))
    }

    async fn list_profiles(&self) -> AppResult<Vec<Profile>> {
        let rows = sqlx::query_as::<_, ProfileRow>(&format!(
            "SELECT {PROFILE_COLUMNS} FROM profiles ORDER BY full_name NULLS LAST, email"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to list profiles: {error}")))?;

        Ok(rows.into_iter().map(Profile::from).collect())
    }

    async fn update_profile(&self, user_id: UserId, update: ProfileUpdate) -> AppResult<Profile> {
        let row = sqlx::query_as::<_, ProfileRow>(&format!(
            r#"
            UPDATE profiles
            SET full_name = $2,
                avatar_url = $3,
                phone = $4,
                department = $5,
                position = $6,
                role = COALESCE($7, role)
            WHERE id = $1
            RETURNING {PROFILE_COLUMNS}
            "#
        ))
        .bind(user_id.as_uuid())
        .bind(update.full_name)
        .bind(update.avatar_url)
        .bind(update.phone)
        .bind(update.department)
        .bind(update.position)
        .bind(update.role)
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to update profile: {error}")))?
        .ok_or_else(|| AppError::NotFound(format!("profile '{user_id}' does not exist")))?;

        Ok(row.into())
    }

    async fn record_sign_in(&self, user_id: UserId, signed_in_at: DateTime<Utc>) -> AppResult<()> {
        sqlx::query(
            r#"
            UPDATE profiles
            SET last_sign_in = $2
            WHERE id = $1
            "#,
        )
        .bind(user_id.as_uuid())
        .bind(signed_in_at)
        .execute(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to record sign-in: {error}")))?;

        Ok(())
    }
}
