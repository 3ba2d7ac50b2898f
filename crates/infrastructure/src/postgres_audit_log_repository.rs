use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use orus_application::{
    AUDIT_LOG_MAX_OFFSET, AUDIT_LOG_PAGE_LIMIT, AuditLogEntry, AuditLogQuery, AuditLogRepository,
    NewAuditLogEntry,
};
use orus_core::{AppError, AppResult};
use orus_domain::{AuditLogId, UserId};

/// PostgreSQL-backed repository for the `audit_logs` relation.
#[derive(Clone)]
pub struct PostgresAuditLogRepository {
    pool: PgPool,
}

impl PostgresAuditLogRepository {
    /// Creates a repository with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct AuditLogRow {
    id: Uuid,
    actor_id: Option<Uuid>,
    entity: String,
    entity_id: Option<String>,
    action: String,
    details: Option<Value>,
    created_at: DateTime<Utc>,
}

#[async_trait]
impl AuditLogRepository for PostgresAuditLogRepository {
    async fn append_entry(&self, entry: NewAuditLogEntry) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO audit_logs (actor_id, entity, entity_id, action, details)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(entry.actor_id.as_uuid())
        .bind(entry.action.entity())
        .bind(entry.entity_id)
        .bind(entry.action.as_str())
        .bind(entry.details)
        .execute(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to append audit entry: {error}")))?;

        Ok(())
    }

    async fn list_entries(&self, query: AuditLogQuery) -> AppResult<Vec<AuditLogEntry>> {
        let capped_limit = query.limit.clamp(1, AUDIT_LOG_PAGE_LIMIT) as i64;
        let capped_offset = query.offset.min(AUDIT_LOG_MAX_OFFSET) as i64;
        let rows = sqlx::query_as::<_, AuditLogRow>(
            r#"
            SELECT id, actor_id, entity, entity_id, action, details, created_at
            FROM audit_logs
            WHERE ($1::TEXT IS NULL OR action = $1)
                AND ($2::TEXT IS NULL OR entity = $2)
            ORDER BY created_at DESC
            LIMIT $3
            OFFSET $4
            "#,
        )
        .bind(query.action)
        .bind(query.entity)
        .bind(capped_limit)
        .bind(capped_offset)
        .fetch_all(&self.pool)
        .await
        .map_err(|error| {
            AppError::Internal(format!("failed to list audit log entries: {error}"))
        })?;

        Ok(rows
            .into_iter()
            .map(|row| AuditLogEntry {
                id: AuditLogId::from_uuid(row.id),
                actor_id: row.actor_id.map(UserId::from_uuid),
                entity: row.entity,
                entity_id: row.entity_id,
                action: row.action,
                details: row.details,
                created_at: row.created_at,
            })
            .collect())
    }
}
