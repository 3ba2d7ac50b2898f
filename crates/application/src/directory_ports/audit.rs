use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;

use orus_core::AppResult;
use orus_domain::{AuditAction, AuditLogId, UserId};

/// Stored audit log row.
#[derive(Debug, Clone, PartialEq)]
pub struct AuditLogEntry {
    /// Entry identifier.
    pub id: AuditLogId,
    /// Acting user, absent for system writes.
    pub actor_id: Option<UserId>,
    /// Entity kind, for example `role`.
    pub entity: String,
    /// Affected entity identifier.
    pub entity_id: Option<String>,
    /// Stable action identifier.
    pub action: String,
    /// Structured detail payload.
    pub details: Option<Value>,
    /// Write time.
    pub created_at: DateTime<Utc>,
}

/// Audit entry written by an administrative mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAuditLogEntry {
    /// Acting user.
    pub actor_id: UserId,
    /// Performed action.
    pub action: AuditAction,
    /// Affected entity identifier.
    pub entity_id: String,
    /// Structured detail payload.
    pub details: Option<Value>,
}

/// Query parameters for audit log listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditLogQuery {
    /// Maximum rows returned.
    pub limit: usize,
    /// Number of rows skipped for offset pagination.
    pub offset: usize,
    /// Optional action filter.
    pub action: Option<String>,
    /// Optional entity filter.
    pub entity: Option<String>,
}

impl Default for AuditLogQuery {
    fn default() -> Self {
        Self {
            limit: 50,
            offset: 0,
            action: None,
            entity: None,
        }
    }
}

/// Repository port for the `audit_logs` relation.
#[async_trait]
pub trait AuditLogRepository: Send + Sync {
    /// Appends one entry.
    async fn append_entry(&self, entry: NewAuditLogEntry) -> AppResult<()>;

    /// Lists entries newest first.
    async fn list_entries(&self, query: AuditLogQuery) -> AppResult<Vec<AuditLogEntry>>;
}
