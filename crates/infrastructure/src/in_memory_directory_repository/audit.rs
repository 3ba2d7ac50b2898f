use async_trait::async_trait;
use chrono::Utc;

use orus_application::{
    AUDIT_LOG_MAX_OFFSET, AUDIT_LOG_PAGE_LIMIT, AuditLogEntry, AuditLogQuery, AuditLogRepository,
    NewAuditLogEntry,
};
use orus_core::AppResult;
use orus_domain::AuditLogId;

use super::InMemoryDirectoryRepository;

#[async_trait]
impl AuditLogRepository for InMemoryDirectoryRepository {
    async fn append_entry(&self, entry: NewAuditLogEntry) -> AppResult<()> {
        self.audit_logs.write().await.push(AuditLogEntry {
            id: AuditLogId::new(),
            actor_id: Some(entry.actor_id),
            entity: entry.action.entity().to_owned(),
            entity_id: Some(entry.entity_id),
            action: entry.action.as_str().to_owned(),
            details: entry.details,
            created_at: Utc::now(),
        });
        Ok(())
    }

    async fn list_entries(&self, query: AuditLogQuery) -> AppResult<Vec<AuditLogEntry>> {
        let entries = self.audit_logs.read().await;

        Ok(entries
            .iter()
            .rev()
            .filter(|entry| {
                query
                    .action
                    .as_deref()
                    .is_none_or(|action| entry.action == action)
                    && query
                        .entity
                        .as_deref()
                        .is_none_or(|entity| entry.entity == entity)
            })
            .skip(query.offset.min(AUDIT_LOG_MAX_OFFSET))
            .take(query.limit.clamp(1, AUDIT_LOG_PAGE_LIMIT))
            .cloned()
            .collect())
    }
}
