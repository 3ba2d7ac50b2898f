use orus_core::{AppResult, Identity};
use orus_domain::Capability;

use crate::{AuditLogEntry, AuditLogQuery};

use super::{AUDIT_LOG_MAX_OFFSET, AUDIT_LOG_PAGE_LIMIT, DirectoryAdminService};

impl DirectoryAdminService {
    /// Lists audit log entries newest first.
    pub async fn list_audit_logs(
        &self,
        actor: &Identity,
        query: AuditLogQuery,
    ) -> AppResult<Vec<AuditLogEntry>> {
        self.authorization_service
            .require_capability(actor, Capability::AuditLogsRead)
            .await?;

        let query = AuditLogQuery {
            limit: query.limit.clamp(1, AUDIT_LOG_PAGE_LIMIT),
            offset: query.offset.min(AUDIT_LOG_MAX_OFFSET),
            action: non_blank(query.action),
            entity: non_blank(query.entity),
        };

        self.audit_log_repository.list_entries(query).await
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}
