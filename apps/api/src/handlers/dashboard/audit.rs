use super::*;

/// Audit log page query string.
#[derive(Debug, Default, Deserialize)]
pub struct AuditLogParams {
    pub limit: Option<usize>,
    pub offset: Option<usize>,
    pub action: Option<String>,
    pub entity: Option<String>,
}

impl From<AuditLogParams> for AuditLogQuery {
    fn from(value: AuditLogParams) -> Self {
        let defaults = Self::default();
        Self {
            limit: value.limit.unwrap_or(defaults.limit),
            offset: value.offset.unwrap_or(defaults.offset),
            action: value.action,
            entity: value.entity,
        }
    }
}

pub async fn audit_logs_page_handler(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Query(params): Query<AuditLogParams>,
) -> ApiResult<Json<Vec<AuditLogEntryResponse>>> {
    let entries = state
        .directory_admin_service
        .list_audit_logs(&identity, AuditLogQuery::from(params))
        .await?
        .into_iter()
        .map(AuditLogEntryResponse::from)
        .collect();

    Ok(Json(entries))
}
