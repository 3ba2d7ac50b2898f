use super::*;

const MODULES: [(AppModule, Option<Capability>); 6] = [
    (AppModule::Overview, None),
    (AppModule::Users, Some(Capability::UsersRead)),
    (AppModule::Roles, Some(Capability::RolesRead)),
    (AppModule::Permissions, Some(Capability::PermissionsRead)),
    (AppModule::AuditLogs, Some(Capability::AuditLogsRead)),
    (AppModule::Profile, None),
];

pub async fn dashboard_handler(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
) -> Json<DashboardResponse> {
    let resolution = state
        .access_service
        .permissions_for_identity(&identity)
        .await;
    let access = state.access_service.access_state_for(identity).await;

    Json(DashboardResponse {
        access: AccessStateResponse::from(access),
        permissions: resolution
            .permissions
            .names()
            .into_iter()
            .map(ToOwned::to_owned)
            .collect(),
        modules: visible_modules(&resolution.permissions),
    })
}

pub async fn profile_page_handler(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
) -> Json<AccessStateResponse> {
    let access = state.access_service.access_state_for(identity).await;

    Json(AccessStateResponse::from(access))
}

/// Modules reachable with the granted permissions, in navigation order.
pub(super) fn visible_modules(permissions: &EffectivePermissions) -> Vec<String> {
    MODULES
        .iter()
        .filter(|(_, capability)| {
            capability.is_none_or(|capability| permissions.contains_name(capability.as_str()))
        })
        .map(|(module, _)| module.as_str().to_owned())
        .collect()
}
