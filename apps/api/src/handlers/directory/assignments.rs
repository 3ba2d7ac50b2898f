use super::*;

pub async fn assign_role_handler(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Path(user_id): Path<UserId>,
    Json(payload): Json<AssignRoleRequest>,
) -> ApiResult<StatusCode> {
    state
        .directory_admin_service
        .assign_role(&identity, user_id, payload.role_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn unassign_role_handler(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Path((user_id, role_id)): Path<(UserId, RoleId)>,
) -> ApiResult<StatusCode> {
    state
        .directory_admin_service
        .unassign_role(&identity, user_id, role_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn grant_permission_handler(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Path(user_id): Path<UserId>,
    Json(payload): Json<GrantPermissionRequest>,
) -> ApiResult<StatusCode> {
    state
        .directory_admin_service
        .grant_permission(&identity, user_id, payload.permission_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn revoke_permission_handler(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Path((user_id, permission_id)): Path<(UserId, PermissionId)>,
) -> ApiResult<StatusCode> {
    state
        .directory_admin_service
        .revoke_permission(&identity, user_id, permission_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
