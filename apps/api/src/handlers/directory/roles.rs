use super::*;

pub async fn create_role_handler(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Json(payload): Json<RoleRequest>,
) -> ApiResult<(StatusCode, Json<RoleResponse>)> {
    let input = RoleInput::new(payload.name, payload.description)?;
    let role = state
        .directory_admin_service
        .create_role(&identity, input)
        .await?;

    Ok((StatusCode::CREATED, Json(RoleResponse::from(role))))
}

pub async fn update_role_handler(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Path(role_id): Path<RoleId>,
    Json(payload): Json<RoleRequest>,
) -> ApiResult<Json<RoleResponse>> {
    let input = RoleInput::new(payload.name, payload.description)?;
    let role = state
        .directory_admin_service
        .update_role(&identity, role_id, input)
        .await?;

    Ok(Json(RoleResponse::from(role)))
}

pub async fn delete_role_handler(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Path(role_id): Path<RoleId>,
) -> ApiResult<StatusCode> {
    state
        .directory_admin_service
        .delete_role(&identity, role_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn set_role_permissions_handler(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Path(role_id): Path<RoleId>,
    Json(payload): Json<SetRolePermissionsRequest>,
) -> ApiResult<StatusCode> {
    state
        .directory_admin_service
        .set_role_permissions(&identity, role_id, payload.permission_ids)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
