use super::*;

pub async fn create_permission_handler(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Json(payload): Json<CreatePermissionRequest>,
) -> ApiResult<(StatusCode, Json<PermissionResponse>)> {
    let input = PermissionInput::new(
        payload.name,
        payload.description,
        payload.resource,
        payload.action,
    )?;
    let permission = state
        .directory_admin_service
        .create_permission(&identity, input)
        .await?;

    Ok((StatusCode::CREATED, Json(PermissionResponse::from(permission))))
}
