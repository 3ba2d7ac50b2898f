use super::*;

pub async fn roles_page_handler(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
) -> ApiResult<Json<Vec<RoleSummaryResponse>>> {
    let roles = state
        .directory_admin_service
        .list_roles(&identity)
        .await?
        .into_iter()
        .map(RoleSummaryResponse::from)
        .collect();

    Ok(Json(roles))
}

pub async fn role_detail_page_handler(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Path(role_id): Path<RoleId>,
) -> ApiResult<Json<RoleDetailResponse>> {
    let detail = state
        .directory_admin_service
        .role_detail(&identity, role_id)
        .await?;

    Ok(Json(RoleDetailResponse::from(detail)))
}

pub async fn permissions_page_handler(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
) -> ApiResult<Json<Vec<PermissionResponse>>> {
    let permissions = state
        .directory_admin_service
        .list_permissions(&identity)
        .await?
        .into_iter()
        .map(PermissionResponse::from)
        .collect();

    Ok(Json(permissions))
}
