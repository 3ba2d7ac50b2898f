use super::*;

pub async fn users_page_handler(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
) -> ApiResult<Json<Vec<ProfileResponse>>> {
    let users = state
        .directory_admin_service
        .list_users(&identity)
        .await?
        .into_iter()
        .map(ProfileResponse::from)
        .collect();

    Ok(Json(users))
}

pub async fn user_detail_page_handler(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Path(user_id): Path<UserId>,
) -> ApiResult<Json<UserAccessDetailResponse>> {
    let detail = state
        .directory_admin_service
        .user_access_detail(&identity, user_id)
        .await?;

    Ok(Json(UserAccessDetailResponse::from(detail)))
}
