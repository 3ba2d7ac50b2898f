use super::*;

pub async fn update_own_profile_handler(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Json(payload): Json<UpdateProfileRequest>,
) -> ApiResult<Json<ProfileResponse>> {
    let profile = state
        .directory_admin_service
        .update_own_profile(&identity, ProfileUpdate::from(payload))
        .await?;

    Ok(Json(ProfileResponse::from(profile)))
}

pub async fn update_profile_handler(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Path(user_id): Path<UserId>,
    Json(payload): Json<UpdateProfileRequest>,
) -> ApiResult<Json<ProfileResponse>> {
    let profile = state
        .directory_admin_service
        .update_profile(&identity, user_id, ProfileUpdate::from(payload))
        .await?;

    Ok(Json(ProfileResponse::from(profile)))
}
