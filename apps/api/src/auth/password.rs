use orus_application::GuardRedirect;

use super::*;

pub async fn forgot_password_handler(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<ForgotPasswordRequest>,
) -> ApiResult<Json<AuthActionResponse>> {
    let credentials = SessionCredentials::new(session);
    state
        .session_service
        .request_password_reset(&credentials, &payload.email)
        .await?;

    Ok(Json(AuthActionResponse::message(
        "if an account exists for this email, a reset link has been sent",
    )))
}

/// Shown after the recovery link signed the user in.
pub async fn update_password_page_handler(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<AuthPageQuery>,
) -> PageResult<Json<AuthPageResponse>> {
    let credentials = SessionCredentials::new(session);
    if state.access_service.get_session(&credentials).await.is_none() {
        return Err(GuardRedirect::LOGIN.into());
    }

    Ok(Json(AuthPageResponse {
        page: "update_password",
        error: query.error.filter(|value| !value.trim().is_empty()),
    }))
}

pub async fn update_password_handler(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<UpdatePasswordRequest>,
) -> ApiResult<Json<AuthActionResponse>> {
    let credentials = SessionCredentials::new(session);
    state
        .session_service
        .update_password(
            &credentials,
            &payload.password,
            &payload.password_confirmation,
        )
        .await?;

    Ok(Json(AuthActionResponse::redirect(routes::DASHBOARD)))
}
