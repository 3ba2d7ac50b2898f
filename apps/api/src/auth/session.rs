use orus_core::AppError;

use super::*;

pub async fn login_handler(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginRequest>,
) -> ApiResult<Json<AuthActionResponse>> {
    let credentials = SessionCredentials::new(session);
    state
        .session_service
        .sign_in(&credentials, &payload.email, &payload.password)
        .await?;

    Ok(Json(AuthActionResponse::redirect(routes::DASHBOARD)))
}

pub async fn register_handler(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<AuthActionResponse>)> {
    let credentials = SessionCredentials::new(session);
    let outcome = state
        .session_service
        .sign_up(
            &credentials,
            SignUpInput {
                email: payload.email,
                password: payload.password,
                password_confirmation: payload.password_confirmation,
                full_name: payload.full_name,
            },
        )
        .await?;

    let response = match outcome {
        SignUpOutcome::SignedIn(_) => AuthActionResponse::redirect(routes::DASHBOARD),
        SignUpOutcome::ConfirmationPending => {
            AuthActionResponse::message("check your email to confirm your account")
        }
    };

    Ok((StatusCode::CREATED, Json(response)))
}

pub async fn logout_handler(
    State(state): State<AppState>,
    session: Session,
) -> ApiResult<StatusCode> {
    let credentials = SessionCredentials::new(session.clone());
    state.session_service.sign_out(&credentials).await?;

    session
        .flush()
        .await
        .map_err(|error| AppError::Internal(format!("failed to delete session: {error}")))?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn me_handler(
    State(state): State<AppState>,
    session: Session,
) -> Json<AccessStateResponse> {
    let credentials = SessionCredentials::new(session);
    let access_state = state.access_service.access_state(&credentials).await;

    Json(AccessStateResponse::from(access_state))
}
