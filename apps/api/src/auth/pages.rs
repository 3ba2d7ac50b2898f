use super::*;

pub async fn login_page_handler(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<AuthPageQuery>,
) -> PageResult<Json<AuthPageResponse>> {
    guest_page(&state, session, "login", query).await
}

pub async fn register_page_handler(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<AuthPageQuery>,
) -> PageResult<Json<AuthPageResponse>> {
    guest_page(&state, session, "register", query).await
}

pub async fn forgot_password_page_handler(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<AuthPageQuery>,
) -> PageResult<Json<AuthPageResponse>> {
    guest_page(&state, session, "forgot_password", query).await
}

async fn guest_page(
    state: &AppState,
    session: Session,
    page: &'static str,
    query: AuthPageQuery,
) -> PageResult<Json<AuthPageResponse>> {
    let credentials = SessionCredentials::new(session);
    state.access_service.require_guest(&credentials).await?;

    Ok(Json(AuthPageResponse {
        page,
        error: query.error.filter(|value| !value.trim().is_empty()),
    }))
}
