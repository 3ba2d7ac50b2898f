use axum::extract::{Request, State};
use axum::http::{HeaderMap, HeaderValue, Method, header};
use axum::middleware::Next;
use axum::response::Response;
use orus_core::AppError;
use tower_sessions::Session;

use crate::credentials::SessionCredentials;
use crate::error::{ApiResult, PageResult};
use crate::state::AppState;

/// Resolves the identity for `/api` routes; anonymous requests get a 401.
pub async fn require_auth(
    State(state): State<AppState>,
    session: Session,
    mut request: Request,
    next: Next,
) -> ApiResult<Response> {
    let credentials = SessionCredentials::new(session);
    let identity = state
        .access_service
        .get_identity(&credentials)
        .await
        .ok_or_else(|| AppError::Unauthorized("authentication required".to_owned()))?;

    request.extensions_mut().insert(identity);
    Ok(next.run(request).await)
}

/// Resolves the identity for dashboard pages; anonymous requests are
/// redirected to the login page.
pub async fn require_page_auth(
    State(state): State<AppState>,
    session: Session,
    mut request: Request,
    next: Next,
) -> PageResult<Response> {
    let credentials = SessionCredentials::new(session);
    let identity = state.access_service.require_auth(&credentials).await?;

    request.extensions_mut().insert(identity);
    Ok(next.run(request).await)
}

pub async fn require_same_origin_for_mutations(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> ApiResult<Response> {
    if is_state_changing_method(request.method()) {
        let headers = request.headers();

        if is_cross_site_fetch(headers) {
            return Err(AppError::Unauthorized("cross-site request blocked".to_owned()).into());
        }

        if !has_allowed_origin(headers, &state.frontend_url) {
            return Err(AppError::Unauthorized("origin validation failed".to_owned()).into());
        }
    }

    Ok(next.run(request).await)
}

fn is_state_changing_method(method: &Method) -> bool {
    matches!(
        *method,
        Method::POST | Method::PUT | Method::PATCH | Method::DELETE
    )
}

fn is_cross_site_fetch(headers: &HeaderMap) -> bool {
    headers.get("sec-fetch-site") == Some(&HeaderValue::from_static("cross-site"))
}

fn has_allowed_origin(headers: &HeaderMap, allowed_origin: &str) -> bool {
    let origin = headers
        .get(header::ORIGIN)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    let referer = headers
        .get(header::REFERER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    origin == allowed_origin
        || referer == allowed_origin
        || referer
            .strip_prefix(allowed_origin)
            .is_some_and(|rest| rest.starts_with('/'))
}
