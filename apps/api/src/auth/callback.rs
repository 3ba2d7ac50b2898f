use super::*;

/// Query string of the email link callback.
#[derive(Debug, Default, Deserialize)]
pub struct CallbackQuery {
    pub code: Option<String>,
}

/// Exchanges the emailed code for a session and redirects.
pub async fn auth_callback_handler(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<CallbackQuery>,
) -> Redirect {
    let credentials = SessionCredentials::new(session);
    let outcome = state
        .session_service
        .complete_callback(&credentials, query.code.as_deref())
        .await;

    Redirect::to(outcome.redirect_target())
}
