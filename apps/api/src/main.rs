//! ORUS API composition root.

#![forbid(unsafe_code)]

mod api_config;
mod api_router;
mod api_services;
mod auth;
mod credentials;
mod dto;
mod error;
mod handlers;
mod middleware;
mod state;

use orus_application::{AuthStateChange, SessionService};
use orus_core::AppError;
use tokio::sync::broadcast::error::RecvError;
use tracing::{info, warn};

use crate::api_config::ApiConfig;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    api_config::init_tracing();

    let config = ApiConfig::load()?;
    let pool =
        api_services::connect(&config.database_url, config.database_max_connections).await?;
    let session_layer =
        api_services::build_postgres_session_layer(pool.clone(), config.cookie_secure).await?;
    let app_state = api_services::build_app_state(pool, &config)?;

    spawn_auth_event_logger(&app_state.session_service);

    let app = api_router::build_router(app_state, &config.frontend_url, session_layer)?;

    let address = config.socket_address()?;
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .map_err(|error| AppError::Internal(format!("failed to bind listener: {error}")))?;

    info!(%address, "orus-api listening");

    axum::serve(listener, app)
        .await
        .map_err(|error| AppError::Internal(format!("api server error: {error}")))
}

fn spawn_auth_event_logger(session_service: &SessionService) {
    let mut events = session_service.subscribe();
    tokio::spawn(async move {
        loop {
            match events.recv().await {
                Ok(change) => log_auth_change(&change),
                Err(RecvError::Lagged(skipped)) => {
                    warn!(skipped, "auth event logger fell behind");
                }
                Err(RecvError::Closed) => break,
            }
        }
    });
}

fn log_auth_change(change: &AuthStateChange) {
    match change {
        AuthStateChange::SignedIn { user_id } | AuthStateChange::UserUpdated { user_id } => {
            info!(event = change.as_str(), %user_id, "auth state changed");
        }
        AuthStateChange::SignedOut { user_id } => {
            info!(event = change.as_str(), user_id = ?user_id, "auth state changed");
        }
        AuthStateChange::PasswordRecoveryRequested => {
            info!(event = change.as_str(), "auth state changed");
        }
    }
}
