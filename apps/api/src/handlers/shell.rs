use axum::Json;
use axum::extract::Query;
use orus_domain::routes;
use orus_domain::shell::ShellStore;
use serde::Deserialize;

use crate::dto::{ShellReduceRequest, ShellStateResponse};

/// Query string of the shell hydration request.
#[derive(Debug, Deserialize)]
pub struct ShellQuery {
    pub viewport_width: u32,
    pub path: Option<String>,
}

/// Returns the shell state a client mounts with.
pub async fn shell_state_handler(Query(query): Query<ShellQuery>) -> Json<ShellStateResponse> {
    let path = query.path.as_deref().unwrap_or(routes::DASHBOARD);
    let store = ShellStore::mounted(query.viewport_width, path);

    Json(ShellStateResponse::from(store.state()))
}

/// Applies one action to a client-held shell state.
pub async fn reduce_shell_handler(
    Json(payload): Json<ShellReduceRequest>,
) -> Json<ShellStateResponse> {
    let next = ShellStore::from_state(payload.state.into()).dispatch(&payload.action);

    Json(ShellStateResponse::from(next))
}
