use orus_application::{AccessService, DirectoryAdminService, SessionService};
use sqlx::PgPool;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub access_service: AccessService,
    pub session_service: SessionService,
    pub directory_admin_service: DirectoryAdminService,
    pub postgres_pool: PgPool,
    pub frontend_url: String,
}
