use std::sync::Arc;

use orus_application::{
    AccessService, AuthorizationService, DirectoryAdminService, DirectoryRepositories,
    SessionService,
};
use orus_core::AppError;
use orus_infrastructure::{
    PostgresAuditLogRepository, PostgresAuthorizationRepository, PostgresPermissionRepository,
    PostgresProfileRepository, PostgresRoleRepository, SupabaseAuthProvider,
};
use sqlx::PgPool;

use crate::api_config::ApiConfig;
use crate::state::AppState;

pub fn build_app_state(pool: PgPool, config: &ApiConfig) -> Result<AppState, AppError> {
    let http_client = reqwest::Client::builder()
        .user_agent(concat!("orus-api/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|error| AppError::Internal(format!("failed to build http client: {error}")))?;
    let auth_provider = Arc::new(SupabaseAuthProvider::new(
        http_client,
        &config.supabase_url,
        config.supabase_anon_key.clone(),
    )?);

    let profiles = Arc::new(PostgresProfileRepository::new(pool.clone()));
    let authorization = Arc::new(PostgresAuthorizationRepository::new(pool.clone()));
    let authorization_service = AuthorizationService::new(authorization.clone());

    let access_service = AccessService::new(
        auth_provider.clone(),
        profiles.clone(),
        authorization_service.clone(),
    );
    let session_service =
        SessionService::new(auth_provider, profiles.clone(), &config.frontend_url);
    let directory_admin_service = DirectoryAdminService::new(
        authorization_service,
        DirectoryRepositories {
            profiles,
            roles: Arc::new(PostgresRoleRepository::new(pool.clone())),
            permissions: Arc::new(PostgresPermissionRepository::new(pool.clone())),
            authorization,
            audit_logs: Arc::new(PostgresAuditLogRepository::new(pool.clone())),
        },
    );

    Ok(AppState {
        access_service,
        session_service,
        directory_admin_service,
        postgres_pool: pool,
        frontend_url: config.frontend_url.clone(),
    })
}
