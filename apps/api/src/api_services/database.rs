use orus_core::AppError;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

/// Opens the Postgres pool.
///
/// The directory schema is owned by the hosted database project, so no
/// migrations run here.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<PgPool, AppError> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
        .map_err(|error| AppError::Internal(format!("failed to connect to database: {error}")))
}
