mod database;
mod sessions;
mod state_builder;

pub use database::connect;
pub use sessions::build_postgres_session_layer;
pub use state_builder::build_app_state;
