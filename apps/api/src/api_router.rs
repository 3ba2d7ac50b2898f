use axum::Router;
use axum::middleware::from_fn_with_state;
use axum::routing::{delete, get, post, put};
use orus_core::AppError;
use orus_domain::routes;
use tower_http::trace::TraceLayer;
use tower_sessions::SessionManagerLayer;
use tower_sessions_sqlx_store::PostgresStore;

use crate::state::AppState;
use crate::{auth, handlers, middleware};

mod cors;

pub fn build_router(
    app_state: AppState,
    frontend_url: &str,
    session_layer: SessionManagerLayer<PostgresStore>,
) -> Result<Router, AppError> {
    let api_routes = Router::new()
        .route(
            "/api/me/permissions",
            get(handlers::permissions::my_permissions_handler),
        )
        .route(
            "/api/permissions/check",
            get(handlers::permissions::check_permission_handler),
        )
        .route(
            "/api/permissions",
            post(handlers::directory::create_permission_handler),
        )
        .route(
            "/api/profile",
            put(handlers::directory::update_own_profile_handler),
        )
        .route(
            "/api/users/{user_id}/profile",
            put(handlers::directory::update_profile_handler),
        )
        .route(
            "/api/users/{user_id}/roles",
            post(handlers::directory::assign_role_handler),
        )
        .route(
            "/api/users/{user_id}/roles/{role_id}",
            delete(handlers::directory::unassign_role_handler),
        )
        .route(
            "/api/users/{user_id}/permissions",
            post(handlers::directory::grant_permission_handler),
        )
        .route(
            "/api/users/{user_id}/permissions/{permission_id}",
            delete(handlers::directory::revoke_permission_handler),
        )
        .route("/api/roles", post(handlers::directory::create_role_handler))
        .route(
            "/api/roles/{role_id}",
            put(handlers::directory::update_role_handler)
                .delete(handlers::directory::delete_role_handler),
        )
        .route(
            "/api/roles/{role_id}/permissions",
            put(handlers::directory::set_role_permissions_handler),
        )
        .route("/api/shell", get(handlers::shell::shell_state_handler))
        .route(
            "/api/shell/reduce",
            post(handlers::shell::reduce_shell_handler),
        )
        .route_layer(from_fn_with_state(
            app_state.clone(),
            middleware::require_auth,
        ));

    let dashboard_routes = Router::new()
        .route(
            routes::DASHBOARD,
            get(handlers::dashboard::dashboard_handler),
        )
        .route(
            "/dashboard/users",
            get(handlers::dashboard::users_page_handler),
        )
        .route(
            "/dashboard/users/{user_id}",
            get(handlers::dashboard::user_detail_page_handler),
        )
        .route(
            "/dashboard/roles",
            get(handlers::dashboard::roles_page_handler),
        )
        .route(
            "/dashboard/roles/{role_id}",
            get(handlers::dashboard::role_detail_page_handler),
        )
        .route(
            "/dashboard/permissions",
            get(handlers::dashboard::permissions_page_handler),
        )
        .route(
            "/dashboard/audit-logs",
            get(handlers::dashboard::audit_logs_page_handler),
        )
        .route(
            "/dashboard/profile",
            get(handlers::dashboard::profile_page_handler),
        )
        .route_layer(from_fn_with_state(
            app_state.clone(),
            middleware::require_page_auth,
        ));

    let auth_routes = Router::new()
        .route(
            routes::LOGIN,
            get(auth::login_page_handler).post(auth::login_handler),
        )
        .route(
            routes::REGISTER,
            get(auth::register_page_handler).post(auth::register_handler),
        )
        .route(
            routes::FORGOT_PASSWORD,
            get(auth::forgot_password_page_handler).post(auth::forgot_password_handler),
        )
        .route(
            routes::UPDATE_PASSWORD,
            get(auth::update_password_page_handler).post(auth::update_password_handler),
        )
        .route(routes::AUTH_CALLBACK, get(auth::auth_callback_handler))
        .route("/auth/logout", post(auth::logout_handler))
        .route("/auth/me", get(auth::me_handler));

    Ok(Router::new()
        .route("/health", get(handlers::health::health_handler))
        .merge(auth_routes)
        .merge(dashboard_routes)
        .merge(api_routes)
        .route_layer(from_fn_with_state(
            app_state.clone(),
            middleware::require_same_origin_for_mutations,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(cors::build_cors_layer(frontend_url)?)
        .layer(session_layer)
        .with_state(app_state))
}
