use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Redirect;
use orus_application::{SignUpInput, SignUpOutcome};
use orus_domain::routes;
use serde::Deserialize;
use tower_sessions::Session;

use crate::credentials::SessionCredentials;
use crate::dto::{
    AccessStateResponse, AuthActionResponse, AuthPageResponse, ForgotPasswordRequest,
    LoginRequest, RegisterRequest, UpdatePasswordRequest,
};
use crate::error::{ApiResult, PageResult};
use crate::state::AppState;

mod callback;
mod pages;
mod password;
mod session;


pub use callback::auth_callback_handler;
pub use pages::{forgot_password_page_handler, login_page_handler, register_page_handler};
pub use password::{
    forgot_password_handler, update_password_handler, update_password_page_handler,
};
pub use session::{login_handler, logout_handler, me_handler, register_handler};

/// Query string shared by the auth pages.
#[derive(Debug, Default, Deserialize)]
pub struct AuthPageQuery {
    pub error: Option<String>,
}
