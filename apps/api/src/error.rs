use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use orus_application::GuardRedirect;
use orus_core::AppError;

mod types;

pub use types::ErrorResponse;

/// HTTP API error wrapper around core application errors.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(value: AppError) -> Self {
        Self(value)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let payload = Json(ErrorResponse::new(self.0.to_string()));

        (status, payload).into_response()
    }
}

/// Standard API result type.
pub type ApiResult<T> = Result<T, ApiError>;

/// Rejection of a page route: a guard redirect or a regular API error.
#[derive(Debug)]
pub enum PageRejection {
    Redirect(GuardRedirect),
    Api(ApiError),
}

impl From<GuardRedirect> for PageRejection {
    fn from(value: GuardRedirect) -> Self {
        Self::Redirect(value)
    }
}

impl From<AppError> for PageRejection {
    fn from(value: AppError) -> Self {
        Self::Api(ApiError(value))
    }
}

impl From<ApiError> for PageRejection {
    fn from(value: ApiError) -> Self {
        Self::Api(value)
    }
}

impl IntoResponse for PageRejection {
    fn into_response(self) -> Response {
        match self {
            Self::Redirect(redirect) => Redirect::to(redirect.location()).into_response(),
            Self::Api(error) => error.into_response(),
        }
    }
}

/// Result type of page routes.
pub type PageResult<T> = Result<T, PageRejection>;
