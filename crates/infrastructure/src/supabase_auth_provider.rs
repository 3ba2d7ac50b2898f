use async_trait::async_trait;
use reqwest::StatusCode;
use url::Url;

use orus_application::pkce::PKCE_CHALLENGE_METHOD;
use orus_application::{AuthProvider, RecoveryRequest, SignUpRequest, SignUpResult};
use orus_core::{AppError, AppResult, AuthSession, Identity};

mod wire;


use wire::{
    CodeExchangeBody, ErrorBody, PasswordGrantBody, PasswordUpdateBody, RecoverBody,
    RefreshTokenBody, SessionBody, SignUpBody, SignUpData, UserBody,
};

/// GoTrue-compatible auth service client (`{SUPABASE_URL}/auth/v1`).
#[derive(Clone)]
pub struct SupabaseAuthProvider {
    http_client: reqwest::Client,
    auth_base_url: Url,
    anon_key: String,
}

impl SupabaseAuthProvider {
    /// Creates a client for the project at `project_url`.
    pub fn new(
        http_client: reqwest::Client,
        project_url: &Url,
        anon_key: String,
    ) -> AppResult<Self> {
        let mut base = project_url.clone();
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let auth_base_url = base
            .join("auth/v1/")
            .map_err(|error| AppError::Validation(format!("invalid auth service url: {error}")))?;

        Ok(Self {
            http_client,
            auth_base_url,
            anon_key,
        })
    }

    fn endpoint(&self, path: &str) -> AppResult<Url> {
        self.auth_base_url.join(path).map_err(|error| {
            AppError::Internal(format!("failed to build auth endpoint '{path}': {error}"))
        })
    }

    fn request(&self, method: reqwest::Method, url: Url) -> reqwest::RequestBuilder {
        self.http_client
            .request(method, url)
            .header("apikey", self.anon_key.as_str())
    }

    async fn send(
        &self,
        builder: reqwest::RequestBuilder,
        operation: &str,
    ) -> AppResult<reqwest::Response> {
        let response = builder.send().await.map_err(|error| {
            AppError::Internal(format!("auth service {operation} request failed: {error}"))
        })?;

        if response.status().is_success() {
            return Ok(response);
        }

        Err(error_from_response(response, operation).await)
    }

    async fn session_from(response: reqwest::Response, operation: &str) -> AppResult<AuthSession> {
        let body = response.json::<SessionBody>().await.map_err(|error| {
            AppError::Internal(format!(
                "auth service {operation} returned an invalid session: {error}"
            ))
        })?;

        body.into_session(chrono::Utc::now().timestamp())
    }
}

async fn error_from_response(response: reqwest::Response, operation: &str) -> AppError {
    let status = response.status();
    let message = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(ErrorBody::into_message)
        .unwrap_or_else(|| status.to_string());

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => AppError::Unauthorized(message),
        StatusCode::BAD_REQUEST
        | StatusCode::UNPROCESSABLE_ENTITY
        | StatusCode::TOO_MANY_REQUESTS => AppError::Validation(message),
        _ => AppError::Internal(format!(
            "auth service {operation} failed with status {status}: {message}"
        )),
    }
}

#[async_trait]
impl AuthProvider for SupabaseAuthProvider {
    async fn get_user(&self, access_token: &str) -> AppResult<Option<Identity>> {
        let response = self
            .request(reqwest::Method::GET, self.endpoint("user")?)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|error| {
                AppError::Internal(format!("auth service user request failed: {error}"))
            })?;

        if matches!(
            response.status(),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN
        ) {
            return Ok(None);
        }

        if !response.status().is_success() {
            return Err(error_from_response(response, "user").await);
        }

        let user = response.json::<UserBody>().await.map_err(|error| {
            AppError::Internal(format!("auth service returned an invalid user: {error}"))
        })?;

        Ok(Some(user.into_identity()))
    }

    async fn sign_in_with_password(&self, email: &str, password: &str) -> AppResult<AuthSession> {
        let mut url = self.endpoint("token")?;
        url.query_pairs_mut().append_pair("grant_type", "password");

        let response = self
            .request(reqwest::Method::POST, url)
            .json(&PasswordGrantBody { email, password })
            .send()
            .await
            .map_err(|error| {
                AppError::Internal(format!("auth service sign-in request failed: {error}"))
            })?;

        if matches!(
            response.status(),
            StatusCode::BAD_REQUEST | StatusCode::UNAUTHORIZED
        ) {
            return Err(AppError::Unauthorized(
                "invalid login credentials".to_owned(),
            ));
        }

        if !response.status().is_success() {
            return Err(error_from_response(response, "sign-in").await);
        }

        Self::session_from(response, "sign-in").await
    }

    async fn refresh_session(&self, refresh_token: &str) -> AppResult<AuthSession> {
        let mut url = self.endpoint("token")?;
        url.query_pairs_mut().append_pair("grant_type", "refresh_token");

        let response = self
            .request(reqwest::Method::POST, url)
            .json(&RefreshTokenBody { refresh_token })
            .send()
            .await
            .map_err(|error| {
                AppError::Internal(format!("auth service refresh request failed: {error}"))
            })?;

        // A refresh token the service no longer honors comes back as invalid_grant.
        if matches!(
            response.status(),
            StatusCode::BAD_REQUEST | StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN
        ) {
            return Err(AppError::Unauthorized("refresh token rejected".to_owned()));
        }

        if !response.status().is_success() {
            return Err(error_from_response(response, "refresh").await);
        }

        Self::session_from(response, "refresh").await
    }

    async fn sign_up(&self, request: SignUpRequest) -> AppResult<SignUpResult> {
        let mut url = self.endpoint("signup")?;
        url.query_pairs_mut()
            .append_pair("redirect_to", &request.email_redirect_to);

        let body = SignUpBody {
            email: &request.email,
            password: &request.password,
            data: SignUpData {
                full_name: request.full_name.as_deref(),
            },
            code_challenge: &request.code_challenge,
            code_challenge_method: PKCE_CHALLENGE_METHOD,
        };

        let response = self
            .send(self.request(reqwest::Method::POST, url).json(&body), "sign-up")
            .await?;

        let value = response.json::<serde_json::Value>().await.map_err(|error| {
            AppError::Internal(format!("auth service sign-up returned invalid json: {error}"))
        })?;

        if value.get("access_token").is_none() {
            return Ok(SignUpResult::ConfirmationRequired);
        }

        let session = serde_json::from_value::<SessionBody>(value).map_err(|error| {
            AppError::Internal(format!(
                "auth service sign-up returned an invalid session: {error}"
            ))
        })?;

        Ok(SignUpResult::SessionIssued(
            session.into_session(chrono::Utc::now().timestamp())?,
        ))
    }

    async fn exchange_code_for_session(
        &self,
        auth_code: &str,
        code_verifier: &str,
    ) -> AppResult<AuthSession> {
        let mut url = self.endpoint("token")?;
        url.query_pairs_mut().append_pair("grant_type", "pkce");

        let response = self
            .send(
                self.request(reqwest::Method::POST, url)
                    .json(&CodeExchangeBody {
                        auth_code,
                        code_verifier,
                    }),
                "code exchange",
            )
            .await?;

        Self::session_from(response, "code exchange").await
    }

    async fn reset_password_for_email(&self, request: RecoveryRequest) -> AppResult<()> {
        let mut url = self.endpoint("recover")?;
        url.query_pairs_mut()
            .append_pair("redirect_to", &request.redirect_to);

        self.send(
            self.request(reqwest::Method::POST, url).json(&RecoverBody {
                email: &request.email,
                code_challenge: &request.code_challenge,
                code_challenge_method: PKCE_CHALLENGE_METHOD,
            }),
            "recovery",
        )
        .await?;

        Ok(())
    }

    async fn update_password(&self, access_token: &str, new_password: &str) -> AppResult<()> {
        self.send(
            self.request(reqwest::Method::PUT, self.endpoint("user")?)
                .bearer_auth(access_token)
                .json(&PasswordUpdateBody {
                    password: new_password,
                }),
            "password update",
        )
        .await?;

        Ok(())
    }

    async fn sign_out(&self, access_token: &str) -> AppResult<()> {
        let response = self
            .request(reqwest::Method::POST, self.endpoint("logout")?)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|error| {
                AppError::Internal(format!("auth service sign-out request failed: {error}"))
            })?;

        // An already revoked token has nothing left to sign out.
        if matches!(
            response.status(),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN | StatusCode::NOT_FOUND
        ) {
            tracing::debug!(status = %response.status(), "auth session already revoked");
            return Ok(());
        }

        if !response.status().is_success() {
            return Err(error_from_response(response, "sign-out").await);
        }

        Ok(())
    }
}
