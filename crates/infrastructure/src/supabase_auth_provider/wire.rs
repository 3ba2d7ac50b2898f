use serde::{Deserialize, Serialize};
use uuid::Uuid;

use orus_core::{AppError, AppResult, AuthSession, Identity};

#[derive(Debug, Deserialize)]
pub(super) struct UserBody {
    id: Uuid,
    email: Option<String>,
}

impl UserBody {
    pub(super) fn into_identity(self) -> Identity {
        Identity::new(self.id, self.email.filter(|email| !email.is_empty()))
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct SessionBody {
    access_token: String,
    refresh_token: String,
    expires_in: Option<i64>,
    expires_at: Option<i64>,
    user: Option<UserBody>,
}

impl SessionBody {
    pub(super) fn into_session(self, unix_now: i64) -> AppResult<AuthSession> {
        let user = self.user.ok_or_else(|| {
            AppError::Internal("auth service session is missing its user".to_owned())
        })?;

        Ok(AuthSession {
            access_token: self.access_token,
            refresh_token: self.refresh_token,
            expires_at: self
                .expires_at
                .or_else(|| self.expires_in.map(|seconds| unix_now + seconds)),
            identity: user.into_identity(),
        })
    }
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct ErrorBody {
    msg: Option<String>,
    message: Option<String>,
    error_description: Option<String>,
    error: Option<String>,
}

impl ErrorBody {
    pub(super) fn into_message(self) -> Option<String> {
        self.msg
            .or(self.message)
            .or(self.error_description)
            .or(self.error)
    }
}

#[derive(Debug, Serialize)]
pub(super) struct PasswordGrantBody<'a> {
    pub(super) email: &'a str,
    pub(super) password: &'a str,
}

#[derive(Debug, Serialize)]
pub(super) struct CodeExchangeBody<'a> {
    pub(super) auth_code: &'a str,
    pub(super) code_verifier: &'a str,
}

#[derive(Debug, Serialize)]
pub(super) struct RefreshTokenBody<'a> {
    pub(super) refresh_token: &'a str,
}

#[derive(Debug, Serialize)]
pub(super) struct SignUpData<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) full_name: Option<&'a str>,
}

#[derive(Debug, Serialize)]
pub(super) struct SignUpBody<'a> {
    pub(super) email: &'a str,
    pub(super) password: &'a str,
    pub(super) data: SignUpData<'a>,
    pub(super) code_challenge: &'a str,
    pub(super) code_challenge_method: &'a str,
}

#[derive(Debug, Serialize)]
pub(super) struct RecoverBody<'a> {
    pub(super) email: &'a str,
    pub(super) code_challenge: &'a str,
    pub(super) code_challenge_method: &'a str,
}

#[derive(Debug, Serialize)]
pub(super) struct PasswordUpdateBody<'a> {
    pub(super) password: &'a str,
}
