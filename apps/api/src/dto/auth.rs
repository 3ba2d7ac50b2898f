use orus_application::AccessState;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::ProfileResponse;

/// Incoming payload for password sign-in.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/login-request.ts"
)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Incoming payload for account registration.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/register-request.ts"
)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
    pub full_name: Option<String>,
}

/// Incoming payload for a password recovery email.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/forgot-password-request.ts"
)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

/// Incoming payload for setting a new password.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/update-password-request.ts"
)]
pub struct UpdatePasswordRequest {
    pub password: String,
    pub password_confirmation: String,
}

/// Page model of the auth forms.
#[derive(Debug, PartialEq, Eq, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/auth-page-response.ts"
)]
pub struct AuthPageResponse {
    pub page: &'static str,
    pub error: Option<String>,
}

/// Result of an auth form submission.
#[derive(Debug, PartialEq, Eq, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/auth-action-response.ts"
)]
pub struct AuthActionResponse {
    pub redirect_to: Option<&'static str>,
    pub message: Option<String>,
}

impl AuthActionResponse {
    pub fn redirect(target: &'static str) -> Self {
        Self {
            redirect_to: Some(target),
            message: None,
        }
    }

    pub fn message(message: impl Into<String>) -> Self {
        Self {
            redirect_to: None,
            message: Some(message.into()),
        }
    }
}

/// API representation of the caller's access state.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/access-state-response.ts"
)]
pub struct AccessStateResponse {
    pub state: &'static str,
    pub signed_in: bool,
    pub user_id: Option<String>,
    pub email: Option<String>,
    pub display_name: Option<String>,
    pub profile: Option<ProfileResponse>,
}

impl From<AccessState> for AccessStateResponse {
    fn from(value: AccessState) -> Self {
        let state = match &value {
            AccessState::Unauthenticated => "unauthenticated",
            AccessState::AuthenticatedNoProfile(_) => "authenticated_no_profile",
            AccessState::AuthenticatedWithProfile { .. } => "authenticated",
        };
        let signed_in = value.is_signed_in_for_ui();
        let user_id = value.identity().map(|identity| identity.id().to_string());
        let email = value
            .identity()
            .and_then(|identity| identity.email())
            .map(ToOwned::to_owned);
        let display_name = value
            .profile()
            .map(|profile| profile.display_name().to_owned());
        let profile = value.profile().cloned().map(ProfileResponse::from);

        Self {
            state,
            signed_in,
            user_id,
            email,
            display_name,
            profile,
        }
    }
}
