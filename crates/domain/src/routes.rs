//! Route paths shared by guards, redirects and shell module detection.

/// Sign-in page.
pub const LOGIN: &str = "/auth/login";
/// Sign-up page.
pub const REGISTER: &str = "/auth/register";
/// Password recovery request page.
pub const FORGOT_PASSWORD: &str = "/auth/forgot-password";
/// New password page reached from the recovery email.
pub const UPDATE_PASSWORD: &str = "/auth/update-password";
/// Auth code exchange endpoint.
pub const AUTH_CALLBACK: &str = "/auth/callback";
/// Dashboard root.
pub const DASHBOARD: &str = "/dashboard";
/// Site root, the target after a successful code exchange.
pub const ROOT: &str = "/";
/// Sign-in page flagged with a failed code exchange.
pub const LOGIN_CALLBACK_FAILED: &str = "/auth/login?error=callback-failed";
