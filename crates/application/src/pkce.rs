//! Proof Key for Code Exchange pairs for email-link flows.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use sha2::{Digest, Sha256};

use orus_core::{AppError, AppResult};

/// Challenge method sent alongside the challenge.
pub const PKCE_CHALLENGE_METHOD: &str = "s256";

/// Verifier kept in the credential store and its derived challenge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PkcePair {
    /// Secret verifier, sent only when exchanging the auth code.
    pub code_verifier: String,
    /// SHA-256 of the verifier, sent with the email request.
    pub code_challenge: String,
}

/// Generates a random verifier and its S256 challenge.
pub fn generate_pkce_pair() -> AppResult<PkcePair> {
    let mut bytes = [0u8; 32];
    getrandom::fill(&mut bytes)
        .map_err(|error| AppError::Internal(format!("failed to generate code verifier: {error}")))?;

    let code_verifier = URL_SAFE_NO_PAD.encode(bytes);
    let code_challenge = code_challenge_for(&code_verifier);

    Ok(PkcePair {
        code_verifier,
        code_challenge,
    })
}

/// Derives the S256 challenge of a verifier.
#[must_use]
pub fn code_challenge_for(code_verifier: &str) -> String {
    URL_SAFE_NO_PAD.encode(Sha256::digest(code_verifier.as_bytes()))
}
