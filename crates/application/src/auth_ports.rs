mod credentials;
mod provider;

pub use credentials::CredentialStore;
pub use provider::{AuthProvider, RecoveryRequest, SignUpRequest, SignUpResult};
