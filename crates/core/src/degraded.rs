//! Read paths that must never fail the caller report failures as
//! [`Degraded`] values instead of errors. The caller decides whether to fall
//! back to an empty result; tests can still see that the fallback happened.

use thiserror::Error;

use crate::AppError;

/// A failure that was absorbed into a fallback value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{source_name} degraded: {reason}")]
pub struct Degraded {
    source_name: &'static str,
    reason: String,
}

impl Degraded {
    /// Records a degraded read from the named source.
    #[must_use]
    pub fn new(source_name: &'static str, reason: impl Into<String>) -> Self {
        Self {
            source_name,
            reason: reason.into(),
        }
    }

    /// Wraps an application error raised by the named source.
    #[must_use]
    pub fn from_error(source_name: &'static str, error: &AppError) -> Self {
        Self::new(source_name, error.to_string())
    }

    /// Returns the name of the read that degraded.
    #[must_use]
    pub fn source_name(&self) -> &'static str {
        self.source_name
    }

    /// Returns the underlying failure description.
    #[must_use]
    pub fn reason(&self) -> &str {
        self.reason.as_str()
    }
}

/// Result of a best-effort read.
pub type Degradable<T> = Result<T, Degraded>;
