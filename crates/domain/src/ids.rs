use std::fmt::{Display, Formatter};
use std::str::FromStr;

use orus_core::AppError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! uuid_id {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Creates a random identifier.
            #[must_use]
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Creates an identifier from an existing UUID value.
            #[must_use]
            pub fn from_uuid(value: Uuid) -> Self {
                Self(value)
            }

            /// Returns the underlying UUID value.
            #[must_use]
            pub fn as_uuid(&self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl Display for $name {
            fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
                write!(formatter, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = AppError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                Uuid::parse_str(value.trim())
                    .map(Self)
                    .map_err(|error| AppError::Validation(format!("invalid {} '{value}': {error}", $label)))
            }
        }
    };
}

uuid_id!(
    /// Profile identifier; equal to the auth service user id.
    UserId,
    "user id"
);
uuid_id!(
    /// Role identifier.
    RoleId,
    "role id"
);
uuid_id!(
    /// Permission identifier; the deduplication key of effective permissions.
    PermissionId,
    "permission id"
);
uuid_id!(
    /// Audit log entry identifier.
    AuditLogId,
    "audit log id"
);

impl From<&orus_core::Identity> for UserId {
    fn from(identity: &orus_core::Identity) -> Self {
        Self(identity.id())
    }
}
