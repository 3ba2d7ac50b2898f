use serde::{Deserialize, Serialize};

use crate::EffectivePermissions;

/// Client view of one permission check.
///
/// Starts as [`ClientPermission::Loading`], which never grants, and resolves
/// from the same aggregated permission set the server guards use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ClientPermission {
    /// Answer not received yet.
    #[default]
    Loading,
    /// Answer received.
    Resolved {
        /// Whether the permission is held.
        granted: bool,
    },
}

impl ClientPermission {
    /// Resolves a check against an aggregated permission set.
    #[must_use]
    pub fn resolve(permissions: &EffectivePermissions, permission_name: &str) -> Self {
        Self::Resolved {
            granted: permissions.contains_name(permission_name),
        }
    }

    /// Returns whether the permission is held; `false` while loading.
    #[must_use]
    pub fn has_permission(&self) -> bool {
        matches!(self, Self::Resolved { granted: true })
    }

    /// Returns whether the answer is still pending.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}
