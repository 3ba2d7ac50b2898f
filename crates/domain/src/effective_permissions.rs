use std::collections::HashSet;

use serde::Serialize;

use crate::{Permission, RoleWithPermissions};

/// Deduplicated union of role-derived permissions and direct grants.
///
/// Identity is the permission id. When the same id is reachable more than
/// once the first occurrence is kept; role-derived permissions are visited
/// before direct grants. Only set membership is meaningful.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EffectivePermissions {
    permissions: Vec<Permission>,
}

impl EffectivePermissions {
    /// Returns an empty permission set.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Flattens role permissions and direct grants into one set.
    #[must_use]
    pub fn from_sources(roles: Vec<RoleWithPermissions>, direct: Vec<Permission>) -> Self {
        let flattened = roles
            .into_iter()
            .flat_map(|role| role.permissions)
            .chain(direct);

        Self::from_permissions(flattened)
    }

    /// Deduplicates an arbitrary permission sequence by id.
    #[must_use]
    pub fn from_permissions(permissions: impl IntoIterator<Item = Permission>) -> Self {
        let mut seen = HashSet::new();
        let permissions = permissions
            .into_iter()
            .filter(|permission| seen.insert(permission.id))
            .collect();

        Self { permissions }
    }

    /// Returns whether any permission carries the given name.
    #[must_use]
    pub fn contains_name(&self, name: &str) -> bool {
        self.permissions
            .iter()
            .any(|permission| permission.name == name)
    }

    /// Returns permission names in set order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.permissions
            .iter()
            .map(|permission| permission.name.as_str())
            .collect()
    }

    /// Iterates the permissions.
    pub fn iter(&self) -> impl Iterator<Item = &Permission> {
        self.permissions.iter()
    }

    /// Returns the number of distinct permissions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.permissions.len()
    }

    /// Returns whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.permissions.is_empty()
    }
}

impl IntoIterator for EffectivePermissions {
    type Item = Permission;
    type IntoIter = std::vec::IntoIter<Permission>;

    fn into_iter(self) -> Self::IntoIter {
        self.permissions.into_iter()
    }
}
