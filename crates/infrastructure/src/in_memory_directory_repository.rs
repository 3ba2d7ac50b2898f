use std::collections::{HashMap, HashSet};

use chrono::Utc;
use tokio::sync::RwLock;

use orus_application::AuditLogEntry;
use orus_core::{AppError, AppResult};
use orus_domain::{
    Permission, PermissionId, Profile, Role, RoleId, RolePermission, UserId, UserPermission,
    UserRole,
};

mod audit;
mod authorization;
mod permissions;
mod profiles;
mod roles;


/// Read path of [`InMemoryDirectoryRepository`] that can be made to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InMemoryFailure {
    /// Profile reads and writes.
    Profiles,
    /// Role-derived permission lookups.
    RoleBranch,
    /// Direct permission lookups.
    DirectBranch,
}

/// In-memory implementation of every directory port.
#[derive(Debug, Default)]
pub struct InMemoryDirectoryRepository {
    profiles: RwLock<HashMap<UserId, Profile>>,
    roles: RwLock<HashMap<RoleId, Role>>,
    permissions: RwLock<HashMap<PermissionId, Permission>>,
    role_permissions: RwLock<Vec<RolePermission>>,
    user_roles: RwLock<Vec<UserRole>>,
    user_permissions: RwLock<Vec<UserPermission>>,
    audit_logs: RwLock<Vec<AuditLogEntry>>,
    failures: RwLock<HashSet<InMemoryFailure>>,
}

impl InMemoryDirectoryRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a profile row, replacing any row with the same id.
    pub async fn insert_profile(&self, profile: Profile) {
        self.profiles.write().await.insert(profile.id, profile);
    }

    /// Stores a role row.
    pub async fn insert_role(&self, role: Role) {
        self.roles.write().await.insert(role.id, role);
    }

    /// Stores a permission row.
    pub async fn insert_permission(&self, permission: Permission) {
        self.permissions
            .write()
            .await
            .insert(permission.id, permission);
    }

    /// Stores a permission row built from its name, resource and action.
    pub async fn insert_named_permission(
        &self,
        name: &str,
        resource: &str,
        action: &str,
    ) -> Permission {
        let now = Utc::now();
        let permission = Permission {
            id: PermissionId::new(),
            name: name.to_owned(),
            description: None,
            resource: resource.to_owned(),
            action: action.to_owned(),
            created_at: now,
            updated_at: now,
        };
        self.insert_permission(permission.clone()).await;
        permission
    }

    /// Makes a read path fail until [`Self::recover`] is called.
    pub async fn fail(&self, failure: InMemoryFailure) {
        self.failures.write().await.insert(failure);
    }

    /// Clears an injected failure.
    pub async fn recover(&self, failure: InMemoryFailure) {
        self.failures.write().await.remove(&failure);
    }

    /// Returns every stored audit entry, oldest first.
    pub async fn audit_entries(&self) -> Vec<AuditLogEntry> {
        self.audit_logs.read().await.clone()
    }

    async fn check(&self, failure: InMemoryFailure) -> AppResult<()> {
        if self.failures.read().await.contains(&failure) {
            return Err(AppError::Internal(format!(
                "injected {failure:?} failure"
            )));
        }

        Ok(())
    }

    async fn permissions_by_ids(&self, ids: Vec<PermissionId>) -> Vec<Permission> {
        let permissions = self.permissions.read().await;
        let mut values: Vec<Permission> = ids
            .iter()
            .filter_map(|id| permissions.get(id).cloned())
            .collect();
        values.sort_by(|left, right| left.name.cmp(&right.name));
        values
    }
}
