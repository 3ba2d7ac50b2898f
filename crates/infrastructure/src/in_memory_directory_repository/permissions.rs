use async_trait::async_trait;
use chrono::Utc;

use orus_application::PermissionRepository;
use orus_core::{AppError, AppResult};
use orus_domain::{Permission, PermissionId, PermissionInput, UserPermission};

use super::InMemoryDirectoryRepository;

#[async_trait]
impl PermissionRepository for InMemoryDirectoryRepository {
    async fn list_permissions(&self) -> AppResult<Vec<Permission>> {
        let mut values: Vec<Permission> =
            self.permissions.read().await.values().cloned().collect();
        values.sort_by(|left, right| {
            left.resource
                .cmp(&right.resource)
                .then_with(|| left.action.cmp(&right.action))
        });
        Ok(values)
    }

    async fn find_permission(&self, permission_id: PermissionId) -> AppResult<Option<Permission>> {
        Ok(self.permissions.read().await.get(&permission_id).cloned())
    }

    async fn create_permission(&self, input: &PermissionInput) -> AppResult<Permission> {
        let mut permissions = self.permissions.write().await;
        if permissions
            .values()
            .any(|permission| permission.name == input.name())
        {
            return Err(AppError::Conflict(format!(
                "permission '{}' already exists",
                input.name()
            )));
        }

        let now = Utc::now();
        let permission = Permission {
            id: PermissionId::new(),
            name: input.name().to_owned(),
            description: input.description().map(ToOwned::to_owned),
            resource: input.resource().to_owned(),
            action: input.action().to_owned(),
            created_at: now,
            updated_at: now,
        };
        permissions.insert(permission.id, permission.clone());
        Ok(permission)
    }

    async fn grant_to_user(&self, link: UserPermission) -> AppResult<()> {
        let mut links = self.user_permissions.write().await;
        if !links.contains(&link) {
            links.push(link);
        }
        Ok(())
    }

    async fn revoke_from_user(&self, link: UserPermission) -> AppResult<()> {
        self.user_permissions
            .write()
            .await
            .retain(|existing| existing != &link);
        Ok(())
    }
}
