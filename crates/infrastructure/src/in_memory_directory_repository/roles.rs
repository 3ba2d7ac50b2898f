use async_trait::async_trait;
use chrono::Utc;

use orus_application::RoleRepository;
use orus_core::{AppError, AppResult};
use orus_domain::{
    Permission, PermissionId, Role, RoleId, RoleInput, RolePermission, UserId, UserRole,
};

use super::InMemoryDirectoryRepository;

#[async_trait]
impl RoleRepository for InMemoryDirectoryRepository {
    async fn list_roles(&self) -> AppResult<Vec<Role>> {
        let mut values: Vec<Role> = self.roles.read().await.values().cloned().collect();
        values.sort_by(|left, right| left.name.cmp(&right.name));
        Ok(values)
    }

    async fn list_role_permission_links(&self) -> AppResult<Vec<RolePermission>> {
        Ok(self.role_permissions.read().await.clone())
    }

    async fn find_role(&self, role_id: RoleId) -> AppResult<Option<Role>> {
        Ok(self.roles.read().await.get(&role_id).cloned())
    }

    async fn list_role_permissions(&self, role_id: RoleId) -> AppResult<Vec<Permission>> {
        let ids: Vec<PermissionId> = self
            .role_permissions
            .read()
            .await
            .iter()
            .filter(|link| link.role_id == role_id)
            .map(|link| link.permission_id)
            .collect();
        Ok(self.permissions_by_ids(ids).await)
    }

    async fn create_role(&self, input: &RoleInput) -> AppResult<Role> {
        let mut roles = self.roles.write().await;
        if roles.values().any(|role| role.name == input.name()) {
            return Err(AppError::Conflict(format!(
                "role '{}' already exists",
                input.name()
            )));
        }

        let now = Utc::now();
        let role = Role {
            id: RoleId::new(),
            name: input.name().to_owned(),
            description: input.description().map(ToOwned::to_owned),
            created_at: now,
            updated_at: now,
        };
        roles.insert(role.id, role.clone());
        Ok(role)
    }

    async fn update_role(&self, role_id: RoleId, input: &RoleInput) -> AppResult<Role> {
        let mut roles = self.roles.write().await;
        if roles
            .values()
            .any(|role| role.id != role_id && role.name == input.name())
        {
            return Err(AppError::Conflict(format!(
                "role '{}' already exists",
                input.name()
            )));
        }

        let role = roles
            .get_mut(&role_id)
            .ok_or_else(|| AppError::NotFound(format!("role '{role_id}' does not exist")))?;
        role.name = input.name().to_owned();
        role.description = input.description().map(ToOwned::to_owned);
        role.updated_at = Utc::now();
        Ok(role.clone())
    }

    async fn delete_role(&self, role_id: RoleId) -> AppResult<()> {
        if self.roles.write().await.remove(&role_id).is_none() {
            return Err(AppError::NotFound(format!(
                "role '{role_id}' does not exist"
            )));
        }

        self.role_permissions
            .write()
            .await
            .retain(|link| link.role_id != role_id);
        self.user_roles
            .write()
            .await
            .retain(|link| link.role_id != role_id);
        Ok(())
    }

    async fn replace_role_permissions(
        &self,
        role_id: RoleId,
        permission_ids: &[PermissionId],
    ) -> AppResult<()> {
        let mut links = self.role_permissions.write().await;
        links.retain(|link| link.role_id != role_id);
        for permission_id in permission_ids {
            let link = RolePermission {
                role_id,
                permission_id: *permission_id,
            };
            if !links.contains(&link) {
                links.push(link);
            }
        }
        Ok(())
    }

    async fn list_roles_for_user(&self, user_id: UserId) -> AppResult<Vec<Role>> {
        let role_ids: Vec<RoleId> = self
            .user_roles
            .read()
            .await
            .iter()
            .filter(|link| link.user_id == user_id)
            .map(|link| link.role_id)
            .collect();

        let roles = self.roles.read().await;
        let mut values: Vec<Role> = role_ids
            .iter()
            .filter_map(|role_id| roles.get(role_id).cloned())
            .collect();
        values.sort_by(|left, right| left.name.cmp(&right.name));
        Ok(values)
    }

    async fn assign_role(&self, link: UserRole) -> AppResult<()> {
        let mut links = self.user_roles.write().await;
        if !links.contains(&link) {
            links.push(link);
        }
        Ok(())
    }

    async fn remove_role(&self, link: UserRole) -> AppResult<()> {
        self.user_roles
            .write()
            .await
            .retain(|existing| existing != &link);
        Ok(())
    }
}
