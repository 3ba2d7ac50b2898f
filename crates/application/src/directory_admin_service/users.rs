use serde_json::json;

use orus_core::{AppError, AppResult, Degraded, Identity};
use orus_domain::{
    AuditAction, Capability, EffectivePermissions, Permission, Profile, ProfileUpdate, Role,
    UserId,
};

use super::DirectoryAdminService;

/// User detail view: profile, assignments and the resulting permission set.
#[derive(Debug, Clone, PartialEq)]
pub struct UserAccessDetail {
    /// The profile row.
    pub profile: Profile,
    /// Roles assigned through `user_roles`.
    pub roles: Vec<Role>,
    /// Permissions granted through `user_permissions`.
    pub direct_permissions: Vec<Permission>,
    /// Deduplicated union of role-derived and direct permissions.
    pub effective_permissions: EffectivePermissions,
    /// Permission branches that failed while aggregating.
    pub degraded: Vec<Degraded>,
}

impl DirectoryAdminService {
    /// Lists all profiles.
    pub async fn list_users(&self, actor: &Identity) -> AppResult<Vec<Profile>> {
        self.authorization_service
            .require_capability(actor, Capability::UsersRead)
            .await?;

        self.profile_repository.list_profiles().await
    }

    /// Loads the access detail of one user.
    ///
    /// The lookups run independently; no snapshot spans them.
    pub async fn user_access_detail(
        &self,
        actor: &Identity,
        user_id: UserId,
    ) -> AppResult<UserAccessDetail> {
        self.authorization_service
            .require_capability(actor, Capability::UsersRead)
            .await?;

        let profile = self.existing_user(user_id).await?;
        let roles = self.role_repository.list_roles_for_user(user_id).await?;
        let direct_permissions = self
            .authorization_repository
            .list_direct_permissions_for_user(user_id)
            .await?;
        let resolution = self.authorization_service.permissions_for_user(user_id).await;

        Ok(UserAccessDetail {
            profile,
            roles,
            direct_permissions,
            effective_permissions: resolution.permissions,
            degraded: resolution.degraded,
        })
    }

    /// Updates another user's profile.
    pub async fn update_profile(
        &self,
        actor: &Identity,
        user_id: UserId,
        update: ProfileUpdate,
    ) -> AppResult<Profile> {
        self.authorization_service
            .require_capability(actor, Capability::UsersManage)
            .await?;

        self.apply_profile_update(actor, user_id, update.normalized())
            .await
    }

    /// Updates the acting user's own profile.
    ///
    /// The organizational role label is not self-editable and is kept.
    pub async fn update_own_profile(
        &self,
        actor: &Identity,
        update: ProfileUpdate,
    ) -> AppResult<Profile> {
        let update = ProfileUpdate {
            role: None,
            ..update.normalized()
        };

        self.apply_profile_update(actor, UserId::from(actor), update)
            .await
    }

    async fn apply_profile_update(
        &self,
        actor: &Identity,
        user_id: UserId,
        update: ProfileUpdate,
    ) -> AppResult<Profile> {
        let profile = self
            .profile_repository
            .update_profile(user_id, update)
            .await?;

        self.append_audit(
            actor,
            AuditAction::ProfileUpdated,
            user_id.to_string(),
            Some(json!({ "full_name": profile.full_name })),
        )
        .await?;

        Ok(profile)
    }

    pub(super) async fn existing_user(&self, user_id: UserId) -> AppResult<Profile> {
        self.profile_repository
            .find_profile(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("user '{user_id}' does not exist")))
    }
}
