use orus_core::{AppResult, Identity};
use orus_domain::{Capability, ClientPermission, EffectivePermissions, UserId};

use crate::{CredentialStore, PermissionResolution};

use super::AccessService;

impl AccessService {
    /// Returns the effective permissions of the signed-in user.
    ///
    /// Empty without a session; failed lookup branches contribute nothing.
    pub async fn get_permissions(
        &self,
        credentials: &dyn CredentialStore,
    ) -> EffectivePermissions {
        match self.get_identity(credentials).await {
            Some(identity) => self.permissions_for_identity(&identity).await.permissions,
            None => EffectivePermissions::empty(),
        }
    }

    /// Aggregates permissions for a known identity.
    pub async fn permissions_for_identity(&self, identity: &Identity) -> PermissionResolution {
        self.authorization_service
            .permissions_for_user(UserId::from(identity))
            .await
    }

    /// Returns whether the signed-in user holds a permission by name.
    pub async fn has_permission(
        &self,
        credentials: &dyn CredentialStore,
        permission_name: &str,
    ) -> bool {
        self.get_permissions(credentials)
            .await
            .contains_name(permission_name)
    }

    /// Resolves a client-side permission check.
    pub async fn check_client_permission(
        &self,
        credentials: &dyn CredentialStore,
        permission_name: &str,
    ) -> ClientPermission {
        let permissions = self.get_permissions(credentials).await;
        ClientPermission::resolve(&permissions, permission_name)
    }

    /// Ensures an identity holds a capability.
    pub async fn require_capability(
        &self,
        identity: &Identity,
        capability: Capability,
    ) -> AppResult<()> {
        self.authorization_service
            .require_capability(identity, capability)
            .await
    }
}
