//! Hand-written port fakes shared by service tests.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::Mutex;
use uuid::Uuid;

use orus_core::{AppError, AppResult, AuthSession, Identity};
use orus_domain::{
    Permission, PermissionId, PermissionInput, Profile, ProfileUpdate, Role, RoleId, RoleInput,
    RolePermission, RoleWithPermissions, UserId, UserPermission, UserRole,
};

use crate::{
    AuditLogEntry, AuditLogQuery, AuditLogRepository, AuthProvider, AuthorizationRepository,
    CredentialStore, NewAuditLogEntry, PermissionRepository, ProfileRepository, RecoveryRequest,
    RoleRepository, SignUpRequest, SignUpResult,
};

pub fn identity(email: &str) -> Identity {
    Identity::new(Uuid::new_v4(), Some(email.to_owned()))
}

pub fn session_for(identity: &Identity, access_token: &str) -> AuthSession {
    AuthSession {
        access_token: access_token.to_owned(),
        refresh_token: format!("{access_token}-refresh"),
        expires_at: None,
        identity: identity.clone(),
    }
}

pub fn permission(name: &str) -> Permission {
    let (resource, action) = name.split_once('.').unwrap_or((name, "read"));
    Permission {
        id: PermissionId::new(),
        name: name.to_owned(),
        description: None,
        resource: resource.to_owned(),
        action: action.to_owned(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn role(name: &str) -> Role {
    Role {
        id: RoleId::new(),
        name: name.to_owned(),
        description: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

#[derive(Default)]
pub struct FakeCredentialStore {
    pub session: Mutex<Option<AuthSession>>,
    pub code_verifier: Mutex<Option<String>>,
    pub fail_reads: bool,
}

impl FakeCredentialStore {
    pub fn with_session(session: AuthSession) -> Self {
        Self {
            session: Mutex::new(Some(session)),
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail_reads: true,
            ..Self::default()
        }
    }
}

#[async_trait]
impl CredentialStore for FakeCredentialStore {
    async fn load_session(&self) -> AppResult<Option<AuthSession>> {
        if self.fail_reads {
            return Err(AppError::Internal("session store unavailable".to_owned()));
        }
        Ok(self.session.lock().await.clone())
    }

    async fn store_session(&self, session: AuthSession) -> AppResult<()> {
        *self.session.lock().await = Some(session);
        Ok(())
    }

    async fn clear_session(&self) -> AppResult<()> {
        *self.session.lock().await = None;
        Ok(())
    }

    async fn store_code_verifier(&self, code_verifier: String) -> AppResult<()> {
        *self.code_verifier.lock().await = Some(code_verifier);
        Ok(())
    }

    async fn take_code_verifier(&self) -> AppResult<Option<String>> {
        if self.fail_reads {
            return Err(AppError::Internal("session store unavailable".to_owned()));
        }
        Ok(self.code_verifier.lock().await.take())
    }
}

/// Auth service fake keyed by access token, credentials and auth code.
#[derive(Default)]
pub struct FakeAuthProvider {
    pub users_by_token: HashMap<String, Identity>,
    pub sessions_by_credentials: HashMap<(String, String), AuthSession>,
    pub sessions_by_code: HashMap<String, AuthSession>,
    pub sessions_by_refresh_token: HashMap<String, AuthSession>,
    pub sign_up_session: Option<AuthSession>,
    pub backend_down: bool,
    pub calls: Mutex<Vec<String>>,
    pub sign_up_requests: Mutex<Vec<SignUpRequest>>,
    pub recovery_requests: Mutex<Vec<RecoveryRequest>>,
    pub exchanged_verifiers: Mutex<Vec<String>>,
}

impl FakeAuthProvider {
    pub fn with_user(access_token: &str, identity: &Identity) -> Self {
        Self {
            users_by_token: HashMap::from([(access_token.to_owned(), identity.clone())]),
            ..Self::default()
        }
    }

    pub fn down() -> Self {
        Self {
            backend_down: true,
            ..Self::default()
        }
    }

    pub async fn call_count(&self, name: &str) -> usize {
        self.calls
            .lock()
            .await
            .iter()
            .filter(|call| call.as_str() == name)
            .count()
    }

    async fn record(&self, name: &str) -> AppResult<()> {
        self.calls.lock().await.push(name.to_owned());
        if self.backend_down {
            return Err(AppError::Internal("auth service unreachable".to_owned()));
        }
        Ok(())
    }
}

#[async_trait]
impl AuthProvider for FakeAuthProvider {
    async fn get_user(&self, access_token: &str) -> AppResult<Option<Identity>> {
        self.record("get_user").await?;
        Ok(self.users_by_token.get(access_token).cloned())
    }

    async fn sign_in_with_password(&self, email: &str, password: &str) -> AppResult<AuthSession> {
        self.record("sign_in_with_password").await?;
        self.sessions_by_credentials
            .get(&(email.to_owned(), password.to_owned()))
            .cloned()
            .ok_or_else(|| AppError::Unauthorized("invalid login credentials".to_owned()))
    }

    async fn refresh_session(&self, refresh_token: &str) -> AppResult<AuthSession> {
        self.record("refresh_session").await?;
        self.sessions_by_refresh_token
            .get(refresh_token)
            .cloned()
            .ok_or_else(|| AppError::Unauthorized("refresh token rejected".to_owned()))
    }

    async fn sign_up(&self, request: SignUpRequest) -> AppResult<SignUpResult> {
        self.record("sign_up").await?;
        self.sign_up_requests.lock().await.push(request);
        Ok(match &self.sign_up_session {
            Some(session) => SignUpResult::SessionIssued(session.clone()),
            None => SignUpResult::ConfirmationRequired,
        })
    }

    async fn exchange_code_for_session(
        &self,
        auth_code: &str,
        code_verifier: &str,
    ) -> AppResult<AuthSession> {
        self.record("exchange_code_for_session").await?;
        self.exchanged_verifiers
            .lock()
            .await
            .push(code_verifier.to_owned());
        self.sessions_by_code
            .get(auth_code)
            .cloned()
            .ok_or_else(|| AppError::Unauthorized("invalid auth code".to_owned()))
    }

    async fn reset_password_for_email(&self, request: RecoveryRequest) -> AppResult<()> {
        self.record("reset_password_for_email").await?;
        self.recovery_requests.lock().await.push(request);
        Ok(())
    }

    async fn update_password(&self, access_token: &str, _new_password: &str) -> AppResult<()> {
        self.record("update_password").await?;
        if self.users_by_token.contains_key(access_token) {
            Ok(())
        } else {
            Err(AppError::Unauthorized("session expired".to_owned()))
        }
    }

    async fn sign_out(&self, _access_token: &str) -> AppResult<()> {
        self.record("sign_out").await
    }
}

/// Directory fake implementing every repository port over shared maps.
#[derive(Default)]
pub struct FakeDirectory {
    pub profiles: Mutex<HashMap<UserId, Profile>>,
    pub roles: Mutex<Vec<Role>>,
    pub permissions: Mutex<Vec<Permission>>,
    pub role_permissions: Mutex<Vec<RolePermission>>,
    pub user_roles: Mutex<Vec<UserRole>>,
    pub user_permissions: Mutex<Vec<UserPermission>>,
    pub audit_entries: Mutex<Vec<NewAuditLogEntry>>,
    pub audit_queries: Mutex<Vec<AuditLogQuery>>,
    pub fail_profiles: bool,
    pub fail_role_branch: bool,
    pub fail_direct_branch: bool,
    pub profile_queries: Mutex<usize>,
    pub sign_ins: Mutex<Vec<(UserId, DateTime<Utc>)>>,
}

impl FakeDirectory {
    pub async fn add_profile(&self, profile: Profile) {
        self.profiles.lock().await.insert(profile.id, profile);
    }

    pub async fn add_permission(&self, value: Permission) {
        self.permissions.lock().await.push(value);
    }

    pub async fn add_role(&self, value: Role, permissions: &[&Permission]) {
        let mut links = self.role_permissions.lock().await;
        for permission in permissions {
            links.push(RolePermission {
                role_id: value.id,
                permission_id: permission.id,
            });
        }
        self.roles.lock().await.push(value);
    }

    pub async fn link_role(&self, user_id: UserId, role_id: RoleId) {
        self.user_roles
            .lock()
            .await
            .push(UserRole { user_id, role_id });
    }

    pub async fn link_permission(&self, user_id: UserId, permission_id: PermissionId) {
        self.user_permissions.lock().await.push(UserPermission {
            user_id,
            permission_id,
        });
    }

    /// Grants capability names to a user through a dedicated role.
    pub async fn grant_via_role(&self, user_id: UserId, names: &[&str]) {
        let granted: Vec<Permission> = names.iter().map(|name| permission(name)).collect();
        let role_value = role("granted");
        for value in &granted {
            self.add_permission(value.clone()).await;
        }
        let references: Vec<&Permission> = granted.iter().collect();
        let role_id = role_value.id;
        self.add_role(role_value, &references).await;
        self.link_role(user_id, role_id).await;
    }

    async fn permissions_by_ids(&self, ids: impl Iterator<Item = PermissionId>) -> Vec<Permission> {
        let permissions = self.permissions.lock().await;
        ids.filter_map(|id| permissions.iter().find(|value| value.id == id).cloned())
            .collect()
    }
}

#[async_trait]
impl ProfileRepository for FakeDirectory {
    async fn find_profile(&self, user_id: UserId) -> AppResult<Option<Profile>> {
        *self.profile_queries.lock().await += 1;
        if self.fail_profiles {
            return Err(AppError::Internal("profiles query failed".to_owned()));
        }
        Ok(self.profiles.lock().await.get(&user_id).cloned())
    }

    async fn list_profiles(&self) -> AppResult<Vec<Profile>> {
        if self.fail_profiles {
            return Err(AppError::Internal("profiles query failed".to_owned()));
        }
        Ok(self.profiles.lock().await.values().cloned().collect())
    }

    async fn update_profile(&self, user_id: UserId, update: ProfileUpdate) -> AppResult<Profile> {
        let mut profiles = self.profiles.lock().await;
        let profile = profiles
            .get_mut(&user_id)
            .ok_or_else(|| AppError::NotFound(format!("profile '{user_id}' does not exist")))?;
        profile.apply(update);
        Ok(profile.clone())
    }

    async fn record_sign_in(&self, user_id: UserId, signed_in_at: DateTime<Utc>) -> AppResult<()> {
        if self.fail_profiles {
            return Err(AppError::Internal("profiles update failed".to_owned()));
        }
        self.sign_ins.lock().await.push((user_id, signed_in_at));
        Ok(())
    }
}

#[async_trait]
impl AuthorizationRepository for FakeDirectory {
    async fn list_roles_with_permissions_for_user(
        &self,
        user_id: UserId,
    ) -> AppResult<Vec<RoleWithPermissions>> {
        if self.fail_role_branch {
            return Err(AppError::Internal("role branch failed".to_owned()));
        }

        let role_ids: Vec<RoleId> = self
            .user_roles
            .lock()
            .await
            .iter()
            .filter(|link| link.user_id == user_id)
            .map(|link| link.role_id)
            .collect();

        let mut expanded = Vec::new();
        for role_id in role_ids {
            let Some(role_value) = self.find_role(role_id).await? else {
                continue;
            };
            let permissions = self.list_role_permissions(role_id).await?;
            expanded.push(RoleWithPermissions {
                role: role_value,
                permissions,
            });
        }
        Ok(expanded)
    }

    async fn list_direct_permissions_for_user(
        &self,
        user_id: UserId,
    ) -> AppResult<Vec<Permission>> {
        if self.fail_direct_branch {
            return Err(AppError::Internal("direct branch failed".to_owned()));
        }

        let ids: Vec<PermissionId> = self
            .user_permissions
            .lock()
            .await
            .iter()
            .filter(|link| link.user_id == user_id)
            .map(|link| link.permission_id)
            .collect();
        Ok(self.permissions_by_ids(ids.into_iter()).await)
    }
}

#[async_trait]
impl RoleRepository for FakeDirectory {
    async fn list_roles(&self) -> AppResult<Vec<Role>> {
        Ok(self.roles.lock().await.clone())
    }

    async fn list_role_permission_links(&self) -> AppResult<Vec<RolePermission>> {
        Ok(self.role_permissions.lock().await.clone())
    }

    async fn find_role(&self, role_id: RoleId) -> AppResult<Option<Role>> {
        Ok(self
            .roles
            .lock()
            .await
            .iter()
            .find(|value| value.id == role_id)
            .cloned())
    }

    async fn list_role_permissions(&self, role_id: RoleId) -> AppResult<Vec<Permission>> {
        let ids: Vec<PermissionId> = self
            .role_permissions
            .lock()
            .await
            .iter()
            .filter(|link| link.role_id == role_id)
            .map(|link| link.permission_id)
            .collect();
        Ok(self.permissions_by_ids(ids.into_iter()).await)
    }

    async fn create_role(&self, input: &RoleInput) -> AppResult<Role> {
        let mut roles = self.roles.lock().await;
        if roles.iter().any(|value| value.name == input.name()) {
            return Err(AppError::Conflict(format!(
                "role '{}' already exists",
                input.name()
            )));
        }
        let mut created = role(input.name());
        created.description = input.description().map(ToOwned::to_owned);
        roles.push(created.clone());
        Ok(created)
    }

    async fn update_role(&self, role_id: RoleId, input: &RoleInput) -> AppResult<Role> {
        let mut roles = self.roles.lock().await;
        let value = roles
            .iter_mut()
            .find(|value| value.id == role_id)
            .ok_or_else(|| AppError::NotFound(format!("role '{role_id}' does not exist")))?;
        value.name = input.name().to_owned();
        value.description = input.description().map(ToOwned::to_owned);
        Ok(value.clone())
    }

    async fn delete_role(&self, role_id: RoleId) -> AppResult<()> {
        let mut roles = self.roles.lock().await;
        let before = roles.len();
        roles.retain(|value| value.id != role_id);
        if roles.len() == before {
            return Err(AppError::NotFound(format!("role '{role_id}' does not exist")));
        }
        self.role_permissions
            .lock()
            .await
            .retain(|link| link.role_id != role_id);
        self.user_roles
            .lock()
            .await
            .retain(|link| link.role_id != role_id);
        Ok(())
    }

    async fn replace_role_permissions(
        &self,
        role_id: RoleId,
        permission_ids: &[PermissionId],
    ) -> AppResult<()> {
        let mut links = self.role_permissions.lock().await;
        links.retain(|link| link.role_id != role_id);
        links.extend(permission_ids.iter().map(|permission_id| RolePermission {
            role_id,
            permission_id: *permission_id,
        }));
        Ok(())
    }

    async fn list_roles_for_user(&self, user_id: UserId) -> AppResult<Vec<Role>> {
        let role_ids: Vec<RoleId> = self
            .user_roles
            .lock()
            .await
            .iter()
            .filter(|link| link.user_id == user_id)
            .map(|link| link.role_id)
            .collect();
        let roles = self.roles.lock().await;
        Ok(roles
            .iter()
            .filter(|value| role_ids.contains(&value.id))
            .cloned()
            .collect())
    }

    async fn assign_role(&self, link: UserRole) -> AppResult<()> {
        let mut links = self.user_roles.lock().await;
        if !links.contains(&link) {
            links.push(link);
        }
        Ok(())
    }

    async fn remove_role(&self, link: UserRole) -> AppResult<()> {
        self.user_roles
            .lock()
            .await
            .retain(|value| value != &link);
        Ok(())
    }
}

#[async_trait]
impl PermissionRepository for FakeDirectory {
    async fn list_permissions(&self) -> AppResult<Vec<Permission>> {
        Ok(self.permissions.lock().await.clone())
    }

    async fn find_permission(&self, permission_id: PermissionId) -> AppResult<Option<Permission>> {
        Ok(self
            .permissions
            .lock()
            .await
            .iter()
            .find(|value| value.id == permission_id)
            .cloned())
    }

    async fn create_permission(&self, input: &PermissionInput) -> AppResult<Permission> {
        let mut created = permission(input.name());
        created.description = input.description().map(ToOwned::to_owned);
        created.resource = input.resource().to_owned();
        created.action = input.action().to_owned();
        self.permissions.lock().await.push(created.clone());
        Ok(created)
    }

    async fn grant_to_user(&self, link: UserPermission) -> AppResult<()> {
        let mut links = self.user_permissions.lock().await;
        if !links.contains(&link) {
            links.push(link);
        }
        Ok(())
    }

    async fn revoke_from_user(&self, link: UserPermission) -> AppResult<()> {
        self.user_permissions
            .lock()
            .await
            .retain(|value| value != &link);
        Ok(())
    }
}

#[async_trait]
impl AuditLogRepository for FakeDirectory {
    async fn append_entry(&self, entry: NewAuditLogEntry) -> AppResult<()> {
        self.audit_entries.lock().await.push(entry);
        Ok(())
    }

    async fn list_entries(&self, query: AuditLogQuery) -> AppResult<Vec<AuditLogEntry>> {
        self.audit_queries.lock().await.push(query);
        Ok(Vec::new())
    }
}
