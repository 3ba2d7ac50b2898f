//! Typed records for the directory relations: profiles, roles, permissions and
//! their join tables.

use chrono::{DateTime, Utc};
use orus_core::{AppResult, NonEmptyString};
use serde::{Deserialize, Serialize};

use crate::{PermissionId, RoleId, UserId};

/// Application-level user record extending an auth identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Same value as the identity id.
    pub id: UserId,
    /// Display name entered by the user.
    pub full_name: Option<String>,
    /// Avatar image location.
    pub avatar_url: Option<String>,
    /// Free-text organizational role label (not an RBAC role).
    pub role: Option<String>,
    /// Contact email.
    pub email: Option<String>,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Department name.
    pub department: Option<String>,
    /// Job position.
    pub position: Option<String>,
    /// Last successful sign-in.
    pub last_sign_in: Option<DateTime<Utc>>,
}

impl Profile {
    /// Creates an empty profile for the identity id.
    #[must_use]
    pub fn new(id: UserId) -> Self {
        Self {
            id,
            full_name: None,
            avatar_url: None,
            role: None,
            email: None,
            phone: None,
            department: None,
            position: None,
            last_sign_in: None,
        }
    }

    /// Returns the name shown in headers and tables.
    ///
    /// Falls back to the email local part, then to a generic label.
    #[must_use]
    pub fn display_name(&self) -> &str {
        if let Some(full_name) = self
            .full_name
            .as_deref()
            .filter(|value| !value.trim().is_empty())
        {
            return full_name;
        }

        self.email
            .as_deref()
            .and_then(|email| email.split('@').next())
            .filter(|value| !value.is_empty())
            .unwrap_or("Unnamed user")
    }

    /// Applies a profile form update.
    pub fn apply(&mut self, update: ProfileUpdate) {
        self.full_name = update.full_name;
        self.avatar_url = update.avatar_url;
        self.phone = update.phone;
        self.department = update.department;
        self.position = update.position;
        if let Some(role) = update.role {
            self.role = Some(role);
        }
    }
}

/// Editable profile fields submitted by profile forms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    /// New display name.
    pub full_name: Option<String>,
    /// New avatar location.
    pub avatar_url: Option<String>,
    /// New phone number.
    pub phone: Option<String>,
    /// New department.
    pub department: Option<String>,
    /// New position.
    pub position: Option<String>,
    /// New organizational role label; `None` keeps the current value.
    pub role: Option<String>,
}

impl ProfileUpdate {
    /// Trims every field and turns blank values into `None`.
    #[must_use]
    pub fn normalized(self) -> Self {
        Self {
            full_name: normalize_optional(self.full_name),
            avatar_url: normalize_optional(self.avatar_url),
            phone: normalize_optional(self.phone),
            department: normalize_optional(self.department),
            position: normalize_optional(self.position),
            role: normalize_optional(self.role),
        }
    }
}

/// Named bundle of permissions assignable to profiles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    /// Role identifier.
    pub id: RoleId,
    /// Unique role name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last update time.
    pub updated_at: DateTime<Utc>,
}

/// Atomic capability scoped to a resource and action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permission {
    /// Permission identifier.
    pub id: PermissionId,
    /// Unique permission name checked by guards.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Resource the permission applies to.
    pub resource: String,
    /// Action allowed on the resource.
    pub action: String,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last update time.
    pub updated_at: DateTime<Utc>,
}

/// Role row expanded with the permissions linked through `role_permissions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleWithPermissions {
    /// The role row.
    pub role: Role,
    /// Linked permission rows.
    pub permissions: Vec<Permission>,
}

/// `user_roles` link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserRole {
    /// Linked profile.
    pub user_id: UserId,
    /// Linked role.
    pub role_id: RoleId,
}

/// `role_permissions` link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RolePermission {
    /// Linked role.
    pub role_id: RoleId,
    /// Linked permission.
    pub permission_id: PermissionId,
}

/// `user_permissions` link: a direct grant bypassing roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserPermission {
    /// Linked profile.
    pub user_id: UserId,
    /// Linked permission.
    pub permission_id: PermissionId,
}

/// Validated role form input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleInput {
    name: NonEmptyString,
    description: Option<String>,
}

impl RoleInput {
    /// Validates a role form submission.
    pub fn new(name: impl Into<String>, description: Option<String>) -> AppResult<Self> {
        Ok(Self {
            name: NonEmptyString::new(name)?,
            description: normalize_optional(description),
        })
    }

    /// Returns the trimmed role name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns the optional description.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// Validated permission form input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionInput {
    name: NonEmptyString,
    description: Option<String>,
    resource: NonEmptyString,
    action: NonEmptyString,
}

impl PermissionInput {
    /// Validates a permission form submission.
    pub fn new(
        name: impl Into<String>,
        description: Option<String>,
        resource: impl Into<String>,
        action: impl Into<String>,
    ) -> AppResult<Self> {
        Ok(Self {
            name: NonEmptyString::new(name)?,
            description: normalize_optional(description),
            resource: NonEmptyString::new(resource)?,
            action: NonEmptyString::new(action)?,
        })
    }

    /// Returns the permission name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns the optional description.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the resource.
    #[must_use]
    pub fn resource(&self) -> &str {
        self.resource.as_str()
    }

    /// Returns the action.
    #[must_use]
    pub fn action(&self) -> &str {
        self.action.as_str()
    }
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::{PermissionInput, Profile, ProfileUpdate, RoleInput};
    use crate::UserId;

    #[test]
    fn display_name_prefers_full_name() {
        let mut profile = Profile::new(UserId::new());
        profile.full_name = Some("Ada Lovelace".to_owned());
        profile.email = Some("ada@orus.dev".to_owned());

        assert_eq!(profile.display_name(), "Ada Lovelace");
    }

    #[test]
    fn display_name_falls_back_to_email_local_part() {
        let mut profile = Profile::new(UserId::new());
        profile.full_name = Some("   ".to_owned());
        profile.email = Some("grace@orus.dev".to_owned());

        assert_eq!(profile.display_name(), "grace");
    }

    #[test]
    fn apply_keeps_role_label_when_update_omits_it() {
        let mut profile = Profile::new(UserId::new());
        profile.role = Some("Operations".to_owned());

        profile.apply(
            ProfileUpdate {
                full_name: Some(" Linus ".to_owned()),
                department: Some(String::new()),
                ..ProfileUpdate::default()
            }
            .normalized(),
        );

        assert_eq!(profile.full_name.as_deref(), Some("Linus"));
        assert_eq!(profile.department, None);
        assert_eq!(profile.role.as_deref(), Some("Operations"));
    }

    #[test]
    fn role_input_requires_name() {
        assert!(RoleInput::new("  ", None).is_err());
    }

    #[test]
    fn permission_input_requires_resource_and_action() {
        assert!(PermissionInput::new("users.read", None, "users", " ").is_err());
        assert!(PermissionInput::new("users.read", None, "users", "read").is_ok());
    }
}
