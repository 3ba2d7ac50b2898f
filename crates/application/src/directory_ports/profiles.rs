use async_trait::async_trait;
use chrono::{DateTime, Utc};

use orus_core::AppResult;
use orus_domain::{Profile, ProfileUpdate, UserId};

/// Repository port for the `profiles` relation.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Finds the profile row whose id equals the identity id.
    ///
    /// A missing row is `Ok(None)`, not an error.
    async fn find_profile(&self, user_id: UserId) -> AppResult<Option<Profile>>;

    /// Lists all profiles ordered by display name.
    async fn list_profiles(&self) -> AppResult<Vec<Profile>>;

    /// Applies a profile form update and returns the stored row.
    async fn update_profile(&self, user_id: UserId, update: ProfileUpdate) -> AppResult<Profile>;

    /// Stores the last successful sign-in time.
    async fn record_sign_in(&self, user_id: UserId, signed_in_at: DateTime<Utc>) -> AppResult<()>;
}
