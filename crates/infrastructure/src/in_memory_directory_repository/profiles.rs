use async_trait::async_trait;
use chrono::{DateTime, Utc};

use orus_application::ProfileRepository;
use orus_core::{AppError, AppResult};
use orus_domain::{Profile, ProfileUpdate, UserId};

use super::{InMemoryDirectoryRepository, InMemoryFailure};

#[async_trait]
impl ProfileRepository for InMemoryDirectoryRepository {
    async fn find_profile(&self, user_id: UserId) -> AppResult<Option<Profile>> {
        self.check(InMemoryFailure::Profiles).await?;
        Ok(self.profiles.read().await.get(&user_id).cloned())
    }

    async fn list_profiles(&self) -> AppResult<Vec<Profile>> {
        self.check(InMemoryFailure::Profiles).await?;

        let mut values: Vec<Profile> = self.profiles.read().await.values().cloned().collect();
        values.sort_by(|left, right| {
            match (&left.full_name, &right.full_name) {
                (Some(left_name), Some(right_name)) => left_name.cmp(right_name),
                (Some(_), None) => std::cmp::Ordering::Less,
                (None, Some(_)) => std::cmp::Ordering::Greater,
                (None, None) => std::cmp::Ordering::Equal,
            }
            .then_with(|| left.email.cmp(&right.email))
        });
        Ok(values)
    }

    async fn update_profile(&self, user_id: UserId, update: ProfileUpdate) -> AppResult<Profile> {
        self.check(InMemoryFailure::Profiles).await?;

        let mut profiles = self.profiles.write().await;
        let profile = profiles
            .get_mut(&user_id)
            .ok_or_else(|| AppError::NotFound(format!("profile '{user_id}' does not exist")))?;
        profile.apply(update);
        Ok(profile.clone())
    }

    async fn record_sign_in(&self, user_id: UserId, signed_in_at: DateTime<Utc>) -> AppResult<()> {
        self.check(InMemoryFailure::Profiles).await?;

        if let Some(profile) = self.profiles.write().await.get_mut(&user_id) {
            profile.last_sign_in = Some(signed_in_at);
        }
        Ok(())
    }
}
