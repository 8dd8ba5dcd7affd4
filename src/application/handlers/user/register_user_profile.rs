//! RegisterUserProfileHandler - Command handler for mirroring auth users
//! into the public profile table.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::user::UserProfile;
use crate::ports::UserRepository;

/// Command to register a profile for an authenticated user.
#[derive(Debug, Clone)]
pub struct RegisterUserProfileCommand {
    pub user_id: UserId,
    pub email: String,
    pub username: Option<String>,
    pub full_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RegisterUserProfileResult {
    pub profile: UserProfile,
    /// False when a profile with this id already existed.
    pub created: bool,
}

pub struct RegisterUserProfileHandler {
    repository: Arc<dyn UserRepository>,
}

impl RegisterUserProfileHandler {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: RegisterUserProfileCommand,
    ) -> Result<RegisterUserProfileResult, DomainError> {
        let mut profile = UserProfile::new(cmd.user_id, cmd.email)?;
        if let Some(username) = cmd.username.filter(|u| !u.trim().is_empty()) {
            profile = profile.with_username(username.trim());
        }
        if let Some(full_name) = cmd.full_name.filter(|n| !n.trim().is_empty()) {
            profile = profile.with_full_name(full_name.trim());
        }

        let created = self.repository.save_if_absent(&profile).await?;
        if created {
            tracing::info!(user_id = %profile.id, "User profile registered");
        }

        Ok(RegisterUserProfileResult { profile, created })
    }
}
