//! Request and response types for profile endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::user::UserProfile;

/// Body for `POST /api/users`.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterUserRequest {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct UserProfileResponse {
    pub id: String,
    pub email: String,
    pub username: Option<String>,
    pub full_name: Option<String>,
}

impl From<UserProfile> for UserProfileResponse {
    fn from(profile: UserProfile) -> Self {
        Self {
            id: profile.id.to_string(),
            email: profile.email,
            username: profile.username,
            full_name: profile.full_name,
        }
    }
}
