//! GetUserProfileHandler - Query handler for a profile by id or email.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::user::{UserLookup, UserProfile};
use crate::ports::UserRepository;

#[derive(Debug, Clone)]
pub struct GetUserProfileQuery {
    /// UUID or email address.
    pub identifier: String,
}

pub struct GetUserProfileHandler {
    repository: Arc<dyn UserRepository>,
}

impl GetUserProfileHandler {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetUserProfileQuery) -> Result<UserProfile, DomainError> {
        let lookup = UserLookup::parse(&query.identifier)?;
        self.repository
            .find(&lookup)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::UserNotFound, "User not found"))
    }
}
