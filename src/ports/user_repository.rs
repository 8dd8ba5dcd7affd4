//! User profile repository port.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::user::{UserLookup, UserProfile};

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert the profile unless one with the same id exists.
    ///
    /// Returns `true` when a row was inserted.
    async fn save_if_absent(&self, profile: &UserProfile) -> Result<bool, DomainError>;

    /// Find a profile by id or email.
    async fn find(&self, lookup: &UserLookup) -> Result<Option<UserProfile>, DomainError>;
}
