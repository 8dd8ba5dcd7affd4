//! Public user profile rows.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{UserId, ValidationError};

/// Profile row mirroring a Supabase auth user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: UserId,
    pub email: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
}

impl UserProfile {
    pub fn new(id: UserId, email: impl Into<String>) -> Result<Self, ValidationError> {
        let email = email.into();
        if email.trim().is_empty() {
            return Err(ValidationError::empty_field("email"));
        }
        Ok(Self {
            id,
            email: email.trim().to_string(),
            username: None,
            full_name: None,
        })
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn with_full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = Some(full_name.into());
        self
    }
}

/// How a profile is looked up: by id when the identifier is a UUID,
/// otherwise by email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserLookup {
    Id(UserId),
    Email(String),
}

impl UserLookup {
    pub fn parse(identifier: &str) -> Result<Self, ValidationError> {
        let identifier = identifier.trim();
        if identifier.is_empty() {
            return Err(ValidationError::empty_field("identifier"));
        }
        Ok(match identifier.parse::<UserId>() {
            Ok(id) => UserLookup::Id(id),
            Err(_) => UserLookup::Email(identifier.to_string()),
        })
    }

    /// Column and value to filter on.
    pub fn column_filter(&self) -> (&'static str, String) {
        match self {
            UserLookup::Id(id) => ("id", id.to_string()),
            UserLookup::Email(email) => ("email", email.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RAW_ID: &str = "0f8fad5b-d9cb-469f-a165-70867728950e";

    #[test]
    fn uuid_identifier_looks_up_by_id() {
        let lookup = UserLookup::parse(RAW_ID).unwrap();
        assert_eq!(lookup.column_filter(), ("id", RAW_ID.to_string()));
    }

    #[test]
    fn other_identifier_looks_up_by_email() {
        let lookup = UserLookup::parse(" kim@example.com ").unwrap();
        assert_eq!(lookup, UserLookup::Email("kim@example.com".to_string()));
        assert_eq!(lookup.column_filter().0, "email");
    }

    #[test]
    fn blank_identifier_is_rejected() {
        assert!(UserLookup::parse("   ").is_err());
    }

    #[test]
    fn profile_requires_email() {
        let id: UserId = RAW_ID.parse().unwrap();
        assert!(UserProfile::new(id, "").is_err());
        let profile = UserProfile::new(id, "kim@example.com")
            .unwrap()
            .with_username("kim");
        assert_eq!(profile.username.as_deref(), Some("kim"));
    }
}
