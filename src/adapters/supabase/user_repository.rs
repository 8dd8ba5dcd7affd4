//! TableStore-backed implementation of UserRepository.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::user::{UserLookup, UserProfile};
use crate::ports::{Filter, SelectQuery, TableStore, UserRepository};

pub const USERS_TABLE: &str = "users";

pub struct StoreUserRepository {
    store: Arc<dyn TableStore>,
}

impl StoreUserRepository {
    pub fn new(store: Arc<dyn TableStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UserRepository for StoreUserRepository {
    async fn save_if_absent(&self, profile: &UserProfile) -> Result<bool, DomainError> {
        if self.find(&UserLookup::Id(profile.id)).await?.is_some() {
            return Ok(false);
        }

        let row = match serde_json::to_value(profile) {
            Ok(Value::Object(row)) => row,
            _ => return Err(DomainError::database("Failed to serialize user profile")),
        };
        self.store.insert(USERS_TABLE, vec![row]).await?;
        Ok(true)
    }

    async fn find(&self, lookup: &UserLookup) -> Result<Option<UserProfile>, DomainError> {
        let (column, value) = lookup.column_filter();
        let query = SelectQuery::new().filter(Filter::eq(column, value)).limit(1);
        let rows = self.store.select(USERS_TABLE, query).await?;

        rows.into_iter()
            .next()
            .map(|row| {
                serde_json::from_value(Value::Object(row))
                    .map_err(|e| DomainError::database(format!("Invalid user row: {e}")))
            })
            .transpose()
    }
}
