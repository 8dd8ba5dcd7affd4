//! TableStore-backed implementation of DonationRepository.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

use crate::domain::donation::{DonationRecord, DonationStatus};
use crate::domain::foundation::{DomainError, DonationId};
use crate::ports::{DonationRepository, Filter, Row, SelectQuery, TableStore};

pub const DONATIONS_TABLE: &str = "donations";

pub struct StoreDonationRepository {
    store: Arc<dyn TableStore>,
}

impl StoreDonationRepository {
    pub fn new(store: Arc<dyn TableStore>) -> Self {
        Self { store }
    }
}

fn to_row(record: &DonationRecord) -> Result<Row, DomainError> {
    match serde_json::to_value(record) {
        Ok(Value::Object(row)) => Ok(row),
        Ok(_) => Err(DomainError::database("Donation did not serialize to a row")),
        Err(e) => Err(DomainError::database(format!("Failed to serialize donation: {e}"))),
    }
}

fn from_row(row: Row) -> Result<DonationRecord, DomainError> {
    serde_json::from_value(Value::Object(row))
        .map_err(|e| DomainError::database(format!("Invalid donation row: {e}")))
}

#[async_trait]
impl DonationRepository for StoreDonationRepository {
    async fn save(&self, record: &DonationRecord) -> Result<(), DomainError> {
        self.store
            .insert(DONATIONS_TABLE, vec![to_row(record)?])
            .await?;
        Ok(())
    }

    async fn update_status(
        &self,
        id: &DonationId,
        status: &DonationStatus,
        currency: Option<&str>,
    ) -> Result<bool, DomainError> {
        let mut changes = Row::new();
        changes.insert("status".to_string(), Value::from(status.as_str()));
        if let Some(currency) = currency {
            changes.insert("currency".to_string(), Value::from(currency));
        }

        let updated = self
            .store
            .update(DONATIONS_TABLE, Filter::eq("id", id.as_str()), changes)
            .await?;
        Ok(!updated.is_empty())
    }

    async fn find_by_id(&self, id: &DonationId) -> Result<Option<DonationRecord>, DomainError> {
        let query = SelectQuery::new().filter(Filter::eq("id", id.as_str())).limit(1);
        let rows = self.store.select(DONATIONS_TABLE, query).await?;
        rows.into_iter().next().map(from_row).transpose()
    }

    async fn list_by_email(&self, email: &str) -> Result<Vec<DonationRecord>, DomainError> {
        let query = SelectQuery::new()
            .filter(Filter::eq("email", email))
            .order_desc("created_at");
        let rows = self.store.select(DONATIONS_TABLE, query).await?;
        rows.into_iter().map(from_row).collect()
    }
}
