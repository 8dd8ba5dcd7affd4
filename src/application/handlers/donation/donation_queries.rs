//! Donation query handlers.

use std::sync::Arc;

use crate::domain::donation::DonationRecord;
use crate::domain::foundation::{DomainError, DonationId, ErrorCode};
use crate::ports::DonationRepository;

#[derive(Debug, Clone)]
pub struct GetDonationQuery {
    pub donation_id: String,
}

/// Handler for fetching one donation by provider id.
pub struct GetDonationHandler {
    repository: Arc<dyn DonationRepository>,
}

impl GetDonationHandler {
    pub fn new(repository: Arc<dyn DonationRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetDonationQuery) -> Result<DonationRecord, DomainError> {
        let id = DonationId::new(query.donation_id)?;
        self.repository
            .find_by_id(&id)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::DonationNotFound, "Donation not found"))
    }
}

#[derive(Debug, Clone)]
pub struct ListDonationsQuery {
    pub email: String,
}

/// Handler for a donor's history, newest first.
pub struct ListDonationsHandler {
    repository: Arc<dyn DonationRepository>,
}

impl ListDonationsHandler {
    pub fn new(repository: Arc<dyn DonationRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: ListDonationsQuery) -> Result<Vec<DonationRecord>, DomainError> {
        let email = query.email.trim();
        if email.is_empty() {
            return Err(DomainError::validation("email", "email is required"));
        }
        self.repository.list_by_email(email).await
    }
}
