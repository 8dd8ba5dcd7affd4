//! Donation repository port.
//!
//! Records are created once on initiation and afterwards only have their
//! status (and optionally currency) changed. Nothing is deleted.

use async_trait::async_trait;

use crate::domain::donation::{DonationRecord, DonationStatus};
use crate::domain::foundation::{DomainError, DonationId};

#[async_trait]
pub trait DonationRepository: Send + Sync {
    /// Save a newly initiated donation.
    async fn save(&self, record: &DonationRecord) -> Result<(), DomainError>;

    /// Set the status (and currency, when given) of a donation.
    ///
    /// Returns `false` when no record has that id.
    async fn update_status(
        &self,
        id: &DonationId,
        status: &DonationStatus,
        currency: Option<&str>,
    ) -> Result<bool, DomainError>;

    /// Find a donation by its provider id.
    async fn find_by_id(&self, id: &DonationId) -> Result<Option<DonationRecord>, DomainError>;

    /// All donations by `email`, newest first.
    async fn list_by_email(&self, email: &str) -> Result<Vec<DonationRecord>, DomainError>;
}
