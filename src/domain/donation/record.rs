//! Persisted donation record.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::request::ValidatedDonation;
use super::status::{DonationMethod, DonationStatus};
use crate::domain::foundation::{DonationId, Timestamp};

/// A donation as stored. Created `Pending` on initiation; afterwards only
/// the webhook path changes `status` (and possibly `currency`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonationRecord {
    pub id: DonationId,
    pub email: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub currency: String,
    pub method: DonationMethod,
    pub status: DonationStatus,
    pub api_ref: String,
    pub created_at: Timestamp,
}

impl DonationRecord {
    /// New record for a donation the provider just accepted.
    pub fn pending(id: DonationId, donation: &ValidatedDonation, api_ref: String) -> Self {
        Self {
            id,
            email: donation.email.clone(),
            amount: donation.amount,
            currency: donation.currency.clone(),
            method: donation.method,
            status: DonationStatus::Pending,
            api_ref,
            created_at: Timestamp::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::donation::DonationRequest;
    use serde_json::json;
    use std::str::FromStr;

    fn stk_donation() -> ValidatedDonation {
        DonationRequest::stk_push("a@b.co", "254712345678", Decimal::from_str("10.5").unwrap())
            .validate()
            .unwrap()
    }

    #[test]
    fn pending_record_copies_donation_fields() {
        let record = DonationRecord::pending(
            DonationId::new("abc123").unwrap(),
            &stk_donation(),
            "don-a-1050".to_string(),
        );
        assert_eq!(record.id.as_str(), "abc123");
        assert_eq!(record.status, DonationStatus::Pending);
        assert_eq!(record.currency, "KES");
        assert_eq!(record.method, DonationMethod::MpesaStk);
    }

    #[test]
    fn serializes_to_store_row_shape() {
        let record = DonationRecord::pending(
            DonationId::new("abc123").unwrap(),
            &stk_donation(),
            "don-a-1050".to_string(),
        );
        let row = serde_json::to_value(&record).unwrap();
        assert_eq!(row["id"], "abc123");
        assert_eq!(row["amount"], json!(10.5));
        assert_eq!(row["method"], "MPESA_STK");
        assert_eq!(row["status"], "PENDING");
        assert!(row["created_at"].is_string());
    }

    #[test]
    fn deserializes_store_row_with_unknown_status() {
        let row = json!({
            "id": "INV-9",
            "email": "a@b.co",
            "amount": 25,
            "currency": "USD",
            "method": "CHECKOUT",
            "status": "REVERSED",
            "api_ref": "don-a-usd-2500",
            "created_at": "2024-05-01T10:00:00+00:00"
        });
        let record: DonationRecord = serde_json::from_value(row).unwrap();
        assert_eq!(record.amount, Decimal::from(25));
        assert_eq!(record.status, DonationStatus::Other("REVERSED".to_string()));
    }
}
