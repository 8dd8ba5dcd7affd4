//! Request and response types for the donation endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::application::handlers::donation::{InitiateCheckoutResult, InitiateStkPushResult};
use crate::domain::donation::{DonationMethod, DonationRecord, DonationStatus};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Body for `POST /donate/mpesa-stk`.
#[derive(Debug, Clone, Deserialize)]
pub struct StkPushDonationRequest {
    pub email: String,
    pub phone: String,
    pub amount: Decimal,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
}

/// Body for `POST /donate/checkout`.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutDonationRequest {
    pub email: String,
    pub amount: Decimal,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
}

/// Query string for `GET /donations`.
#[derive(Debug, Clone, Deserialize)]
pub struct ListDonationsParams {
    #[serde(default)]
    pub email: String,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
pub struct StkPushDonationResponse {
    pub donation_id: String,
    pub message: String,
}

impl From<InitiateStkPushResult> for StkPushDonationResponse {
    fn from(result: InitiateStkPushResult) -> Self {
        Self {
            donation_id: result.donation_id.to_string(),
            message: result.message,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckoutDonationResponse {
    pub donation_id: String,
    pub checkout_url: String,
}

impl From<InitiateCheckoutResult> for CheckoutDonationResponse {
    fn from(result: InitiateCheckoutResult) -> Self {
        Self {
            donation_id: result.donation_id.to_string(),
            checkout_url: result.checkout_url,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DonationResponse {
    pub id: String,
    pub email: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub currency: String,
    pub method: DonationMethod,
    pub status: DonationStatus,
    pub api_ref: String,
    /// ISO 8601.
    pub created_at: String,
}

impl From<DonationRecord> for DonationResponse {
    fn from(record: DonationRecord) -> Self {
        Self {
            id: record.id.to_string(),
            email: record.email,
            amount: record.amount,
            currency: record.currency,
            method: record.method,
            status: record.status,
            api_ref: record.api_ref,
            created_at: record.created_at.as_datetime().to_rfc3339(),
        }
    }
}

/// Webhook acknowledgement; always `{"ok": true}`.
#[derive(Debug, Clone, Serialize)]
pub struct WebhookAck {
    pub ok: bool,
}
