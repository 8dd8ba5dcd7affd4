//! Donation status and payment method.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Provider-reported donation state.
///
/// Stored as the provider's upper-case string. Values outside the known set
/// are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DonationStatus {
    /// Written on initiation; never written by the webhook path.
    Pending,
    Processing,
    Completed,
    Failed,
    Other(String),
}

impl DonationStatus {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_uppercase().as_str() {
            "PENDING" => DonationStatus::Pending,
            "PROCESSING" => DonationStatus::Processing,
            "COMPLETE" | "COMPLETED" => DonationStatus::Completed,
            "FAILED" => DonationStatus::Failed,
            _ => DonationStatus::Other(raw.trim().to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            DonationStatus::Pending => "PENDING",
            DonationStatus::Processing => "PROCESSING",
            DonationStatus::Completed => "COMPLETED",
            DonationStatus::Failed => "FAILED",
            DonationStatus::Other(raw) => raw,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, DonationStatus::Completed | DonationStatus::Failed)
    }
}

impl From<String> for DonationStatus {
    fn from(raw: String) -> Self {
        DonationStatus::parse(&raw)
    }
}

impl From<DonationStatus> for String {
    fn from(status: DonationStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for DonationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How the donor pays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DonationMethod {
    /// Mobile-money prompt pushed to the donor's phone.
    #[serde(rename = "MPESA_STK")]
    MpesaStk,
    /// Provider-hosted payment page.
    #[serde(rename = "CHECKOUT")]
    HostedCheckout,
}

impl DonationMethod {
    /// Currency used when the donor does not name one.
    pub fn default_currency(&self) -> &'static str {
        match self {
            DonationMethod::MpesaStk => "KES",
            DonationMethod::HostedCheckout => "USD",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_spellings_are_normalized() {
        assert_eq!(DonationStatus::parse("complete"), DonationStatus::Completed);
        assert_eq!(DonationStatus::parse("COMPLETED"), DonationStatus::Completed);
        assert_eq!(DonationStatus::parse(" failed "), DonationStatus::Failed);
        assert_eq!(
            DonationStatus::parse("RETRY"),
            DonationStatus::Other("RETRY".to_string())
        );
    }

    #[test]
    fn status_round_trips_through_json_string() {
        let json = serde_json::to_string(&DonationStatus::Pending).unwrap();
        assert_eq!(json, "\"PENDING\"");
        let parsed: DonationStatus = serde_json::from_str("\"PROCESSING\"").unwrap();
        assert_eq!(parsed, DonationStatus::Processing);
    }

    #[test]
    fn only_completed_and_failed_are_terminal() {
        assert!(DonationStatus::Completed.is_terminal());
        assert!(DonationStatus::Failed.is_terminal());
        assert!(!DonationStatus::Pending.is_terminal());
        assert!(!DonationStatus::Other("HOLD".into()).is_terminal());
    }

    #[test]
    fn method_serializes_as_provider_name() {
        assert_eq!(
            serde_json::to_string(&DonationMethod::MpesaStk).unwrap(),
            "\"MPESA_STK\""
        );
        assert_eq!(
            serde_json::to_string(&DonationMethod::HostedCheckout).unwrap(),
            "\"CHECKOUT\""
        );
    }

    #[test]
    fn default_currency_depends_on_method() {
        assert_eq!(DonationMethod::MpesaStk.default_currency(), "KES");
        assert_eq!(DonationMethod::HostedCheckout.default_currency(), "USD");
    }
}
