//! Payment provider port for the donation flows.
//!
//! Defines the contract for the payment aggregator (IntaSend). Responses are
//! returned as raw JSON because their shape varies between endpoints and API
//! versions; callers pull fields out with the ordered extractors in
//! [`crate::domain::donation::extractors`].

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::foundation::{DomainError, ValidationError};

/// Port for payment aggregator integrations.
#[async_trait]
pub trait PaymentProvider: Send + Sync {
    /// Push a mobile-money PIN prompt to the payer's phone.
    async fn mpesa_stk_push(&self, request: StkPushRequest) -> Result<Value, PaymentError>;

    /// Create a provider-hosted checkout page.
    async fn create_checkout(&self, request: CheckoutRequest) -> Result<Value, PaymentError>;

    /// Whether calls go to the provider's sandbox.
    fn is_test_mode(&self) -> bool;
}

/// Request for an STK push.
#[derive(Debug, Clone, PartialEq)]
pub struct StkPushRequest {
    pub amount: Decimal,
    /// MSISDN, `2547XXXXXXXX`.
    pub phone_number: String,
    pub currency: String,
    pub api_ref: String,
    pub email: String,
    pub narrative: String,
}

/// Request for a hosted checkout.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutRequest {
    pub amount: Decimal,
    pub currency: String,
    pub email: String,
    pub api_ref: String,
    pub comment: Option<String>,
}

/// Errors from payment provider operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentError {
    /// Error code for categorization.
    pub code: PaymentErrorCode,

    /// Human-readable message.
    pub message: String,

    /// Provider's error code (if available).
    pub provider_code: Option<String>,

    /// Whether the operation can be retried.
    pub retryable: bool,
}

impl PaymentError {
    /// Create a new payment error.
    pub fn new(code: PaymentErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            provider_code: None,
            retryable: code.is_retryable(),
        }
    }

    /// Create with provider code.
    pub fn with_provider_code(mut self, code: impl Into<String>) -> Self {
        self.provider_code = Some(code.into());
        self
    }

    /// Caller input failed a precondition; nothing was sent.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(PaymentErrorCode::ValidationFailed, message)
    }

    /// A successful response lacked a required field.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::new(PaymentErrorCode::ProviderResponseMalformed, message)
    }

    /// Create a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::new(PaymentErrorCode::NetworkError, message)
    }

    /// Create an authentication error.
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::new(PaymentErrorCode::AuthenticationError, message)
    }

    /// Provider rejected the request.
    pub fn provider(message: impl Into<String>) -> Self {
        Self::new(PaymentErrorCode::ProviderError, message)
    }

    /// The provider accepted the payment but the record could not be saved.
    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(PaymentErrorCode::StorageError, message)
    }
}

impl std::fmt::Display for PaymentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for PaymentError {}

impl From<ValidationError> for PaymentError {
    fn from(err: ValidationError) -> Self {
        PaymentError::validation(err.to_string())
    }
}

impl From<DomainError> for PaymentError {
    fn from(err: DomainError) -> Self {
        PaymentError::storage(err.message)
    }
}

/// Payment error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentErrorCode {
    /// Caller input failed validation.
    ValidationFailed,

    /// Required field absent from a nominally successful response.
    ProviderResponseMalformed,

    /// Network connectivity issue.
    NetworkError,

    /// API authentication failed or credentials are not configured.
    AuthenticationError,

    /// Rate limit exceeded.
    RateLimitExceeded,

    /// Provider API error.
    ProviderError,

    /// Persisting the donation record failed.
    StorageError,
}

impl PaymentErrorCode {
    /// Check if this error type is typically retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            PaymentErrorCode::NetworkError | PaymentErrorCode::RateLimitExceeded
        )
    }
}

impl std::fmt::Display for PaymentErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            PaymentErrorCode::ValidationFailed => "validation_failed",
            PaymentErrorCode::ProviderResponseMalformed => "provider_response_malformed",
            PaymentErrorCode::NetworkError => "network_error",
            PaymentErrorCode::AuthenticationError => "authentication_error",
            PaymentErrorCode::RateLimitExceeded => "rate_limit_exceeded",
            PaymentErrorCode::ProviderError => "provider_error",
            PaymentErrorCode::StorageError => "storage_error",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;

    // Trait object safety test
    #[test]
    fn payment_provider_is_object_safe() {
        fn _accepts_dyn(_provider: &dyn PaymentProvider) {}
    }

    #[test]
    fn payment_error_retryable() {
        assert!(PaymentErrorCode::NetworkError.is_retryable());
        assert!(PaymentErrorCode::RateLimitExceeded.is_retryable());

        assert!(!PaymentErrorCode::ValidationFailed.is_retryable());
        assert!(!PaymentErrorCode::ProviderResponseMalformed.is_retryable());
        assert!(PaymentError::network("reset").retryable);
    }

    #[test]
    fn payment_error_display() {
        let err = PaymentError::malformed("missing invoice_id");
        assert_eq!(err.to_string(), "provider_response_malformed: missing invoice_id");
    }

    #[test]
    fn validation_error_converts() {
        let err: PaymentError = ValidationError::not_positive("amount").into();
        assert_eq!(err.code, PaymentErrorCode::ValidationFailed);
        assert_eq!(err.message, "amount must be greater than zero");
    }

    #[test]
    fn domain_error_converts_to_storage_error() {
        let err: PaymentError =
            DomainError::new(ErrorCode::DatabaseError, "connection refused").into();
        assert_eq!(err.code, PaymentErrorCode::StorageError);
        assert_eq!(err.message, "connection refused");
    }
}
