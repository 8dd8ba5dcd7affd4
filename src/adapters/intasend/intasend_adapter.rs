//! IntaSend payment provider adapter.
//!
//! Implements the `PaymentProvider` port against the IntaSend REST API:
//! - M-Pesa STK push (`/api/v1/payment/mpesa-stk-push/`, bearer secret token)
//! - Hosted checkout (`/api/v1/checkout/`, publishable key in the body)
//!
//! # Configuration
//!
//! ```ignore
//! let config = IntaSendConfig::new(Some(secret), Some(publishable), true);
//! let adapter = IntaSendPaymentAdapter::new(config)?;
//! ```

use async_trait::async_trait;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use secrecy::{ExposeSecret, SecretString};
use serde_json::{json, Value};
use std::time::Duration;

use crate::ports::{
    CheckoutRequest, PaymentError, PaymentErrorCode, PaymentProvider, StkPushRequest,
};

const SANDBOX_BASE_URL: &str = "https://sandbox.intasend.com";
const LIVE_BASE_URL: &str = "https://payment.intasend.com";
const STK_PUSH_PATH: &str = "/api/v1/payment/mpesa-stk-push/";
const CHECKOUT_PATH: &str = "/api/v1/checkout/";

/// IntaSend API configuration.
///
/// Missing tokens are allowed; calls needing them fail with an
/// authentication error before any request is sent.
#[derive(Clone)]
pub struct IntaSendConfig {
    secret_token: Option<SecretString>,
    publishable_key: Option<SecretString>,
    api_base_url: String,
    test_mode: bool,
    timeout: Duration,
}

impl IntaSendConfig {
    pub fn new(
        secret_token: Option<SecretString>,
        publishable_key: Option<SecretString>,
        test_mode: bool,
    ) -> Self {
        let api_base_url = if test_mode {
            SANDBOX_BASE_URL
        } else {
            LIVE_BASE_URL
        };
        Self {
            secret_token,
            publishable_key,
            api_base_url: api_base_url.to_string(),
            test_mode,
            timeout: Duration::from_secs(45),
        }
    }

    /// Set a custom API base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn has_credentials(&self) -> bool {
        self.secret_token.is_some() && self.publishable_key.is_some()
    }
}

/// IntaSend payment provider adapter.
pub struct IntaSendPaymentAdapter {
    config: IntaSendConfig,
    http_client: reqwest::Client,
}

impl IntaSendPaymentAdapter {
    pub fn new(config: IntaSendConfig) -> Result<Self, PaymentError> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| PaymentError::network(format!("Failed to create HTTP client: {e}")))?;
        Ok(Self {
            config,
            http_client,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.api_base_url, path)
    }

    async fn post_json(
        &self,
        path: &str,
        body: &Value,
        bearer: Option<&SecretString>,
    ) -> Result<Value, PaymentError> {
        let mut request = self.http_client.post(self.url(path)).json(body);
        if let Some(token) = bearer {
            request = request.bearer_auth(token.expose_secret());
        }

        let response = request.send().await.map_err(|e| {
            tracing::error!(error = %e, path, "IntaSend request failed");
            PaymentError::network(e.to_string())
        })?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| PaymentError::network(e.to_string()))?;

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), path, "IntaSend API error");
            return Err(status_error(status.as_u16(), &text));
        }

        serde_json::from_str(&text).map_err(|e| {
            PaymentError::malformed(format!("Failed to parse IntaSend response: {e}"))
        })
    }
}

fn status_error(status: u16, body: &str) -> PaymentError {
    let code = match status {
        401 | 403 => PaymentErrorCode::AuthenticationError,
        429 => PaymentErrorCode::RateLimitExceeded,
        _ => PaymentErrorCode::ProviderError,
    };
    PaymentError::new(code, format!("IntaSend API error: {body}"))
        .with_provider_code(status.to_string())
}

/// JSON number for `amount`, or its string form if it has no f64 image.
fn amount_json(amount: Decimal) -> Value {
    amount
        .to_f64()
        .and_then(serde_json::Number::from_f64)
        .map(Value::Number)
        .unwrap_or_else(|| Value::String(amount.to_string()))
}

#[async_trait]
impl PaymentProvider for IntaSendPaymentAdapter {
    async fn mpesa_stk_push(&self, request: StkPushRequest) -> Result<Value, PaymentError> {
        let token = self.config.secret_token.as_ref().ok_or_else(|| {
            PaymentError::authentication("IntaSend secret token is not configured")
        })?;

        let body = json!({
            "amount": amount_json(request.amount),
            "phone_number": request.phone_number,
            "currency": request.currency,
            "api_ref": request.api_ref,
            "email": request.email,
            "narrative": request.narrative,
        });

        self.post_json(STK_PUSH_PATH, &body, Some(token)).await
    }

    async fn create_checkout(&self, request: CheckoutRequest) -> Result<Value, PaymentError> {
        let public_key = self.config.publishable_key.as_ref().ok_or_else(|| {
            PaymentError::authentication("IntaSend publishable key is not configured")
        })?;

        let mut body = json!({
            "public_key": public_key.expose_secret(),
            "amount": amount_json(request.amount),
            "currency": request.currency,
            "email": request.email,
            "api_ref": request.api_ref,
        });
        if let Some(comment) = request.comment {
            body["comment"] = Value::String(comment);
        }

        self.post_json(CHECKOUT_PATH, &body, None).await
    }

    fn is_test_mode(&self) -> bool {
        self.config.test_mode
    }
}
