//! Mock payment provider for testing.
//!
//! Provides a configurable mock implementation of `PaymentProvider` for unit
//! and integration tests. Supports:
//! - Pre-configured raw responses per method
//! - Error injection
//! - Call tracking

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::ports::{CheckoutRequest, PaymentError, PaymentProvider, StkPushRequest};

const STK_PUSH: &str = "mpesa_stk_push";
const CHECKOUT: &str = "create_checkout";

/// Mock payment provider for testing.
///
/// # Example
///
/// ```ignore
/// let mock = MockPaymentProvider::new();
/// mock.push_response("mpesa_stk_push", json!({"invoice_id": "abc123"}));
/// mock.set_method_error("create_checkout", PaymentError::network("down"));
/// ```
#[derive(Default)]
pub struct MockPaymentProvider {
    /// Inner state (thread-safe for async tests).
    inner: Arc<Mutex<MockState>>,
}

#[derive(Default)]
struct MockState {
    /// Queued raw responses by method name.
    responses: HashMap<String, VecDeque<Value>>,

    /// Specific errors by method name.
    method_errors: HashMap<String, PaymentError>,

    /// Track method calls for assertions.
    call_log: Vec<MethodCall>,

    /// Reported by `is_test_mode`.
    live: bool,

    /// Counter for generated ids.
    sequence: u64,
}

/// Recorded method call for assertions.
#[derive(Debug, Clone)]
pub struct MethodCall {
    pub method: String,
    pub args: Vec<String>,
}

impl MockPaymentProvider {
    /// Create a new mock provider in test mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock that reports live mode.
    pub fn live() -> Self {
        let mock = Self::new();
        mock.inner.lock().unwrap().live = true;
        mock
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Configuration Methods
    // ════════════════════════════════════════════════════════════════════════════

    /// Queue a raw response for `method` (`mpesa_stk_push` or `create_checkout`).
    pub fn push_response(&self, method: &str, response: Value) {
        self.inner
            .lock()
            .unwrap()
            .responses
            .entry(method.to_string())
            .or_default()
            .push_back(response);
    }

    /// Set an error for a specific method.
    pub fn set_method_error(&self, method: &str, error: PaymentError) {
        self.inner
            .lock()
            .unwrap()
            .method_errors
            .insert(method.to_string(), error);
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Call Tracking
    // ════════════════════════════════════════════════════════════════════════════

    /// Get all recorded method calls.
    pub fn calls(&self) -> Vec<MethodCall> {
        self.inner.lock().unwrap().call_log.clone()
    }

    /// Get count of calls to a method.
    pub fn call_count(&self, method: &str) -> usize {
        self.inner
            .lock()
            .unwrap()
            .call_log
            .iter()
            .filter(|c| c.method == method)
            .count()
    }

    /// Total calls across all methods.
    pub fn total_calls(&self) -> usize {
        self.inner.lock().unwrap().call_log.len()
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Internal Helpers
    // ════════════════════════════════════════════════════════════════════════════

    fn record_call(&self, method: &str, args: Vec<String>) {
        self.inner.lock().unwrap().call_log.push(MethodCall {
            method: method.to_string(),
            args,
        });
    }

    /// Next queued response, the configured error, or `default(n)`.
    fn respond(&self, method: &str, default: impl FnOnce(u64) -> Value) -> Result<Value, PaymentError> {
        let mut state = self.inner.lock().unwrap();

        if let Some(error) = state.method_errors.get(method) {
            return Err(error.clone());
        }
        if let Some(response) = state.responses.get_mut(method).and_then(VecDeque::pop_front) {
            return Ok(response);
        }

        state.sequence += 1;
        Ok(default(state.sequence))
    }
}

impl Clone for MockPaymentProvider {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

#[async_trait]
impl PaymentProvider for MockPaymentProvider {
    async fn mpesa_stk_push(&self, request: StkPushRequest) -> Result<Value, PaymentError> {
        self.record_call(
            STK_PUSH,
            vec![
                request.phone_number.clone(),
                request.amount.to_string(),
                request.currency.clone(),
                request.api_ref.clone(),
            ],
        );
        self.respond(STK_PUSH, |n| {
            json!({"invoice": {"invoice_id": format!("INV-MOCK-{n}"), "state": "PENDING"}})
        })
    }

    async fn create_checkout(&self, request: CheckoutRequest) -> Result<Value, PaymentError> {
        self.record_call(
            CHECKOUT,
            vec![
                request.email.clone(),
                request.amount.to_string(),
                request.currency.clone(),
                request.api_ref.clone(),
            ],
        );
        self.respond(CHECKOUT, |n| {
            json!({
                "id": format!("CHK-MOCK-{n}"),
                "url": format!("https://sandbox.intasend.com/checkout/CHK-MOCK-{n}/"),
            })
        })
    }

    fn is_test_mode(&self) -> bool {
        !self.inner.lock().unwrap().live
    }
}
