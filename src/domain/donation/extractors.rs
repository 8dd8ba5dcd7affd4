//! Ordered field extractors over heterogeneous provider responses.
//!
//! Each extractor reads one location; lists are tried in order and the
//! first non-empty value wins. Numeric ids are rendered as strings.

use serde_json::Value;

/// Reads one optional string from a provider payload.
pub type FieldExtractor = fn(&Value) -> Option<String>;

/// Donation id locations in an STK-push response.
pub const STK_PUSH_ID: &[FieldExtractor] =
    &[invoice_id, id, payment_id, tracking_id, nested_invoice_id];

/// Donation id locations in a checkout response.
pub const CHECKOUT_ID: &[FieldExtractor] = &[id, invoice_id, nested_invoice_id];

/// Payment page locations in a checkout response.
pub const CHECKOUT_URL: &[FieldExtractor] = &[url, checkout_url];

/// Donation id locations in a webhook payload.
pub const WEBHOOK_ID: &[FieldExtractor] = &[id, invoice_id];

/// Status locations in a webhook payload; IntaSend sends `state`.
pub const WEBHOOK_STATUS: &[FieldExtractor] = &[status, state];

/// Runs `extractors` in order and returns the first hit.
pub fn first_match(payload: &Value, extractors: &[FieldExtractor]) -> Option<String> {
    extractors.iter().find_map(|extract| extract(payload))
}

fn scalar(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

pub fn invoice_id(payload: &Value) -> Option<String> {
    scalar(payload.get("invoice_id"))
}

pub fn id(payload: &Value) -> Option<String> {
    scalar(payload.get("id"))
}

pub fn payment_id(payload: &Value) -> Option<String> {
    scalar(payload.get("payment_id"))
}

pub fn tracking_id(payload: &Value) -> Option<String> {
    scalar(payload.get("tracking_id"))
}

pub fn nested_invoice_id(payload: &Value) -> Option<String> {
    scalar(payload.get("invoice").and_then(|inv| inv.get("invoice_id")))
}

pub fn url(payload: &Value) -> Option<String> {
    scalar(payload.get("url"))
}

pub fn checkout_url(payload: &Value) -> Option<String> {
    scalar(payload.get("checkout_url"))
}

pub fn status(payload: &Value) -> Option<String> {
    scalar(payload.get("status"))
}

pub fn state(payload: &Value) -> Option<String> {
    scalar(payload.get("state"))
}

pub fn currency(payload: &Value) -> Option<String> {
    scalar(payload.get("currency"))
}

pub fn challenge(payload: &Value) -> Option<String> {
    scalar(payload.get("challenge"))
}
