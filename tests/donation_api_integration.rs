//! Integration tests for the donation endpoints through the full API router.
//!
//! These tests verify:
//! 1. STK push and checkout records are stored as PENDING
//! 2. Only challenge-bearing webhooks settle a donation
//! 3. Provider failures leave nothing behind

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use secrecy::SecretString;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use qubitlearn::adapters::ai::MockTextGenerationProvider;
use qubitlearn::adapters::credentials::CredentialResolver;
use qubitlearn::adapters::http::{
    api_router, ApiState, DonationAppState, FlashcardAppState, StudyAppState, UserAppState,
};
use qubitlearn::adapters::intasend::MockPaymentProvider;
use qubitlearn::adapters::supabase::{
    InMemoryTableStore, StoreDonationRepository, StoreFlashcardRepository, StoreUserRepository,
    DONATIONS_TABLE,
};
use qubitlearn::application::handlers::inference::InferenceGateway;
use qubitlearn::ports::{PaymentError, PaymentErrorCode};

// =============================================================================
// Test Infrastructure
// =============================================================================

const CHALLENGE: &str = "whsec-test";

fn app(payments: &MockPaymentProvider, store: &InMemoryTableStore) -> Router {
    let store = Arc::new(store.clone());
    let gateway = Arc::new(InferenceGateway::new(
        Arc::new(CredentialResolver::new()),
        Arc::new(MockTextGenerationProvider::new()),
    ));

    api_router(ApiState {
        study: StudyAppState::new(gateway, "fallback/model"),
        donation: DonationAppState::new(
            Arc::new(payments.clone()),
            Arc::new(StoreDonationRepository::new(store.clone())),
        )
        .with_webhook_challenge(Some(SecretString::new(CHALLENGE.to_string()))),
        flashcard: FlashcardAppState::new(Arc::new(StoreFlashcardRepository::new(store.clone()))),
        user: UserAppState::new(Arc::new(StoreUserRepository::new(store))),
    })
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// =============================================================================
// Webhook settlement
// =============================================================================

#[tokio::test]
async fn webhook_without_challenge_does_not_settle() {
    let payments = MockPaymentProvider::new();
    let store = InMemoryTableStore::new();
    let app = app(&payments, &store);

    let push = app
        .clone()
        .oneshot(post_json(
            "/donate/mpesa-stk",
            json!({"email": "ada@example.com", "phone": "254712345678", "amount": 100}),
        ))
        .await
        .unwrap();
    let donation_id = json_body(push).await["donation_id"]
        .as_str()
        .unwrap()
        .to_string();
    assert_eq!(donation_id, "INV-MOCK-1");

    let forged = app
        .clone()
        .oneshot(post_json(
            "/webhook/intasend",
            json!({"invoice_id": donation_id, "state": "COMPLETE", "challenge": "wrong"}),
        ))
        .await
        .unwrap();
    assert_eq!(forged.status(), StatusCode::OK);
    assert_eq!(json_body(forged).await, json!({"ok": true}));

    let pending = app
        .clone()
        .oneshot(get(&format!("/donations/{donation_id}")))
        .await
        .unwrap();
    assert_eq!(json_body(pending).await["status"], "PENDING");

    app.clone()
        .oneshot(post_json(
            "/webhook/intasend",
            json!({"invoice_id": donation_id, "state": "FAILED", "challenge": CHALLENGE}),
        ))
        .await
        .unwrap();

    let settled = app
        .oneshot(get(&format!("/donations/{donation_id}")))
        .await
        .unwrap();
    let body = json_body(settled).await;
    assert_eq!(body["status"], "FAILED");
    assert_eq!(body["method"], "MPESA_STK");
}

#[tokio::test]
async fn checkout_records_requested_currency() {
    let payments = MockPaymentProvider::new();
    let store = InMemoryTableStore::new();

    let response = app(&payments, &store)
        .oneshot(post_json(
            "/donate/checkout",
            json!({"email": "ada@example.com", "amount": 12.5, "currency": "usd"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let rows = store.rows(DONATIONS_TABLE);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["currency"], "USD");
    assert_eq!(rows[0]["status"], "PENDING");
    assert_eq!(payments.calls()[0].args[2], "USD");
}

#[tokio::test]
async fn provider_rejection_stores_nothing() {
    let payments = MockPaymentProvider::new();
    payments.set_method_error(
        "mpesa_stk_push",
        PaymentError::new(PaymentErrorCode::ProviderError, "Insufficient float"),
    );
    let store = InMemoryTableStore::new();

    let response = app(&payments, &store)
        .oneshot(post_json(
            "/donate/mpesa-stk",
            json!({"email": "ada@example.com", "phone": "254712345678", "amount": 100}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["code"], "PROVIDER_ERROR");
    assert!(store.rows(DONATIONS_TABLE).is_empty());
}

#[tokio::test]
async fn listing_requires_an_email() {
    let response = app(&MockPaymentProvider::new(), &InMemoryTableStore::new())
        .oneshot(get("/donations"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
