//! Liveness endpoint.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::ports::PaymentProvider;

pub const SERVICE_NAME: &str = "QubitLearn Backend";

#[derive(Clone)]
pub struct HealthState {
    pub payment_provider: Arc<dyn PaymentProvider>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub intasend_test_mode: bool,
}

/// GET /health
pub async fn health(State(state): State<HealthState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: SERVICE_NAME,
        intasend_test_mode: state.payment_provider.is_test_mode(),
    })
}

pub fn health_router() -> Router<HealthState> {
    Router::new().route("/health", get(health))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::adapters::intasend::MockPaymentProvider;

    #[tokio::test]
    async fn reports_payment_mode() {
        let app = health_router().with_state(HealthState {
            payment_provider: Arc::new(MockPaymentProvider::new()),
        });

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            body,
            json!({"status": "ok", "service": "QubitLearn Backend", "intasend_test_mode": true})
        );
    }
}
