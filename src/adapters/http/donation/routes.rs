//! Axum router configuration for donation endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    get_donation, initiate_checkout, initiate_stk_push, intasend_webhook, list_donations,
    DonationAppState,
};

/// Create the donation API router.
///
/// # Routes
/// - `POST /donate/mpesa-stk` - Push an M-Pesa PIN prompt
/// - `POST /donate/checkout` - Create a hosted checkout page
/// - `GET /donations/:id` - Fetch one donation
/// - `GET /donations?email=` - A donor's donations, newest first
///
/// ## Webhook Endpoints (no auth, optional challenge)
/// - `POST /webhook/intasend` - Provider status callbacks
pub fn donation_router() -> Router<DonationAppState> {
    Router::new()
        .route("/donate/mpesa-stk", post(initiate_stk_push))
        .route("/donate/checkout", post(initiate_checkout))
        .route("/donations", get(list_donations))
        .route("/donations/:id", get(get_donation))
        .route("/webhook/intasend", post(intasend_webhook))
}
