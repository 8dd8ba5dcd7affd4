//! HTTP handlers for donation endpoints.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, Path, Query, State};
use axum::response::IntoResponse;
use secrecy::SecretString;

use crate::application::handlers::donation::{
    DonationWebhookOutcome, GetDonationHandler, GetDonationQuery, HandleDonationWebhookCommand,
    HandleDonationWebhookHandler, InitiateCheckoutCommand, InitiateCheckoutHandler,
    InitiateStkPushCommand, InitiateStkPushHandler, ListDonationsHandler, ListDonationsQuery,
};
use crate::ports::{DonationRepository, PaymentProvider};

use super::dto::{
    CheckoutDonationRequest, CheckoutDonationResponse, DonationResponse, ListDonationsParams,
    StkPushDonationRequest, StkPushDonationResponse, WebhookAck,
};
use crate::adapters::http::error::ApiError;

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Dependencies for the donation endpoints.
#[derive(Clone)]
pub struct DonationAppState {
    pub payment_provider: Arc<dyn PaymentProvider>,
    pub donation_repository: Arc<dyn DonationRepository>,
    pub webhook_challenge: Option<SecretString>,
}

impl DonationAppState {
    pub fn new(
        payment_provider: Arc<dyn PaymentProvider>,
        donation_repository: Arc<dyn DonationRepository>,
    ) -> Self {
        Self {
            payment_provider,
            donation_repository,
            webhook_challenge: None,
        }
    }

    pub fn with_webhook_challenge(mut self, challenge: Option<SecretString>) -> Self {
        self.webhook_challenge = challenge;
        self
    }

    pub fn stk_push_handler(&self) -> InitiateStkPushHandler {
        InitiateStkPushHandler::new(
            self.payment_provider.clone(),
            self.donation_repository.clone(),
        )
    }

    pub fn checkout_handler(&self) -> InitiateCheckoutHandler {
        InitiateCheckoutHandler::new(
            self.payment_provider.clone(),
            self.donation_repository.clone(),
        )
    }

    pub fn webhook_handler(&self) -> HandleDonationWebhookHandler {
        let handler = HandleDonationWebhookHandler::new(self.donation_repository.clone());
        match &self.webhook_challenge {
            Some(challenge) => handler.with_challenge(challenge.clone()),
            None => handler,
        }
    }

    pub fn get_donation_handler(&self) -> GetDonationHandler {
        GetDonationHandler::new(self.donation_repository.clone())
    }

    pub fn list_donations_handler(&self) -> ListDonationsHandler {
        ListDonationsHandler::new(self.donation_repository.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Command Handlers (POST endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// POST /donate/mpesa-stk
pub async fn initiate_stk_push(
    State(state): State<DonationAppState>,
    payload: Result<Json<StkPushDonationRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = payload?;
    let cmd = InitiateStkPushCommand {
        email: request.email,
        phone: request.phone,
        amount: request.amount,
        currency: request.currency,
        note: request.note,
    };

    let result = state.stk_push_handler().handle(cmd).await?;
    Ok(Json(StkPushDonationResponse::from(result)))
}

/// POST /donate/checkout
pub async fn initiate_checkout(
    State(state): State<DonationAppState>,
    payload: Result<Json<CheckoutDonationRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = payload?;
    let cmd = InitiateCheckoutCommand {
        email: request.email,
        amount: request.amount,
        currency: request.currency,
        note: request.note,
    };

    let result = state.checkout_handler().handle(cmd).await?;
    Ok(Json(CheckoutDonationResponse::from(result)))
}

/// POST /webhook/intasend
///
/// Always acknowledged so the provider does not retry; failures are logged.
pub async fn intasend_webhook(
    State(state): State<DonationAppState>,
    body: Bytes,
) -> impl IntoResponse {
    let cmd = HandleDonationWebhookCommand {
        payload: body.to_vec(),
    };

    match state.webhook_handler().handle(cmd).await {
        Ok(DonationWebhookOutcome::Ignored { reason }) => {
            tracing::debug!(reason = %reason, "Webhook ignored");
        }
        Ok(_) => {}
        Err(err) => {
            tracing::error!(error = %err, "Failed to apply donation webhook");
        }
    }

    Json(WebhookAck { ok: true })
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Handlers (GET endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// GET /donations/:id
pub async fn get_donation(
    State(state): State<DonationAppState>,
    Path(donation_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let record = state
        .get_donation_handler()
        .handle(GetDonationQuery { donation_id })
        .await?;
    Ok(Json(DonationResponse::from(record)))
}

/// GET /donations?email=
pub async fn list_donations(
    State(state): State<DonationAppState>,
    Query(params): Query<ListDonationsParams>,
) -> Result<impl IntoResponse, ApiError> {
    let records = state
        .list_donations_handler()
        .handle(ListDonationsQuery {
            email: params.email,
        })
        .await?;
    let response: Vec<DonationResponse> = records.into_iter().map(DonationResponse::from).collect();
    Ok(Json(response))
}
