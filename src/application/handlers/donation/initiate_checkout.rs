//! InitiateCheckoutHandler - Command handler for hosted-checkout donations.

use rust_decimal::Decimal;
use std::sync::Arc;

use crate::domain::donation::extractors::{first_match, CHECKOUT_ID, CHECKOUT_URL};
use crate::domain::donation::{checkout_api_ref, DonationRecord, DonationRequest};
use crate::domain::foundation::DonationId;
use crate::ports::{CheckoutRequest, DonationRepository, PaymentError, PaymentProvider};

#[derive(Debug, Clone)]
pub struct InitiateCheckoutCommand {
    pub email: String,
    pub amount: Decimal,
    pub currency: Option<String>,
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InitiateCheckoutResult {
    pub donation_id: DonationId,
    pub checkout_url: String,
}

pub struct InitiateCheckoutHandler {
    provider: Arc<dyn PaymentProvider>,
    repository: Arc<dyn DonationRepository>,
}

impl InitiateCheckoutHandler {
    pub fn new(provider: Arc<dyn PaymentProvider>, repository: Arc<dyn DonationRepository>) -> Self {
        Self {
            provider,
            repository,
        }
    }

    pub async fn handle(
        &self,
        cmd: InitiateCheckoutCommand,
    ) -> Result<InitiateCheckoutResult, PaymentError> {
        let mut request = DonationRequest::checkout(cmd.email, cmd.amount);
        if let Some(currency) = cmd.currency {
            request = request.with_currency(currency);
        }
        if let Some(note) = cmd.note {
            request = request.with_note(note);
        }
        let donation = request.validate()?;

        let api_ref = checkout_api_ref(&donation.email, &donation.currency, donation.amount);
        tracing::info!(api_ref = %api_ref, currency = %donation.currency, "Creating hosted checkout");

        let response = self
            .provider
            .create_checkout(CheckoutRequest {
                amount: donation.amount,
                currency: donation.currency.clone(),
                email: donation.email.clone(),
                api_ref: api_ref.clone(),
                comment: donation.note.clone(),
            })
            .await?;

        let id = first_match(&response, CHECKOUT_ID).ok_or_else(|| {
            PaymentError::malformed("Checkout response did not include an id")
        })?;
        let checkout_url = first_match(&response, CHECKOUT_URL).ok_or_else(|| {
            PaymentError::malformed("Checkout response did not include a payment url")
        })?;
        let donation_id = DonationId::new(id)?;

        let record = DonationRecord::pending(donation_id.clone(), &donation, api_ref);
        self.repository.save(&record).await?;

        Ok(InitiateCheckoutResult {
            donation_id,
            checkout_url,
        })
    }
}
