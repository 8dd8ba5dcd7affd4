//! InitiateStkPushHandler - Command handler for M-Pesa STK push donations.

use rust_decimal::Decimal;
use std::sync::Arc;

use crate::domain::donation::extractors::{first_match, STK_PUSH_ID};
use crate::domain::donation::{stk_push_api_ref, DonationRecord, DonationRequest};
use crate::domain::foundation::DonationId;
use crate::ports::{DonationRepository, PaymentError, PaymentProvider, StkPushRequest};

pub const STK_PUSH_SENT_MESSAGE: &str = "STK Push sent. Confirm on your phone.";

/// Command to push a PIN prompt to the donor's phone.
#[derive(Debug, Clone)]
pub struct InitiateStkPushCommand {
    pub email: String,
    /// MSISDN, `2547XXXXXXXX`.
    pub phone: String,
    pub amount: Decimal,
    pub currency: Option<String>,
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InitiateStkPushResult {
    pub donation_id: DonationId,
    pub message: String,
}

pub struct InitiateStkPushHandler {
    provider: Arc<dyn PaymentProvider>,
    repository: Arc<dyn DonationRepository>,
}

impl InitiateStkPushHandler {
    pub fn new(provider: Arc<dyn PaymentProvider>, repository: Arc<dyn DonationRepository>) -> Self {
        Self {
            provider,
            repository,
        }
    }

    pub async fn handle(
        &self,
        cmd: InitiateStkPushCommand,
    ) -> Result<InitiateStkPushResult, PaymentError> {
        // 1. Validate before touching the provider
        let mut request = DonationRequest::stk_push(cmd.email, cmd.phone, cmd.amount);
        if let Some(currency) = cmd.currency {
            request = request.with_currency(currency);
        }
        if let Some(note) = cmd.note {
            request = request.with_note(note);
        }
        let (donation, phone) = request.validate_stk_push()?;

        // 2. Push the prompt
        let api_ref = stk_push_api_ref(&donation.email, donation.amount);
        tracing::info!(api_ref = %api_ref, currency = %donation.currency, "Initiating STK push");

        let response = self
            .provider
            .mpesa_stk_push(StkPushRequest {
                amount: donation.amount,
                phone_number: phone.as_str().to_string(),
                currency: donation.currency.clone(),
                api_ref: api_ref.clone(),
                email: donation.email.clone(),
                narrative: donation.narrative().to_string(),
            })
            .await?;

        // 3. Provider id is mandatory; without it the donation cannot be settled
        let id = first_match(&response, STK_PUSH_ID).ok_or_else(|| {
            PaymentError::malformed("STK push response did not include an invoice id")
        })?;
        let donation_id = DonationId::new(id)?;

        // 4. Record as pending; only the webhook moves it on
        let record = DonationRecord::pending(donation_id.clone(), &donation, api_ref);
        self.repository.save(&record).await?;

        Ok(InitiateStkPushResult {
            donation_id,
            message: STK_PUSH_SENT_MESSAGE.to_string(),
        })
    }
}
