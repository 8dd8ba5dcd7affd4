//! HandleDonationWebhookHandler - settles donations from provider callbacks.
//!
//! This is the only writer of terminal donation status.

use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use std::sync::Arc;
use subtle::ConstantTimeEq;

use crate::domain::donation::extractors::{self, first_match, WEBHOOK_ID, WEBHOOK_STATUS};
use crate::domain::donation::DonationStatus;
use crate::domain::foundation::{DomainError, DonationId};
use crate::ports::DonationRepository;

/// Command carrying the raw webhook body.
#[derive(Debug, Clone)]
pub struct HandleDonationWebhookCommand {
    pub payload: Vec<u8>,
}

/// What the webhook did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DonationWebhookOutcome {
    /// A stored donation took the reported status.
    Updated {
        donation_id: DonationId,
        status: DonationStatus,
    },
    /// Well-formed, but no stored donation has this id.
    UnknownDonation { donation_id: DonationId },
    /// Nothing was written.
    Ignored { reason: String },
}

impl DonationWebhookOutcome {
    fn ignored(reason: impl Into<String>) -> Self {
        DonationWebhookOutcome::Ignored {
            reason: reason.into(),
        }
    }
}

pub struct HandleDonationWebhookHandler {
    repository: Arc<dyn DonationRepository>,
    challenge: Option<SecretString>,
}

impl HandleDonationWebhookHandler {
    pub fn new(repository: Arc<dyn DonationRepository>) -> Self {
        Self {
            repository,
            challenge: None,
        }
    }

    /// Require payloads to carry this `challenge` value.
    pub fn with_challenge(mut self, challenge: SecretString) -> Self {
        if !challenge.expose_secret().trim().is_empty() {
            self.challenge = Some(challenge);
        }
        self
    }

    fn challenge_matches(&self, payload: &Value) -> bool {
        let expected = match &self.challenge {
            Some(expected) => expected,
            None => return true,
        };
        let supplied = extractors::challenge(payload).unwrap_or_default();
        supplied
            .as_bytes()
            .ct_eq(expected.expose_secret().trim().as_bytes())
            .into()
    }

    pub async fn handle(
        &self,
        cmd: HandleDonationWebhookCommand,
    ) -> Result<DonationWebhookOutcome, DomainError> {
        let payload: Value = match serde_json::from_slice(&cmd.payload) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::warn!(error = %e, "Donation webhook body is not JSON");
                return Ok(DonationWebhookOutcome::ignored("payload is not JSON"));
            }
        };

        if !self.challenge_matches(&payload) {
            tracing::warn!("Donation webhook challenge mismatch");
            return Ok(DonationWebhookOutcome::ignored("challenge mismatch"));
        }

        let (id, status) = match (
            first_match(&payload, WEBHOOK_ID),
            first_match(&payload, WEBHOOK_STATUS),
        ) {
            (Some(id), Some(status)) => (id, status),
            _ => {
                tracing::info!("Donation webhook without id or status");
                return Ok(DonationWebhookOutcome::ignored("missing id or status"));
            }
        };

        let donation_id = DonationId::new(id)?;
        let status = DonationStatus::parse(&status);
        let currency = extractors::currency(&payload);

        tracing::info!(
            donation_id = %donation_id,
            status = %status,
            "Donation webhook received"
        );

        let updated = self
            .repository
            .update_status(&donation_id, &status, currency.as_deref())
            .await?;

        if updated {
            if status.is_terminal() {
                tracing::info!(donation_id = %donation_id, status = %status, "Donation settled");
            } else {
                tracing::debug!(donation_id = %donation_id, status = %status, "Donation still in flight");
            }
            Ok(DonationWebhookOutcome::Updated {
                donation_id,
                status,
            })
        } else {
            tracing::warn!(donation_id = %donation_id, "Webhook for unknown donation");
            Ok(DonationWebhookOutcome::UnknownDonation { donation_id })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::supabase::{InMemoryTableStore, StoreDonationRepository};
    use crate::domain::donation::{DonationRecord, DonationRequest};
    use rust_decimal::Decimal;
    use serde_json::json;

    async fn repository_with(id: &str) -> Arc<StoreDonationRepository> {
        let repository = Arc::new(StoreDonationRepository::new(Arc::new(InMemoryTableStore::new())));
        let donation = DonationRequest::stk_push("kim@example.com", "254712345678", Decimal::ONE)
            .validate()
            .unwrap();
        repository
            .save(&DonationRecord::pending(
                DonationId::new(id).unwrap(),
                &donation,
                "don-kim-100".to_string(),
            ))
            .await
            .unwrap();
        repository
    }

    fn command(payload: Value) -> HandleDonationWebhookCommand {
        HandleDonationWebhookCommand {
            payload: serde_json::to_vec(&payload).unwrap(),
        }
    }

    #[tokio::test]
    async fn state_field_settles_the_donation() {
        let repository = repository_with("INV-1").await;
        let handler = HandleDonationWebhookHandler::new(repository.clone());

        let outcome = handler
            .handle(command(json!({"invoice_id": "INV-1", "state": "COMPLETE", "currency": "KES"})))
            .await
            .unwrap();

        assert_eq!(
            outcome,
            DonationWebhookOutcome::Updated {
                donation_id: DonationId::new("INV-1").unwrap(),
                status: DonationStatus::Completed,
            }
        );
        let stored = repository
            .find_by_id(&DonationId::new("INV-1").unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.status, DonationStatus::Completed);
    }

    #[tokio::test]
    async fn id_takes_precedence_over_invoice_id() {
        let repository = repository_with("CHK-1").await;
        let handler = HandleDonationWebhookHandler::new(repository);

        let outcome = handler
            .handle(command(json!({"id": "CHK-1", "invoice_id": "INV-9", "status": "FAILED"})))
            .await
            .unwrap();

        assert!(matches!(outcome, DonationWebhookOutcome::Updated { .. }));
    }

    #[tokio::test]
    async fn unknown_donation_is_reported() {
        let handler = HandleDonationWebhookHandler::new(repository_with("INV-1").await);

        let outcome = handler
            .handle(command(json!({"id": "INV-404", "status": "COMPLETE"})))
            .await
            .unwrap();

        assert!(matches!(outcome, DonationWebhookOutcome::UnknownDonation { .. }));
    }

    #[tokio::test]
    async fn missing_status_is_ignored() {
        let handler = HandleDonationWebhookHandler::new(repository_with("INV-1").await);

        let outcome = handler.handle(command(json!({"id": "INV-1"}))).await.unwrap();

        assert_eq!(outcome, DonationWebhookOutcome::ignored("missing id or status"));
    }

    #[tokio::test]
    async fn non_json_body_is_ignored() {
        let handler = HandleDonationWebhookHandler::new(repository_with("INV-1").await);

        let outcome = handler
            .handle(HandleDonationWebhookCommand {
                payload: b"not json".to_vec(),
            })
            .await
            .unwrap();

        assert!(matches!(outcome, DonationWebhookOutcome::Ignored { .. }));
    }

    #[tokio::test]
    async fn challenge_mismatch_skips_the_update() {
        let repository = repository_with("INV-1").await;
        let handler = HandleDonationWebhookHandler::new(repository.clone())
            .with_challenge(SecretString::new("s3cret".to_string()));

        let wrong = handler
            .handle(command(json!({"id": "INV-1", "state": "COMPLETE", "challenge": "guess"})))
            .await
            .unwrap();
        let missing = handler
            .handle(command(json!({"id": "INV-1", "state": "COMPLETE"})))
            .await
            .unwrap();
        let right = handler
            .handle(command(json!({"id": "INV-1", "state": "FAILED", "challenge": "s3cret"})))
            .await
            .unwrap();

        assert_eq!(wrong, DonationWebhookOutcome::ignored("challenge mismatch"));
        assert_eq!(missing, DonationWebhookOutcome::ignored("challenge mismatch"));
        assert!(matches!(right, DonationWebhookOutcome::Updated { .. }));
    }
}
