//! InferenceGateway - resolves the API token and forwards requests to the
//! text-generation provider.

use secrecy::SecretString;
use std::sync::Arc;

use crate::domain::inference::{InferenceError, InferenceRequest, InferenceResult};
use crate::ports::{CredentialSource, TextGenerationProvider, INFERENCE_TOKEN_NAMES};

/// Single entry point for hosted-model calls.
///
/// The token is resolved on every call so a rotated credential takes effect
/// without a restart. A missing token fails before any network call.
pub struct InferenceGateway {
    credentials: Arc<dyn CredentialSource>,
    provider: Arc<dyn TextGenerationProvider>,
}

impl InferenceGateway {
    pub fn new(
        credentials: Arc<dyn CredentialSource>,
        provider: Arc<dyn TextGenerationProvider>,
    ) -> Self {
        Self {
            credentials,
            provider,
        }
    }

    pub async fn generate(&self, request: &InferenceRequest) -> InferenceResult {
        let token = match self.credentials.lookup_first(INFERENCE_TOKEN_NAMES) {
            Some(token) => SecretString::new(token),
            None => {
                tracing::warn!(model = request.model_id(), "No inference token configured");
                return Err(InferenceError::MissingCredential);
            }
        };

        match self.provider.generate(&token, request).await {
            Ok(sequences) => {
                tracing::info!(
                    provider = self.provider.provider_name(),
                    model = request.model_id(),
                    sequences = sequences.len(),
                    "Inference succeeded"
                );
                Ok(sequences)
            }
            Err(err) => {
                tracing::warn!(
                    provider = self.provider.provider_name(),
                    model = request.model_id(),
                    kind = %err.kind(),
                    error = %err,
                    "Inference failed"
                );
                Err(err)
            }
        }
    }
}
