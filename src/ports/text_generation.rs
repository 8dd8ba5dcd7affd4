//! Text generation port - hosted model inference.
//!
//! The provider performs the network exchange for one [`InferenceRequest`]
//! using a token the caller already resolved. Response-shape handling and
//! status classification live in the adapter.

use async_trait::async_trait;
use secrecy::SecretString;

use crate::domain::inference::{InferenceError, InferenceRequest};

/// Port for hosted text-generation endpoints.
#[async_trait]
pub trait TextGenerationProvider: Send + Sync {
    /// Generate sequences for `request`.
    ///
    /// Returns the generated texts in provider order. An empty list is a
    /// valid success; callers decide whether that is useful.
    async fn generate(
        &self,
        token: &SecretString,
        request: &InferenceRequest,
    ) -> Result<Vec<String>, InferenceError>;

    /// Provider name for logs.
    fn provider_name(&self) -> &str;
}
