//! Mock text-generation provider for testing.
//!
//! Provides a configurable mock implementation of the TextGenerationProvider
//! port, allowing tests to run without calling the hosted inference API.
//!
//! # Example
//!
//! ```ignore
//! let provider = MockTextGenerationProvider::new()
//!     .with_error(InferenceError::model_loading())
//!     .with_sequences(vec!["A rephrasing."]);
//!
//! // first call fails, second succeeds
//! ```

use async_trait::async_trait;
use secrecy::SecretString;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::domain::inference::{InferenceError, InferenceRequest};
use crate::ports::TextGenerationProvider;

/// A configured mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    Sequences(Vec<String>),
    Error(InferenceError),
}

/// Mock provider returning queued responses in order.
///
/// When the queue is empty every call succeeds with a single
/// `"Mock response"` sequence.
#[derive(Debug, Clone, Default)]
pub struct MockTextGenerationProvider {
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
    calls: Arc<Mutex<Vec<InferenceRequest>>>,
}

impl MockTextGenerationProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a successful response to the queue.
    pub fn with_sequences<S: Into<String>>(self, sequences: Vec<S>) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(MockResponse::Sequences(
                sequences.into_iter().map(Into::into).collect(),
            ));
        self
    }

    /// Adds an error response to the queue.
    pub fn with_error(self, error: InferenceError) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(MockResponse::Error(error));
        self
    }

    /// Returns the number of calls made to this provider.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Returns all recorded calls.
    pub fn get_calls(&self) -> Vec<InferenceRequest> {
        self.calls.lock().unwrap().clone()
    }

    fn next_response(&self) -> MockResponse {
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| MockResponse::Sequences(vec!["Mock response".to_string()]))
    }
}

#[async_trait]
impl TextGenerationProvider for MockTextGenerationProvider {
    async fn generate(
        &self,
        _token: &SecretString,
        request: &InferenceRequest,
    ) -> Result<Vec<String>, InferenceError> {
        self.calls.lock().unwrap().push(request.clone());

        match self.next_response() {
            MockResponse::Sequences(sequences) => Ok(sequences),
            MockResponse::Error(err) => Err(err),
        }
    }

    fn provider_name(&self) -> &str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::inference::GenerationParameters;

    fn request(model: &str) -> InferenceRequest {
        InferenceRequest::new(model, "prompt", GenerationParameters::default()).unwrap()
    }

    fn token() -> SecretString {
        SecretString::new("t".to_string())
    }

    #[tokio::test]
    async fn returns_queued_responses_in_order() {
        let provider = MockTextGenerationProvider::new()
            .with_error(InferenceError::Timeout)
            .with_sequences(vec!["one", "two"]);

        assert_eq!(
            provider.generate(&token(), &request("a")).await,
            Err(InferenceError::Timeout)
        );
        assert_eq!(
            provider.generate(&token(), &request("b")).await.unwrap(),
            vec!["one", "two"]
        );
        assert_eq!(
            provider.generate(&token(), &request("c")).await.unwrap(),
            vec!["Mock response"]
        );
    }

    #[tokio::test]
    async fn records_calls() {
        let provider = MockTextGenerationProvider::new();
        provider.generate(&token(), &request("model-x")).await.unwrap();

        assert_eq!(provider.call_count(), 1);
        assert_eq!(provider.get_calls()[0].model_id(), "model-x");
    }

    #[tokio::test]
    async fn clones_share_state() {
        let provider = MockTextGenerationProvider::new();
        let clone = provider.clone();
        clone.generate(&token(), &request("m")).await.unwrap();
        assert_eq!(provider.call_count(), 1);
    }
}
