//! Hugging Face Inference API provider.
//!
//! Posts `{inputs, parameters}` to `{base_url}/models/{model_id}` with a
//! bearer token and normalizes the reply. The endpoint answers either a
//! single `{"generated_text": ..}` object or a list of them.
//!
//! # Configuration
//!
//! ```ignore
//! let config = HuggingFaceConfig::new()
//!     .with_timeout(Duration::from_secs(45))
//!     .with_strategy(SequenceStrategy::PerSequence);
//!
//! let provider = HuggingFaceProvider::new(config)?;
//! ```

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde_json::{json, Value};
use std::time::Duration;

use crate::config::{InferenceConfig, SequenceStrategy};
use crate::domain::inference::{
    GenerationParameters, InferenceError, InferenceRequest, InferenceResult,
};
use crate::ports::TextGenerationProvider;

/// Configuration for the Hugging Face provider.
#[derive(Debug, Clone)]
pub struct HuggingFaceConfig {
    /// Base URL of the inference API.
    pub base_url: String,
    /// Per-call timeout.
    pub timeout: Duration,
    /// How multi-sequence requests are issued.
    pub strategy: SequenceStrategy,
}

impl HuggingFaceConfig {
    pub fn new() -> Self {
        Self {
            base_url: "https://api-inference.huggingface.co".to_string(),
            timeout: Duration::from_secs(45),
            strategy: SequenceStrategy::Batched,
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_strategy(mut self, strategy: SequenceStrategy) -> Self {
        self.strategy = strategy;
        self
    }
}

impl Default for HuggingFaceConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&InferenceConfig> for HuggingFaceConfig {
    fn from(config: &InferenceConfig) -> Self {
        Self::new()
            .with_base_url(config.base_url.clone())
            .with_timeout(config.timeout())
            .with_strategy(config.sequence_strategy)
    }
}

/// Hugging Face hosted inference provider.
///
/// Holds one HTTP client for the life of the process.
pub struct HuggingFaceProvider {
    config: HuggingFaceConfig,
    client: Client,
}

impl HuggingFaceProvider {
    pub fn new(config: HuggingFaceConfig) -> Result<Self, InferenceError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| InferenceError::unexpected(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { config, client })
    }

    /// Endpoint for `model_id`. Full URLs are used as given.
    fn model_url(&self, model_id: &str) -> String {
        if model_id.starts_with("http://") || model_id.starts_with("https://") {
            model_id.to_string()
        } else {
            format!(
                "{}/models/{}",
                self.config.base_url.trim_end_matches('/'),
                model_id
            )
        }
    }

    async fn post(&self, token: &SecretString, url: &str, body: &Value) -> InferenceResult {
        let response = self
            .client
            .post(url)
            .bearer_auth(token.expose_secret())
            .json(body)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status().as_u16();
        let text = response.text().await.map_err(transport_error)?;
        classify_response(status, &text)
    }
}

#[async_trait]
impl TextGenerationProvider for HuggingFaceProvider {
    async fn generate(
        &self,
        token: &SecretString,
        request: &InferenceRequest,
    ) -> Result<Vec<String>, InferenceError> {
        let url = self.model_url(request.model_id());
        let parameters = request.parameters();

        tracing::debug!(
            model = request.model_id(),
            strategy = ?self.config.strategy,
            sequences = parameters.sequence_count(),
            "calling hosted model"
        );

        match self.config.strategy {
            SequenceStrategy::Batched => {
                let body = request_body(request.prompt(), parameters);
                self.post(token, &url, &body).await
            }
            SequenceStrategy::PerSequence => {
                let body = request_body(request.prompt(), &parameters.single_sequence());
                let mut sequences = Vec::new();
                for _ in 0..parameters.sequence_count() {
                    sequences.extend(self.post(token, &url, &body).await?);
                }
                Ok(sequences)
            }
        }
    }

    fn provider_name(&self) -> &str {
        "huggingface"
    }
}

fn request_body(prompt: &str, parameters: &GenerationParameters) -> Value {
    json!({
        "inputs": prompt,
        "parameters": parameters,
    })
}

fn transport_error(e: reqwest::Error) -> InferenceError {
    if e.is_timeout() {
        InferenceError::Timeout
    } else {
        InferenceError::unexpected(format!("Unexpected error: {e}"))
    }
}

/// Maps an HTTP status and body to an outcome.
pub(crate) fn classify_response(status: u16, body: &str) -> InferenceResult {
    match status {
        503 => Err(InferenceError::model_loading()),
        s if s >= 400 => Err(InferenceError::client_error(s, body)),
        _ => parse_generated_text(body),
    }
}

/// Accepts `{"generated_text": ..}` or a list of such objects.
pub(crate) fn parse_generated_text(body: &str) -> InferenceResult {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| InferenceError::unexpected(format!("Unexpected error: invalid JSON: {e}")))?;

    match &value {
        Value::Array(items) => {
            let texts: Vec<String> = items.iter().filter_map(generated_text).collect();
            if texts.is_empty() && !items.is_empty() {
                return Err(unexpected_shape(&value));
            }
            Ok(texts)
        }
        Value::Object(map) => {
            if let Some(text) = generated_text(&value) {
                return Ok(vec![text]);
            }
            match map.get("error").and_then(Value::as_str) {
                Some(error) => Err(InferenceError::unexpected(error)),
                None => Err(unexpected_shape(&value)),
            }
        }
        _ => Err(unexpected_shape(&value)),
    }
}

fn generated_text(item: &Value) -> Option<String> {
    item.get("generated_text")
        .and_then(Value::as_str)
        .map(str::to_string)
}

fn unexpected_shape(value: &Value) -> InferenceError {
    InferenceError::unexpected(format!("Unexpected response format: {value}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::inference::InferenceErrorKind;
    use axum::extract::{Path, State};
    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::post;
    use axum::{Json, Router};
    use std::sync::{Arc, Mutex};

    // ════════════════════════════════════════════════════════════════════════════
    // Response classification
    // ════════════════════════════════════════════════════════════════════════════

    #[test]
    fn status_503_is_model_loading() {
        let err = classify_response(503, "{\"error\":\"loading\"}").unwrap_err();
        assert_eq!(err.kind(), InferenceErrorKind::ModelLoading);
    }

    #[test]
    fn status_4xx_and_5xx_are_client_errors_with_body() {
        let err = classify_response(400, "bad input").unwrap_err();
        assert_eq!(err, InferenceError::client_error(400, "bad input"));

        let err = classify_response(500, "boom").unwrap_err();
        assert_eq!(err.kind(), InferenceErrorKind::ClientError);
    }

    #[test]
    fn list_shape_yields_all_sequences() {
        let texts = classify_response(
            200,
            r#"[{"generated_text":"one"},{"generated_text":"two"}]"#,
        )
        .unwrap();
        assert_eq!(texts, vec!["one", "two"]);
    }

    #[test]
    fn object_shape_yields_single_sequence() {
        let texts = classify_response(200, r#"{"generated_text":"only"}"#).unwrap();
        assert_eq!(texts, vec!["only"]);
    }

    #[test]
    fn empty_list_is_an_empty_success() {
        assert_eq!(classify_response(200, "[]").unwrap(), Vec::<String>::new());
    }

    #[test]
    fn unknown_shapes_are_unexpected() {
        let err = parse_generated_text(r#"[{"summary_text":"x"}]"#).unwrap_err();
        assert_eq!(err.kind(), InferenceErrorKind::Unexpected);

        let err = parse_generated_text("not json").unwrap_err();
        assert_eq!(err.kind(), InferenceErrorKind::Unexpected);

        let err = parse_generated_text(r#"{"error":"Input is empty"}"#).unwrap_err();
        assert_eq!(err.message(), "Input is empty");
    }

    #[test]
    fn model_url_joins_base_and_id() {
        let provider = HuggingFaceProvider::new(
            HuggingFaceConfig::new().with_base_url("http://localhost:9000/"),
        )
        .unwrap();
        assert_eq!(
            provider.model_url("google/flan-t5-base"),
            "http://localhost:9000/models/google/flan-t5-base"
        );
        assert_eq!(
            provider.model_url("https://example.com/custom"),
            "https://example.com/custom"
        );
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Against a local stub endpoint
    // ════════════════════════════════════════════════════════════════════════════

    #[derive(Clone, Default)]
    struct StubState {
        bodies: Arc<Mutex<Vec<Value>>>,
        auth: Arc<Mutex<Vec<String>>>,
    }

    async fn stub_model(
        State(state): State<StubState>,
        Path(model): Path<String>,
        headers: HeaderMap,
        Json(body): Json<Value>,
    ) -> (StatusCode, String) {
        state.bodies.lock().unwrap().push(body);
        if let Some(auth) = headers.get("authorization").and_then(|v| v.to_str().ok()) {
            state.auth.lock().unwrap().push(auth.to_string());
        }
        match model.as_str() {
            "cold" => (StatusCode::SERVICE_UNAVAILABLE, "{}".to_string()),
            "slow" => {
                tokio::time::sleep(Duration::from_millis(500)).await;
                (StatusCode::OK, "[]".to_string())
            }
            _ => (
                StatusCode::OK,
                r#"[{"generated_text":" A rephrasing. "}]"#.to_string(),
            ),
        }
    }

    async fn spawn_stub() -> (String, StubState) {
        let state = StubState::default();
        let app = Router::new()
            .route("/models/:model", post(stub_model))
            .with_state(state.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        (format!("http://{addr}"), state)
    }

    fn token() -> SecretString {
        SecretString::new("hf_test".to_string())
    }

    #[tokio::test]
    async fn batched_strategy_sends_one_call_with_sequence_count() {
        let (base, stub) = spawn_stub().await;
        let provider = HuggingFaceProvider::new(HuggingFaceConfig::new().with_base_url(base)).unwrap();
        let request =
            InferenceRequest::new("pegasus", "Hello", GenerationParameters::paraphrase(3)).unwrap();

        let texts = provider.generate(&token(), &request).await.unwrap();

        assert_eq!(texts, vec![" A rephrasing. "]);
        let bodies = stub.bodies.lock().unwrap();
        assert_eq!(bodies.len(), 1);
        assert_eq!(bodies[0]["inputs"], "Hello");
        assert_eq!(bodies[0]["parameters"]["num_return_sequences"], 3);
        assert_eq!(stub.auth.lock().unwrap()[0], "Bearer hf_test");
    }

    #[tokio::test]
    async fn per_sequence_strategy_calls_once_per_sequence() {
        let (base, stub) = spawn_stub().await;
        let provider = HuggingFaceProvider::new(
            HuggingFaceConfig::new()
                .with_base_url(base)
                .with_strategy(SequenceStrategy::PerSequence),
        )
        .unwrap();
        let request =
            InferenceRequest::new("pegasus", "Hello", GenerationParameters::paraphrase(3)).unwrap();

        let texts = provider.generate(&token(), &request).await.unwrap();

        assert_eq!(texts.len(), 3);
        let bodies = stub.bodies.lock().unwrap();
        assert_eq!(bodies.len(), 3);
        assert!(bodies[0]["parameters"].get("num_return_sequences").is_none());
        assert_eq!(bodies[0]["parameters"]["return_full_text"], false);
    }

    #[tokio::test]
    async fn cold_model_maps_to_model_loading() {
        let (base, _stub) = spawn_stub().await;
        let provider = HuggingFaceProvider::new(HuggingFaceConfig::new().with_base_url(base)).unwrap();
        let request =
            InferenceRequest::new("cold", "Hello", GenerationParameters::questions()).unwrap();

        let err = provider.generate(&token(), &request).await.unwrap_err();
        assert_eq!(err.kind(), InferenceErrorKind::ModelLoading);
    }

    #[tokio::test]
    async fn slow_model_maps_to_timeout() {
        let (base, _stub) = spawn_stub().await;
        let provider = HuggingFaceProvider::new(
            HuggingFaceConfig::new()
                .with_base_url(base)
                .with_timeout(Duration::from_millis(100)),
        )
        .unwrap();
        let request =
            InferenceRequest::new("slow", "Hello", GenerationParameters::questions()).unwrap();

        let err = provider.generate(&token(), &request).await.unwrap_err();
        assert_eq!(err, InferenceError::Timeout);
    }

    #[tokio::test]
    async fn unreachable_host_maps_to_unexpected() {
        let provider = HuggingFaceProvider::new(
            HuggingFaceConfig::new().with_base_url("http://127.0.0.1:1"),
        )
        .unwrap();
        let request =
            InferenceRequest::new("any", "Hello", GenerationParameters::questions()).unwrap();

        let err = provider.generate(&token(), &request).await.unwrap_err();
        assert_eq!(err.kind(), InferenceErrorKind::Unexpected);
        assert!(err.message().starts_with("Unexpected error:"));
    }
}
