//! Hosted inference configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use crate::domain::inference::MAX_RETURN_SEQUENCES;

/// Hosted text-generation endpoint configuration
#[derive(Debug, Clone, Deserialize)]
pub struct InferenceConfig {
    /// Base URL of the hosted inference API; models live under `{base_url}/models/{id}`
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API token supplied through configuration (second in resolution order)
    pub api_key: Option<String>,

    /// Per-call network timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Location of the UI framework's TOML secrets store
    #[serde(default = "default_secrets_path")]
    pub secrets_path: String,

    /// Default paraphrase model choice (registry key)
    #[serde(default = "default_paraphrase_model")]
    pub paraphrase_model: String,

    /// Model id used when the primary paraphrase model fails
    #[serde(default = "default_fallback_model")]
    pub fallback_model: String,

    /// Default question model choice (registry key)
    #[serde(default = "default_question_model")]
    pub question_model: String,

    /// How multiple sequences are requested from the endpoint
    #[serde(default)]
    pub sequence_strategy: SequenceStrategy,
}

/// How a request for N sequences maps onto network calls
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SequenceStrategy {
    /// One call carrying `num_return_sequences`
    #[default]
    Batched,
    /// One call per requested sequence
    PerSequence,
}

impl InferenceConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Longest one paraphrase can take: primary plus fallback attempt, each
    /// a single call or, per sequence, up to the sequence cap.
    pub fn worst_case_paraphrase(&self) -> Duration {
        let calls_per_attempt = match self.sequence_strategy {
            SequenceStrategy::Batched => 1,
            SequenceStrategy::PerSequence => MAX_RETURN_SEQUENCES,
        };
        self.timeout() * (2 * calls_per_attempt)
    }

    /// Validate inference configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !is_http_url(&self.base_url) {
            return Err(ValidationError::InvalidUrl("inference.base_url"));
        }
        if self.timeout_secs == 0 || self.timeout_secs > 300 {
            return Err(ValidationError::InvalidInferenceTimeout);
        }
        if self.fallback_model.trim().is_empty() {
            return Err(ValidationError::MissingRequired("inference.fallback_model"));
        }
        Ok(())
    }
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            timeout_secs: default_timeout(),
            secrets_path: default_secrets_path(),
            paraphrase_model: default_paraphrase_model(),
            fallback_model: default_fallback_model(),
            question_model: default_question_model(),
            sequence_strategy: SequenceStrategy::default(),
        }
    }
}

pub(crate) fn is_http_url(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}

fn default_base_url() -> String {
    "https://api-inference.huggingface.co".to_string()
}

fn default_timeout() -> u64 {
    45
}

fn default_secrets_path() -> String {
    ".streamlit/secrets.toml".to_string()
}

fn default_paraphrase_model() -> String {
    "pegasus".to_string()
}

fn default_fallback_model() -> String {
    "google/flan-t5-base".to_string()
}

fn default_question_model() -> String {
    "t5-simple".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inference_config_defaults() {
        let config = InferenceConfig::default();
        assert_eq!(config.base_url, "https://api-inference.huggingface.co");
        assert_eq!(config.timeout_secs, 45);
        assert_eq!(config.fallback_model, "google/flan-t5-base");
        assert_eq!(config.sequence_strategy, SequenceStrategy::Batched);
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_timeout_duration() {
        let config = InferenceConfig {
            timeout_secs: 10,
            ..Default::default()
        };
        assert_eq!(config.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_validation_rejects_non_http_base_url() {
        let config = InferenceConfig {
            base_url: "ftp://models".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidUrl("inference.base_url"))
        ));
    }

    #[test]
    fn test_validation_rejects_zero_timeout() {
        let config = InferenceConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_sequence_strategy_deserializes_snake_case() {
        let strategy: SequenceStrategy = serde_json::from_str("\"per_sequence\"").unwrap();
        assert_eq!(strategy, SequenceStrategy::PerSequence);
    }
}
