//! Inference request value objects.

use serde::Serialize;

use crate::domain::foundation::ValidationError;

/// Upper bound on sequences per request; each may cost one network call.
pub const MAX_RETURN_SEQUENCES: u32 = 10;

/// Generation options forwarded to the hosted model.
///
/// Serializes directly into the `parameters` object of the request body;
/// unset options are omitted so the model's own defaults apply.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GenerationParameters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_new_tokens: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_return_sequences: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub do_sample: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_full_text: Option<bool>,
}

impl GenerationParameters {
    /// Sampling parameters used for paraphrasing.
    pub fn paraphrase(sequences: u32) -> Self {
        Self {
            temperature: Some(0.9),
            top_p: Some(0.95),
            max_new_tokens: Some(96),
            num_return_sequences: Some(sequences.clamp(1, MAX_RETURN_SEQUENCES)),
            do_sample: Some(true),
            return_full_text: None,
        }
    }

    /// Parameters used for question generation (single blob).
    pub fn questions() -> Self {
        Self {
            temperature: Some(0.7),
            top_p: Some(0.95),
            max_new_tokens: Some(96),
            ..Default::default()
        }
    }

    /// Number of sequences the caller asked for (at least one).
    pub fn sequence_count(&self) -> u32 {
        self.num_return_sequences
            .unwrap_or(1)
            .clamp(1, MAX_RETURN_SEQUENCES)
    }

    /// Copy of these parameters for a single-sequence call.
    pub fn single_sequence(&self) -> Self {
        Self {
            num_return_sequences: None,
            return_full_text: Some(false),
            ..self.clone()
        }
    }
}

/// A single text-generation request. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct InferenceRequest {
    model_id: String,
    prompt: String,
    parameters: GenerationParameters,
}

impl InferenceRequest {
    /// Builds a request, rejecting an empty model identifier.
    ///
    /// The prompt may be empty; callers short-circuit blank input before
    /// reaching the gateway.
    pub fn new(
        model_id: impl Into<String>,
        prompt: impl Into<String>,
        parameters: GenerationParameters,
    ) -> Result<Self, ValidationError> {
        let model_id = model_id.into();
        if model_id.trim().is_empty() {
            return Err(ValidationError::empty_field("model_id"));
        }
        Ok(Self {
            model_id,
            prompt: prompt.into(),
            parameters,
        })
    }

    pub fn model_id(&self) -> &str {
        &self.model_id
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn parameters(&self) -> &GenerationParameters {
        &self.parameters
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_model_id() {
        let result = InferenceRequest::new("  ", "hello", GenerationParameters::default());
        assert!(matches!(result, Err(ValidationError::EmptyField { .. })));
    }

    #[test]
    fn accepts_empty_prompt() {
        let request = InferenceRequest::new("t5-small", "", GenerationParameters::default()).unwrap();
        assert_eq!(request.model_id(), "t5-small");
        assert_eq!(request.prompt(), "");
    }

    #[test]
    fn paraphrase_parameters_clamp_sequences() {
        assert_eq!(GenerationParameters::paraphrase(0).num_return_sequences, Some(1));
        assert_eq!(GenerationParameters::paraphrase(3).num_return_sequences, Some(3));
        assert_eq!(
            GenerationParameters::paraphrase(50).num_return_sequences,
            Some(MAX_RETURN_SEQUENCES)
        );
    }

    #[test]
    fn unset_parameters_are_omitted_from_json() {
        let json = serde_json::to_value(GenerationParameters::questions()).unwrap();
        assert_eq!(json["max_new_tokens"], 96);
        assert!(json.get("num_return_sequences").is_none());
        assert!(json.get("do_sample").is_none());
    }

    #[test]
    fn single_sequence_drops_count_and_disables_full_text() {
        let single = GenerationParameters::paraphrase(4).single_sequence();
        assert_eq!(single.num_return_sequences, None);
        assert_eq!(single.return_full_text, Some(false));
        assert_eq!(single.do_sample, Some(true));
        assert_eq!(single.sequence_count(), 1);
    }
}
