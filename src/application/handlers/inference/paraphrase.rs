//! ParaphraseHandler - paraphrase with a one-shot fallback model.

use std::sync::Arc;

use super::InferenceGateway;
use crate::domain::inference::{
    fallback_paraphrase_prompt, GenerationParameters, InferenceRequest, ParaphraseModel,
};
use crate::domain::study::{clean_sequences, StudyError};

pub const DEFAULT_PARAPHRASE_COUNT: u32 = 3;

/// Command to paraphrase a passage.
#[derive(Debug, Clone)]
pub struct ParaphraseCommand {
    pub text: String,
    pub num_return_sequences: u32,
    /// Registry choice key; unknown keys use the configured default.
    pub model: Option<String>,
}

impl ParaphraseCommand {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            num_return_sequences: DEFAULT_PARAPHRASE_COUNT,
            model: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParaphraseResult {
    pub paraphrases: Vec<String>,
    /// Model that produced the paraphrases.
    pub model_id: String,
    pub used_fallback: bool,
}

pub struct ParaphraseHandler {
    gateway: Arc<InferenceGateway>,
    default_model: ParaphraseModel,
    fallback_model_id: String,
}

impl ParaphraseHandler {
    pub fn new(
        gateway: Arc<InferenceGateway>,
        default_model: ParaphraseModel,
        fallback_model_id: impl Into<String>,
    ) -> Self {
        Self {
            gateway,
            default_model,
            fallback_model_id: fallback_model_id.into(),
        }
    }

    /// Tries the selected model once. On any failure, including an empty
    /// answer, tries the fallback model once with a rewritten prompt and
    /// the same parameters. When both fail the fallback's error is returned.
    pub async fn handle(&self, cmd: ParaphraseCommand) -> Result<ParaphraseResult, StudyError> {
        let text = cmd.text.trim();
        if text.is_empty() {
            return Err(StudyError::invalid_input(
                "Please provide some text to paraphrase.",
            ));
        }

        let model = cmd
            .model
            .as_deref()
            .map(|choice| ParaphraseModel::from_choice(choice, self.default_model))
            .unwrap_or(self.default_model);
        let parameters = GenerationParameters::paraphrase(cmd.num_return_sequences);

        let primary = InferenceRequest::new(model.model_id(), text, parameters.clone())?;
        match self.gateway.generate(&primary).await {
            Ok(sequences) => {
                let paraphrases = clean_sequences(sequences);
                if !paraphrases.is_empty() {
                    return Ok(ParaphraseResult {
                        paraphrases,
                        model_id: primary.model_id().to_string(),
                        used_fallback: false,
                    });
                }
                tracing::warn!(model = primary.model_id(), "Primary model returned no text");
            }
            Err(err) => {
                tracing::warn!(
                    model = primary.model_id(),
                    kind = %err.kind(),
                    "Primary paraphrase model failed, trying fallback"
                );
            }
        }

        let fallback = InferenceRequest::new(
            self.fallback_model_id.as_str(),
            fallback_paraphrase_prompt(text),
            parameters,
        )?;
        let sequences = self.gateway.generate(&fallback).await?;

        Ok(ParaphraseResult {
            paraphrases: clean_sequences(sequences),
            model_id: fallback.model_id().to_string(),
            used_fallback: true,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockTextGenerationProvider;
    use crate::adapters::credentials::SettingsCredentialSource;
    use crate::domain::inference::InferenceError;

    const FALLBACK: &str = "google/flan-t5-base";

    fn handler(provider: &MockTextGenerationProvider) -> ParaphraseHandler {
        let credentials = SettingsCredentialSource::new().with_value("HUGGING_FACE_API_KEY", "hf_test");
        let gateway = InferenceGateway::new(Arc::new(credentials), Arc::new(provider.clone()));
        ParaphraseHandler::new(Arc::new(gateway), ParaphraseModel::Pegasus, FALLBACK)
    }

    #[tokio::test]
    async fn blank_text_never_reaches_the_model() {
        let provider = MockTextGenerationProvider::new();

        let err = handler(&provider)
            .handle(ParaphraseCommand::new("   \n"))
            .await
            .unwrap_err();

        assert_eq!(
            err,
            StudyError::invalid_input("Please provide some text to paraphrase.")
        );
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn primary_success_is_cleaned() {
        let provider =
            MockTextGenerationProvider::new().with_sequences(vec![" A rewrite. ", "", "A rewrite."]);

        let result = handler(&provider)
            .handle(ParaphraseCommand::new("The cat sat."))
            .await
            .unwrap();

        assert_eq!(result.paraphrases, vec!["A rewrite."]);
        assert_eq!(result.model_id, "tuner007/pegasus_paraphrase");
        assert!(!result.used_fallback);
        assert_eq!(provider.call_count(), 1);
    }

    #[tokio::test]
    async fn primary_failure_uses_fallback_with_same_parameters() {
        let provider = MockTextGenerationProvider::new()
            .with_error(InferenceError::model_loading())
            .with_sequences(vec!["Fallback rewrite."]);

        let mut cmd = ParaphraseCommand::new("The cat sat.");
        cmd.num_return_sequences = 2;
        let result = handler(&provider).handle(cmd).await.unwrap();

        assert_eq!(result.paraphrases, vec!["Fallback rewrite."]);
        assert!(result.used_fallback);

        let calls = provider.get_calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[1].model_id(), FALLBACK);
        assert!(calls[1].prompt().contains("Text: The cat sat."));
        assert!(calls[1].prompt().ends_with("Paraphrases:"));
        assert_eq!(calls[0].parameters(), calls[1].parameters());
    }

    #[tokio::test]
    async fn empty_primary_answer_uses_fallback() {
        let provider = MockTextGenerationProvider::new()
            .with_sequences(vec!["  "])
            .with_sequences(vec!["From fallback"]);

        let result = handler(&provider)
            .handle(ParaphraseCommand::new("Text"))
            .await
            .unwrap();

        assert!(result.used_fallback);
        assert_eq!(provider.call_count(), 2);
    }

    #[tokio::test]
    async fn both_failing_returns_fallback_error() {
        let provider = MockTextGenerationProvider::new()
            .with_error(InferenceError::model_loading())
            .with_error(InferenceError::client_error(400, "bad input"));

        let err = handler(&provider)
            .handle(ParaphraseCommand::new("Text"))
            .await
            .unwrap_err();

        assert_eq!(
            err,
            StudyError::Inference(InferenceError::client_error(400, "bad input"))
        );
        assert_eq!(provider.call_count(), 2);
    }

    #[tokio::test]
    async fn unknown_model_choice_uses_default() {
        let provider = MockTextGenerationProvider::new().with_sequences(vec!["ok"]);

        let mut cmd = ParaphraseCommand::new("Text");
        cmd.model = Some("gpt-9".to_string());
        handler(&provider).handle(cmd).await.unwrap();

        assert_eq!(provider.get_calls()[0].model_id(), "tuner007/pegasus_paraphrase");
    }
}
