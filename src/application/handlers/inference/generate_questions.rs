//! GenerateQuestionsHandler - study questions from a passage.

use std::sync::Arc;

use super::InferenceGateway;
use crate::domain::inference::{GenerationParameters, InferenceRequest, QuestionModel};
use crate::domain::study::{extract_questions, StudyError};

pub const DEFAULT_MAX_QUESTIONS: u32 = 5;

#[derive(Debug, Clone)]
pub struct GenerateQuestionsCommand {
    pub text: String,
    pub max_questions: u32,
    pub model: Option<String>,
}

impl GenerateQuestionsCommand {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            max_questions: DEFAULT_MAX_QUESTIONS,
            model: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GenerateQuestionsResult {
    pub questions: Vec<String>,
    pub model_id: String,
}

pub struct GenerateQuestionsHandler {
    gateway: Arc<InferenceGateway>,
    default_model: QuestionModel,
}

impl GenerateQuestionsHandler {
    pub fn new(gateway: Arc<InferenceGateway>, default_model: QuestionModel) -> Self {
        Self {
            gateway,
            default_model,
        }
    }

    pub async fn handle(
        &self,
        cmd: GenerateQuestionsCommand,
    ) -> Result<GenerateQuestionsResult, StudyError> {
        let text = cmd.text.trim();
        if text.is_empty() {
            return Err(StudyError::invalid_input(
                "Please provide text to generate questions.",
            ));
        }

        let model = cmd
            .model
            .as_deref()
            .map(|choice| QuestionModel::from_choice(choice, self.default_model))
            .unwrap_or(self.default_model);
        let max_questions = cmd.max_questions.max(1);

        let request = InferenceRequest::new(
            model.model_id(),
            model.prompt(text, max_questions),
            GenerationParameters::questions(),
        )?;

        // The model answers with one blob; only the first sequence is used.
        let sequences = self.gateway.generate(&request).await?;
        let raw = sequences.into_iter().next().unwrap_or_default();

        Ok(GenerateQuestionsResult {
            questions: extract_questions(&raw, max_questions as usize),
            model_id: request.model_id().to_string(),
        })
    }
}
