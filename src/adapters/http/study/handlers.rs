//! HTTP handlers for paraphrasing and question generation.

use std::sync::Arc;

use axum::extract::rejection::FormRejection;
use axum::extract::{Form, State};
use axum::response::IntoResponse;
use axum::Json;

use crate::application::handlers::inference::{
    GenerateQuestionsCommand, GenerateQuestionsHandler, InferenceGateway, ParaphraseCommand,
    ParaphraseHandler, DEFAULT_MAX_QUESTIONS, DEFAULT_PARAPHRASE_COUNT,
};
use crate::domain::inference::{ParaphraseModel, QuestionModel};

use super::dto::{ParaphraseForm, ParaphraseResponse, QuestionsForm, QuestionsResponse};
use crate::adapters::http::error::ApiError;

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Dependencies for the study endpoints.
#[derive(Clone)]
pub struct StudyAppState {
    pub gateway: Arc<InferenceGateway>,
    pub paraphrase_model: ParaphraseModel,
    pub fallback_model_id: String,
    pub question_model: QuestionModel,
}

impl StudyAppState {
    pub fn new(gateway: Arc<InferenceGateway>, fallback_model_id: impl Into<String>) -> Self {
        Self {
            gateway,
            paraphrase_model: ParaphraseModel::default(),
            fallback_model_id: fallback_model_id.into(),
            question_model: QuestionModel::default(),
        }
    }

    pub fn with_paraphrase_model(mut self, model: ParaphraseModel) -> Self {
        self.paraphrase_model = model;
        self
    }

    pub fn with_question_model(mut self, model: QuestionModel) -> Self {
        self.question_model = model;
        self
    }

    pub fn paraphrase_handler(&self) -> ParaphraseHandler {
        ParaphraseHandler::new(
            self.gateway.clone(),
            self.paraphrase_model,
            self.fallback_model_id.clone(),
        )
    }

    pub fn questions_handler(&self) -> GenerateQuestionsHandler {
        GenerateQuestionsHandler::new(self.gateway.clone(), self.question_model)
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Command Handlers (POST endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/paraphrase
pub async fn paraphrase(
    State(state): State<StudyAppState>,
    form: Result<Form<ParaphraseForm>, FormRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Form(form) = form?;
    let cmd = ParaphraseCommand {
        text: form.text,
        num_return_sequences: form.num_return_sequences.unwrap_or(DEFAULT_PARAPHRASE_COUNT),
        model: form.model,
    };

    let result = state.paraphrase_handler().handle(cmd).await?;
    Ok(Json(ParaphraseResponse::from(result)))
}

/// POST /api/questions
pub async fn generate_questions(
    State(state): State<StudyAppState>,
    form: Result<Form<QuestionsForm>, FormRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Form(form) = form?;
    let cmd = GenerateQuestionsCommand {
        text: form.text,
        max_questions: form.max_questions.unwrap_or(DEFAULT_MAX_QUESTIONS),
        model: form.model,
    };

    let result = state.questions_handler().handle(cmd).await?;
    Ok(Json(QuestionsResponse::from(result)))
}
