//! Form and response types for the study endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::inference::{GenerateQuestionsResult, ParaphraseResult};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Form body for `POST /api/paraphrase`.
#[derive(Debug, Clone, Deserialize)]
pub struct ParaphraseForm {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub num_return_sequences: Option<u32>,
    /// Registry choice key (`pegasus`, `t5`, `flan`).
    #[serde(default)]
    pub model: Option<String>,
}

/// Form body for `POST /api/questions`.
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionsForm {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub max_questions: Option<u32>,
    /// Registry choice key (`t5-simple`, `t5-advanced`).
    #[serde(default)]
    pub model: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
pub struct ParaphraseResponse {
    pub paraphrases: Vec<String>,
    pub model: String,
    pub used_fallback: bool,
}

impl From<ParaphraseResult> for ParaphraseResponse {
    fn from(result: ParaphraseResult) -> Self {
        Self {
            paraphrases: result.paraphrases,
            model: result.model_id,
            used_fallback: result.used_fallback,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionsResponse {
    pub questions: Vec<String>,
    pub model: String,
}

impl From<GenerateQuestionsResult> for QuestionsResponse {
    fn from(result: GenerateQuestionsResult) -> Self {
        Self {
            questions: result.questions,
            model: result.model_id,
        }
    }
}
