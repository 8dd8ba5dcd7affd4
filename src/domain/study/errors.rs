//! Errors for the paraphrase and question-generation use cases.

use thiserror::Error;

use crate::domain::foundation::ValidationError;
use crate::domain::inference::InferenceError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StudyError {
    /// Input rejected before any model call.
    #[error("{0}")]
    InvalidInput(String),

    #[error(transparent)]
    Inference(#[from] InferenceError),
}

impl StudyError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        StudyError::InvalidInput(message.into())
    }
}

impl From<ValidationError> for StudyError {
    fn from(err: ValidationError) -> Self {
        StudyError::InvalidInput(err.to_string())
    }
}
