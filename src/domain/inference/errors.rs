//! Inference failure taxonomy.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// User-facing message for a cold-starting model.
pub const MODEL_LOADING_MESSAGE: &str =
    "Model is loading on Hugging Face. Please try again in a few seconds.";

/// Discriminant of an [`InferenceError`], stable for API clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InferenceErrorKind {
    MissingCredential,
    ModelLoading,
    ClientError,
    Timeout,
    Unexpected,
}

impl fmt::Display for InferenceErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            InferenceErrorKind::MissingCredential => "MISSING_CREDENTIAL",
            InferenceErrorKind::ModelLoading => "MODEL_LOADING",
            InferenceErrorKind::ClientError => "CLIENT_ERROR",
            InferenceErrorKind::Timeout => "TIMEOUT",
            InferenceErrorKind::Unexpected => "UNEXPECTED",
        };
        write!(f, "{}", s)
    }
}

/// Failure outcome of a text-generation call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InferenceError {
    /// No token could be resolved; no network call was made.
    #[error("Hugging Face API key is missing.")]
    MissingCredential,

    /// Upstream answered 503 while the model warms up. Not retried here.
    #[error("{0}")]
    ModelLoading(String),

    /// Upstream answered with any other status >= 400; carries the body text.
    #[error("{body}")]
    ClientError { status: u16, body: String },

    #[error("Request to Hugging Face timed out.")]
    Timeout,

    #[error("{0}")]
    Unexpected(String),
}

impl InferenceError {
    pub fn model_loading() -> Self {
        InferenceError::ModelLoading(MODEL_LOADING_MESSAGE.to_string())
    }

    pub fn client_error(status: u16, body: impl Into<String>) -> Self {
        InferenceError::ClientError {
            status,
            body: body.into(),
        }
    }

    pub fn unexpected(message: impl Into<String>) -> Self {
        InferenceError::Unexpected(message.into())
    }

    pub fn kind(&self) -> InferenceErrorKind {
        match self {
            InferenceError::MissingCredential => InferenceErrorKind::MissingCredential,
            InferenceError::ModelLoading(_) => InferenceErrorKind::ModelLoading,
            InferenceError::ClientError { .. } => InferenceErrorKind::ClientError,
            InferenceError::Timeout => InferenceErrorKind::Timeout,
            InferenceError::Unexpected(_) => InferenceErrorKind::Unexpected,
        }
    }

    /// Human-readable message suitable for an API response.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_match_variants() {
        assert_eq!(
            InferenceError::MissingCredential.kind(),
            InferenceErrorKind::MissingCredential
        );
        assert_eq!(
            InferenceError::model_loading().kind(),
            InferenceErrorKind::ModelLoading
        );
        assert_eq!(
            InferenceError::client_error(400, "bad").kind(),
            InferenceErrorKind::ClientError
        );
        assert_eq!(InferenceError::Timeout.kind(), InferenceErrorKind::Timeout);
        assert_eq!(
            InferenceError::unexpected("boom").kind(),
            InferenceErrorKind::Unexpected
        );
    }

    #[test]
    fn client_error_message_is_body_text() {
        let err = InferenceError::client_error(422, "{\"error\":\"Input too long\"}");
        assert_eq!(err.message(), "{\"error\":\"Input too long\"}");
    }

    #[test]
    fn model_loading_uses_fixed_message() {
        assert_eq!(InferenceError::model_loading().message(), MODEL_LOADING_MESSAGE);
    }

    #[test]
    fn kind_serializes_screaming_snake_case() {
        let json = serde_json::to_string(&InferenceErrorKind::ModelLoading).unwrap();
        assert_eq!(json, "\"MODEL_LOADING\"");
        assert_eq!(InferenceErrorKind::ClientError.to_string(), "CLIENT_ERROR");
    }
}
