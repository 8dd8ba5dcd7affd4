//! Inference domain - requests to hosted text-generation models.
//!
//! Outcomes are modelled as [`InferenceResult`]: either the generated
//! sequences or a typed [`InferenceError`].

mod errors;
mod models;
mod request;

pub use errors::{InferenceError, InferenceErrorKind, MODEL_LOADING_MESSAGE};
pub use models::{fallback_paraphrase_prompt, ParaphraseModel, QuestionModel};
pub use request::{GenerationParameters, InferenceRequest, MAX_RETURN_SEQUENCES};

/// Generated sequences in provider order, or the failure that prevented them.
pub type InferenceResult = Result<Vec<String>, InferenceError>;
