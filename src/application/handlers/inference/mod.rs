//! Inference handlers.
//!
//! - `InferenceGateway` - token resolution and provider call
//! - `ParaphraseHandler` - primary model with one fallback attempt
//! - `GenerateQuestionsHandler` - question list from a passage

mod gateway;
mod generate_questions;
mod paraphrase;

pub use gateway::InferenceGateway;
pub use generate_questions::{
    GenerateQuestionsCommand, GenerateQuestionsHandler, GenerateQuestionsResult,
    DEFAULT_MAX_QUESTIONS,
};
pub use paraphrase::{
    ParaphraseCommand, ParaphraseHandler, ParaphraseResult, DEFAULT_PARAPHRASE_COUNT,
};
