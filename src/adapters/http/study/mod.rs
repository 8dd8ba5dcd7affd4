//! HTTP adapter for study endpoints.
//!
//! - `POST /api/paraphrase` - Paraphrase text with the selected model
//! - `POST /api/questions` - Generate study questions from a passage

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::StudyAppState;
pub use routes::study_router;
