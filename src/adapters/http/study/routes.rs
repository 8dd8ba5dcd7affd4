//! Axum router configuration for study endpoints.

use axum::{routing::post, Router};

use super::handlers::{generate_questions, paraphrase, StudyAppState};

/// Create the study API router.
///
/// # Routes
/// - `POST /api/paraphrase` - Paraphrase a passage (form body)
/// - `POST /api/questions` - Generate study questions (form body)
pub fn study_router() -> Router<StudyAppState> {
    Router::new()
        .route("/api/paraphrase", post(paraphrase))
        .route("/api/questions", post(generate_questions))
}
