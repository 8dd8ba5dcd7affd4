//! HTTP handlers for flashcard endpoints.
//!
//! These answer with an `ok`/`data`/`error` envelope rather than `ApiError`
//! because the browser client branches on `ok`.

use std::sync::Arc;

use axum::extract::{Json, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::application::handlers::flashcard::{
    InsertFlashcardsCommand, InsertFlashcardsHandler, ListFlashcardsHandler, ListFlashcardsQuery,
};
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::FlashcardRepository;

use super::dto::{FlashcardEnvelope, FlashcardSubmission, ListFlashcardsParams};

#[derive(Clone)]
pub struct FlashcardAppState {
    pub flashcard_repository: Arc<dyn FlashcardRepository>,
}

impl FlashcardAppState {
    pub fn new(flashcard_repository: Arc<dyn FlashcardRepository>) -> Self {
        Self {
            flashcard_repository,
        }
    }

    pub fn insert_handler(&self) -> InsertFlashcardsHandler {
        InsertFlashcardsHandler::new(self.flashcard_repository.clone())
    }

    pub fn list_handler(&self) -> ListFlashcardsHandler {
        ListFlashcardsHandler::new(self.flashcard_repository.clone())
    }
}

fn failure(err: DomainError) -> Response {
    let status = match err.code {
        ErrorCode::ValidationFailed => StatusCode::BAD_REQUEST,
        _ => {
            tracing::error!(error = %err, "Flashcard request failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    (status, Json(FlashcardEnvelope::error(err.message))).into_response()
}

/// POST /api/flashcards
pub async fn insert_flashcards(
    State(state): State<FlashcardAppState>,
    Json(submission): Json<FlashcardSubmission>,
) -> Response {
    let cmd = InsertFlashcardsCommand {
        rows: submission.into_rows(),
    };

    match state.insert_handler().handle(cmd).await {
        Ok(stored) => Json(FlashcardEnvelope::data(stored)).into_response(),
        Err(err) => failure(err),
    }
}

/// GET /api/flashcards?user_id=
pub async fn list_flashcards(
    State(state): State<FlashcardAppState>,
    Query(params): Query<ListFlashcardsParams>,
) -> Response {
    let query = ListFlashcardsQuery {
        user_id: params.user_id.filter(|id| !id.trim().is_empty()),
    };

    match state.list_handler().handle(query).await {
        Ok(cards) => Json(FlashcardEnvelope::data(cards)).into_response(),
        Err(err) => failure(err),
    }
}
