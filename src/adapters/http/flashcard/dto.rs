//! Request and response types for the flashcard endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::study::{FlashcardRow, StoredFlashcard};

/// Body for `POST /api/flashcards`: one row or a batch.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum FlashcardSubmission {
    Many(Vec<FlashcardRow>),
    One(FlashcardRow),
}

impl FlashcardSubmission {
    pub fn into_rows(self) -> Vec<FlashcardRow> {
        match self {
            FlashcardSubmission::Many(rows) => rows,
            FlashcardSubmission::One(row) => vec![row],
        }
    }
}

/// Query string for `GET /api/flashcards`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListFlashcardsParams {
    #[serde(default)]
    pub user_id: Option<String>,
}

/// `{"ok": true, "data": [...]}` or `{"ok": false, "error": "..."}`.
#[derive(Debug, Clone, Serialize)]
pub struct FlashcardEnvelope {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<StoredFlashcard>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FlashcardEnvelope {
    pub fn data(data: Vec<StoredFlashcard>) -> Self {
        Self {
            ok: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            data: None,
            error: Some(message.into()),
        }
    }
}
