//! InsertFlashcardsHandler - Command handler for saving flashcards.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::study::{FlashcardRow, StoredFlashcard};
use crate::ports::FlashcardRepository;

#[derive(Debug, Clone)]
pub struct InsertFlashcardsCommand {
    pub rows: Vec<FlashcardRow>,
}

pub struct InsertFlashcardsHandler {
    repository: Arc<dyn FlashcardRepository>,
}

impl InsertFlashcardsHandler {
    pub fn new(repository: Arc<dyn FlashcardRepository>) -> Self {
        Self { repository }
    }

    /// Incomplete rows are dropped by the repository; the result holds only
    /// what was stored.
    pub async fn handle(
        &self,
        cmd: InsertFlashcardsCommand,
    ) -> Result<Vec<StoredFlashcard>, DomainError> {
        let submitted = cmd.rows.len();
        let stored = self.repository.insert(cmd.rows).await?;
        tracing::info!(submitted, stored = stored.len(), "Flashcards saved");
        Ok(stored)
    }
}
