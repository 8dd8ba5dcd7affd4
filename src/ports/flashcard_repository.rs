//! Flashcard repository port.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::study::{FlashcardRow, StoredFlashcard};

#[async_trait]
pub trait FlashcardRepository: Send + Sync {
    /// Insert complete rows; incomplete rows are dropped first.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` when no complete row remains
    /// - `DatabaseError` on any store failure other than a missing
    ///   ownership column, which is recovered internally
    async fn insert(&self, rows: Vec<FlashcardRow>) -> Result<Vec<StoredFlashcard>, DomainError>;

    /// List cards, restricted to one owner when given.
    async fn list(&self, created_by: Option<&str>) -> Result<Vec<StoredFlashcard>, DomainError>;
}
