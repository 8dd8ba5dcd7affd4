//! ListFlashcardsHandler - Query handler for stored flashcards.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::study::StoredFlashcard;
use crate::ports::FlashcardRepository;

#[derive(Debug, Clone, Default)]
pub struct ListFlashcardsQuery {
    /// Owner filter; `None` lists every card.
    pub user_id: Option<String>,
}

pub struct ListFlashcardsHandler {
    repository: Arc<dyn FlashcardRepository>,
}

impl ListFlashcardsHandler {
    pub fn new(repository: Arc<dyn FlashcardRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: ListFlashcardsQuery) -> Result<Vec<StoredFlashcard>, DomainError> {
        self.repository.list(query.user_id.as_deref()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::supabase::{InMemoryTableStore, StoreFlashcardRepository};
    use crate::domain::study::FlashcardRow;

    #[tokio::test]
    async fn lists_by_owner() {
        let repository = Arc::new(StoreFlashcardRepository::new(Arc::new(InMemoryTableStore::new())));
        repository
            .insert(vec![
                FlashcardRow::new("Q1", "A1").with_owner("u1"),
                FlashcardRow::new("Q2", "A2"),
            ])
            .await
            .unwrap();
        let handler = ListFlashcardsHandler::new(repository);

        let mine = handler
            .handle(ListFlashcardsQuery {
                user_id: Some("u1".to_string()),
            })
            .await
            .unwrap();
        let all = handler.handle(ListFlashcardsQuery::default()).await.unwrap();

        assert_eq!(mine.len(), 1);
        assert_eq!(all.len(), 2);
    }
}
