//! TableStore-backed implementation of FlashcardRepository.
//!
//! Inserts first try with every supplied field. Schemas that predate the
//! ownership column reject `created_by`; in that case the insert is repeated
//! once with the column stripped from every row.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::study::{complete_rows, FlashcardRow, StoredFlashcard, CREATED_BY_COLUMN};
use crate::ports::{Filter, FlashcardRepository, Row, SelectQuery, StoreError, TableStore};

pub const FLASHCARDS_TABLE: &str = "cards";

pub struct StoreFlashcardRepository {
    store: Arc<dyn TableStore>,
}

impl StoreFlashcardRepository {
    pub fn new(store: Arc<dyn TableStore>) -> Self {
        Self { store }
    }

    async fn insert_rows(&self, rows: &[FlashcardRow]) -> Result<Vec<Row>, StoreError> {
        let payload = rows.iter().map(to_row).collect();
        self.store.insert(FLASHCARDS_TABLE, payload).await
    }
}

fn to_row(row: &FlashcardRow) -> Row {
    let mut out = Row::new();
    out.insert("question".to_string(), Value::from(row.question.clone()));
    out.insert("answer".to_string(), Value::from(row.answer.clone()));
    if let Some(owner) = row.created_by.as_ref().filter(|_| row.has_owner()) {
        out.insert(CREATED_BY_COLUMN.to_string(), Value::from(owner.clone()));
    }
    out
}

fn from_rows(rows: Vec<Row>) -> Result<Vec<StoredFlashcard>, DomainError> {
    rows.into_iter()
        .map(|row| {
            serde_json::from_value(Value::Object(row))
                .map_err(|e| DomainError::database(format!("Invalid flashcard row: {e}")))
        })
        .collect()
}

#[async_trait]
impl FlashcardRepository for StoreFlashcardRepository {
    async fn insert(&self, rows: Vec<FlashcardRow>) -> Result<Vec<StoredFlashcard>, DomainError> {
        let mut rows = complete_rows(rows);
        if rows.is_empty() {
            return Err(DomainError::validation("rows", "No valid rows to insert."));
        }

        let first_attempt = self.insert_rows(&rows).await;
        let inserted = match first_attempt {
            Ok(inserted) => inserted,
            Err(err)
                if rows.iter().any(FlashcardRow::has_owner)
                    && err.is_undefined_column(CREATED_BY_COLUMN) =>
            {
                tracing::warn!(
                    error = %err,
                    "Store has no {} column, retrying insert without it",
                    CREATED_BY_COLUMN
                );
                for row in &mut rows {
                    row.created_by = None;
                }
                self.insert_rows(&rows).await?
            }
            Err(err) => return Err(err.into()),
        };

        from_rows(inserted)
    }

    async fn list(&self, created_by: Option<&str>) -> Result<Vec<StoredFlashcard>, DomainError> {
        let mut query = SelectQuery::new();
        if let Some(owner) = created_by.filter(|o| !o.trim().is_empty()) {
            query = query.filter(Filter::eq(CREATED_BY_COLUMN, owner));
        }
        let rows = self.store.select(FLASHCARDS_TABLE, query).await?;
        from_rows(rows)
    }
}
