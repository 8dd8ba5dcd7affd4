//! Flashcard rows as exchanged with the backing store.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Optional ownership column; older schemas do not have it.
pub const CREATED_BY_COLUMN: &str = "created_by";

/// A question/answer pair submitted for storage.
///
/// Missing fields deserialize as empty so incomplete rows can be filtered
/// rather than rejected wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashcardRow {
    #[serde(default)]
    pub question: String,

    #[serde(default)]
    pub answer: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
}

impl FlashcardRow {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            created_by: None,
        }
    }

    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.created_by = Some(owner.into());
        self
    }

    /// Both question and answer carry text.
    pub fn is_complete(&self) -> bool {
        !self.question.trim().is_empty() && !self.answer.trim().is_empty()
    }

    pub fn has_owner(&self) -> bool {
        self.created_by.as_deref().is_some_and(|o| !o.is_empty())
    }
}

/// A flashcard as returned by the store after insertion or selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredFlashcard {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,

    #[serde(default)]
    pub question: String,

    #[serde(default)]
    pub answer: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Keeps only complete rows, preserving order.
pub fn complete_rows(rows: Vec<FlashcardRow>) -> Vec<FlashcardRow> {
    rows.into_iter().filter(FlashcardRow::is_complete).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn incomplete_rows_are_filtered() {
        let rows = vec![
            FlashcardRow::new("What is H2O?", "Water"),
            FlashcardRow::new("", "Orphan answer"),
            FlashcardRow::new("Orphan question", "  "),
        ];
        let kept = complete_rows(rows);
        assert_eq!(kept, vec![FlashcardRow::new("What is H2O?", "Water")]);
    }

    #[test]
    fn missing_fields_deserialize_as_empty() {
        let row: FlashcardRow = serde_json::from_value(json!({"question": "Q"})).unwrap();
        assert_eq!(row.answer, "");
        assert!(!row.is_complete());
    }

    #[test]
    fn owner_is_omitted_when_absent() {
        let json = serde_json::to_value(FlashcardRow::new("Q", "A")).unwrap();
        assert_eq!(json, json!({"question": "Q", "answer": "A"}));

        let owned = serde_json::to_value(FlashcardRow::new("Q", "A").with_owner("u1")).unwrap();
        assert_eq!(owned["created_by"], "u1");
    }

    #[test]
    fn stored_flashcard_accepts_numeric_id() {
        let card: StoredFlashcard = serde_json::from_value(json!({
            "id": 7,
            "question": "Q",
            "answer": "A",
            "created_at": "2024-01-01T00:00:00+00:00"
        }))
        .unwrap();
        assert_eq!(card.id, Some(json!(7)));
        assert!(card.created_by.is_none());
    }
}
