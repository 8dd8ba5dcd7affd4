//! Table store port - row-level access to the backing store.
//!
//! Mirrors the PostgREST surface the application needs: insert rows,
//! select with equality filters, and update rows matching a filter. Rows
//! travel as JSON objects.

use async_trait::async_trait;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::domain::foundation::DomainError;

/// SQLSTATE for `undefined_column`.
pub const UNDEFINED_COLUMN_SQLSTATE: &str = "42703";

/// A single JSON row.
pub type Row = Map<String, Value>;

/// Port for table-oriented storage.
#[async_trait]
pub trait TableStore: Send + Sync {
    /// Insert rows and return them as stored.
    async fn insert(&self, table: &str, rows: Vec<Row>) -> Result<Vec<Row>, StoreError>;

    /// Select rows matching every filter.
    async fn select(&self, table: &str, query: SelectQuery) -> Result<Vec<Row>, StoreError>;

    /// Apply `changes` to rows matching `filter`; returns the updated rows.
    async fn update(&self, table: &str, filter: Filter, changes: Row)
        -> Result<Vec<Row>, StoreError>;
}

/// Equality filter on one column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    pub column: String,
    pub value: String,
}

impl Filter {
    pub fn eq(column: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            value: value.into(),
        }
    }

    /// Whether `row` satisfies this filter. Non-string values compare by
    /// their JSON rendering.
    pub fn matches(&self, row: &Row) -> bool {
        match row.get(&self.column) {
            Some(Value::String(s)) => s == &self.value,
            Some(Value::Null) | None => false,
            Some(other) => other.to_string() == self.value,
        }
    }
}

/// Ordering on one column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub column: String,
    pub descending: bool,
}

/// Select parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectQuery {
    pub filters: Vec<Filter>,
    pub order: Option<Order>,
    pub limit: Option<usize>,
}

impl SelectQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn order_desc(mut self, column: impl Into<String>) -> Self {
        self.order = Some(Order {
            column: column.into(),
            descending: true,
        });
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Failure reported by the store or the transport to it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct StoreError {
    /// SQLSTATE or PostgREST error code, when the store supplied one.
    pub code: Option<String>,
    pub message: String,
    /// HTTP status of the store response, if one was received.
    pub status: Option<u16>,
}

impl StoreError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
            status: None,
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    /// Whether this error says `column` does not exist in the table.
    ///
    /// Matches SQLSTATE `42703` in the code or text, or text mentioning
    /// both "column" and the column name.
    pub fn is_undefined_column(&self, column: &str) -> bool {
        if self.code.as_deref() == Some(UNDEFINED_COLUMN_SQLSTATE)
            || self.message.contains(UNDEFINED_COLUMN_SQLSTATE)
        {
            return true;
        }
        let text = self.message.to_lowercase();
        text.contains("column") && text.contains(&column.to_lowercase())
    }
}

impl From<StoreError> for DomainError {
    fn from(err: StoreError) -> Self {
        let mut domain = DomainError::database(err.message);
        if let Some(code) = err.code {
            domain = domain.with_detail("store_code", code);
        }
        domain
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;
    use serde_json::json;

    fn row(value: Value) -> Row {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn table_store_is_object_safe() {
        fn _accepts_dyn(_store: &dyn TableStore) {}
    }

    #[test]
    fn undefined_column_by_sqlstate() {
        let err = StoreError::new("relation error").with_code("42703");
        assert!(err.is_undefined_column("created_by"));
    }

    #[test]
    fn undefined_column_by_message_text() {
        let err = StoreError::new(
            "Could not find the 'created_by' column of 'cards' in the schema cache",
        )
        .with_code("PGRST204");
        assert!(err.is_undefined_column("created_by"));

        let err = StoreError::new("ERROR 42703: something odd");
        assert!(err.is_undefined_column("created_by"));
    }

    #[test]
    fn other_errors_are_not_schema_mismatches() {
        let err = StoreError::new("duplicate key value violates unique constraint")
            .with_code("23505");
        assert!(!err.is_undefined_column("created_by"));

        let err = StoreError::new("column \"owner\" does not exist");
        assert!(!err.is_undefined_column("created_by"));
    }

    #[test]
    fn filter_compares_strings_and_numbers() {
        let r = row(json!({"id": 7, "email": "a@b.co", "note": null}));
        assert!(Filter::eq("id", "7").matches(&r));
        assert!(Filter::eq("email", "a@b.co").matches(&r));
        assert!(!Filter::eq("note", "null").matches(&r));
        assert!(!Filter::eq("missing", "x").matches(&r));
    }

    #[test]
    fn store_error_converts_to_database_error() {
        let err: DomainError = StoreError::new("timeout").with_code("57014").into();
        assert_eq!(err.code, ErrorCode::DatabaseError);
        assert_eq!(err.details.get("store_code"), Some(&"57014".to_string()));
    }
}
