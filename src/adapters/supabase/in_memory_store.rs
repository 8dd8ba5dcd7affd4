//! In-memory TableStore.
//!
//! Used when no Supabase project is configured, and by tests. Tables can be
//! given a fixed column set so inserts of unknown columns fail the way
//! PostgreSQL does.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use crate::ports::{Filter, Row, SelectQuery, StoreError, TableStore, UNDEFINED_COLUMN_SQLSTATE};

#[derive(Default)]
struct InMemoryState {
    tables: HashMap<String, Vec<Row>>,
    columns: HashMap<String, HashSet<String>>,
    insert_calls: HashMap<String, usize>,
    pending_failures: Vec<StoreError>,
}

/// Thread-safe table store kept in process memory.
#[derive(Clone, Default)]
pub struct InMemoryTableStore {
    state: Arc<Mutex<InMemoryState>>,
}

impl InMemoryTableStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts `table` to `columns`.
    pub fn with_table_columns(self, table: &str, columns: &[&str]) -> Self {
        if let Ok(mut state) = self.state.lock() {
            state.columns.insert(
                table.to_string(),
                columns.iter().map(|c| c.to_string()).collect(),
            );
        }
        self
    }

    /// Makes the next insert fail with `error`.
    pub fn fail_next_insert(&self, error: StoreError) {
        if let Ok(mut state) = self.state.lock() {
            state.pending_failures.push(error);
        }
    }

    /// Number of insert calls made against `table`, failed ones included.
    pub fn insert_calls(&self, table: &str) -> usize {
        self.state
            .lock()
            .map(|s| s.insert_calls.get(table).copied().unwrap_or(0))
            .unwrap_or(0)
    }

    /// Snapshot of every row in `table`.
    pub fn rows(&self, table: &str) -> Vec<Row> {
        self.state
            .lock()
            .map(|s| s.tables.get(table).cloned().unwrap_or_default())
            .unwrap_or_default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, InMemoryState>, StoreError> {
        self.state
            .lock()
            .map_err(|_| StoreError::new("in-memory store lock poisoned"))
    }
}

fn undefined_column(table: &str, column: &str) -> StoreError {
    StoreError::new(format!(
        "column \"{column}\" of relation \"{table}\" does not exist"
    ))
    .with_code(UNDEFINED_COLUMN_SQLSTATE)
    .with_status(400)
}

fn check_columns(
    known: Option<&HashSet<String>>,
    table: &str,
    row: &Row,
) -> Result<(), StoreError> {
    if let Some(known) = known {
        if let Some(unknown) = row.keys().find(|k| !known.contains(*k)) {
            return Err(undefined_column(table, unknown));
        }
    }
    Ok(())
}

/// Orders JSON values: strings lexically, numbers numerically, nulls first.
fn compare_values(a: Option<&Value>, b: Option<&Value>) -> std::cmp::Ordering {
    use std::cmp::Ordering;
    match (a, b) {
        (Some(Value::String(x)), Some(Value::String(y))) => x.cmp(y),
        (Some(Value::Number(x)), Some(Value::Number(y))) => x
            .as_f64()
            .partial_cmp(&y.as_f64())
            .unwrap_or(Ordering::Equal),
        (None | Some(Value::Null), None | Some(Value::Null)) => Ordering::Equal,
        (None | Some(Value::Null), _) => Ordering::Less,
        (_, None | Some(Value::Null)) => Ordering::Greater,
        (Some(x), Some(y)) => x.to_string().cmp(&y.to_string()),
    }
}

#[async_trait]
impl TableStore for InMemoryTableStore {
    async fn insert(&self, table: &str, rows: Vec<Row>) -> Result<Vec<Row>, StoreError> {
        let mut state = self.lock()?;
        *state.insert_calls.entry(table.to_string()).or_insert(0) += 1;

        if !state.pending_failures.is_empty() {
            return Err(state.pending_failures.remove(0));
        }

        for row in &rows {
            check_columns(state.columns.get(table), table, row)?;
        }

        let stored = state.tables.entry(table.to_string()).or_default();
        let mut inserted = Vec::with_capacity(rows.len());
        for mut row in rows {
            if !row.contains_key("id") {
                row.insert("id".to_string(), Value::from(stored.len() as u64 + 1));
            }
            stored.push(row.clone());
            inserted.push(row);
        }
        Ok(inserted)
    }

    async fn select(&self, table: &str, query: SelectQuery) -> Result<Vec<Row>, StoreError> {
        let state = self.lock()?;
        let mut rows: Vec<Row> = state
            .tables
            .get(table)
            .map(|rows| {
                rows.iter()
                    .filter(|row| query.filters.iter().all(|f| f.matches(row)))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();

        if let Some(order) = &query.order {
            rows.sort_by(|a, b| {
                let ordering = compare_values(a.get(&order.column), b.get(&order.column));
                if order.descending {
                    ordering.reverse()
                } else {
                    ordering
                }
            });
        }

        if let Some(limit) = query.limit {
            rows.truncate(limit);
        }

        Ok(rows)
    }

    async fn update(
        &self,
        table: &str,
        filter: Filter,
        changes: Row,
    ) -> Result<Vec<Row>, StoreError> {
        let mut state = self.lock()?;
        check_columns(state.columns.get(table), table, &changes)?;

        let mut updated = Vec::new();
        if let Some(rows) = state.tables.get_mut(table) {
            for row in rows.iter_mut().filter(|r| filter.matches(r)) {
                for (key, value) in &changes {
                    row.insert(key.clone(), value.clone());
                }
                updated.push(row.clone());
            }
        }
        Ok(updated)
    }
}
