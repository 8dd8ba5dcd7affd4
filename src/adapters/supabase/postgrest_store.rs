//! PostgREST implementation of the TableStore port.
//!
//! Talks to the Supabase REST gateway at `{url}/rest/v1/{table}`. Every
//! request carries the project key both as `apikey` and as a bearer token,
//! and mutating requests ask for the written rows back.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::time::Duration;

use crate::ports::{Filter, Row, SelectQuery, StoreError, TableStore};

/// Connection settings for the Supabase project.
#[derive(Debug, Clone)]
pub struct SupabaseConfig {
    pub url: String,
    pub key: SecretString,
    pub timeout: Duration,
}

impl SupabaseConfig {
    pub fn new(url: impl Into<String>, key: SecretString) -> Self {
        Self {
            url: url.into().trim_end_matches('/').to_string(),
            key,
            timeout: Duration::from_secs(30),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Error body returned by PostgREST.
#[derive(Debug, Deserialize)]
struct PostgrestError {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    details: Option<String>,
}

/// Supabase-backed table store.
pub struct SupabaseTableStore {
    config: SupabaseConfig,
    client: Client,
}

impl SupabaseTableStore {
    pub fn new(config: SupabaseConfig) -> Result<Self, StoreError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| StoreError::new(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { config, client })
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.config.url, table)
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        let key = self.config.key.expose_secret();
        builder
            .header("apikey", key)
            .bearer_auth(key)
            .header("Prefer", "return=representation")
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Vec<Row>, StoreError> {
        let response = self
            .authorized(builder)
            .send()
            .await
            .map_err(|e| StoreError::new(format!("Store request failed: {e}")))?;

        read_rows(response).await
    }
}

/// Query pairs for an equality filter, PostgREST style.
fn filter_param(filter: &Filter) -> (String, String) {
    (filter.column.clone(), format!("eq.{}", filter.value))
}

fn select_params(query: &SelectQuery) -> Vec<(String, String)> {
    let mut params = vec![("select".to_string(), "*".to_string())];
    params.extend(query.filters.iter().map(filter_param));
    if let Some(order) = &query.order {
        let direction = if order.descending { "desc" } else { "asc" };
        params.push(("order".to_string(), format!("{}.{}", order.column, direction)));
    }
    if let Some(limit) = query.limit {
        params.push(("limit".to_string(), limit.to_string()));
    }
    params
}

async fn read_rows(response: Response) -> Result<Vec<Row>, StoreError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| StoreError::new(format!("Failed to read store response: {e}")))?;

    if !status.is_success() {
        return Err(classify_error(status.as_u16(), &body));
    }

    if body.trim().is_empty() {
        return Ok(Vec::new());
    }

    serde_json::from_str::<Vec<Row>>(&body)
        .map_err(|e| StoreError::new(format!("Unexpected store response: {e}")).with_status(status.as_u16()))
}

pub(crate) fn classify_error(status: u16, body: &str) -> StoreError {
    match serde_json::from_str::<PostgrestError>(body) {
        Ok(parsed) => {
            let message = parsed
                .message
                .or(parsed.details)
                .unwrap_or_else(|| format!("Store returned status {status}"));
            let err = StoreError::new(message).with_status(status);
            match parsed.code {
                Some(code) => err.with_code(code),
                None => err,
            }
        }
        Err(_) => {
            let text = body.trim();
            let message = if text.is_empty() {
                format!("Store returned status {status}")
            } else {
                text.to_string()
            };
            StoreError::new(message).with_status(status)
        }
    }
}

#[async_trait]
impl TableStore for SupabaseTableStore {
    async fn insert(&self, table: &str, rows: Vec<Row>) -> Result<Vec<Row>, StoreError> {
        tracing::debug!(table, count = rows.len(), "Inserting rows");
        self.send(self.client.post(self.table_url(table)).json(&rows))
            .await
    }

    async fn select(&self, table: &str, query: SelectQuery) -> Result<Vec<Row>, StoreError> {
        self.send(self.client.get(self.table_url(table)).query(&select_params(&query)))
            .await
    }

    async fn update(
        &self,
        table: &str,
        filter: Filter,
        changes: Row,
    ) -> Result<Vec<Row>, StoreError> {
        self.send(
            self.client
                .patch(self.table_url(table))
                .query(&[filter_param(&filter)])
                .json(&changes),
        )
        .await
    }
}
