//! Supabase (PostgREST) client for the `walk_logs` table.

use std::time::Duration;

use reqwest::{header, Client, Method, RequestBuilder};
use serde::Deserialize;

use super::{SyncError, SyncResult, WalkLogRemote};
use crate::config::RemoteConfig;
use crate::models::{WalkLog, WalkLogId};
use crate::util::compact_text;

const TABLE_NAME: &str = "walk_logs";
const REQUEST_TIMEOUT_SECS: u64 = 15;

/// HTTP client for the `walk_logs` table.
#[derive(Clone)]
pub struct SupabaseWalkLogClient {
    table_url: String,
    anon_key: String,
    client: Client,
}

impl std::fmt::Debug for SupabaseWalkLogClient {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("SupabaseWalkLogClient")
            .field("table_url", &self.table_url)
            .field("anon_key", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

impl SupabaseWalkLogClient {
    pub fn new(config: &RemoteConfig) -> SyncResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            table_url: format!("{}/{TABLE_NAME}", config.rest_url()),
            anon_key: config.anon_key().to_string(),
            client,
        })
    }

    fn collection_url(&self) -> &str {
        &self.table_url
    }

    fn select_all_url(&self) -> String {
        format!("{}?select=*", self.table_url)
    }

    fn item_url(&self, id: WalkLogId) -> String {
        format!("{}?id=eq.{id}", self.table_url)
    }

    /// Start a request carrying the API key, bearer token, and JSON headers.
    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        self.client
            .request(method, url)
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::ACCEPT, "application/json")
    }

    /// Send the request and return the body of a 2xx response.
    async fn send(request: RequestBuilder) -> SyncResult<String> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        if !status.is_success() {
            return Err(SyncError::Status {
                status: status.as_u16(),
                body: parse_api_error(&body),
            });
        }
        Ok(body)
    }
}

impl WalkLogRemote for SupabaseWalkLogClient {
    async fn create(&self, log: WalkLog) -> SyncResult<()> {
        tracing::debug!(id = ?log.id, "POST walk log");
        let request = self
            .request(Method::POST, self.collection_url())
            .json(&log);
        Self::send(request).await.map(drop)
    }

    async fn update(&self, id: WalkLogId, log: WalkLog) -> SyncResult<()> {
        tracing::debug!(%id, "PUT walk log");
        let request = self.request(Method::PUT, &self.item_url(id)).json(&log);
        Self::send(request).await.map(drop)
    }

    async fn delete(&self, id: WalkLogId) -> SyncResult<()> {
        tracing::debug!(%id, "DELETE walk log");
        let request = self
            .request(Method::DELETE, &self.item_url(id))
            .header("Prefer", "return=minimal");
        Self::send(request).await.map(drop)
    }

    async fn fetch_all(&self) -> SyncResult<Vec<WalkLog>> {
        tracing::debug!("GET walk logs");
        let request = self.request(Method::GET, &self.select_all_url());
        let body = Self::send(request).await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[derive(Debug, Deserialize)]
struct PostgrestErrorResponse {
    message: Option<String>,
    details: Option<String>,
    hint: Option<String>,
}

/// Reduce an error body to a short message, preferring PostgREST's `message`.
fn parse_api_error(body: &str) -> String {
    if let Ok(payload) = serde_json::from_str::<PostgrestErrorResponse>(body) {
        if let Some(message) = payload.message {
            let extra = payload.details.or(payload.hint).unwrap_or_default();
            return if extra.trim().is_empty() {
                compact_text(&message)
            } else {
                compact_text(&format!("{} ({})", message.trim(), extra.trim()))
            };
        }
    }

    let trimmed = compact_text(body);
    if trimmed.is_empty() {
        "empty response body".to_string()
    } else {
        trimmed
    }
}
