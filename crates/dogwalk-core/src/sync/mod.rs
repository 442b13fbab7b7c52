//! Remote side of walk log sync.
//!
//! A [`WalkLogRemote`] performs one request per call and reports success or a
//! [`SyncError`]. Callers never retry; the sync service only logs failures.

mod supabase;

use std::future::Future;

use thiserror::Error;

use crate::config::RemoteConfig;
use crate::models::{WalkLog, WalkLogId};

pub use supabase::SupabaseWalkLogClient;

/// Why a remote call failed.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("Remote sync is not configured")]
    NotConfigured,
    #[error("Sync HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Sync request returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Failed to decode sync response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Sync task ended before reporting a result")]
    Aborted,
}

pub type SyncResult<T> = Result<T, SyncError>;

/// Remote store for walk logs, keyed by walk log id.
///
/// Futures must be `Send` so the service can run them on background tasks.
pub trait WalkLogRemote: Send + Sync + 'static {
    /// Insert a new row.
    fn create(&self, log: WalkLog) -> impl Future<Output = SyncResult<()>> + Send;

    /// Overwrite the row with `log`'s id.
    fn update(&self, id: WalkLogId, log: WalkLog)
        -> impl Future<Output = SyncResult<()>> + Send;

    /// Remove the row with `id`.
    fn delete(&self, id: WalkLogId) -> impl Future<Output = SyncResult<()>> + Send;

    /// Read every row.
    fn fetch_all(&self) -> impl Future<Output = SyncResult<Vec<WalkLog>>> + Send;

    /// Whether calls can reach a real backend.
    fn is_configured(&self) -> bool {
        true
    }
}

/// The remote a front end runs with: Supabase when configured, otherwise none.
#[derive(Debug, Clone)]
pub enum WalkLogBackend {
    Supabase(SupabaseWalkLogClient),
    Offline,
}

impl WalkLogBackend {
    /// Build the backend for an optional remote config.
    pub fn from_config(config: Option<&RemoteConfig>) -> SyncResult<Self> {
        match config {
            Some(config) => Ok(Self::Supabase(SupabaseWalkLogClient::new(config)?)),
            None => Ok(Self::Offline),
        }
    }
}

impl WalkLogRemote for WalkLogBackend {
    async fn create(&self, log: WalkLog) -> SyncResult<()> {
        match self {
            Self::Supabase(client) => client.create(log).await,
            Self::Offline => Err(SyncError::NotConfigured),
        }
    }

    async fn update(&self, id: WalkLogId, log: WalkLog) -> SyncResult<()> {
        match self {
            Self::Supabase(client) => client.update(id, log).await,
            Self::Offline => Err(SyncError::NotConfigured),
        }
    }

    async fn delete(&self, id: WalkLogId) -> SyncResult<()> {
        match self {
            Self::Supabase(client) => client.delete(id).await,
            Self::Offline => Err(SyncError::NotConfigured),
        }
    }

    async fn fetch_all(&self) -> SyncResult<Vec<WalkLog>> {
        match self {
            Self::Supabase(client) => client.fetch_all().await,
            Self::Offline => Err(SyncError::NotConfigured),
        }
    }

    fn is_configured(&self) -> bool {
        matches!(self, Self::Supabase(_))
    }
}
