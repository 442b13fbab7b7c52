//! The walk log sync service.
//!
//! `WalkLogService` owns the in-memory walk logs. Every mutation updates memory,
//! publishes a snapshot, writes the local store, and hands the remote request
//! to a background task. Background tasks report back over a channel; their
//! results are applied only when the owner calls [`WalkLogService::process_next`],
//! [`WalkLogService::process_ready`] or [`WalkLogService::wait_idle`].

use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;

use tokio::sync::{mpsc, watch};

use crate::error::{Error, Result};
use crate::models::{WalkLog, WalkLogId, WalkQuality, WalkStats, DEFAULT_USER_NAME};
use crate::state::SyncState;
use crate::store::SettingsStore;
use crate::sync::{SyncError, SyncResult, WalkLogRemote};
use crate::util::normalize_text_option;

/// Store key holding the serialized walk logs.
pub const LOGS_KEY: &str = "dogWalkLogs";
/// Store key holding the display name.
pub const USER_NAME_KEY: &str = "userName";

/// A remote request kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyncOperation {
    Create,
    Update,
    Delete,
    Fetch,
}

impl SyncOperation {
    /// HTTP method used for this operation.
    pub const fn method(self) -> &'static str {
        match self {
            Self::Create => "POST",
            Self::Update => "PUT",
            Self::Delete => "DELETE",
            Self::Fetch => "GET",
        }
    }
}

impl fmt::Display for SyncOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.method())
    }
}

/// Result of one background request, as applied by the owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    Succeeded(SyncOperation),
    Failed {
        operation: SyncOperation,
        error: String,
    },
}

impl SyncOutcome {
    pub const fn operation(&self) -> SyncOperation {
        match self {
            Self::Succeeded(operation) | Self::Failed { operation, .. } => *operation,
        }
    }

    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded(_))
    }
}

/// A mutation to mirror to the remote.
enum Push {
    Create(WalkLog),
    Update(WalkLog),
    Delete,
}

impl Push {
    const fn operation(&self) -> SyncOperation {
        match self {
            Self::Create(_) => SyncOperation::Create,
            Self::Update(_) => SyncOperation::Update,
            Self::Delete => SyncOperation::Delete,
        }
    }
}

enum SyncEvent {
    Pushed {
        operation: SyncOperation,
        id: WalkLogId,
        result: SyncResult<()>,
    },
    Fetched(SyncResult<Vec<WalkLog>>),
}

/// Sends a background task's result to the owner.
///
/// If the task is dropped without reporting (it panicked or was cancelled),
/// the fallback event is sent instead so the owner's in-flight count stays
/// accurate.
struct Reporter {
    events: mpsc::UnboundedSender<SyncEvent>,
    fallback: Option<SyncEvent>,
}

impl Reporter {
    fn new(events: mpsc::UnboundedSender<SyncEvent>, fallback: SyncEvent) -> Self {
        Self {
            events,
            fallback: Some(fallback),
        }
    }

    fn report(mut self, event: SyncEvent) {
        self.fallback = None;
        self.events.send(event).ok();
    }
}

impl Drop for Reporter {
    fn drop(&mut self) {
        if let Some(event) = self.fallback.take() {
            self.events.send(event).ok();
        }
    }
}

/// Owner of the walk log collection and its local and remote copies.
pub struct WalkLogService<S, R> {
    logs: VecDeque<WalkLog>,
    store: S,
    remote: Arc<R>,
    snapshots: watch::Sender<Vec<WalkLog>>,
    events_tx: mpsc::UnboundedSender<SyncEvent>,
    events_rx: mpsc::UnboundedReceiver<SyncEvent>,
    in_flight: usize,
    last_result: SyncState,
}

impl<S: SettingsStore, R: WalkLogRemote> WalkLogService<S, R> {
    /// Load the locally stored logs and immediately start a remote fetch.
    ///
    /// Missing or unreadable local data yields an empty collection.
    pub async fn start(store: S, remote: R) -> Self {
        let logs = load_local(&store).await;
        let (snapshots, _) = watch::channel::<Vec<WalkLog>>(logs.iter().cloned().collect());
        let (events_tx, events_rx) = mpsc::unbounded_channel();

        let mut service = Self {
            logs,
            store,
            remote: Arc::new(remote),
            snapshots,
            events_tx,
            events_rx,
            in_flight: 0,
            last_result: SyncState::Synced,
        };
        service.fetch(true);
        service
    }

    /// Current logs, newest first.
    pub const fn logs(&self) -> &VecDeque<WalkLog> {
        &self.logs
    }

    /// Logs with the given quality, in collection order.
    pub fn logs_with_quality(&self, quality: WalkQuality) -> Vec<&WalkLog> {
        self.logs
            .iter()
            .filter(|log| log.quality == quality)
            .collect()
    }

    /// The log with exactly this id.
    pub fn get(&self, id: WalkLogId) -> Option<&WalkLog> {
        self.logs.iter().find(|log| log.id == Some(id))
    }

    /// Logs whose id starts with `prefix`.
    pub fn find_by_id_prefix(&self, prefix: &str) -> Vec<&WalkLog> {
        if let Ok(id) = prefix.trim().parse::<WalkLogId>() {
            return self.get(id).into_iter().collect();
        }
        self.logs
            .iter()
            .filter(|log| log.id_matches_prefix(prefix))
            .collect()
    }

    /// Totals over the current logs.
    pub fn stats(&self) -> WalkStats {
        WalkStats::from_logs(&self.logs)
    }

    /// Receive a snapshot of the logs after every change.
    pub fn subscribe(&self) -> watch::Receiver<Vec<WalkLog>> {
        self.snapshots.subscribe()
    }

    /// Number of remote requests whose results have not been applied yet.
    pub const fn pending_requests(&self) -> usize {
        self.in_flight
    }

    pub fn sync_state(&self) -> SyncState {
        if !self.remote.is_configured() {
            SyncState::Offline
        } else if self.in_flight > 0 {
            SyncState::Syncing
        } else {
            self.last_result
        }
    }

    /// Insert a new log at the front and push it to the remote.
    ///
    /// The log must carry an id. The local store is written whatever the remote does.
    pub async fn add(&mut self, log: WalkLog) -> Result<()> {
        let id = require_id(&log, "add")?;
        self.logs.push_front(log.clone());
        self.publish();
        self.spawn_push(id, Push::Create(log));
        self.persist().await
    }

    /// Replace the log with the same id and push the change.
    ///
    /// Returns `false` without touching anything when no log has that id.
    pub async fn update(&mut self, log: WalkLog) -> Result<bool> {
        let id = require_id(&log, "update")?;
        let Some(slot) = self.logs.iter_mut().find(|existing| existing.id == Some(id)) else {
            tracing::debug!(%id, "Update skipped; walk log not found");
            return Ok(false);
        };
        *slot = log.clone();
        self.publish();
        self.spawn_push(id, Push::Update(log));
        self.persist().await?;
        Ok(true)
    }

    /// Remove every log with this log's id and push the delete.
    ///
    /// Returns how many logs were removed. Deleting an absent id is not an error.
    pub async fn delete(&mut self, log: &WalkLog) -> Result<usize> {
        let id = require_id(log, "delete")?;
        let before = self.logs.len();
        self.logs.retain(|existing| existing.id != Some(id));
        let removed = before - self.logs.len();
        if removed > 0 {
            self.publish();
        }
        self.spawn_push(id, Push::Delete);
        self.persist().await?;
        Ok(removed)
    }

    /// Start a full read of the remote table.
    ///
    /// Every call issues its own request, forced or not. A successful fetch
    /// replaces every local log once it is applied; when several are in
    /// flight, the one applied last wins.
    pub fn fetch(&mut self, force: bool) {
        if !self.remote.is_configured() {
            tracing::debug!("Remote sync not configured; skipping fetch");
            return;
        }

        tracing::debug!(force, "Fetching walk logs");
        let remote = Arc::clone(&self.remote);
        let reporter = Reporter::new(
            self.events_tx.clone(),
            SyncEvent::Fetched(Err(SyncError::Aborted)),
        );
        self.in_flight += 1;
        tokio::spawn(async move {
            let result = remote.fetch_all().await;
            reporter.report(SyncEvent::Fetched(result));
        });
    }

    /// Display name, or "User" when none is saved.
    pub async fn user_name(&self) -> String {
        match self.store.get(USER_NAME_KEY).await {
            Ok(name) => {
                normalize_text_option(name).unwrap_or_else(|| DEFAULT_USER_NAME.to_string())
            }
            Err(error) => {
                tracing::warn!("Failed to read display name: {}", error);
                DEFAULT_USER_NAME.to_string()
            }
        }
    }

    /// Save the display name.
    pub async fn save_settings(&self, user_name: &str) -> Result<()> {
        self.store.set(USER_NAME_KEY, user_name.trim()).await
    }

    /// Wait for the next background result and apply it.
    ///
    /// Returns `Ok(None)` immediately when nothing is in flight.
    pub async fn process_next(&mut self) -> Result<Option<SyncOutcome>> {
        if self.in_flight == 0 {
            return Ok(None);
        }
        match self.events_rx.recv().await {
            Some(event) => self.apply(event).await.map(Some),
            None => Ok(None),
        }
    }

    /// Apply every background result that has already arrived, without waiting.
    pub async fn process_ready(&mut self) -> Result<Vec<SyncOutcome>> {
        let mut outcomes = Vec::new();
        while self.in_flight > 0 {
            let Ok(event) = self.events_rx.try_recv() else {
                break;
            };
            outcomes.push(self.apply(event).await?);
        }
        Ok(outcomes)
    }

    /// Apply results until no remote request is in flight.
    pub async fn wait_idle(&mut self) -> Result<Vec<SyncOutcome>> {
        let mut outcomes = Vec::new();
        while let Some(outcome) = self.process_next().await? {
            outcomes.push(outcome);
        }
        Ok(outcomes)
    }

    async fn apply(&mut self, event: SyncEvent) -> Result<SyncOutcome> {
        self.in_flight = self.in_flight.saturating_sub(1);
        let outcome = match event {
            SyncEvent::Pushed {
                operation,
                id,
                result,
            } => match result {
                Ok(()) => {
                    tracing::debug!(%id, "{} request succeeded", operation);
                    SyncOutcome::Succeeded(operation)
                }
                Err(error) => {
                    tracing::warn!(%id, "{} request failed: {}", operation, error);
                    SyncOutcome::Failed {
                        operation,
                        error: error.to_string(),
                    }
                }
            },
            SyncEvent::Fetched(result) => match result {
                Ok(fetched) => {
                    self.replace_with_remote(fetched);
                    self.persist().await?;
                    SyncOutcome::Succeeded(SyncOperation::Fetch)
                }
                Err(error) => {
                    tracing::warn!("Error fetching walk logs: {}", error);
                    SyncOutcome::Failed {
                        operation: SyncOperation::Fetch,
                        error: error.to_string(),
                    }
                }
            },
        };
        self.last_result = if outcome.is_success() {
            SyncState::Synced
        } else {
            SyncState::Error
        };
        Ok(outcome)
    }

    fn replace_with_remote(&mut self, mut fetched: Vec<WalkLog>) {
        fetched.sort_by(|a, b| b.date.cmp(&a.date));

        // Remote is the source of truth on read: local-only logs are dropped.
        let dropped = self
            .logs
            .iter()
            .filter(|local| !fetched.iter().any(|remote| remote.id == local.id))
            .count();
        if dropped > 0 {
            tracing::warn!(
                dropped,
                "Remote fetch replaced walk logs that were never confirmed by the server"
            );
        }

        tracing::info!(count = fetched.len(), "Applied remote walk logs");
        self.logs = fetched.into();
        self.publish();
    }

    fn spawn_push(&mut self, id: WalkLogId, push: Push) {
        let operation = push.operation();
        if !self.remote.is_configured() {
            tracing::debug!(%id, "Remote sync not configured; skipping {}", operation);
            return;
        }

        let remote = Arc::clone(&self.remote);
        let reporter = Reporter::new(
            self.events_tx.clone(),
            SyncEvent::Pushed {
                operation,
                id,
                result: Err(SyncError::Aborted),
            },
        );
        self.in_flight += 1;
        tokio::spawn(async move {
            let result = match push {
                Push::Create(log) => remote.create(log).await,
                Push::Update(log) => remote.update(id, log).await,
                Push::Delete => remote.delete(id).await,
            };
            reporter.report(SyncEvent::Pushed {
                operation,
                id,
                result,
            });
        });
    }

    fn publish(&self) {
        self.snapshots.send_replace(self.logs.iter().cloned().collect());
    }

    async fn persist(&self) -> Result<()> {
        let encoded = serde_json::to_string(&self.logs)?;
        self.store.set(LOGS_KEY, &encoded).await
    }
}

fn require_id(log: &WalkLog, action: &'static str) -> Result<WalkLogId> {
    log.id.ok_or_else(|| {
        tracing::error!("Walk log without an id passed to {}", action);
        Error::MissingId(action)
    })
}

async fn load_local<S: SettingsStore>(store: &S) -> VecDeque<WalkLog> {
    let raw = match store.get(LOGS_KEY).await {
        Ok(Some(raw)) => raw,
        Ok(None) => return VecDeque::new(),
        Err(error) => {
            tracing::warn!("Failed to read local walk logs: {}", error);
            return VecDeque::new();
        }
    };

    match serde_json::from_str::<VecDeque<WalkLog>>(&raw) {
        Ok(logs) => logs,
        Err(error) => {
            tracing::warn!("Ignoring malformed local walk logs: {}", error);
            VecDeque::new()
        }
    }
}
