//! dogwalk-core - Core library for the dog walk logger
//!
//! This crate contains the walk log models, the local key-value store, the
//! Supabase REST client, and the sync service that ties them together. Any
//! front end (the CLI today) talks to [`WalkLogService`] only.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod services;
pub mod state;
pub mod store;
pub mod sync;
pub mod util;

pub use config::RemoteConfig;
pub use error::{Error, Result};
pub use models::{BathroomActivity, WalkLog, WalkLogId, WalkQuality, WalkStats};
pub use services::{SyncOperation, SyncOutcome, WalkLogService};
pub use state::SyncState;
pub use store::{MemorySettingsStore, SettingsStore};
pub use sync::{SupabaseWalkLogClient, SyncError, WalkLogBackend, WalkLogRemote};
