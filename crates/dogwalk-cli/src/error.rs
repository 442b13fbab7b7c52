use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] dogwalk_core::Error),
    #[error(transparent)]
    Sync(#[from] dogwalk_core::SyncError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error("Walk ID cannot be empty")]
    EmptyLogId,
    #[error("Walk not found for id/prefix: {0}")]
    LogNotFound(String),
    #[error("{0}")]
    AmbiguousLogId(String),
    #[error("Nothing to change; pass --quality, --bathroom, or --notes")]
    NothingToEdit,
    #[error("Display name cannot be empty")]
    EmptyUserName,
    #[error(
        "Sync is not configured. Set DOGWALK_SUPABASE_URL and DOGWALK_SUPABASE_ANON_KEY (or pass --supabase-url and --supabase-anon-key) to enable `dogwalk sync`."
    )]
    SyncNotConfigured,
}
