//! Error types for dogwalk-core

use thiserror::Error;

/// Result type alias using dogwalk-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in local dogwalk-core operations.
///
/// Remote sync failures never appear here; see [`crate::sync::SyncError`].
#[derive(Error, Debug)]
pub enum Error {
    /// libSQL error
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A walk log without an id reached an operation that targets it by id
    #[error("Walk log has no id; cannot {0}")]
    MissingId(&'static str),
}
