//! Sync state reported to front ends.

use std::fmt;

/// Where the service stands with the remote table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SyncState {
    /// No remote is configured; everything stays local.
    Offline,
    /// At least one remote request is in flight.
    Syncing,
    /// The last completed remote request succeeded (or none has run yet).
    #[default]
    Synced,
    /// The last completed remote request failed.
    Error,
}

impl SyncState {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Offline => "offline",
            Self::Syncing => "syncing",
            Self::Synced => "synced",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for SyncState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_synced() {
        assert_eq!(SyncState::default(), SyncState::Synced);
        assert_eq!(SyncState::default().to_string(), "synced");
    }
}
