//! libSQL-backed key-value store

use crate::db::Database;
use crate::error::Result;
use crate::store::SettingsStore;

/// libSQL implementation of `SettingsStore`
pub struct LibSqlSettingsStore {
    db: Database,
}

impl LibSqlSettingsStore {
    /// Create a store over an opened (and migrated) database
    pub const fn new(db: Database) -> Self {
        Self { db }
    }
}

impl SettingsStore for LibSqlSettingsStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let mut rows = self
            .db
            .connection()
            .query("SELECT value FROM settings WHERE key = ?", [key])
            .await?;

        if let Some(row) = rows.next().await? {
            let value: String = row.get(0)?;
            Ok(Some(value))
        } else {
            Ok(None)
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.db
            .connection()
            .execute(
                "INSERT OR REPLACE INTO settings (key, value) VALUES (?, ?)",
                [key, value],
            )
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    async fn setup() -> LibSqlSettingsStore {
        LibSqlSettingsStore::new(Database::open_in_memory().await.unwrap())
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_get_missing_key() {
        let store = setup().await;
        assert_eq!(store.get("userName").await.unwrap(), None);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_set_replaces_value() {
        let store = setup().await;

        store.set("userName", "Jake").await.unwrap();
        store.set("userName", "Sam").await.unwrap();

        assert_eq!(store.get("userName").await.unwrap().as_deref(), Some("Sam"));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_values_survive_reopen() {
        let tmp = tempdir().unwrap();
        let db_path = tmp.path().join("dogwalk.db");

        {
            let store = LibSqlSettingsStore::new(Database::open(&db_path).await.unwrap());
            store.set("dogWalkLogs", "[]").await.unwrap();
        }

        let store = LibSqlSettingsStore::new(Database::open(&db_path).await.unwrap());
        assert_eq!(store.get("dogWalkLogs").await.unwrap().as_deref(), Some("[]"));
    }
}
