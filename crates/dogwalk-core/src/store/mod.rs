//! Local key-value storage used by the sync service.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use crate::error::Result;

/// Trait for local key-value storage (async)
#[allow(async_fn_in_trait)]
pub trait SettingsStore {
    /// Read the value stored under `key`, if any
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    async fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// In-memory store. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemorySettingsStore {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemorySettingsStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let values = self.values.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(values.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self.values.lock().unwrap_or_else(PoisonError::into_inner);
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_store_get_missing() {
        let store = MemorySettingsStore::new();
        assert_eq!(store.get("userName").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_memory_store_clones_share_values() {
        let store = MemorySettingsStore::new();
        let other = store.clone();

        store.set("userName", "Jake").await.unwrap();
        store.set("userName", "Sam").await.unwrap();

        assert_eq!(other.get("userName").await.unwrap().as_deref(), Some("Sam"));
    }
}
