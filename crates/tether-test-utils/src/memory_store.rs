// SPDX-FileCopyrightText: 2026 Tether Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory option store for deterministic testing.
//!
//! `MemoryOptionStore` implements `OptionStore` over a plain map, enabling
//! fast, CI-runnable registry tests without touching disk.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use tether_core::{OptionStore, TetherError};

/// An option store backed by an in-memory map.
///
/// Can be pre-seeded to simulate persisted state written by a previous
/// process, and dumped to assert exactly what a test wrote.
#[derive(Clone)]
pub struct MemoryOptionStore {
    options: Arc<Mutex<HashMap<String, serde_json::Value>>>,
}

impl MemoryOptionStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            options: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Create a store pre-seeded with the given options.
    pub fn with_options(options: HashMap<String, serde_json::Value>) -> Self {
        Self {
            options: Arc::new(Mutex::new(options)),
        }
    }

    /// Snapshot of everything currently stored.
    pub async fn dump(&self) -> HashMap<String, serde_json::Value> {
        self.options.lock().await.clone()
    }
}

impl Default for MemoryOptionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OptionStore for MemoryOptionStore {
    async fn get_option(&self, key: &str) -> Result<Option<serde_json::Value>, TetherError> {
        Ok(self.options.lock().await.get(key).cloned())
    }

    async fn set_option(&self, key: &str, value: serde_json::Value) -> Result<(), TetherError> {
        self.options.lock().await.insert(key.to_string(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn set_then_get_roundtrips() {
        let store = MemoryOptionStore::new();
        store.set_option("k", json!({"a": 1})).await.unwrap();
        assert_eq!(store.get_option("k").await.unwrap(), Some(json!({"a": 1})));
    }

    #[tokio::test]
    async fn missing_key_is_none() {
        let store = MemoryOptionStore::new();
        assert!(store.get_option("nope").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn seeded_options_are_visible() {
        let mut seed = HashMap::new();
        seed.insert("existing".to_string(), json!(["x"]));
        let store = MemoryOptionStore::with_options(seed);

        assert_eq!(store.get_option("existing").await.unwrap(), Some(json!(["x"])));
        assert_eq!(store.dump().await.len(), 1);
    }
}
