// SPDX-FileCopyrightText: 2026 Tether Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Cross-instance persistence tests: two registry instances sharing one
//! on-disk SQLite store, modelling two request processes sharing the
//! durable key-value store.

use std::sync::Arc;

use serde_json::json;
use tempfile::tempdir;

use tether_core::{ACTIVE_CONSUMERS_OPTION, ConsumerArgs, OptionStore};
use tether_registry::ConsumerRegistry;
use tether_storage::{SqliteOptions, StorageConfig};

fn version_args(version: &str) -> ConsumerArgs {
    let mut args = ConsumerArgs::new();
    args.insert("version".to_string(), json!(version));
    args
}

async fn open_store(path: &std::path::Path) -> Arc<SqliteOptions> {
    let store = SqliteOptions::new(StorageConfig {
        database_path: path.to_str().unwrap().to_string(),
        wal_mode: true,
    });
    store.initialize().await.unwrap();
    Arc::new(store)
}

#[tokio::test]
async fn active_set_written_by_one_process_is_seen_by_the_next() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("tether.db");

    // First "process": two consumers register, host configures.
    {
        let store = open_store(&db_path).await;
        let mut registry = ConsumerRegistry::new(store.clone());
        registry.upsert("pluginA", version_args("1.0")).await.unwrap();
        registry.upsert("pluginB", version_args("2.3")).await.unwrap();
        registry.configure().await.unwrap();
    }

    // Second "process": the persisted set already matches, so configure
    // performs no redundant write, and the persisted shape is intact.
    let store = open_store(&db_path).await;
    let mut registry = ConsumerRegistry::new(store.clone());
    registry.upsert("pluginA", version_args("1.0")).await.unwrap();
    registry.upsert("pluginB", version_args("2.3")).await.unwrap();
    registry.configure().await.unwrap();

    let persisted = store.get_option(ACTIVE_CONSUMERS_OPTION).await.unwrap();
    assert_eq!(
        persisted,
        Some(json!({
            "pluginA": {"version": "1.0"},
            "pluginB": {"version": "2.3"},
        }))
    );

    let all = registry.get_all(false).await.unwrap();
    assert_eq!(all.len(), 2);
}

#[tokio::test]
async fn consumer_count_change_triggers_repersist_on_next_configure() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("tether.db");

    {
        let store = open_store(&db_path).await;
        let mut registry = ConsumerRegistry::new(store);
        registry.upsert("pluginA", version_args("1.0")).await.unwrap();
        registry.upsert("pluginB", version_args("2.3")).await.unwrap();
        registry.configure().await.unwrap();
    }

    // pluginB was deactivated in the host; only pluginA registers now.
    let store = open_store(&db_path).await;
    let mut registry = ConsumerRegistry::new(store.clone());
    registry.upsert("pluginA", version_args("1.0")).await.unwrap();
    registry.configure().await.unwrap();

    let persisted = store.get_option(ACTIVE_CONSUMERS_OPTION).await.unwrap();
    assert_eq!(persisted, Some(json!({"pluginA": {"version": "1.0"}})));
}

#[tokio::test]
async fn disconnect_set_survives_process_boundaries() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("tether.db");

    {
        let store = open_store(&db_path).await;
        let mut registry = ConsumerRegistry::new(store);
        registry.upsert("pluginA", ConsumerArgs::new()).await.unwrap();
        registry.configure().await.unwrap();
        registry.disconnect_user_initiated("pluginA").await.unwrap();
    }

    let store = open_store(&db_path).await;
    let mut registry = ConsumerRegistry::new(store);
    registry.upsert("pluginA", ConsumerArgs::new()).await.unwrap();
    registry.configure().await.unwrap();

    let disconnected = registry.get_all_disconnected_user_initiated().await.unwrap();
    assert_eq!(disconnected, vec!["pluginA".to_string()]);

    let connected = registry.get_all(true).await.unwrap();
    assert!(connected.is_empty());

    registry.reconnect_user_initiated("pluginA").await.unwrap();
    let connected = registry.get_all(true).await.unwrap();
    assert_eq!(connected.len(), 1);
}
