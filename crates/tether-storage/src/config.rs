// SPDX-FileCopyrightText: 2026 Tether Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Storage configuration.

use serde::Deserialize;

/// Configuration for the SQLite option store.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Path to the SQLite database file.
    #[serde(default = "default_database_path")]
    pub database_path: String,

    /// Enable WAL (Write-Ahead Logging) mode for SQLite.
    #[serde(default = "default_wal_mode")]
    pub wal_mode: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            wal_mode: default_wal_mode(),
        }
    }
}

fn default_database_path() -> String {
    dirs::data_dir()
        .map(|p| p.join("tether").join("tether.db"))
        .unwrap_or_else(|| std::path::PathBuf::from("tether.db"))
        .to_string_lossy()
        .into_owned()
}

fn default_wal_mode() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_points_at_data_dir() {
        let config = StorageConfig::default();
        assert!(config.database_path.ends_with("tether.db"));
        assert!(config.wal_mode);
    }

    #[test]
    fn config_deserializes_from_toml_with_defaults() {
        let config: StorageConfig = toml::from_str("database_path = \"/tmp/t.db\"").unwrap();
        assert_eq!(config.database_path, "/tmp/t.db");
        assert!(config.wal_mode, "wal_mode should default to true");
    }
}
