// SPDX-FileCopyrightText: 2026 Tether Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite implementation of the OptionStore trait.

use async_trait::async_trait;
use tokio::sync::OnceCell;
use tracing::debug;

use tether_core::{OptionStore, TetherError};

use crate::config::StorageConfig;
use crate::database::Database;
use crate::queries;

/// SQLite-backed option store.
///
/// Wraps a [`Database`] handle and delegates to the typed query module.
/// The database is lazily initialized on the first call to [`initialize`].
///
/// [`initialize`]: SqliteOptions::initialize
pub struct SqliteOptions {
    config: StorageConfig,
    db: OnceCell<Database>,
}

impl SqliteOptions {
    /// Create a new SqliteOptions with the given configuration.
    ///
    /// The database connection is not opened until [`initialize`] is called.
    ///
    /// [`initialize`]: SqliteOptions::initialize
    pub fn new(config: StorageConfig) -> Self {
        Self {
            config,
            db: OnceCell::new(),
        }
    }

    /// Open the database at the configured path.
    pub async fn initialize(&self) -> Result<(), TetherError> {
        let db = Database::open(&self.config).await?;
        self.db.set(db).map_err(|_| TetherError::Storage {
            source: "option store already initialized".into(),
        })?;
        debug!(path = %self.config.database_path, "SQLite option store initialized");
        Ok(())
    }

    /// Checkpoint the WAL without closing the store.
    pub async fn checkpoint(&self) -> Result<(), TetherError> {
        let db = self.db()?;
        db.connection()
            .call(|conn| {
                conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
                Ok(())
            })
            .await
            .map_err(crate::database::map_tr_err)?;
        debug!("WAL checkpoint complete");
        Ok(())
    }

    /// Returns the underlying Database, or an error if not initialized.
    fn db(&self) -> Result<&Database, TetherError> {
        self.db.get().ok_or_else(|| TetherError::Storage {
            source: "option store not initialized -- call initialize() first".into(),
        })
    }
}

#[async_trait]
impl OptionStore for SqliteOptions {
    async fn get_option(&self, key: &str) -> Result<Option<serde_json::Value>, TetherError> {
        queries::options::get_option(self.db()?, key).await
    }

    async fn set_option(&self, key: &str, value: serde_json::Value) -> Result<(), TetherError> {
        queries::options::set_option(self.db()?, key, &value).await
    }
}
