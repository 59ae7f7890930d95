// SPDX-FileCopyrightText: 2026 Tether Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Database connection management with PRAGMA setup, WAL mode, and lifecycle.
//!
//! All writes are serialized through tokio-rusqlite's single background
//! thread. Do NOT create additional Connection instances for writes.

use tracing::debug;

use tether_core::TetherError;

use crate::config::StorageConfig;

/// Handle to an open SQLite database.
pub struct Database {
    conn: tokio_rusqlite::Connection,
}

impl Database {
    /// Open (or create) the database at the configured path.
    ///
    /// Creates parent directories as needed, applies PRAGMAs, and runs all
    /// pending embedded migrations before returning.
    pub async fn open(config: &StorageConfig) -> Result<Self, TetherError> {
        let path = config.database_path.clone();
        if let Some(parent) = std::path::Path::new(&path).parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(map_io_err)?;
            }
        }

        // Migrations run on a short-lived blocking connection so refinery's
        // synchronous runner stays off the async executor.
        let journal_mode = if config.wal_mode { "WAL" } else { "DELETE" };
        let migrate_path = path.clone();
        tokio::task::spawn_blocking(move || -> Result<(), TetherError> {
            let mut conn = rusqlite::Connection::open(&migrate_path).map_err(map_sql_err)?;
            conn.execute_batch(&format!("PRAGMA journal_mode = {journal_mode};"))
                .map_err(map_sql_err)?;
            crate::migrations::run_migrations(&mut conn)?;
            Ok(())
        })
        .await
        .map_err(|e| TetherError::Internal(format!("migration task panicked: {e}")))??;

        let conn = tokio_rusqlite::Connection::open(&path)
            .await
            .map_err(map_tr_err)?;
        conn.call(|conn| {
            conn.execute_batch(
                "PRAGMA synchronous = NORMAL;
                 PRAGMA busy_timeout = 5000;
                 PRAGMA foreign_keys = ON;",
            )?;
            Ok(())
        })
        .await
        .map_err(map_tr_err)?;

        debug!(path = %path, journal_mode, "database opened");
        Ok(Self { conn })
    }

    /// Returns the underlying tokio-rusqlite connection.
    pub fn connection(&self) -> &tokio_rusqlite::Connection {
        &self.conn
    }

    /// Checkpoint the WAL and close the connection.
    pub async fn close(self) -> Result<(), TetherError> {
        self.conn
            .call(|conn| {
                conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
                Ok(())
            })
            .await
            .map_err(map_tr_err)?;
        self.conn.close().await.map_err(map_tr_err)?;
        debug!("database closed");
        Ok(())
    }
}

/// Map a tokio-rusqlite error into the workspace storage error.
pub(crate) fn map_tr_err(e: tokio_rusqlite::Error) -> TetherError {
    TetherError::Storage {
        source: Box::new(e),
    }
}

fn map_sql_err(e: rusqlite::Error) -> TetherError {
    TetherError::Storage {
        source: Box::new(e),
    }
}

fn map_io_err(e: std::io::Error) -> TetherError {
    TetherError::Storage {
        source: Box::new(e),
    }
}
