// SPDX-FileCopyrightText: 2026 Tether Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Option CRUD operations.
//!
//! Option values are JSON documents stored as text, read and written whole.

use rusqlite::params;
use tether_core::TetherError;

use crate::database::Database;

/// Read the option stored under `key`, or `None` if never written.
pub async fn get_option(db: &Database, key: &str) -> Result<Option<serde_json::Value>, TetherError> {
    let key = key.to_string();
    let raw = db
        .connection()
        .call(move |conn| {
            let mut stmt = conn.prepare("SELECT value FROM options WHERE key = ?1")?;
            let result = stmt.query_row(params![key], |row| row.get::<_, String>(0));
            match result {
                Ok(text) => Ok(Some(text)),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(e) => Err(e.into()),
            }
        })
        .await
        .map_err(crate::database::map_tr_err)?;

    match raw {
        Some(text) => {
            let value = serde_json::from_str(&text).map_err(|e| TetherError::Storage {
                source: Box::new(e),
            })?;
            Ok(Some(value))
        }
        None => Ok(None),
    }
}

/// Overwrite the option stored under `key`.
pub async fn set_option(
    db: &Database,
    key: &str,
    value: &serde_json::Value,
) -> Result<(), TetherError> {
    let key = key.to_string();
    let text = serde_json::to_string(value).map_err(|e| TetherError::Storage {
        source: Box::new(e),
    })?;
    db.connection()
        .call(move |conn| {
            conn.execute(
                "INSERT INTO options (key, value) VALUES (?1, ?2)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value",
                params![key, text],
            )?;
            Ok(())
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Remove the option stored under `key`. Returns true if a row was removed.
pub async fn delete_option(db: &Database, key: &str) -> Result<bool, TetherError> {
    let key = key.to_string();
    db.connection()
        .call(move |conn| {
            let removed = conn.execute("DELETE FROM options WHERE key = ?1", params![key])?;
            Ok(removed > 0)
        })
        .await
        .map_err(crate::database::map_tr_err)
}
