// SPDX-FileCopyrightText: 2026 Tether Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Durable key-value option store.

use async_trait::async_trait;

use crate::error::TetherError;

/// A durable key-value store of named options.
///
/// This is the persistence seam for the consumer registry: the active
/// consumer set and the disconnect set live here and outlive the process.
/// Values are JSON documents read and written whole; partial updates are
/// not part of the contract. No locking or transaction discipline is
/// provided at this layer -- last writer wins.
#[async_trait]
pub trait OptionStore: Send + Sync {
    /// Read the value stored under `key`, or `None` if never written.
    async fn get_option(&self, key: &str) -> Result<Option<serde_json::Value>, TetherError>;

    /// Overwrite the value stored under `key`.
    async fn set_option(&self, key: &str, value: serde_json::Value) -> Result<(), TetherError>;
}
