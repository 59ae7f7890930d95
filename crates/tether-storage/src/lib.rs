// SPDX-FileCopyrightText: 2026 Tether Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite persistence layer for the Tether connection framework.
//!
//! Provides WAL-mode SQLite storage with embedded migrations, a
//! single-writer concurrency model via `tokio-rusqlite`, and a durable
//! key-value option store consumed by the consumer registry.

pub mod config;
pub mod database;
pub mod migrations;
pub mod queries;
pub mod store;

pub use config::StorageConfig;
pub use database::Database;
pub use store::SqliteOptions;
