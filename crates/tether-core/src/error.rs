// SPDX-FileCopyrightText: 2026 Tether Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types shared across the Tether workspace.

use thiserror::Error;

/// Top-level error type for all Tether operations.
#[derive(Debug, Error)]
pub enum TetherError {
    /// A registry read or delete was attempted before `configure()` ran.
    ///
    /// This is a typed "too early" signal so ordering bugs surface instead
    /// of being masked by an empty result. Recoverable: retry after the
    /// host has configured the registry.
    #[error("registry not configured -- call configure() after consumer registration")]
    NotConfigured,

    /// Option store backend errors (database connection, query failure,
    /// serialization).
    #[error("storage error: {source}")]
    Storage {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Configuration errors (invalid TOML, missing required fields, type
    /// mismatches).
    #[error("configuration error: {0}")]
    Config(String),

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_configured_display_mentions_configure() {
        let err = TetherError::NotConfigured;
        assert!(err.to_string().contains("configure()"));
    }

    #[test]
    fn storage_error_carries_source() {
        let err = TetherError::Storage {
            source: Box::new(std::io::Error::other("disk gone")),
        };
        assert!(err.to_string().contains("disk gone"));
    }
}
