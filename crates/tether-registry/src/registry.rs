// SPDX-FileCopyrightText: 2026 Tether Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The consumer registry: in-memory slug -> args cache with a one-time
//! configure gate and selective persistence.
//!
//! The in-memory mapping is a cache, not an authority: cross-process
//! consistency relies entirely on the durable option store. Persistence of
//! the active set happens during [`ConsumerRegistry::configure`] (when the
//! store looks stale) or when a caller forces it via
//! [`ConsumerRegistry::update_active_consumers_option`].

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use tether_core::{
    ACTIVE_CONSUMERS_OPTION, ConsumerArgs, DISCONNECTED_CONSUMERS_OPTION, OptionStore,
    TetherError,
};

/// Lifecycle of a [`ConsumerRegistry`] within one process.
///
/// There is exactly one transition, `Uninitialized -> Configured`, taken by
/// [`ConsumerRegistry::configure`]; there is no way back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryStatus {
    /// Consumers may register, but reads and deletes are rejected.
    Uninitialized,
    /// The full API is available.
    Configured,
}

/// Registry of consumers using the shared connection.
///
/// Created empty at process start and injected with the durable option
/// store it persists to. Consumers call [`upsert`] during bootstrap; the
/// host calls [`configure`] once after all of them have had the chance,
/// and before any read or delete.
///
/// [`upsert`]: ConsumerRegistry::upsert
/// [`configure`]: ConsumerRegistry::configure
pub struct ConsumerRegistry {
    store: Arc<dyn OptionStore>,
    consumers: HashMap<String, ConsumerArgs>,
    status: RegistryStatus,
    refresh_needed: bool,
}

impl ConsumerRegistry {
    /// Create a new empty, unconfigured registry over the given store.
    pub fn new(store: Arc<dyn OptionStore>) -> Self {
        Self {
            store,
            consumers: HashMap::new(),
            status: RegistryStatus::Uninitialized,
            refresh_needed: false,
        }
    }

    /// Insert or replace the args for `slug` (last write wins).
    ///
    /// If `slug` is absent from the last-persisted active set, the registry
    /// is marked as needing a refresh so [`configure`] will re-persist.
    /// Nothing is persisted here; callable before or after configuration.
    ///
    /// [`configure`]: ConsumerRegistry::configure
    pub async fn upsert(&mut self, slug: &str, args: ConsumerArgs) -> Result<(), TetherError> {
        if !self.refresh_needed {
            let persisted = self.persisted_active_set().await?;
            if !persisted.contains_key(slug) {
                self.refresh_needed = true;
            }
        }
        debug!(slug, "consumer registered");
        self.consumers.insert(slug.to_string(), args);
        Ok(())
    }

    /// Get the args for `slug`, or `None` if it never registered.
    ///
    /// Absence is not an error; calling before [`configure`] is.
    ///
    /// [`configure`]: ConsumerRegistry::configure
    pub fn get_one(&self, slug: &str) -> Result<Option<&ConsumerArgs>, TetherError> {
        self.ensure_configured()?;
        Ok(self.consumers.get(slug))
    }

    /// Get the full consumer mapping.
    ///
    /// With `connected_only`, slugs in the persisted disconnect set are
    /// excluded. Iteration order is not significant.
    pub async fn get_all(
        &self,
        connected_only: bool,
    ) -> Result<HashMap<String, ConsumerArgs>, TetherError> {
        self.ensure_configured()?;
        let mut consumers = self.consumers.clone();
        if connected_only {
            let disconnected = self.get_all_disconnected_user_initiated().await?;
            consumers.retain(|slug, _| !disconnected.iter().any(|d| d == slug));
        }
        Ok(consumers)
    }

    /// Remove `slug` from the in-memory mapping; a no-op if absent.
    ///
    /// The disconnect set is untouched, and the persisted active set is not
    /// updated: the mapping is a cache, so persisting a deletion across
    /// process boundaries is the caller's job via
    /// [`update_active_consumers_option`].
    ///
    /// [`update_active_consumers_option`]: ConsumerRegistry::update_active_consumers_option
    pub fn delete(&mut self, slug: &str) -> Result<(), TetherError> {
        self.ensure_configured()?;
        if self.consumers.remove(slug).is_some() {
            debug!(slug, "consumer removed from cache");
        }
        Ok(())
    }

    /// One-time configuration gate; a no-op once configured.
    ///
    /// The host must call this exactly once per process, after all
    /// consumers have had the opportunity to [`upsert`] and before any
    /// [`get_one`]/[`get_all`]/[`delete`]. The in-memory mapping is
    /// persisted only when the consumer count differs from the persisted
    /// set's count or a refresh was flagged; this is an optimization, and
    /// [`update_active_consumers_option`] remains the unconditional path.
    ///
    /// [`upsert`]: ConsumerRegistry::upsert
    /// [`get_one`]: ConsumerRegistry::get_one
    /// [`get_all`]: ConsumerRegistry::get_all
    /// [`delete`]: ConsumerRegistry::delete
    /// [`update_active_consumers_option`]: ConsumerRegistry::update_active_consumers_option
    pub async fn configure(&mut self) -> Result<(), TetherError> {
        if self.status == RegistryStatus::Configured {
            return Ok(());
        }

        let persisted = self.persisted_active_set().await?;
        if persisted.len() != self.consumers.len() || self.refresh_needed {
            self.update_active_consumers_option().await?;
        }

        self.status = RegistryStatus::Configured;
        debug!(consumers = self.consumers.len(), "registry configured");
        Ok(())
    }

    /// Unconditionally overwrite the persisted active set with the current
    /// in-memory mapping.
    ///
    /// The persisted shape (a JSON object mapping slug to args) is consumed
    /// by a remote system; changing per-record fields requires a
    /// coordinated migration, not a local-only change.
    pub async fn update_active_consumers_option(&mut self) -> Result<(), TetherError> {
        let map: serde_json::Map<String, serde_json::Value> = self
            .consumers
            .iter()
            .map(|(slug, args)| (slug.clone(), serde_json::Value::Object(args.clone())))
            .collect();
        self.store
            .set_option(ACTIVE_CONSUMERS_OPTION, serde_json::Value::Object(map))
            .await?;
        self.refresh_needed = false;
        debug!(consumers = self.consumers.len(), "active consumer set persisted");
        Ok(())
    }

    /// Record that a user explicitly disconnected `slug`.
    ///
    /// Idempotent: the persisted disconnect set has set semantics.
    pub async fn disconnect_user_initiated(&self, slug: &str) -> Result<(), TetherError> {
        let mut disconnected = self.get_all_disconnected_user_initiated().await?;
        if !disconnected.iter().any(|d| d == slug) {
            disconnected.push(slug.to_string());
            self.write_disconnected(&disconnected).await?;
            debug!(slug, "consumer marked as disconnected by user");
        }
        Ok(())
    }

    /// Remove `slug` from the persisted disconnect set; a no-op if absent.
    pub async fn reconnect_user_initiated(&self, slug: &str) -> Result<(), TetherError> {
        let mut disconnected = self.get_all_disconnected_user_initiated().await?;
        if let Some(pos) = disconnected.iter().position(|d| d == slug) {
            disconnected.remove(pos);
            self.write_disconnected(&disconnected).await?;
            debug!(slug, "consumer reconnected by user");
        }
        Ok(())
    }

    /// The persisted disconnect set, in insertion order; empty when never
    /// written.
    pub async fn get_all_disconnected_user_initiated(&self) -> Result<Vec<String>, TetherError> {
        let value = self.store.get_option(DISCONNECTED_CONSUMERS_OPTION).await?;
        let slugs = match value {
            Some(serde_json::Value::Array(items)) => items
                .into_iter()
                .filter_map(|item| item.as_str().map(str::to_string))
                .collect(),
            _ => Vec::new(),
        };
        Ok(slugs)
    }

    /// Whether `configure()` has run.
    pub fn status(&self) -> RegistryStatus {
        self.status
    }

    /// Number of consumers in the in-memory cache.
    pub fn len(&self) -> usize {
        self.consumers.len()
    }

    /// Returns true if no consumers are cached.
    pub fn is_empty(&self) -> bool {
        self.consumers.is_empty()
    }

    fn ensure_configured(&self) -> Result<(), TetherError> {
        match self.status {
            RegistryStatus::Configured => Ok(()),
            RegistryStatus::Uninitialized => Err(TetherError::NotConfigured),
        }
    }

    /// The last-persisted active set as a JSON object; empty when never
    /// written or written with an unexpected shape.
    async fn persisted_active_set(
        &self,
    ) -> Result<serde_json::Map<String, serde_json::Value>, TetherError> {
        let value = self.store.get_option(ACTIVE_CONSUMERS_OPTION).await?;
        match value {
            Some(serde_json::Value::Object(map)) => Ok(map),
            _ => Ok(serde_json::Map::new()),
        }
    }

    async fn write_disconnected(&self, slugs: &[String]) -> Result<(), TetherError> {
        let items = slugs
            .iter()
            .map(|s| serde_json::Value::String(s.clone()))
            .collect();
        self.store
            .set_option(DISCONNECTED_CONSUMERS_OPTION, serde_json::Value::Array(items))
            .await
    }
}
