// SPDX-FileCopyrightText: 2026 Tether Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Consumer registry for the Tether shared-connection framework.
//!
//! Consumers (plugins using the shared connection) register themselves with
//! a [`ConsumerRegistry`] during host bootstrap. After the host signals that
//! all consumers have had the chance to register, it calls
//! [`ConsumerRegistry::configure`] exactly once; reads and deletes before
//! that point fail with a typed `NotConfigured` error. The active-consumer
//! set and the user-initiated disconnect set are persisted to a durable
//! [`OptionStore`](tether_core::OptionStore), which is the source of truth
//! across processes.

pub mod registry;

pub use registry::{ConsumerRegistry, RegistryStatus};
