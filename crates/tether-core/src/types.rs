// SPDX-FileCopyrightText: 2026 Tether Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types used across the Tether framework.

/// Arguments supplied by a consumer when it registers with the registry
/// (version, constant names, and so on).
///
/// The registry treats the contents as opaque: no schema is enforced. A
/// plain JSON object is used because the persisted active-consumer set is
/// read by a remote system and its wire shape is a compatibility contract.
pub type ConsumerArgs = serde_json::Map<String, serde_json::Value>;

/// Fixed key of the persisted active-consumer set: a JSON object mapping
/// consumer slug to its [`ConsumerArgs`], read and written whole.
pub const ACTIVE_CONSUMERS_OPTION: &str = "tether_connection_active_consumers";

/// Fixed key of the persisted user-initiated disconnect set: a JSON array
/// of consumer slugs, read and written whole.
pub const DISCONNECTED_CONSUMERS_OPTION: &str = "tether_connection_disconnected_consumers";
