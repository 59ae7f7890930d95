// SPDX-FileCopyrightText: 2026 Tether Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Tether connection framework.
//!
//! This crate provides the foundational error type, common types, and the
//! [`OptionStore`] trait that persistence backends implement. The consumer
//! registry in `tether-registry` is written against these seams.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::TetherError;
pub use traits::OptionStore;
pub use types::{ACTIVE_CONSUMERS_OPTION, ConsumerArgs, DISCONNECTED_CONSUMERS_OPTION};
