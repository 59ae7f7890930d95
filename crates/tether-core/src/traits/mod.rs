// SPDX-FileCopyrightText: 2026 Tether Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trait definitions for pluggable Tether backends.
//!
//! Backends use `#[async_trait]` for dynamic dispatch compatibility.

pub mod store;

pub use store::OptionStore;
