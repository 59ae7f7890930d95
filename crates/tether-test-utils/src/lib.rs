// SPDX-FileCopyrightText: 2026 Tether Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Tether integration tests.

pub mod memory_store;

pub use memory_store::MemoryOptionStore;
