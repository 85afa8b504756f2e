// Copyright 2026 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapters to platform clipboards.
//!
//! Enabled via feature flags to keep the core small and `no_std` by default.

#[cfg(feature = "arboard")]
pub mod arboard;
