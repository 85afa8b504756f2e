// Copyright 2026 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=waymark_band --heading-base-level=0

//! Waymark Band: visibility tracking against a viewport-relative band.
//!
//! Waymark Band answers one question for a set of watched rectangles: which of
//! them currently overlap a horizontal band carved out of the viewport?
//!
//! - Describe the band as fractional insets from the viewport edges with
//!   [`BandInset`]; the default is a zero-height line through the center.
//! - Register rectangles with [`BandTracker::watch`] and move them with
//!   [`BandTracker::set_extent`] as layout changes.
//! - Drain membership changes with [`BandTracker::take_records`]. Deliveries
//!   are batched: only net transitions since the previous drain are reported,
//!   and a target that enters and leaves between drains reports nothing.
//!
//! The tracker is passive. It never observes anything on its own; the host
//! feeds it viewport and extent updates and decides when to drain. That keeps
//! the crate free of platform callbacks and makes every delivery reproducible
//! in tests.
//!
//! # Example
//!
//! ```rust
//! use kurbo::Rect;
//! use waymark_band::{BandInset, BandRecord, BandTracker};
//!
//! let mut tracker: BandTracker<u32> = BandTracker::new(BandInset::center_line());
//! tracker.watch(1, Rect::new(0.0, 0.0, 800.0, 500.0));
//! tracker.watch(2, Rect::new(0.0, 500.0, 800.0, 1200.0));
//!
//! // Nothing is delivered until the tracker learns where the viewport is.
//! assert!(tracker.take_records().is_empty());
//!
//! // The viewport's center line sits at y = 300, inside the first rectangle.
//! tracker.set_viewport(Rect::new(0.0, 0.0, 800.0, 600.0));
//! let delivery = tracker.take_records();
//! assert_eq!(delivery.records, vec![BandRecord { target: 1, active: true }]);
//!
//! // Scrolling far enough swaps which rectangle holds the band.
//! tracker.set_viewport(Rect::new(0.0, 400.0, 800.0, 1000.0));
//! let delivery = tracker.take_records();
//! assert_eq!(delivery.records.len(), 2);
//! ```

#![no_std]

extern crate alloc;

pub mod tracker;
pub mod types;

pub use tracker::BandTracker;
pub use types::{BandInset, BandRecord, Delivery};
