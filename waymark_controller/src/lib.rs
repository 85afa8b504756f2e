// Copyright 2026 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=waymark_controller --heading-base-level=0

//! Waymark Controller: a deterministic, `no_std` interaction controller for
//! documentation pages.
//!
//! ## Overview
//!
//! This crate keeps an in-page table of contents synchronized with the
//! reader's position, turns contents clicks into scroll requests, and drives
//! copy-to-clipboard confirmation for code samples. It does none of this
//! against a real page: the host describes what it rendered as a
//! [`PageMap`](waymark_outline::PageMap), pumps scroll positions, clicks,
//! and time into a [`PageController`], and applies the [`Effect`]s that come
//! back (highlight toggles, scroll requests, clipboard writes, label
//! changes).
//!
//! ## Inputs
//!
//! - `set_viewport` / `set_extent` on scroll and relayout.
//! - `activate` when the user clicks a described element.
//! - `poll(now)` whenever convenient — per frame, or on demand after
//!   [`next_deadline`](PageController::next_deadline).
//! - `clipboard_result` once an issued clipboard write settles.
//!
//! ## Ordering
//!
//! Band transitions are handed over in one batch per poll, and when several
//! sections enter the active band in the same batch, [`Options::tie_break`]
//! picks the single winner. Highlight effects clear inner→outer and set
//! outer→inner, so a sublink switch under the same entry never flickers its
//! parent.
//!
//! ## Layering
//!
//! The controller only computes effects. The host executes them — including
//! the asynchronous clipboard write, whose outcome it reports back whenever
//! that settles; the confirmation label never waits for it. The optional
//! `arboard` feature provides a system-clipboard sink for hosts that want
//! one.
//!
//! # Example
//!
//! ```rust
//! use kurbo::Rect;
//! use waymark_controller::{Effect, Options, Outcome, PageController};
//! use waymark_outline::{Element, Marks, PageMap};
//!
//! // Describe a tiny page: one contents entry, one section.
//! let mut page = PageMap::new();
//! let nav = page.insert(None, Element { marks: Marks::NAV_ROOT, ..Default::default() });
//! let anchor = page.insert(
//!     Some(nav),
//!     Element {
//!         marks: Marks::NAV_LINK,
//!         href: Some("#intro".into()),
//!         ..Default::default()
//!     },
//! );
//! let _section = page.insert(
//!     None,
//!     Element {
//!         marks: Marks::REGION,
//!         id: Some("intro".into()),
//!         extent: Rect::new(0.0, 0.0, 800.0, 500.0),
//!         ..Default::default()
//!     },
//! );
//!
//! let mut controller = PageController::new(page, Options::default());
//! controller.start();
//!
//! // The section holds the viewport's center line, so its link lights up.
//! controller.set_viewport(Rect::new(0.0, 0.0, 800.0, 600.0));
//! let effects = controller.poll(0);
//! assert!(matches!(effects[0], Effect::Highlight { on: true, .. }));
//!
//! // Clicking the contents entry asks for a smooth scroll to the section.
//! let activation = controller.activate(anchor, 16);
//! assert_eq!(activation.outcome, Outcome::Consumed);
//! assert!(matches!(activation.effects[0], Effect::ScrollTo { top, .. } if top == 0.0));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod adapters;
pub mod controller;
pub mod copy;
pub mod highlight;
pub mod types;

pub use controller::PageController;
pub use copy::{CopyButton, CopyButtons, Indicator};
pub use highlight::{HighlightEvent, HighlightState};
pub use types::{
    Activation, ButtonId, ClipboardError, ClipboardSink, Effect, Options, Outcome, ScrollBehavior,
    TextSource, TieBreak,
};
