// Copyright 2026 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=waymark_outline --heading-base-level=0

//! Waymark Outline: the described page and the scan that shapes it.
//!
//! Waymark Outline is the data layer of a documentation-page controller.
//!
//! - Represents the rendered page as an append-only tree of marked elements
//!   with extents and text ([`PageMap`]).
//! - Scans that tree once into tracked sections and contents links, with
//!   sublinks tied to their parent link ([`Outline::scan`]).
//! - Resolves fragments, anchors, and highlight chains without touching the
//!   page again ([`Outline::resolve`], [`Outline::chain`]).
//!
//! It holds no interaction state. Higher layers (a band tracker, a page
//! controller) watch section extents and route activations using the handles
//! minted here.
//!
//! ## Describing a page
//!
//! Hosts insert one [`Element`] per rendered thing they want the controller
//! to know about, marking each with the roles it plays (see [`Marks`]).
//! Document order is the tree's preorder; inserting a page front to back
//! keeps it equal to insertion order. Extents live in page space, `y` growing
//! downward, and are updated in place on relayout.
//!
//! # Example
//!
//! ```rust
//! use waymark_outline::{Element, Marks, Outline, PageMap};
//! use kurbo::Rect;
//!
//! // A contents rail with one entry and the section it points at.
//! let mut page = PageMap::new();
//! let root = page.insert(None, Element::default());
//! let nav = page.insert(
//!     Some(root),
//!     Element { marks: Marks::NAV_ROOT, ..Default::default() },
//! );
//! let _anchor = page.insert(
//!     Some(nav),
//!     Element {
//!         marks: Marks::NAV_LINK,
//!         href: Some("#intro".into()),
//!         ..Default::default()
//!     },
//! );
//! let _section = page.insert(
//!     Some(root),
//!     Element {
//!         marks: Marks::REGION,
//!         id: Some("intro".into()),
//!         extent: Rect::new(0.0, 0.0, 800.0, 600.0),
//!         ..Default::default()
//!     },
//! );
//!
//! let outline = Outline::scan(&page);
//! assert_eq!(outline.sections().len(), 1);
//! assert_eq!(outline.links().len(), 1);
//!
//! // Fragments resolve to sections; links carry their fragment target.
//! let section = outline.resolve("intro").unwrap();
//! assert_eq!(outline.links()[0].target, "intro");
//! assert_eq!(page.extent(section.element).y0, 0.0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod page;
pub mod scan;
pub mod types;

pub use page::PageMap;
pub use scan::Outline;
pub use types::{ElemId, Element, LinkId, Marks, NavLink, Section, SectionId};
