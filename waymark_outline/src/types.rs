// Copyright 2026 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for the page model and the scanned outline.

use alloc::string::String;

use bitflags::bitflags;
use kurbo::Rect;

/// Identifier for an element in a [`PageMap`](crate::PageMap).
///
/// Ids are plain indices into an append-only store, so they stay valid for
/// the life of the map that minted them.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ElemId(pub(crate) u32);

impl ElemId {
    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

bitflags! {
    /// Roles an element plays in the described page.
    ///
    /// Hosts mark elements when building a [`PageMap`](crate::PageMap);
    /// the scan and the wiring passes read nothing else.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Marks: u8 {
        /// A content region whose band membership is tracked.
        const REGION       = 0b0000_0001;
        /// Root of the in-page contents listing. Anchors are scanned beneath
        /// the first element carrying this mark.
        const NAV_ROOT     = 0b0000_0010;
        /// Top-level contents anchor.
        const NAV_LINK     = 0b0000_0100;
        /// Nested contents anchor, highlighted together with its parent link.
        const NAV_SUBLINK  = 0b0000_1000;
        /// Grouping container that associates sublinks with their parent link.
        const GROUP        = 0b0001_0000;
        /// Control that copies a nearby code sample when activated.
        const COPY_TRIGGER = 0b0010_0000;
        /// A code sample, the text source for a copy control.
        const CODE         = 0b0100_0000;
    }
}

impl Default for Marks {
    fn default() -> Self {
        Self::empty()
    }
}

/// Per-element data in the described page.
#[derive(Clone, Debug)]
pub struct Element {
    /// Roles this element plays. See [`Marks`].
    pub marks: Marks,
    /// Stable identifier, the target of same-page fragment references.
    pub id: Option<String>,
    /// Reference carried by an anchor. Same-page references start with `#`.
    pub href: Option<String>,
    /// Page-space extent. Hosts keep this current across relayouts.
    pub extent: Rect,
    /// Text content, if the element carries any.
    pub text: Option<String>,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            marks: Marks::default(),
            id: None,
            href: None,
            extent: Rect::ZERO,
            text: None,
        }
    }
}

/// Identifier for a scanned section.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct SectionId(pub(crate) u32);

impl SectionId {
    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

/// Identifier for a scanned contents link.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct LinkId(pub(crate) u32);

impl LinkId {
    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

/// A tracked content region, produced by [`Outline::scan`](crate::Outline::scan).
///
/// The section's extent is not cached here; it is read from the page when
/// needed so relayouts never leave the outline stale.
#[derive(Clone, Debug)]
pub struct Section {
    /// Handle of this section within its outline.
    pub id: SectionId,
    /// The page element the section was scanned from.
    pub element: ElemId,
    /// Identifier that fragment references resolve against.
    pub fragment: String,
}

/// A contents anchor, produced by [`Outline::scan`](crate::Outline::scan).
#[derive(Clone, Debug)]
pub struct NavLink {
    /// Handle of this link within its outline.
    pub id: LinkId,
    /// The anchor element the link was scanned from.
    pub anchor: ElemId,
    /// Fragment the anchor points at, with the leading `#` stripped.
    pub target: String,
    /// Enclosing top-level link, for nested anchors. Fixed at scan time.
    pub parent: Option<LinkId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marks_default_is_empty() {
        assert!(Marks::default().is_empty());
    }

    #[test]
    fn element_default_has_zero_extent() {
        let e = Element::default();
        assert_eq!(e.extent, Rect::ZERO);
        assert!(e.id.is_none() && e.href.is_none() && e.text.is_none());
    }

    #[test]
    fn marks_compose() {
        let m = Marks::NAV_LINK | Marks::NAV_SUBLINK;
        assert!(m.contains(Marks::NAV_LINK));
        assert!(m.intersects(Marks::NAV_SUBLINK | Marks::GROUP));
        assert!(!m.contains(Marks::GROUP));
    }
}
