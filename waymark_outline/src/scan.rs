// Copyright 2026 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scanning a described page into sections and contents links.
//!
//! ## Overview
//!
//! [`Outline::scan`] walks a [`PageMap`] once and produces two tables:
//! the tracked sections (regions carrying an identifier) and the contents
//! links (anchors under the page's contents root), each in document order.
//! Sublinks are tied to their parent link through the nearest enclosing
//! group, so highlighting a nested entry can also light the chain above it.
//!
//! The scan is total: pages without regions, without a contents root, or
//! with anchors pointing off the page produce a smaller outline, never an
//! error.

use alloc::string::String;
use alloc::vec::Vec;

use crate::page::PageMap;
use crate::types::{ElemId, LinkId, Marks, NavLink, Section, SectionId};

/// The scanned shape of a page: tracked sections and contents links.
///
/// Built once by [`Outline::scan`] and read-only afterwards. Handles index
/// into the outline that minted them.
#[derive(Clone, Debug, Default)]
pub struct Outline {
    sections: Vec<Section>,
    links: Vec<NavLink>,
}

impl Outline {
    /// Scan `page` for sections and contents links.
    ///
    /// Sections are `REGION` elements carrying an identifier, in document
    /// order. Links are `NAV_LINK` and `NAV_SUBLINK` anchors below the first
    /// `NAV_ROOT` element whose reference is a same-page fragment; anchors
    /// with any other reference are skipped so navigation is never asked to
    /// resolve an off-page target.
    pub fn scan(page: &PageMap) -> Self {
        let mut sections = Vec::new();
        let mut nav_root = None;
        for (id, element) in page.iter() {
            if element.marks.contains(Marks::REGION)
                && let Some(fragment) = element.id.clone()
            {
                #[allow(
                    clippy::cast_possible_truncation,
                    reason = "SectionId uses 32-bit indices by design."
                )]
                let sid = SectionId(sections.len() as u32);
                sections.push(Section {
                    id: sid,
                    element: id,
                    fragment,
                });
            }
            if nav_root.is_none() && element.marks.contains(Marks::NAV_ROOT) {
                nav_root = Some(id);
            }
        }

        let mut links = Vec::new();
        if let Some(root) = nav_root {
            for anchor in page.descendants(root) {
                let element = page.element(anchor);
                if !element.marks.intersects(Marks::NAV_LINK | Marks::NAV_SUBLINK) {
                    continue;
                }
                let Some(href) = element.href.as_deref() else {
                    continue;
                };
                let Some(target) = href.strip_prefix('#') else {
                    log::debug!("skipping contents anchor {anchor:?} with off-page reference {href:?}");
                    continue;
                };
                #[allow(
                    clippy::cast_possible_truncation,
                    reason = "LinkId uses 32-bit indices by design."
                )]
                let lid = LinkId(links.len() as u32);
                links.push(NavLink {
                    id: lid,
                    anchor,
                    target: String::from(target),
                    parent: None,
                });
            }
            // Parents are resolved in a second pass so a sublink can attach
            // to a top-level link scanned after it.
            for i in 0..links.len() {
                let anchor = links[i].anchor;
                if page.element(anchor).marks.contains(Marks::NAV_SUBLINK) {
                    links[i].parent = parent_link(page, &links, anchor);
                }
            }
        }

        Self { sections, links }
    }

    /// All sections, in document order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// All contents links, in document order.
    pub fn links(&self) -> &[NavLink] {
        &self.links
    }

    /// True when the scan found neither sections nor links.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty() && self.links.is_empty()
    }

    /// Borrow a section by handle.
    pub fn section(&self, id: SectionId) -> &Section {
        &self.sections[id.idx()]
    }

    /// Borrow a link by handle.
    pub fn link(&self, id: LinkId) -> &NavLink {
        &self.links[id.idx()]
    }

    /// Resolve a fragment to the section it identifies.
    pub fn resolve(&self, fragment: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.fragment == fragment)
    }

    /// The link scanned from `anchor`, if any.
    pub fn link_for_anchor(&self, anchor: ElemId) -> Option<&NavLink> {
        self.links.iter().find(|l| l.anchor == anchor)
    }

    /// The first link (document order) targeting `fragment`.
    pub fn link_for_fragment(&self, fragment: &str) -> Option<&NavLink> {
        self.links.iter().find(|l| l.target == fragment)
    }

    /// The chain of links lit together for `id`: ancestors first, the link
    /// itself last.
    pub fn chain(&self, id: LinkId) -> Vec<LinkId> {
        let mut out = Vec::new();
        let mut cur = Some(id);
        while let Some(l) = cur {
            out.push(l);
            cur = self.link(l).parent;
        }
        out.reverse();
        out
    }
}

/// The first top-level link inside the sublink's nearest enclosing group.
fn parent_link(page: &PageMap, links: &[NavLink], anchor: ElemId) -> Option<LinkId> {
    let group = page
        .ancestors(anchor)
        .find(|&a| page.element(a).marks.contains(Marks::GROUP))?;
    links.iter().find_map(|link| {
        let is_parent = page.element(link.anchor).marks.contains(Marks::NAV_LINK)
            && page.ancestors(link.anchor).any(|a| a == group);
        is_parent.then_some(link.id)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Element;
    use alloc::vec;
    use kurbo::Rect;

    fn anchor(href: &str, marks: Marks) -> Element {
        Element {
            marks,
            href: Some(href.into()),
            ..Default::default()
        }
    }

    fn region(id: &str, y0: f64, y1: f64) -> Element {
        Element {
            marks: Marks::REGION,
            id: Some(id.into()),
            extent: Rect::new(0.0, y0, 800.0, y1),
            ..Default::default()
        }
    }

    // A contents rail with one top-level entry and a grouped entry that
    // carries two sublinks, plus the matching sections.
    fn docs_page() -> (PageMap, Vec<ElemId>) {
        let mut page = PageMap::new();
        let root = page.insert(None, Element::default());
        let nav = page.insert(
            Some(root),
            Element {
                marks: Marks::NAV_ROOT,
                ..Default::default()
            },
        );
        let g1 = page.insert(
            Some(nav),
            Element {
                marks: Marks::GROUP,
                ..Default::default()
            },
        );
        let install = page.insert(Some(g1), anchor("#installation", Marks::NAV_LINK));
        let g2 = page.insert(
            Some(nav),
            Element {
                marks: Marks::GROUP,
                ..Default::default()
            },
        );
        let dto = page.insert(Some(g2), anchor("#data-objects", Marks::NAV_LINK));
        let list = page.insert(Some(g2), Element::default());
        let queries = page.insert(Some(list), anchor("#queries", Marks::NAV_SUBLINK));
        let commands = page.insert(Some(list), anchor("#commands", Marks::NAV_SUBLINK));
        let s1 = page.insert(Some(root), region("installation", 0.0, 500.0));
        let s2 = page.insert(Some(root), region("data-objects", 500.0, 1200.0));
        let s3 = page.insert(Some(root), region("queries", 1200.0, 1800.0));
        let s4 = page.insert(Some(root), region("commands", 1800.0, 2400.0));
        (
            page,
            vec![install, dto, queries, commands, s1, s2, s3, s4],
        )
    }

    #[test]
    fn scan_collects_sections_in_document_order() {
        let (page, _) = docs_page();
        let outline = Outline::scan(&page);
        let fragments: Vec<&str> = outline
            .sections()
            .iter()
            .map(|s| s.fragment.as_str())
            .collect();
        assert_eq!(
            fragments,
            vec!["installation", "data-objects", "queries", "commands"]
        );
    }

    #[test]
    fn scan_collects_links_with_targets_stripped() {
        let (page, ids) = docs_page();
        let outline = Outline::scan(&page);
        let targets: Vec<&str> = outline.links().iter().map(|l| l.target.as_str()).collect();
        assert_eq!(
            targets,
            vec!["installation", "data-objects", "queries", "commands"]
        );
        assert_eq!(outline.links()[0].anchor, ids[0]);
    }

    #[test]
    fn sublinks_attach_to_the_first_link_in_their_group() {
        let (page, _) = docs_page();
        let outline = Outline::scan(&page);
        let dto = outline.link_for_fragment("data-objects").unwrap().id;
        let queries = outline.link_for_fragment("queries").unwrap();
        let commands = outline.link_for_fragment("commands").unwrap();
        assert_eq!(queries.parent, Some(dto));
        assert_eq!(commands.parent, Some(dto));
        assert_eq!(outline.link_for_fragment("installation").unwrap().parent, None);
    }

    #[test]
    fn chain_lists_ancestors_first() {
        let (page, _) = docs_page();
        let outline = Outline::scan(&page);
        let dto = outline.link_for_fragment("data-objects").unwrap().id;
        let queries = outline.link_for_fragment("queries").unwrap().id;
        assert_eq!(outline.chain(queries), vec![dto, queries]);
        assert_eq!(outline.chain(dto), vec![dto]);
    }

    #[test]
    fn region_without_identifier_is_not_a_section() {
        let mut page = PageMap::new();
        let root = page.insert(None, Element::default());
        let _ = page.insert(
            Some(root),
            Element {
                marks: Marks::REGION,
                ..Default::default()
            },
        );
        let outline = Outline::scan(&page);
        assert!(outline.sections().is_empty());
    }

    #[test]
    fn off_page_references_are_skipped() {
        let mut page = PageMap::new();
        let nav = page.insert(
            None,
            Element {
                marks: Marks::NAV_ROOT,
                ..Default::default()
            },
        );
        let _ = page.insert(Some(nav), anchor("https://example.com/docs", Marks::NAV_LINK));
        let kept = page.insert(Some(nav), anchor("#kept", Marks::NAV_LINK));
        let outline = Outline::scan(&page);
        assert_eq!(outline.links().len(), 1);
        assert_eq!(outline.links()[0].anchor, kept);
    }

    #[test]
    fn anchors_outside_the_contents_root_are_ignored() {
        let mut page = PageMap::new();
        let root = page.insert(None, Element::default());
        let nav = page.insert(
            Some(root),
            Element {
                marks: Marks::NAV_ROOT,
                ..Default::default()
            },
        );
        let inside = page.insert(Some(nav), anchor("#a", Marks::NAV_LINK));
        let _outside = page.insert(Some(root), anchor("#b", Marks::NAV_LINK));
        let outline = Outline::scan(&page);
        assert_eq!(outline.links().len(), 1);
        assert_eq!(outline.links()[0].anchor, inside);
    }

    #[test]
    fn first_contents_root_wins() {
        let mut page = PageMap::new();
        let root = page.insert(None, Element::default());
        let nav1 = page.insert(
            Some(root),
            Element {
                marks: Marks::NAV_ROOT,
                ..Default::default()
            },
        );
        let a = page.insert(Some(nav1), anchor("#a", Marks::NAV_LINK));
        let nav2 = page.insert(
            Some(root),
            Element {
                marks: Marks::NAV_ROOT,
                ..Default::default()
            },
        );
        let _b = page.insert(Some(nav2), anchor("#b", Marks::NAV_LINK));
        let outline = Outline::scan(&page);
        assert_eq!(outline.links().len(), 1);
        assert_eq!(outline.links()[0].anchor, a);
    }

    #[test]
    fn sublink_without_a_group_has_no_parent() {
        let mut page = PageMap::new();
        let nav = page.insert(
            None,
            Element {
                marks: Marks::NAV_ROOT,
                ..Default::default()
            },
        );
        let _top = page.insert(Some(nav), anchor("#top", Marks::NAV_LINK));
        let sub = page.insert(Some(nav), anchor("#sub", Marks::NAV_SUBLINK));
        let outline = Outline::scan(&page);
        let link = outline.link_for_anchor(sub).unwrap();
        assert_eq!(link.parent, None);
    }

    #[test]
    fn resolve_and_fragment_lookup_take_the_first_match() {
        let mut page = PageMap::new();
        let root = page.insert(None, Element::default());
        let nav = page.insert(
            Some(root),
            Element {
                marks: Marks::NAV_ROOT,
                ..Default::default()
            },
        );
        let first = page.insert(Some(nav), anchor("#dup", Marks::NAV_LINK));
        let _second = page.insert(Some(nav), anchor("#dup", Marks::NAV_LINK));
        let s1 = page.insert(Some(root), region("dup", 0.0, 100.0));
        let _s2 = page.insert(Some(root), region("dup", 100.0, 200.0));
        let outline = Outline::scan(&page);
        assert_eq!(outline.link_for_fragment("dup").unwrap().anchor, first);
        assert_eq!(outline.resolve("dup").unwrap().element, s1);
        assert!(outline.resolve("missing").is_none());
    }

    #[test]
    fn empty_page_scans_to_an_empty_outline() {
        let outline = Outline::scan(&PageMap::new());
        assert!(outline.is_empty());
        assert!(outline.resolve("anything").is_none());
    }

    #[test]
    fn page_without_contents_root_has_sections_but_no_links() {
        let mut page = PageMap::new();
        let root = page.insert(None, Element::default());
        let _ = page.insert(Some(root), region("alone", 0.0, 100.0));
        let outline = Outline::scan(&page);
        assert_eq!(outline.sections().len(), 1);
        assert!(outline.links().is_empty());
        assert!(!outline.is_empty());
    }
}
