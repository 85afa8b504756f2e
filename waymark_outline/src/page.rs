// Copyright 2026 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The described page: an append-only element tree.
//!
//! ## Overview
//!
//! A [`PageMap`] is the host's description of what it rendered: a tree of
//! [`Element`]s carrying marks, identifiers, references, extents, and text.
//! Elements are never removed, so an [`ElemId`] stays valid for the life of
//! the map. Document order is the tree's preorder; for hosts that describe a
//! page front to back it coincides with insertion order.

use alloc::vec::Vec;

use kurbo::Rect;

use crate::types::{ElemId, Element};

#[derive(Clone, Debug)]
struct Node {
    element: Element,
    parent: Option<ElemId>,
    children: Vec<ElemId>,
}

/// An append-only tree of described page elements.
///
/// Hosts build one from whatever they render (a DOM, a TUI layout, a test
/// fixture), then keep extents current as the page relayouts. Everything a
/// scan or a controller reads comes from here.
#[derive(Clone, Debug, Default)]
pub struct PageMap {
    nodes: Vec<Node>,
    roots: Vec<ElemId>,
}

impl PageMap {
    /// Create an empty page.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            roots: Vec::new(),
        }
    }

    /// Insert an element as a child of `parent` (or as a root if `None`).
    ///
    /// Children are ordered by insertion under their parent.
    pub fn insert(&mut self, parent: Option<ElemId>, element: Element) -> ElemId {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "ElemId uses 32-bit indices by design."
        )]
        let id = ElemId(self.nodes.len() as u32);
        self.nodes.push(Node {
            element,
            parent,
            children: Vec::new(),
        });
        match parent {
            Some(p) => self.node_mut(p).children.push(id),
            None => self.roots.push(id),
        }
        id
    }

    /// Borrow an element.
    pub fn element(&self, id: ElemId) -> &Element {
        &self.node(id).element
    }

    /// Parent of `id`, or `None` for roots.
    pub fn parent_of(&self, id: ElemId) -> Option<ElemId> {
        self.node(id).parent
    }

    /// Children of `id`, in document order.
    pub fn children_of(&self, id: ElemId) -> &[ElemId] {
        &self.node(id).children
    }

    /// Iterate every element in document order.
    pub fn iter(&self) -> impl Iterator<Item = (ElemId, &Element)> + '_ {
        self.walk(None).map(|id| (id, self.element(id)))
    }

    /// Iterate the subtree below `id` (excluding `id` itself), in document
    /// order.
    pub fn descendants(&self, id: ElemId) -> impl Iterator<Item = ElemId> + '_ {
        self.walk(Some(id))
    }

    /// Iterate the ancestors of `id`, nearest first.
    pub fn ancestors(&self, id: ElemId) -> impl Iterator<Item = ElemId> + '_ {
        let mut cur = self.node(id).parent;
        core::iter::from_fn(move || {
            let next = cur?;
            cur = self.node(next).parent;
            Some(next)
        })
    }

    /// Page-space extent of `id`.
    pub fn extent(&self, id: ElemId) -> Rect {
        self.node(id).element.extent
    }

    /// Update the extent of `id` after a relayout.
    pub fn set_extent(&mut self, id: ElemId, extent: Rect) {
        self.node_mut(id).element.extent = extent;
    }

    /// Text content of `id`, if any.
    pub fn text(&self, id: ElemId) -> Option<&str> {
        self.node(id).element.text.as_deref()
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when no element has been described.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // --- internals ---

    fn node(&self, id: ElemId) -> &Node {
        self.nodes.get(id.idx()).expect("ElemId from another PageMap")
    }

    fn node_mut(&mut self, id: ElemId) -> &mut Node {
        self.nodes
            .get_mut(id.idx())
            .expect("ElemId from another PageMap")
    }

    /// Preorder walk below `root`, or over the whole page when `None`.
    fn walk(&self, root: Option<ElemId>) -> impl Iterator<Item = ElemId> + '_ {
        // Seed the stack in reverse so the leftmost entry is visited first.
        let mut stack: Vec<ElemId> = match root {
            Some(id) => self.node(id).children.iter().rev().copied().collect(),
            None => self.roots.iter().rev().copied().collect(),
        };
        core::iter::from_fn(move || {
            let next = stack.pop()?;
            stack.extend(self.node(next).children.iter().rev().copied());
            Some(next)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Marks;
    use alloc::vec;

    #[test]
    fn insert_links_parent_and_children() {
        let mut page = PageMap::new();
        let root = page.insert(None, Element::default());
        let a = page.insert(Some(root), Element::default());
        let b = page.insert(Some(root), Element::default());
        assert_eq!(page.parent_of(root), None);
        assert_eq!(page.parent_of(a), Some(root));
        assert_eq!(page.children_of(root), &[a, b]);
        assert_eq!(page.len(), 3);
    }

    // Children inserted out of document order still walk in preorder.
    #[test]
    fn iter_is_preorder_even_when_insertion_interleaves() {
        let mut page = PageMap::new();
        let root = page.insert(None, Element::default());
        let a = page.insert(Some(root), Element::default());
        let b = page.insert(Some(root), Element::default());
        // Inserted after b, but lives under a.
        let a1 = page.insert(Some(a), Element::default());
        let order: Vec<ElemId> = page.iter().map(|(id, _)| id).collect();
        assert_eq!(order, vec![root, a, a1, b]);
    }

    #[test]
    fn descendants_exclude_the_root() {
        let mut page = PageMap::new();
        let root = page.insert(None, Element::default());
        let a = page.insert(Some(root), Element::default());
        let a1 = page.insert(Some(a), Element::default());
        let b = page.insert(Some(root), Element::default());
        let below_root: Vec<ElemId> = page.descendants(root).collect();
        assert_eq!(below_root, vec![a, a1, b]);
        assert_eq!(page.descendants(a1).count(), 0);
    }

    #[test]
    fn ancestors_walk_nearest_first() {
        let mut page = PageMap::new();
        let root = page.insert(None, Element::default());
        let a = page.insert(Some(root), Element::default());
        let a1 = page.insert(Some(a), Element::default());
        let chain: Vec<ElemId> = page.ancestors(a1).collect();
        assert_eq!(chain, vec![a, root]);
        assert_eq!(page.ancestors(root).count(), 0);
    }

    #[test]
    fn multiple_roots_walk_in_insertion_order() {
        let mut page = PageMap::new();
        let r1 = page.insert(None, Element::default());
        let r2 = page.insert(None, Element::default());
        let c1 = page.insert(Some(r1), Element::default());
        let order: Vec<ElemId> = page.iter().map(|(id, _)| id).collect();
        assert_eq!(order, vec![r1, c1, r2]);
    }

    #[test]
    fn set_extent_updates_in_place() {
        let mut page = PageMap::new();
        let id = page.insert(None, Element::default());
        assert_eq!(page.extent(id), Rect::ZERO);
        page.set_extent(id, Rect::new(0.0, 10.0, 100.0, 50.0));
        assert_eq!(page.extent(id), Rect::new(0.0, 10.0, 100.0, 50.0));
    }

    #[test]
    fn text_and_marks_round_trip() {
        let mut page = PageMap::new();
        let id = page.insert(
            None,
            Element {
                marks: Marks::CODE,
                text: Some("SELECT 1".into()),
                ..Default::default()
            },
        );
        assert_eq!(page.text(id), Some("SELECT 1"));
        assert!(page.element(id).marks.contains(Marks::CODE));
    }
}
