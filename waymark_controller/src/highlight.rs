// Copyright 2026 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Highlight state helper: compute set/clear transitions from chain changes.
//!
//! ## Usage
//!
//! 1) Map the section that entered the active band to its contents link.
//! 2) Build the link's chain (ancestors first) with
//!    [`Outline::chain`](waymark_outline::Outline::chain).
//! 3) Call [`HighlightState::update`] with that chain to get `Cleared(..)` /
//!    `Set(..)` transitions.
//!
//! ## Minimal example
//!
//! ```
//! use waymark_controller::highlight::{HighlightEvent, HighlightState};
//! let mut h: HighlightState<u32> = HighlightState::new();
//! assert_eq!(
//!     h.update(&[1, 2]),
//!     vec![HighlightEvent::Set(1), HighlightEvent::Set(2)]
//! );
//! assert_eq!(
//!     h.update(&[1, 3]),
//!     vec![HighlightEvent::Cleared(2), HighlightEvent::Set(3)]
//! );
//! ```

use alloc::vec::Vec;

/// The single lit chain of contents links.
///
/// Holds the currently highlighted chain (ancestors first) and, when updated
/// with a new chain, computes the minimal sequence of clear and set
/// transitions between the two. Because the state is one chain, the invariant
/// that at most one top-level link is lit at a time is structural rather than
/// enforced.
///
/// Ordering semantics:
/// - Clears are emitted from inner-most to outer-most.
/// - Sets are emitted from outer-most to inner-most.
///
/// A shared ancestor of the old and new chain is in the common prefix and is
/// never cleared, so switching between two sublinks of the same entry does
/// not flicker the parent's highlight.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HighlightState<K: Copy + Eq> {
    current: Vec<K>,
}

/// A highlight transition event.
///
/// Returned by [`HighlightState::update`]. The controller renders these as
/// [`Effect::Highlight`](crate::Effect::Highlight) mutations for the host.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HighlightEvent<K> {
    /// The link gains the highlighted flag (in order from outer→inner).
    Set(K),
    /// The link loses the highlighted flag (in order from inner→outer).
    Cleared(K),
}

impl<K: Copy + Eq> HighlightState<K> {
    /// Create a state with nothing highlighted.
    pub fn new() -> Self {
        Self {
            current: Vec::new(),
        }
    }

    /// The currently lit chain, ancestors first. Empty when nothing is lit.
    pub fn current(&self) -> &[K] {
        &self.current
    }

    /// Clear the lit chain, returning the corresponding clear events from
    /// inner-most to outer-most.
    pub fn clear(&mut self) -> Vec<HighlightEvent<K>> {
        let mut out = Vec::new();
        for &k in self.current.iter().rev() {
            out.push(HighlightEvent::Cleared(k));
        }
        self.current.clear();
        out
    }

    /// Update the lit chain and return the clear/set events required to
    /// transition from the previous chain to `chain`.
    ///
    /// Clears are emitted from inner-most to outer-most, then sets from
    /// outer-most to inner-most.
    pub fn update(&mut self, chain: &[K]) -> Vec<HighlightEvent<K>> {
        // Length of the common prefix, the part of the chain both states
        // share and neither transition touches.
        let mut shared = 0;
        while shared < self.current.len()
            && shared < chain.len()
            && self.current[shared] == chain[shared]
        {
            shared += 1;
        }

        let mut out = Vec::new();
        // Clears: old tail back to the shared prefix, inner→outer.
        for &k in self.current[shared..].iter().rev() {
            out.push(HighlightEvent::Cleared(k));
        }
        // Sets: shared prefix down to the new tail, outer→inner.
        for &k in &chain[shared..] {
            out.push(HighlightEvent::Set(k));
        }

        self.current.clear();
        self.current.extend_from_slice(chain);
        out
    }
}
