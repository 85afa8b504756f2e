// Copyright 2026 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The band tracker: watch extents, pull batched membership transitions.

use alloc::vec::Vec;
use core::fmt::Debug;

use kurbo::Rect;

use crate::types::{BandInset, BandRecord, Delivery};

#[derive(Clone, Debug)]
struct Watched<K> {
    key: K,
    extent: Rect,
    /// Membership as of the last delivery.
    active: bool,
}

/// Tracks which watched extents overlap the active band of a viewport.
///
/// Mutations (watching, moving extents, moving the viewport) are cheap and
/// record nothing by themselves; [`BandTracker::take_records`] computes the
/// net transitions since the previous call and returns them as one batch.
/// A key that entered and left again between two calls therefore nets out
/// and is not reported.
///
/// Fresh watches are baselined outside the band, so a key that is already
/// inside it shows up in the first delivery after [`BandTracker::watch`].
/// Until a viewport has been described, every key counts as outside.
#[derive(Clone, Debug)]
pub struct BandTracker<K: Copy + Eq + Debug> {
    inset: BandInset,
    viewport: Option<Rect>,
    watched: Vec<Watched<K>>,
}

impl<K: Copy + Eq + Debug> BandTracker<K> {
    /// Create a tracker with the given band geometry and no viewport.
    pub fn new(inset: BandInset) -> Self {
        Self {
            inset,
            viewport: None,
            watched: Vec::new(),
        }
    }

    /// The band geometry.
    pub fn inset(&self) -> BandInset {
        self.inset
    }

    /// The viewport, if one has been described.
    pub fn viewport(&self) -> Option<Rect> {
        self.viewport
    }

    /// The band rectangle for the current viewport.
    pub fn band_rect(&self) -> Option<Rect> {
        self.viewport.map(|vp| self.inset.band_rect(vp))
    }

    /// Describe the viewport in page space.
    ///
    /// Transitions caused by the move are reported by the next
    /// [`take_records`](Self::take_records).
    pub fn set_viewport(&mut self, viewport: Rect) {
        self.viewport = Some(viewport);
    }

    /// Watch `key` at `extent`.
    ///
    /// Re-watching a key replaces its extent and keeps its delivery state.
    pub fn watch(&mut self, key: K, extent: Rect) {
        if let Some(w) = self.watched.iter_mut().find(|w| w.key == key) {
            w.extent = extent;
            return;
        }
        self.watched.push(Watched {
            key,
            extent,
            active: false,
        });
    }

    /// Stop watching `key`. No leave record is reported for it.
    pub fn unwatch(&mut self, key: K) {
        self.watched.retain(|w| w.key != key);
    }

    /// Move the extent of a watched key. Unknown keys are ignored.
    pub fn set_extent(&mut self, key: K, extent: Rect) {
        if let Some(w) = self.watched.iter_mut().find(|w| w.key == key) {
            w.extent = extent;
        }
    }

    /// Membership of `key` as of the last delivery.
    pub fn is_active(&self, key: K) -> bool {
        self.watched.iter().any(|w| w.key == key && w.active)
    }

    /// Watched keys, in watch order.
    pub fn watched(&self) -> impl Iterator<Item = K> + '_ {
        self.watched.iter().map(|w| w.key)
    }

    /// Number of watched keys.
    pub fn len(&self) -> usize {
        self.watched.len()
    }

    /// True when nothing is watched.
    pub fn is_empty(&self) -> bool {
        self.watched.is_empty()
    }

    /// Drop every watch and its delivery state. The viewport is kept.
    pub fn clear(&mut self) {
        self.watched.clear();
    }

    /// Compute and return the net membership transitions since the previous
    /// delivery, in watch order.
    pub fn take_records(&mut self) -> Delivery<K> {
        let band = self.band_rect();
        let mut records = Vec::new();
        for w in &mut self.watched {
            let now = band.is_some_and(|b| overlaps(b, w.extent));
            if now != w.active {
                w.active = now;
                records.push(BandRecord {
                    target: w.key,
                    active: now,
                });
            }
        }
        Delivery { records }
    }
}

impl<K: Copy + Eq + Debug> Default for BandTracker<K> {
    fn default() -> Self {
        Self::new(BandInset::default())
    }
}

/// Closed-interval overlap test.
///
/// `Rect::intersect` reports an empty rectangle for the degenerate
/// center-line band, so membership is tested on the interval endpoints
/// directly. Touching edges count as overlap; an inverted rectangle on
/// either side overlaps nothing.
fn overlaps(band: Rect, extent: Rect) -> bool {
    if band.x1 < band.x0 || band.y1 < band.y0 || extent.x1 < extent.x0 || extent.y1 < extent.y0 {
        return false;
    }
    band.x0 <= extent.x1 && extent.x0 <= band.x1 && band.y0 <= extent.y1 && extent.y0 <= band.y1
}
