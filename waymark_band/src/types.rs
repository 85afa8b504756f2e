// Copyright 2026 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Band geometry and the records a tracker delivers.

use alloc::vec::Vec;

use kurbo::Rect;

/// Fractional insets selecting the active band of a viewport.
///
/// Both fields are fractions of the viewport height, measured inward from
/// the top and bottom edges. The default collapses the band to the
/// horizontal line through the viewport's vertical center, which makes a
/// section "active" exactly while it spans that line.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BandInset {
    /// Fraction of the viewport height inset from the top edge.
    pub top: f64,
    /// Fraction of the viewport height inset from the bottom edge.
    pub bottom: f64,
}

impl BandInset {
    /// The degenerate center-line band: `top = bottom = 0.5`.
    pub const fn center_line() -> Self {
        Self {
            top: 0.5,
            bottom: 0.5,
        }
    }

    /// A band inset by the same fraction from both edges.
    pub const fn symmetric(inset: f64) -> Self {
        Self {
            top: inset,
            bottom: inset,
        }
    }

    /// The band rectangle for `viewport`.
    ///
    /// Insets summing over 1 produce an inverted rectangle (`y1 < y0`),
    /// which matches nothing.
    pub fn band_rect(self, viewport: Rect) -> Rect {
        let h = viewport.height();
        Rect::new(
            viewport.x0,
            viewport.y0 + h * self.top,
            viewport.x1,
            viewport.y1 - h * self.bottom,
        )
    }
}

impl Default for BandInset {
    fn default() -> Self {
        Self::center_line()
    }
}

/// A single membership transition.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BandRecord<K> {
    /// The watched key that changed.
    pub target: K,
    /// True when the target entered the band, false when it left.
    pub active: bool,
}

/// Batched transitions returned by
/// [`BandTracker::take_records`](crate::BandTracker::take_records).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Delivery<K> {
    /// Net transitions since the previous delivery, in watch order.
    pub records: Vec<BandRecord<K>>,
}

impl<K> Delivery<K> {
    /// True if no membership changed since the previous delivery.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<K> Default for Delivery<K> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}
