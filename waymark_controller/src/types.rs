// Copyright 2026 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for the controller: effects, activations, options, and the
//! clipboard capability.
//!
//! ## Overview
//!
//! The controller never touches a real page. Every mutation it wants is
//! described by an [`Effect`] the host applies, and everything it needs from
//! the platform arrives through plain method calls or the capability traits
//! defined here.

use alloc::string::String;
use alloc::vec::Vec;

use waymark_band::BandInset;
use waymark_outline::{ElemId, LinkId, PageMap, SectionId};

/// Identifier for a copy control discovered on the page.
///
/// Stable for the lifetime of a [`PageController`](crate::PageController).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ButtonId(pub(crate) u32);

impl ButtonId {
    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

/// How the host should perform a requested scroll.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ScrollBehavior {
    /// Animate towards the target position.
    Smooth,
    /// Jump to the target position without animation.
    Instant,
}

impl Default for ScrollBehavior {
    fn default() -> Self {
        Self::Smooth
    }
}

/// Policy for picking the winner when one delivery reports several sections
/// entering the band.
///
/// Deliveries preserve watch order, which is document order, so "last" means
/// the section lowest on the page.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum TieBreak {
    /// Prefer the last entering section of the delivery.
    LastReported,
    /// Prefer the first entering section of the delivery.
    FirstReported,
}

impl Default for TieBreak {
    fn default() -> Self {
        Self::LastReported
    }
}

/// A page mutation requested from the host.
///
/// Effects come back in order from [`poll`](crate::PageController::poll) and
/// [`activate`](crate::PageController::activate); hosts apply them as given.
/// None of them expects a reply except [`Effect::WriteClipboard`], whose
/// outcome is reported through
/// [`clipboard_result`](crate::PageController::clipboard_result).
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    /// Toggle the highlight styling of a contents link.
    Highlight {
        /// Link to restyle.
        link: LinkId,
        /// `true` marks the link active, `false` clears it.
        on: bool,
    },
    /// Scroll the page so a section's top edge reaches the top of the viewport.
    ScrollTo {
        /// Section to bring into view.
        section: SectionId,
        /// Document-space y coordinate of the section's top edge.
        top: f64,
        /// Whether to animate.
        behavior: ScrollBehavior,
    },
    /// Write the text of a code sample to the system clipboard.
    WriteClipboard {
        /// Button that requested the write.
        button: ButtonId,
        /// Full text of the associated sample.
        text: String,
    },
    /// Replace the visible label of a copy button.
    SetLabel {
        /// Button whose label changes.
        button: ButtonId,
        /// New label text.
        label: String,
    },
}

/// Whether an activation was claimed by the controller.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Outcome {
    /// The element belongs to the controller; default handling should stop.
    Consumed,
    /// The element is not one of the controller's; the host proceeds as usual.
    Ignored,
}

/// Result of reporting an activation to the controller.
#[derive(Clone, Debug, PartialEq)]
pub struct Activation {
    /// Whether the controller claimed the element.
    pub outcome: Outcome,
    /// Mutations to apply, in order.
    pub effects: Vec<Effect>,
}

impl Activation {
    pub(crate) fn ignored() -> Self {
        Self {
            outcome: Outcome::Ignored,
            effects: Vec::new(),
        }
    }

    pub(crate) fn consumed(effects: Vec<Effect>) -> Self {
        Self {
            outcome: Outcome::Consumed,
            effects,
        }
    }
}

/// Tunable behavior for a [`PageController`](crate::PageController).
///
/// Override a subset with struct update syntax:
///
/// ```rust
/// use waymark_controller::{Options, ScrollBehavior};
///
/// let options = Options {
///     scroll: ScrollBehavior::Instant,
///     ..Options::default()
/// };
/// assert_eq!(options.revert_delay_ms, 2000);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Options {
    /// Band the visibility tracker tests sections against.
    pub band: BandInset,
    /// How long a copy button shows its confirmation label, in milliseconds.
    pub revert_delay_ms: u64,
    /// Label shown while a copy button is idle.
    pub idle_label: String,
    /// Label shown after a copy button is activated.
    pub confirmed_label: String,
    /// How requested scrolls ask to be performed.
    pub scroll: ScrollBehavior,
    /// Which section wins when several enter the band in one delivery.
    pub tie_break: TieBreak,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            band: BandInset::center_line(),
            revert_delay_ms: 2000,
            idle_label: String::from("Copy"),
            confirmed_label: String::from("Copied!"),
            scroll: ScrollBehavior::Smooth,
            tie_break: TieBreak::LastReported,
        }
    }
}

/// Why a clipboard write failed.
///
/// Hosts report failures through
/// [`clipboard_result`](crate::PageController::clipboard_result); the
/// controller logs them and leaves the optimistic confirmation in place.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ClipboardError {
    /// No clipboard exists on this platform or display server.
    Unavailable,
    /// The platform refused access to the clipboard.
    Denied,
    /// The platform clipboard reported an error of its own.
    Backend(String),
}

impl core::fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Unavailable => f.write_str("clipboard is unavailable"),
            Self::Denied => f.write_str("clipboard access denied"),
            Self::Backend(message) => write!(f, "clipboard backend error: {message}"),
        }
    }
}

impl core::error::Error for ClipboardError {}

/// Write access to a clipboard.
///
/// Hosts implement this, or use the `arboard` adapter from
/// [`adapters`](crate::adapters), and perform the write when applying an
/// [`Effect::WriteClipboard`].
pub trait ClipboardSink {
    /// Places `text` on the clipboard, replacing any previous contents.
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Source of plain text for code samples.
///
/// The controller reads a sample's text at activation time, not at wiring
/// time, so edits to the page between the two are honored. [`PageMap`]
/// implements this directly.
pub trait TextSource {
    /// Returns the full text content of `element`, if it has any.
    fn text_of(&self, element: ElemId) -> Option<String>;
}

impl TextSource for PageMap {
    fn text_of(&self, element: ElemId) -> Option<String> {
        self.text(element).map(String::from)
    }
}
