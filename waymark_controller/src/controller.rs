// Copyright 2026 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The page controller: one instance owning the outline, the band tracker,
//! the highlight chain, and the copy controls.
//!
//! ## Overview
//!
//! [`PageController::new`] scans the described page and wires its copy
//! controls; [`PageController::start`] begins watching section extents.
//! From then on the host pumps scrolls, relayouts, activations, and time
//! into the controller and applies the [`Effect`]s that come back. The
//! controller never touches the page and never reads a clock.
//!
//! A page with no sections, links, or copy controls produces an inert
//! controller: `start` watches nothing, `poll` returns nothing, and every
//! activation is ignored.

use alloc::vec::Vec;

use kurbo::Rect;
use waymark_band::BandTracker;
use waymark_outline::{ElemId, LinkId, Outline, PageMap, SectionId};

use crate::copy::CopyButtons;
use crate::highlight::{HighlightEvent, HighlightState};
use crate::types::{Activation, ButtonId, ClipboardError, Effect, Options, TextSource, TieBreak};

/// The interaction controller for one described documentation page.
///
/// Owns every piece of interaction state: the scanned [`Outline`], the
/// [`BandTracker`] deciding which section a reader is on, the single
/// highlighted chain, and the per-button copy machines. The host keeps the
/// page description current and applies returned effects; nothing else is
/// shared.
#[derive(Clone, Debug)]
pub struct PageController {
    page: PageMap,
    outline: Outline,
    options: Options,
    tracker: BandTracker<SectionId>,
    highlight: HighlightState<LinkId>,
    copy: CopyButtons,
    running: bool,
}

impl PageController {
    /// Scan `page` and wire its copy controls.
    ///
    /// No observation starts here; call [`start`](Self::start) once the host
    /// is ready to apply effects.
    pub fn new(page: PageMap, options: Options) -> Self {
        let outline = Outline::scan(&page);
        let copy = CopyButtons::wire(&page);
        let tracker = BandTracker::new(options.band);
        Self {
            page,
            outline,
            options,
            tracker,
            highlight: HighlightState::new(),
            copy,
            running: false,
        }
    }

    /// Begin watching every section's extent. Idempotent while running.
    pub fn start(&mut self) {
        for section in self.outline.sections() {
            self.tracker
                .watch(section.id, self.page.extent(section.element));
        }
        self.running = true;
    }

    /// Detach: stop watching sections and abandon pending revert deadlines.
    ///
    /// No effects are emitted; detaching does not mutate the page. The
    /// highlighted chain is remembered so a later [`start`](Self::start)
    /// diffs correctly against what the host still displays.
    pub fn stop(&mut self) {
        self.tracker.clear();
        self.copy.abandon_deadlines();
        self.running = false;
    }

    /// True between [`start`](Self::start) and [`stop`](Self::stop).
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Describe the viewport in page space.
    pub fn set_viewport(&mut self, viewport: Rect) {
        self.tracker.set_viewport(viewport);
    }

    /// Update an element's extent after a relayout.
    ///
    /// Watched sections keep tracking their moved extent.
    pub fn set_extent(&mut self, elem: ElemId, extent: Rect) {
        self.page.set_extent(elem, extent);
        if let Some(section) = self.outline.sections().iter().find(|s| s.element == elem) {
            self.tracker.set_extent(section.id, extent);
        }
    }

    /// Process elapsed time and scroll motion, returning the effects to
    /// apply.
    ///
    /// Takes one band delivery and, if any section entered the band, moves
    /// the highlight to that section's contents chain — the winner among
    /// several entries chosen per [`Options::tie_break`]. A winning section
    /// no contents link targets clears the highlight entirely. Sections
    /// leaving the band are ignored, so the last highlight persists while
    /// the band is empty. Copy buttons whose revert deadline passed get
    /// their idle label back.
    pub fn poll(&mut self, now: u64) -> Vec<Effect> {
        if !self.running {
            return Vec::new();
        }

        let mut effects = Vec::new();

        let delivery = self.tracker.take_records();
        let mut entered = delivery.records.iter().filter(|r| r.active);
        let winner = match self.options.tie_break {
            TieBreak::LastReported => entered.next_back(),
            TieBreak::FirstReported => entered.next(),
        };
        if let Some(record) = winner {
            let section = self.outline.section(record.target);
            let chain = self
                .outline
                .link_for_fragment(&section.fragment)
                .map(|link| self.outline.chain(link.id))
                .unwrap_or_default();
            for event in self.highlight.update(&chain) {
                effects.push(match event {
                    HighlightEvent::Set(link) => Effect::Highlight { link, on: true },
                    HighlightEvent::Cleared(link) => Effect::Highlight { link, on: false },
                });
            }
        }

        for button in self.copy.poll(now) {
            effects.push(Effect::SetLabel {
                button,
                label: self.options.idle_label.clone(),
            });
        }

        effects
    }

    /// Report a user activation (a click) on `elem`.
    ///
    /// Contents anchors are consumed: the host suppresses its default
    /// navigation and, when the anchor's fragment resolves to a section,
    /// applies a [`Effect::ScrollTo`] towards it. An anchor whose fragment
    /// matches nothing is consumed with no effects. Copy triggers are
    /// consumed with a clipboard write and the optimistic confirmation
    /// label. Anything else is ignored, as is everything while stopped.
    ///
    /// The activated element must be the anchor or trigger itself; the
    /// controller does not resolve descendants upward.
    pub fn activate(&mut self, elem: ElemId, now: u64) -> Activation {
        if !self.running {
            return Activation::ignored();
        }

        if let Some(link) = self.outline.link_for_anchor(elem) {
            let mut effects = Vec::new();
            if let Some(section) = self.outline.resolve(&link.target) {
                effects.push(Effect::ScrollTo {
                    section: section.id,
                    top: self.page.extent(section.element).y0,
                    behavior: self.options.scroll,
                });
            }
            return Activation::consumed(effects);
        }

        if let Some(button) = self.copy.button_for_trigger(elem) {
            let sample = self
                .copy
                .activate(button, now, self.options.revert_delay_ms);
            // The label does not wait for the write to settle.
            let text = self.page.text_of(sample).unwrap_or_default();
            return Activation::consumed(alloc::vec![
                Effect::WriteClipboard { button, text },
                Effect::SetLabel {
                    button,
                    label: self.options.confirmed_label.clone(),
                },
            ]);
        }

        Activation::ignored()
    }

    /// Report how an [`Effect::WriteClipboard`] settled.
    ///
    /// Failures are logged and otherwise ignored: the confirmation label
    /// already shown stays, and nothing is retried.
    pub fn clipboard_result(&mut self, button: ButtonId, result: Result<(), ClipboardError>) {
        if let Err(error) = result {
            log::warn!("clipboard write for {button:?} failed: {error}");
        }
    }

    /// The earliest pending copy-revert deadline, a scheduling aid for hosts
    /// that poll on demand instead of per frame.
    pub fn next_deadline(&self) -> Option<u64> {
        self.copy.next_deadline()
    }

    /// The scanned outline.
    pub fn outline(&self) -> &Outline {
        &self.outline
    }

    /// The described page.
    pub fn page(&self) -> &PageMap {
        &self.page
    }

    /// The controller's options.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// The currently highlighted chain of links, ancestors first.
    pub fn highlighted(&self) -> &[LinkId] {
        self.highlight.current()
    }

    /// The wired copy controls.
    pub fn copy_buttons(&self) -> &CopyButtons {
        &self.copy
    }
}
