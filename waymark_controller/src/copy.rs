// Copyright 2026 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Copy controls: per-button two-state machines with their own revert
//! deadlines.
//!
//! ## Overview
//!
//! [`CopyButtons::wire`] discovers the page's copy controls once, at
//! controller construction. Each wired control is an independent machine:
//! idle until activated, confirmed until its own deadline passes, then idle
//! again. A control whose trigger has no code sample nearby is not wired at
//! all, so a click can never reach a sample-less button.
//!
//! Time is whatever monotonic milliseconds the host passes in; the machines
//! never read a clock.

use alloc::vec::Vec;

use waymark_outline::{ElemId, Marks, PageMap};

use crate::types::ButtonId;

/// The visual state of a copy control.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum Indicator {
    /// Showing the idle label, ready to copy.
    #[default]
    Idle,
    /// Showing the confirmation label, waiting for the revert deadline.
    Confirmed,
}

/// One wired copy control.
#[derive(Clone, Debug)]
pub struct CopyButton {
    /// Handle of this button.
    pub id: ButtonId,
    /// The trigger element the host reports activations on.
    pub trigger: ElemId,
    /// The code sample whose text the button copies.
    pub sample: ElemId,
    indicator: Indicator,
    revert_at: Option<u64>,
}

impl CopyButton {
    /// The button's current visual state.
    pub fn indicator(&self) -> Indicator {
        self.indicator
    }

    /// The pending revert deadline, if the button is confirmed.
    pub fn revert_at(&self) -> Option<u64> {
        self.revert_at
    }
}

/// The page's copy controls, wired once at construction.
///
/// Buttons share nothing: each holds its own indicator and deadline, so
/// activating one never disturbs another.
#[derive(Clone, Debug, Default)]
pub struct CopyButtons {
    buttons: Vec<CopyButton>,
}

impl CopyButtons {
    /// Wire a button for every copy trigger on `page`.
    ///
    /// A trigger's sample is the first `CODE` element, in document order,
    /// among the descendants of the trigger's parent. Triggers without a
    /// parent or without a sample are skipped with a warning rather than
    /// wired into a control that would fail when clicked.
    pub fn wire(page: &PageMap) -> Self {
        let mut buttons = Vec::new();
        for (trigger, element) in page.iter() {
            if !element.marks.contains(Marks::COPY_TRIGGER) {
                continue;
            }
            let sample = page.parent_of(trigger).and_then(|parent| {
                page.descendants(parent)
                    .find(|&d| page.element(d).marks.contains(Marks::CODE))
            });
            let Some(sample) = sample else {
                log::warn!("copy trigger {trigger:?} has no code sample; control not wired");
                continue;
            };
            #[allow(
                clippy::cast_possible_truncation,
                reason = "ButtonId uses 32-bit indices by design."
            )]
            let id = ButtonId(buttons.len() as u32);
            buttons.push(CopyButton {
                id,
                trigger,
                sample,
                indicator: Indicator::Idle,
                revert_at: None,
            });
        }
        Self { buttons }
    }

    /// All wired buttons, in document order of their triggers.
    pub fn buttons(&self) -> &[CopyButton] {
        &self.buttons
    }

    /// Number of wired buttons.
    pub fn len(&self) -> usize {
        self.buttons.len()
    }

    /// True when no control was wired.
    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }

    /// Borrow a button by handle.
    pub fn button(&self, id: ButtonId) -> &CopyButton {
        &self.buttons[id.idx()]
    }

    /// The button wired to `trigger`, if that trigger was wired.
    pub fn button_for_trigger(&self, trigger: ElemId) -> Option<ButtonId> {
        self.buttons
            .iter()
            .find(|b| b.trigger == trigger)
            .map(|b| b.id)
    }

    /// Confirm `id` and start (or restart) its revert deadline.
    ///
    /// Returns the sample element whose text should be copied. Re-activating
    /// a confirmed button only moves that button's own deadline.
    pub fn activate(&mut self, id: ButtonId, now: u64, revert_delay_ms: u64) -> ElemId {
        let button = &mut self.buttons[id.idx()];
        button.indicator = Indicator::Confirmed;
        button.revert_at = Some(now + revert_delay_ms);
        button.sample
    }

    /// Revert every button whose deadline has passed, returning them in
    /// wiring order.
    pub fn poll(&mut self, now: u64) -> Vec<ButtonId> {
        let mut reverted = Vec::new();
        for button in &mut self.buttons {
            if button.revert_at.is_some_and(|at| at <= now) {
                button.indicator = Indicator::Idle;
                button.revert_at = None;
                reverted.push(button.id);
            }
        }
        reverted
    }

    /// The earliest pending revert deadline across all buttons.
    pub fn next_deadline(&self) -> Option<u64> {
        self.buttons.iter().filter_map(|b| b.revert_at).min()
    }

    /// Drop every pending deadline without reverting anything.
    ///
    /// Used when the controller detaches: a confirmed button keeps its label
    /// until it is activated again.
    pub fn abandon_deadlines(&mut self) {
        for button in &mut self.buttons {
            button.revert_at = None;
        }
    }
}
