// Copyright 2026 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Copy confirmation against a clipboard sink, with the debounce timeline.
//!
//! Uses the `arboard`-backed system clipboard when one is available, and a
//! plain buffer sink otherwise (headless CI has no clipboard), showing that
//! the controller behaves identically either way: the write failure path is
//! logged, never surfaced.
//!
//! Run:
//! - `cargo run -p waymark_demos --example copy_confirm`

use kurbo::Rect;
use waymark_controller::adapters::arboard::SystemClipboard;
use waymark_controller::{
    ClipboardError, ClipboardSink, Effect, Options, Outcome, PageController,
};
use waymark_outline::{Element, Marks, PageMap};

/// Fallback sink remembering the last write.
#[derive(Debug, Default)]
struct BufferClipboard {
    last: Option<String>,
}

impl ClipboardSink for BufferClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.last = Some(text.to_owned());
        Ok(())
    }
}

fn main() {
    let mut page = PageMap::new();
    let block = page.insert(None, Element::default());
    let _code = page.insert(
        Some(block),
        Element {
            marks: Marks::CODE,
            text: Some("SELECT 1".into()),
            ..Default::default()
        },
    );
    let trigger = page.insert(
        Some(block),
        Element {
            marks: Marks::COPY_TRIGGER,
            ..Default::default()
        },
    );

    let mut system = SystemClipboard::new();
    let mut buffer = BufferClipboard::default();
    let sink: &mut dyn ClipboardSink = match system.as_mut() {
        Ok(clipboard) => {
            println!("using the system clipboard");
            clipboard
        }
        Err(error) => {
            println!("no system clipboard ({error}); using a buffer");
            &mut buffer
        }
    };

    let mut controller = PageController::new(page, Options::default());
    controller.start();
    controller.set_viewport(Rect::new(0.0, 0.0, 800.0, 600.0));

    // First click at t=0.
    let activation = controller.activate(trigger, 0);
    assert_eq!(activation.outcome, Outcome::Consumed);
    for effect in &activation.effects {
        match effect {
            Effect::WriteClipboard { button, text } => {
                let result = sink.write_text(text);
                println!("  t=0: write {text:?} -> {result:?}");
                controller.clipboard_result(*button, result);
            }
            Effect::SetLabel { label, .. } => println!("  t=0: label {label:?}"),
            _ => {}
        }
    }

    // Second click inside the revert delay restarts the deadline.
    let _ = controller.activate(trigger, 1500);
    println!("  t=1500: clicked again");
    assert!(controller.poll(2000).is_empty(), "first deadline abandoned");
    println!("  t=2000: still confirmed");

    let deadline = controller.next_deadline().expect("a revert is pending");
    assert_eq!(deadline, 3500, "timed from the second click");
    for effect in controller.poll(deadline) {
        if let Effect::SetLabel { label, .. } = effect {
            println!("  t={deadline}: label {label:?}");
            assert_eq!(label, "Copy");
        }
    }
    assert!(controller.poll(10_000).is_empty(), "exactly one revert");

    if let Some(text) = buffer.last {
        println!("buffer clipboard holds {text:?}");
        assert_eq!(text, "SELECT 1");
    }
}
