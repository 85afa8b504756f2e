// Copyright 2026 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A full documentation-page pump: scroll tracking, contents navigation, and
//! copy confirmation against one controller.
//!
//! The host role is played by this `main`: it describes a page, sweeps a
//! viewport down it, clicks a contents entry and a copy button, and prints
//! every effect the controller asks for.
//!
//! Run:
//! - `cargo run -p waymark_demos --example docs_page`

use kurbo::Rect;
use waymark_controller::{Effect, Options, Outcome, PageController};
use waymark_outline::{Element, Marks, PageMap};

fn main() {
    // The rendered page: a contents rail (one plain entry, one entry with
    // two sublinks), four sections, and a code block with a copy button.
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
    let _install = page.insert(
        Some(g1),
        Element {
            marks: Marks::NAV_LINK,
            href: Some("#installation".into()),
            ..Default::default()
        },
    );
    let g2 = page.insert(
        Some(nav),
        Element {
            marks: Marks::GROUP,
            ..Default::default()
        },
    );
    let dto_anchor = page.insert(
        Some(g2),
        Element {
            marks: Marks::NAV_LINK,
            href: Some("#dto".into()),
            ..Default::default()
        },
    );
    let _queries = page.insert(
        Some(g2),
        Element {
            marks: Marks::NAV_SUBLINK,
            href: Some("#queries".into()),
            ..Default::default()
        },
    );
    let _commands = page.insert(
        Some(g2),
        Element {
            marks: Marks::NAV_SUBLINK,
            href: Some("#commands".into()),
            ..Default::default()
        },
    );

    let bounds = [
        ("installation", 0.0, 500.0),
        ("dto", 500.0, 1200.0),
        ("queries", 1200.0, 1800.0),
        ("commands", 1800.0, 2400.0),
    ];
    for (id, y0, y1) in bounds {
        let _ = page.insert(
            Some(root),
            Element {
                marks: Marks::REGION,
                id: Some(id.into()),
                extent: Rect::new(0.0, y0, 800.0, y1),
                ..Default::default()
            },
        );
    }

    let block = page.insert(Some(root), Element::default());
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

    let mut controller = PageController::new(page, Options::default());
    controller.start();
    println!(
        "scanned {} sections, {} links, {} copy controls",
        controller.outline().sections().len(),
        controller.outline().links().len(),
        controller.copy_buttons().len()
    );

    // Sweep the viewport down the page, one frame per 150px.
    println!("== Scroll sweep ==");
    let mut now = 0_u64;
    let mut scroll = 0.0;
    let mut highlights = 0;
    while scroll <= 2100.0 {
        controller.set_viewport(Rect::new(0.0, scroll, 800.0, scroll + 600.0));
        for effect in controller.poll(now) {
            if let Effect::Highlight { link, on } = effect {
                let target = &controller.outline().link(link).target;
                println!("  y={scroll:>6}: {} #{target}", if on { "set  " } else { "clear" });
                if on {
                    highlights += 1;
                }
            }
        }
        scroll += 150.0;
        now += 16;
    }
    // The parent entry stays lit across its two sublinks, so each section
    // contributes exactly one set event.
    assert_eq!(highlights, 4);

    // Click the `#dto` contents entry.
    println!("== Contents click ==");
    let activation = controller.activate(dto_anchor, now);
    assert_eq!(activation.outcome, Outcome::Consumed);
    for effect in &activation.effects {
        if let Effect::ScrollTo { top, behavior, .. } = effect {
            println!("  scroll to y={top} ({behavior:?})");
            assert_eq!(*top, 500.0);
        }
    }

    // Click the copy button and watch the label timeline.
    println!("== Copy click ==");
    let activation = controller.activate(trigger, now);
    for effect in &activation.effects {
        match effect {
            Effect::WriteClipboard { text, .. } => println!("  write {text:?}"),
            Effect::SetLabel { label, .. } => println!("  t={now}: label {label:?}"),
            _ => {}
        }
    }
    let deadline = controller.next_deadline().expect("a revert is pending");
    assert_eq!(deadline, now + 2000);
    for effect in controller.poll(deadline) {
        if let Effect::SetLabel { label, .. } = effect {
            println!("  t={deadline}: label {label:?}");
            assert_eq!(label, "Copy");
        }
    }
}
