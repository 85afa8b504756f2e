// Copyright 2026 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Rect;
use waymark_band::{BandInset, BandTracker};
use waymark_outline::{Element, Marks, Outline, PageMap};

/// A column of `n` stacked section extents, `height` each.
fn gen_column(n: usize, height: f64) -> Vec<Rect> {
    (0..n)
        .map(|i| {
            let y0 = i as f64 * height;
            Rect::new(0.0, y0, 800.0, y0 + height)
        })
        .collect()
}

/// A page with `n` sections and a contents rail linking to each, every
/// fourth entry grouped with a sublink.
fn gen_page(n: usize) -> PageMap {
    let mut page = PageMap::new();
    let root = page.insert(None, Element::default());
    let nav = page.insert(
        Some(root),
        Element {
            marks: Marks::NAV_ROOT,
            ..Default::default()
        },
    );
    for i in 0..n {
        let group = page.insert(
            Some(nav),
            Element {
                marks: Marks::GROUP,
                ..Default::default()
            },
        );
        let _ = page.insert(
            Some(group),
            Element {
                marks: Marks::NAV_LINK,
                href: Some(format!("#s{i}")),
                ..Default::default()
            },
        );
        if i % 4 == 0 {
            let _ = page.insert(
                Some(group),
                Element {
                    marks: Marks::NAV_SUBLINK,
                    href: Some(format!("#s{i}-detail")),
                    ..Default::default()
                },
            );
        }
    }
    for (i, extent) in gen_column(n, 600.0).into_iter().enumerate() {
        let _ = page.insert(
            Some(root),
            Element {
                marks: Marks::REGION,
                id: Some(format!("s{i}")),
                extent,
                ..Default::default()
            },
        );
    }
    page
}

fn bench_take_records(c: &mut Criterion) {
    let mut group = c.benchmark_group("band_tracker");
    for &n in &[64usize, 256, 1024] {
        let extents = gen_column(n, 600.0);
        group.throughput(Throughput::Elements(n as u64));

        // Full scroll sweep: every section enters and leaves once.
        group.bench_function(format!("sweep_n{}", n), |b| {
            b.iter_batched(
                || {
                    let mut t: BandTracker<usize> = BandTracker::new(BandInset::center_line());
                    for (i, &extent) in extents.iter().enumerate() {
                        t.watch(i, extent);
                    }
                    t
                },
                |mut t| {
                    let mut transitions = 0usize;
                    let mut scroll = 0.0;
                    let end = extents.len() as f64 * 600.0;
                    while scroll < end {
                        t.set_viewport(Rect::new(0.0, scroll, 800.0, scroll + 600.0));
                        transitions += t.take_records().records.len();
                        scroll += 300.0;
                    }
                    black_box(transitions);
                },
                BatchSize::SmallInput,
            )
        });

        // Steady state: the viewport does not move, nothing transitions.
        group.bench_function(format!("quiescent_n{}", n), |b| {
            b.iter_batched(
                || {
                    let mut t: BandTracker<usize> = BandTracker::new(BandInset::center_line());
                    for (i, &extent) in extents.iter().enumerate() {
                        t.watch(i, extent);
                    }
                    t.set_viewport(Rect::new(0.0, 0.0, 800.0, 600.0));
                    let _ = t.take_records();
                    t
                },
                |mut t| {
                    black_box(t.take_records().records.len());
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("outline_scan");
    for &n in &[64usize, 256, 1024] {
        let page = gen_page(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("scan_n{}", n), |b| {
            b.iter(|| {
                let outline = Outline::scan(black_box(&page));
                black_box(outline.sections().len() + outline.links().len());
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_take_records, bench_scan);
criterion_main!(benches);
