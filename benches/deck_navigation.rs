// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for slide deck rotation.
//!
//! Measures deck construction and the show/next/prev operations that run on
//! every autoplay tick and keypress.

use carousel::deck::SlideDeck;
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use std::path::PathBuf;

fn synthetic_slides(n: usize) -> Vec<PathBuf> {
    (0..n)
        .map(|i| PathBuf::from(format!("slide-{i:05}.jpg")))
        .collect()
}

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("deck_navigation");

    let slides = synthetic_slides(1000);
    group.bench_function("from_slides_1000", |b| {
        b.iter(|| {
            let deck = SlideDeck::from_slides(slides.clone());
            black_box(&deck);
        });
    });

    group.finish();
}

fn bench_rotation(c: &mut Criterion) {
    let mut group = c.benchmark_group("deck_navigation");

    let mut deck = SlideDeck::from_slides(synthetic_slides(1000));

    group.bench_function("next", |b| {
        b.iter(|| {
            deck.next();
            black_box(deck.current_index());
        });
    });

    group.bench_function("prev", |b| {
        b.iter(|| {
            deck.prev();
            black_box(deck.current_index());
        });
    });

    group.bench_function("show_far_negative", |b| {
        b.iter(|| {
            deck.show(black_box(-987_654_321));
            black_box(deck.current_index());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_construction, bench_rotation);
criterion_main!(benches);
