//! Auto-QA performance benchmarks.
//!
//! Measures the sequence matcher and the full check suite.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use cluekit::qa::{ratio, run_auto_qa, AutoQa, Candidate};

/// Clues compared against each candidate, sized like the generator's window.
const RECENT_CLUES: &[&str] = &[
    "Common daily-life term related to house00",
    "Everyday concept connected to tree00",
    "A familiar topic around water00",
    "Common daily-life term related to school00",
    "Everyday concept connected to garden00",
    "A familiar topic around window00",
    "Common daily-life term related to street00",
    "Everyday concept connected to flower00",
    "Tall plant with a trunk",
    "Place where a family lives",
    "Something you drink when thirsty",
    "Where children learn to read",
    "Green space behind a house",
    "Glass pane in a wall",
    "Road lined with houses",
    "It blooms in spring",
    "Common daily-life term related to house01",
    "Everyday concept connected to tree01",
    "A familiar topic around water01",
    "Common daily-life term related to school01",
];

fn bench_matcher(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequence_matcher");

    group.bench_function("short_pair", |b| {
        b.iter(|| black_box(ratio("tall plant with a trunk", "tall plant with trunk")))
    });

    for len in [20, 80, 200, 400].iter() {
        let a: String = "abcde ".repeat(*len / 6 + 1).chars().take(*len).collect();
        let b_text: String = "abdce ".repeat(*len / 6 + 1).chars().take(*len).collect();

        group.bench_with_input(BenchmarkId::new("length", len), &(a, b_text), |b, (x, y)| {
            b.iter(|| black_box(ratio(x, y)))
        });
    }

    group.finish();
}

fn bench_auto_qa(c: &mut Criterion) {
    let mut group = c.benchmark_group("auto_qa");

    group.bench_function("no_history", |b| {
        b.iter(|| {
            black_box(run_auto_qa(
                "house0042",
                "Common daily-life term related to house00",
                "en",
                3,
                &[] as &[&str],
            ))
        })
    });

    group.bench_function("window_20", |b| {
        b.iter(|| {
            black_box(run_auto_qa(
                "house0042",
                "Common daily-life term related to house00",
                "en",
                3,
                RECENT_CLUES,
            ))
        })
    });

    let engine = AutoQa::new();
    let candidate = Candidate::new(
        "garden0004",
        "Everyday concept connected to garden00",
        "en",
        5,
        RECENT_CLUES,
    );
    group.bench_function("prepared_candidate", |b| {
        b.iter(|| black_box(engine.run(&candidate)))
    });

    group.bench_function("engine_new", |b| b.iter(|| black_box(AutoQa::new())));

    group.finish();
}

criterion_group!(benches, bench_matcher, bench_auto_qa);
criterion_main!(benches);
