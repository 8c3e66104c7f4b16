//! Pattern set and semantic chain benchmarks.
//!
//! The pattern builder runs on every keystroke-debounced search request, so
//! it must stay in the microsecond range for names and bounded for junk.
//!
//! # Groups
//!
//! | Group | What it measures |
//! |-------|-----------------|
//! | `patterns` | Full pattern set build for Latin, diacritic, Cyrillic and wrong-layout queries |
//! | `patterns/pathological` | Build cost on very long inputs (early-exit generators) |
//! | `semantic` | Semantic chain build at chain lengths 1/3/5 |
//! | `matcher` | In-memory filtering of a directory-sized record list |
//!
//! # Viewing results
//!
//! ```sh
//! cargo bench --bench search_bench
//! open target/criterion/report/index.html
//! ```

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use crossmatch_core::{get_search_patterns, get_semantic_query_variants, matches_search};

const QUERIES: &[(&str, &str)] = &[
    ("latin", "Baltic Travel"),
    ("diacritic", "Bērziņš Jānis"),
    ("cyrillic", "Иванов Сергей"),
    ("wrong_layout", "ghbdtn"),
    ("typo", "procote"),
];

// ---------------------------------------------------------------------------
// Pattern sets
// ---------------------------------------------------------------------------

fn patterns_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("patterns");
    group.throughput(Throughput::Elements(1));

    for (name, query) in QUERIES {
        group.bench_with_input(BenchmarkId::new("build", name), query, |b, q| {
            b.iter(|| get_search_patterns(black_box(q)))
        });
    }

    group.finish();
}

fn pathological_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("patterns/pathological");
    group.sample_size(20);

    for len in [1_000usize, 10_000, 100_000] {
        let input = "qwertyuiop".repeat(len / 10);
        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_with_input(BenchmarkId::new("build", len), &input, |b, q| {
            b.iter(|| get_search_patterns(black_box(q)))
        });
    }

    group.finish();
}

// ---------------------------------------------------------------------------
// Semantic chains
// ---------------------------------------------------------------------------

fn semantic_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("semantic");

    for max in [1usize, 3, 5] {
        group.bench_with_input(BenchmarkId::new("procote", max), &max, |b, &max| {
            b.iter(|| get_semantic_query_variants(black_box("procote"), max))
        });
    }

    group.finish();
}

// ---------------------------------------------------------------------------
// Matcher
// ---------------------------------------------------------------------------

fn matcher_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("matcher");

    let records: Vec<String> = (0..1_000usize)
        .map(|i| match i % 4 {
            0 => format!("Bērziņš Jānis {i}"),
            1 => format!("Иванов Сергей {i}"),
            2 => format!("Švanka Laura {i}"),
            _ => format!("Baltic Travel Group {i}"),
        })
        .collect();
    let patterns = get_search_patterns("sva").into_vec();

    group.throughput(Throughput::Elements(records.len() as u64));
    group.bench_function("1000_records", |b| {
        b.iter(|| {
            records
                .iter()
                .filter(|r| matches_search(Some(r.as_str()), &patterns[..]))
                .count()
        })
    });

    group.finish();
}

// ---------------------------------------------------------------------------
// Criterion registration
// ---------------------------------------------------------------------------

criterion_group!(
    search_benches,
    patterns_bench,
    pathological_bench,
    semantic_bench,
    matcher_bench,
);
criterion_main!(search_benches);
