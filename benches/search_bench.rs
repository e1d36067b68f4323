//! Query filter benchmarks.
//!
//! The filter runs on every keystroke, so it is the latency that matters:
//! a scan of the whole index must feel instant at any realistic page size.
//!
//! # Groups
//!
//! | Group | What it measures |
//! |-------|-----------------|
//! | `filter/hit_rate` | Cost at every-entry-matches vs rare-match queries |
//! | `filter/scaling` | Full-index scan as the index grows |
//!
//! # Viewing results
//!
//! ```sh
//! cargo bench --bench search_bench
//! open target/criterion/report/index.html
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use psst_core::{search, IndexEntry, SearchIndex};

fn index_of(n: usize) -> SearchIndex {
    SearchIndex::from_entries(
        (0..n)
            .map(|i| IndexEntry {
                title: format!("Generated Post {i}"),
                url: format!("/posts/{i}/"),
                summary: format!("Summary text for generated post number {i}, rare-{}.", i % 97),
                tags: vec!["gen".to_string(), format!("batch-{}", i % 10)],
            })
            .collect(),
    )
}

fn hit_rate_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter/hit_rate");
    let index = index_of(1_000);

    // Every entry matches; the cap stops the scan after 5 hits.
    group.bench_function("all_match_1k", |b| {
        b.iter(|| {
            let results = search(&index, "post");
            assert_eq!(results.len(), 5);
            results
        })
    });

    // ~1% of entries match; most of the index is scanned.
    group.bench_function("rare_match_1k", |b| {
        b.iter(|| {
            let results = search(&index, "rare-96.");
            assert!(!results.is_empty());
            results
        })
    });

    // Nothing matches; the whole index is scanned and lowercased.
    group.bench_function("no_match_1k", |b| {
        b.iter(|| {
            let results = search(&index, "quaternion");
            assert!(results.is_empty());
            results
        })
    });

    group.finish();
}

fn scaling_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter/scaling");

    for &n in &[100usize, 1_000, 10_000] {
        let index = index_of(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &index, |b, index| {
            b.iter(|| search(index, "quaternion"))
        });
    }

    group.finish();
}

criterion_group!(benches, hit_rate_bench, scaling_bench);
criterion_main!(benches);
