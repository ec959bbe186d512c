//! Criterion micro-benchmarks for raw arena allocation and array churn.

use criterion::{criterion_group, criterion_main, Criterion};
use frontier_arena::{Arena, ArenaConfig, FixedArray};
use frontier_bench::churn;
use std::hint::black_box;

/// Benchmark: allocate and free 1K fixed arrays at the frontier.
fn bench_alloc_free_frontier(c: &mut Criterion) {
    let mut arena = Arena::new(ArenaConfig::default());
    c.bench_function("alloc_free_frontier_1k", |b| {
        b.iter(|| {
            for n in 0..1_000u32 {
                let a = FixedArray::calloc(&mut arena, n % 32).unwrap();
                black_box(a.free(&mut arena));
            }
        });
    });
}

/// Benchmark: bump-allocate 10K small arrays, then reset.
fn bench_alloc_reset_10k(c: &mut Criterion) {
    let mut arena = Arena::new(ArenaConfig::new(64 * 1024));
    c.bench_function("alloc_reset_10k", |b| {
        b.iter(|| {
            for _ in 0..10_000 {
                black_box(FixedArray::malloc(&mut arena, 4).unwrap());
            }
            arena.reset();
        });
    });
}

/// Benchmark: mixed push/pop/remove across 8 interleaved arrays.
fn bench_churn_8x1k(c: &mut Criterion) {
    c.bench_function("churn_8x1k", |b| {
        b.iter(|| black_box(churn(8, 1_000, 8).unwrap().abandoned_words()));
    });
}

criterion_group!(
    benches,
    bench_alloc_free_frontier,
    bench_alloc_reset_10k,
    bench_churn_8x1k
);
criterion_main!(benches);
