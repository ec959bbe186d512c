//! Criterion micro-benchmarks for array push, sort, search and hash.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use frontier_arena::{Arena, ArenaConfig, DynArray, WordArray};
use frontier_bench::{filled_arena, lcg_words};
use std::hint::black_box;

/// Benchmark: push 10K words onto an array sitting at the frontier.
fn bench_push_in_place_10k(c: &mut Criterion) {
    let values = lcg_words(10_000, 1);
    c.bench_function("push_in_place_10k", |b| {
        b.iter(|| {
            let mut arena = Arena::new(ArenaConfig::new(16 * 1024));
            let mut a = DynArray::create(&mut arena, 0).unwrap();
            for v in &values {
                a.push(&mut arena, *v, 0).unwrap();
            }
            black_box(a.len(&arena));
        });
    });
}

/// Benchmark: push 10K words onto a buried array at several headroom sizes.
fn bench_push_relocating_10k(c: &mut Criterion) {
    let values = lcg_words(10_000, 2);
    let mut group = c.benchmark_group("push_relocating_10k");
    for ovr in [0u32, 16, 256] {
        group.bench_with_input(BenchmarkId::from_parameter(ovr), &ovr, |b, &ovr| {
            b.iter(|| {
                let mut arena = Arena::new(ArenaConfig::new(16 * 1024));
                let mut a = DynArray::create(&mut arena, 0).unwrap();
                let mut other = DynArray::create(&mut arena, 0).unwrap();
                for v in &values {
                    a.push(&mut arena, *v, ovr).unwrap();
                    other.push(&mut arena, *v, ovr).unwrap();
                }
                black_box(arena.abandoned_words());
            });
        });
    }
    group.finish();
}

/// Benchmark: insertion sort of 1K random words.
fn bench_insertion_sort_1k(c: &mut Criterion) {
    c.bench_function("insertion_sort_1k", |b| {
        b.iter_batched(
            || filled_arena(1_000, 3).unwrap(),
            |(mut arena, a)| {
                a.insertion_sort(&mut arena);
                black_box(a.get(&arena, 0).unwrap());
            },
            criterion::BatchSize::SmallInput,
        );
    });
}

/// Benchmark: linear vs binary search over 10K sorted words.
fn bench_search_10k(c: &mut Criterion) {
    let (mut arena, a) = filled_arena(10_000, 4).unwrap();
    a.insertion_sort(&mut arena);
    let target = a.get(&arena, 7_777).unwrap();

    c.bench_function("unsorted_search_10k", |b| {
        b.iter(|| black_box(a.unsorted_search(&arena, black_box(target))));
    });
    c.bench_function("sorted_search_10k", |b| {
        b.iter(|| black_box(a.sorted_search(&arena, black_box(target))));
    });
}

/// Benchmark: SHA-256 content hash of 10K words.
fn bench_hash_10k(c: &mut Criterion) {
    let (arena, a) = filled_arena(10_000, 5).unwrap();
    c.bench_function("hash_10k", |b| {
        b.iter(|| black_box(a.hash(&arena)));
    });
}

criterion_group!(
    benches,
    bench_push_in_place_10k,
    bench_push_relocating_10k,
    bench_insertion_sort_1k,
    bench_search_10k,
    bench_hash_10k
);
criterion_main!(benches);
