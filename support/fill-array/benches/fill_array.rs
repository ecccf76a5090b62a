//! Benchmarks for fill_array vs Vec::collect
//!
//! Run with: `cargo bench --bench fill_array`

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use primcoll_fill_array::{CapacityExceeded, fill_array};

fn bench_accurate_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("accurate_declared_size");

    for size in [16, 256, 4096, 65536] {
        let source: Vec<i64> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("fill_array", size), &source, |b, source| {
            b.iter(|| {
                let mut it = source.iter().copied();
                let out = fill_array::<_, CapacityExceeded>(source.len(), || Ok(it.next()));
                black_box(out)
            });
        });

        group.bench_with_input(BenchmarkId::new("Vec::collect", size), &source, |b, source| {
            b.iter(|| {
                let out: Vec<i64> = source.iter().copied().collect();
                black_box(out)
            });
        });
    }

    group.finish();
}

fn bench_stale_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("stale_declared_size");

    // Declared length is a quarter of the real length, forcing the growth phase.
    for size in [256, 4096, 65536] {
        let source: Vec<i64> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("fill_array", size), &source, |b, source| {
            b.iter(|| {
                let mut it = source.iter().copied();
                let out = fill_array::<_, CapacityExceeded>(source.len() / 4, || Ok(it.next()));
                black_box(out)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_accurate_size, bench_stale_size);
criterion_main!(benches);
