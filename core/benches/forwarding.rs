//! Benchmarks for forwarding overhead: Pure vs Shallow vs a bare container
//!
//! Run with: `cargo bench --bench forwarding`

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use primcoll_core::containers::{ArrayBag, PrimitiveSet};
use primcoll_core::forwarding::ForwardingCollection;
use primcoll_core::split::PrimitiveSpliterator;
use primcoll_core::traits::PrimitiveCollection;

fn bench_to_vec(c: &mut Criterion) {
    let mut group = c.benchmark_group("to_vec");

    for size in [16, 1024, 65536] {
        let bag: ArrayBag<i64> = (0..size).collect();
        let pure = ForwardingCollection::<i64, _>::pure(bag.clone());
        let shallow = ForwardingCollection::<i64, _>::shallow(bag.clone());

        group.bench_with_input(BenchmarkId::new("ArrayBag", size), &bag, |b, bag| {
            b.iter(|| black_box(bag.to_vec()));
        });

        group.bench_with_input(BenchmarkId::new("Pure", size), &pure, |b, fwd| {
            b.iter(|| black_box(fwd.to_vec()));
        });

        group.bench_with_input(BenchmarkId::new("Shallow", size), &shallow, |b, fwd| {
            b.iter(|| black_box(fwd.to_vec()));
        });
    }

    group.finish();
}

fn bench_contains(c: &mut Criterion) {
    let mut group = c.benchmark_group("set_contains");

    for size in [16, 1024, 65536] {
        let set: PrimitiveSet<i32> = (0..size).collect();
        let pure = ForwardingCollection::<i32, _>::pure(set.clone());
        let view = ForwardingCollection::<i32, _>::unmodifiable(set.clone());

        group.bench_with_input(BenchmarkId::new("PrimitiveSet", size), &set, |b, set| {
            b.iter(|| black_box(set.contains(black_box(size / 2))));
        });

        group.bench_with_input(BenchmarkId::new("Pure", size), &pure, |b, fwd| {
            b.iter(|| black_box(fwd.contains(black_box(size / 2))));
        });

        group.bench_with_input(BenchmarkId::new("Unmodifiable", size), &view, |b, fwd| {
            b.iter(|| black_box(fwd.contains(black_box(size / 2))));
        });
    }

    group.finish();
}

fn bench_split(c: &mut Criterion) {
    let mut group = c.benchmark_group("split_batches");

    for size in [4096, 65536, 1 << 20] {
        let bag: ArrayBag<f64> = (0..size).map(f64::from).collect();

        group.bench_with_input(BenchmarkId::new("drain", size), &bag, |b, bag| {
            b.iter(|| {
                let mut split = bag.spliterator().unwrap();
                let mut total = 0.0;
                while let Some(batch) = split.try_split().unwrap() {
                    total += batch.sum::<f64>();
                }
                split.for_each_remaining(&mut |v| total += v).unwrap();
                black_box(total)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_to_vec, bench_contains, bench_split);
criterion_main!(benches);
