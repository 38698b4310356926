extern crate criterion;

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use indexed_min_queue::IndexedMinPriorityQueue;

use crate::generators::{gen_random_f64s, gen_random_usizes, gen_shuffled_ids};

const EXTRA: usize = 1000;

pub fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_usizes_random");
    for &size in &[100_000, 200_000, 300_000, 400_000, 500_000] {
        let ids = gen_shuffled_ids(size + EXTRA, 0);
        let values = gen_random_usizes(size + EXTRA, 7);
        let (base, extra) = ids.split_at(size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let mut base_queue = IndexedMinPriorityQueue::new(size + EXTRA);
            for (&id, &v) in base.iter().zip(values.iter()) {
                base_queue.insert(id, v).unwrap();
            }
            b.iter_batched(
                || base_queue.clone(),
                |mut queue| {
                    for (&id, &v) in extra.iter().zip(values[size..].iter()) {
                        queue.insert(id, v).unwrap();
                    }
                    queue
                },
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();

    let mut group = c.benchmark_group("insert_f64s_random");
    for &size in &[10_000, 50_000] {
        let ids = gen_shuffled_ids(size + EXTRA, 3);
        let values = gen_random_f64s(size + EXTRA, 11);
        let (base, extra) = ids.split_at(size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let mut base_queue = IndexedMinPriorityQueue::new(size + EXTRA);
            for (&id, &v) in base.iter().zip(values.iter()) {
                base_queue.insert(id, v).unwrap();
            }
            b.iter_batched(
                || base_queue.clone(),
                |mut queue| {
                    for (&id, &v) in extra.iter().zip(values[size..].iter()) {
                        queue.insert(id, v).unwrap();
                    }
                    queue
                },
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();

    // Descending priorities, every insert sifts all the way to the root
    let mut group = c.benchmark_group("insert_usizes_worst");
    for &size in &[10_000, 100_000] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter_batched(
                || IndexedMinPriorityQueue::new(size),
                |mut queue| {
                    for id in 0..size {
                        queue.insert(id, size - id).unwrap();
                    }
                    queue
                },
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_insert);
criterion_main!(benches);
