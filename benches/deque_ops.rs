use std::hint::black_box;

use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::criterion_group;
use criterion::criterion_main;
type RandomState = hashbrown::DefaultHashBuilder;
type DequeMap<K, V> = deque_dict::deque_map::DequeMap<K, V, RandomState>;

type HashLinkedMap<K, V> = hashlink::LinkedHashMap<K, V, RandomState>;
type IndexMap<K, V> = indexmap::IndexMap<K, V, RandomState>;

const SIZES: &[usize] = &[10000];

fn bench_insertion_at_end(c: &mut Criterion) {
    let mut group = c.benchmark_group("insertion_at_end");

    for &size in SIZES {
        group.throughput(criterion::Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("deque_dict", size), &size, |b, &size| {
            b.iter(|| {
                let mut map: DequeMap<usize, usize> = DequeMap::default();
                for i in 0..size {
                    map.insert(black_box(i), black_box(i * 2));
                }
                map
            })
        });

        group.bench_with_input(
            BenchmarkId::new("deque_dict_preallocated", size),
            &size,
            |b, &size| {
                b.iter(|| {
                    let mut map: DequeMap<usize, usize> =
                        DequeMap::with_capacity_and_hasher(size, RandomState::default());
                    for i in 0..size {
                        map.insert(black_box(i), black_box(i * 2));
                    }
                    map
                })
            },
        );

        group.bench_with_input(BenchmarkId::new("indexmap", size), &size, |b, &size| {
            b.iter(|| {
                let mut map = IndexMap::default();
                for i in 0..size {
                    map.insert(black_box(i), black_box(i * 2));
                }
                map
            })
        });

        group.bench_with_input(BenchmarkId::new("hashlinked", size), &size, |b, &size| {
            b.iter(|| {
                let mut map = HashLinkedMap::default();
                for i in 0..size {
                    map.insert(black_box(i), black_box(i * 2));
                }
                map
            })
        });
    }

    group.finish();
}

fn bench_pop_from_front(c: &mut Criterion) {
    let mut group = c.benchmark_group("pop_from_front");

    for &size in SIZES {
        group.throughput(criterion::Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("deque_dict", size), &size, |b, &size| {
            b.iter_batched(
                || {
                    let mut map: DequeMap<usize, usize> = DequeMap::default();
                    for i in 0..size {
                        map.insert(i, i * 2);
                    }
                    map
                },
                |mut map| {
                    let mut count = 0;
                    while map.pop_front().is_some() {
                        count += 1;
                    }
                    count
                },
                criterion::BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("indexmap", size), &size, |b, &size| {
            b.iter_batched(
                || {
                    let mut map = IndexMap::default();
                    for i in 0..size {
                        map.insert(i, i * 2);
                    }
                    map
                },
                |mut map| {
                    let mut count = 0;
                    // shift_remove_index keeps order but shifts the tail.
                    while !map.is_empty() {
                        map.shift_remove_index(0);
                        count += 1;
                    }
                    count
                },
                criterion::BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("hashlinked", size), &size, |b, &size| {
            b.iter_batched(
                || {
                    let mut map = HashLinkedMap::default();
                    for i in 0..size {
                        map.insert(i, i * 2);
                    }
                    map
                },
                |mut map| {
                    let mut count = 0;
                    while map.pop_front().is_some() {
                        count += 1;
                    }
                    count
                },
                criterion::BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn bench_positional_access(c: &mut Criterion) {
    let mut group = c.benchmark_group("positional_access");

    for &size in SIZES {
        group.throughput(criterion::Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("deque_dict", size), &size, |b, &size| {
            let mut map: DequeMap<usize, usize> = DequeMap::default();
            for i in 0..size {
                map.insert(i, i * 2);
            }
            // Prime the position cache so the loop measures steady state.
            map.at(0);
            b.iter(|| {
                let mut sum = 0;
                for i in 0..size {
                    sum += *map.at(black_box(i as isize)).unwrap();
                }
                sum
            })
        });

        group.bench_with_input(BenchmarkId::new("indexmap", size), &size, |b, &size| {
            let mut map = IndexMap::default();
            for i in 0..size {
                map.insert(i, i * 2);
            }
            b.iter(|| {
                let mut sum = 0;
                for i in 0..size {
                    sum += *map.get_index(black_box(i)).unwrap().1;
                }
                sum
            })
        });

        group.bench_with_input(BenchmarkId::new("hashlinked", size), &size, |b, &size| {
            let mut map = HashLinkedMap::default();
            for i in 0..size {
                map.insert(i, i * 2);
            }
            // hashlink has no positional API; walking the list is the
            // honest equivalent.
            b.iter(|| {
                let mut sum = 0;
                for i in 0..size {
                    sum += *map.iter().nth(black_box(i)).unwrap().1;
                }
                sum
            })
        });
    }

    group.finish();
}

fn bench_queue_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("queue_churn");

    for &size in SIZES {
        group.throughput(criterion::Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("deque_dict", size), &size, |b, &size| {
            b.iter_batched(
                || {
                    let mut map: DequeMap<usize, usize> = DequeMap::default();
                    for i in 0..size {
                        map.insert(i, i * 2);
                    }
                    map.at(0);
                    map
                },
                |mut map| {
                    // Rotate: pop the oldest, append a fresh key, read both
                    // ends positionally. All O(1) on the cache fast path.
                    for i in 0..size {
                        map.pop_front();
                        map.insert(size + i, i);
                        black_box(map.at(0));
                        black_box(map.at(-1));
                    }
                    map
                },
                criterion::BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("hashlinked", size), &size, |b, &size| {
            b.iter_batched(
                || {
                    let mut map = HashLinkedMap::default();
                    for i in 0..size {
                        map.insert(i, i * 2);
                    }
                    map
                },
                |mut map| {
                    for i in 0..size {
                        map.pop_front();
                        map.insert(size + i, i);
                        black_box(map.front());
                        black_box(map.back());
                    }
                    map
                },
                criterion::BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn bench_keyed_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("keyed_lookup");

    for &size in SIZES {
        group.throughput(criterion::Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("deque_dict", size), &size, |b, &size| {
            let mut map: DequeMap<usize, usize> = DequeMap::default();
            for i in 0..size {
                map.insert(i, i * 2);
            }
            b.iter(|| {
                let mut sum = 0;
                for i in 0..size {
                    sum += *map.get(black_box(&i)).unwrap();
                }
                sum
            })
        });

        group.bench_with_input(BenchmarkId::new("indexmap", size), &size, |b, &size| {
            let mut map = IndexMap::default();
            for i in 0..size {
                map.insert(i, i * 2);
            }
            b.iter(|| {
                let mut sum = 0;
                for i in 0..size {
                    sum += *map.get(black_box(&i)).unwrap();
                }
                sum
            })
        });

        group.bench_with_input(BenchmarkId::new("hashlinked", size), &size, |b, &size| {
            let mut map = HashLinkedMap::default();
            for i in 0..size {
                map.insert(i, i * 2);
            }
            b.iter(|| {
                let mut sum = 0;
                for i in 0..size {
                    sum += *map.get(black_box(&i)).unwrap();
                }
                sum
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_insertion_at_end,
    bench_pop_from_front,
    bench_positional_access,
    bench_queue_churn,
    bench_keyed_lookup
);
criterion_main!(benches);
