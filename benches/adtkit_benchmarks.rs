//! adtkit Benchmarks
//!
//! Criterion benchmarks for the sequence containers and the hash tables.
//!
//! To run the benchmarks:
//! ```bash
//! cargo bench --features benchmarking
//! ```

use criterion::{
    black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, SamplingMode,
    Throughput,
};
use std::time::Duration;

use adtkit::{HashTableConfig, KeyValueMap, List, ListKind, Map, MapKind, Sequence};

const SIZES: [usize; 3] = [100, 1_000, 10_000];

/// Benchmark positional access near the tail of every list kind.
fn bench_sequences(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequences");
    group.sampling_mode(SamplingMode::Flat);
    group.measurement_time(Duration::from_secs(2));
    group.warm_up_time(Duration::from_secs(1));

    for kind in ListKind::ALL {
        for size in [100, 1_000] {
            group.throughput(Throughput::Elements(size as u64));
            group.bench_with_input(BenchmarkId::new(format!("{kind}/add_last"), size), &size, |b, &size| {
                b.iter(|| {
                    let mut list = List::new(kind, adtkit::Comparator::natural());
                    for i in 0..size {
                        list.add_last(black_box(i));
                    }
                    list
                });
            });

            let list = List::from_elements(kind, 0..size, adtkit::Comparator::natural());
            group.bench_with_input(BenchmarkId::new(format!("{kind}/get_near_tail"), size), &size, |b, &size| {
                b.iter(|| list.get_element(black_box(size - 2)).ok().copied());
            });
        }
    }

    group.finish();
}

/// Benchmark inserts (including rehashes) and lookups of both hash tables.
fn bench_hash_tables(c: &mut Criterion) {
    let mut group = c.benchmark_group("hash_tables");
    group.sampling_mode(SamplingMode::Flat);
    group.measurement_time(Duration::from_secs(2));
    group.warm_up_time(Duration::from_secs(1));

    for kind in MapKind::ALL {
        for size in SIZES {
            group.throughput(Throughput::Elements(size as u64));
            group.bench_with_input(BenchmarkId::new(format!("{kind}/put"), size), &size, |b, &size| {
                b.iter(|| {
                    let config = kind.default_config().with_seed(1);
                    let mut map: Map<usize, usize> = Map::with_config(kind, config).unwrap();
                    for i in 0..size {
                        map.put(black_box(i), i);
                    }
                    map
                });
            });

            group.bench_with_input(BenchmarkId::new(format!("{kind}/get"), size), &size, |b, &size| {
                b.iter_batched(
                    || {
                        let config: HashTableConfig = kind.default_config().with_seed(1);
                        let mut map: Map<usize, usize> = Map::with_config(kind, config).unwrap();
                        for i in 0..size {
                            map.put(i, i);
                        }
                        map
                    },
                    |map| {
                        for i in 0..size {
                            black_box(map.get(&i));
                        }
                    },
                    BatchSize::LargeInput,
                );
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_sequences, bench_hash_tables);
criterion_main!(benches);
