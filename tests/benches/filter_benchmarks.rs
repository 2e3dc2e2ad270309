//! # Wordsieve Benchmarks
//!
//! Insert and lookup throughput per hash strategy. The weak strategies
//! bound the cheap end (a handful of byte reads per word); digest
//! slicing pays one 128-bit digest per operation regardless of width.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use wordsieve::{BloomFilter, CharCodeHash, CharPairHash, DigestSliceHash};

fn bench_inserts(c: &mut Criterion) {
    let words: Vec<String> = (0..1000).map(|i| format!("bench-word-{}", i)).collect();

    let mut group = c.benchmark_group("insert-1000-words");
    group.throughput(Throughput::Elements(words.len() as u64));

    group.bench_function("char_code", |b| {
        b.iter(|| {
            let mut filter = BloomFilter::new(CharCodeHash);
            for word in &words {
                filter.insert(black_box(word));
            }
            black_box(filter.count_set())
        })
    });

    group.bench_function("char_pair", |b| {
        b.iter(|| {
            let mut filter = BloomFilter::new(CharPairHash);
            for word in &words {
                filter.insert(black_box(word));
            }
            black_box(filter.count_set())
        })
    });

    for width in [8u32, 16, 24] {
        group.bench_with_input(
            BenchmarkId::new("digest_slice", width),
            &width,
            |b, &width| {
                b.iter(|| {
                    let mut filter = BloomFilter::new(DigestSliceHash::new(width).unwrap());
                    for word in &words {
                        filter.insert(black_box(word));
                    }
                    black_box(filter.count_set())
                })
            },
        );
    }

    group.finish();
}

fn bench_lookups(c: &mut Criterion) {
    let words: Vec<String> = (0..1000).map(|i| format!("bench-word-{}", i)).collect();
    let probes: Vec<String> = (0..1000).map(|i| format!("probe-word-{}", i)).collect();

    let mut filter = BloomFilter::new(DigestSliceHash::new(20).unwrap());
    filter.insert_all(&words);

    let mut group = c.benchmark_group("lookup-1000-probes");
    group.throughput(Throughput::Elements(probes.len() as u64));

    group.bench_function("digest_slice_20_members", |b| {
        b.iter(|| {
            let hits = words.iter().filter(|w| filter.lookup(black_box(w))).count();
            black_box(hits)
        })
    });

    group.bench_function("digest_slice_20_non_members", |b| {
        b.iter(|| {
            let hits = probes.iter().filter(|w| filter.lookup(black_box(w))).count();
            black_box(hits)
        })
    });

    group.finish();
}

criterion_group!(benches, bench_inserts, bench_lookups);
criterion_main!(benches);
