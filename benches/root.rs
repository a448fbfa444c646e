//! Benchmarks for Merkle root computation.
//!
//! Measures leaf hashing and full layer reduction across tree sizes.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rootsum::MerkleTree;
use serde_json::{json, Value};

fn items(n: usize) -> Vec<Value> {
    (0..n).map(|i| json!({"id": i, "payload": format!("item-{i}")})).collect()
}

/// Benchmark building a tree (leaf hashing only).
fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");

    for n in [16, 256, 4096].iter() {
        let data = items(*n);
        group.throughput(Throughput::Elements(*n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &data, |b, data| {
            b.iter(|| black_box(MerkleTree::from_values(data).unwrap()));
        });
    }

    group.finish();
}

/// Benchmark the layer reduction down to the root.
fn bench_root(c: &mut Criterion) {
    let mut group = c.benchmark_group("root");

    for n in [16, 256, 4096].iter() {
        let data = items(*n);
        group.throughput(Throughput::Elements(*n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &data, |b, data| {
            b.iter_batched(
                || MerkleTree::from_values(data).unwrap(),
                |mut tree| black_box(tree.root_hash().unwrap()),
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_build, bench_root);
criterion_main!(benches);
