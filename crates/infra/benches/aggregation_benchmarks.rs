use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use mercato_catalog::{ProductAggregate, VariantRecord};
use mercato_core::{ProductId, VariantId};
use mercato_infra::{Aggregator, InMemoryCatalogStore};

fn seeded_store(variant_count: u64) -> (InMemoryCatalogStore, ProductId) {
    let store = InMemoryCatalogStore::new();
    let product_id = ProductId::new();
    store.insert_product(product_id).unwrap();
    for i in 0..variant_count {
        store
            .put_variant(
                product_id,
                VariantId::new(),
                VariantRecord::new(100 + (i * 7) % 900, i % 50),
            )
            .unwrap();
    }
    (store, product_id)
}

/// Pure fold only, no store round-trip.
fn bench_aggregate_fold(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate_fold");
    for size in [1u64, 8, 64, 512] {
        let variants: Vec<VariantRecord> = (0..size)
            .map(|i| VariantRecord::new(100 + (i * 7) % 900, i % 50))
            .collect();
        group.throughput(Throughput::Elements(size));
        group.bench_with_input(BenchmarkId::from_parameter(size), &variants, |b, vs| {
            b.iter(|| ProductAggregate::of(black_box(vs)))
        });
    }
    group.finish();
}

/// Full recompute: read variants, fold, write summary.
fn bench_recompute(c: &mut Criterion) {
    let mut group = c.benchmark_group("recompute");
    for size in [1u64, 8, 64, 512] {
        let (store, product_id) = seeded_store(size);
        let aggregator = Aggregator::new(store);
        group.throughput(Throughput::Elements(size));
        group.bench_with_input(BenchmarkId::from_parameter(size), &product_id, |b, id| {
            b.iter(|| aggregator.recompute(black_box(*id)).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_aggregate_fold, bench_recompute);
criterion_main!(benches);
