use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use recordworks_core::{Entity, RecordId, StockLevel};
use recordworks_store::Repository;

#[derive(Debug, Clone)]
struct BenchItem {
    id: RecordId,
    name: String,
    quantity: i64,
}

impl BenchItem {
    fn new(id: u32) -> Self {
        Self {
            id: RecordId::new(id),
            name: format!("item-{id}"),
            quantity: i64::from(id % 500),
        }
    }
}

impl Entity for BenchItem {
    type Id = RecordId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl StockLevel for BenchItem {
    fn quantity(&self) -> i64 {
        self.quantity
    }

    fn set_quantity(&mut self, quantity: i64) {
        self.quantity = quantity;
    }
}

fn seeded(size: u32) -> Repository<BenchItem> {
    let mut repo = Repository::new();
    for id in 0..size {
        repo.add(BenchItem::new(id)).expect("unique seed ids");
    }
    repo
}

fn bench_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("repository_add");
    for size in [100u32, 1_000, 10_000] {
        group.throughput(Throughput::Elements(u64::from(size)));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| {
                let mut repo = Repository::new();
                for id in 0..size {
                    repo.add(black_box(BenchItem::new(id))).expect("unique ids");
                }
                repo
            });
        });
    }
    group.finish();
}

fn bench_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("repository_get");
    for size in [100u32, 1_000, 10_000] {
        let repo = seeded(size);
        group.throughput(Throughput::Elements(u64::from(size)));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| {
                for id in 0..size {
                    black_box(repo.get(RecordId::new(id)).expect("seeded id"));
                }
            });
        });
    }
    group.finish();
}

fn bench_update_quantity(c: &mut Criterion) {
    let mut group = c.benchmark_group("repository_update_quantity");
    for size in [100u32, 1_000, 10_000] {
        group.throughput(Throughput::Elements(u64::from(size)));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let mut repo = seeded(size);
            b.iter(|| {
                for id in 0..size {
                    repo.update_quantity(RecordId::new(id), i64::from(id))
                        .expect("seeded id");
                }
            });
        });
    }
    group.finish();
}

fn bench_snapshot(c: &mut Criterion) {
    let mut group = c.benchmark_group("repository_snapshot");
    for size in [100u32, 1_000, 10_000] {
        let repo = seeded(size);
        group.throughput(Throughput::Elements(u64::from(size)));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| black_box(repo.snapshot()));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_add,
    bench_get,
    bench_update_quantity,
    bench_snapshot
);
criterion_main!(benches);
