use changemaker::change::STANDARD_DENOMINATIONS;
use changemaker::dynamic::make_minimal;
use changemaker::greedy::make_greedy;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

const AMOUNTS: [u64; 4] = [12, 113, 1327, 10_000];

fn bench_standard_denominations(c: &mut Criterion) {
    let mut group = c.benchmark_group("standard_denominations");

    for &amount in AMOUNTS.iter() {
        group.bench_with_input(BenchmarkId::new("greedy", amount), &amount, |b, &amount| {
            b.iter(|| make_greedy(black_box(amount), black_box(&STANDARD_DENOMINATIONS)))
        });
        group.bench_with_input(BenchmarkId::new("minimal", amount), &amount, |b, &amount| {
            b.iter(|| make_minimal(black_box(amount), black_box(&STANDARD_DENOMINATIONS)))
        });
    }

    group.finish();
}

fn bench_non_canonical(c: &mut Criterion) {
    let mut group = c.benchmark_group("non_canonical");
    let denominations = [10u64, 6, 1];

    group.bench_function("greedy_12", |b| {
        b.iter(|| make_greedy(black_box(12), black_box(&denominations)))
    });
    group.bench_function("minimal_12", |b| {
        b.iter(|| make_minimal(black_box(12), black_box(&denominations)))
    });

    group.finish();
}

criterion_group!(benches, bench_standard_denominations, bench_non_canonical);
criterion_main!(benches);
