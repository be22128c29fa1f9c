//! Benchmarks for the filter and aggregate passes.

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use engine::{Category, Dataset, PaymentMethod};
use pivot_engine::{aggregate, filter, FilterCriteria};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn dataset(count: usize) -> Dataset {
    let today = NaiveDate::from_ymd_opt(2024, 9, 30).unwrap();
    generator::generate_records(&mut StdRng::seed_from_u64(7), count, today)
}

fn aggregation_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate");

    for count in [1_000usize, 10_000, 100_000] {
        let data = dataset(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &data, |b, data| {
            b.iter(|| aggregate(black_box(data)))
        });
    }

    group.finish();
}

fn filter_then_aggregate(c: &mut Criterion) {
    let data = dataset(10_000);
    let mut group = c.benchmark_group("filter_then_aggregate");

    let everything = FilterCriteria::all_from(&data);
    group.bench_function("all_values", |b| {
        b.iter(|| aggregate(&filter(black_box(&data), black_box(&everything))))
    });

    let narrow = FilterCriteria::all_from(&data)
        .with_categories([Category::Bakery, Category::Beverages])
        .with_payment_methods([PaymentMethod::Cash]);
    group.bench_function("two_categories_cash", |b| {
        b.iter(|| aggregate(&filter(black_box(&data), black_box(&narrow))))
    });

    group.finish();
}

criterion_group!(benches, aggregation_scaling, filter_then_aggregate);
criterion_main!(benches);
