//! Benchmarks for preparation and cached search.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sffuzzy::{prepare, search, search_once, Options};

const CITIES: &[&str] = &[
    "Ōsaka;Japan",
    "São Paulo;Brazil",
    "Zürich;Switzerland",
    "San Francisco;United States",
    "Hong Kong;China",
    "Mumbai;India",
    "Agadez;Niger",
    "Palma;Spain",
    "Sucre;Bolivia",
    "Ibb;Yemen",
];

fn create_targets(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| format!("{} {}", CITIES[i % CITIES.len()], i))
        .collect()
}

fn bench_prepare(c: &mut Criterion) {
    let mut group = c.benchmark_group("prepare");

    for size in [100, 1000, 10000].iter() {
        let targets = create_targets(*size);
        group.bench_with_input(BenchmarkId::new("normalize", size), size, |b, _| {
            b.iter(|| prepare(black_box(&targets), black_box(&Options::new())))
        });
    }

    group.finish();
}

fn bench_cached_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("cached_search");
    let options = Options::new().with_limit(10);

    for size in [100, 1000, 10000].iter() {
        let prepared = prepare(&create_targets(*size), &options);
        group.bench_with_input(BenchmarkId::new("osakajapan", size), size, |b, _| {
            b.iter(|| search(black_box("osakajapan"), black_box(&prepared), black_box(&options)))
        });
        group.bench_with_input(BenchmarkId::new("san fransisco", size), size, |b, _| {
            b.iter(|| search(black_box("san fransisco"), black_box(&prepared), black_box(&options)))
        });
    }

    group.finish();
}

fn bench_search_once(c: &mut Criterion) {
    let targets = create_targets(1000);
    let options = Options::new().with_limit(10);

    c.bench_function("search_once_1000", |b| {
        b.iter(|| search_once(black_box("osakajapan"), black_box(&targets), black_box(&options)))
    });
}

criterion_group!(benches, bench_prepare, bench_cached_search, bench_search_once);
criterion_main!(benches);
