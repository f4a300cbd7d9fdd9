//! Filter, sort, and rank over a synthetic collection sized like the full dataset

use clima_scorer::{Country, CountryData, SortOption};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn synthetic(n: usize) -> CountryData {
    let countries = (0..n)
        .map(|i| {
            let id = format!("c{:03}", i);
            let name = format!("Country {:03}", (i * 37) % n);
            Country::new(&id, &name, ((i * 7919) % 12000) as f64 / 3.0, (i % 80) as f64 + 20.0)
        })
        .collect();
    CountryData::from_countries(countries).expect("synthetic data is valid")
}

fn bench_filter_sort(c: &mut Criterion) {
    let data = synthetic(200);

    c.bench_function("filter_sort_name", |b| {
        b.iter(|| data.filter_and_sort(black_box("country 1"), SortOption::NameAtoZ))
    });

    c.bench_function("filter_sort_justice", |b| {
        b.iter(|| data.filter_and_sort(black_box(""), SortOption::ClimaJusticeScoreHighToLow))
    });

    let target = &data.countries()[137];
    c.bench_function("rank_of", |b| b.iter(|| data.rank_of(black_box(target))));
}

criterion_group!(benches, bench_filter_sort);
criterion_main!(benches);
