use std::hint::black_box;
use std::path::Path;

use criterion::{criterion_group, criterion_main, Criterion};
use daylight_compare::insights::{generate_insights, MarkdownFormatter};
use daylight_compare::{CityCatalog, ComparisonGenerator};

fn bench_comparison(c: &mut Criterion) {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/cities.json");
    let catalog = CityCatalog::load(&path).unwrap();
    let a = catalog.city("elephant-castle").unwrap();
    let b = catalog.city("garnizon").unwrap();
    let generator = ComparisonGenerator::default();

    c.bench_function("generate_insights", |bench| {
        bench.iter(|| generate_insights(black_box(a), black_box(b)))
    });

    c.bench_function("full_comparison", |bench| {
        bench.iter(|| generator.generate(black_box(a), black_box(b)))
    });

    let comparison = generator.generate(a, b);
    c.bench_function("markdown_report", |bench| {
        bench.iter(|| MarkdownFormatter::format(black_box(&comparison)))
    });
}

criterion_group!(benches, bench_comparison);
criterion_main!(benches);
