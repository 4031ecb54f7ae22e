use bazi_rs::{BirthDate, Engine, Gender};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn analyze_bench(c: &mut Criterion) {
    let engine = Engine::default().with_current_year(2026);
    let date = BirthDate::new(1990, 6, 15, 8, 45);

    let mut group = c.benchmark_group("facade_analyze");
    group.sample_size(20);
    group.bench_function("analyze_solar", |b| {
        b.iter(|| engine.analyze_solar(black_box(&date), Gender::Female))
    });
    group.bench_function("matching_years_year_only", |b| {
        b.iter(|| engine.matching_years(black_box("庚午")))
    });
    group.finish();
}

fn date_parse_bench(c: &mut Criterion) {
    c.bench_function("birth_date_parse", |b| {
        b.iter(|| black_box("1990-06-15 08:45").parse::<BirthDate>())
    });
}

criterion_group!(benches, analyze_bench, date_parse_bench);
criterion_main!(benches);
