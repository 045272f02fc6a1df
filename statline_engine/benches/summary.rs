//! Benchmarks for computing and rendering a summary.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

use rand::{Rng, SeedableRng, rngs::SmallRng};
use statline_engine::{FieldSet, RenderSpec, Summary, collect_lines, render};

fn values(size: usize) -> Vec<f64> {
    let mut rng = SmallRng::seed_from_u64(19690716);
    (0..size).map(|_| rng.random_range(-1e6..1e6)).collect()
}

fn collect_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("collect");
    for size in &[1_000, 100_000, 1_000_000] {
        let lines: Vec<String> = values(*size).iter().map(|v| format!(" {v}\n")).collect();
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &lines, |b, lines| {
            b.iter(|| collect_lines(lines).expect("generated lines are numeric"));
        });
    }
    group.finish();
}

fn compute_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute");
    for size in &[1_000, 100_000, 1_000_000] {
        let values = values(*size);
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &values, |b, values| {
            b.iter(|| Summary::compute(values));
        });
    }
    group.finish();
}

fn render_full(c: &mut Criterion) {
    let summary = Summary::compute(&values(10_000));
    let spec = RenderSpec::new(FieldSet::Full.fields().to_vec());
    c.bench_function("render_full", |b| b.iter(|| render(&summary, &spec)));
}

criterion_group!(benches, collect_all, compute_all, render_full);
criterion_main!(benches);
