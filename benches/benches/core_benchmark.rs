//! Benchmarks for series generation, result extraction and formatting.
//!
//! Run with: `cargo bench --package finlens-bench`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use finlens_bench::{analysis_text, anchor, metrics_text, seeded_series};
use finlens_lib::extract::derive_result;
use finlens_lib::prelude::*;
use std::hint::black_box;

fn series_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("series");

    for &range in TimeRange::all() {
        let request = SeriesRequest::new("AAPL", range);
        group.bench_with_input(BenchmarkId::from_parameter(range), &request, |b, request| {
            let mut generator = SeriesGenerator::seeded(7);
            b.iter(|| generator.generate_at(black_box(request), anchor()).unwrap());
        });
    }

    group.finish();
}

fn extract_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract");

    for sections in [4, 64, 1024] {
        let analysis = analysis_text(sections);
        let metrics = metrics_text(sections);
        group.throughput(Throughput::Bytes((analysis.len() + metrics.len()) as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(sections),
            &(analysis, metrics),
            |b, (analysis, metrics)| b.iter(|| derive_result(black_box(analysis), black_box(metrics))),
        );
    }

    group.finish();
}

fn format_benchmark(c: &mut Criterion) {
    let series = seeded_series(TimeRange::OneDay);
    let mut group = c.benchmark_group("format");
    group.throughput(Throughput::Elements(series.len() as u64));

    group.bench_function("csv_candle", |b| {
        b.iter(|| {
            let mut out = Vec::with_capacity(8 * 1024);
            CsvFormatter::new()
                .write_series(black_box(&series), ChartKind::Candle, &mut out)
                .unwrap();
            out
        });
    });
    group.bench_function("json_line", |b| {
        b.iter(|| {
            let mut out = Vec::with_capacity(8 * 1024);
            JsonFormatter::new()
                .write_series(black_box(&series), ChartKind::Line, &mut out)
                .unwrap();
            out
        });
    });

    group.finish();
}

criterion_group!(benches, series_benchmark, extract_benchmark, format_benchmark);
criterion_main!(benches);
