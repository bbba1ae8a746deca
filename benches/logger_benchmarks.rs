//! Criterion benchmarks for leveled_logger

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use leveled_logger::prelude::*;
use leveled_logger::info;
use tempfile::TempDir;

// ============================================================================
// Level Parsing Benchmarks
// ============================================================================

fn bench_level_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("level_parsing");
    group.throughput(Throughput::Elements(1));

    group.bench_function("recognized", |b| {
        b.iter(|| LogLevel::parse_lossy(black_box("WARN")));
    });

    group.bench_function("fallback", |b| {
        b.iter(|| LogLevel::parse_lossy(black_box("verbose")));
    });

    group.finish();
}

// ============================================================================
// File Sink Benchmarks
// ============================================================================

fn bench_file_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("file_logging");
    group.throughput(Throughput::Elements(1));

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let logger = FileAppender::new("info", "bench.log", temp_dir.path())
        .expect("Failed to create appender");

    group.bench_function("filtered_debug", |b| {
        b.iter(|| logger.debug(black_box(format_args!("Debug message"))));
    });

    group.bench_function("info_primary_only", |b| {
        b.iter(|| logger.info(format_args!("Info message {}", black_box(42))));
    });

    group.bench_function("error_with_mirror", |b| {
        b.iter(|| logger.error(format_args!("Error message {}", black_box(42))));
    });

    group.bench_function("macro_info", |b| {
        b.iter(|| info!(logger, "Macro message {}", black_box(7)));
    });

    group.finish();
}

fn bench_rotation(c: &mut Criterion) {
    let mut group = c.benchmark_group("rotation");
    group.throughput(Throughput::Elements(1));

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    // Every write past the first rotates
    let config = FileLoggerConfig::new().with_max_file_size(1);
    let logger = FileAppender::with_config("debug", "rotate.log", temp_dir.path(), config)
        .expect("Failed to create appender");

    group.bench_function("rotate_every_write", |b| {
        b.iter(|| logger.info(format_args!("rotating")));
    });

    group.finish();
}

criterion_group!(benches, bench_level_parsing, bench_file_logging, bench_rotation);
criterion_main!(benches);
