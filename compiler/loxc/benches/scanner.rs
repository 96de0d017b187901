//! Scanner throughput benchmarks.
//!
//! Measures end-to-end `scan` over generated programs of increasing size.
//! Run with `cargo bench -p loxc`.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lox_lexer::scan;

/// Program of `n` statements mixing identifiers, numbers, operators, and
/// line comments, about 40 bytes each.
fn generate_n_statements(n: usize) -> String {
    (0..n)
        .map(|i| format!("var value{i} = {i} + {i}.5; // statement {i}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn bench_scan_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("scanner/throughput");
    for n in [10, 100, 1_000, 5_000] {
        let source = generate_n_statements(n);
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &source, |b, src| {
            b.iter(|| {
                let result = scan(src);
                black_box(result);
            });
        });
    }
    group.finish();
}

fn bench_scan_string_heavy(c: &mut Criterion) {
    let mut group = c.benchmark_group("scanner/string_heavy");
    // Long string bodies exercise the memchr skip path.
    let source = (0..200)
        .map(|i| format!("var s{i} = \"{}\";", "x".repeat(256)))
        .collect::<Vec<_>>()
        .join("\n");
    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_with_input(
        BenchmarkId::from_parameter("200x256"),
        &source,
        |b, src| {
            b.iter(|| {
                let result = scan(src);
                black_box(result);
            });
        },
    );
    group.finish();
}

criterion_group!(benches, bench_scan_throughput, bench_scan_string_heavy);
criterion_main!(benches);
