//! Standalone scanner profiling harness.
//!
//! Scans a generated ~50KB input repeatedly, suitable for perf/callgrind/flamegraph.
//!
//! Usage:
//!   `cargo build -p loxc --example profile_scanner --release`
//!   `valgrind --tool=callgrind target/release/examples/profile_scanner 50`
//!   `perf record -g target/release/examples/profile_scanner 200`
//!   `cargo flamegraph --example profile_scanner -- 200`

use std::hint::black_box;

fn generate_n_statements(n: usize) -> String {
    (0..n)
        .map(|i| format!("var value{i} = {i} + {i}.5; // statement {i}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[allow(
    clippy::cast_precision_loss,
    reason = "total bytes fits comfortably in f64 for throughput display"
)]
fn main() {
    let source = generate_n_statements(1200); // ~50KB
    let iterations: usize = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(100);

    eprintln!(
        "Scanning {} bytes x {} iterations ({:.1} MB total)",
        source.len(),
        iterations,
        (source.len() * iterations) as f64 / 1_000_000.0
    );

    for _ in 0..iterations {
        black_box(lox_lexer::scan(&source));
    }
}
