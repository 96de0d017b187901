//! Token dump for inspecting scanner output.

use lox_lexer::scan;

use crate::reporting;

/// Scan `path` and print every token, one per line.
///
/// Errors are reported after the dump; their partial token stream is still
/// printed in full. Exits 65 when the scan found errors.
pub fn tokenize_file(path: &str) {
    let source = super::read_file(path);
    let result = scan(&source);
    tracing::debug!(
        tokens = result.tokens.len(),
        errors = result.errors.len(),
        "scanned '{path}'"
    );

    println!("Tokens for '{}' ({} tokens):", path, result.tokens.len());
    for tok in &result.tokens {
        println!("  {tok:?}");
    }

    if result.has_errors() {
        reporting::report_errors(&result.errors);
        std::process::exit(65);
    }
}
