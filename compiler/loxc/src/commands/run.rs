//! Scan a script and report what the scanner found.

use lox_lexer::scan;

use crate::reporting;

/// Scan `path`, printing nothing on success.
///
/// Exits 65 when the scan found errors, after reporting every one of them.
pub fn run_file(path: &str) {
    let source = super::read_file(path);
    let result = scan(&source);
    tracing::debug!(tokens = result.tokens.len(), "scanned '{path}'");

    if result.has_errors() {
        reporting::report_errors(&result.errors);
        std::process::exit(65);
    }
    // Scanning is the whole pipeline for now; a clean scan exits 0.
}
