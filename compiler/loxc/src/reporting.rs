//! Error reporting in the canonical `[line N] Error: message` frame.
//!
//! Every Lox tool prints lexical errors the same way, so the frame lives
//! in one place. The message text itself comes verbatim from
//! [`ScanError::message`](lox_lexer::ScanError::message); only the line
//! prefix is added here.

use lox_lexer::ScanError;

/// Format one error with its line prefix.
pub fn format_error(err: &ScanError) -> String {
    format!("[line {}] Error: {}", err.line, err)
}

/// Print each error to stderr, one per line, in source order.
pub fn report_errors(errors: &[ScanError]) {
    for err in errors {
        eprintln!("{}", format_error(err));
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn frame_matches_for_every_kind() {
        assert_eq!(
            format_error(&ScanError::unexpected_character(1)),
            "[line 1] Error: Unexpected character."
        );
        assert_eq!(
            format_error(&ScanError::unterminated_string(3)),
            "[line 3] Error: Unterminated string."
        );
        assert_eq!(
            format_error(&ScanError::unterminated_block_comment(12)),
            "[line 12] Error: Unterminated block comment."
        );
    }

    #[test]
    fn large_line_numbers_print_plainly() {
        assert_eq!(
            format_error(&ScanError::unexpected_character(4_000_000)),
            "[line 4000000] Error: Unexpected character."
        );
    }
}
