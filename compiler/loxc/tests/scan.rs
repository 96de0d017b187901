// Test code uses unwrap/expect for clarity - panics provide good test failure messages
#![allow(clippy::unwrap_used, clippy::expect_used)]

//! End-to-end scanning tests.
//!
//! Exercises the public `lox_lexer` API together with the reporting frame
//! the CLI prints, without spawning the binary. Command functions that
//! terminate the process (`run_file`, `tokenize_file`, `repl`) are covered
//! down to their exit points by the pieces tested here: scanning via
//! `scan`, formatting via `reporting::format_error`.

use lox_lexer::{scan, Literal, ScanError, TokenKind};
use loxc::reporting::format_error;

#[test]
fn test_scan_hello_world() {
    let result = scan("print \"Hello, world!\";");

    assert!(!result.has_errors());
    let kinds: Vec<_> = result.tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Print,
            TokenKind::String,
            TokenKind::Semicolon,
            TokenKind::Eof,
        ]
    );
    assert_eq!(
        result.tokens[1].literal,
        Some(Literal::Str("Hello, world!"))
    );
}

#[test]
fn test_scan_statement_with_every_literal_shape() {
    let result = scan("var x = 1 + 2.5 - \"three\";");

    assert!(!result.has_errors());
    assert_eq!(result.tokens.len(), 10); // var x = 1 + 2.5 - "three" ; EOF
    assert_eq!(result.tokens[3].literal, Some(Literal::Number(1.0)));
    assert_eq!(result.tokens[5].literal, Some(Literal::Number(2.5)));
    assert_eq!(result.tokens[7].literal, Some(Literal::Str("three")));
}

#[test]
fn test_error_reporting_frame() {
    assert_eq!(
        format_error(&ScanError::unterminated_string(7)),
        "[line 7] Error: Unterminated string."
    );
    assert_eq!(
        format_error(&ScanError::unexpected_character(1)),
        "[line 1] Error: Unexpected character."
    );
    assert_eq!(
        format_error(&ScanError::unterminated_block_comment(30)),
        "[line 30] Error: Unterminated block comment."
    );
}

#[test]
fn test_all_errors_reported_in_source_order() {
    // The unexpected character is recovered from; the open string then
    // runs to the end of input and swallows everything after it.
    let source = "@\n\"open\nand /* never closed";
    let result = scan(source);

    let reported: Vec<_> = result.errors.iter().map(format_error).collect();
    assert_eq!(
        reported,
        vec![
            "[line 1] Error: Unexpected character.",
            "[line 3] Error: Unterminated string.",
        ]
    );
}

#[test]
fn test_unterminated_block_comment_reaches_the_report() {
    let result = scan("var ok = 1; /* open\n\n");

    assert!(result.has_errors());
    let reported: Vec<_> = result.errors.iter().map(format_error).collect();
    assert_eq!(reported, vec!["[line 3] Error: Unterminated block comment."]);
}

#[test]
fn test_tokens_survive_alongside_errors() {
    // The CLI dumps whatever tokens were produced even when exiting 65.
    let result = scan("var x = @ 1;");

    assert!(result.has_errors());
    let kinds: Vec<_> = result.tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Var,
            TokenKind::Identifier,
            TokenKind::Equal,
            TokenKind::Number,
            TokenKind::Semicolon,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_clean_scan_has_exit_zero_shape() {
    let result = scan("fun noop() {}\n");

    assert!(!result.has_errors());
    assert!(result.errors.is_empty());
}

#[test]
fn test_display_names_read_like_source() {
    let result = scan("var x = 1;");

    let names: Vec<_> = result
        .tokens
        .iter()
        .map(|t| t.kind.display_name())
        .collect();
    assert_eq!(
        names,
        vec!["var", "identifier", "=", "number", ";", "end of file"]
    );
}

#[test]
fn test_token_debug_lines_are_dump_ready() {
    // The tokenize command prints tokens with `{:?}`; make sure that form
    // stays stable and readable.
    let result = scan("print 1;");

    let dump: Vec<_> = result.tokens.iter().map(|t| format!("{t:?}")).collect();
    assert_eq!(
        dump,
        vec![
            "Print \"print\" @ line 1",
            "Number \"1\" (1.0) @ line 1",
            "Semicolon \";\" @ line 1",
            "Eof \"\" @ line 1",
        ]
    );
}

#[test]
fn test_multi_line_script_line_numbers() {
    let source = "var a = 1;\nvar b = 2;\n\nprint a + b;\n";
    let result = scan(source);

    assert!(!result.has_errors());
    let first_on_line_4 = result
        .tokens
        .iter()
        .find(|t| t.line == 4)
        .expect("line 4 has tokens");
    assert_eq!(first_on_line_4.kind, TokenKind::Print);
}
