//! The scanner: one pass over the source, bytes in, tokens out.
//!
//! Dispatch is a single `match` on the current byte. Each arm hands off to
//! a handler that consumes one whole construct and either pushes a token,
//! records an error, or drops trivia. Two properties hold everywhere:
//!
//! - Maximal munch: each token is the longest match possible at its start
//!   position. `!=` is never `!` then `=`, and `123.foo` is the number
//!   `123` followed by `.` and `foo`.
//! - Progress: every pass through the driver loop consumes at least one
//!   byte, so scanning always terminates.
//!
//! Errors never abort the scan. A problem is recorded in the result and
//! scanning resumes at the next character, so one stray byte does not hide
//! the rest of the file.

use crate::cursor::Cursor;
use crate::keywords;
use crate::scan_error::ScanError;
use crate::token::{Token, TokenKind};

/// Everything a scan produces: the token stream plus any errors found
/// along the way.
///
/// `tokens` always ends with exactly one [`TokenKind::Eof`] marker, even
/// for empty or error-riddled input. `errors` is empty for clean input.
#[derive(Clone, Debug, PartialEq)]
pub struct ScanResult<'src> {
    pub tokens: Vec<Token<'src>>,
    pub errors: Vec<ScanError>,
}

impl ScanResult<'_> {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Scan `source` to completion.
///
/// This is the crate's entry point; the returned tokens borrow from
/// `source`.
pub fn scan(source: &str) -> ScanResult<'_> {
    Scanner::new(source).run()
}

pub(crate) struct Scanner<'src> {
    cursor: Cursor<'src>,
    /// 1-based, bumped on every newline consumed, including the ones
    /// inside strings and block comments.
    line: u32,
    tokens: Vec<Token<'src>>,
    errors: Vec<ScanError>,
}

impl<'src> Scanner<'src> {
    pub(crate) fn new(source: &'src str) -> Scanner<'src> {
        Scanner {
            cursor: Cursor::new(source),
            line: 1,
            // Rough average of one token per eight bytes of source.
            tokens: Vec::with_capacity(source.len() / 8 + 1),
            errors: Vec::new(),
        }
    }

    pub(crate) fn run(mut self) -> ScanResult<'src> {
        while !self.cursor.is_eof() {
            self.next_token();
        }
        self.tokens.push(Token::eof(self.line));
        ScanResult {
            tokens: self.tokens,
            errors: self.errors,
        }
    }

    /// Scan one construct starting at the current byte.
    fn next_token(&mut self) {
        let start = self.cursor.pos();
        match self.cursor.current() {
            // Trivia
            b' ' | b'\t' | b'\r' => self.cursor.eat_whitespace(),
            b'\n' => self.newline(),

            // Identifiers and reserved words
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => self.identifier(start),

            // Literals
            b'0'..=b'9' => self.number(start),
            b'"' => self.string(start),

            // Division, or a comment
            b'/' => self.slash_or_comment(start),

            // Single-character punctuation
            b'(' => self.single(start, TokenKind::LeftParen),
            b')' => self.single(start, TokenKind::RightParen),
            b'{' => self.single(start, TokenKind::LeftBrace),
            b'}' => self.single(start, TokenKind::RightBrace),
            b',' => self.single(start, TokenKind::Comma),
            b'.' => self.single(start, TokenKind::Dot),
            b'-' => self.single(start, TokenKind::Minus),
            b'+' => self.single(start, TokenKind::Plus),
            b';' => self.single(start, TokenKind::Semicolon),
            b'*' => self.single(start, TokenKind::Star),

            // One- or two-character operators
            b'!' => self.with_equal(start, TokenKind::Bang, TokenKind::BangEqual),
            b'=' => self.with_equal(start, TokenKind::Equal, TokenKind::EqualEqual),
            b'<' => self.with_equal(start, TokenKind::Less, TokenKind::LessEqual),
            b'>' => self.with_equal(start, TokenKind::Greater, TokenKind::GreaterEqual),

            // Nothing else can start a token. Note the driver loop only
            // runs while input remains, so byte 0 here is a real interior
            // NUL, not the end-of-input sentinel.
            _ => self.unexpected(),
        }
    }

    /// Push a token whose lexeme spans `start` to the current position.
    fn emit(&mut self, kind: TokenKind, start: usize) {
        let lexeme = self.cursor.slice(start, self.cursor.pos());
        self.tokens.push(Token::new(kind, lexeme, self.line));
    }

    // ─── Trivia ──────────────────────────────────────────────────────────

    #[inline]
    fn newline(&mut self) {
        self.line += 1;
        self.cursor.advance();
    }

    // ─── Punctuation & Operators ─────────────────────────────────────────

    fn single(&mut self, start: usize, kind: TokenKind) {
        self.cursor.advance();
        self.emit(kind, start);
    }

    /// Operator that pairs with a trailing `=` to form its two-character
    /// form. Maximal munch: the paired form wins whenever `=` follows.
    fn with_equal(&mut self, start: usize, solo: TokenKind, paired: TokenKind) {
        self.cursor.advance();
        if self.cursor.current() == b'=' {
            self.cursor.advance();
            self.emit(paired, start);
        } else {
            self.emit(solo, start);
        }
    }

    // ─── Identifiers & Numbers ───────────────────────────────────────────

    fn identifier(&mut self, start: usize) {
        self.cursor.advance();
        self.cursor.eat_while(is_ident_continue);
        let text = self.cursor.slice(start, self.cursor.pos());
        let kind = keywords::lookup(text).unwrap_or(TokenKind::Identifier);
        self.emit(kind, start);
    }

    fn number(&mut self, start: usize) {
        self.cursor.eat_while(|b| b.is_ascii_digit());
        // A fractional part needs a digit after the dot. `123.` is the
        // number 123 followed by a Dot token, never a trailing-dot number.
        if self.cursor.current() == b'.' && self.cursor.peek().is_ascii_digit() {
            self.cursor.advance();
            self.cursor.eat_while(|b| b.is_ascii_digit());
        }
        let text = self.cursor.slice(start, self.cursor.pos());
        // Digit runs with at most one interior dot always parse.
        let Ok(value) = text.parse::<f64>() else {
            unreachable!("number lexeme failed to parse: {text:?}")
        };
        self.tokens.push(Token::number(text, value, self.line));
    }

    // ─── Strings ─────────────────────────────────────────────────────────

    fn string(&mut self, start: usize) {
        // The token reports the line its opening quote sits on, even when
        // the literal spans lines.
        let open_line = self.line;
        self.cursor.advance();
        loop {
            match self.cursor.skip_to_string_delim() {
                b'"' => {
                    self.cursor.advance();
                    let end = self.cursor.pos();
                    let lexeme = self.cursor.slice(start, end);
                    let contents = self.cursor.slice(start + 1, end - 1);
                    self.tokens.push(Token::string(lexeme, contents, open_line));
                    return;
                }
                b'\n' => {
                    self.line += 1;
                    self.cursor.advance();
                }
                0 => {
                    // No token for the fragment; the error stands alone.
                    self.errors.push(ScanError::unterminated_string(self.line));
                    return;
                }
                _ => unreachable!("skip_to_string_delim returned a non-delimiter"),
            }
        }
    }

    // ─── Comments ────────────────────────────────────────────────────────

    fn slash_or_comment(&mut self, start: usize) {
        self.cursor.advance();
        match self.cursor.current() {
            b'/' => {
                // Line comment. Stop at the newline without consuming it
                // so the driver loop keeps the line count exact.
                self.cursor.advance();
                self.cursor.eat_until_newline_or_eof();
            }
            b'*' => {
                self.cursor.advance();
                self.block_comment();
            }
            _ => self.emit(TokenKind::Slash, start),
        }
    }

    /// Body of a `/* ... */` comment, with the opener already consumed.
    ///
    /// Block comments do not nest: the first `*/` closes the comment no
    /// matter how many `/*` appear inside it.
    fn block_comment(&mut self) {
        loop {
            match self.cursor.skip_to_block_comment_delim() {
                b'*' => {
                    self.cursor.advance();
                    if self.cursor.current() == b'/' {
                        self.cursor.advance();
                        return;
                    }
                }
                b'\n' => {
                    self.line += 1;
                    self.cursor.advance();
                }
                0 => {
                    self.errors
                        .push(ScanError::unterminated_block_comment(self.line));
                    return;
                }
                _ => unreachable!("skip_to_block_comment_delim returned a non-delimiter"),
            }
        }
    }

    // ─── Error Recovery ──────────────────────────────────────────────────

    /// Record the error and skip one whole character, multi-byte included,
    /// so scanning resumes cleanly and each bad character is reported once.
    fn unexpected(&mut self) {
        self.errors.push(ScanError::unexpected_character(self.line));
        self.cursor.advance_char();
    }
}

// ─── Identifier Byte Classification ──────────────────────────────────────

/// 256-entry table: true for bytes that may continue an identifier
/// (ASCII letters, digits, underscore).
static IS_IDENT_CONTINUE_TABLE: [bool; 256] = build_ident_continue_table();

const fn build_ident_continue_table() -> [bool; 256] {
    let mut table = [false; 256];
    let mut b = 0u8;
    loop {
        table[b as usize] = b.is_ascii_alphanumeric() || b == b'_';
        if b == u8::MAX {
            break;
        }
        b += 1;
    }
    table
}

#[inline]
fn is_ident_continue(b: u8) -> bool {
    IS_IDENT_CONTINUE_TABLE[b as usize]
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
mod tests {
    use super::*;
    use crate::token::Literal;
    use pretty_assertions::assert_eq;

    fn scan_kinds(source: &str) -> Vec<TokenKind> {
        scan(source).tokens.iter().map(|t| t.kind).collect()
    }

    /// Scan expecting no errors; returns the tokens with the Eof marker
    /// popped off.
    fn scan_clean(source: &str) -> Vec<Token<'_>> {
        let result = scan(source);
        assert!(
            result.errors.is_empty(),
            "unexpected scan errors: {:?}",
            result.errors
        );
        let mut tokens = result.tokens;
        let eof = tokens.pop().expect("token stream always ends with Eof");
        assert_eq!(eof.kind, TokenKind::Eof);
        tokens
    }

    // === Empty Input & Trivia ===

    #[test]
    fn empty_source_scans_to_lone_eof() {
        let result = scan("");
        assert_eq!(result.tokens, vec![Token::eof(1)]);
        assert_eq!(result.errors, vec![]);
    }

    #[test]
    fn whitespace_only_scans_to_lone_eof() {
        let result = scan("  \t\r\n  ");
        assert_eq!(result.tokens, vec![Token::eof(2)]);
        assert_eq!(result.errors, vec![]);
    }

    #[test]
    fn comment_only_scans_to_lone_eof() {
        let result = scan("// nothing to see here");
        assert_eq!(result.tokens, vec![Token::eof(1)]);
        assert_eq!(result.errors, vec![]);
    }

    #[test]
    fn block_comment_only_scans_to_lone_eof() {
        let result = scan("/* nothing to see here */");
        assert_eq!(result.tokens, vec![Token::eof(1)]);
        assert_eq!(result.errors, vec![]);
    }

    // === Punctuation ===

    #[test]
    fn single_character_punctuation() {
        assert_eq!(
            scan_kinds("(){};,.-+*"),
            vec![
                TokenKind::LeftParen,
                TokenKind::RightParen,
                TokenKind::LeftBrace,
                TokenKind::RightBrace,
                TokenKind::Semicolon,
                TokenKind::Comma,
                TokenKind::Dot,
                TokenKind::Minus,
                TokenKind::Plus,
                TokenKind::Star,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn slash_alone_is_division() {
        assert_eq!(
            scan_kinds("8 / 2"),
            vec![
                TokenKind::Number,
                TokenKind::Slash,
                TokenKind::Number,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn punctuation_lexemes_are_exact() {
        let tokens = scan_clean("(.;");
        assert_eq!(tokens[0].lexeme, "(");
        assert_eq!(tokens[1].lexeme, ".");
        assert_eq!(tokens[2].lexeme, ";");
    }

    // === Operators & Maximal Munch ===

    #[test]
    fn two_character_operators() {
        assert_eq!(
            scan_kinds("!= == <= >="),
            vec![
                TokenKind::BangEqual,
                TokenKind::EqualEqual,
                TokenKind::LessEqual,
                TokenKind::GreaterEqual,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn one_character_operators() {
        assert_eq!(
            scan_kinds("! = < >"),
            vec![
                TokenKind::Bang,
                TokenKind::Equal,
                TokenKind::Less,
                TokenKind::Greater,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn bang_equal_is_one_token() {
        let tokens = scan_clean("!=");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::BangEqual);
        assert_eq!(tokens[0].lexeme, "!=");
    }

    #[test]
    fn bang_equal_before_identifier() {
        // Never Bang then Equal.
        let tokens = scan_clean("!=size");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].kind, TokenKind::BangEqual);
        assert_eq!(tokens[1].kind, TokenKind::Identifier);
        assert_eq!(tokens[1].lexeme, "size");
    }

    #[test]
    fn equal_chain_munches_greedily() {
        // `===` is `==` then `=`, never `=` `==`.
        assert_eq!(
            scan_kinds("==="),
            vec![TokenKind::EqualEqual, TokenKind::Equal, TokenKind::Eof]
        );
    }

    #[test]
    fn less_equal_then_greater() {
        assert_eq!(
            scan_kinds("<=>"),
            vec![TokenKind::LessEqual, TokenKind::Greater, TokenKind::Eof]
        );
    }

    #[test]
    fn bang_before_identifier() {
        assert_eq!(
            scan_kinds("!ready"),
            vec![TokenKind::Bang, TokenKind::Identifier, TokenKind::Eof]
        );
    }

    // === Line Comments ===

    #[test]
    fn line_comment_runs_to_end_of_line() {
        let tokens = scan_clean("one // two three\nfour");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].lexeme, "one");
        assert_eq!(tokens[0].line, 1);
        assert_eq!(tokens[1].lexeme, "four");
        assert_eq!(tokens[1].line, 2);
    }

    #[test]
    fn line_comment_at_end_of_input() {
        assert_eq!(
            scan_kinds("x // no trailing newline"),
            vec![TokenKind::Identifier, TokenKind::Eof]
        );
    }

    #[test]
    fn comment_markers_inside_line_comment_are_inert() {
        assert_eq!(
            scan_kinds("// /* \" 123 !="),
            vec![TokenKind::Eof]
        );
    }

    // === Block Comments ===

    #[test]
    fn block_comment_is_trivia() {
        let tokens = scan_clean("a /* b */ c");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].lexeme, "a");
        assert_eq!(tokens[1].lexeme, "c");
    }

    #[test]
    fn block_comment_spans_lines_and_counts_them() {
        let tokens = scan_clean("a /* x\ny */ b");
        assert_eq!(tokens[0].line, 1);
        assert_eq!(tokens[1].line, 2);
    }

    #[test]
    fn block_comments_do_not_nest() {
        // The first `*/` closes the comment; the trailing ` */` scans as
        // a Star and a Slash.
        let result = scan("/* /* */ */");
        assert_eq!(result.errors, vec![]);
        assert_eq!(
            result.tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
            vec![TokenKind::Star, TokenKind::Slash, TokenKind::Eof]
        );
    }

    #[test]
    fn stars_inside_block_comment_are_fine() {
        assert_eq!(scan_kinds("/* ** * ** */"), vec![TokenKind::Eof]);
    }

    #[test]
    fn star_slash_outside_comment_is_two_tokens() {
        assert_eq!(
            scan_kinds("*/"),
            vec![TokenKind::Star, TokenKind::Slash, TokenKind::Eof]
        );
    }

    #[test]
    fn unterminated_block_comment_signals_error() {
        let result = scan("/* runs off the end");
        assert_eq!(result.tokens, vec![Token::eof(1)]);
        assert_eq!(result.errors, vec![ScanError::unterminated_block_comment(1)]);
    }

    #[test]
    fn unterminated_block_comment_reports_final_line() {
        let result = scan("/* one\ntwo\nthree");
        assert_eq!(result.errors, vec![ScanError::unterminated_block_comment(3)]);
    }

    #[test]
    fn lone_star_at_end_of_block_comment_body() {
        // `*` followed by end of input inside a comment is unterminated.
        let result = scan("/* body *");
        assert_eq!(result.errors, vec![ScanError::unterminated_block_comment(1)]);
    }

    // === Strings ===

    #[test]
    fn simple_string() {
        let tokens = scan_clean("\"hello\"");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::String);
        assert_eq!(tokens[0].lexeme, "\"hello\"");
        assert_eq!(tokens[0].literal, Some(Literal::Str("hello")));
    }

    #[test]
    fn empty_string() {
        let tokens = scan_clean("\"\"");
        assert_eq!(tokens[0].lexeme, "\"\"");
        assert_eq!(tokens[0].literal, Some(Literal::Str("")));
    }

    #[test]
    fn string_contents_take_everything_but_the_quotes() {
        let tokens = scan_clean("\"a + b // not a comment /* nor this */\"");
        assert_eq!(
            tokens[0].literal,
            Some(Literal::Str("a + b // not a comment /* nor this */"))
        );
    }

    #[test]
    fn backslashes_are_ordinary_string_characters() {
        // No escape sequences: the two source characters `\` and `n` stay
        // exactly as written.
        let tokens = scan_clean(r#""a\nb""#);
        assert_eq!(tokens[0].literal, Some(Literal::Str(r"a\nb")));
    }

    #[test]
    fn string_spans_lines() {
        let tokens = scan_clean("\"one\ntwo\" x");
        assert_eq!(tokens[0].kind, TokenKind::String);
        assert_eq!(tokens[0].literal, Some(Literal::Str("one\ntwo")));
        // The string reports its opening line; the next token sits on the
        // line after the embedded newline.
        assert_eq!(tokens[0].line, 1);
        assert_eq!(tokens[1].line, 2);
    }

    #[test]
    fn adjacent_strings_are_separate_tokens() {
        let tokens = scan_clean("\"a\"\"b\"");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].literal, Some(Literal::Str("a")));
        assert_eq!(tokens[1].literal, Some(Literal::Str("b")));
    }

    #[test]
    fn unterminated_string_signals_error_without_token() {
        let result = scan("\"abc");
        assert_eq!(result.tokens, vec![Token::eof(1)]);
        assert_eq!(result.errors, vec![ScanError::unterminated_string(1)]);
    }

    #[test]
    fn unterminated_string_reports_final_line() {
        let result = scan("\"one\ntwo");
        assert_eq!(result.errors, vec![ScanError::unterminated_string(2)]);
    }

    #[test]
    fn tokens_before_unterminated_string_survive() {
        let result = scan("var x = \"oops");
        assert_eq!(
            result.tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
            vec![
                TokenKind::Var,
                TokenKind::Identifier,
                TokenKind::Equal,
                TokenKind::Eof,
            ]
        );
        assert_eq!(result.errors, vec![ScanError::unterminated_string(1)]);
    }

    // === Numbers ===

    #[test]
    fn integer_literal() {
        let tokens = scan_clean("123");
        assert_eq!(tokens[0].kind, TokenKind::Number);
        assert_eq!(tokens[0].lexeme, "123");
        assert_eq!(tokens[0].literal, Some(Literal::Number(123.0)));
    }

    #[test]
    fn decimal_literal() {
        let tokens = scan_clean("3.14");
        assert_eq!(tokens[0].lexeme, "3.14");
        assert_eq!(tokens[0].literal, Some(Literal::Number(3.14)));
    }

    #[test]
    fn trailing_dot_is_not_part_of_the_number() {
        let tokens = scan_clean("123.");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].kind, TokenKind::Number);
        assert_eq!(tokens[0].lexeme, "123");
        assert_eq!(tokens[1].kind, TokenKind::Dot);
    }

    #[test]
    fn leading_dot_is_not_part_of_the_number() {
        let tokens = scan_clean(".5");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].kind, TokenKind::Dot);
        assert_eq!(tokens[1].kind, TokenKind::Number);
        assert_eq!(tokens[1].lexeme, "5");
    }

    #[test]
    fn number_then_method_shaped_access() {
        let tokens = scan_clean("123.foo");
        assert_eq!(
            tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
            vec![TokenKind::Number, TokenKind::Dot, TokenKind::Identifier]
        );
        assert_eq!(tokens[0].lexeme, "123");
        assert_eq!(tokens[2].lexeme, "foo");
    }

    #[test]
    fn leading_zeros_keep_their_lexeme() {
        let tokens = scan_clean("007");
        assert_eq!(tokens[0].lexeme, "007");
        assert_eq!(tokens[0].literal, Some(Literal::Number(7.0)));
    }

    #[test]
    fn minus_before_number_is_its_own_token() {
        // No signed literals; `-` is always an operator.
        assert_eq!(
            scan_kinds("-123"),
            vec![TokenKind::Minus, TokenKind::Number, TokenKind::Eof]
        );
    }

    #[test]
    fn second_dot_ends_the_number() {
        assert_eq!(
            scan_kinds("1.2.3"),
            vec![
                TokenKind::Number,
                TokenKind::Dot,
                TokenKind::Number,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn very_large_number_still_parses() {
        let tokens = scan_clean("10000000000000000000000");
        assert_eq!(tokens[0].literal, Some(Literal::Number(1e22)));
    }

    // === Identifiers & Reserved Words ===

    #[test]
    fn all_reserved_words_resolve() {
        let source = "and class else false for fun if nil or print return super this true var while";
        let expected = [
            TokenKind::And,
            TokenKind::Class,
            TokenKind::Else,
            TokenKind::False,
            TokenKind::For,
            TokenKind::Fun,
            TokenKind::If,
            TokenKind::Nil,
            TokenKind::Or,
            TokenKind::Print,
            TokenKind::Return,
            TokenKind::Super,
            TokenKind::This,
            TokenKind::True,
            TokenKind::Var,
            TokenKind::While,
        ];
        let tokens = scan_clean(source);
        assert_eq!(tokens.len(), expected.len());
        for (tok, kind) in tokens.iter().zip(expected) {
            assert_eq!(tok.kind, kind, "wrong kind for {:?}", tok.lexeme);
        }
    }

    #[test]
    fn reserved_word_prefix_is_an_identifier() {
        let tokens = scan_clean("classroom");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Identifier);
        assert_eq!(tokens[0].lexeme, "classroom");
    }

    #[test]
    fn reserved_words_are_case_sensitive() {
        assert_eq!(
            scan_kinds("Class CLASS clasS"),
            vec![
                TokenKind::Identifier,
                TokenKind::Identifier,
                TokenKind::Identifier,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn underscores_make_identifiers() {
        let tokens = scan_clean("_ _x __ x_1");
        assert_eq!(tokens.len(), 4);
        for tok in &tokens {
            assert_eq!(tok.kind, TokenKind::Identifier);
        }
        assert_eq!(tokens[0].lexeme, "_");
        assert_eq!(tokens[3].lexeme, "x_1");
    }

    #[test]
    fn digits_cannot_start_an_identifier() {
        // `1abc` is the number 1 followed by the identifier `abc`.
        let tokens = scan_clean("1abc");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].kind, TokenKind::Number);
        assert_eq!(tokens[0].lexeme, "1");
        assert_eq!(tokens[1].kind, TokenKind::Identifier);
        assert_eq!(tokens[1].lexeme, "abc");
    }

    #[test]
    fn digits_may_continue_an_identifier() {
        let tokens = scan_clean("abc123");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].lexeme, "abc123");
    }

    #[test]
    fn identifiers_have_no_literal_payload() {
        let tokens = scan_clean("foo");
        assert_eq!(tokens[0].literal, None);
    }

    // === Error Recovery ===

    #[test]
    fn unexpected_character_is_reported_and_skipped() {
        let result = scan("@");
        assert_eq!(result.tokens, vec![Token::eof(1)]);
        assert_eq!(result.errors, vec![ScanError::unexpected_character(1)]);
    }

    #[test]
    fn scanning_continues_after_unexpected_character() {
        let result = scan("@foo");
        assert_eq!(result.errors, vec![ScanError::unexpected_character(1)]);
        assert_eq!(
            result.tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
            vec![TokenKind::Identifier, TokenKind::Eof]
        );
    }

    #[test]
    fn each_bad_character_gets_its_own_error() {
        let result = scan("@#^");
        assert_eq!(
            result.errors,
            vec![
                ScanError::unexpected_character(1),
                ScanError::unexpected_character(1),
                ScanError::unexpected_character(1),
            ]
        );
    }

    #[test]
    fn multibyte_character_is_one_error_not_several() {
        // Two-byte scalar: one error, not one per byte.
        let result = scan("§");
        assert_eq!(result.errors.len(), 1);

        // Four-byte scalar likewise.
        let result = scan("🎉");
        assert_eq!(result.errors.len(), 1);
    }

    #[test]
    fn non_ascii_letter_splits_an_identifier() {
        let result = scan("héllo");
        assert_eq!(result.errors, vec![ScanError::unexpected_character(1)]);
        let lexemes: Vec<_> = result
            .tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Identifier)
            .map(|t| t.lexeme)
            .collect();
        assert_eq!(lexemes, vec!["h", "llo"]);
    }

    #[test]
    fn interior_nul_is_unexpected_not_eof() {
        let result = scan("a\u{0}b");
        assert_eq!(result.errors, vec![ScanError::unexpected_character(1)]);
        assert_eq!(
            result.tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
            vec![TokenKind::Identifier, TokenKind::Identifier, TokenKind::Eof]
        );
    }

    #[test]
    fn nul_inside_string_is_content() {
        let result = scan("\"a\u{0}b\"");
        assert_eq!(result.errors, vec![]);
        assert_eq!(
            result.tokens[0].literal,
            Some(Literal::Str("a\u{0}b"))
        );
    }

    #[test]
    fn errors_and_tokens_accumulate_together() {
        let result = scan("var @ x = $ 1");
        assert_eq!(
            result.errors,
            vec![
                ScanError::unexpected_character(1),
                ScanError::unexpected_character(1),
            ]
        );
        assert_eq!(
            result.tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
            vec![
                TokenKind::Var,
                TokenKind::Identifier,
                TokenKind::Equal,
                TokenKind::Number,
                TokenKind::Eof,
            ]
        );
    }

    // === Line Tracking ===

    #[test]
    fn lines_start_at_one() {
        let tokens = scan_clean("x");
        assert_eq!(tokens[0].line, 1);
    }

    #[test]
    fn newlines_advance_the_line() {
        let tokens = scan_clean("a\nb\nc");
        assert_eq!(tokens[0].line, 1);
        assert_eq!(tokens[1].line, 2);
        assert_eq!(tokens[2].line, 3);
    }

    #[test]
    fn crlf_counts_as_one_line_break() {
        let tokens = scan_clean("a\r\nb");
        assert_eq!(tokens[0].line, 1);
        assert_eq!(tokens[1].line, 2);
    }

    #[test]
    fn carriage_return_alone_is_not_a_line_break() {
        let tokens = scan_clean("a\rb");
        assert_eq!(tokens[0].line, 1);
        assert_eq!(tokens[1].line, 1);
    }

    #[test]
    fn eof_sits_on_the_final_line() {
        let result = scan("a\n\n");
        let eof = result.tokens.last().expect("eof always present");
        assert_eq!(eof.line, 3);
    }

    #[test]
    fn blank_lines_still_count() {
        let tokens = scan_clean("a\n\n\nb");
        assert_eq!(tokens[1].line, 4);
    }

    #[test]
    fn error_lines_track_the_scan_position() {
        let result = scan("@\n@");
        assert_eq!(
            result.errors,
            vec![
                ScanError::unexpected_character(1),
                ScanError::unexpected_character(2),
            ]
        );
    }

    // === Results ===

    #[test]
    fn has_errors_reflects_the_error_list() {
        assert!(!scan("var x = 1;").has_errors());
        assert!(scan("var x = @;").has_errors());
    }

    // === Full Programs ===

    #[test]
    fn fibonacci_program_scans_exactly() {
        let source = "\
fun fib(n) {
    if (n <= 1) return n;
    return fib(n - 2) + fib(n - 1);
}

var before = clock();
print fib(10) == 55;
";
        let result = scan(source);
        assert_eq!(result.errors, vec![]);
        assert_eq!(
            result.tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
            vec![
                // fun fib(n) {
                TokenKind::Fun,
                TokenKind::Identifier,
                TokenKind::LeftParen,
                TokenKind::Identifier,
                TokenKind::RightParen,
                TokenKind::LeftBrace,
                // if (n <= 1) return n;
                TokenKind::If,
                TokenKind::LeftParen,
                TokenKind::Identifier,
                TokenKind::LessEqual,
                TokenKind::Number,
                TokenKind::RightParen,
                TokenKind::Return,
                TokenKind::Identifier,
                TokenKind::Semicolon,
                // return fib(n - 2) + fib(n - 1);
                TokenKind::Return,
                TokenKind::Identifier,
                TokenKind::LeftParen,
                TokenKind::Identifier,
                TokenKind::Minus,
                TokenKind::Number,
                TokenKind::RightParen,
                TokenKind::Plus,
                TokenKind::Identifier,
                TokenKind::LeftParen,
                TokenKind::Identifier,
                TokenKind::Minus,
                TokenKind::Number,
                TokenKind::RightParen,
                TokenKind::Semicolon,
                // }
                TokenKind::RightBrace,
                // var before = clock();
                TokenKind::Var,
                TokenKind::Identifier,
                TokenKind::Equal,
                TokenKind::Identifier,
                TokenKind::LeftParen,
                TokenKind::RightParen,
                TokenKind::Semicolon,
                // print fib(10) == 55;
                TokenKind::Print,
                TokenKind::Identifier,
                TokenKind::LeftParen,
                TokenKind::Number,
                TokenKind::RightParen,
                TokenKind::EqualEqual,
                TokenKind::Number,
                TokenKind::Semicolon,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn class_declaration_scans_exactly() {
        let tokens = scan_clean("class Breakfast < Meal { serve() { print this.name; } }");
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Class,
                TokenKind::Identifier,
                TokenKind::Less,
                TokenKind::Identifier,
                TokenKind::LeftBrace,
                TokenKind::Identifier,
                TokenKind::LeftParen,
                TokenKind::RightParen,
                TokenKind::LeftBrace,
                TokenKind::Print,
                TokenKind::This,
                TokenKind::Dot,
                TokenKind::Identifier,
                TokenKind::Semicolon,
                TokenKind::RightBrace,
                TokenKind::RightBrace,
            ]
        );
    }

    // === Properties ===

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn every_scan_ends_with_exactly_one_eof(source in ".*") {
                let result = scan(&source);
                let eof_count = result
                    .tokens
                    .iter()
                    .filter(|t| t.kind == TokenKind::Eof)
                    .count();
                prop_assert_eq!(eof_count, 1);
                let last = &result.tokens[result.tokens.len() - 1];
                prop_assert_eq!(last.kind, TokenKind::Eof);
                prop_assert_eq!(last.lexeme, "");
            }

            #[test]
            fn final_line_counts_every_newline(source in ".*") {
                let result = scan(&source);
                let newlines = source.bytes().filter(|&b| b == b'\n').count();
                let last = &result.tokens[result.tokens.len() - 1];
                prop_assert_eq!(last.line as usize, newlines + 1);
            }

            #[test]
            fn token_lines_never_decrease(source in ".*") {
                let tokens = scan(&source).tokens;
                for pair in tokens.windows(2) {
                    prop_assert!(pair[0].line <= pair[1].line);
                }
            }

            #[test]
            fn error_lines_never_decrease(source in ".*") {
                let errors = scan(&source).errors;
                for pair in errors.windows(2) {
                    prop_assert!(pair[0].line <= pair[1].line);
                }
            }

            #[test]
            fn lexemes_appear_in_source_order(source in ".*") {
                let result = scan(&source);
                let mut rest_offset = 0;
                for tok in &result.tokens {
                    if tok.kind == TokenKind::Eof {
                        continue;
                    }
                    let rel = source[rest_offset..].find(tok.lexeme);
                    prop_assert!(
                        rel.is_some(),
                        "lexeme {:?} not found after byte {}",
                        tok.lexeme,
                        rest_offset
                    );
                    rest_offset += rel.unwrap_or(0) + tok.lexeme.len();
                }
            }

            #[test]
            fn only_eof_has_an_empty_lexeme(source in ".*") {
                for tok in scan(&source).tokens {
                    if tok.kind != TokenKind::Eof {
                        prop_assert!(!tok.lexeme.is_empty());
                    }
                }
            }

            #[test]
            fn literal_payload_matches_kind(source in ".*") {
                for tok in scan(&source).tokens {
                    match tok.kind {
                        TokenKind::Number => {
                            prop_assert!(matches!(tok.literal, Some(Literal::Number(_))));
                        }
                        TokenKind::String => {
                            prop_assert!(matches!(tok.literal, Some(Literal::Str(_))));
                        }
                        _ => prop_assert_eq!(tok.literal, None),
                    }
                }
            }

            #[test]
            fn plain_alphanumeric_input_never_errors(source in "[a-zA-Z0-9 ]*") {
                prop_assert!(!scan(&source).has_errors());
            }
        }
    }
}
