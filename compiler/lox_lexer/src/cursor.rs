//! Byte-level cursor over source text.
//!
//! The scanner walks bytes, not chars: every byte that can start or end a
//! token is ASCII, so multi-byte UTF-8 sequences only ever show up inside
//! string literals, comments, or as unexpected characters. Reads past the
//! end of input return `0`, which doubles as the end-of-input sentinel
//! (a real interior NUL byte is told apart via [`Cursor::is_eof`]).
//!
//! Hot skip loops (line comments, string bodies, block comments) go through
//! `memchr` instead of a byte-at-a-time loop.

use memchr::{memchr, memchr2};

/// Cheap copyable view over the source with a scan position.
#[derive(Clone, Copy)]
pub(crate) struct Cursor<'src> {
    source: &'src str,
    pos: usize,
}

// Cursor is passed around by value inside the scanner; keep it small.
const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'src> Cursor<'src> {
    pub(crate) fn new(source: &'src str) -> Cursor<'src> {
        Cursor { source, pos: 0 }
    }

    /// Byte at the current position, `0` at or past the end of input.
    #[inline]
    pub(crate) fn current(&self) -> u8 {
        self.source.as_bytes().get(self.pos).copied().unwrap_or(0)
    }

    /// Byte one past the current position, `0` at or past the end of input.
    #[inline]
    pub(crate) fn peek(&self) -> u8 {
        self.source.as_bytes().get(self.pos + 1).copied().unwrap_or(0)
    }

    /// Current byte offset into the source.
    #[inline]
    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    #[inline]
    pub(crate) fn is_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Move one byte forward, saturating at the end of input.
    #[inline]
    pub(crate) fn advance(&mut self) {
        self.pos = (self.pos + 1).min(self.source.len());
    }

    /// Move past one full UTF-8 scalar starting at the current byte.
    ///
    /// Used for error recovery on unexpected characters, so a multi-byte
    /// character is skipped whole rather than producing one error per byte.
    #[inline]
    pub(crate) fn advance_char(&mut self) {
        let width = utf8_char_width(self.current());
        self.pos = (self.pos + width).min(self.source.len());
    }

    /// Borrow `source[start..end]`.
    ///
    /// Callers only pass offsets that sit on token boundaries, which are
    /// always ASCII and therefore always char boundaries.
    #[inline]
    pub(crate) fn slice(&self, start: usize, end: usize) -> &'src str {
        debug_assert!(start <= end && end <= self.source.len());
        &self.source[start..end]
    }

    /// Advance while `pred` accepts the current byte.
    ///
    /// The predicate must reject `0`, otherwise this would spin at the end
    /// of input.
    #[inline]
    pub(crate) fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        debug_assert!(!pred(0), "predicate must reject the end-of-input sentinel");
        while pred(self.current()) {
            self.advance();
        }
    }

    /// Eat a run of horizontal whitespace (space, tab, carriage return).
    ///
    /// Newlines are left alone so the caller can count them.
    #[inline]
    pub(crate) fn eat_whitespace(&mut self) {
        self.eat_while(|b| matches!(b, b' ' | b'\t' | b'\r'));
    }

    /// Skip forward to the next newline, or to the end of input.
    ///
    /// Stops *at* the newline without consuming it.
    pub(crate) fn eat_until_newline_or_eof(&mut self) {
        let haystack = &self.source.as_bytes()[self.pos..];
        match memchr(b'\n', haystack) {
            Some(offset) => self.pos += offset,
            None => self.pos = self.source.len(),
        }
    }

    /// Skip forward to the next `"` or newline and return the byte found,
    /// or `0` if the input ends first. The cursor stops *at* the delimiter.
    ///
    /// Newlines are delimiters so the caller can keep its line count exact
    /// inside multi-line strings.
    pub(crate) fn skip_to_string_delim(&mut self) -> u8 {
        let haystack = &self.source.as_bytes()[self.pos..];
        match memchr2(b'"', b'\n', haystack) {
            Some(offset) => {
                self.pos += offset;
                haystack[offset]
            }
            None => {
                self.pos = self.source.len();
                0
            }
        }
    }

    /// Skip forward to the next `*` or newline and return the byte found,
    /// or `0` if the input ends first. The cursor stops *at* the delimiter.
    ///
    /// `*` is where a block comment might close; newlines are delimiters so
    /// the caller can keep its line count exact inside multi-line comments.
    pub(crate) fn skip_to_block_comment_delim(&mut self) -> u8 {
        let haystack = &self.source.as_bytes()[self.pos..];
        match memchr2(b'*', b'\n', haystack) {
            Some(offset) => {
                self.pos += offset;
                haystack[offset]
            }
            None => {
                self.pos = self.source.len();
                0
            }
        }
    }
}

/// Width in bytes of the UTF-8 scalar starting with `first`.
///
/// Continuation and invalid bytes report 1 so recovery always makes
/// progress; they cannot start a scalar in a valid `&str` anyway.
#[inline]
fn utf8_char_width(first: u8) -> usize {
    match first {
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        _ => 1,
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

    // === Construction ===

    #[test]
    fn new_cursor_starts_at_zero() {
        let cursor = Cursor::new("abc");
        assert_eq!(cursor.pos(), 0);
        assert_eq!(cursor.current(), b'a');
        assert!(!cursor.is_eof());
    }

    #[test]
    fn empty_source_is_immediately_eof() {
        let cursor = Cursor::new("");
        assert!(cursor.is_eof());
        assert_eq!(cursor.current(), 0);
        assert_eq!(cursor.peek(), 0);
    }

    // === Basic Navigation ===

    #[test]
    fn advance_moves_one_byte() {
        let mut cursor = Cursor::new("ab");
        cursor.advance();
        assert_eq!(cursor.pos(), 1);
        assert_eq!(cursor.current(), b'b');
    }

    #[test]
    fn advance_saturates_at_end() {
        let mut cursor = Cursor::new("a");
        cursor.advance();
        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.pos(), 1);
        assert!(cursor.is_eof());
        assert_eq!(cursor.current(), 0);
    }

    // === Lookahead ===

    #[test]
    fn peek_sees_one_byte_ahead() {
        let cursor = Cursor::new("ab");
        assert_eq!(cursor.current(), b'a');
        assert_eq!(cursor.peek(), b'b');
    }

    #[test]
    fn peek_past_end_is_sentinel() {
        let cursor = Cursor::new("a");
        assert_eq!(cursor.peek(), 0);
    }

    // === Slicing ===

    #[test]
    fn slice_borrows_source_range() {
        let cursor = Cursor::new("hello world");
        assert_eq!(cursor.slice(0, 5), "hello");
        assert_eq!(cursor.slice(6, 11), "world");
    }

    #[test]
    fn slice_can_be_empty() {
        let cursor = Cursor::new("abc");
        assert_eq!(cursor.slice(1, 1), "");
    }

    // === eat_while ===

    #[test]
    fn eat_while_consumes_matching_run() {
        let mut cursor = Cursor::new("aaab");
        cursor.eat_while(|b| b == b'a');
        assert_eq!(cursor.pos(), 3);
        assert_eq!(cursor.current(), b'b');
    }

    #[test]
    fn eat_while_stops_at_end_of_input() {
        let mut cursor = Cursor::new("123");
        cursor.eat_while(|b| b.is_ascii_digit());
        assert_eq!(cursor.pos(), 3);
        assert!(cursor.is_eof());
    }

    #[test]
    fn eat_while_may_consume_nothing() {
        let mut cursor = Cursor::new("abc");
        cursor.eat_while(|b| b.is_ascii_digit());
        assert_eq!(cursor.pos(), 0);
    }

    // === Whitespace ===

    #[test]
    fn eat_whitespace_consumes_spaces_tabs_crs() {
        let mut cursor = Cursor::new(" \t\r x");
        cursor.eat_whitespace();
        assert_eq!(cursor.current(), b'x');
    }

    #[test]
    fn eat_whitespace_stops_at_newline() {
        let mut cursor = Cursor::new("  \n  ");
        cursor.eat_whitespace();
        assert_eq!(cursor.current(), b'\n');
    }

    // === Line Comment Skipping ===

    #[test]
    fn eat_until_newline_stops_at_newline() {
        let mut cursor = Cursor::new("comment body\nnext");
        cursor.eat_until_newline_or_eof();
        assert_eq!(cursor.current(), b'\n');
        assert_eq!(cursor.pos(), 12);
    }

    #[test]
    fn eat_until_newline_runs_to_end_without_newline() {
        let mut cursor = Cursor::new("no newline here");
        cursor.eat_until_newline_or_eof();
        assert!(cursor.is_eof());
    }

    // === String Delimiters ===

    #[test]
    fn skip_to_string_delim_finds_quote() {
        let mut cursor = Cursor::new("abc\"rest");
        assert_eq!(cursor.skip_to_string_delim(), b'"');
        assert_eq!(cursor.pos(), 3);
    }

    #[test]
    fn skip_to_string_delim_stops_at_newline_first() {
        let mut cursor = Cursor::new("ab\ncd\"");
        assert_eq!(cursor.skip_to_string_delim(), b'\n');
        assert_eq!(cursor.pos(), 2);
    }

    #[test]
    fn skip_to_string_delim_returns_sentinel_at_end() {
        let mut cursor = Cursor::new("no delim");
        assert_eq!(cursor.skip_to_string_delim(), 0);
        assert!(cursor.is_eof());
    }

    #[test]
    fn skip_to_string_delim_passes_other_bytes() {
        let mut cursor = Cursor::new("a\tb\\c\"");
        assert_eq!(cursor.skip_to_string_delim(), b'"');
        assert_eq!(cursor.pos(), 5);
    }

    // === Block Comment Delimiters ===

    #[test]
    fn skip_to_block_comment_delim_finds_star() {
        let mut cursor = Cursor::new("body */");
        assert_eq!(cursor.skip_to_block_comment_delim(), b'*');
        assert_eq!(cursor.pos(), 5);
    }

    #[test]
    fn skip_to_block_comment_delim_stops_at_newline_first() {
        let mut cursor = Cursor::new("ab\n*/");
        assert_eq!(cursor.skip_to_block_comment_delim(), b'\n');
        assert_eq!(cursor.pos(), 2);
    }

    #[test]
    fn skip_to_block_comment_delim_returns_sentinel_at_end() {
        let mut cursor = Cursor::new("never closes");
        assert_eq!(cursor.skip_to_block_comment_delim(), 0);
        assert!(cursor.is_eof());
    }

    // === UTF-8 Recovery ===

    #[test]
    fn advance_char_over_ascii() {
        let mut cursor = Cursor::new("ab");
        cursor.advance_char();
        assert_eq!(cursor.pos(), 1);
    }

    #[test]
    fn advance_char_over_two_byte_scalar() {
        let mut cursor = Cursor::new("§x");
        cursor.advance_char();
        assert_eq!(cursor.current(), b'x');
    }

    #[test]
    fn advance_char_over_three_byte_scalar() {
        let mut cursor = Cursor::new("€x");
        cursor.advance_char();
        assert_eq!(cursor.current(), b'x');
    }

    #[test]
    fn advance_char_over_four_byte_scalar() {
        let mut cursor = Cursor::new("🎉x");
        cursor.advance_char();
        assert_eq!(cursor.current(), b'x');
    }

    // === Properties ===

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn advance_reaches_exactly_the_end(source in ".*") {
                let mut cursor = Cursor::new(&source);
                while !cursor.is_eof() {
                    cursor.advance();
                }
                prop_assert_eq!(cursor.pos(), source.len());
            }

            #[test]
            fn advance_char_always_makes_progress(source in ".+") {
                let mut cursor = Cursor::new(&source);
                while !cursor.is_eof() {
                    let before = cursor.pos();
                    cursor.advance_char();
                    prop_assert!(cursor.pos() > before);
                }
                prop_assert_eq!(cursor.pos(), source.len());
            }

            #[test]
            fn current_is_sentinel_only_at_eof_for_nul_free_input(
                source in "[^\u{0}]*",
            ) {
                let mut cursor = Cursor::new(&source);
                while !cursor.is_eof() {
                    prop_assert_ne!(cursor.current(), 0);
                    cursor.advance();
                }
                prop_assert_eq!(cursor.current(), 0);
            }
        }
    }
}
