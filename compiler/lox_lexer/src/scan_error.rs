//! Scan errors.
//!
//! Errors are accumulated, not thrown: the scanner records each problem and
//! keeps going, so one bad character does not hide the rest of the file.
//! Every error carries the 1-based line where the problem was detected.
//!
//! The message text is part of the crate's contract. Downstream tooling and
//! the test suites match on these exact strings, so changing them is a
//! breaking change.

use std::fmt;

/// What went wrong.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScanErrorKind {
    /// A character that cannot start any token.
    UnexpectedCharacter,
    /// A string literal that ran into the end of input before its closing `"`.
    UnterminatedString,
    /// A `/*` block comment that ran into the end of input before `*/`.
    UnterminatedBlockComment,
}

/// A single non-fatal scan error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ScanError {
    /// 1-based line where the problem was detected.
    pub line: u32,
    pub kind: ScanErrorKind,
}

impl ScanError {
    /// A character that cannot start any token.
    #[cold]
    pub fn unexpected_character(line: u32) -> Self {
        ScanError {
            line,
            kind: ScanErrorKind::UnexpectedCharacter,
        }
    }

    /// Input ended inside a string literal.
    #[cold]
    pub fn unterminated_string(line: u32) -> Self {
        ScanError {
            line,
            kind: ScanErrorKind::UnterminatedString,
        }
    }

    /// Input ended inside a block comment.
    #[cold]
    pub fn unterminated_block_comment(line: u32) -> Self {
        ScanError {
            line,
            kind: ScanErrorKind::UnterminatedBlockComment,
        }
    }

    /// The canonical message for this error.
    pub fn message(&self) -> &'static str {
        match self.kind {
            ScanErrorKind::UnexpectedCharacter => "Unexpected character.",
            ScanErrorKind::UnterminatedString => "Unterminated string.",
            ScanErrorKind::UnterminatedBlockComment => "Unterminated block comment.",
        }
    }
}

/// Displays the message only; callers prepend the line themselves in
/// whatever frame their output wants.
impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for ScanError {}

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
    fn factories_set_line_and_kind() {
        let err = ScanError::unexpected_character(3);
        assert_eq!(err.line, 3);
        assert_eq!(err.kind, ScanErrorKind::UnexpectedCharacter);

        let err = ScanError::unterminated_string(10);
        assert_eq!(err.line, 10);
        assert_eq!(err.kind, ScanErrorKind::UnterminatedString);

        let err = ScanError::unterminated_block_comment(1);
        assert_eq!(err.line, 1);
        assert_eq!(err.kind, ScanErrorKind::UnterminatedBlockComment);
    }

    #[test]
    fn messages_are_verbatim() {
        assert_eq!(
            ScanError::unexpected_character(1).message(),
            "Unexpected character."
        );
        assert_eq!(
            ScanError::unterminated_string(1).message(),
            "Unterminated string."
        );
        assert_eq!(
            ScanError::unterminated_block_comment(1).message(),
            "Unterminated block comment."
        );
    }

    #[test]
    fn display_is_the_message_alone() {
        let err = ScanError::unterminated_string(42);
        assert_eq!(err.to_string(), "Unterminated string.");
    }

    #[test]
    fn errors_with_same_line_and_kind_are_equal() {
        assert_eq!(
            ScanError::unexpected_character(2),
            ScanError::unexpected_character(2)
        );
        assert_ne!(
            ScanError::unexpected_character(2),
            ScanError::unexpected_character(3)
        );
        assert_ne!(
            ScanError::unexpected_character(2),
            ScanError::unterminated_string(2)
        );
    }
}
