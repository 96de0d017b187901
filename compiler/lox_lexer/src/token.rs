//! Token types produced by the scanner.
//!
//! A [`Token`] borrows its lexeme from the source text, so the token stream
//! is valid only as long as the scanned `&str` is alive. Number and string
//! tokens additionally carry a decoded [`Literal`] payload; every other kind
//! is fully described by its [`TokenKind`] and lexeme.

use std::fmt;

/// The closed set of token kinds.
///
/// Reserved words are resolved during scanning: an identifier-shaped lexeme
/// that exactly matches one of the sixteen reserved words gets its dedicated
/// variant, everything else becomes [`TokenKind::Identifier`].
///
/// # Invariant
///
/// Fits in one byte. The scanner copies kinds around freely and the token
/// stream stays compact because of it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TokenKind {
    // Single-character punctuation
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Comma,
    Dot,
    Minus,
    Plus,
    Semicolon,
    Star,
    Slash,

    // One- or two-character operators
    Bang,
    BangEqual,
    Equal,
    EqualEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,

    // Literals
    Identifier,
    String,
    Number,

    // Reserved words
    And,
    Class,
    Else,
    False,
    For,
    Fun,
    If,
    Nil,
    Or,
    Print,
    Return,
    Super,
    This,
    True,
    Var,
    While,

    // End of input
    Eof,
}

const _: () = assert!(std::mem::size_of::<TokenKind>() == 1);

impl TokenKind {
    /// Human-readable name for token dumps and diagnostics.
    ///
    /// Punctuation and operators display as their source text, literals as
    /// a lowercase category name, reserved words as themselves.
    pub fn display_name(self) -> &'static str {
        match self {
            TokenKind::LeftParen => "(",
            TokenKind::RightParen => ")",
            TokenKind::LeftBrace => "{",
            TokenKind::RightBrace => "}",
            TokenKind::Comma => ",",
            TokenKind::Dot => ".",
            TokenKind::Minus => "-",
            TokenKind::Plus => "+",
            TokenKind::Semicolon => ";",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Bang => "!",
            TokenKind::BangEqual => "!=",
            TokenKind::Equal => "=",
            TokenKind::EqualEqual => "==",
            TokenKind::Less => "<",
            TokenKind::LessEqual => "<=",
            TokenKind::Greater => ">",
            TokenKind::GreaterEqual => ">=",
            TokenKind::Identifier => "identifier",
            TokenKind::String => "string",
            TokenKind::Number => "number",
            TokenKind::And => "and",
            TokenKind::Class => "class",
            TokenKind::Else => "else",
            TokenKind::False => "false",
            TokenKind::For => "for",
            TokenKind::Fun => "fun",
            TokenKind::If => "if",
            TokenKind::Nil => "nil",
            TokenKind::Or => "or",
            TokenKind::Print => "print",
            TokenKind::Return => "return",
            TokenKind::Super => "super",
            TokenKind::This => "this",
            TokenKind::True => "true",
            TokenKind::Var => "var",
            TokenKind::While => "while",
            TokenKind::Eof => "end of file",
        }
    }
}

/// Decoded literal payload attached to number and string tokens.
#[derive(Clone, Copy, PartialEq)]
pub enum Literal<'src> {
    /// Value of a number literal, parsed as `f64`.
    Number(f64),
    /// Contents of a string literal with the surrounding quotes stripped.
    /// No escape processing; the text is exactly what sits between the quotes.
    Str(&'src str),
}

impl fmt::Debug for Literal<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Number(n) => write!(f, "{n:?}"),
            Literal::Str(s) => write!(f, "{s:?}"),
        }
    }
}

/// A single lexical token.
#[derive(Clone, Copy, PartialEq)]
pub struct Token<'src> {
    /// What kind of token this is.
    pub kind: TokenKind,
    /// Exact source text of the token. Empty for [`TokenKind::Eof`].
    pub lexeme: &'src str,
    /// Decoded payload for [`TokenKind::Number`] and [`TokenKind::String`],
    /// `None` for every other kind.
    pub literal: Option<Literal<'src>>,
    /// 1-based line on which the lexeme begins.
    pub line: u32,
}

impl<'src> Token<'src> {
    /// Token with no literal payload.
    #[inline]
    pub fn new(kind: TokenKind, lexeme: &'src str, line: u32) -> Self {
        Token {
            kind,
            lexeme,
            literal: None,
            line,
        }
    }

    /// Number token carrying its parsed value.
    #[inline]
    pub fn number(lexeme: &'src str, value: f64, line: u32) -> Self {
        Token {
            kind: TokenKind::Number,
            lexeme,
            literal: Some(Literal::Number(value)),
            line,
        }
    }

    /// String token carrying its quote-stripped contents.
    #[inline]
    pub fn string(lexeme: &'src str, contents: &'src str, line: u32) -> Self {
        Token {
            kind: TokenKind::String,
            lexeme,
            literal: Some(Literal::Str(contents)),
            line,
        }
    }

    /// The zero-width end-of-input marker.
    #[inline]
    pub fn eof(line: u32) -> Self {
        Token {
            kind: TokenKind::Eof,
            lexeme: "",
            literal: None,
            line,
        }
    }
}

/// Compact form for token dumps: `Number "3.14" (3.14) @ line 2`.
impl fmt::Debug for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.literal {
            Some(lit) => write!(
                f,
                "{:?} {:?} ({:?}) @ line {}",
                self.kind, self.lexeme, lit, self.line
            ),
            None => write!(f, "{:?} {:?} @ line {}", self.kind, self.lexeme, self.line),
        }
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

    // === Constructors ===

    #[test]
    fn new_has_no_literal() {
        let tok = Token::new(TokenKind::Plus, "+", 3);
        assert_eq!(tok.kind, TokenKind::Plus);
        assert_eq!(tok.lexeme, "+");
        assert_eq!(tok.literal, None);
        assert_eq!(tok.line, 3);
    }

    #[test]
    fn number_carries_value() {
        let tok = Token::number("3.14", 3.14, 1);
        assert_eq!(tok.kind, TokenKind::Number);
        assert_eq!(tok.lexeme, "3.14");
        assert_eq!(tok.literal, Some(Literal::Number(3.14)));
    }

    #[test]
    fn string_carries_stripped_contents() {
        let tok = Token::string("\"hi\"", "hi", 1);
        assert_eq!(tok.kind, TokenKind::String);
        assert_eq!(tok.lexeme, "\"hi\"");
        assert_eq!(tok.literal, Some(Literal::Str("hi")));
    }

    #[test]
    fn eof_is_zero_width() {
        let tok = Token::eof(7);
        assert_eq!(tok.kind, TokenKind::Eof);
        assert_eq!(tok.lexeme, "");
        assert_eq!(tok.literal, None);
        assert_eq!(tok.line, 7);
    }

    // === Debug Formatting ===

    #[test]
    fn debug_without_literal() {
        let tok = Token::new(TokenKind::LeftParen, "(", 1);
        assert_eq!(format!("{tok:?}"), "LeftParen \"(\" @ line 1");
    }

    #[test]
    fn debug_with_number_literal() {
        let tok = Token::number("42", 42.0, 2);
        assert_eq!(format!("{tok:?}"), "Number \"42\" (42.0) @ line 2");
    }

    #[test]
    fn debug_with_string_literal() {
        let tok = Token::string("\"hi\"", "hi", 1);
        assert_eq!(format!("{tok:?}"), "String \"\\\"hi\\\"\" (\"hi\") @ line 1");
    }

    #[test]
    fn debug_eof() {
        let tok = Token::eof(4);
        assert_eq!(format!("{tok:?}"), "Eof \"\" @ line 4");
    }

    // === Display Names ===

    #[test]
    fn punctuation_displays_as_source_text() {
        assert_eq!(TokenKind::LeftParen.display_name(), "(");
        assert_eq!(TokenKind::Semicolon.display_name(), ";");
        assert_eq!(TokenKind::BangEqual.display_name(), "!=");
        assert_eq!(TokenKind::GreaterEqual.display_name(), ">=");
    }

    #[test]
    fn literals_display_as_category() {
        assert_eq!(TokenKind::Identifier.display_name(), "identifier");
        assert_eq!(TokenKind::String.display_name(), "string");
        assert_eq!(TokenKind::Number.display_name(), "number");
    }

    #[test]
    fn keywords_display_as_themselves() {
        assert_eq!(TokenKind::Class.display_name(), "class");
        assert_eq!(TokenKind::Fun.display_name(), "fun");
        assert_eq!(TokenKind::While.display_name(), "while");
        assert_eq!(TokenKind::Eof.display_name(), "end of file");
    }
}
