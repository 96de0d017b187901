//! Reserved word resolution.
//!
//! Identifiers are the hottest token class, so the lookup is structured to
//! reject non-keywords as fast as possible:
//!
//! 1. Length gate: every reserved word is 2 to 6 bytes long.
//! 2. First byte gate: every reserved word starts with a lowercase letter.
//! 3. Length-bucketed match: only candidates of the right length are
//!    compared at all.
//!
//! The match is exact and case-sensitive; `Class` or `classroom` are plain
//! identifiers.

use crate::token::TokenKind;

/// Resolve an identifier-shaped lexeme to its reserved word, if it is one.
#[inline]
pub(crate) fn lookup(text: &str) -> Option<TokenKind> {
    let bytes = text.as_bytes();
    let len = bytes.len();

    // All sixteen reserved words are 2-6 bytes of lowercase ASCII.
    if !(2..=6).contains(&len) {
        return None;
    }
    let first = bytes[0];
    if !first.is_ascii_lowercase() {
        return None;
    }

    match len {
        2 => match text {
            "if" => Some(TokenKind::If),
            "or" => Some(TokenKind::Or),
            _ => None,
        },
        3 => match text {
            "and" => Some(TokenKind::And),
            "for" => Some(TokenKind::For),
            "fun" => Some(TokenKind::Fun),
            "nil" => Some(TokenKind::Nil),
            "var" => Some(TokenKind::Var),
            _ => None,
        },
        4 => match text {
            "else" => Some(TokenKind::Else),
            "this" => Some(TokenKind::This),
            "true" => Some(TokenKind::True),
            _ => None,
        },
        5 => match text {
            "class" => Some(TokenKind::Class),
            "false" => Some(TokenKind::False),
            "print" => Some(TokenKind::Print),
            "super" => Some(TokenKind::Super),
            "while" => Some(TokenKind::While),
            _ => None,
        },
        6 => match text {
            "return" => Some(TokenKind::Return),
            _ => None,
        },
        _ => None,
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
    fn all_sixteen_reserved_words_resolve() {
        let expected = [
            ("and", TokenKind::And),
            ("class", TokenKind::Class),
            ("else", TokenKind::Else),
            ("false", TokenKind::False),
            ("for", TokenKind::For),
            ("fun", TokenKind::Fun),
            ("if", TokenKind::If),
            ("nil", TokenKind::Nil),
            ("or", TokenKind::Or),
            ("print", TokenKind::Print),
            ("return", TokenKind::Return),
            ("super", TokenKind::Super),
            ("this", TokenKind::This),
            ("true", TokenKind::True),
            ("var", TokenKind::Var),
            ("while", TokenKind::While),
        ];
        for (text, kind) in expected {
            assert_eq!(lookup(text), Some(kind), "{text} should be a reserved word");
        }
    }

    #[test]
    fn case_sensitivity() {
        assert_eq!(lookup("Class"), None);
        assert_eq!(lookup("IF"), None);
        assert_eq!(lookup("True"), None);
        assert_eq!(lookup("WHILE"), None);
    }

    #[test]
    fn prefixes_and_extensions_are_not_keywords() {
        assert_eq!(lookup("classroom"), None);
        assert_eq!(lookup("classs"), None);
        assert_eq!(lookup("retur"), None);
        assert_eq!(lookup("returns"), None);
        assert_eq!(lookup("orchid"), None);
        assert_eq!(lookup("i"), None);
    }

    #[test]
    fn empty_string_is_not_a_keyword() {
        assert_eq!(lookup(""), None);
    }

    #[test]
    fn length_boundary_rejection() {
        // Shorter than the shortest keyword, longer than the longest.
        assert_eq!(lookup("a"), None);
        assert_eq!(lookup("returned"), None);
    }

    #[test]
    fn non_lowercase_start_rejection() {
        assert_eq!(lookup("_if"), None);
        assert_eq!(lookup("1if"), None);
    }
}
