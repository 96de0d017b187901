//! Lexical analysis for Lox source text.
//!
//! One pass, no configuration: [`scan`] takes a `&str` and produces every
//! token in it plus every lexical error, without ever failing outright.
//! Tokens borrow their lexemes from the input, so nothing is copied out of
//! the source.
//!
//! # Pipeline
//!
//! ```text
//! &str ──► scan() ──► ScanResult
//!                       ├── tokens: Vec<Token>     (always Eof-terminated)
//!                       └── errors: Vec<ScanError> (empty on clean input)
//! ```
//!
//! # Example
//!
//! ```
//! use lox_lexer::{scan, TokenKind};
//!
//! let result = scan("print 1 + 2;");
//! assert!(!result.has_errors());
//!
//! let kinds: Vec<_> = result.tokens.iter().map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     [
//!         TokenKind::Print,
//!         TokenKind::Number,
//!         TokenKind::Plus,
//!         TokenKind::Number,
//!         TokenKind::Semicolon,
//!         TokenKind::Eof,
//!     ]
//! );
//! ```
//!
//! This crate is standalone on purpose: external tools (highlighters,
//! formatters, an eventual LSP) can tokenize Lox without pulling in the
//! rest of the front end.

mod cursor;
mod keywords;
mod scan_error;
mod scanner;
mod token;

pub use scan_error::{ScanError, ScanErrorKind};
pub use scanner::{scan, ScanResult};
pub use token::{Literal, Token, TokenKind};
