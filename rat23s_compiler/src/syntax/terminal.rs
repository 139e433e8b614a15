//! Grammar terminals and how they match lexer tokens

use crate::tokens::{Token, TokenKind};
use std::fmt;

/// A terminal symbol the parser can require
///
/// Identifier, integer, real and end-of-input match on kind alone. Keywords,
/// operators and separators also compare the lexeme, ignoring ASCII case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terminal {
    Identifier,
    Integer,
    Real,
    EndOfInput,
    Keyword(&'static str),
    Operator(&'static str),
    Separator(&'static str),
}

impl Terminal {
    pub fn matches(&self, token: &Token) -> bool {
        match *self {
            Terminal::Identifier => token.kind == TokenKind::Identifier,
            Terminal::Integer => token.kind == TokenKind::Integer,
            Terminal::Real => token.kind == TokenKind::Real,
            Terminal::EndOfInput => token.kind == TokenKind::EndOfInput,
            Terminal::Keyword(spelling) => Self::spelled(token, TokenKind::Keyword, spelling),
            Terminal::Operator(spelling) => Self::spelled(token, TokenKind::Operator, spelling),
            Terminal::Separator(spelling) => Self::spelled(token, TokenKind::Separator, spelling),
        }
    }

    fn spelled(token: &Token, kind: TokenKind, spelling: &str) -> bool {
        token.kind == kind && token.lexeme.eq_ignore_ascii_case(spelling)
    }

    /// Message reported when this terminal is required but absent
    pub fn expectation(&self) -> String {
        format!("expected {}", self)
    }
}

impl fmt::Display for Terminal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Terminal::Identifier => f.write_str("<identifier>"),
            Terminal::Integer => f.write_str("<integer>"),
            Terminal::Real => f.write_str("<real>"),
            Terminal::EndOfInput => f.write_str("EOF"),
            Terminal::Keyword(spelling)
            | Terminal::Operator(spelling)
            | Terminal::Separator(spelling) => write!(f, "'{}'", spelling),
        }
    }
}
