//! Token value type

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Identifier,
    Keyword,
    Integer,
    Real,
    Operator,
    Separator,
    Comment,
    #[serde(rename = "EOF")]
    EndOfInput,
    #[serde(rename = "ERROR")]
    Error,
}

impl TokenKind {
    /// Name used in trace and token-table output
    pub const fn as_str(self) -> &'static str {
        match self {
            TokenKind::Identifier => "identifier",
            TokenKind::Keyword => "keyword",
            TokenKind::Integer => "integer",
            TokenKind::Real => "real",
            TokenKind::Operator => "operator",
            TokenKind::Separator => "separator",
            TokenKind::Comment => "comment",
            TokenKind::EndOfInput => "EOF",
            TokenKind::Error => "ERROR",
        }
    }

    /// Identifier and separator names are short enough that a single tab aligns them
    pub const fn takes_single_tab(self) -> bool {
        matches!(self, TokenKind::Identifier | TokenKind::Separator)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable `(kind, lexeme)` pair
///
/// The lexeme keeps the source spelling, case included. Error tokens carry
/// their diagnostic message as the lexeme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
        }
    }

    pub fn end_of_input() -> Self {
        Self::new(TokenKind::EndOfInput, "")
    }

    pub fn comment() -> Self {
        Self::new(TokenKind::Comment, "")
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(TokenKind::Error, message)
    }

    pub fn is_end_of_input(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }

    pub fn is_comment(&self) -> bool {
        self.kind == TokenKind::Comment
    }

    pub fn is_error(&self) -> bool {
        self.kind == TokenKind::Error
    }

    /// `Token: <kind>\tLexeme: <lexeme>` with kind-dependent tab alignment
    pub fn trace_line(&self) -> String {
        let gap = if self.kind.takes_single_tab() { "\t" } else { "\t\t" };
        format!("Token: {}{}Lexeme: {}", self.kind, gap, self.lexeme)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} '{}'", self.kind, self.lexeme)
    }
}
