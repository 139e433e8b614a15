//! Lexical errors
//!
//! `Display` renders the exact message the lexer places in an error token.

use crate::logging::codes;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexerError {
    #[error("{lexeme} is an invalid identifier name")]
    InvalidIdentifier { lexeme: String, line: usize },

    #[error("{lexeme} is an invalid integer/real value.")]
    InvalidNumber { lexeme: String, line: usize },

    #[error("{symbol} is an unrecognized symbol.")]
    UnrecognizedSymbol { symbol: String, line: usize },

    #[error("Unclosed comment.")]
    UnclosedComment { line: usize },

    #[error("Too many tokens: {count} (max {limit})")]
    TooManyTokens {
        count: usize,
        limit: usize,
        line: usize,
    },
}

impl LexerError {
    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            LexerError::InvalidIdentifier { .. } => codes::lexical::INVALID_IDENTIFIER,
            LexerError::InvalidNumber { .. } => codes::lexical::INVALID_NUMBER,
            LexerError::UnrecognizedSymbol { .. } => codes::lexical::UNRECOGNIZED_SYMBOL,
            LexerError::UnclosedComment { .. } => codes::lexical::UNCLOSED_COMMENT,
            LexerError::TooManyTokens { .. } => codes::lexical::TOO_MANY_TOKENS,
        }
    }

    /// Line the lexer was on when the error was detected
    pub fn line(&self) -> usize {
        match self {
            LexerError::InvalidIdentifier { line, .. }
            | LexerError::InvalidNumber { line, .. }
            | LexerError::UnrecognizedSymbol { line, .. }
            | LexerError::UnclosedComment { line }
            | LexerError::TooManyTokens { line, .. } => *line,
        }
    }

    pub fn requires_halt(&self) -> bool {
        codes::requires_halt(self.error_code().as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let id = LexerError::InvalidIdentifier {
            lexeme: "a$b".to_string(),
            line: 1,
        };
        assert_eq!(id.to_string(), "a$b is an invalid identifier name");

        let num = LexerError::InvalidNumber {
            lexeme: "1.2.3".to_string(),
            line: 2,
        };
        assert_eq!(num.to_string(), "1.2.3 is an invalid integer/real value.");

        let sym = LexerError::UnrecognizedSymbol {
            symbol: "!".to_string(),
            line: 3,
        };
        assert_eq!(sym.to_string(), "! is an unrecognized symbol.");

        let comment = LexerError::UnclosedComment { line: 9 };
        assert_eq!(comment.to_string(), "Unclosed comment.");
        assert_eq!(comment.line(), 9);
    }

    #[test]
    fn test_codes() {
        let comment = LexerError::UnclosedComment { line: 1 };
        assert_eq!(comment.error_code(), codes::lexical::UNCLOSED_COMMENT);
        assert!(comment.requires_halt());
    }
}
