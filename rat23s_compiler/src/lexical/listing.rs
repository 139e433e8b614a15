//! Token table output
//!
//! Lexes a whole source and renders every significant token either as a
//! tab-separated table or as JSON. Comments and end of input are not listed.
//! On a lexical error nothing is written.

use super::error::LexerError;
use super::lexer::Lexer;
use crate::tokens::{Token, TokenKind};
use std::io::{self, Write};

pub const TABLE_HEADER: &str = "Token\t\tLexeme";

/// Tokens up to end of input, or the first lexical error
pub fn collect_token_table(lexer: &mut Lexer) -> Result<Vec<Token>, LexerError> {
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token()?;
        match token.kind {
            TokenKind::EndOfInput => return Ok(tokens),
            TokenKind::Comment => continue,
            _ => tokens.push(token),
        }
    }
}

/// `<kind>\t<lexeme>`, with a second tab after the longer kind names
pub fn format_row(token: &Token) -> String {
    let gap = match token.kind {
        TokenKind::Keyword | TokenKind::Integer | TokenKind::Real => "\t\t",
        _ => "\t",
    };
    format!("{}{}{}", token.kind, gap, token.lexeme)
}

pub fn write_token_table<W: Write>(writer: &mut W, tokens: &[Token]) -> io::Result<()> {
    writeln!(writer, "{}", TABLE_HEADER)?;
    for token in tokens {
        writeln!(writer, "{}", format_row(token))?;
    }
    writer.flush()
}

pub fn token_table_json(tokens: &[Token]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(tokens)
}
