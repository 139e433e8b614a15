//! Pull-based Rat23S lexer
//!
//! Each call to [`Lexer::get_token`] skips whitespace, then dispatches on the
//! first significant byte. Identifier and number runs are consumed by maximal
//! munch and classified afterwards by their transition tables.

use super::dfa::{
    identifier_class, identifier_dfa, number_class, number_dfa, IdentifierDfa, NumberDfa,
    IDENTIFIER_START, INTEGER_STATE, NUMBER_START, REAL_STATE,
};
use super::error::LexerError;
use crate::config::compile_time::lexical::MAX_TOKEN_COUNT;
use crate::logging::codes;
use crate::source::SourceBuffer;
use crate::tokens::{SymbolTable, Token, TokenKind};
use crate::{log_debug, log_error, log_success};
use serde::Serialize;

/// Per-kind token counts gathered by [`Lexer::analyze`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LexicalMetrics {
    /// Tokens other than comments and end of input
    pub total_tokens: usize,
    pub identifiers: usize,
    pub keywords: usize,
    pub integers: usize,
    pub reals: usize,
    pub operators: usize,
    pub separators: usize,
    pub comments: usize,
    pub lines: usize,
}

impl LexicalMetrics {
    fn record(&mut self, token: &Token) {
        let counter = match token.kind {
            TokenKind::Identifier => &mut self.identifiers,
            TokenKind::Keyword => &mut self.keywords,
            TokenKind::Integer => &mut self.integers,
            TokenKind::Real => &mut self.reals,
            TokenKind::Operator => &mut self.operators,
            TokenKind::Separator => &mut self.separators,
            TokenKind::Comment => {
                self.comments += 1;
                return;
            }
            TokenKind::EndOfInput | TokenKind::Error => return,
        };
        *counter += 1;
        self.total_tokens += 1;
    }
}

pub struct Lexer {
    source: SourceBuffer,
    symbols: SymbolTable,
    identifiers: IdentifierDfa,
    numbers: NumberDfa,
    line: usize,
}

impl Lexer {
    pub fn new(source: SourceBuffer) -> Self {
        Self {
            source,
            symbols: SymbolTable::new(),
            identifiers: identifier_dfa(),
            numbers: number_dfa(),
            line: 1,
        }
    }

    pub fn from_text(text: &str) -> Self {
        Self::new(SourceBuffer::from_text(text))
    }

    /// Next token; lexical problems come back as `ERROR` tokens carrying the message
    pub fn get_token(&mut self) -> Token {
        self.next_token()
            .unwrap_or_else(|error| Token::error(error.to_string()))
    }

    /// Next token, with lexical problems kept as typed errors
    pub fn next_token(&mut self) -> Result<Token, LexerError> {
        self.scan()
    }

    /// 1-based line of the current read position
    pub fn line_number(&self) -> usize {
        self.line
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub fn close(&mut self) {
        self.source.close();
    }

    pub fn is_closed(&self) -> bool {
        self.source.is_closed()
    }

    /// Lex the whole source, stopping at the first error, then close it
    pub fn analyze(&mut self) -> Result<LexicalMetrics, LexerError> {
        let mut metrics = LexicalMetrics::default();
        let result = self.analyze_into(&mut metrics);
        self.close();

        match result {
            Ok(()) => {
                metrics.lines = self.line;
                log_success!(codes::success::TOKENIZATION_COMPLETE, "Lexical pre-check passed",
                    "tokens" => metrics.total_tokens,
                    "comments" => metrics.comments,
                    "lines" => metrics.lines);
                Ok(metrics)
            }
            Err(error) => {
                log_error!(error.error_code(), &error.to_string(), line = error.line());
                Err(error)
            }
        }
    }

    fn analyze_into(&mut self, metrics: &mut LexicalMetrics) -> Result<(), LexerError> {
        loop {
            if metrics.total_tokens + metrics.comments >= MAX_TOKEN_COUNT {
                return Err(LexerError::TooManyTokens {
                    count: metrics.total_tokens + metrics.comments,
                    limit: MAX_TOKEN_COUNT,
                    line: self.line,
                });
            }
            let token = self.scan()?;
            if token.is_end_of_input() {
                return Ok(());
            }
            metrics.record(&token);
        }
    }

    // ========================================================================
    // SCANNING
    // ========================================================================

    fn scan(&mut self) -> Result<Token, LexerError> {
        let first = match self.skip_whitespace() {
            Some(byte) => byte,
            None => return Ok(Token::end_of_input()),
        };

        match first {
            b if b.is_ascii_alphabetic() => self.scan_word(first),
            b if b.is_ascii_digit() => self.scan_number(first),
            b'=' => Ok(match self.source.get() {
                Some(b'=') => Token::new(TokenKind::Operator, "=="),
                Some(b'>') => Token::new(TokenKind::Operator, "=>"),
                _ => {
                    self.source.unget();
                    Token::new(TokenKind::Operator, "=")
                }
            }),
            b'<' => Ok(match self.source.get() {
                Some(b'=') => Token::new(TokenKind::Operator, "<="),
                _ => {
                    self.source.unget();
                    Token::new(TokenKind::Operator, "<")
                }
            }),
            b'!' => match self.source.get() {
                Some(b'=') => Ok(Token::new(TokenKind::Operator, "!=")),
                _ => {
                    self.source.unget();
                    Err(self.unrecognized(b'!'))
                }
            },
            b'[' => match self.source.get() {
                Some(b'*') => self.scan_comment(),
                _ => {
                    self.source.unget();
                    Err(self.unrecognized(b'['))
                }
            },
            other => match self.symbols.single_byte_kind(other) {
                Some(kind) => Ok(Token::new(kind, char::from(other).to_string())),
                None => Err(self.unrecognized(other)),
            },
        }
    }

    /// First non-whitespace byte, counting newlines on the way
    fn skip_whitespace(&mut self) -> Option<u8> {
        loop {
            let byte = self.source.get()?;
            if !is_whitespace(byte) {
                return Some(byte);
            }
            if byte == b'\n' {
                self.line += 1;
            }
        }
    }

    /// Consume bytes up to, not including, whitespace, `!`, a one-byte symbol or end of input
    fn take_run(&mut self, first: u8) -> Vec<u8> {
        let mut run = vec![first];
        while let Some(byte) = self.source.get() {
            if is_whitespace(byte) || byte == b'!' || self.symbols.is_single_byte_symbol(byte) {
                self.source.unget();
                break;
            }
            run.push(byte);
        }
        run
    }

    fn scan_word(&mut self, first: u8) -> Result<Token, LexerError> {
        let run = self.take_run(first);
        let dfa = &self.identifiers;
        let state = run
            .iter()
            .fold(IDENTIFIER_START, |state, &b| dfa.next(state, identifier_class(b)));
        let lexeme = describe_run(&run);

        if dfa.is_reject(state) {
            return Err(LexerError::InvalidIdentifier {
                lexeme,
                line: self.line,
            });
        }

        if self.symbols.lookup(&lexeme.to_ascii_lowercase()) == Some(TokenKind::Keyword) {
            Ok(Token::new(TokenKind::Keyword, lexeme))
        } else {
            Ok(Token::new(TokenKind::Identifier, lexeme))
        }
    }

    fn scan_number(&mut self, first: u8) -> Result<Token, LexerError> {
        let run = self.take_run(first);
        let dfa = &self.numbers;
        let state = run
            .iter()
            .fold(NUMBER_START, |state, &b| dfa.next(state, number_class(b)));
        let lexeme = describe_run(&run);

        match state {
            INTEGER_STATE => Ok(Token::new(TokenKind::Integer, lexeme)),
            REAL_STATE => Ok(Token::new(TokenKind::Real, lexeme)),
            _ => Err(LexerError::InvalidNumber {
                lexeme,
                line: self.line,
            }),
        }
    }

    /// Body of a `[* ... *]` comment; the opening pair is already consumed
    fn scan_comment(&mut self) -> Result<Token, LexerError> {
        let opened_on = self.line;
        loop {
            match self.source.get() {
                None => break,
                Some(b'\n') => self.line += 1,
                Some(b'*') => match self.source.get() {
                    Some(b']') => {
                        log_debug!("Comment skipped",
                            "from_line" => opened_on,
                            "to_line" => self.line);
                        return Ok(Token::comment());
                    }
                    Some(_) => self.source.unget(),
                    None => break,
                },
                Some(_) => {}
            }
        }
        Err(LexerError::UnclosedComment { line: self.line })
    }

    fn unrecognized(&self, byte: u8) -> LexerError {
        LexerError::UnrecognizedSymbol {
            symbol: describe_byte(byte),
            line: self.line,
        }
    }
}

/// Space, tab, vertical tab, newline and carriage return
pub fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | 0x0B | b'\n' | b'\r')
}

/// Printable form of a byte for diagnostics
fn describe_byte(byte: u8) -> String {
    if byte.is_ascii() {
        char::from(byte).to_string()
    } else {
        format!("\\x{:02X}", byte)
    }
}

fn describe_run(run: &[u8]) -> String {
    run.iter().map(|&byte| describe_byte(byte)).collect()
}
