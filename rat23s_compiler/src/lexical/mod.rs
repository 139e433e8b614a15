//! Lexical analysis for Rat23S
//!
//! The [`Lexer`] turns a [`SourceBuffer`](crate::source::SourceBuffer) into
//! tokens on demand. Identifiers and numbers are recognized with the
//! transition tables in [`dfa`]; keywords, operators and separators come from
//! the fixed [`SymbolTable`](crate::tokens::SymbolTable).
//!
//! ```text
//! SourceBuffer -> Lexer::get_token -> Token
//!                 Lexer::analyze   -> LexicalMetrics (pre-check)
//!                 listing          -> token table / JSON
//! ```

pub mod dfa;
pub mod error;
pub mod lexer;
pub mod listing;

pub use error::LexerError;
pub use lexer::{is_whitespace, LexicalMetrics, Lexer};
pub use listing::{collect_token_table, format_row, token_table_json, write_token_table};
