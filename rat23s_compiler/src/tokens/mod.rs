//! Tokens produced by the Rat23S lexer
//!
//! A [`Token`] is a `(kind, lexeme)` pair. The [`SymbolTable`] maps the exact
//! spelling of every keyword, operator and separator to its kind.

pub mod symbol_table;
pub mod token;

pub use symbol_table::{SymbolTable, KEYWORDS, OPERATORS, SEPARATORS};
pub use token::{Token, TokenKind};
