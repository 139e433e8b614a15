//! Fixed table of Rat23S keywords, operators and separators

use super::token::TokenKind;
use std::collections::HashMap;

pub const KEYWORDS: &[&str] = &[
    "function", "int", "bool", "real", "if", "fi", "else", "return", "put", "get", "while",
    "endwhile", "true", "false",
];

pub const OPERATORS: &[&str] = &["=", "+", "-", "*", "/", "==", "!=", ">", "<", "<=", "=>"];

pub const SEPARATORS: &[&str] = &["(", ")", "{", "}", ";", "#", ","];

/// Exact spelling to kind, built once per lexer and never mutated
#[derive(Debug, Clone)]
pub struct SymbolTable {
    entries: HashMap<&'static str, TokenKind>,
    /// Kinds of single-byte ASCII entries, indexed by byte
    single_byte: [Option<TokenKind>; 128],
}

impl SymbolTable {
    pub fn new() -> Self {
        let mut entries = HashMap::new();
        let mut single_byte = [None; 128];

        let groups = [
            (KEYWORDS, TokenKind::Keyword),
            (OPERATORS, TokenKind::Operator),
            (SEPARATORS, TokenKind::Separator),
        ];
        for (spellings, kind) in groups {
            for &spelling in spellings {
                let previous = entries.insert(spelling, kind);
                debug_assert!(previous.is_none(), "duplicate symbol {}", spelling);

                if let [byte] = spelling.as_bytes() {
                    single_byte[usize::from(*byte)] = Some(kind);
                }
            }
        }

        Self {
            entries,
            single_byte,
        }
    }

    /// Kind of an exact spelling
    pub fn lookup(&self, spelling: &str) -> Option<TokenKind> {
        self.entries.get(spelling).copied()
    }

    pub fn contains(&self, spelling: &str) -> bool {
        self.entries.contains_key(spelling)
    }

    /// Kind of a one-character entry such as `+` or `;`
    pub fn single_byte_kind(&self, byte: u8) -> Option<TokenKind> {
        self.single_byte.get(usize::from(byte)).copied().flatten()
    }

    pub fn is_single_byte_symbol(&self, byte: u8) -> bool {
        self.single_byte_kind(byte).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_spelling_appears_once() {
        let table = SymbolTable::new();
        assert_eq!(
            table.len(),
            KEYWORDS.len() + OPERATORS.len() + SEPARATORS.len()
        );
    }

    #[test]
    fn test_lookup_is_exact() {
        let table = SymbolTable::new();
        assert_eq!(table.lookup("endwhile"), Some(TokenKind::Keyword));
        assert_eq!(table.lookup("=>"), Some(TokenKind::Operator));
        assert_eq!(table.lookup("#"), Some(TokenKind::Separator));
        assert_eq!(table.lookup("While"), None);
        assert!(!table.contains(">="));
        assert!(!table.contains("["));
    }

    #[test]
    fn test_single_byte_entries() {
        let table = SymbolTable::new();
        for byte in *b"=+-*/><(){};#," {
            assert!(table.is_single_byte_symbol(byte), "{}", byte as char);
        }
        for byte in *b"!.[]_a0 " {
            assert!(!table.is_single_byte_symbol(byte), "{}", byte as char);
        }
        assert_eq!(table.single_byte_kind(b';'), Some(TokenKind::Separator));
        assert_eq!(table.single_byte_kind(0xC3), None);
    }
}
