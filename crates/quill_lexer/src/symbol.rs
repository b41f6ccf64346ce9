//! Payload-free token kinds and the fixed-symbol table.
//!
//! # Longest match
//!
//! The scanner tries table entries in order and takes the first literal the
//! input starts with. [`SymbolTable::new`] sorts entries by descending
//! literal length (stable, so equal-length entries keep the author's order),
//! which turns first-match into longest-match: `>=` is always tried before
//! `>`, whatever order the entries were written in.

use std::cmp::Reverse;
use std::fmt;

use thiserror::Error;

/// Keywords, operators and punctuation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Symbol {
    // === Keywords ===
    If,
    While,

    // === Comparison ===
    Ge,
    Le,
    EqEq,
    NotEq,
    Lt,
    Gt,

    // === Logical ===
    AndAnd,
    OrOr,
    Not,

    // === Arithmetic ===
    Plus,
    Minus,
    Star,
    Slash,
    Assign,

    // === Delimiters ===
    LeftParen,
    RightParen,
    LeftBracket,
    RightBracket,
    Comma,
    Semicolon,
}

impl Symbol {
    /// The source text this symbol is written as by default.
    pub const fn as_str(self) -> &'static str {
        match self {
            Symbol::If => "if",
            Symbol::While => "while",
            Symbol::Ge => ">=",
            Symbol::Le => "<=",
            Symbol::EqEq => "==",
            Symbol::NotEq => "!=",
            Symbol::Lt => "<",
            Symbol::Gt => ">",
            Symbol::AndAnd => "&&",
            Symbol::OrOr => "||",
            Symbol::Not => "!",
            Symbol::Plus => "+",
            Symbol::Minus => "-",
            Symbol::Star => "*",
            Symbol::Slash => "/",
            Symbol::Assign => "=",
            Symbol::LeftParen => "(",
            Symbol::RightParen => ")",
            Symbol::LeftBracket => "[",
            Symbol::RightBracket => "]",
            Symbol::Comma => ",",
            Symbol::Semicolon => ";",
        }
    }

    /// Returns `true` for keyword symbols.
    pub const fn is_keyword(self) -> bool {
        matches!(self, Symbol::If | Symbol::While)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operators and punctuation recognised by the default table, in the order
/// they were historically listed.
const DEFAULT_SYMBOLS: [Symbol; 20] = [
    Symbol::Ge,
    Symbol::Le,
    Symbol::EqEq,
    Symbol::NotEq,
    Symbol::AndAnd,
    Symbol::OrOr,
    Symbol::Lt,
    Symbol::Gt,
    Symbol::Not,
    Symbol::Plus,
    Symbol::Minus,
    Symbol::Star,
    Symbol::Slash,
    Symbol::Assign,
    Symbol::LeftParen,
    Symbol::RightParen,
    Symbol::Comma,
    Symbol::Semicolon,
    Symbol::LeftBracket,
    Symbol::RightBracket,
];

/// Why a symbol or keyword table was rejected.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SymbolTableError {
    /// An entry has an empty literal, which would match everywhere.
    #[error("symbol {symbol:?} has an empty literal")]
    EmptyLiteral { symbol: Symbol },
    /// Two entries share a literal, so one of them could never match.
    #[error("literal `{literal}` is listed more than once")]
    DuplicateLiteral { literal: String },
    /// A keyword is not spelled like an identifier, so the identifier rule
    /// could never produce it.
    #[error("keyword `{literal}` is not a valid identifier")]
    InvalidKeyword { literal: String },
}

/// One `literal => symbol` mapping.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymbolEntry {
    pub literal: Box<str>,
    pub symbol: Symbol,
}

/// Ordered `literal => symbol` table for the fixed-symbol scanning step.
///
/// # Invariant
///
/// Entries are sorted by descending literal length, no literal is empty and
/// no literal appears twice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymbolTable {
    entries: Vec<SymbolEntry>,
}

impl SymbolTable {
    /// Build a table from `(literal, symbol)` pairs in any order.
    pub fn new<I, S>(entries: I) -> Result<Self, SymbolTableError>
    where
        I: IntoIterator<Item = (S, Symbol)>,
        S: Into<Box<str>>,
    {
        let mut entries: Vec<SymbolEntry> = entries
            .into_iter()
            .map(|(literal, symbol)| SymbolEntry {
                literal: literal.into(),
                symbol,
            })
            .collect();
        validate(&entries)?;
        sort_longest_first(&mut entries);
        Ok(Self { entries })
    }

    /// The first entry whose literal `input` starts with, and the literal's
    /// length in bytes.
    pub fn match_prefix(&self, input: &[u8]) -> Option<(Symbol, usize)> {
        self.entries
            .iter()
            .find(|entry| input.starts_with(entry.literal.as_bytes()))
            .map(|entry| (entry.symbol, entry.literal.len()))
    }

    /// Entries in matching order.
    pub fn entries(&self) -> &[SymbolEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SymbolTable {
    /// The standard operator and punctuation table.
    fn default() -> Self {
        let mut entries: Vec<SymbolEntry> = DEFAULT_SYMBOLS
            .iter()
            .map(|&symbol| SymbolEntry {
                literal: symbol.as_str().into(),
                symbol,
            })
            .collect();
        sort_longest_first(&mut entries);
        Self { entries }
    }
}

/// Stable sort by descending literal length.
fn sort_longest_first(entries: &mut [SymbolEntry]) {
    entries.sort_by_key(|entry| Reverse(entry.literal.len()));
}

/// Reject empty and duplicate literals.
pub(crate) fn validate(entries: &[SymbolEntry]) -> Result<(), SymbolTableError> {
    for (i, entry) in entries.iter().enumerate() {
        if entry.literal.is_empty() {
            return Err(SymbolTableError::EmptyLiteral {
                symbol: entry.symbol,
            });
        }
        if entries[..i].iter().any(|prior| prior.literal == entry.literal) {
            return Err(SymbolTableError::DuplicateLiteral {
                literal: entry.literal.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "test assertions use unwrap for clarity")]
mod tests;
