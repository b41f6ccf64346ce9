//! Keyword resolution on complete identifier words.
//!
//! Keywords are not part of the fixed-symbol table. The identifier step scans
//! a whole word first and only then asks this table whether the word is
//! reserved, so `if` is a keyword while `iffy` and `if_` stay identifiers.

use crate::symbol::{validate, SymbolEntry, SymbolTableError};
use crate::Symbol;

/// Reserved words and the symbols they scan as.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeywordTable {
    entries: Vec<SymbolEntry>,
}

impl KeywordTable {
    /// Build a table from `(word, symbol)` pairs.
    ///
    /// Every word must be spelled like an identifier
    /// (`[A-Za-z][A-Za-z0-9_]*`); anything else could never be produced by
    /// the identifier step.
    pub fn new<I, S>(entries: I) -> Result<Self, SymbolTableError>
    where
        I: IntoIterator<Item = (S, Symbol)>,
        S: Into<Box<str>>,
    {
        let entries: Vec<SymbolEntry> = entries
            .into_iter()
            .map(|(literal, symbol)| SymbolEntry {
                literal: literal.into(),
                symbol,
            })
            .collect();
        validate(&entries)?;
        if let Some(bad) = entries.iter().find(|e| !is_identifier(e.literal.as_bytes())) {
            return Err(SymbolTableError::InvalidKeyword {
                literal: bad.literal.to_string(),
            });
        }
        Ok(Self { entries })
    }

    /// A table that reserves nothing.
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// The keyword symbol for `word`, if it is reserved.
    ///
    /// Matching is exact and case-sensitive.
    #[inline]
    pub fn lookup(&self, word: &[u8]) -> Option<Symbol> {
        self.entries
            .iter()
            .find(|entry| entry.literal.as_bytes() == word)
            .map(|entry| entry.symbol)
    }

    /// Entries in declaration order.
    pub fn entries(&self) -> &[SymbolEntry] {
        &self.entries
    }
}

impl Default for KeywordTable {
    /// `if` and `while`.
    fn default() -> Self {
        Self {
            entries: [Symbol::If, Symbol::While]
                .into_iter()
                .map(|symbol| SymbolEntry {
                    literal: symbol.as_str().into(),
                    symbol,
                })
                .collect(),
        }
    }
}

/// Returns `true` if `word` is a complete identifier.
pub(crate) fn is_identifier(word: &[u8]) -> bool {
    match word.split_first() {
        Some((first, rest)) => {
            first.is_ascii_alphabetic() && rest.iter().copied().all(is_identifier_continue)
        }
        None => false,
    }
}

/// Bytes allowed after the first letter of an identifier.
#[inline]
pub(crate) fn is_identifier_continue(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "test assertions use unwrap for clarity")]
mod tests;
