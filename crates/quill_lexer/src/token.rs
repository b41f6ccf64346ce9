//! Tokens and the token list a scan produces.

use std::fmt;

use quill_alloc::{Allocator, GrowableBuffer, Text};

use crate::number::format_float;
use crate::{Span, Symbol};

/// One scanned token.
///
/// Payload text lives in the allocator the scan was given.
#[derive(Clone, Debug, PartialEq)]
pub enum Token<'a> {
    /// Keyword, operator or punctuation.
    Symbol(Symbol),
    /// `[A-Za-z][A-Za-z0-9_]*` that is not a keyword.
    Identifier(Text<'a>),
    /// Decimal numeral.
    Number(f64),
    /// Contents of a `"..."` literal, without the quotes.
    String(Text<'a>),
}

impl Token<'_> {
    /// The symbol, for payload-free tokens.
    pub fn symbol(&self) -> Option<Symbol> {
        match self {
            Token::Symbol(symbol) => Some(*symbol),
            _ => None,
        }
    }

    /// Short name of the token kind, for messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Token::Symbol(symbol) if symbol.is_keyword() => "keyword",
            Token::Symbol(_) => "symbol",
            Token::Identifier(_) => "identifier",
            Token::Number(_) => "number",
            Token::String(_) => "string",
        }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Symbol(symbol) => write!(f, "{symbol}"),
            Token::Identifier(name) => write!(f, "{name}"),
            Token::Number(value) => f.write_str(&format_float(*value)),
            Token::String(text) => write!(f, "{text:?}"),
        }
    }
}

/// Tokens in source order, with the span of each kept in a parallel array.
pub struct TokenList<'a> {
    tokens: GrowableBuffer<'a, Token<'a>>,
    spans: GrowableBuffer<'a, Span>,
}

impl<'a> TokenList<'a> {
    /// Create an empty list backed by `allocator`.
    pub fn new(allocator: &'a dyn Allocator) -> Self {
        Self {
            tokens: GrowableBuffer::new(allocator),
            spans: GrowableBuffer::new(allocator),
        }
    }

    /// Append a token.
    #[inline]
    pub fn push(&mut self, token: Token<'a>, span: Span) {
        self.tokens.push(token);
        self.spans.push(span);
    }

    /// Number of tokens.
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns `true` if the list has no tokens.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The token at `index`.
    pub fn get(&self, index: usize) -> Option<&Token<'a>> {
        self.tokens.get(index)
    }

    /// The span of the token at `index`.
    pub fn span(&self, index: usize) -> Option<Span> {
        self.spans.get(index).copied()
    }

    /// Every token, in source order.
    pub fn tokens(&self) -> &[Token<'a>] {
        &self.tokens
    }

    /// Every span, parallel to [`tokens`](Self::tokens).
    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// Iterate over `(token, span)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&Token<'a>, Span)> + '_ {
        self.tokens.iter().zip(self.spans.iter().copied())
    }
}

impl fmt::Debug for TokenList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.tokens.iter()).finish()
    }
}

impl PartialEq for TokenList<'_> {
    /// Two lists are equal when their tokens are; spans are not compared.
    fn eq(&self, other: &Self) -> bool {
        self.tokens() == other.tokens()
    }
}

#[cfg(test)]
mod tests;
