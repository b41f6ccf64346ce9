//! Lexical scanner for the Quill command language.
//!
//! Turns a byte buffer into a [`TokenList`] or a single [`LexError`]:
//!
//! ```
//! use quill_alloc::HeapAllocator;
//! use quill_lexer::{lex, Symbol, Token};
//!
//! let heap = HeapAllocator::new();
//! let tokens = lex(&heap, "x = 3.5;").unwrap();
//! assert_eq!(tokens.len(), 4);
//! assert_eq!(tokens.get(1), Some(&Token::Symbol(Symbol::Assign)));
//! assert_eq!(tokens.get(2), Some(&Token::Number(3.5)));
//! ```
//!
//! # Allocation
//!
//! The scanner never chooses an allocator. Identifier and string payloads and
//! the token list itself are allocated from the [`Allocator`] passed to
//! [`Lexer::lex`], and borrow it. With an arena, dropping the tokens and
//! resetting the arena reclaims a whole line's worth of scanning at once.
//!
//! [`Allocator`]: quill_alloc::Allocator
//!
//! # Modules
//!
//! - `cursor`: forward-only byte cursor
//! - `symbol` / `keyword`: fixed-symbol and keyword tables
//! - [`number`]: numeral conversion shared with literal scanning
//! - `lexer`: the scanning state machine

mod cursor;
mod keyword;
mod lex_error;
mod lexer;
pub mod number;
mod span;
mod symbol;
mod token;

pub use cursor::Cursor;
pub use keyword::KeywordTable;
pub use lex_error::{LexError, LexErrorKind};
pub use lexer::{Lexer, LexerConfig, LexResult, UnterminatedStrings, DEFAULT_COMMENT_MARKER};
pub use span::Span;
pub use symbol::{Symbol, SymbolEntry, SymbolTable, SymbolTableError};
pub use token::{Token, TokenList};

use quill_alloc::Allocator;

/// Scan `source` with the default configuration.
///
/// See [`Lexer::lex`].
pub fn lex<'a>(allocator: &'a dyn Allocator, source: impl AsRef<[u8]>) -> LexResult<'a> {
    Lexer::default().lex(allocator, source)
}
