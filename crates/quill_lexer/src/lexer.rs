//! The scanning state machine.
//!
//! Each iteration of the scan loop tries these steps in order and the first
//! one that matches wins:
//!
//! 1. line comment (configurable marker, default `\\`) up to end of line
//! 2. whitespace: space, tab, `\n`, `\r`, form feed, vertical tab
//! 3. end of input: done
//! 4. fixed symbol, longest literal first
//! 5. identifier, then keyword lookup on the whole word
//! 6. string literal `"..."`
//! 7. decimal numeral with at most one `.`
//! 8. anything else fails at the current offset
//!
//! Every step that matches consumes at least one byte, so a scan is linear in
//! the input length and always terminates.

use quill_alloc::{Allocator, Text};

use crate::cursor::Cursor;
use crate::keyword::is_identifier_continue;
use crate::number::{parse_float, NumberError};
use crate::{KeywordTable, LexError, LexErrorKind, Span, SymbolTable, Token, TokenList};

/// Outcome of a scan: every token, or the first failure.
pub type LexResult<'a> = Result<TokenList<'a>, LexError>;

/// What to do with a string literal that reaches end of input unclosed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum UnterminatedStrings {
    /// Yield the remaining bytes as the literal's contents.
    #[default]
    Accept,
    /// Fail at the opening quote.
    Reject,
}

/// Scanner configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexerConfig {
    /// Line comment marker; `None` disables comments.
    pub comment_marker: Option<Box<[u8]>>,
    pub symbols: SymbolTable,
    pub keywords: KeywordTable,
    pub unterminated_strings: UnterminatedStrings,
}

/// Default line comment marker: two backslashes.
pub const DEFAULT_COMMENT_MARKER: &[u8] = b"\\\\";

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            comment_marker: Some(DEFAULT_COMMENT_MARKER.into()),
            symbols: SymbolTable::default(),
            keywords: KeywordTable::default(),
            unterminated_strings: UnterminatedStrings::default(),
        }
    }
}

impl LexerConfig {
    /// Replace the comment marker. An empty marker disables comments.
    #[must_use]
    pub fn with_comment_marker(mut self, marker: &[u8]) -> Self {
        self.comment_marker = (!marker.is_empty()).then(|| marker.into());
        self
    }

    /// Set the unterminated-string policy.
    #[must_use]
    pub fn with_unterminated_strings(mut self, policy: UnterminatedStrings) -> Self {
        self.unterminated_strings = policy;
        self
    }
}

/// Reusable scanner. Holds only configuration; every call to
/// [`lex`](Self::lex) is independent.
#[derive(Clone, Debug, Default)]
pub struct Lexer {
    config: LexerConfig,
}

impl Lexer {
    /// Create a scanner with `config`.
    pub fn new(config: LexerConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &LexerConfig {
        &self.config
    }

    /// Scan `source` into tokens whose payloads live in `allocator`.
    ///
    /// Bytes are taken verbatim; no encoding is assumed. Scanning stops at
    /// the first failure and nothing of the partial token list survives.
    #[tracing::instrument(level = "debug", skip_all, fields(len = source.as_ref().len()))]
    pub fn lex<'a>(&self, allocator: &'a dyn Allocator, source: impl AsRef<[u8]>) -> LexResult<'a> {
        let source = source.as_ref();
        if u32::try_from(source.len()).is_err() {
            return Err(LexError::new(
                0,
                LexErrorKind::SourceTooLarge { len: source.len() },
            ));
        }
        let scan = Scan {
            config: &self.config,
            allocator,
            cursor: Cursor::new(source),
            tokens: TokenList::new(allocator),
        };
        match scan.run() {
            Ok(tokens) => {
                tracing::debug!(tokens = tokens.len(), "lex complete");
                Ok(tokens)
            }
            Err(err) => {
                tracing::debug!(offset = err.offset, kind = ?err.kind, "lex failed");
                Err(err)
            }
        }
    }
}

/// State of one scan.
struct Scan<'s, 'a> {
    config: &'s LexerConfig,
    allocator: &'a dyn Allocator,
    cursor: Cursor<'s>,
    tokens: TokenList<'a>,
}

impl<'s, 'a> Scan<'s, 'a> {
    fn run(mut self) -> LexResult<'a> {
        loop {
            if self.skip_comment() || self.skip_whitespace() {
                continue;
            }
            if self.cursor.is_eof() {
                return Ok(self.tokens);
            }
            let matched = self.match_symbol()
                || self.scan_identifier()
                || self.scan_string()?
                || self.scan_number()?;
            if !matched {
                return Err(self.unexpected_character());
            }
        }
    }

    fn skip_comment(&mut self) -> bool {
        match &self.config.comment_marker {
            Some(marker) if self.cursor.starts_with(marker) => {
                self.cursor.advance_n(marker.len());
                self.cursor.eat_until_newline_or_eof();
                true
            }
            _ => false,
        }
    }

    fn skip_whitespace(&mut self) -> bool {
        let start = self.cursor.pos();
        self.cursor.eat_while(is_whitespace);
        self.cursor.pos() > start
    }

    fn match_symbol(&mut self) -> bool {
        let Some((symbol, len)) = self.config.symbols.match_prefix(self.cursor.rest()) else {
            return false;
        };
        let start = self.cursor.pos();
        self.cursor.advance_n(len);
        self.push(Token::Symbol(symbol), start);
        true
    }

    fn scan_identifier(&mut self) -> bool {
        if !self.cursor.current().is_some_and(|b| b.is_ascii_alphabetic()) {
            return false;
        }
        let start = self.cursor.pos();
        self.cursor.advance();
        self.cursor.eat_while(is_identifier_continue);
        let word = self.cursor.slice_from(start);
        let token = match self.config.keywords.lookup(word) {
            Some(keyword) => Token::Symbol(keyword),
            None => Token::Identifier(Text::from_bytes(self.allocator, word)),
        };
        self.push(token, start);
        true
    }

    fn scan_string(&mut self) -> Result<bool, LexError> {
        if self.cursor.current() != Some(b'"') {
            return Ok(false);
        }
        let start = self.cursor.pos();
        self.cursor.advance();
        let content_start = self.cursor.pos();
        let closed = self.cursor.eat_until(b'"');
        let content = self.cursor.slice_from(content_start);
        if closed {
            self.cursor.advance();
        } else if self.config.unterminated_strings == UnterminatedStrings::Reject {
            return Err(LexError::new(start, LexErrorKind::UnterminatedString));
        }
        let text = Text::from_bytes(self.allocator, content);
        self.push(Token::String(text), start);
        Ok(true)
    }

    fn scan_number(&mut self) -> Result<bool, LexError> {
        if !self.cursor.current().is_some_and(|b| b.is_ascii_digit()) {
            return Ok(false);
        }
        let start = self.cursor.pos();
        self.cursor.eat_while(|b| b.is_ascii_digit() || b == b'.');
        let value = parse_float(self.cursor.slice_from(start)).map_err(|err| match err {
            NumberError::ExtraDecimalPoint { offset } => {
                LexError::new(start + offset, LexErrorKind::ExtraDecimalPoint)
            }
            _ => self.unexpected_character_at(start),
        })?;
        self.push(Token::Number(value), start);
        Ok(true)
    }

    fn unexpected_character(&self) -> LexError {
        self.unexpected_character_at(self.cursor.pos())
    }

    fn unexpected_character_at(&self, offset: usize) -> LexError {
        let byte = self.cursor.byte_at(offset).unwrap_or_default();
        LexError::new(offset, LexErrorKind::UnexpectedCharacter { byte })
    }

    fn push(&mut self, token: Token<'a>, start: usize) {
        let span = Span::from_offsets(start, self.cursor.pos());
        self.tokens.push(token, span);
    }
}

/// Space, tab, line feed, carriage return, form feed and vertical tab.
#[inline]
fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r' | 0x0B | 0x0C)
}
