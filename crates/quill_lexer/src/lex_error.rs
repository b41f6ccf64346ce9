//! Scan failure reported as data.

use std::fmt;

use thiserror::Error;

/// A scan failure: the byte offset where scanning stopped and why.
///
/// A scan produces either a complete token list or exactly one of these;
/// there are no partial results.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq, Hash)]
#[error("{kind} at offset {offset}")]
pub struct LexError {
    /// Byte offset of the offending input.
    pub offset: usize,
    pub kind: LexErrorKind,
}

impl LexError {
    pub(crate) fn new(offset: usize, kind: LexErrorKind) -> Self {
        Self { offset, kind }
    }
}

/// What went wrong.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LexErrorKind {
    /// No scanning rule accepts this byte.
    UnexpectedCharacter { byte: u8 },
    /// A numeral contains a second `.`; the offset points at it.
    ExtraDecimalPoint,
    /// A string literal reaches end of input without its closing `"`. Only
    /// reported when the lexer is configured to reject such literals.
    UnterminatedString,
    /// The source is longer than `u32::MAX` bytes, the limit of [`Span`].
    ///
    /// [`Span`]: crate::Span
    SourceTooLarge { len: usize },
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            LexErrorKind::UnexpectedCharacter { byte } if byte.is_ascii_graphic() => {
                write!(f, "unexpected character `{}`", char::from(byte))
            }
            LexErrorKind::UnexpectedCharacter { byte } => {
                write!(f, "unexpected byte {byte:#04x}")
            }
            LexErrorKind::ExtraDecimalPoint => f.write_str("second decimal point in number"),
            LexErrorKind::UnterminatedString => f.write_str("unterminated string literal"),
            LexErrorKind::SourceTooLarge { len } => {
                write!(f, "source of {len} bytes exceeds the 4 GiB limit")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_printable_characters() {
        let err = LexError::new(0, LexErrorKind::UnexpectedCharacter { byte: b'#' });
        assert_eq!(err.to_string(), "unexpected character `#` at offset 0");
    }

    #[test]
    fn display_uses_hex_for_unprintable_bytes() {
        let err = LexError::new(4, LexErrorKind::UnexpectedCharacter { byte: 0x07 });
        assert_eq!(err.to_string(), "unexpected byte 0x07 at offset 4");
    }

    #[test]
    fn display_other_kinds() {
        assert_eq!(
            LexError::new(3, LexErrorKind::ExtraDecimalPoint).to_string(),
            "second decimal point in number at offset 3"
        );
        assert_eq!(
            LexErrorKind::UnterminatedString.to_string(),
            "unterminated string literal"
        );
    }
}
