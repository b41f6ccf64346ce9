//! Byte-offset spans for tokens.

use std::fmt;

/// Half-open byte range `start..end` in the scanned source, shown as
/// `start..end`.
///
/// Offsets are `u32`: [`Lexer::lex`](crate::Lexer::lex) rejects longer
/// sources before scanning starts.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    /// Span between two offsets into a source already known to fit `u32`.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "source length is checked against u32::MAX before scanning"
    )]
    pub(crate) fn from_offsets(start: usize, end: usize) -> Self {
        debug_assert!(start <= end && u32::try_from(end).is_ok());
        Span::new(start as u32, end as u32)
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_as_a_range() {
        let span = Span::from_offsets(10, 20);
        assert_eq!(span, Span::new(10, 20));
        assert_eq!(span.to_string(), "10..20");
        assert_eq!(format!("{:?}", Span::default()), "0..0");
    }
}
