//! Forward-only cursor over the bytes being scanned.
//!
//! The cursor never moves backwards: every scanning step either consumes
//! bytes or leaves the position untouched. End of input is `pos == len`;
//! reads past it return `None` instead of a sentinel, so interior `0x00`
//! bytes are ordinary (unsupported) input.

/// Cursor over a borrowed byte slice.
///
/// # Invariant
///
/// `0 <= pos <= buf.len()`, and `pos` never decreases.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at position 0.
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Returns the byte at the current position, or `None` at end of input.
    #[inline]
    pub fn current(&self) -> Option<u8> {
        self.buf.get(self.pos).copied()
    }

    /// Returns the byte one position ahead of current.
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.buf.get(self.pos + 1).copied()
    }

    /// Returns the byte at `offset`, or `None` past the end.
    #[inline]
    pub fn byte_at(&self, offset: usize) -> Option<u8> {
        self.buf.get(offset).copied()
    }

    /// Advance the cursor by one byte.
    #[inline]
    pub fn advance(&mut self) {
        self.advance_n(1);
    }

    /// Advance the cursor by `n` bytes, stopping at end of input.
    #[inline]
    pub fn advance_n(&mut self, n: usize) {
        self.pos = self.pos.saturating_add(n).min(self.buf.len());
    }

    /// Returns `true` once every byte has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.buf.len()
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Length of the source in bytes.
    #[inline]
    pub fn source_len(&self) -> usize {
        self.buf.len()
    }

    /// The unconsumed bytes.
    #[inline]
    pub fn rest(&self) -> &'a [u8] {
        &self.buf[self.pos..]
    }

    /// Returns `true` if the unconsumed bytes start with `prefix`.
    ///
    /// A prefix that would run past the end of input never matches.
    #[inline]
    pub fn starts_with(&self, prefix: &[u8]) -> bool {
        self.rest().starts_with(prefix)
    }

    /// Source bytes in `start..end`.
    ///
    /// # Contract
    ///
    /// `start <= end <= source_len()`. Offsets recorded by the scanner from
    /// [`pos()`](Self::pos) always satisfy this.
    pub fn slice(&self, start: usize, end: usize) -> &'a [u8] {
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        &self.buf[start..end]
    }

    /// Source bytes from `start` to the current position.
    pub fn slice_from(&self, start: usize) -> &'a [u8] {
        self.slice(start, self.pos)
    }

    /// Advance while `pred` returns `true` for the current byte.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while self.current().is_some_and(&pred) {
            self.pos += 1;
        }
    }

    /// Advance to the next `\n` byte, or to end of input if there is none.
    ///
    /// The newline itself is not consumed.
    pub fn eat_until_newline_or_eof(&mut self) {
        self.eat_until(b'\n');
    }

    /// Advance to the next occurrence of `byte`.
    ///
    /// Returns `true` with the cursor on the byte if found; otherwise moves
    /// to end of input and returns `false`.
    pub fn eat_until(&mut self, byte: u8) -> bool {
        if let Some(offset) = memchr::memchr(byte, self.rest()) {
            self.pos += offset;
            true
        } else {
            self.pos = self.buf.len();
            false
        }
    }
}

#[cfg(test)]
mod tests;
