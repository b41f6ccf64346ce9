//! Allocator-backed byte text and the string helpers built on it.
//!
//! [`Text`] is a [`GrowableBuffer<u8>`] with text-shaped conveniences. It is
//! not null-terminated: the stored bytes are exactly the logical content.
//! Equality is byte-for-byte and length-sensitive (no normalisation, case
//! matters). No encoding is enforced; bytes are kept verbatim and only
//! rendered lossily for display.

use std::borrow::Cow;
use std::fmt;

use crate::{Allocator, GrowableBuffer};

/// Owned, allocator-backed byte string.
#[derive(Clone, PartialEq, Eq)]
pub struct Text<'a> {
    bytes: GrowableBuffer<'a, u8>,
}

impl<'a> Text<'a> {
    /// Create empty text; nothing is allocated until the first append.
    pub fn new(allocator: &'a dyn Allocator) -> Self {
        Self {
            bytes: GrowableBuffer::new(allocator),
        }
    }

    /// Create empty text with room for `capacity` bytes.
    pub fn with_capacity(allocator: &'a dyn Allocator, capacity: usize) -> Self {
        Self {
            bytes: GrowableBuffer::with_capacity(allocator, capacity),
        }
    }

    /// Copy `bytes` into new text.
    pub fn from_bytes(allocator: &'a dyn Allocator, bytes: &[u8]) -> Self {
        let mut text = Self::with_capacity(allocator, bytes.len());
        text.push_bytes(bytes);
        text
    }

    /// Copy `s` into new text.
    pub fn from_str_in(allocator: &'a dyn Allocator, s: &str) -> Self {
        Self::from_bytes(allocator, s.as_bytes())
    }

    /// Append one byte.
    pub fn push_byte(&mut self, byte: u8) {
        self.bytes.push(byte);
    }

    /// Append raw bytes.
    pub fn push_bytes(&mut self, bytes: &[u8]) {
        self.bytes.extend_from_slice(bytes);
    }

    /// Append a string slice.
    pub fn push_str(&mut self, s: &str) {
        self.push_bytes(s.as_bytes());
    }

    /// Append the contents of other text.
    pub fn push_text(&mut self, other: &Text<'_>) {
        self.push_bytes(other.as_bytes());
    }

    /// Reserve room for at least `capacity` bytes in total.
    pub fn reserve(&mut self, capacity: usize) {
        self.bytes.reserve(capacity);
    }

    /// Remove all bytes, keeping the capacity.
    pub fn clear(&mut self) {
        self.bytes.clear();
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if the text has no bytes.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Byte capacity of the backing buffer.
    pub fn capacity(&self) -> usize {
        self.bytes.capacity()
    }

    /// The stored bytes.
    pub fn as_bytes(&self) -> &[u8] {
        self.bytes.as_slice()
    }

    /// The stored bytes as `&str`, if they are valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(self.as_bytes()).ok()
    }

    /// The stored bytes as text, replacing invalid UTF-8 sequences.
    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.as_bytes())
    }

    /// The allocator backing this text.
    pub fn allocator(&self) -> &'a dyn Allocator {
        self.bytes.allocator()
    }
}

impl PartialEq<[u8]> for Text<'_> {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_bytes() == other
    }
}

impl PartialEq<str> for Text<'_> {
    fn eq(&self, other: &str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<&str> for Text<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<Text<'_>> for &str {
    fn eq(&self, other: &Text<'_>) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl fmt::Display for Text<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_lossy())
    }
}

impl fmt::Debug for Text<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.to_string_lossy(), f)
    }
}

/// Join `parts` into one text, inserting `separator` between neighbours when
/// given.
///
/// The result is sized up front, so it is allocated exactly once.
pub fn concat<'a>(
    allocator: &'a dyn Allocator,
    parts: &[Text<'_>],
    separator: Option<u8>,
) -> Text<'a> {
    let content: usize = parts.iter().map(Text::len).sum();
    let separators = match separator {
        Some(_) => parts.len().saturating_sub(1),
        None => 0,
    };
    let mut joined = Text::with_capacity(allocator, content + separators);
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            if let Some(sep) = separator {
                joined.push_byte(sep);
            }
        }
        joined.push_text(part);
    }
    joined
}

/// Split `source` on `delimiter` into owned texts.
///
/// Runs of delimiters count as one; empty fields (including leading and
/// trailing ones) are skipped.
pub fn split<'a>(
    allocator: &'a dyn Allocator,
    source: &[u8],
    delimiter: u8,
) -> GrowableBuffer<'a, Text<'a>> {
    let fields = || source.split(move |&b| b == delimiter).filter(|f| !f.is_empty());
    let mut parts = GrowableBuffer::with_capacity(allocator, fields().count());
    for field in fields() {
        parts.push(Text::from_bytes(allocator, field));
    }
    parts
}

/// Split `source` into its non-empty lines.
///
/// Lines end at `\n`; a `\r` right before the `\n` is dropped with it.
pub fn split_lines<'a>(allocator: &'a dyn Allocator, source: &[u8]) -> GrowableBuffer<'a, Text<'a>> {
    let lines = || {
        source
            .split(|&b| b == b'\n')
            .map(|line| line.strip_suffix(b"\r").unwrap_or(line))
            .filter(|line| !line.is_empty())
    };
    let mut out = GrowableBuffer::with_capacity(allocator, lines().count());
    for line in lines() {
        out.push(Text::from_bytes(allocator, line));
    }
    out
}

/// The extension of `file_name`, including the leading `.`, or `None` when
/// there is no `.`.
///
/// ```
/// use quill_alloc::file_extension;
///
/// assert_eq!(file_extension("script.ql"), Some(".ql"));
/// assert_eq!(file_extension("archive.tar.gz"), Some(".gz"));
/// assert_eq!(file_extension("Makefile"), None);
/// ```
pub fn file_extension(file_name: &str) -> Option<&str> {
    file_name.rfind('.').map(|dot| &file_name[dot..])
}

#[cfg(test)]
mod tests;
