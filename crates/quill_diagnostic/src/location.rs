//! Byte offset to line/column lookup.

/// Where an offset falls in its source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SourceLocation {
    /// 1-based line number.
    pub line: usize,
    /// 1-based column, counted in bytes from the start of the line.
    pub column: usize,
    /// Byte offset of the first byte of the line.
    pub line_start: usize,
    /// Byte offset one past the last byte of the line, excluding the line
    /// terminator (`\n` or `\r\n`).
    pub line_end: usize,
}

impl SourceLocation {
    /// Byte range of the line's content.
    pub fn line_range(&self) -> std::ops::Range<usize> {
        self.line_start..self.line_end
    }
}

/// Find the line and column of `offset` in `source`.
///
/// Offsets past the end are clamped to the end, which is where scan
/// failures at end of input point.
pub fn locate(source: &[u8], offset: usize) -> SourceLocation {
    let offset = offset.min(source.len());
    let before = &source[..offset];
    let line_start = memchr::memrchr(b'\n', before).map_or(0, |nl| nl + 1);
    let line = memchr::memchr_iter(b'\n', before).count() + 1;
    let mut line_end = memchr::memchr(b'\n', &source[offset..]).map_or(source.len(), |nl| offset + nl);
    if line_end > line_start && source[line_end - 1] == b'\r' {
        line_end -= 1;
    }
    SourceLocation {
        line,
        column: offset - line_start + 1,
        line_start,
        line_end: line_end.max(offset),
    }
}
