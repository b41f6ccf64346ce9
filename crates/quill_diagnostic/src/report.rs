//! Color-free description of one scan failure.

use std::fmt;

use quill_lexer::LexError;

use crate::location::{locate, SourceLocation};

/// A scan failure resolved against its source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    /// What went wrong, without the offset.
    pub message: String,
    pub location: SourceLocation,
    /// File name or other label for the source, if it has one.
    pub origin: Option<String>,
    /// The failing line, with invalid UTF-8 replaced.
    pub line_text: String,
    /// Whitespace that puts a caret under the failing byte when printed
    /// below `line_text`. Tabs in the line are kept as tabs.
    pub caret_indent: String,
}

impl Report {
    /// Resolve `error` against the `source` it was produced from.
    pub fn new(source: &[u8], error: &LexError) -> Self {
        let location = locate(source, error.offset);
        let line = &source[location.line_range()];
        let prefix = &source[location.line_start..location.line_start + location.column - 1];
        Self {
            message: error.kind.to_string(),
            location,
            origin: None,
            line_text: String::from_utf8_lossy(line).into_owned(),
            caret_indent: indent_for(prefix),
        }
    }

    /// Attach a file name or similar label.
    #[must_use]
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    /// `origin:line:column`, or `line:column` without an origin.
    pub fn position(&self) -> String {
        let SourceLocation { line, column, .. } = self.location;
        match &self.origin {
            Some(origin) => format!("{origin}:{line}:{column}"),
            None => format!("{line}:{column}"),
        }
    }

    /// The caret line: indent followed by `^`.
    pub fn caret_line(&self) -> String {
        format!("{}^", self.caret_indent)
    }
}

/// One blank per character of `prefix`, keeping tabs so the caret lines up
/// however the terminal expands them.
fn indent_for(prefix: &[u8]) -> String {
    String::from_utf8_lossy(prefix)
        .chars()
        .map(|c| if c == '\t' { '\t' } else { ' ' })
        .collect()
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "error: {}", self.message)?;
        writeln!(f, "  --> {}", self.position())?;
        writeln!(f, "{}", self.line_text)?;
        write!(f, "{}", self.caret_line())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "test assertions use unwrap for clarity")]
mod tests;
