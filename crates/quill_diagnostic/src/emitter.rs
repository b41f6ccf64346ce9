//! Report rendering for terminals: an `error:` header, the position, the
//! failing line and a caret, colored with ANSI escapes when enabled.

use std::io::{self, Write};

use crate::Report;

/// Escape sequences for the parts of a report that get color.
mod colors {
    /// The `error` label and the caret.
    pub const FAILURE: &str = "\x1b[1;31m";
    /// The message after the label.
    pub const MESSAGE: &str = "\x1b[1m";
    /// The `-->` in front of the position.
    pub const POINTER: &str = "\x1b[1;34m";
    pub const RESET: &str = "\x1b[0m";
}

/// When reports are written with color (`--color`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Color only when the output is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Whether color is on for an output that is (or is not) a terminal.
    pub fn enabled(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }

    /// Parse a `--color` value: `auto`, `always` or `never`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }
}

/// Writes [`Report`]s and the closing failure count to a terminal stream.
///
/// Write errors are dropped; a report that cannot be printed has nowhere
/// else to go.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
}

impl<W: Write> TerminalEmitter<W> {
    /// `is_tty` only matters for [`ColorMode::Auto`].
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.enabled(is_tty),
        }
    }

    /// Returns `true` if ANSI colors are written.
    pub fn uses_colors(&self) -> bool {
        self.colors
    }

    /// Write text with optional ANSI color codes.
    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    /// Emit one report: header, position, the failing line and a caret.
    pub fn emit(&mut self, report: &Report) {
        self.write_colored("error", colors::FAILURE);
        if self.colors {
            let _ = writeln!(self.writer, "{}: {}{}", colors::MESSAGE, report.message, colors::RESET);
        } else {
            let _ = writeln!(self.writer, ": {}", report.message);
        }

        let _ = write!(self.writer, "  ");
        self.write_colored("-->", colors::POINTER);
        let _ = writeln!(self.writer, " {}", report.position());

        let _ = writeln!(self.writer, "{}", report.line_text);
        let _ = write!(self.writer, "{}", report.caret_indent);
        self.write_colored("^", colors::FAILURE);
        let _ = writeln!(self.writer);
    }

    /// Emit a closing summary line; nothing when there were no errors.
    pub fn emit_summary(&mut self, error_count: usize) {
        if error_count == 0 {
            return;
        }
        self.write_colored("error", colors::FAILURE);
        let _ = writeln!(
            self.writer,
            ": {error_count} {} failed to scan",
            if error_count == 1 { "input" } else { "inputs" }
        );
    }

    /// Flush any buffered output.
    pub fn flush(&mut self) {
        let _ = self.writer.flush();
    }
}

impl TerminalEmitter<io::Stderr> {
    /// Emitter writing to the process stderr.
    pub fn stderr(mode: ColorMode, is_tty: bool) -> Self {
        Self::with_color_mode(io::stderr(), mode, is_tty)
    }
}
