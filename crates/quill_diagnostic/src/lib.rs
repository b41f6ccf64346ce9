//! Diagnostics for Quill scan failures.
//!
//! A failed scan carries only a byte offset. This crate turns that offset
//! back into something a person can act on: the line it falls on, 1-based
//! line and column numbers, and the offending line echoed with a caret under
//! the failing byte.
//!
//! ```text
//! error: unexpected character `#`
//!   --> script.ql:2:5
//! y = # 2
//!     ^
//! ```
//!
//! - [`locate`]: offset to [`SourceLocation`]
//! - [`Report`]: everything needed to print one failure, color-free
//! - [`TerminalEmitter`]: writes reports with optional ANSI color

mod emitter;
mod location;
mod report;

pub use emitter::{ColorMode, TerminalEmitter};
pub use location::{locate, SourceLocation};
pub use report::Report;
