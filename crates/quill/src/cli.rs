//! Command-line options.
//!
//! ```text
//! quill [OPTIONS] [FILE]
//!
//!   --arena <SIZE>     scan into an arena of SIZE bytes (suffix M or G
//!                      for mega/gigabytes), reset after every input
//!   --color <WHEN>     auto, always or never
//!   --strict-strings   reject string literals missing their closing quote
//!   -h, --help         print usage
//! ```
//!
//! Without `FILE`, lines are read from stdin at a `>> ` prompt.

use std::path::PathBuf;

use quill_alloc::units::{gigabytes_to_bytes, megabytes_to_bytes};
use quill_diagnostic::ColorMode;
use thiserror::Error;

/// Usage text printed for `--help` and after option errors.
pub const USAGE: &str = "\
Usage: quill [OPTIONS] [FILE]

Scan FILE, or lines typed at the prompt, and print the tokens.

Options:
  --arena <SIZE>     Scan into an arena of SIZE bytes, reset after every input
                     (SIZE may end in M or G, e.g. 4M)
  --color <WHEN>     Color diagnostics: auto, always, never (default: auto)
  --strict-strings   Reject string literals missing their closing quote
  -h, --help         Print this help";

/// Parsed command line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Options {
    /// File to scan; `None` runs the prompt loop.
    pub file: Option<PathBuf>,
    /// Arena size in bytes; `None` scans into the heap.
    pub arena_size: Option<usize>,
    pub color: ColorMode,
    pub strict_strings: bool,
    pub show_help: bool,
}

/// Errors from parsing the command line or reading input.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("option `{option}` requires a value")]
    MissingValue { option: &'static str },
    #[error("invalid arena size `{value}` (expected bytes, or a number ending in M or G)")]
    InvalidArenaSize { value: String },
    #[error("invalid color mode `{value}` (expected auto, always or never)")]
    InvalidColor { value: String },
    #[error("unknown option `{option}`")]
    UnknownOption { option: String },
    #[error("unexpected argument `{arg}`: only one input file is accepted")]
    UnexpectedArgument { arg: String },
    #[error("cannot read '{}': {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Parse arguments, excluding the program name.
pub fn parse_args<I, S>(args: I) -> Result<Options, CliError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut options = Options::default();
    let mut args = args.into_iter().map(Into::into);

    while let Some(arg) = args.next() {
        if let Some(value) = arg.strip_prefix("--arena=") {
            options.arena_size = Some(parse_size(value)?);
        } else if arg == "--arena" {
            let value = args.next().ok_or(CliError::MissingValue { option: "--arena" })?;
            options.arena_size = Some(parse_size(&value)?);
        } else if let Some(value) = arg.strip_prefix("--color=") {
            options.color = parse_color(value)?;
        } else if arg == "--color" {
            let value = args.next().ok_or(CliError::MissingValue { option: "--color" })?;
            options.color = parse_color(&value)?;
        } else if arg == "--strict-strings" {
            options.strict_strings = true;
        } else if arg == "-h" || arg == "--help" {
            options.show_help = true;
        } else if arg.starts_with('-') && arg != "-" {
            return Err(CliError::UnknownOption { option: arg });
        } else if options.file.is_none() {
            options.file = Some(PathBuf::from(arg));
        } else {
            return Err(CliError::UnexpectedArgument { arg });
        }
    }
    Ok(options)
}

fn parse_color(value: &str) -> Result<ColorMode, CliError> {
    ColorMode::from_name(value).ok_or_else(|| CliError::InvalidColor {
        value: value.to_string(),
    })
}

/// Parse `123`, `4M`/`4MB` or `1G`/`1GB` into bytes.
pub fn parse_size(value: &str) -> Result<usize, CliError> {
    let invalid = || CliError::InvalidArenaSize {
        value: value.to_string(),
    };
    let upper = value.to_ascii_uppercase();
    let (digits, scale): (&str, fn(usize) -> usize) =
        if let Some(n) = upper.strip_suffix("GB").or_else(|| upper.strip_suffix('G')) {
            (n, gigabytes_to_bytes)
        } else if let Some(n) = upper.strip_suffix("MB").or_else(|| upper.strip_suffix('M')) {
            (n, megabytes_to_bytes)
        } else {
            (upper.as_str(), |bytes| bytes)
        };
    let count: usize = digits.parse().map_err(|_| invalid())?;
    match scale(count) {
        0 => Err(invalid()),
        usize::MAX => Err(invalid()),
        bytes => Ok(bytes),
    }
}
