//! File mode and the interactive prompt loop.
//!
//! Successful scans print one token per line to `out`:
//!
//! ```text
//! 0..1      identifier  x
//! 2..3      symbol      =
//! 4..7      number      3.5
//! ```
//!
//! Failures go to the diagnostic emitter as a caret report. In file mode a
//! failure makes the process exit with status 1; at the prompt the loop just
//! carries on with the next line.

use std::io::{self, BufRead, Read, Write};
use std::path::Path;

use quill_alloc::units::bytes_to_megabytes;
use quill_alloc::{Allocator, ArenaAllocator, HeapAllocator};
use quill_diagnostic::{Report, TerminalEmitter};
use quill_lexer::{Lexer, LexerConfig, TokenList, UnterminatedStrings};

use crate::cli::{CliError, Options};

/// Text printed before each interactive line.
pub const PROMPT: &str = ">> ";

/// Build the scanner the options ask for.
pub fn lexer_for(options: &Options) -> Lexer {
    let policy = if options.strict_strings {
        UnterminatedStrings::Reject
    } else {
        UnterminatedStrings::Accept
    };
    Lexer::new(LexerConfig::default().with_unterminated_strings(policy))
}

/// Build the allocator the options ask for: an arena of the requested size,
/// or the heap.
pub fn allocator_for(options: &Options) -> Box<dyn Allocator> {
    match options.arena_size {
        Some(size) => {
            tracing::debug!(
                bytes = size,
                megabytes = bytes_to_megabytes(size),
                "scanning into arena"
            );
            Box::new(ArenaAllocator::new(size))
        }
        None => Box::new(HeapAllocator::new()),
    }
}

/// Scan one input and print either its tokens or a caret report.
///
/// Returns `true` if the scan succeeded. Everything allocated for the scan is
/// released before returning, so the caller may reset the allocator.
pub fn process_input<W: Write, E: Write>(
    lexer: &Lexer,
    allocator: &dyn Allocator,
    source: &[u8],
    origin: Option<&str>,
    out: &mut W,
    emitter: &mut TerminalEmitter<E>,
) -> Result<bool, CliError> {
    match lexer.lex(allocator, source) {
        Ok(tokens) => {
            print_tokens(&tokens, out)?;
            Ok(true)
        }
        Err(error) => {
            let mut report = Report::new(source, &error);
            if let Some(origin) = origin {
                report = report.with_origin(origin);
            }
            emitter.emit(&report);
            emitter.flush();
            Ok(false)
        }
    }
}

fn print_tokens<W: Write>(tokens: &TokenList<'_>, out: &mut W) -> io::Result<()> {
    for (token, span) in tokens.iter() {
        writeln!(out, "{:<9} {:<11} {token}", span.to_string(), token.kind_name())?;
    }
    out.flush()
}

/// Scan a whole file, or all of stdin when `path` is `-`. Returns `true` if
/// it scanned cleanly.
#[tracing::instrument(level = "debug", skip_all, fields(path = %path.display()))]
pub fn run_file<W: Write, E: Write>(
    options: &Options,
    path: &Path,
    out: &mut W,
    emitter: &mut TerminalEmitter<E>,
) -> Result<bool, CliError> {
    let source = read_source(path).map_err(|source| CliError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(bytes = source.len(), "input read");
    let lexer = lexer_for(options);
    let allocator = allocator_for(options);
    let origin = path.display().to_string();
    process_input(&lexer, allocator.as_ref(), &source, Some(&origin), out, emitter)
}

fn read_source(path: &Path) -> io::Result<Vec<u8>> {
    if path == Path::new("-") {
        let mut source = Vec::new();
        io::stdin().lock().read_to_end(&mut source)?;
        Ok(source)
    } else {
        std::fs::read(path)
    }
}

/// Read lines from `input` until end of input, scanning each one.
///
/// The allocator is reset after every line, so an arena only ever needs to
/// hold one line's tokens. Returns the number of lines that failed.
pub fn run_prompt<R: BufRead, W: Write, E: Write>(
    options: &Options,
    mut input: R,
    out: &mut W,
    emitter: &mut TerminalEmitter<E>,
) -> Result<usize, CliError> {
    let lexer = lexer_for(options);
    let mut allocator = allocator_for(options);
    let mut line = Vec::new();
    let mut failures = 0;

    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;
        line.clear();
        if input.read_until(b'\n', &mut line)? == 0 {
            writeln!(out)?;
            break;
        }
        let text = trim_line_ending(&line);
        if text.is_empty() {
            continue;
        }
        if !process_input(&lexer, allocator.as_ref(), text, None, out, emitter)? {
            failures += 1;
        }
        allocator.reset();
    }
    tracing::debug!(failures, "prompt closed");
    Ok(failures)
}

/// Strip a trailing `\n` or `\r\n`.
fn trim_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
