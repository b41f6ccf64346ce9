//! Quill CLI
//!
//! Scans a file, or lines typed at a prompt, and prints the tokens.

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use quill::cli::{parse_args, CliError, Options, USAGE};
use quill::driver::{run_file, run_prompt};
use quill::init_tracing;
use quill_diagnostic::TerminalEmitter;

fn main() -> ExitCode {
    init_tracing();

    let options = match parse_args(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!();
            eprintln!("{USAGE}");
            return ExitCode::from(2);
        }
    };
    if options.show_help {
        println!("{USAGE}");
        return ExitCode::SUCCESS;
    }

    match run(&options) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Returns `Ok(false)` when file mode hit a scan failure.
fn run(options: &Options) -> Result<bool, CliError> {
    let mut emitter = TerminalEmitter::stderr(options.color, io::stderr().is_terminal());
    let mut out = io::stdout().lock();

    match &options.file {
        Some(path) => run_file(options, path, &mut out, &mut emitter),
        None => {
            let failures = run_prompt(options, io::stdin().lock(), &mut out, &mut emitter)?;
            emitter.emit_summary(failures);
            Ok(true)
        }
    }
}
