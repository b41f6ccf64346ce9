//! Quill command-line driver.
//!
//! The binary is a thin shell over this library so that option parsing and
//! line processing can be tested without spawning processes.
//!
//! - [`cli`]: command-line options and their errors
//! - [`driver`]: file mode and the interactive prompt loop
//! - [`init_tracing`]: opt-in logging via `RUST_LOG`

pub mod cli;
pub mod driver;
mod logging;

pub use logging::init_tracing;
