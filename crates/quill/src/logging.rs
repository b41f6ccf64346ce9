//! Tracing subscriber setup.
//!
//! ```text
//! RUST_LOG=debug quill script.ql
//! RUST_LOG=quill_alloc=trace QUILL_LOG_FORMAT=tree quill
//! ```
//!
//! Nothing is installed unless `RUST_LOG` is set. All output goes to stderr
//! so it never mixes with the token listing on stdout.

use std::sync::Once;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter, Registry};

static TRACING_INIT: Once = Once::new();

/// Initialise the global tracing subscriber.
///
/// Safe to call more than once; only the first call has an effect.
/// `QUILL_LOG_FORMAT=tree` selects hierarchical output via `tracing-tree`;
/// anything else gives flat text lines.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        if std::env::var("RUST_LOG").is_err() {
            return;
        }
        let filter = EnvFilter::from_default_env();
        let tree = std::env::var("QUILL_LOG_FORMAT").is_ok_and(|format| format.eq_ignore_ascii_case("tree"));
        if tree {
            let tree_layer = tracing_tree::HierarchicalLayer::default()
                .with_writer(std::io::stderr)
                .with_indent_amount(2)
                .with_indent_lines(true)
                .with_targets(true);
            Registry::default().with(filter).with(tree_layer).init();
        } else {
            Registry::default()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
