//! Nest - interactive interpreter for the nested-command language.
//!
//! The binary is a thin argument parser over this library:
//!
//! - [`run_repl`]: interactive loop over any `BufRead`
//! - [`run_script`]: evaluate a file line by line
//! - [`eval_once`]: evaluate one line
//!
//! All of them write through an [`Output`], so tests capture what a user
//! would see.

mod output;
mod repl;
mod script;

use std::sync::Once;

pub use nest_eval::Session;
pub use output::{BufferOutput, Output, TerminalOutput};
pub use repl::{report, run_repl, ReplConfig, BANNER, DEFAULT_PROMPT};
pub use script::{eval_once, run_script, run_source, ScriptError, ScriptSummary};

static TRACING_INIT: Once = Once::new();

/// Install the diagnostics subscriber.
///
/// Does nothing unless `RUST_LOG` is set, e.g.
/// `RUST_LOG=nest_eval=trace nest eval add 1 @add 2 3`. Safe to call more
/// than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_bracketed_fields(true),
                )
                .with(filter)
                .init();
        }
    });
}
