//! Interactive read-eval-print loop.

use std::io::BufRead;

use nest_eval::{EvalResult, Session};

use crate::output::Output;

/// Greeting printed when the loop starts.
pub const BANNER: &str = "Welcome to the Interpreter! Type 'help' for a list of commands.";

/// Prompt shown before each line when none is configured.
pub const DEFAULT_PROMPT: &str = "> ";

/// REPL presentation options.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReplConfig {
    pub prompt: String,
    /// Print [`BANNER`] on start.
    pub banner: bool,
}

impl Default for ReplConfig {
    fn default() -> Self {
        ReplConfig {
            prompt: DEFAULT_PROMPT.to_string(),
            banner: true,
        }
    }
}

impl ReplConfig {
    /// Parse `repl` options: `--quiet`/`-q` and `--prompt=<text>`.
    ///
    /// Returns the offending argument if one is not recognized.
    pub fn from_args(args: &[String]) -> Result<Self, String> {
        let mut config = ReplConfig::default();
        for arg in args {
            if arg == "--quiet" || arg == "-q" {
                config.banner = false;
            } else if let Some(prompt) = arg.strip_prefix("--prompt=") {
                config.prompt = prompt.to_string();
            } else {
                return Err(arg.clone());
            }
        }
        Ok(config)
    }
}

/// Read lines from `input` and evaluate each in `session` until `exit`/`quit`
/// runs or input ends.
///
/// A failing line is reported and the loop continues.
pub fn run_repl<R: BufRead>(
    session: &mut Session,
    config: &ReplConfig,
    mut input: R,
    output: &Output,
) -> std::io::Result<()> {
    if config.banner {
        output.println(BANNER);
    }

    let mut line = String::new();
    while session.is_running() {
        output.print(&config.prompt);
        line.clear();
        if input.read_line(&mut line)? == 0 {
            tracing::debug!("end of input");
            break;
        }
        let result = session.eval_line(line.trim_end_matches(['\n', '\r']));
        report(&result, output);
    }
    Ok(())
}

/// Print a line's result, or `Error: <message>` on the error stream.
///
/// Returns `false` for a failed line. Empty results print nothing.
pub fn report(result: &EvalResult, output: &Output) -> bool {
    match result {
        Ok(text) => {
            if !text.is_empty() {
                output.println(text);
            }
            true
        }
        Err(err) => {
            output.eprintln(&format!("Error: {err}"));
            false
        }
    }
}
