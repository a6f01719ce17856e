//! Non-interactive runners: whole files and single lines.

use std::path::Path;

use nest_eval::Session;

use crate::output::Output;
use crate::repl::report;

/// Failure to load a script.
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("cannot find file '{path}'")]
    NotFound { path: String },

    #[error("permission denied reading '{path}'")]
    PermissionDenied { path: String },

    #[error("'{path}' contains invalid UTF-8 data")]
    InvalidUtf8 { path: String },

    #[error("error reading '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl ScriptError {
    fn from_io(path: &Path, err: std::io::Error) -> Self {
        let path = path.display().to_string();
        match err.kind() {
            std::io::ErrorKind::NotFound => ScriptError::NotFound { path },
            std::io::ErrorKind::PermissionDenied => ScriptError::PermissionDenied { path },
            std::io::ErrorKind::InvalidData => ScriptError::InvalidUtf8 { path },
            _ => ScriptError::Io { path, source: err },
        }
    }
}

/// What a script run did.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ScriptSummary {
    /// Lines evaluated, including failed ones.
    pub evaluated: usize,
    pub failed: usize,
    /// `exit` or `quit` ended the run before the last line.
    pub stopped: bool,
}

impl ScriptSummary {
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }
}

/// Evaluate every line of `source` in `session`.
///
/// Errors are reported as `line N: Error: <message>`. Evaluation stops once
/// the session is no longer running.
pub fn run_source(session: &mut Session, source: &str, output: &Output) -> ScriptSummary {
    let mut summary = ScriptSummary::default();
    let mut lines = source.lines().enumerate();
    for (index, line) in lines.by_ref() {
        summary.evaluated += 1;
        match session.eval_line(line) {
            Ok(text) => {
                if !text.is_empty() {
                    output.println(&text);
                }
            }
            Err(err) => {
                summary.failed += 1;
                output.eprintln(&format!("line {}: Error: {err}", index + 1));
            }
        }
        if !session.is_running() {
            break;
        }
    }
    summary.stopped = lines.next().is_some();
    tracing::debug!(?summary, "script finished");
    summary
}

/// Load and run a script file in a fresh session.
pub fn run_script(path: &Path, output: &Output) -> Result<ScriptSummary, ScriptError> {
    let source = std::fs::read_to_string(path).map_err(|err| ScriptError::from_io(path, err))?;
    let mut session = Session::new();
    Ok(run_source(&mut session, &source, output))
}

/// Evaluate a single line in a fresh session. Returns `false` on failure.
pub fn eval_once(line: &str, output: &Output) -> bool {
    let mut session = Session::new();
    report(&session.eval_line(line), output)
}
