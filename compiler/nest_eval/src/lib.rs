//! Nest Eval - evaluator for the Nest command language.
//!
//! A line is evaluated by pushing one [`Frame`] per command and reducing
//! frames as soon as they hold as many positional arguments as their
//! command's arity. A reduced frame's result becomes a positional argument
//! of the frame below it; reducing the root produces the line's output.
//!
//! # Architecture
//!
//! - [`Session`]: owns the store and registry, evaluates one line at a time
//! - [`Evaluator`]: the frame stack for a single line
//! - [`CommandRegistry`]: name to [`Command`] lookup, the source of arity
//! - [`VariableStore`]: string variables shared by every line of a session
//! - [`builtins`]: the commands registered by default
//!
//! # Errors
//!
//! Failures that abort a line are [`EvalError`]s. Lookups that find nothing
//! (`get` of an unknown variable, `help &%nope`) instead *return* a string
//! starting with [`IN_BAND_PREFIX`], which flows onward like any other value.

pub mod builtins;
mod command;
pub mod errors;
mod evaluator;
mod frame;
mod registry;
mod session;
mod store;

pub use command::{Command, CommandArgs, CommandContext};
pub use evaluator::Evaluator;
pub use frame::Frame;
pub use registry::CommandRegistry;
pub use session::Session;
pub use store::VariableStore;

// Re-export error types and constructors (canonical path is nest_eval::errors::*)
pub use errors::{
    // Hard failures
    incomplete_command, integer_overflow, invalid_number, unknown_command, usage_error,
    // In-band results
    unknown_help_topic, variable_not_found, IN_BAND_PREFIX,
    // Types
    EvalError, EvalErrorKind, EvalResult,
};
