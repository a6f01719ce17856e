//! Command trait and the context commands run in.
//!
//! A command is stateless: everything it reads or mutates arrives through
//! [`CommandArgs`] and [`CommandContext`]. This keeps the session the single
//! owner of mutable state.

use smallvec::SmallVec;

use crate::errors::{usage_error, EvalError, EvalResult};
use crate::registry::CommandRegistry;
use crate::store::VariableStore;

/// Arguments collected for one invocation.
///
/// Positional arguments count toward arity; additional arguments (`&value`)
/// never do. No builtin takes more than two positional arguments, so they
/// are stored inline.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommandArgs {
    positional: SmallVec<[String; 2]>,
    additional: Vec<String>,
}

impl CommandArgs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build arguments from explicit lists.
    pub fn from_parts<P, A>(positional: P, additional: A) -> Self
    where
        P: IntoIterator,
        P::Item: Into<String>,
        A: IntoIterator,
        A::Item: Into<String>,
    {
        CommandArgs {
            positional: positional.into_iter().map(Into::into).collect(),
            additional: additional.into_iter().map(Into::into).collect(),
        }
    }

    pub fn push_positional(&mut self, arg: String) {
        self.positional.push(arg);
    }

    pub fn push_additional(&mut self, arg: String) {
        self.additional.push(arg);
    }

    pub fn positional(&self) -> &[String] {
        &self.positional
    }

    pub fn additional(&self) -> &[String] {
        &self.additional
    }

    /// Borrow exactly `N` positional arguments, or fail with the command's
    /// usage line.
    pub fn exact<const N: usize>(&self, usage: &str) -> Result<&[String; N], EvalError> {
        <&[String; N]>::try_from(self.positional()).map_err(|_| usage_error(usage))
    }
}

/// Mutable view of the session that a command executes against.
pub struct CommandContext<'a> {
    store: &'a mut VariableStore,
    registry: &'a CommandRegistry,
    running: &'a mut bool,
}

impl<'a> CommandContext<'a> {
    pub fn new(
        store: &'a mut VariableStore,
        registry: &'a CommandRegistry,
        running: &'a mut bool,
    ) -> Self {
        CommandContext {
            store,
            registry,
            running,
        }
    }

    pub fn store(&self) -> &VariableStore {
        &*self.store
    }

    pub fn store_mut(&mut self) -> &mut VariableStore {
        &mut *self.store
    }

    /// The registry this line is evaluated against.
    ///
    /// Returned with the context's full lifetime so a caller can hold a
    /// command definition while passing `&mut self` to it.
    pub fn registry(&self) -> &'a CommandRegistry {
        self.registry
    }

    /// Ask the session to stop reading lines after this one.
    pub fn request_exit(&mut self) {
        tracing::debug!("exit requested");
        *self.running = false;
    }

    pub fn is_running(&self) -> bool {
        *self.running
    }
}

/// A registered command.
///
/// Implementors must be stateless. `execute` may assume the evaluator has
/// checked `args.positional().len() == self.arity()`, but should still
/// reject a mismatch through [`CommandArgs::exact`] rather than index.
pub trait Command: Send + Sync {
    /// Name the command is invoked by (e.g. "set").
    fn name(&self) -> &'static str;

    /// Number of positional arguments required before the command runs.
    fn arity(&self) -> usize;

    /// One-line usage, e.g. `set [varName] [value]`.
    fn usage(&self) -> &'static str;

    /// Help text shown by `help &%name`.
    fn description(&self) -> &'static str;

    /// Run the command, producing its result string.
    fn execute(&self, args: &CommandArgs, ctx: &mut CommandContext<'_>) -> EvalResult;
}
