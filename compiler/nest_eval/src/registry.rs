//! Command registry for looking up command definitions by name.
//!
//! The registry is the single source of arity: the evaluator asks it how
//! many positional arguments a frame needs before the frame may reduce.

use rustc_hash::FxHashMap;

use crate::builtins;
use crate::command::Command;
use crate::errors::{unknown_command, EvalError};

/// Registry of command definitions.
pub struct CommandRegistry {
    /// Map from command name to definition.
    commands: FxHashMap<&'static str, Box<dyn Command>>,
}

impl CommandRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        CommandRegistry {
            commands: FxHashMap::default(),
        }
    }

    /// Create a registry with every builtin command registered.
    pub fn with_builtins() -> Self {
        let mut registry = CommandRegistry::new();
        register_builtins(&mut registry);
        registry
    }

    /// Register a command definition, replacing any command of the same name.
    pub fn register<C: Command + 'static>(&mut self, command: C) {
        let name = command.name();
        self.commands.insert(name, Box::new(command));
    }

    /// Look up a command by name.
    pub fn get(&self, name: &str) -> Option<&dyn Command> {
        self.commands.get(name).map(|command| &**command)
    }

    /// Look up a command, failing with `UnknownCommand` if absent.
    pub fn lookup(&self, name: &str) -> Result<&dyn Command, EvalError> {
        self.get(name).ok_or_else(|| unknown_command(name))
    }

    /// Positional arity of a command.
    pub fn arity(&self, name: &str) -> Result<usize, EvalError> {
        self.lookup(name).map(|command| command.arity())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    /// All registered command names, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.commands.keys().copied().collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Register all builtin commands.
fn register_builtins(registry: &mut CommandRegistry) {
    // Session control
    registry.register(builtins::HelpCommand);
    registry.register(builtins::ExitCommand::new("exit"));
    registry.register(builtins::ExitCommand::new("quit"));

    // Variables
    registry.register(builtins::SetCommand);
    registry.register(builtins::GetCommand);
    registry.register(builtins::DeleteCommand);
    registry.register(builtins::ListCommand);
    registry.register(builtins::ClearCommand);

    // Arithmetic
    registry.register(builtins::AddCommand);
    registry.register(builtins::MultiplyCommand);

    // Output
    registry.register(builtins::PrintCommand);
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "tests use unwrap for brevity")]
mod tests;
