//! A running interpreter session.

use nest_lexer::tokenize;

use crate::command::CommandContext;
use crate::errors::EvalResult;
use crate::evaluator::Evaluator;
use crate::registry::CommandRegistry;
use crate::store::VariableStore;

/// State that persists across lines: the variable store, the command
/// registry, and whether the session should keep reading input.
///
/// A failed line leaves the store as the line left it; nothing is rolled
/// back.
pub struct Session {
    registry: CommandRegistry,
    store: VariableStore,
    running: bool,
}

impl Session {
    /// Create a session with the builtin commands and an empty store.
    pub fn new() -> Self {
        Self::with_registry(CommandRegistry::with_builtins())
    }

    /// Create a session over a caller-supplied registry.
    pub fn with_registry(registry: CommandRegistry) -> Self {
        Session {
            registry,
            store: VariableStore::new(),
            running: true,
        }
    }

    /// Tokenize and evaluate one input line.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn eval_line(&mut self, line: &str) -> EvalResult {
        let tokens = tokenize(line);
        let ctx = CommandContext::new(&mut self.store, &self.registry, &mut self.running);
        Evaluator::new(ctx).eval(&tokens)
    }

    /// `false` once `exit` or `quit` has run.
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn store(&self) -> &VariableStore {
        &self.store
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
