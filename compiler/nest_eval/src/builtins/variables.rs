//! Variable store commands: `set`, `get`, `delete`, `list`, `clear`.
//!
//! Missing variables are reported in-band so the result can still feed an
//! enclosing nested command.

use crate::command::{Command, CommandArgs, CommandContext};
use crate::errors::{variable_not_found, EvalResult};

/// Returned by `list` when the store is empty.
pub const NO_VARIABLES: &str = "No variables stored.";

pub struct SetCommand;

impl Command for SetCommand {
    fn name(&self) -> &'static str {
        "set"
    }

    fn arity(&self) -> usize {
        2
    }

    fn usage(&self) -> &'static str {
        "set [varName] [value]"
    }

    fn description(&self) -> &'static str {
        "Sets a variable with the given name and value."
    }

    fn execute(&self, args: &CommandArgs, ctx: &mut CommandContext<'_>) -> EvalResult {
        let [name, value] = args.exact::<2>(self.usage())?;
        ctx.store_mut().set(name.as_str(), value.as_str());
        Ok(format!("Set {name} to {value}"))
    }
}

pub struct GetCommand;

impl Command for GetCommand {
    fn name(&self) -> &'static str {
        "get"
    }

    fn arity(&self) -> usize {
        1
    }

    fn usage(&self) -> &'static str {
        "get [varName]"
    }

    fn description(&self) -> &'static str {
        "Retrieves the value of the specified variable."
    }

    fn execute(&self, args: &CommandArgs, ctx: &mut CommandContext<'_>) -> EvalResult {
        let [name] = args.exact::<1>(self.usage())?;
        Ok(match ctx.store().get(name) {
            Some(value) => value.to_string(),
            None => variable_not_found(name),
        })
    }
}

pub struct DeleteCommand;

impl Command for DeleteCommand {
    fn name(&self) -> &'static str {
        "delete"
    }

    fn arity(&self) -> usize {
        1
    }

    fn usage(&self) -> &'static str {
        "delete [varName]"
    }

    fn description(&self) -> &'static str {
        "Deletes the specified variable."
    }

    fn execute(&self, args: &CommandArgs, ctx: &mut CommandContext<'_>) -> EvalResult {
        let [name] = args.exact::<1>(self.usage())?;
        Ok(match ctx.store_mut().remove(name) {
            Some(_) => format!("Deleted variable: {name}"),
            None => variable_not_found(name),
        })
    }
}

pub struct ListCommand;

impl Command for ListCommand {
    fn name(&self) -> &'static str {
        "list"
    }

    fn arity(&self) -> usize {
        0
    }

    fn usage(&self) -> &'static str {
        "list"
    }

    fn description(&self) -> &'static str {
        "Lists all stored variables and their values."
    }

    fn execute(&self, args: &CommandArgs, ctx: &mut CommandContext<'_>) -> EvalResult {
        args.exact::<0>(self.usage())?;
        let store = ctx.store();
        if store.is_empty() {
            return Ok(NO_VARIABLES.to_string());
        }
        let lines: Vec<String> = store
            .sorted_entries()
            .into_iter()
            .map(|(name, value)| format!("{name} -> {value}"))
            .collect();
        Ok(lines.join("\n"))
    }
}

pub struct ClearCommand;

impl Command for ClearCommand {
    fn name(&self) -> &'static str {
        "clear"
    }

    fn arity(&self) -> usize {
        0
    }

    fn usage(&self) -> &'static str {
        "clear"
    }

    fn description(&self) -> &'static str {
        "Clears all stored variables."
    }

    fn execute(&self, args: &CommandArgs, ctx: &mut CommandContext<'_>) -> EvalResult {
        args.exact::<0>(self.usage())?;
        ctx.store_mut().clear();
        Ok("Cleared all variables.".to_string())
    }
}
