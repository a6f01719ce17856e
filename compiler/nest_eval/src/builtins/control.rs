//! Session commands: `help`, `exit`/`quit`, `print`.

use std::fmt::Write as _;

use crate::command::{Command, CommandArgs, CommandContext};
use crate::errors::{unknown_help_topic, EvalResult};

/// Marks an additional argument as a help topic (`help &%set`).
pub const HELP_TOPIC_MARKER: char = '%';

/// `help` lists every registered command, or describes one when its first
/// additional argument is `%name`.
pub struct HelpCommand;

impl Command for HelpCommand {
    fn name(&self) -> &'static str {
        "help"
    }

    fn arity(&self) -> usize {
        0
    }

    fn usage(&self) -> &'static str {
        "help &%[command]"
    }

    fn description(&self) -> &'static str {
        "Displays a list of available commands, or detailed information about \
         one command when given as &%command."
    }

    fn execute(&self, args: &CommandArgs, ctx: &mut CommandContext<'_>) -> EvalResult {
        args.exact::<0>(self.usage())?;
        let registry = ctx.registry();

        let topic = args
            .additional()
            .first()
            .and_then(|arg| arg.strip_prefix(HELP_TOPIC_MARKER));
        if let Some(topic) = topic {
            return Ok(match registry.get(topic) {
                Some(command) => {
                    format!("Usage: {}\n{}", command.usage(), command.description())
                }
                None => unknown_help_topic(topic),
            });
        }

        let mut text = String::from("Available commands:");
        for name in registry.names() {
            let _ = write!(text, "\n - {name}");
        }
        Ok(text)
    }
}

/// `exit` and `quit` clear the session's running flag.
///
/// The line still produces a result; the session stops before reading the
/// next one.
pub struct ExitCommand {
    name: &'static str,
}

impl ExitCommand {
    pub fn new(name: &'static str) -> Self {
        ExitCommand { name }
    }
}

impl Command for ExitCommand {
    fn name(&self) -> &'static str {
        self.name
    }

    fn arity(&self) -> usize {
        0
    }

    fn usage(&self) -> &'static str {
        self.name
    }

    fn description(&self) -> &'static str {
        "Exits the interpreter."
    }

    fn execute(&self, args: &CommandArgs, ctx: &mut CommandContext<'_>) -> EvalResult {
        args.exact::<0>(self.usage())?;
        ctx.request_exit();
        Ok("Exiting program...".to_string())
    }
}

/// `print` echoes its argument, which is most useful with a nested command
/// (`print @get x`).
pub struct PrintCommand;

impl Command for PrintCommand {
    fn name(&self) -> &'static str {
        "print"
    }

    fn arity(&self) -> usize {
        1
    }

    fn usage(&self) -> &'static str {
        "print [value]"
    }

    fn description(&self) -> &'static str {
        "Prints a value or the value returned from a nested command."
    }

    fn execute(&self, args: &CommandArgs, _ctx: &mut CommandContext<'_>) -> EvalResult {
        let [value] = args.exact::<1>(self.usage())?;
        Ok(value.clone())
    }
}
