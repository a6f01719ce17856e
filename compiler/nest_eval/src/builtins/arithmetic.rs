//! Integer arithmetic: `add` and `multiply`.
//!
//! Each operand is resolved through the store first (a variable name yields
//! its value, anything else is taken literally), then parsed as a base-10
//! `i64`. Parsing is strict: surrounding text such as `5abc` is rejected.

use crate::command::{Command, CommandArgs, CommandContext};
use crate::errors::{integer_overflow, invalid_number, EvalError, EvalResult};
use crate::store::VariableStore;

/// Resolve and parse one operand.
fn operand(store: &VariableStore, token: &str) -> Result<i64, EvalError> {
    let resolved = store.resolve(token);
    resolved.parse().map_err(|_| invalid_number(resolved))
}

/// `add` sums both positional operands, then every additional operand.
pub struct AddCommand;

impl Command for AddCommand {
    fn name(&self) -> &'static str {
        "add"
    }

    fn arity(&self) -> usize {
        2
    }

    fn usage(&self) -> &'static str {
        "add [var1] [var2] &..."
    }

    fn description(&self) -> &'static str {
        "Adds two or more numeric values. Operands may be variable names or integers."
    }

    fn execute(&self, args: &CommandArgs, ctx: &mut CommandContext<'_>) -> EvalResult {
        let positional = args.exact::<2>(self.usage())?;
        let store = ctx.store();
        let mut total: i64 = 0;
        for token in positional.iter().chain(args.additional()) {
            total = total
                .checked_add(operand(store, token)?)
                .ok_or_else(|| integer_overflow("add"))?;
        }
        Ok(total.to_string())
    }
}

/// `multiply` uses exactly its two positional operands; additional
/// operands are ignored.
pub struct MultiplyCommand;

impl Command for MultiplyCommand {
    fn name(&self) -> &'static str {
        "multiply"
    }

    fn arity(&self) -> usize {
        2
    }

    fn usage(&self) -> &'static str {
        "multiply [var1] [var2]"
    }

    fn description(&self) -> &'static str {
        "Multiplies two numeric variables or values."
    }

    fn execute(&self, args: &CommandArgs, ctx: &mut CommandContext<'_>) -> EvalResult {
        let [lhs, rhs] = args.exact::<2>(self.usage())?;
        let store = ctx.store();
        let product = operand(store, lhs)?
            .checked_mul(operand(store, rhs)?)
            .ok_or_else(|| integer_overflow("multiply"))?;
        Ok(product.to_string())
    }
}
