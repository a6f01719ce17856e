//! Builtin commands.
//!
//! | Command    | Arity | Result                                           |
//! |------------|-------|--------------------------------------------------|
//! | `help`     | 0     | command list, or one description via `&%name`    |
//! | `exit`     | 0     | stops the session                                |
//! | `quit`     | 0     | alias of `exit`                                  |
//! | `set`      | 2     | binds a variable                                 |
//! | `get`      | 1     | a variable's value                               |
//! | `delete`   | 1     | removes a variable                               |
//! | `list`     | 0     | every binding, sorted by name                    |
//! | `clear`    | 0     | removes every binding                            |
//! | `add`      | 2     | sum of positional and additional operands        |
//! | `multiply` | 2     | product of the two positional operands           |
//! | `print`    | 1     | its argument, unchanged                          |

mod arithmetic;
mod control;
mod variables;

pub use arithmetic::{AddCommand, MultiplyCommand};
pub use control::{ExitCommand, HelpCommand, PrintCommand, HELP_TOPIC_MARKER};
pub use variables::{
    ClearCommand, DeleteCommand, GetCommand, ListCommand, SetCommand, NO_VARIABLES,
};
