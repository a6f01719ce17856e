//! Invocation frames.

use crate::command::CommandArgs;

/// An in-progress invocation awaiting enough positional arguments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    /// Command name, sigil already stripped.
    pub command: String,
    pub args: CommandArgs,
}

impl Frame {
    pub fn new(command: impl Into<String>) -> Self {
        Frame {
            command: command.into(),
            args: CommandArgs::new(),
        }
    }

    /// Number of positional arguments received so far.
    #[inline]
    pub fn received(&self) -> usize {
        self.args.positional().len()
    }
}
