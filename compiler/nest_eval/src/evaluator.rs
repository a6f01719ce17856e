//! Stack-based reduction of a nested command line.
//!
//! A line is a prefix-notation call tree written without parentheses. Arity
//! decides where each call ends and the `@` sigil decides where a new one
//! starts:
//!
//! ```text
//! add x @get y z
//!
//! token  action                 stack after reduction
//! add    root frame             [add()]
//! x      positional -> add      [add(x)]
//! @get   push frame             [add(x), get()]
//! y      positional -> get      [add(x), get(y)] -> get saturates
//!                               [add(x, <get y>)] -> add saturates -> result
//! z      never read
//! ```
//!
//! # Ordering
//!
//! Each token is appended first and the reduction check runs after it. Two
//! consequences follow and are relied upon:
//!
//! - Evaluation ends as soon as the root frame saturates; any remaining
//!   tokens are never read.
//! - A zero-arity nested command reduces as soon as it is pushed, before
//!   the next positional or nested token is looked at.
//!
//! The one exception is a run of additional arguments: while the *next*
//! token is `&value`, the check is deferred so the value still reaches the
//! frame it follows. `add 2 3 &4` therefore adds all three operands.
//!
//! A zero-arity *root* never saturates through a plain token, so a plain
//! token after it (`list extra`) lands in its positional arguments and the
//! invocation fails with a usage error.

use nest_lexer::{Token, TokenKind};

use crate::command::{Command, CommandContext};
use crate::errors::{incomplete_command, usage_error, EvalError, EvalResult};
use crate::frame::Frame;

/// When a reduction pass may pop the top frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum ReduceWhen {
    /// After a token: the frame holds exactly its arity.
    Saturated,
    /// At end of input: the command needs no positional input at all.
    ZeroArity,
}

/// Evaluates one tokenized line against a session context.
///
/// The frame stack lives only as long as the evaluator; the context's store
/// outlives it.
pub struct Evaluator<'a> {
    ctx: CommandContext<'a>,
    stack: Vec<Frame>,
}

impl<'a> Evaluator<'a> {
    pub fn new(ctx: CommandContext<'a>) -> Self {
        Evaluator {
            ctx,
            stack: Vec::new(),
        }
    }

    /// Evaluate a token sequence to its final output.
    ///
    /// An empty sequence is a no-op producing the empty string. The first
    /// token names the root command verbatim; it is not classified.
    #[tracing::instrument(level = "debug", skip_all, fields(tokens = tokens.len()))]
    pub fn eval(mut self, tokens: &[Token<'_>]) -> EvalResult {
        let Some((root, rest)) = tokens.split_first() else {
            return Ok(String::new());
        };
        self.stack.push(Frame::new(root.raw()));

        for (index, token) in rest.iter().enumerate() {
            self.absorb(*token);
            let next = rest.get(index + 1);
            if next.is_some_and(|next| next.kind() == TokenKind::AdditionalArg) {
                continue;
            }
            if let Some(result) = self.reduce(ReduceWhen::Saturated)? {
                let unread = rest.len() - index - 1;
                if unread > 0 {
                    tracing::debug!(unread, "root saturated, trailing tokens ignored");
                }
                return Ok(result);
            }
        }

        if let Some(result) = self.reduce(ReduceWhen::ZeroArity)? {
            return Ok(result);
        }

        // Report the innermost frame: it is the one still waiting.
        let waiting = self
            .stack
            .last()
            .map_or(root.raw(), |frame| frame.command.as_str());
        Err(incomplete_command(waiting))
    }

    /// Route one token into the frame stack.
    fn absorb(&mut self, token: Token<'_>) {
        match token.kind() {
            TokenKind::NestedCommand => {
                tracing::trace!(command = token.text(), depth = self.stack.len(), "push frame");
                self.stack.push(Frame::new(token.text()));
            }
            TokenKind::AdditionalArg => {
                if let Some(top) = self.stack.last_mut() {
                    top.args.push_additional(token.text().to_string());
                }
            }
            TokenKind::Plain => {
                if let Some(top) = self.stack.last_mut() {
                    top.args.push_positional(token.raw().to_string());
                }
            }
        }
    }

    /// Pop and invoke frames while the top one is ready.
    ///
    /// Each result becomes a positional argument of the new top frame.
    /// Returns `Some(result)` once the root frame has been reduced.
    fn reduce(&mut self, when: ReduceWhen) -> Result<Option<String>, EvalError> {
        let registry = self.ctx.registry();
        while let Some(top) = self.stack.last() {
            let command = registry.lookup(&top.command)?;
            let ready = match when {
                ReduceWhen::Saturated => top.received() == command.arity(),
                ReduceWhen::ZeroArity => command.arity() == 0,
            };
            if !ready {
                break;
            }
            let Some(frame) = self.stack.pop() else {
                break;
            };

            let result = self.invoke(command, &frame)?;
            match self.stack.last_mut() {
                Some(parent) => parent.args.push_positional(result),
                None => return Ok(Some(result)),
            }
        }
        Ok(None)
    }

    fn invoke(&mut self, command: &dyn Command, frame: &Frame) -> EvalResult {
        if frame.received() != command.arity() {
            return Err(usage_error(command.usage()));
        }
        tracing::trace!(
            command = %frame.command,
            additional = frame.args.additional().len(),
            depth = self.stack.len(),
            "reduce frame"
        );
        command.execute(&frame.args, &mut self.ctx)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "tests use unwrap for brevity")]
mod tests;
