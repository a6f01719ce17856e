//! Error types for line evaluation.
//!
//! Two kinds of failure exist and they travel differently:
//!
//! - **Hard errors** ([`EvalError`]) abort the current line. The session
//!   catches them at the line boundary and renders `Error: <message>`; the
//!   next line is still read.
//! - **In-band errors** are ordinary result strings (see
//!   [`variable_not_found`]). They flow into an enclosing nested command like
//!   any other result.
//!
//! Factory functions are the construction API; they fill in both `kind` and
//! `message`.

/// Result of evaluating a line or invoking a command.
pub type EvalResult = Result<String, EvalError>;

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalErrorKind {
    /// A frame names a command that is not registered.
    #[error("unknown command: {name}")]
    UnknownCommand { name: String },

    /// Tokens ran out while a frame still waited for arguments.
    #[error("incomplete command: {command} is missing arguments")]
    IncompleteCommand { command: String },

    /// An arithmetic operand is not a base-10 integer after variable resolution.
    #[error("invalid number: '{value}'")]
    InvalidNumber { value: String },

    /// A command received the wrong number of positional arguments.
    #[error("usage: {usage}")]
    UsageError { usage: String },

    #[error("integer overflow in {operation}")]
    IntegerOverflow { operation: String },
}

/// Evaluation error.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct EvalError {
    /// Structured error category.
    pub kind: EvalErrorKind,
    /// Human-readable message; always `kind.to_string()`.
    pub message: String,
}

impl EvalError {
    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        EvalError { kind, message }
    }
}

impl From<EvalErrorKind> for EvalError {
    fn from(kind: EvalErrorKind) -> Self {
        EvalError::from_kind(kind)
    }
}

// Hard errors

#[cold]
pub fn unknown_command(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnknownCommand {
        name: name.to_string(),
    })
}

#[cold]
pub fn incomplete_command(command: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IncompleteCommand {
        command: command.to_string(),
    })
}

#[cold]
pub fn invalid_number(value: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidNumber {
        value: value.to_string(),
    })
}

#[cold]
pub fn usage_error(usage: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UsageError {
        usage: usage.to_string(),
    })
}

#[cold]
pub fn integer_overflow(operation: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IntegerOverflow {
        operation: operation.to_string(),
    })
}

// In-band errors

/// Prefix shared by every in-band error string.
pub const IN_BAND_PREFIX: &str = "Error: ";

/// In-band result for a lookup of a missing variable.
///
/// Returned as a command *result*, not as an [`EvalError`], so an enclosing
/// command receives it as an ordinary argument.
pub fn variable_not_found(name: &str) -> String {
    format!("{IN_BAND_PREFIX}variable '{name}' not found")
}

/// In-band result for a help lookup of a command that does not exist.
pub fn unknown_help_topic(name: &str) -> String {
    format!("{IN_BAND_PREFIX}unknown command '{name}'")
}
