//! Token classification.
//!
//! A token's role is decided by its first byte alone. The sigil is not part
//! of the token's payload: `@get` names the command `get`, `&4` carries the
//! value `4`.

use std::fmt;

/// Sigil that opens a nested command (`@get x`).
pub const NESTED_SIGIL: char = '@';

/// Sigil that marks an additional argument (`&4`).
pub const ADDITIONAL_SIGIL: char = '&';

/// Syntactic role of a token.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `@name`: opens a new invocation frame.
    NestedCommand,
    /// `&value`: appended to the innermost frame's additional arguments.
    AdditionalArg,
    /// Anything else: a positional argument.
    Plain,
}

impl TokenKind {
    /// Classify a raw token by its leading character.
    #[inline]
    pub fn classify(raw: &str) -> Self {
        match raw.as_bytes().first() {
            Some(b'@') => TokenKind::NestedCommand,
            Some(b'&') => TokenKind::AdditionalArg,
            _ => TokenKind::Plain,
        }
    }

    /// Length in bytes of the sigil carried by this kind.
    #[inline]
    fn sigil_len(self) -> usize {
        match self {
            TokenKind::NestedCommand | TokenKind::AdditionalArg => 1,
            TokenKind::Plain => 0,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::NestedCommand => write!(f, "nested command"),
            TokenKind::AdditionalArg => write!(f, "additional argument"),
            TokenKind::Plain => write!(f, "plain"),
        }
    }
}

/// A non-empty slice of the input line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token<'src> {
    raw: &'src str,
    kind: TokenKind,
}

impl<'src> Token<'src> {
    /// Wrap a raw token, classifying it.
    pub fn new(raw: &'src str) -> Self {
        Token {
            raw,
            kind: TokenKind::classify(raw),
        }
    }

    /// The token exactly as it appeared in the line.
    #[inline]
    pub fn raw(&self) -> &'src str {
        self.raw
    }

    /// The token with its sigil stripped.
    ///
    /// A bare sigil (`@` or `&` on its own) yields the empty string.
    #[inline]
    pub fn text(&self) -> &'src str {
        // Sigils are ASCII, so slicing past them stays on a char boundary.
        &self.raw[self.kind.sigil_len()..]
    }

    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.raw)
    }
}
