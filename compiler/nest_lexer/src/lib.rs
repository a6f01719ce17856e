//! Nest Lexer - line tokenizer for the Nest command interpreter.
//!
//! A line is a flat sequence of tokens separated by a single delimiter byte
//! (space by default). There is no quoting and no escaping; runs of
//! delimiters collapse, so no empty token is ever produced.
//!
//! Classification is by leading sigil only, see [`TokenKind`]:
//!
//! ```text
//! add x @get y &4
//! ^^^ ^ ^^^^ ^ ^^
//!  |  |  |   | `-- AdditionalArg("4")
//!  |  |  |   `---- Plain("y")
//!  |  |  `-------- NestedCommand("get")
//!  `--`----------- Plain
//! ```
//!
//! This crate has no `nest_*` dependencies so tools can tokenize lines
//! without pulling in the evaluator.

mod token;

pub use token::{Token, TokenKind, ADDITIONAL_SIGIL, NESTED_SIGIL};

/// Delimiter used by [`tokenize`].
pub const DEFAULT_DELIMITER: u8 = b' ';

/// Split a line on spaces.
///
/// Equivalent to `tokenize_with(line, DEFAULT_DELIMITER)`.
pub fn tokenize(line: &str) -> Vec<Token<'_>> {
    tokenize_with(line, DEFAULT_DELIMITER)
}

/// Split a line on an ASCII delimiter byte, discarding empty tokens.
///
/// The delimiter must be ASCII: an ASCII byte never occurs inside a
/// multi-byte UTF-8 sequence, so every split point is a char boundary.
/// A non-ASCII `delimiter` never matches, so the whole line is one token.
pub fn tokenize_with(line: &str, delimiter: u8) -> Vec<Token<'_>> {
    let bytes = line.as_bytes();
    let mut tokens = Vec::new();

    if !delimiter.is_ascii() {
        if !line.is_empty() {
            tokens.push(Token::new(line));
        }
        return tokens;
    }

    let mut start = 0;
    for end in memchr::memchr_iter(delimiter, bytes) {
        if end > start {
            tokens.push(Token::new(&line[start..end]));
        }
        start = end + 1;
    }
    if start < bytes.len() {
        tokens.push(Token::new(&line[start..]));
    }

    tokens
}
