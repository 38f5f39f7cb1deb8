//! The kinds of errors that can occur while tokenizing or parsing an expression.
//!
//! Every kind is wrapped in a [`bool_error::Error`] together with the span it points at; use
//! [`Error::downcast_ref`](bool_error::Error::downcast_ref) to recover the concrete kind.

use ariadne::Fmt;
use bool_attrs::ErrorKind;
use bool_error::{ErrorKind, EXPR};
use crate::tokenizer::TokenKind;
use std::fmt;

/// What the parser expected to see when it encountered an [`UnexpectedToken`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    /// The start of a unary expression: `~`, `(`, a constant, or a variable.
    UnaryStart,

    /// A closing parenthesis `)`.
    CloseParen,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::UnaryStart => write!(f, "an operand (a variable, `0`, `1`, `~`, or `(`)"),
            Expected::CloseParen => write!(f, "a closing parenthesis `)`"),
        }
    }
}

/// A character outside the accepted alphabet was found in the input.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("invalid character `{}`", character),
    labels = ["this character is not allowed"],
    help = format!(
        "expressions may only contain variables, {}, {}, {}, {}, parentheses, and whitespace",
        "0 1".fg(EXPR),
        "& * ·".fg(EXPR),
        "| + v".fg(EXPR),
        "~ !".fg(EXPR),
    ),
)]
pub struct InvalidCharacter {
    /// The offending character.
    pub character: char,
}

/// The parser found a token that cannot appear at this point of the grammar.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unexpected {}", found),
    labels = [format!("I expected to see {} here", expected)],
    help = match (found, expected) {
        (TokenKind::End, Expected::UnaryStart) => "an operator must be followed by an operand".to_string(),
        (_, Expected::CloseParen) => format!("add a closing parenthesis {}", ")".fg(EXPR)),
        _ => format!("found {} where an operand was needed", found),
    },
)]
pub struct UnexpectedToken {
    /// The token that was found.
    pub found: TokenKind,

    /// What was expected instead.
    pub expected: Expected,
}

/// A complete expression was parsed, but there are tokens left over.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expected end of input",
    labels = [format!("I could not understand the remaining {} here", "expression".fg(EXPR))],
    help = format!("found {} after a complete expression", found),
)]
pub struct TrailingInput {
    /// The first token after the complete expression.
    pub found: TokenKind,
}
