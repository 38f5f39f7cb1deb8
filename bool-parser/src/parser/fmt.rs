//! Printing of [`Node`]s.
//!
//! The printed form is the canonical text of an expression: it uses `&`, `|`, and `~` regardless
//! of which synonyms were parsed, and inserts only the parentheses needed to parse back into the
//! same tree.

use std::fmt::{self, Display, Formatter};
use super::ast::{Connective, Node};

/// The binding strength of a node when it appears as an operand, from loosest to tightest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// Disjunction, `|`.
    Or = 1,

    /// Conjunction, `&`.
    And = 3,

    /// Negation, `~`.
    Not = 4,

    /// Variables and constants.
    Atom = 5,
}

impl Node {
    /// Returns the precedence of the node's outermost operator.
    pub fn precedence(&self) -> Precedence {
        match self {
            Node::Const(_) | Node::Var(_) => Precedence::Atom,
            Node::Not(_) => Precedence::Not,
            Node::And(_) => Precedence::And,
            Node::Or(_) => Precedence::Or,
        }
    }
}

impl From<Connective> for Precedence {
    fn from(connective: Connective) -> Self {
        match connective {
            Connective::And => Precedence::And,
            Connective::Or => Precedence::Or,
        }
    }
}

/// Writes `operands` joined by the connective's symbol, wrapping each operand that binds looser
/// than the connective.
fn fmt_operands(f: &mut Formatter, connective: Connective, operands: &[Node]) -> fmt::Result {
    let parent = Precedence::from(connective);
    for (i, operand) in operands.iter().enumerate() {
        if i > 0 {
            write!(f, " {} ", connective.symbol())?;
        }
        if operand.precedence() < parent {
            write!(f, "({})", operand)?;
        } else {
            write!(f, "{}", operand)?;
        }
    }
    Ok(())
}

impl Display for Node {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Node::Var(name) => write!(f, "{}", name),
            Node::Const(value) => write!(f, "{}", u8::from(*value)),
            Node::Not(inner) => match inner.as_ref() {
                Node::Var(_) | Node::Const(_) | Node::Not(_) => write!(f, "~{}", inner),
                _ => write!(f, "~({})", inner),
            },
            // empty junctions never leave the simplifier, but still print as their value
            Node::And(operands) if operands.is_empty() => write!(f, "1"),
            Node::Or(operands) if operands.is_empty() => write!(f, "0"),
            Node::And(operands) => fmt_operands(f, Connective::And, operands),
            Node::Or(operands) => fmt_operands(f, Connective::Or, operands),
        }
    }
}

/// Returns the canonical text of the node.
pub fn render(node: &Node) -> String {
    node.to_string()
}
