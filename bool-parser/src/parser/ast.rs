//! The tree representation of a boolean expression.
//!
//! A [`Node`] is an immutable value: every transformation builds a new tree. [`Node::And`] and
//! [`Node::Or`] are **n-ary** and flattened, so `a & (b & c)` is a single [`Node::And`] with three
//! operands. Later stages rely on this to see all siblings of an operator at once.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A boolean expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Node {
    /// A constant, `0` or `1`.
    Const(bool),

    /// A variable, such as `A` or `x_1`.
    Var(String),

    /// The negation of an expression.
    Not(Box<Node>),

    /// The conjunction of every operand.
    And(Vec<Node>),

    /// The disjunction of every operand.
    Or(Vec<Node>),
}

impl Node {
    /// Creates a [`Node::Var`] with the given name.
    pub fn var(name: impl Into<String>) -> Self {
        Node::Var(name.into())
    }

    /// Creates a [`Node::Not`] around the given node.
    #[allow(clippy::should_implement_trait)]
    pub fn not(node: Node) -> Self {
        Node::Not(Box::new(node))
    }

    /// Creates a flattened [`Node::And`] from the given operands.
    pub fn and(operands: impl IntoIterator<Item = Node>) -> Self {
        Connective::And.build(operands)
    }

    /// Creates a flattened [`Node::Or`] from the given operands.
    pub fn or(operands: impl IntoIterator<Item = Node>) -> Self {
        Connective::Or.build(operands)
    }

    /// If this node is a [`Node::And`] or [`Node::Or`], returns its connective and operands.
    pub fn as_junction(&self) -> Option<(Connective, &[Node])> {
        match self {
            Node::And(operands) => Some((Connective::And, operands)),
            Node::Or(operands) => Some((Connective::Or, operands)),
            _ => None,
        }
    }

    /// Returns the operands of this node if it is a junction of the given connective.
    pub fn operands_of(&self, connective: Connective) -> Option<&[Node]> {
        self.as_junction()
            .filter(|(c, _)| *c == connective)
            .map(|(_, operands)| operands)
    }

    /// If this node is a [`Node::Not`], returns the negated node.
    pub fn as_not(&self) -> Option<&Node> {
        match self {
            Node::Not(inner) => Some(inner),
            _ => None,
        }
    }

    /// Returns true if this node is the given constant.
    pub fn is_const(&self, value: bool) -> bool {
        matches!(self, Node::Const(v) if *v == value)
    }

}

/// One of the two associative, commutative connectives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Connective {
    /// Conjunction, `&`.
    And,

    /// Disjunction, `|`.
    Or,
}

impl Connective {
    /// The constant that can be dropped from this connective's operands without changing its
    /// value (`1` for `&`, `0` for `|`). It is also the value of the connective with no operands.
    pub fn identity(self) -> bool {
        self == Connective::And
    }

    /// The constant that forces the whole connective to its own value (`0` for `&`, `1` for `|`).
    pub fn annihilator(self) -> bool {
        !self.identity()
    }

    /// The other connective.
    pub fn dual(self) -> Self {
        match self {
            Connective::And => Connective::Or,
            Connective::Or => Connective::And,
        }
    }

    /// The operator symbol used when printing.
    pub fn symbol(self) -> &'static str {
        match self {
            Connective::And => "&",
            Connective::Or => "|",
        }
    }

    /// Splices the operands of any operand using this same connective into the list.
    pub fn flatten(self, operands: impl IntoIterator<Item = Node>) -> Vec<Node> {
        let mut out = Vec::new();
        for operand in operands {
            match (self, operand) {
                (Connective::And, Node::And(inner)) | (Connective::Or, Node::Or(inner)) => {
                    out.extend(self.flatten(inner));
                },
                (_, operand) => out.push(operand),
            }
        }
        out
    }

    /// Builds a node of this connective over the flattened operands. The number of operands is
    /// left as is, even when it is zero or one.
    pub fn build(self, operands: impl IntoIterator<Item = Node>) -> Node {
        let operands = self.flatten(operands);
        match self {
            Connective::And => Node::And(operands),
            Connective::Or => Node::Or(operands),
        }
    }

    /// Builds a node of this connective over the flattened operands, collapsing an empty list to
    /// the [identity](Self::identity) constant and a single operand to itself.
    pub fn collapse(self, operands: impl IntoIterator<Item = Node>) -> Node {
        let mut operands = self.flatten(operands);
        match operands.len() {
            0 => Node::Const(self.identity()),
            1 => operands.remove(0),
            _ => self.build(operands),
        }
    }
}

impl fmt::Display for Connective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Connective::And => write!(f, "AND"),
            Connective::Or => write!(f, "OR"),
        }
    }
}
