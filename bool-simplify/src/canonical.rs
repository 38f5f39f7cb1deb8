//! Structural equality that ignores operand order.
//!
//! Two expressions are **canonically equal** if they are the same kind of node and, for `&` and
//! `|`, their operands are pairwise canonically equal after sorting. The comparison is performed
//! on a canonical key string: each commutative node's operand keys are sorted before being joined,
//! so `A & B` and `B & A` share the key `AND(VAR(A),VAR(B))`.

use bool_parser::Node;
use std::collections::HashSet;

/// Returns the canonical key of the node.
pub fn canonical_key(node: &Node) -> String {
    match node {
        Node::Const(value) => format!("CONST({})", u8::from(*value)),
        Node::Var(name) => format!("VAR({})", name),
        Node::Not(inner) => format!("NOT({})", canonical_key(inner)),
        Node::And(operands) | Node::Or(operands) => {
            let tag = if matches!(node, Node::And(_)) { "AND" } else { "OR" };
            let mut keys = operands.iter().map(canonical_key).collect::<Vec<_>>();
            keys.sort();
            format!("{}({})", tag, keys.join(","))
        },
    }
}

/// Returns the canonical key of the negation of the node whose canonical key is `key`.
pub fn negated_key(key: &str) -> String {
    format!("NOT({})", key)
}

/// Returns true if the two keys belong to nodes where one is the negation of the other.
pub fn keys_are_complements(a: &str, b: &str) -> bool {
    a == negated_key(b) || b == negated_key(a)
}

/// Removes operands that are canonically equal to an earlier operand, keeping the first occurrence
/// of each.
pub fn dedup_canonical(operands: impl IntoIterator<Item = Node>) -> Vec<Node> {
    let mut seen = HashSet::new();
    operands
        .into_iter()
        .filter(|operand| seen.insert(canonical_key(operand)))
        .collect()
}
