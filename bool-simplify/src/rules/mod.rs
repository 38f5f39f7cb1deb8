//! The rewrite engine: one bottom-up pass of boolean algebra laws.
//!
//! Each rule in this module is a function that takes the expression to simplify as an argument,
//! and returns `Some(expr)` with the rewritten expression if the rule applies, or `None` if it
//! does not. At most one rule is applied to each node per pass; rules are tried in a fixed order
//! and the first one that applies wins.

pub mod junction;
pub mod not;

use bool_parser::Node;
use crate::{step::Step, step_collector::StepCollector};

/// If the expression is a negation, calls the given transformation function with the negated
/// expression.
///
/// Returns `Some(expr)` with the transformed expression if a transformation was applied.
pub(crate) fn do_not(expr: &Node, f: impl Fn(&Node) -> Option<Node>) -> Option<Node> {
    f(expr.as_not()?)
}

/// Applies the first rule that matches the expression itself, without looking at its operands.
pub fn all(expr: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    not::all(expr, step_collector)
        .or_else(|| junction::all(expr, step_collector))
}

/// Performs one bottom-up pass over the expression: the operands of every node are rewritten
/// before the node itself.
pub fn step(expr: &Node, step_collector: &mut dyn StepCollector<Step>) -> Node {
    let expr = match expr {
        Node::Const(_) | Node::Var(_) => return expr.clone(),
        Node::Not(inner) => Node::not(step(inner, step_collector)),
        Node::And(operands) | Node::Or(operands) => {
            let stepped = operands.iter()
                .map(|operand| step(operand, step_collector))
                .collect::<Vec<_>>();
            if matches!(expr, Node::And(_)) {
                Node::and(stepped)
            } else {
                Node::or(stepped)
            }
        },
    };

    all(&expr, step_collector).unwrap_or(expr)
}
