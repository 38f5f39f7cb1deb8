//! Simplification rules for negations.

use bool_parser::Node;
use crate::{
    rules::do_not,
    step::{record, Rule, Step},
    step_collector::StepCollector,
};

/// `~~x = x`
pub fn double_negation(expr: &Node) -> Option<Node> {
    do_not(expr, |inner| inner.as_not().cloned())
}

/// `~(a & b & ...) = ~a | ~b | ...`
/// `~(a | b | ...) = ~a & ~b & ...`
pub fn de_morgan(expr: &Node) -> Option<Node> {
    do_not(expr, |inner| {
        let (connective, operands) = inner.as_junction()?;
        Some(connective.dual().build(operands.iter().cloned().map(Node::not)))
    })
}

/// `~0 = 1`
/// `~1 = 0`
pub fn constant_complement(expr: &Node) -> Option<Node> {
    do_not(expr, |inner| match inner {
        Node::Const(value) => Some(Node::Const(!value)),
        _ => None,
    })
}

/// Applies the first negation rule that matches.
pub fn all(expr: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let (rule, result) = double_negation(expr).map(|n| (Rule::DoubleNegation, n))
        .or_else(|| de_morgan(expr).map(|n| (Rule::DeMorgan, n)))
        .or_else(|| constant_complement(expr).map(|n| (Rule::ConstantComplement, n)))?;

    record(step_collector, rule, expr, &result);
    Some(result)
}
