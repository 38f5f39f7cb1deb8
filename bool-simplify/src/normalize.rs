//! Structural canonicalization.
//!
//! Normalization flattens nested junctions of the same connective, folds constants, removes
//! duplicate operands, and sorts the operands of every `&` and `|` by their printed text. The
//! result is deterministic for a given input, and normalizing it again changes nothing.
//!
//! Constant folding and duplicate removal are laws in their own right, so they are reported to
//! the step collector as [`Rule::Identity`], [`Rule::Annihilation`], and [`Rule::Idempotence`].
//! Flattening and reordering are not.

use bool_parser::{Connective, Node};
use crate::{
    canonical::dedup_canonical,
    step::{record, Rule, Step},
    step_collector::StepCollector,
};

/// Normalizes the node, discarding the steps taken.
pub fn normalize(node: &Node) -> Node {
    normalize_with(node, &mut ())
}

/// Normalizes the node, reporting constant folding and duplicate removal to the step collector.
pub fn normalize_with(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Node {
    match node {
        Node::Const(_) | Node::Var(_) => node.clone(),
        Node::Not(inner) => Node::not(normalize_with(inner, step_collector)),
        Node::And(operands) => normalize_junction(Connective::And, operands, step_collector),
        Node::Or(operands) => normalize_junction(Connective::Or, operands, step_collector),
    }
}

fn normalize_junction(
    connective: Connective,
    operands: &[Node],
    step_collector: &mut dyn StepCollector<Step>,
) -> Node {
    let identity = connective.identity();
    let annihilator = connective.annihilator();

    let mut operands = connective.flatten(
        operands.iter().map(|operand| normalize_with(operand, step_collector)),
    );

    if operands.iter().any(|operand| operand.is_const(identity)) {
        let before = connective.build(operands.clone());
        operands.retain(|operand| !operand.is_const(identity));
        record(step_collector, Rule::Identity(connective), &before, &connective.collapse(operands.clone()));
    }

    if operands.iter().any(|operand| operand.is_const(annihilator)) {
        let result = Node::Const(annihilator);
        record(step_collector, Rule::Annihilation(connective), &connective.build(operands), &result);
        return result;
    }

    let mut unique = dedup_canonical(operands.iter().cloned());
    if unique.len() < operands.len() {
        record(
            step_collector,
            Rule::Idempotence(connective),
            &connective.build(operands),
            &connective.collapse(unique.clone()),
        );
    }

    unique.sort_by_cached_key(Node::to_string);
    connective.collapse(unique)
}
