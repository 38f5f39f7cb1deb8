//! Simplification rules for `&` and `|`.
//!
//! Every rule is written once for both connectives. Where a rule mentions a constant, `&` uses
//! the connective's [identity](Connective::identity) `1` and [annihilator](Connective::annihilator)
//! `0`, and `|` uses them the other way around.
//!
//! Rules that compare operands do so through a [`Junction`], which computes the canonical key of
//! every operand (and of every operand's own operands) once per node.

use bool_parser::{Connective, Node};
use crate::{
    canonical::{canonical_key, keys_are_complements, negated_key},
    step::{record, Rule, Step},
    step_collector::StepCollector,
};
use std::collections::HashSet;

/// The operands of a `&` or `|` node, along with their canonical keys.
#[derive(Debug, Clone)]
pub struct Junction<'a> {
    /// The connective joining the operands.
    pub connective: Connective,

    /// The operands.
    pub operands: &'a [Node],

    /// The canonical key of each operand.
    keys: Vec<String>,

    /// For each operand that is a junction of the dual connective, the canonical keys of its own
    /// operands.
    inner_keys: Vec<Option<Vec<String>>>,
}

impl<'a> Junction<'a> {
    /// Computes the canonical keys of the given operands.
    pub fn new(connective: Connective, operands: &'a [Node]) -> Self {
        let dual = connective.dual();
        Self {
            connective,
            operands,
            keys: operands.iter().map(canonical_key).collect(),
            inner_keys: operands.iter()
                .map(|operand| {
                    operand.operands_of(dual)
                        .map(|inner| inner.iter().map(canonical_key).collect())
                })
                .collect(),
        }
    }

    /// Builds a node of this junction's connective from the operands at the indices for which
    /// `keep` returns true.
    fn collapse_where(&self, keep: impl Fn(usize) -> bool) -> Node {
        self.connective.collapse(
            self.operands.iter()
                .enumerate()
                .filter(|(i, _)| keep(*i))
                .map(|(_, operand)| operand.clone())
        )
    }
}

/// `a & 1 = a`
/// `a | 0 = a`
pub fn identity(connective: Connective, operands: &[Node]) -> Option<Node> {
    let identity = connective.identity();
    if !operands.iter().any(|operand| operand.is_const(identity)) {
        return None;
    }

    Some(connective.collapse(
        operands.iter()
            .filter(|operand| !operand.is_const(identity))
            .cloned()
    ))
}

/// `a & 0 = 0`
/// `a | 1 = 1`
pub fn annihilation(connective: Connective, operands: &[Node]) -> Option<Node> {
    let annihilator = connective.annihilator();
    operands.iter()
        .any(|operand| operand.is_const(annihilator))
        .then_some(Node::Const(annihilator))
}

/// `a & a = a`
/// `a | a = a`
pub fn idempotence(junction: &Junction) -> Option<Node> {
    let mut seen = HashSet::new();
    let first = junction.keys.iter()
        .map(|key| seen.insert(key.as_str()))
        .collect::<Vec<_>>();

    if seen.len() == junction.operands.len() {
        None
    } else {
        Some(junction.collapse_where(|i| first[i]))
    }
}

/// `a & ~a = 0`
/// `a | ~a = 1`
pub fn complement(junction: &Junction) -> Option<Node> {
    let keys = junction.keys.iter().map(String::as_str).collect::<HashSet<_>>();
    junction.keys.iter()
        .any(|key| keys.contains(negated_key(key).as_str()))
        .then_some(Node::Const(junction.connective.annihilator()))
}

/// `a & (a | b) = a`
/// `a | (a & b) = a`
///
/// Every operand that contains a copy of another remaining operand `a` is removed in one
/// application, so `a | a & b | a & c` becomes `a`. Operands that absorb nothing and are not
/// absorbed are kept.
pub fn absorption(junction: &Junction) -> Option<Node> {
    let count = junction.operands.len();
    let mut absorbed = vec![false; count];

    for i in 0..count {
        if absorbed[i] {
            continue;
        }

        let key = &junction.keys[i];
        for j in 0..count {
            if j == i || absorbed[j] {
                continue;
            }
            if junction.inner_keys[j].as_ref().is_some_and(|inner| inner.contains(key)) {
                absorbed[j] = true;
            }
        }
    }

    absorbed.contains(&true)
        .then(|| junction.collapse_where(|i| !absorbed[i]))
}

/// If the two key lists are equal apart from exactly one key each, and those two keys are
/// complements, returns the index in `x` of the differing key.
fn complementary_difference(x: &[String], y: &[String]) -> Option<usize> {
    let mut x_only = (0..x.len()).filter(|&i| !y.contains(&x[i]));
    let mut y_only = y.iter().filter(|key| !x.contains(key));

    let (Some(p), None) = (x_only.next(), x_only.next()) else { return None };
    let (Some(q), None) = (y_only.next(), y_only.next()) else { return None };
    keys_are_complements(&x[p], q).then_some(p)
}

/// `(a | b) & (a | ~b) = a`
/// `(a & b) | (a & ~b) = a`
///
/// Applies to two operands of the dual connective whose operands are the same apart from one
/// operand each, where those two are complements of each other. The pair is replaced by their
/// shared operands. Every disjoint pair is merged in one application, pairing each operand with
/// the first later operand that matches it.
pub fn combining(junction: &Junction) -> Option<Node> {
    let dual = junction.connective.dual();
    let count = junction.operands.len();
    let mut used = vec![false; count];
    let mut merged = vec![None; count];

    for i in 0..count {
        let Some(x_keys) = junction.inner_keys[i].as_ref().filter(|_| !used[i]) else {
            continue;
        };

        for j in i + 1..count {
            let Some(y_keys) = junction.inner_keys[j].as_ref().filter(|_| !used[j]) else {
                continue;
            };
            let Some(p) = complementary_difference(x_keys, y_keys) else {
                continue;
            };

            let x_inner = junction.operands[i].operands_of(dual).unwrap_or_default();
            merged[i] = Some(dual.collapse(
                x_inner.iter()
                    .enumerate()
                    .filter(|(k, _)| *k != p)
                    .map(|(_, operand)| operand.clone())
            ));
            used[i] = true;
            used[j] = true;
            break;
        }
    }

    if !used.contains(&true) {
        return None;
    }

    Some(junction.connective.collapse(
        junction.operands.iter()
            .zip(merged)
            .zip(&used)
            .filter_map(|((operand, merged), used)| match merged {
                Some(merged) => Some(merged),
                None => (!used).then(|| operand.clone()),
            })
    ))
}

/// Applies the first `&` / `|` rule that matches, in this order: identity, annihilation,
/// idempotence, complement, absorption, combining.
pub fn all(expr: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let (c, operands) = expr.as_junction()?;
    let (rule, result) = identity(c, operands).map(|n| (Rule::Identity(c), n))
        .or_else(|| annihilation(c, operands).map(|n| (Rule::Annihilation(c), n)))
        .or_else(|| {
            let junction = Junction::new(c, operands);
            idempotence(&junction).map(|n| (Rule::Idempotence(c), n))
                .or_else(|| complement(&junction).map(|n| (Rule::Complement(c), n)))
                .or_else(|| absorption(&junction).map(|n| (Rule::Absorption(c), n)))
                .or_else(|| combining(&junction).map(|n| (Rule::Combining(c), n)))
        })?;

    record(step_collector, rule, expr, &result);
    Some(result)
}

#[cfg(test)]
mod tests {
    use bool_parser::{parse, render};
    use pretty_assertions::assert_eq;
    use super::*;

    /// Applies all rules once to the top-level node and returns the rule and printed result.
    fn apply(source: &str) -> Option<(Rule, String)> {
        let mut steps = Vec::new();
        let result = all(&parse(source).unwrap(), &mut steps)?;
        Some((steps.first()?.rule, render(&result)))
    }

    fn and(rule: fn(Connective) -> Rule, result: &str) -> Option<(Rule, String)> {
        Some((rule(Connective::And), result.to_string()))
    }

    fn or(rule: fn(Connective) -> Rule, result: &str) -> Option<(Rule, String)> {
        Some((rule(Connective::Or), result.to_string()))
    }

    #[test]
    fn identity_drops_constants() {
        assert_eq!(apply("A & 1"), and(Rule::Identity, "A"));
        assert_eq!(apply("A & 1 & B"), and(Rule::Identity, "A & B"));
        assert_eq!(apply("0 | B"), or(Rule::Identity, "B"));
        assert_eq!(identity(Connective::And, &[Node::Const(true), Node::Const(true)]), Some(Node::Const(true)));
    }

    #[test]
    fn annihilation_forces_constant() {
        assert_eq!(apply("A & 0 & B"), and(Rule::Annihilation, "0"));
        assert_eq!(apply("A | 1"), or(Rule::Annihilation, "1"));
    }

    #[test]
    fn identity_takes_priority_over_annihilation() {
        assert_eq!(apply("1 & 0"), and(Rule::Identity, "0"));
    }

    #[test]
    fn idempotence_ignores_operand_order() {
        assert_eq!(apply("A & A"), and(Rule::Idempotence, "A"));
        assert_eq!(apply("(A | B) & C & (B | A)"), and(Rule::Idempotence, "(A | B) & C"));
        assert_eq!(apply("x | y | x | y"), or(Rule::Idempotence, "x | y"));
    }

    #[test]
    fn complement_of_pair() {
        assert_eq!(apply("A & ~A"), and(Rule::Complement, "0"));
        assert_eq!(apply("B | ~A | A"), or(Rule::Complement, "1"));
        assert_eq!(apply("(A | B) & ~(B | A)"), and(Rule::Complement, "0"));
    }

    #[test]
    fn absorption_of_two_operands() {
        assert_eq!(apply("A | A & B"), or(Rule::Absorption, "A"));
        assert_eq!(apply("(A | B) & A"), and(Rule::Absorption, "A"));
    }

    #[test]
    fn absorption_keeps_other_operands() {
        assert_eq!(apply("A & (A | B) & C"), and(Rule::Absorption, "A & C"));
        assert_eq!(apply("C | A | ~B & A"), or(Rule::Absorption, "C | A"));
    }

    #[test]
    fn absorption_with_compound_operand() {
        assert_eq!(apply("~(A & B) | ~(B & A) & C"), or(Rule::Absorption, "~(A & B)"));
    }

    #[test]
    fn combining_adjacent_terms() {
        assert_eq!(apply("A & B | A & ~B"), or(Rule::Combining, "A"));
        assert_eq!(apply("(A | B) & (A | ~B)"), and(Rule::Combining, "A"));
        assert_eq!(apply("A & B & C | A & ~B & C | D"), or(Rule::Combining, "A & C | D"));
    }

    #[test]
    fn absorption_removes_every_absorbed_operand() {
        assert_eq!(apply("A | A & B | A & C | D"), or(Rule::Absorption, "A | D"));
        assert_eq!(apply("A & (A | B) & (A | C)"), and(Rule::Absorption, "A"));
        assert_eq!(apply("A | A & B | A & B & C"), or(Rule::Absorption, "A"));
    }

    #[test]
    fn absorption_by_later_operand() {
        assert_eq!(apply("A & B | C & D | A"), or(Rule::Absorption, "C & D | A"));
    }

    #[test]
    fn combining_merges_disjoint_pairs_at_once() {
        assert_eq!(apply("A & B | A & ~B | C & D | C & ~D"), or(Rule::Combining, "A | C"));
        assert_eq!(
            apply("(x | y) & (x | ~y) & (z | w) & (z | ~w)"),
            and(Rule::Combining, "x & z"),
        );
    }

    #[test]
    fn combining_keeps_unpaired_operands() {
        assert_eq!(apply("A & B | A & ~B | A & C"), or(Rule::Combining, "A | A & C"));
    }

    #[test]
    fn junction_keys_cover_dual_operands_only() {
        let operands = [parse("A & B").unwrap(), parse("C").unwrap()];
        let junction = Junction::new(Connective::Or, &operands);
        assert_eq!(junction.inner_keys, vec![Some(vec!["VAR(A)".to_string(), "VAR(B)".to_string()]), None]);
        assert_eq!(junction.keys, vec!["AND(VAR(A),VAR(B))".to_string(), "VAR(C)".to_string()]);
    }

    #[test]
    fn combining_of_single_literals() {
        // `B & A | ~B & A`: the shared part is `A`
        assert_eq!(apply("B & A | ~B & A"), or(Rule::Combining, "A"));
    }

    #[test]
    fn combining_requires_exactly_one_difference() {
        assert_eq!(apply("A & B | ~A & ~B"), None);
        assert_eq!(apply("A & B | A & C"), None);
        assert_eq!(apply("A & B & C | A & ~B"), None);
    }

    #[test]
    fn nothing_applies() {
        assert_eq!(apply("A & B"), None);
        assert_eq!(apply("A | B & C"), None);
        assert_eq!(apply("~A"), None);
    }
}
