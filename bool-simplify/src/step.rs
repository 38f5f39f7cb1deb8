use bool_parser::{Connective, Node};
use crate::step_collector::StepCollector;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Serialize, Serializer};

/// A law of boolean algebra applied by the simplifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// `~~x = x`
    DoubleNegation,

    /// `~(a & b) = ~a | ~b`
    /// `~(a | b) = ~a & ~b`
    DeMorgan,

    /// `~0 = 1`
    /// `~1 = 0`
    ConstantComplement,

    /// `x & 1 = x`
    /// `x | 0 = x`
    Identity(Connective),

    /// `x & 0 = 0`
    /// `x | 1 = 1`
    Annihilation(Connective),

    /// `x & x = x`
    /// `x | x = x`
    Idempotence(Connective),

    /// `x & ~x = 0`
    /// `x | ~x = 1`
    Complement(Connective),

    /// `a & (a | b) = a`
    /// `a | (a & b) = a`
    Absorption(Connective),

    /// `(a | b) & (a | ~b) = a`
    /// `(a & b) | (a & ~b) = a`
    Combining(Connective),
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (law, connective) = match self {
            Rule::DoubleNegation => return write!(f, "Double-Negation"),
            Rule::DeMorgan => return write!(f, "De-Morgan"),
            Rule::ConstantComplement => return write!(f, "Complement-NOT"),
            Rule::Identity(c) => ("Identity", c),
            Rule::Annihilation(c) => ("Annihilation", c),
            Rule::Idempotence(c) => ("Idempotence", c),
            Rule::Complement(c) => ("Complement", c),
            Rule::Absorption(c) => ("Absorption", c),
            Rule::Combining(c) => ("Combining", c),
        };
        write!(f, "{}-{}", law, connective)
    }
}

#[cfg(feature = "serde")]
impl Serialize for Rule {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One application of a [`Rule`], with the printed forms of the expression it was applied to and
/// the expression it produced.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Step {
    /// The law that was applied.
    pub rule: Rule,

    /// The printed form of the subexpression before the rule was applied.
    pub before: String,

    /// The printed form of the subexpression after the rule was applied.
    pub after: String,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} => {}", self.rule, self.before, self.after)
    }
}

/// Pushes a step onto the collector, unless the printed forms of `before` and `after` are equal.
pub(crate) fn record(
    step_collector: &mut dyn StepCollector<Step>,
    rule: Rule,
    before: &Node,
    after: &Node,
) {
    if !step_collector.is_collecting() {
        return;
    }

    let (before, after) = (before.to_string(), after.to_string());
    if before != after {
        step_collector.push(Step { rule, before, after });
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn rule_names() {
        assert_eq!(Rule::DoubleNegation.to_string(), "Double-Negation");
        assert_eq!(Rule::DeMorgan.to_string(), "De-Morgan");
        assert_eq!(Rule::ConstantComplement.to_string(), "Complement-NOT");
        assert_eq!(Rule::Identity(Connective::And).to_string(), "Identity-AND");
        assert_eq!(Rule::Absorption(Connective::Or).to_string(), "Absorption-OR");
        assert_eq!(Rule::Combining(Connective::Or).to_string(), "Combining-OR");
    }

    #[test]
    fn record_skips_unchanged_text() {
        let mut steps = Vec::new();
        let a = Node::var("A");
        record(&mut steps, Rule::Idempotence(Connective::And), &a, &a);
        assert_eq!(steps, vec![]);

        record(&mut steps, Rule::DoubleNegation, &Node::not(Node::not(a.clone())), &a);
        assert_eq!(steps, vec![Step {
            rule: Rule::DoubleNegation,
            before: "~~A".to_string(),
            after: "A".to_string(),
        }]);
        assert_eq!(steps[0].to_string(), "Double-Negation: ~~A => A");
    }

    #[test]
    fn record_into_unit_discards() {
        record(&mut (), Rule::DoubleNegation, &Node::not(Node::not(Node::var("A"))), &Node::var("A"));
    }
}
