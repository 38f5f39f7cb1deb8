//! The fixed-point driver.
//!
//! [`simplify`] normalizes the input, then alternates a [rewrite pass](crate::rules::step) with
//! [normalization](crate::normalize()) until the printed form of the expression stops changing.
//! Every rule applied along the way is recorded as a [`Step`].

use bool_parser::Node;
use crate::{
    normalize::normalize_with,
    rules,
    step::Step,
    step_collector::StepCollector,
};
use std::fmt;

/// The default cap on the number of rewrite passes.
pub const DEFAULT_MAX_ITERATIONS: usize = 64;

/// Options that control the simplifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimplifyOptions {
    /// The maximum number of rewrite passes. If the expression is still changing after this many
    /// passes, simplification stops and reports [`NonConvergence`].
    pub max_iterations: usize,
}

impl Default for SimplifyOptions {
    fn default() -> Self {
        Self { max_iterations: DEFAULT_MAX_ITERATIONS }
    }
}

impl SimplifyOptions {
    /// Creates a builder starting from the default options.
    pub fn builder() -> SimplifyOptionsBuilder {
        SimplifyOptionsBuilder::new()
    }
}

/// A builder for [`SimplifyOptions`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SimplifyOptionsBuilder(SimplifyOptions);

impl SimplifyOptionsBuilder {
    /// Creates a new builder with the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum number of rewrite passes.
    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        self.0.max_iterations = max_iterations;
        self
    }

    /// Builds the options.
    pub fn build(self) -> SimplifyOptions {
        self.0
    }
}

/// The simplifier hit its iteration cap before reaching a fixed point.
///
/// This is a warning, not an error: the expression returned alongside it is still equivalent to
/// the input, just possibly not fully simplified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NonConvergence {
    /// The number of passes that were performed.
    pub iterations: usize,
}

impl fmt::Display for NonConvergence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "simplification did not reach a fixed point after {} iteration{}",
            self.iterations,
            if self.iterations == 1 { "" } else { "s" },
        )
    }
}

/// The output of [`simplify`].
#[derive(Debug, Clone, PartialEq)]
pub struct Simplified {
    /// The simplified expression.
    pub result: Node,

    /// Every rule applied, in order.
    pub steps: Vec<Step>,

    /// Set if the iteration cap was reached.
    pub non_convergence: Option<NonConvergence>,
}

/// Simplifies the expression with the default options.
pub fn simplify(expr: &Node) -> Simplified {
    simplify_with(expr, SimplifyOptions::default())
}

/// Simplifies the expression with the given options.
pub fn simplify_with(expr: &Node, options: SimplifyOptions) -> Simplified {
    let mut steps = Vec::new();
    let (result, non_convergence) = simplify_with_steps(expr, options, &mut steps);
    Simplified { result, steps, non_convergence }
}

/// Simplifies the expression, reporting each applied rule to the step collector.
///
/// Steps from the final pass, which by definition does not change the printed form of the
/// expression, are not reported.
pub fn simplify_with_steps(
    expr: &Node,
    options: SimplifyOptions,
    step_collector: &mut dyn StepCollector<Step>,
) -> (Node, Option<NonConvergence>) {
    let mut current = normalize_with(expr, step_collector);
    let mut current_text = current.to_string();

    let collecting = step_collector.is_collecting();
    let mut discarded = ();
    for _ in 0..options.max_iterations {
        let mut pending: Vec<Step> = Vec::new();
        let pass_collector: &mut dyn StepCollector<Step> = if collecting {
            &mut pending
        } else {
            &mut discarded
        };

        let stepped = rules::step(&current, pass_collector);
        let next = normalize_with(&stepped, pass_collector);
        let next_text = next.to_string();
        if next_text == current_text {
            return (current, None);
        }

        pending.into_iter().for_each(|step| step_collector.push(step));
        current = next;
        current_text = next_text;
    }

    (current, Some(NonConvergence { iterations: options.max_iterations }))
}
