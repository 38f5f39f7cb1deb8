//! Rule-based simplification of boolean expressions.
//!
//! # Expression representation
//!
//! Expressions are the [`Node`] trees produced by [`bool_parser`]. `&` and `|` are **n-ary** and
//! flattened, so `A & (B & C)` is a single [`Node::And`] with three operands. Rules that look for
//! pairs of siblings, such as `A & ~A`, rely on this to see every sibling at once.
//!
//! # Normalization
//!
//! [`normalize()`] rewrites an expression into a canonical shape: nested junctions are flattened,
//! constants are folded, duplicate operands are removed, and operands are sorted by their printed
//! text. Two expressions that differ only in operand order normalize to the same tree.
//!
//! # Simplification
//!
//! [`simplify()`] alternates a bottom-up [rewrite pass](rules::step) with normalization until the
//! printed form of the expression stops changing. Each pass applies at most one law of boolean
//! algebra to each node; the laws are defined in [`rules`].
//!
//! ```
//! use bool_parser::{parse, render};
//! use bool_simplify::simplify;
//!
//! let expr = parse("(A & B) | (A & ~B)").unwrap();
//! let simplified = simplify(&expr);
//! assert_eq!(render(&simplified.result), "A");
//! assert_eq!(simplified.steps[0].to_string(), "Combining-OR: A & B | A & ~B => A");
//! ```
//!
//! Every rule applied is recorded as a [`Step`]. To skip recording, pass `()` as the
//! [`StepCollector`] to [`simplify_with_steps`].

pub mod canonical;
pub mod eval;
pub mod normalize;
pub mod record;
pub mod rules;
pub mod simplify;
pub mod step;
pub mod step_collector;

pub use bool_parser::Node;
pub use eval::{equivalent, eval, truth_table, variables, Row, TooManyVariables, TruthTable, MAX_VARIABLES};
pub use normalize::{normalize, normalize_with};
pub use record::{clean_source, Record};
pub use simplify::{
    simplify,
    simplify_with,
    simplify_with_steps,
    NonConvergence,
    Simplified,
    SimplifyOptions,
    SimplifyOptionsBuilder,
    DEFAULT_MAX_ITERATIONS,
};
pub use step::{Rule, Step};
pub use step_collector::StepCollector;
