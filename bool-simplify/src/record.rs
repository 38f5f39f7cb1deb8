//! The exportable record of one simplification.

use bool_error::Error;
use bool_parser::{parse, render};
use crate::{
    simplify::{simplify_with, Simplified, SimplifyOptions},
    step::Step,
};

#[cfg(feature = "serde")]
use serde::Serialize;

/// Cleans up source text for display: `·` becomes `&`, runs of whitespace become a single space,
/// and leading and trailing whitespace is removed.
pub fn clean_source(source: &str) -> String {
    source.replace('·', "&")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// A summary of one simplification, suitable for export.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Record {
    /// The source text exactly as given.
    pub original: String,

    /// The source text after [`clean_source`].
    pub normalized: String,

    /// The printed form of the simplified expression.
    pub simplified: String,

    /// Every rule applied, in order.
    pub steps: Vec<Step>,
}

impl Record {
    /// Creates a record from source text and the result of simplifying it.
    pub fn new(original: &str, simplified: &Simplified) -> Self {
        Self {
            original: original.to_owned(),
            normalized: clean_source(original),
            simplified: render(&simplified.result),
            steps: simplified.steps.clone(),
        }
    }

    /// Parses and simplifies the source text, returning the record along with the full result.
    pub fn from_source(source: &str, options: SimplifyOptions) -> Result<(Self, Simplified), Error> {
        let expr = parse(source)?;
        let simplified = simplify_with(&expr, options);
        Ok((Self::new(source, &simplified), simplified))
    }
}

#[cfg(test)]
mod tests {
    use bool_parser::parser::error::UnexpectedToken;
    use pretty_assertions::assert_eq;
    use crate::step::Rule;
    use super::*;

    #[test]
    fn cleaning() {
        assert_eq!(clean_source("  A ·  B\t|\n~C  "), "A & B | ~C");
        assert_eq!(clean_source("A&B"), "A&B");
        assert_eq!(clean_source("   "), "");
    }

    #[test]
    fn record_of_de_morgan() {
        let (record, simplified) = Record::from_source(" ~(A · B) ", SimplifyOptions::default()).unwrap();
        assert_eq!(record, Record {
            original: " ~(A · B) ".to_string(),
            normalized: "~(A & B)".to_string(),
            simplified: "~A | ~B".to_string(),
            steps: vec![Step {
                rule: Rule::DeMorgan,
                before: "~(A & B)".to_string(),
                after: "~A | ~B".to_string(),
            }],
        });
        assert_eq!(simplified.non_convergence, None);
    }

    #[test]
    fn parse_errors_propagate() {
        let err = Record::from_source("A &", SimplifyOptions::default()).unwrap_err();
        assert!(err.downcast_ref::<UnexpectedToken>().is_some());
    }
}
