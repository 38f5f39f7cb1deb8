//! Evaluation of expressions and exhaustive truth tables.

use bool_parser::Node;
use std::{collections::{BTreeSet, HashMap}, fmt};

#[cfg(feature = "serde")]
use serde::Serialize;

/// Evaluates the expression, looking up the value of each variable with the given function.
pub fn eval(node: &Node, lookup: &dyn Fn(&str) -> bool) -> bool {
    match node {
        Node::Const(value) => *value,
        Node::Var(name) => lookup(name),
        Node::Not(inner) => !eval(inner, lookup),
        Node::And(operands) => operands.iter().all(|operand| eval(operand, lookup)),
        Node::Or(operands) => operands.iter().any(|operand| eval(operand, lookup)),
    }
}

/// Returns the names of the variables in the expression, sorted and without duplicates.
pub fn variables(node: &Node) -> Vec<String> {
    fn collect<'a>(node: &'a Node, names: &mut BTreeSet<&'a str>) {
        match node {
            Node::Const(_) => (),
            Node::Var(name) => {
                names.insert(name);
            },
            Node::Not(inner) => collect(inner, names),
            Node::And(operands) | Node::Or(operands) => {
                operands.iter().for_each(|operand| collect(operand, names));
            },
        }
    }

    let mut names = BTreeSet::new();
    collect(node, &mut names);
    names.into_iter().map(str::to_owned).collect()
}

/// The largest number of distinct variables that [`truth_table`] and [`equivalent`] will
/// enumerate.
pub const MAX_VARIABLES: usize = 32;

/// An expression has too many variables to enumerate every assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TooManyVariables {
    /// The number of distinct variables found.
    pub count: usize,
}

impl fmt::Display for TooManyVariables {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cannot enumerate {} variables (at most {} are supported)",
            self.count,
            MAX_VARIABLES,
        )
    }
}

impl std::error::Error for TooManyVariables {}

/// Calls `f` once for every assignment of values to the given variables, counting up in binary
/// with the first variable as the most significant bit. Stops early if `f` returns false.
fn for_each_assignment(
    variables: &[String],
    mut f: impl FnMut(&[bool]) -> bool,
) -> Result<bool, TooManyVariables> {
    let count = variables.len();
    if count > MAX_VARIABLES {
        return Err(TooManyVariables { count });
    }

    let mut values = vec![false; count];
    for row in 0..1u64 << count {
        for (i, value) in values.iter_mut().enumerate() {
            *value = (row >> (count - 1 - i)) & 1 == 1;
        }
        if !f(&values) {
            return Ok(false);
        }
    }
    Ok(true)
}

fn lookup_in<'a>(variables: &'a [String], values: &'a [bool]) -> impl Fn(&str) -> bool + 'a {
    let map = variables.iter()
        .map(String::as_str)
        .zip(values.iter().copied())
        .collect::<HashMap<_, _>>();
    move |name: &str| map.get(name).copied().unwrap_or(false)
}

/// One row of a [`TruthTable`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Row {
    /// The value of each variable, in the same order as [`TruthTable::variables`].
    pub values: Vec<bool>,

    /// The value of the expression.
    pub result: bool,
}

/// The value of an expression under every assignment of its variables.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct TruthTable {
    /// The variables of the expression, sorted.
    pub variables: Vec<String>,

    /// One row per assignment, `2^n` in total.
    pub rows: Vec<Row>,
}

/// Builds the truth table of the expression.
///
/// The table has `2^n` rows for `n` variables. Fails if `n` is above [`MAX_VARIABLES`].
pub fn truth_table(node: &Node) -> Result<TruthTable, TooManyVariables> {
    let variables = variables(node);
    let mut rows = Vec::with_capacity(1 << variables.len().min(16));
    for_each_assignment(&variables, |values| {
        let result = eval(node, &lookup_in(&variables, values));
        rows.push(Row { values: values.to_vec(), result });
        true
    })?;
    Ok(TruthTable { variables, rows })
}

/// Returns true if the two expressions have the same value under every assignment of the
/// variables in either of them. Fails if there are more than [`MAX_VARIABLES`] of those.
pub fn equivalent(a: &Node, b: &Node) -> Result<bool, TooManyVariables> {
    let mut names = variables(a);
    names.extend(variables(b));
    names.sort();
    names.dedup();

    for_each_assignment(&names, |values| {
        let lookup = lookup_in(&names, values);
        eval(a, &lookup) == eval(b, &lookup)
    })
}

impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bit = |value: bool| if value { '1' } else { '0' };

        for name in &self.variables {
            write!(f, "{} ", name)?;
        }
        writeln!(f, "| =")?;

        for row in &self.rows {
            for (name, value) in self.variables.iter().zip(&row.values) {
                write!(f, "{:<width$} ", bit(*value), width = name.chars().count())?;
            }
            writeln!(f, "| {}", bit(row.result))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use bool_parser::parse;
    use pretty_assertions::assert_eq;
    use super::*;

    fn expr(source: &str) -> Node {
        parse(source).unwrap()
    }

    #[test]
    fn eval_with_lookup() {
        let node = expr("A & ~B | C");
        assert!(eval(&node, &|name| name == "A"));
        assert!(!eval(&node, &|name| name == "B"));
        assert!(eval(&node, &|name| name == "C"));
    }

    #[test]
    fn eval_constants() {
        assert!(eval(&expr("1"), &|_| false));
        assert!(!eval(&expr("~1 | 0"), &|_| true));
    }

    #[test]
    fn variables_are_sorted_and_unique() {
        assert_eq!(variables(&expr("b & a | ~b & C & 1")), vec!["C", "a", "b"]);
        assert_eq!(variables(&expr("0 | 1")), Vec::<String>::new());
    }

    #[test]
    fn table_rows_count_up() {
        let table = truth_table(&expr("A | B")).unwrap();
        assert_eq!(table.variables, vec!["A", "B"]);
        assert_eq!(table.rows, vec![
            Row { values: vec![false, false], result: false },
            Row { values: vec![false, true], result: true },
            Row { values: vec![true, false], result: true },
            Row { values: vec![true, true], result: true },
        ]);
    }

    #[test]
    fn table_of_constant() {
        let table = truth_table(&expr("~0")).unwrap();
        assert_eq!(table.variables, Vec::<String>::new());
        assert_eq!(table.rows, vec![Row { values: vec![], result: true }]);
    }

    #[test]
    fn table_display() {
        let table = truth_table(&expr("x1 & ~y")).unwrap();
        assert_eq!(table.to_string(), "\
x1 y | =
0  0 | 0
0  1 | 0
1  0 | 1
1  1 | 0
");
    }

    #[test]
    fn equivalence() {
        assert_eq!(equivalent(&expr("~(A & B)"), &expr("~A | ~B")), Ok(true));
        assert_eq!(equivalent(&expr("A & B | A & ~B"), &expr("A")), Ok(true));
        assert_eq!(equivalent(&expr("A | ~A"), &expr("1")), Ok(true));
        assert_eq!(equivalent(&expr("A & B"), &expr("A | B")), Ok(false));
        assert_eq!(equivalent(&expr("A"), &expr("B")), Ok(false));
    }

    /// `x0 op x1 op ... op x{count - 1}`
    fn chain(count: usize, op: &str) -> Node {
        expr(&(0..count).map(|i| format!("x{}", i)).collect::<Vec<_>>().join(op))
    }

    #[test]
    fn too_many_variables_for_table() {
        let wide = chain(MAX_VARIABLES + 1, " & ");
        assert_eq!(truth_table(&wide), Err(TooManyVariables { count: MAX_VARIABLES + 1 }));
    }

    #[test]
    fn too_many_variables_for_equivalence() {
        let wide = chain(200, " | ");
        assert_eq!(equivalent(&wide, &wide), Err(TooManyVariables { count: 200 }));
        assert_eq!(
            TooManyVariables { count: 200 }.to_string(),
            "cannot enumerate 200 variables (at most 32 are supported)",
        );
    }

    #[test]
    fn variables_of_both_sides_are_counted() {
        let left = chain(MAX_VARIABLES, " & ");
        assert_eq!(
            equivalent(&left, &expr("extra")),
            Err(TooManyVariables { count: MAX_VARIABLES + 1 }),
        );
    }
}
