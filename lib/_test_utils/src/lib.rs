use color_eyre::eyre::ensure;
use quickcheck::{Arbitrary, Gen};

use truth_nexus::core::{Classification, TruthTable};

pub struct Fixture {
    pub formula: &'static str,
    pub variables: &'static [&'static str],
    pub classification: Classification,
}

pub const FIXTURES: &[Fixture] = &[
    Fixture {
        formula: "p ∨ ¬p",
        variables: &["p"],
        classification: Classification::Tautology,
    },
    Fixture {
        formula: "p /\\ ~p",
        variables: &["p"],
        classification: Classification::Contradiction,
    },
    Fixture {
        formula: "¬(A ∧ B) <-> (¬A ∨ ¬B)",
        variables: &["A", "B"],
        classification: Classification::Tautology,
    },
    Fixture {
        formula: "(A -> B) && (B -> C) -> (A -> C)",
        variables: &["A", "B", "C"],
        classification: Classification::Tautology,
    },
    Fixture {
        formula: "(A ∨ B) ∧ ¬C",
        variables: &["A", "B", "C"],
        classification: Classification::Contingency,
    },
    Fixture {
        formula: "p → (q ∧ r)",
        variables: &["p", "q", "r"],
        classification: Classification::Contingency,
    },
    Fixture {
        formula: "(rain → wet) ∧ rain ∧ ¬wet",
        variables: &["rain", "wet"],
        classification: Classification::Contradiction,
    },
    Fixture {
        formula: "x1 ↔ x2 ↔ x3",
        variables: &["x1", "x2", "x3"],
        classification: Classification::Contingency,
    },
];

/// Check the shape invariants every table must satisfy: `2^n` rows in every
/// column, and row `r` setting `variables[j]` to bit `n - 1 - j` of `r`.
pub fn check_table_shape(table: &TruthTable) -> color_eyre::Result<()> {
    let n = table.variables().len();
    ensure!(table.num_rows() == 1 << n, "expected {} rows, got {}", 1 << n, table.num_rows());

    for column in table.columns() {
        ensure!(
            column.results.len() == table.num_rows(),
            "column {:?} has {} results",
            column.expr,
            column.results.len()
        );
    }

    for (r, assignment) in table.assignments().iter().enumerate() {
        for (j, v) in table.variables().iter().enumerate() {
            let expected = (r >> (n - 1 - j)) & 1 == 1;
            ensure!(
                assignment.get(v) == Some(expected),
                "row {} has {} = {:?}, expected {}",
                r,
                v,
                assignment.get(v),
                expected
            );
        }
    }

    Ok(())
}

/// Render a result column as a compact string like `"TTFT"`.
pub fn column_bits(table: &TruthTable, expr: &str) -> Option<String> {
    table
        .column(expr)
        .map(|results| results.iter().map(|t| t.to_string()).collect())
}

/// A random well-formed formula over a handful of variables, written with a
/// mix of canonical symbols and ASCII spellings.
#[derive(Debug, Clone)]
pub struct ArbFormula(pub String);

const VARIABLES: &[&str] = &["A", "B", "C", "p1", "q_2"];
const BINARY_OPS: &[&str] = &["∧", "∨", "→", "↔", "&&", "||", "->", "<->", "/\\", "\\/"];
const NEGATIONS: &[&str] = &["¬", "~", "!"];

fn arbitrary_formula(g: &mut Gen, depth: u32) -> String {
    let var = |g: &mut Gen| g.choose(VARIABLES).copied().unwrap_or("A").to_string();
    if depth == 0 {
        return var(g);
    }
    match u8::arbitrary(g) % 4 {
        0 => var(g),
        1 => {
            let not = g.choose(NEGATIONS).copied().unwrap_or("¬");
            format!("{}{}", not, arbitrary_formula(g, depth - 1))
        }
        2 => format!("({})", arbitrary_formula(g, depth - 1)),
        _ => {
            let op = g.choose(BINARY_OPS).copied().unwrap_or("∧");
            let lhs = arbitrary_formula(g, depth - 1);
            let rhs = arbitrary_formula(g, depth - 1);
            format!("{} {} {}", lhs, op, rhs)
        }
    }
}

impl Arbitrary for ArbFormula {
    fn arbitrary(g: &mut Gen) -> Self {
        ArbFormula(arbitrary_formula(g, 4))
    }
}
